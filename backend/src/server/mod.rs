//! Server construction and middleware wiring.

use actix_multipart::form::MultipartFormConfig;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use crate::api::auth::login;
use crate::api::contact::contact;
use crate::api::health::{HealthState, live, ready};
use crate::api::home::home;
use crate::api::persons::{new_person, person_by_id, person_detail, update_person};
use crate::api::upload::post_image;
use crate::config::{AppConfig, PersonRegistry};
#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::ApiError;
use crate::middleware::Correlate;

/// Extractor failures become the shared validation envelope so malformed
/// input never reaches a handler and never leaks a framework-default body.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::validation(err.to_string()).into())
}

fn form_config() -> web::FormConfig {
    web::FormConfig::default()
        .error_handler(|err, _req| ApiError::validation(err.to_string()).into())
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| ApiError::validation(err.to_string()).into())
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| ApiError::validation(err.to_string()).into())
}

fn multipart_config() -> MultipartFormConfig {
    MultipartFormConfig::default()
        .error_handler(|err, _req| ApiError::validation(err.to_string()).into())
}

/// Assemble the application: endpoints, extractor error wiring, correlation
/// middleware, and (in debug builds) Swagger UI.
pub fn build_app(
    registry: web::Data<PersonRegistry>,
    health: web::Data<HealthState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(registry)
        .app_data(health)
        .app_data(json_config())
        .app_data(form_config())
        .app_data(query_config())
        .app_data(path_config())
        .app_data(multipart_config())
        .wrap(Correlate)
        .service(home)
        .service(new_person)
        // Exact route first so `/person/detail` never binds as a path id.
        .service(person_detail)
        .service(person_by_id)
        .service(update_person)
        .service(login)
        .service(contact)
        .service(post_image)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct the HTTP server from startup configuration, flipping the shared
/// readiness flag once the listener is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health: web::Data<HealthState>,
    config: AppConfig,
) -> std::io::Result<Server> {
    let registry = web::Data::new(config.registry);
    let server_health = health.clone();

    let server = HttpServer::new(move || build_app(registry.clone(), server_health.clone()))
        .bind(config.bind_addr)?
        .run();

    health.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use std::net::SocketAddr;

    #[fixture]
    fn health_state() -> web::Data<HealthState> {
        web::Data::new(HealthState::new())
    }

    #[fixture]
    fn config() -> AppConfig {
        AppConfig {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            registry: PersonRegistry::default(),
        }
    }

    #[rstest]
    #[actix_rt::test]
    async fn create_server_marks_readiness(health_state: web::Data<HealthState>, config: AppConfig) {
        assert!(!health_state.is_ready(), "state should start unready");

        let _server =
            create_server(health_state.clone(), config).expect("server should bind port 0");

        assert!(
            health_state.is_ready(),
            "server creation should mark readiness"
        );
    }
}
