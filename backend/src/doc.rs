//! OpenAPI documentation configuration.
//!
//! The document is assembled from the per-handler `#[utoipa::path]`
//! annotations and the `ToSchema` derives on the data shapes, so the same
//! field declarations drive both validation and documentation.

use utoipa::OpenApi;

use crate::api::auth::LoginForm;
use crate::api::contact::ContactForm;
use crate::api::persons::PersonUpdate;
use crate::api::upload::{ImageForm, ImageReport};
use crate::domain::{ApiError, ErrorCode, HairColor, Location, LoginOut, Person, PersonOut};

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Person API",
        description = "Tutorial HTTP service: validated bodies, query and path \
                       parameters, forms, headers, cookies, and file upload."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::api::home::home,
        crate::api::persons::new_person,
        crate::api::persons::person_detail,
        crate::api::persons::person_by_id,
        crate::api::persons::update_person,
        crate::api::auth::login,
        crate::api::contact::contact,
        crate::api::upload::post_image,
        crate::api::health::live,
        crate::api::health::ready,
    ),
    components(schemas(
        Person,
        PersonOut,
        PersonUpdate,
        Location,
        HairColor,
        LoginForm,
        LoginOut,
        ContactForm,
        ImageForm,
        ImageReport,
        ApiError,
        ErrorCode,
    )),
    tags(
        (name = "home", description = "Greeting"),
        (name = "persons", description = "Person creation, lookups, and update echo"),
        (name = "auth", description = "Form login; credentials are never checked"),
        (name = "contact", description = "Contact form with header and cookie inputs"),
        (name = "upload", description = "Multipart image upload"),
        (name = "health", description = "Probes")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn object_fields(schema: &RefOr<Schema>) -> Vec<String> {
        match schema {
            RefOr::T(Schema::Object(obj)) => obj.properties.keys().cloned().collect(),
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn all_endpoints_are_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/",
            "/person/new",
            "/person/detail",
            "/person/detail/{person_id}",
            "/person/{person_id}",
            "/login",
            "/contact",
            "/post-image",
            "/health/live",
            "/health/ready",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing path {path}");
        }
    }

    #[test]
    fn person_schema_keeps_the_password_out_of_the_output_shape() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;

        let person = object_fields(schemas.get("Person").expect("Person schema"));
        assert!(person.contains(&"password".to_owned()));

        let person_out = object_fields(schemas.get("PersonOut").expect("PersonOut schema"));
        assert!(!person_out.contains(&"password".to_owned()));
        assert!(person_out.contains(&"first_name".to_owned()));
    }

    #[test]
    fn error_schema_has_code_and_message() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error = object_fields(schemas.get("ApiError").expect("ApiError schema"));
        assert!(error.contains(&"code".to_owned()));
        assert!(error.contains(&"message".to_owned()));
    }
}
