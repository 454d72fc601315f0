//! Contact endpoint exercising forms, headers, and cookies.

use actix_web::http::header;
use actix_web::{HttpRequest, post, web};
use serde::Deserialize;
use tracing::debug;
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{ApiError, ApiResult};

/// Form-encoded contact message.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ContactForm {
    #[validate(length(min = 1, max = 20))]
    #[schema(min_length = 1, max_length = 20, example = "Miguel")]
    pub first_name: String,
    #[validate(length(min = 1, max = 20))]
    #[schema(min_length = 1, max_length = 20, example = "Torres")]
    pub last_name: String,
    #[validate(email)]
    #[schema(format = "email", example = "miguel@example.com")]
    pub email: String,
    #[validate(length(min = 20))]
    #[schema(min_length = 20, example = "I would like to know more about the course.")]
    pub message: String,
}

/// Accept a contact message and echo the caller's user-agent header.
///
/// The optional `ads` cookie is read and logged but never influences the
/// response.
#[utoipa::path(
    post,
    path = "/contact",
    request_body(content = ContactForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Raw user-agent header, or null when absent", body = String),
        (status = 422, description = "Constraint violation", body = ApiError)
    ),
    tags = ["contact"],
    operation_id = "contact"
)]
#[post("/contact")]
pub async fn contact(
    req: HttpRequest,
    form: web::Form<ContactForm>,
) -> ApiResult<web::Json<Option<String>>> {
    form.validate()?;
    if let Some(ads) = req.cookie("ads") {
        debug!(value = %ads.value(), "ads cookie received");
    }
    let user_agent = req
        .headers()
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    Ok(web::Json(user_agent))
}
