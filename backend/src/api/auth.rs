//! Login endpoint. Accepts any credentials; nothing is checked against
//! anything, which mirrors the original tutorial contract.

use actix_web::{post, web};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{ApiError, ApiResult, LoginOut};

/// Form-encoded login credentials.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginForm {
    #[validate(length(max = 20))]
    #[schema(max_length = 20, example = "migue2022")]
    pub username: String,
    /// Accepted and discarded; there is no credential store.
    #[schema(write_only, example = "anything8+")]
    pub password: String,
}

/// Echo the username with a fixed success message.
#[utoipa::path(
    post,
    path = "/login",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Always succeeds", body = LoginOut),
        (status = 422, description = "Constraint violation", body = ApiError)
    ),
    tags = ["auth"],
    operation_id = "login"
)]
#[post("/login")]
pub async fn login(form: web::Form<LoginForm>) -> ApiResult<web::Json<LoginOut>> {
    let form = form.into_inner();
    form.validate()?;
    Ok(web::Json(LoginOut::new(form.username)))
}
