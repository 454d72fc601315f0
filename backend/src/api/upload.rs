//! Image upload endpoint: whole-file read plus a small size report.
//!
//! The field is buffered fully in memory and no size limit or content-type
//! check is applied; the declared type is echoed back verbatim.

use actix_multipart::form::{MultipartForm, bytes::Bytes};
use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ApiError, ApiResult};

/// Multipart payload with a single required `image` field.
#[derive(Debug, MultipartForm)]
pub struct ImageUpload {
    pub image: Bytes,
}

/// Documentation-only mirror of the multipart payload.
#[derive(ToSchema)]
#[expect(dead_code, reason = "schema-only type for OpenAPI generation")]
pub struct ImageForm {
    #[schema(value_type = String, format = Binary)]
    image: String,
}

/// Size report for an uploaded file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ImageReport {
    #[serde(rename = "Filename")]
    #[schema(example = "photo.png")]
    pub filename: Option<String>,
    #[serde(rename = "Format")]
    #[schema(example = "image/png")]
    pub format: Option<String>,
    #[serde(rename = "Size(kb)")]
    #[schema(example = 2.0)]
    pub size_kb: f64,
}

/// Kibibytes rounded to two decimal places, matching the original report.
fn size_kb(len: usize) -> f64 {
    (len as f64 / 1024.0 * 100.0).round() / 100.0
}

/// Buffer the uploaded file and report its name, declared type, and size.
#[utoipa::path(
    post,
    path = "/post-image",
    request_body(content = ImageForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Upload report", body = ImageReport),
        (status = 422, description = "Missing or malformed multipart field", body = ApiError)
    ),
    tags = ["upload"],
    operation_id = "postImage"
)]
#[post("/post-image")]
pub async fn post_image(
    MultipartForm(upload): MultipartForm<ImageUpload>,
) -> ApiResult<web::Json<ImageReport>> {
    let report = ImageReport {
        filename: upload.image.file_name.clone(),
        format: upload.image.content_type.as_ref().map(|m| m.to_string()),
        size_kb: size_kb(upload.image.data.len()),
    };
    Ok(web::Json(report))
}
