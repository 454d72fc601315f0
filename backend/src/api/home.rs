//! Root endpoint.

use actix_web::{get, web};
use serde_json::{Value, json};

/// Fixed greeting; doubles as a trivial smoke-test target.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Greeting")),
    tags = ["home"],
    operation_id = "home"
)]
#[get("/")]
pub async fn home() -> web::Json<Value> {
    web::Json(json!({ "hello": "world" }))
}
