//! Person endpoints: creation, query and path lookups, and the update echo.
//!
//! Nothing is stored. Handlers validate their input, then either echo it
//! back through the output shape or answer a membership probe against the
//! startup id registry.

use actix_web::{HttpResponse, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::config::PersonRegistry;
use crate::domain::{ApiError, ApiResult, Location, Person, PersonOut};

/// Message returned when a person id is present in the registry.
const EXISTS_MESSAGE: &str = "It exist!";
/// Message returned when a person id is missing from the registry.
const MISSING_MESSAGE: &str = "this person doesn't exist!";

/// Query parameters for the person detail lookup.
#[derive(Debug, Deserialize, Validate, IntoParams)]
pub struct PersonDetailQuery {
    /// Display name, 1-50 characters.
    #[validate(length(min = 1, max = 50))]
    #[param(min_length = 1, max_length = 50, example = "Miguel")]
    pub name: Option<String>,
    /// Age as free text. The original service never tightened this to an
    /// integer; kept as text on purpose.
    #[param(example = "25")]
    pub age: String,
}

/// Embedded body for the person update: the person itself plus an optional
/// location that is shallow-merged into the response.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PersonUpdate {
    #[validate(nested)]
    pub person: Person,
    #[validate(nested)]
    pub location: Option<Location>,
}

/// Validate and echo a person, stripping the password.
#[utoipa::path(
    post,
    path = "/person/new",
    request_body = Person,
    responses(
        (status = 201, description = "Validated person with the password stripped", body = PersonOut),
        (status = 422, description = "Constraint violation", body = ApiError)
    ),
    tags = ["persons"],
    operation_id = "newPerson"
)]
#[post("/person/new")]
pub async fn new_person(payload: web::Json<Person>) -> ApiResult<HttpResponse> {
    let person = payload.into_inner();
    person.validate()?;
    Ok(HttpResponse::Created().json(PersonOut::from(person)))
}

/// Echo the query parameters as a one-entry mapping.
#[utoipa::path(
    get,
    path = "/person/detail",
    params(PersonDetailQuery),
    responses(
        (status = 200, description = "Mapping of name to age"),
        (status = 422, description = "Constraint violation", body = ApiError)
    ),
    tags = ["persons"],
    operation_id = "personDetail"
)]
#[get("/person/detail")]
pub async fn person_detail(query: web::Query<PersonDetailQuery>) -> ApiResult<web::Json<Value>> {
    let query = query.into_inner();
    query.validate()?;
    // An absent name keys the mapping as "null", matching the original
    // serialization of a missing value.
    let key = query.name.unwrap_or_else(|| "null".to_owned());
    let mut body = Map::new();
    body.insert(key, Value::String(query.age));
    Ok(web::Json(Value::Object(body)))
}

/// Probe the id registry for a person.
#[utoipa::path(
    get,
    path = "/person/detail/{person_id}",
    params(
        ("person_id" = i64, Path, minimum = 1, description = "Person id, strictly positive")
    ),
    responses(
        (status = 200, description = "The id is known"),
        (status = 404, description = "Unknown person id", body = ApiError),
        (status = 422, description = "Non-positive or malformed id", body = ApiError)
    ),
    tags = ["persons"],
    operation_id = "personById"
)]
#[get("/person/detail/{person_id}")]
pub async fn person_by_id(
    path: web::Path<i64>,
    registry: web::Data<PersonRegistry>,
) -> ApiResult<web::Json<Value>> {
    let person_id = path.into_inner();
    ensure_positive(person_id)?;
    if !registry.contains(person_id) {
        return Err(ApiError::not_found(MISSING_MESSAGE));
    }
    let mut body = Map::new();
    body.insert(person_id.to_string(), Value::String(EXISTS_MESSAGE.to_owned()));
    Ok(web::Json(Value::Object(body)))
}

/// Validate and echo a person update; nothing is persisted.
#[utoipa::path(
    put,
    path = "/person/{person_id}",
    params(
        ("person_id" = i64, Path, minimum = 1, description = "Person id, strictly positive")
    ),
    request_body = PersonUpdate,
    responses(
        (status = 200, description = "Person fields merged with any location fields"),
        (status = 422, description = "Constraint violation", body = ApiError)
    ),
    tags = ["persons"],
    operation_id = "updatePerson"
)]
#[put("/person/{person_id}")]
pub async fn update_person(
    path: web::Path<i64>,
    payload: web::Json<PersonUpdate>,
) -> ApiResult<web::Json<Value>> {
    let person_id = path.into_inner();
    ensure_positive(person_id)?;
    let update = payload.into_inner();
    update.validate()?;
    let merged = merge_location(PersonOut::from(update.person), update.location)?;
    Ok(web::Json(merged))
}

fn ensure_positive(person_id: i64) -> Result<(), ApiError> {
    if person_id > 0 {
        return Ok(());
    }
    Err(
        ApiError::validation("person_id must be greater than zero").with_details(json!({
            "param": "person_id",
            "value": person_id,
        })),
    )
}

/// Shallow merge: location keys overwrite person keys of the same name.
fn merge_location(person: PersonOut, location: Option<Location>) -> Result<Value, ApiError> {
    let mut merged = to_object(person)?;
    if let Some(location) = location {
        for (key, value) in to_object(location)? {
            merged.insert(key, value);
        }
    }
    Ok(Value::Object(merged))
}

fn to_object(value: impl Serialize) -> Result<Map<String, Value>, ApiError> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(ApiError::internal(format!(
            "expected a JSON object, got {other}"
        ))),
        Err(err) => Err(ApiError::internal(format!(
            "response serialization failed: {err}"
        ))),
    }
}
