//! Data shapes and the API error envelope.

pub mod error;
pub mod person;

pub use error::{ApiError, ApiResult, ErrorCode};
pub use person::{HairColor, Location, LoginOut, Person, PersonOut};
