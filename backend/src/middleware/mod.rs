//! Actix middleware.

pub mod request_id;

pub use request_id::{Correlate, RequestId};
