//! Person API library modules.

pub mod api;
pub mod config;
pub mod doc;
pub mod domain;
pub mod middleware;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Correlate;
