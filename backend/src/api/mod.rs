//! HTTP handlers, one module per endpoint group.

pub mod auth;
pub mod contact;
pub mod health;
pub mod home;
pub mod persons;
pub mod upload;

pub use crate::domain::ApiResult;
