//! Shared Module
//!
//! Cross-cutting utilities and types used across the application.

pub mod errors;
pub mod html;

pub use errors::{ApiError, RenderError, RepositoryError, UseCaseError};
