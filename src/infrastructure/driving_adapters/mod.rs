//! Driving Adapters
//!
//! Entry points that drive the application:
//! - HTML page handlers and form submissions
//! - DTOs for forms and list rows

pub mod web;
