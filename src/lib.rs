//! Hospital Records
//!
//! A web application for a hospital front office: patients, doctors and
//! appointments managed through server-rendered forms, following
//! Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
