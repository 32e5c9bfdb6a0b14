//! Recruitment workflow core: user registration and interview lifecycle management.

pub mod config;
pub mod error;
pub mod interviews;
pub mod repository;
pub mod telemetry;
pub mod users;
