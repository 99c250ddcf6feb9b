//! Shared types, errors, and configuration for Rotafin.
//!
//! This crate provides common types used across all other crates:
//! - Money formatting with decimal precision
//! - Typed IDs for type-safe record references
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
