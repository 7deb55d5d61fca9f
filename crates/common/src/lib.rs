//! Common types and utilities for the Swagger to API Gateway converter
//!
//! This crate contains the shared error type and the schema structures that
//! appear identically in the Swagger source document and the generated
//! API Gateway document. Both sides reuse these by value, so a response
//! descriptor read from the input can be carried into the output unchanged.

mod schema;

pub use schema::{Definition, Property, ResponseDescriptor, SchemaRef};

use thiserror::Error;

/// Errors that can occur during conversion
#[derive(Error, Debug)]
pub enum ConverterError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for converter operations
pub type Result<T> = std::result::Result<T, ConverterError>;
