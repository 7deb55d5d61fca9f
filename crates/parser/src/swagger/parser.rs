//! Swagger 2.0 file parser

use super::types::SwaggerDoc;
use std::fs;
use std::path::Path;
use swagger_apigw_common::{ConverterError, Result};

/// Swagger 2.0 document parser
///
/// Reads and parses Swagger 2.0 JSON descriptions. A document that does not
/// match the expected shape fails immediately; absent optional sections
/// (tags, consumes, definitions, ...) default to empty.
pub struct SwaggerParser {
    /// Loaded Swagger document
    doc: SwaggerDoc,
}

impl SwaggerParser {
    /// Load a Swagger document from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            ConverterError::Parse(format!(
                "Failed to read Swagger file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_json(&content)
    }

    /// Parse a Swagger document from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: SwaggerDoc = serde_json::from_str(json)
            .map_err(|e| ConverterError::Parse(format!("Failed to parse Swagger JSON: {}", e)))?;

        Ok(Self { doc })
    }

    /// Get reference to the parsed document
    pub fn doc(&self) -> &SwaggerDoc {
        &self.doc
    }

    /// Consume the parser and take ownership of the document
    pub fn into_doc(self) -> SwaggerDoc {
        self.doc
    }
}
