//! Swagger 2.0 document parsing
//!
//! This crate reads a Swagger 2.0 API description (JSON) into an in-memory
//! document model. The model keeps everything the converter needs: document
//! identity, the path → method → operation map, and the schema definitions,
//! which are carried into the output unchanged.
//!
//! ## Usage
//! ```rust,ignore
//! use swagger_apigw_parser::SwaggerParser;
//!
//! let parser = SwaggerParser::from_file("swagger.json")?;
//! let doc = parser.doc();
//! ```

pub mod swagger;

pub use swagger::{Info, SourceOperation, SwaggerDoc, SwaggerParser, Tag};
