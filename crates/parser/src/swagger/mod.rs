//! Swagger 2.0 specification parser
//!
//! Parses Swagger 2.0 documents (the `"swagger": "2.0"` flavor, not
//! OpenAPI 3) into the source document model.
//!
//! ## Swagger Sources
//! - Exported from API frameworks (springdoc, swaggo, flask-restx, ...)
//! - Hand-written `swagger.json` files
//!
//! ## Usage
//! ```rust,ignore
//! use swagger_apigw_parser::swagger::SwaggerParser;
//!
//! let parser = SwaggerParser::from_file("swagger.json")?;
//! println!("{} paths", parser.doc().paths.len());
//! ```

mod parser;
mod types;

pub use parser::SwaggerParser;
pub use types::*;
