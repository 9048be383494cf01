//! swagger-diff: a library for comparing Swagger 2.0 API descriptions.
//!
//! This crate provides functionality for:
//! - Loading a Swagger 2.0 JSON document into a normalized model
//! - Computing a semantic change set between two document versions
//!   (added, removed, and changed endpoints, parameters, and schema
//!   properties)
//! - Rendering the change set as markdown or JSON
//!
//! # Quick Start
//!
//! ```ignore
//! use swagger_diff::{load_document, DiffConfig};
//!
//! let old = load_document("petstore_v1.json")?;
//! let new = load_document("petstore_v2.json")?;
//! let report = old.diff(&new, &DiffConfig::default());
//!
//! println!("{}", swagger_diff::output::markdown::render(&report));
//! ```

mod changeset;
mod config;
mod engine;
mod loader;
mod map_diff;
mod model;
pub mod output;
mod parameter_diff;
mod schema_diff;

pub use changeset::{
    ChangedEndpoint, ChangedOperation, ChangedParameter, DiffReport, ElProperty, Endpoint,
};
pub use config::DiffConfig;
pub use engine::diff_documents;
pub use loader::{LoadError, load_document, parse_document};
pub use map_diff::MapKeyDiff;
pub use model::{
    Document, HttpMethod, Operation, ParamLocation, Parameter, PathItem, Response, Schema,
    SchemaKind,
};
pub use parameter_diff::{ParameterDiff, diff as diff_parameters};
pub use schema_diff::{SchemaDiff, SchemaDiffer};
