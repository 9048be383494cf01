//! Normalized API-description data structures.
//!
//! This module defines the core intermediate representation (IR) for one
//! version of an API description:
//! - [`Document`]: paths plus the named definition table used for `$ref` resolution
//! - [`PathItem`]: the operations defined on one route, keyed by HTTP method
//! - [`Operation`]: summary, parameters, and responses of one method
//! - [`Schema`]: a structural description of a value's shape
//!
//! The model is built once by the loader and never mutated by the engine.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// HTTP methods an operation can be registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Patch,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Put => "PUT",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
            HttpMethod::Patch => "PATCH",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "get" => Ok(HttpMethod::Get),
            "put" => Ok(HttpMethod::Put),
            "post" => Ok(HttpMethod::Post),
            "delete" => Ok(HttpMethod::Delete),
            "options" => Ok(HttpMethod::Options),
            "head" => Ok(HttpMethod::Head),
            "patch" => Ok(HttpMethod::Patch),
            _ => Err(()),
        }
    }
}

/// Where a parameter is carried in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamLocation {
    Query,
    Path,
    Header,
    Body,
    Form,
}

impl ParamLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamLocation::Query => "query",
            ParamLocation::Path => "path",
            ParamLocation::Header => "header",
            ParamLocation::Body => "body",
            ParamLocation::Form => "form",
        }
    }
}

impl fmt::Display for ParamLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The structural variant of a schema node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SchemaKind {
    /// A scalar type, identified by its type name (e.g. "integer", "string").
    Primitive { type_name: String },
    /// An object with named properties.
    Object { properties: BTreeMap<String, Schema> },
    /// A homogeneous array of items.
    Array { items: Box<Schema> },
    /// A named reference into a document's definition table.
    ///
    /// References are resolved by the schema comparator, always against the
    /// definition table of the document the reference came from.
    Reference { name: String },
}

/// A schema node: one element of a value-shape description.
///
/// Objects and references may participate in cycles (a definition may
/// reference itself, directly or transitively); the comparator guards
/// against unbounded recursion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(flatten)]
    pub kind: SchemaKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Schema {
    pub fn primitive(type_name: impl Into<String>) -> Schema {
        Schema {
            kind: SchemaKind::Primitive {
                type_name: type_name.into(),
            },
            description: None,
        }
    }

    pub fn object(properties: BTreeMap<String, Schema>) -> Schema {
        Schema {
            kind: SchemaKind::Object { properties },
            description: None,
        }
    }

    pub fn array(items: Schema) -> Schema {
        Schema {
            kind: SchemaKind::Array {
                items: Box::new(items),
            },
            description: None,
        }
    }

    pub fn reference(name: impl Into<String>) -> Schema {
        Schema {
            kind: SchemaKind::Reference { name: name.into() },
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Schema {
        self.description = Some(description.into());
        self
    }
}

/// A named input to an operation.
///
/// Identity across document versions is the (name, location) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub location: ParamLocation,
    /// Absent in the source document defaults to `false`.
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The shape of the parameter's value, when one is described.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
}

/// One response of an operation, keyed by status code in [`Operation`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Response {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
}

/// The behavior registered on one (path, method) pair.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Operation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub responses: BTreeMap<String, Response>,
}

impl Operation {
    /// The schema of the response registered under `status_code`, if any.
    pub fn response_schema(&self, status_code: &str) -> Option<&Schema> {
        self.responses.get(status_code).and_then(|r| r.schema.as_ref())
    }
}

/// The operations defined on one route.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PathItem {
    pub operations: BTreeMap<HttpMethod, Operation>,
}

/// One version of an API description.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Document {
    /// Route url -> operations, in deterministic (sorted) order.
    pub paths: BTreeMap<String, PathItem>,
    /// Named schema definitions used to resolve [`SchemaKind::Reference`] nodes.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub definitions: BTreeMap<String, Schema>,
}

impl Document {
    /// Compare this document (as the old version) against `new`.
    ///
    /// Convenience wrapper around [`crate::engine::diff_documents`].
    pub fn diff(&self, new: &Document, config: &crate::config::DiffConfig) -> crate::DiffReport {
        crate::engine::diff_documents(self, new, config)
    }
}
