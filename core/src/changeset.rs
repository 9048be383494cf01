//! Change-set model: the output of a document diff.
//!
//! This module defines the types a diff run produces:
//! - [`Endpoint`]: a wholly added or wholly removed operation
//! - [`ChangedEndpoint`] / [`ChangedOperation`] / [`ChangedParameter`]: a
//!   route, method, or parameter that exists on both sides but differs
//! - [`ElProperty`]: a schema node addressed by its path expression
//! - [`DiffReport`]: the versioned aggregate handed to renderers
//!
//! All types are plain immutable values; renderers treat them as read-only.

use crate::model::{HttpMethod, Operation, Parameter, Schema};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A schema node paired with the path expression locating it within its
/// enclosing parameter or response (e.g. `pet.tags[].name`).
///
/// A whole response schema that appeared or disappeared is addressed by the
/// empty root path `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElProperty {
    /// Dotted/bracketed path expression, stable for a given pair of inputs.
    pub el: String,
    pub schema: Schema,
}

impl ElProperty {
    pub fn new(el: impl Into<String>, schema: Schema) -> ElProperty {
        ElProperty {
            el: el.into(),
            schema,
        }
    }
}

/// A single operation that is wholly new or wholly gone.
///
/// An added operation on an existing path is reported the same way as an
/// operation on a brand-new path; "new capability" is uniform in the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    pub path_url: String,
    pub method: HttpMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl Endpoint {
    pub fn new(path_url: impl Into<String>, method: HttpMethod, summary: Option<String>) -> Endpoint {
        Endpoint {
            path_url: path_url.into(),
            method,
            summary,
        }
    }
}

/// A matched parameter pair with its detected differences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangedParameter {
    pub left: Parameter,
    pub right: Parameter,
    /// The required flag flipped between versions.
    pub change_required: bool,
    /// The description differs. Absent is the empty value of the field and
    /// is not equal to a present-but-empty string.
    pub change_description: bool,
    /// Schema elements present only in the new parameter's payload shape.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub increased: Vec<ElProperty>,
    /// Schema elements present only in the old parameter's payload shape.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<ElProperty>,
}

impl ChangedParameter {
    pub fn is_diff(&self) -> bool {
        self.change_required
            || self.change_description
            || !self.increased.is_empty()
            || !self.missing.is_empty()
    }
}

/// The differences detected on one operation present on both sides.
///
/// Only emitted when it actually differs: "no diff, no record".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChangedOperation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub add_parameters: Vec<Parameter>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing_parameters: Vec<Parameter>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub changed_parameters: Vec<ChangedParameter>,
    /// Response-schema elements present only on the new side.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub add_props: Vec<ElProperty>,
    /// Response-schema elements present only on the old side.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing_props: Vec<ElProperty>,
}

impl ChangedOperation {
    pub fn is_diff_param(&self) -> bool {
        !self.add_parameters.is_empty()
            || !self.missing_parameters.is_empty()
            || !self.changed_parameters.is_empty()
    }

    pub fn is_diff_prop(&self) -> bool {
        !self.add_props.is_empty() || !self.missing_props.is_empty()
    }

    pub fn is_diff(&self) -> bool {
        self.is_diff_param() || self.is_diff_prop()
    }
}

/// A route present on both sides carrying changed operations.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChangedEndpoint {
    pub path_url: String,
    /// Methods only the new side defines on this path. Also folded into the
    /// report's top-level `new_endpoints`.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub new_operations: BTreeMap<HttpMethod, Operation>,
    /// Methods only the old side defines on this path. Also folded into the
    /// report's top-level `missing_endpoints`.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub missing_operations: BTreeMap<HttpMethod, Operation>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub changed_operations: BTreeMap<HttpMethod, ChangedOperation>,
}

impl ChangedEndpoint {
    /// A changed endpoint earns a place in the report only through its
    /// changed operations; purely added/removed methods surface as
    /// top-level endpoints instead.
    pub fn is_diff(&self) -> bool {
        !self.changed_operations.is_empty()
    }
}

/// The aggregate output of one document diff.
///
/// The `version` field carries the report schema version for forwards
/// compatibility of serialized output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffReport {
    /// Report schema version (currently "1").
    pub version: String,
    pub new_endpoints: Vec<Endpoint>,
    pub missing_endpoints: Vec<Endpoint>,
    pub changed_endpoints: Vec<ChangedEndpoint>,
}

impl DiffReport {
    pub const SCHEMA_VERSION: &'static str = "1";

    pub fn new() -> DiffReport {
        DiffReport {
            version: Self::SCHEMA_VERSION.to_string(),
            new_endpoints: Vec::new(),
            missing_endpoints: Vec::new(),
            changed_endpoints: Vec::new(),
        }
    }

    /// True when the two documents were semantically identical.
    pub fn is_empty(&self) -> bool {
        self.new_endpoints.is_empty()
            && self.missing_endpoints.is_empty()
            && self.changed_endpoints.is_empty()
    }
}

impl Default for DiffReport {
    fn default() -> Self {
        DiffReport::new()
    }
}
