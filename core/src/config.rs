//! Configuration for the diff engine.
//!
//! `DiffConfig` centralizes behavioral knobs so policy constants are not
//! hardcoded throughout the comparators.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// Status code whose response schema is compared per operation.
    ///
    /// Operations lacking this response on either side are treated as having
    /// no schema to compare.
    pub response_code: String,
    /// Upper bound on reference-chain hops during resolution (a definition
    /// that is itself a reference). Chains longer than this are left as
    /// opaque reference leaves.
    pub max_ref_depth: u32,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            response_code: "200".to_string(),
            max_ref_depth: 32,
        }
    }
}

impl DiffConfig {
    /// Compare response schemas under `code` instead of the default "200".
    pub fn with_response_code(mut self, code: impl Into<String>) -> Self {
        self.response_code = code.into();
        self
    }
}
