//! Parameter-list comparison for one operation pair.
//!
//! Parameters match across versions by their (name, location) identity key.
//! Matched pairs are compared field-by-field; payload shapes go through the
//! schema comparator rooted at the parameter name.

use crate::changeset::ChangedParameter;
use crate::config::DiffConfig;
use crate::map_diff::MapKeyDiff;
use crate::model::{ParamLocation, Parameter, Schema};
use crate::schema_diff::SchemaDiffer;
use std::collections::BTreeMap;

/// The result of comparing two operations' parameter lists.
///
/// `changed` carries a [`ChangedParameter`] for every matched pair; callers
/// surface only the pairs whose `is_diff()` is true.
#[derive(Debug, Clone, Default)]
pub struct ParameterDiff {
    pub increased: Vec<Parameter>,
    pub missing: Vec<Parameter>,
    pub changed: Vec<ChangedParameter>,
}

pub fn diff(
    old_params: &[Parameter],
    new_params: &[Parameter],
    old_defs: &BTreeMap<String, Schema>,
    new_defs: &BTreeMap<String, Schema>,
    config: &DiffConfig,
) -> ParameterDiff {
    let old_map = by_identity(old_params);
    let new_map = by_identity(new_params);
    let key_diff = MapKeyDiff::diff(&old_map, &new_map);

    let increased = key_diff
        .increased
        .iter()
        .map(|(_, param)| (**param).clone())
        .collect();
    let missing = key_diff
        .missing
        .iter()
        .map(|(_, param)| (**param).clone())
        .collect();

    let mut changed = Vec::new();
    for key in key_diff.shared {
        let left = old_map[key];
        let right = new_map[key];

        // Fresh differ per parameter: the cycle guard is scoped to one
        // schema comparison tree.
        let schema_diff = SchemaDiffer::new(old_defs, new_defs, config).diff(
            left.schema.as_ref(),
            right.schema.as_ref(),
            &left.name,
        );

        changed.push(ChangedParameter {
            change_required: left.required != right.required,
            change_description: left.description != right.description,
            increased: schema_diff.increased,
            missing: schema_diff.missing,
            left: left.clone(),
            right: right.clone(),
        });
    }

    ParameterDiff {
        increased,
        missing,
        changed,
    }
}

fn by_identity(params: &[Parameter]) -> BTreeMap<(String, ParamLocation), &Parameter> {
    params
        .iter()
        .map(|p| ((p.name.clone(), p.location), p))
        .collect()
}
