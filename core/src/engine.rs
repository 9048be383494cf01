//! Document-level diff orchestration.
//!
//! Walks two normalized documents with keyed set-differences at the path and
//! operation levels, then hands each shared operation to the parameter and
//! schema comparators. Pure and synchronous: no I/O, no input mutation, and
//! identical inputs always produce an identical report.

use crate::changeset::{ChangedEndpoint, ChangedOperation, DiffReport, Endpoint};
use crate::config::DiffConfig;
use crate::map_diff::MapKeyDiff;
use crate::model::{Document, HttpMethod, Operation, PathItem};
use crate::parameter_diff;
use crate::schema_diff::SchemaDiffer;
use std::collections::BTreeMap;

/// Compare two documents and assemble the full change set.
pub fn diff_documents(old: &Document, new: &Document, config: &DiffConfig) -> DiffReport {
    let mut report = DiffReport::new();

    let path_diff = MapKeyDiff::diff(&old.paths, &new.paths);

    for (url, path_item) in path_diff.increased {
        report.new_endpoints.extend(endpoints_of(url, path_item));
    }
    for (url, path_item) in path_diff.missing {
        report.missing_endpoints.extend(endpoints_of(url, path_item));
    }

    for url in path_diff.shared {
        let old_item = &old.paths[url];
        let new_item = &new.paths[url];
        let changed = diff_shared_path(url, old_item, new_item, old, new, config);

        report
            .new_endpoints
            .extend(endpoint_list(url, &changed.new_operations));
        report
            .missing_endpoints
            .extend(endpoint_list(url, &changed.missing_operations));

        if changed.is_diff() {
            report.changed_endpoints.push(changed);
        }
    }

    log::debug!(
        "diffed documents: {} new, {} missing, {} changed endpoints",
        report.new_endpoints.len(),
        report.missing_endpoints.len(),
        report.changed_endpoints.len()
    );

    report
}

fn diff_shared_path(
    url: &str,
    old_item: &PathItem,
    new_item: &PathItem,
    old_doc: &Document,
    new_doc: &Document,
    config: &DiffConfig,
) -> ChangedEndpoint {
    let op_diff = MapKeyDiff::diff(&old_item.operations, &new_item.operations);

    let new_operations: BTreeMap<HttpMethod, Operation> = op_diff
        .increased
        .into_iter()
        .map(|(method, op)| (*method, op.clone()))
        .collect();
    let missing_operations: BTreeMap<HttpMethod, Operation> = op_diff
        .missing
        .into_iter()
        .map(|(method, op)| (*method, op.clone()))
        .collect();

    let mut changed_operations = BTreeMap::new();
    for method in op_diff.shared {
        let old_op = &old_item.operations[method];
        let new_op = &new_item.operations[method];
        let changed = diff_shared_operation(old_op, new_op, old_doc, new_doc, config);
        if changed.is_diff() {
            changed_operations.insert(*method, changed);
        }
    }

    ChangedEndpoint {
        path_url: url.to_string(),
        new_operations,
        missing_operations,
        changed_operations,
    }
}

fn diff_shared_operation(
    old_op: &Operation,
    new_op: &Operation,
    old_doc: &Document,
    new_doc: &Document,
    config: &DiffConfig,
) -> ChangedOperation {
    let param_diff = parameter_diff::diff(
        &old_op.parameters,
        &new_op.parameters,
        &old_doc.definitions,
        &new_doc.definitions,
        config,
    );

    // Response comparison is restricted by policy to the configured status
    // code; an absent response means no schema to compare.
    let response_diff = SchemaDiffer::new(&old_doc.definitions, &new_doc.definitions, config).diff(
        old_op.response_schema(&config.response_code),
        new_op.response_schema(&config.response_code),
        "",
    );

    ChangedOperation {
        summary: new_op.summary.clone(),
        add_parameters: param_diff.increased,
        missing_parameters: param_diff.missing,
        changed_parameters: param_diff
            .changed
            .into_iter()
            .filter(|p| p.is_diff())
            .collect(),
        add_props: response_diff.increased,
        missing_props: response_diff.missing,
    }
}

fn endpoints_of(url: &str, path_item: &PathItem) -> Vec<Endpoint> {
    endpoint_list(url, &path_item.operations)
}

fn endpoint_list(url: &str, operations: &BTreeMap<HttpMethod, Operation>) -> Vec<Endpoint> {
    operations
        .iter()
        .map(|(method, op)| Endpoint::new(url, *method, op.summary.clone()))
        .collect()
}
