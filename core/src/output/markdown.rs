//! Markdown changelog rendering.
//!
//! Produces a three-section changelog ("What's New" / "What's Deprecated" /
//! "What's Changed") suitable for pasting into release notes.

use crate::changeset::{
    ChangedEndpoint, ChangedOperation, ChangedParameter, DiffReport, ElProperty, Endpoint,
};
use crate::model::Parameter;
use std::fmt::Write;

const H3: &str = "### ";
const HR: &str = "---\n";
const LI: &str = "* ";
const PRE_LI: &str = "    ";
const PRE_CODE: &str = "    ";

pub fn render(report: &DiffReport) -> String {
    let mut out = String::new();
    section(&mut out, "What's New", &report.new_endpoints);
    section(&mut out, "What's Deprecated", &report.missing_endpoints);

    let _ = write!(out, "{H3}What's Changed\n{HR}");
    for endpoint in &report.changed_endpoints {
        changed_endpoint(&mut out, endpoint);
    }
    out
}

fn section(out: &mut String, title: &str, endpoints: &[Endpoint]) {
    let _ = write!(out, "{H3}{title}\n{HR}");
    for endpoint in endpoints {
        endpoint_line(out, endpoint);
    }
    out.push('\n');
}

fn endpoint_line(out: &mut String, endpoint: &Endpoint) {
    let summary = endpoint.summary.as_deref().unwrap_or("");
    let _ = writeln!(
        out,
        "{LI}`{}` {} {}",
        endpoint.method, endpoint.path_url, summary
    );
}

fn changed_endpoint(out: &mut String, endpoint: &ChangedEndpoint) {
    for (method, op) in &endpoint.changed_operations {
        let summary = op.summary.as_deref().unwrap_or("");
        let _ = writeln!(out, "{LI}`{method}` {} {summary}  ", endpoint.path_url);
        if op.is_diff_param() {
            let _ = write!(out, "{PRE_LI}Parameters\n\n");
            parameters_block(out, op);
        }
        if op.is_diff_prop() {
            let _ = write!(out, "{PRE_LI}Return Type\n\n");
            for prop in &op.add_props {
                prop_line(out, "Add", prop);
            }
            for prop in &op.missing_props {
                prop_line(out, "Delete", prop);
            }
        }
    }
}

fn parameters_block(out: &mut String, op: &ChangedOperation) {
    for param in &op.add_parameters {
        param_line(out, "Add", param);
    }
    for changed in &op.changed_parameters {
        for prop in &changed.increased {
            prop_line(out, "Add", prop);
        }
    }
    for changed in &op.changed_parameters {
        if changed.change_required || changed.change_description {
            changed_param_line(out, changed);
        }
    }
    for changed in &op.changed_parameters {
        for prop in &changed.missing {
            prop_line(out, "Delete", prop);
        }
    }
    for param in &op.missing_parameters {
        param_line(out, "Delete", param);
    }
}

fn param_line(out: &mut String, verb: &str, param: &Parameter) {
    let _ = write!(out, "{PRE_LI}{PRE_CODE}{verb} {}", param.name);
    if let Some(desc) = &param.description {
        let _ = write!(out, " //{desc}");
    }
    out.push('\n');
}

fn prop_line(out: &mut String, verb: &str, prop: &ElProperty) {
    let _ = write!(out, "{PRE_LI}{PRE_CODE}{verb} {}", prop.el);
    if let Some(desc) = &prop.schema.description {
        let _ = write!(out, " //{desc}");
    }
    out.push('\n');
}

fn changed_param_line(out: &mut String, changed: &ChangedParameter) {
    let _ = write!(out, "{PRE_LI}{PRE_CODE}{}", changed.right.name);
    if changed.change_required {
        let target = if changed.right.required {
            "required"
        } else {
            "not required"
        };
        let _ = write!(out, " change into {target}");
    }
    if changed.change_description {
        let _ = write!(
            out,
            " notes '{}' change into '{}'",
            changed.left.description.as_deref().unwrap_or(""),
            changed.right.description.as_deref().unwrap_or("")
        );
    }
    out.push('\n');
}
