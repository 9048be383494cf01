use anyhow::Result;
use std::io::Write;
use swagger_diff::{ChangedOperation, ChangedParameter, DiffReport, Endpoint};

pub fn write_text_report<W: Write>(w: &mut W, report: &DiffReport) -> Result<()> {
    if report.is_empty() {
        writeln!(w, "No differences found.")?;
        return Ok(());
    }

    if !report.new_endpoints.is_empty() {
        writeln!(w, "New endpoints:")?;
        for endpoint in &report.new_endpoints {
            write_endpoint(w, endpoint)?;
        }
        writeln!(w)?;
    }

    if !report.missing_endpoints.is_empty() {
        writeln!(w, "Deprecated endpoints:")?;
        for endpoint in &report.missing_endpoints {
            write_endpoint(w, endpoint)?;
        }
        writeln!(w)?;
    }

    if !report.changed_endpoints.is_empty() {
        writeln!(w, "Changed endpoints:")?;
        for endpoint in &report.changed_endpoints {
            writeln!(w, "  {}", endpoint.path_url)?;
            for (method, op) in &endpoint.changed_operations {
                let summary = op.summary.as_deref().unwrap_or("");
                writeln!(w, "    {} {}", method, summary)?;
                write_operation(w, op)?;
            }
        }
        writeln!(w)?;
    }

    writeln!(
        w,
        "Summary: {} new, {} deprecated, {} changed.",
        report.new_endpoints.len(),
        report.missing_endpoints.len(),
        report.changed_endpoints.len()
    )?;

    Ok(())
}

fn write_endpoint<W: Write>(w: &mut W, endpoint: &Endpoint) -> Result<()> {
    let summary = endpoint.summary.as_deref().unwrap_or("");
    writeln!(w, "  {} {} {}", endpoint.method, endpoint.path_url, summary)?;
    Ok(())
}

fn write_operation<W: Write>(w: &mut W, op: &ChangedOperation) -> Result<()> {
    for param in &op.add_parameters {
        writeln!(w, "      Add parameter '{}'", param.name)?;
    }
    for param in &op.missing_parameters {
        writeln!(w, "      Delete parameter '{}'", param.name)?;
    }
    for changed in &op.changed_parameters {
        write_changed_parameter(w, changed)?;
    }
    for prop in &op.add_props {
        writeln!(w, "      Add response property '{}'", prop.el)?;
    }
    for prop in &op.missing_props {
        writeln!(w, "      Delete response property '{}'", prop.el)?;
    }
    Ok(())
}

fn write_changed_parameter<W: Write>(w: &mut W, changed: &ChangedParameter) -> Result<()> {
    let mut notes = Vec::new();
    if changed.change_required {
        if changed.right.required {
            notes.push("now required".to_string());
        } else {
            notes.push("no longer required".to_string());
        }
    }
    if changed.change_description {
        notes.push("description changed".to_string());
    }
    for prop in &changed.increased {
        notes.push(format!("+{}", prop.el));
    }
    for prop in &changed.missing {
        notes.push(format!("-{}", prop.el));
    }
    writeln!(
        w,
        "      Change parameter '{}': {}",
        changed.right.name,
        notes.join(", ")
    )?;
    Ok(())
}
