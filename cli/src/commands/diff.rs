use crate::OutputFormat;
use crate::output::text;
use anyhow::{Context, Result};
use std::io::{self, Write};
use std::process::ExitCode;
use swagger_diff::{DiffConfig, load_document, output};

pub fn run(
    old_path: &str,
    new_path: &str,
    format: OutputFormat,
    response_code: Option<&str>,
) -> Result<ExitCode> {
    let old = load_document(old_path)
        .with_context(|| format!("Failed to load old spec: {}", old_path))?;
    let new = load_document(new_path)
        .with_context(|| format!("Failed to load new spec: {}", new_path))?;

    let mut config = DiffConfig::default();
    if let Some(code) = response_code {
        config = config.with_response_code(code);
    }

    let report = old.diff(&new, &config);

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Text => text::write_text_report(&mut handle, &report)?,
        OutputFormat::Markdown => write!(handle, "{}", output::markdown::render(&report))?,
        OutputFormat::Json => {
            let json = output::json::serialize_diff_report(&report)
                .context("Failed to serialize diff report")?;
            writeln!(handle, "{}", json)?;
        }
    }

    if report.is_empty() {
        Ok(ExitCode::from(0))
    } else {
        Ok(ExitCode::from(1))
    }
}
