use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;
use swagger_diff::load_document;

pub fn run(path: &str) -> Result<ExitCode> {
    let doc = load_document(path).with_context(|| format!("Failed to load spec: {}", path))?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    let filename = Path::new(path)
        .file_name()
        .map(|s| s.to_string_lossy())
        .unwrap_or_else(|| path.into());

    let operation_count: usize = doc.paths.values().map(|p| p.operations.len()).sum();

    writeln!(handle, "Spec: {}", filename)?;
    writeln!(handle, "Paths: {}", doc.paths.len())?;
    writeln!(handle, "Operations: {}", operation_count)?;
    writeln!(handle, "Definitions: {}", doc.definitions.len())?;

    for (url, item) in &doc.paths {
        let methods: Vec<&str> = item.operations.keys().map(|m| m.as_str()).collect();
        writeln!(handle, "  - {} [{}]", url, methods.join(", "))?;
    }

    Ok(ExitCode::from(0))
}
