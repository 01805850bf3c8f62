//! Strings command implementation

use std::fs;
use std::io::Read;
use std::path::Path;

use kata_walk::{IntoValue, walk};
use miette::{IntoDiagnostic, Result, WrapErr};
use tracing::debug;

use crate::cli::OutputFormat;
use crate::output::output_strings;

pub fn run_strings(path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let content = read_input(path)?;

    let json: serde_json::Value = serde_json::from_str(&content)
        .into_diagnostic()
        .wrap_err("Invalid JSON input")?;

    let value = json.into_value();
    debug!("Walking {} document", value.shape());

    let mut leaves = Vec::new();
    walk(&value, |s| leaves.push(s.to_string()));

    debug!("Found {} strings", leaves.len());
    output_strings(&leaves, format)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .into_diagnostic()
                .wrap_err("Failed to read stdin")?;
            Ok(content)
        }
    }
}
