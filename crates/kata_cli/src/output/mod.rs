//! Output formatting module

mod json;
mod text;

use miette::Result;

use crate::cli::OutputFormat;

pub fn output_strings(leaves: &[String], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => json::output_json(leaves)?,
        OutputFormat::Text => text::output_text(leaves),
    }

    Ok(())
}
