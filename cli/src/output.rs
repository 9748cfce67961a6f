use serde::Serialize;

use crate::error::Result;

#[derive(Clone, Copy, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    /// Plain text
    Text,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Render a value in one of the structured formats.
///
/// Returns `None` for [`OutputFormat::Text`], which each command renders itself.
pub(crate) fn render<T: Serialize>(format: OutputFormat, value: &T) -> Result<Option<String>> {
    match format {
        OutputFormat::Text => Ok(None),
        OutputFormat::Json => Ok(Some(serde_json::to_string_pretty(value)?)),
        OutputFormat::Yaml => Ok(Some(serde_yml::to_string(value)?)),
    }
}
