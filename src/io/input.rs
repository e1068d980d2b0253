use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::{domain::ExistingField, form::EditorConfig};

use super::DocumentFormat;

/// Parse structured data in any supported format into a `serde_json::Value`.
pub fn parse_document_str(contents: &str, format: DocumentFormat) -> Result<Value> {
    match format {
        DocumentFormat::Json => {
            serde_json::from_str::<Value>(contents).with_context(|| "failed to parse JSON document")
        }
        #[cfg(feature = "yaml")]
        DocumentFormat::Yaml => {
            serde_yaml::from_str::<Value>(contents).with_context(|| "failed to parse YAML document")
        }
        #[cfg(feature = "toml")]
        DocumentFormat::Toml => contents
            .parse::<toml::Value>()
            .with_context(|| "failed to parse TOML document")
            .and_then(|value| {
                serde_json::to_value(value).context("failed to convert TOML to JSON")
            }),
    }
}

/// Extract the fields already on the model.
///
/// Accepts either a bare array of field objects or an object with a `fields`
/// array (the shape TOML documents are forced into).
pub fn existing_fields_from_value(value: &Value) -> Result<Vec<ExistingField>> {
    let entries = match value {
        Value::Array(items) => items,
        Value::Object(map) => match map.get("fields") {
            Some(Value::Array(items)) => items,
            Some(_) => bail!("`fields` must be an array of field objects"),
            None => bail!("expected an array of fields or an object with a `fields` array"),
        },
        other => bail!("expected an array of fields, found {}", value_kind(other)),
    };

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_json::from_value::<ExistingField>(entry.clone())
                .with_context(|| format!("field #{index} must be an object with a string `name`"))
        })
        .collect()
}

pub fn editor_config_from_value(value: &Value) -> Result<EditorConfig> {
    let config = serde_json::from_value::<EditorConfig>(value.clone())
        .context("failed to read editor configuration")?;
    config.validate().context("invalid editor configuration")?;
    Ok(config)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
