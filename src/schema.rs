use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// One selectable entry of a dropdown field, as declared by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaOption {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
}

/// Server-declared description of one form field. Immutable for a given form
/// version; the wire format tags each record with a `type` discriminator.
/// Unrecognized discriminators decode to `Unknown` so a newer server schema
/// never fails the whole form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FieldSchema {
    #[serde(rename_all = "camelCase")]
    TextField {
        #[serde(default)]
        id: String,
        #[serde(default)]
        is_required: bool,
        #[serde(default)]
        label: String,
        #[serde(default)]
        placeholder: String,
        #[serde(default)]
        description: String,
        #[serde(default)]
        multiline: bool,
        #[serde(default)]
        max_lines: Option<u32>,
        #[serde(default)]
        is_tik_tok_link: Option<bool>,
    },
    #[serde(rename_all = "camelCase")]
    DropDown {
        #[serde(default)]
        id: String,
        #[serde(default)]
        is_required: bool,
        #[serde(default)]
        label: String,
        #[serde(default)]
        description: String,
        #[serde(default)]
        placeholder: String,
        #[serde(default)]
        options: Vec<SchemaOption>,
        #[serde(default)]
        selected_option_id: String,
        #[serde(default)]
        has_other_option: bool,
    },
    #[serde(rename_all = "camelCase")]
    Slider {
        #[serde(default)]
        id: String,
        #[serde(default)]
        is_required: bool,
        #[serde(default)]
        label: String,
        #[serde(default)]
        description: String,
        #[serde(default)]
        max: i64,
        #[serde(default)]
        step: i64,
        #[serde(default)]
        left_label: String,
        #[serde(default)]
        right_label: String,
    },
    #[serde(other)]
    Unknown,
}

impl FieldSchema {
    pub fn id(&self) -> &str {
        match self {
            FieldSchema::TextField { id, .. }
            | FieldSchema::DropDown { id, .. }
            | FieldSchema::Slider { id, .. } => id,
            FieldSchema::Unknown => "",
        }
    }

    pub fn is_required(&self) -> bool {
        match self {
            FieldSchema::TextField { is_required, .. }
            | FieldSchema::DropDown { is_required, .. }
            | FieldSchema::Slider { is_required, .. } => *is_required,
            FieldSchema::Unknown => false,
        }
    }
}

/// Decode the server's field list. Fails only when the payload is not an
/// array; a malformed element degrades to `Unknown` instead of sinking the
/// whole form.
pub fn decode_fields(v: &JsonValue) -> Result<Vec<FieldSchema>> {
    let arr = v
        .as_array()
        .ok_or_else(|| anyhow!("field list: expected a JSON array, got {v}"))?;
    Ok(arr
        .iter()
        .map(|el| serde_json::from_value(el.clone()).unwrap_or(FieldSchema::Unknown))
        .collect())
}
