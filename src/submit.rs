use serde::Serialize;

use crate::assemble::OTHER_OPTION_TITLE;
use crate::schema::FieldSchema;
use crate::state::{FieldState, FieldValue};

/// One answered field of a submission: the originating schema paired with the
/// final value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmittedField {
    pub schema: FieldSchema,
    pub value: FieldValue,
}

/// The wire payload handed to the network collaborator after a successful
/// validation pass. Pure data; delivery and retry live elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSubmission {
    pub form_id: String,
    pub form_name: String,
    pub fields: Vec<SubmittedField>,
}

/// Pair each assembled field with its originating schema, in original schema
/// order. Synthetic companions never appear as their own line: when a
/// dropdown currently selects the sentinel "Other", the companion's free text
/// *replaces* the dropdown's recorded value.
pub fn serialize(
    form_id: impl Into<String>,
    form_name: impl Into<String>,
    fields: &[FieldState],
    schemas: &[FieldSchema],
) -> FormSubmission {
    let mut out: Vec<SubmittedField> = Vec::with_capacity(schemas.len());
    for schema in schemas {
        if matches!(schema, FieldSchema::Unknown) {
            continue;
        }
        let Some(fld) = fields
            .iter()
            .find(|f| !f.is_synthetic() && f.id == schema.id())
        else {
            continue;
        };
        let mut value = fld.value.clone();
        if matches!(schema, FieldSchema::DropDown { .. })
            && fld.value.as_text() == OTHER_OPTION_TITLE
        {
            if let Some(companion) = fields
                .iter()
                .find(|c| c.companion_of.as_deref() == Some(fld.id.as_str()))
            {
                value = companion.value.clone();
            }
        }
        out.push(SubmittedField {
            schema: schema.clone(),
            value,
        });
    }
    FormSubmission {
        form_id: form_id.into(),
        form_name: form_name.into(),
        fields: out,
    }
}
