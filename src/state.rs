use serde::Serialize;

use crate::validate::FieldError;

/// Current value of one field. Text for text fields and dropdowns (the
/// selected option *title*), Number for sliders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(i64),
}

impl FieldValue {
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Number(_) => "",
        }
    }

    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Number(_) => false,
        }
    }
}

/// What a text field is for. `Email` is a usage of the dedicated
/// email-collection flow, not a server schema kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextPurpose {
    Plain,
    TikTokLink,
    Email,
}

/// Renderable kind of an assembled field. No `Unknown` arm: unrecognized
/// schema entries never reach the state list.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text {
        multiline: bool,
        max_lines: Option<u32>,
        purpose: TextPurpose,
    },
    DropDown {
        /// Rendered option titles, sentinel "Other" already appended
        /// when the schema allows a free-text escape hatch.
        options: Vec<String>,
    },
    Slider {
        max: i64,
        step: i64,
        left_label: String,
        right_label: String,
    },
}

impl FieldKind {
    fn accepts(&self, value: &FieldValue) -> bool {
        match self {
            FieldKind::Text { .. } | FieldKind::DropDown { .. } => {
                matches!(value, FieldValue::Text(_))
            }
            FieldKind::Slider { .. } => matches!(value, FieldValue::Number(_)),
        }
    }
}

/// Mutable per-field UI state for one form-filling session. One entry per
/// non-Unknown schema field, plus one synthetic companion per dropdown with
/// an "Other" escape hatch; order is rendering order.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldState {
    pub id: String,
    pub kind: FieldKind,
    pub value: FieldValue,
    pub label: String,
    pub description: String,
    pub placeholder: String,
    pub visible: bool,
    pub required: bool,
    pub read_only: bool,
    pub edited: bool,
    pub error: Option<FieldError>,
    /// Set on a synthetic "other" text field: the id of the dropdown it
    /// belongs to. Siblings in the flat list, no parent/child graph.
    pub companion_of: Option<String>,
}

impl FieldState {
    pub fn text(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: FieldKind::Text {
                multiline: false,
                max_lines: None,
                purpose: TextPurpose::Plain,
            },
            value: FieldValue::Text(String::new()),
            label: label.into(),
            description: String::new(),
            placeholder: String::new(),
            visible: true,
            required: false,
            read_only: false,
            edited: false,
            error: None,
            companion_of: None,
        }
    }

    /// A standalone email field for the email-capture flow.
    pub fn email(id: impl Into<String>, label: impl Into<String>) -> Self {
        let mut f = Self::text(id, label);
        f.kind = FieldKind::Text {
            multiline: false,
            max_lines: None,
            purpose: TextPurpose::Email,
        };
        f
    }

    pub fn is_synthetic(&self) -> bool {
        self.companion_of.is_some()
    }
}

/// Replace a field's value and mark it edited. Returns false without
/// mutation when no field has the given id. A value variant that does not
/// match the field kind is a wiring defect, not user input: it trips a
/// debug assertion and is rejected.
pub fn set_value(fields: &mut [FieldState], id: &str, value: FieldValue) -> bool {
    let Some(fld) = fields.iter_mut().find(|f| f.id == id) else {
        return false;
    };
    if !fld.kind.accepts(&value) {
        debug_assert!(
            false,
            "type-mismatched value {value:?} for field '{id}' ({:?})",
            fld.kind
        );
        return false;
    }
    if fld.read_only {
        return false;
    }
    fld.value = value;
    fld.edited = true;
    recompute_visibility(fields);
    true
}

/// Recompute companion visibility from current sibling values: a synthetic
/// "other" box shows iff its parent dropdown currently selects the sentinel.
pub fn recompute_visibility(fields: &mut [FieldState]) {
    let shown: Vec<(usize, bool)> = fields
        .iter()
        .enumerate()
        .filter_map(|(i, f)| {
            let parent_id = f.companion_of.as_deref()?;
            let parent = fields.iter().find(|p| p.id == parent_id)?;
            Some((i, parent.value.as_text() == crate::assemble::OTHER_OPTION_TITLE))
        })
        .collect();
    for (i, vis) in shown {
        fields[i].visible = vis;
    }
}
