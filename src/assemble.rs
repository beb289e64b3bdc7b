use crate::schema::FieldSchema;
use crate::state::{FieldKind, FieldState, FieldValue, TextPurpose};

/// Title of the client-injected escape-hatch option appended to dropdowns
/// declared with `hasOtherOption`.
pub const OTHER_OPTION_TITLE: &str = "Other";

/// Suffix of the synthetic free-text companion field derived from a dropdown.
pub const OTHER_FIELD_SUFFIX: &str = "_other_category_id";

/// Suffix of the injected "Other" option's id. Deliberately distinct from
/// `OTHER_FIELD_SUFFIX` so the option id and the companion field id can never
/// collide within one form.
pub const OTHER_OPTION_SUFFIX: &str = "_other_option_id";

const OTHER_FIELD_LABEL: &str = "Suggest a category";

pub fn other_field_id(parent_id: &str) -> String {
    format!("{parent_id}{OTHER_FIELD_SUFFIX}")
}

pub fn other_option_id(parent_id: &str) -> String {
    format!("{parent_id}{OTHER_OPTION_SUFFIX}")
}

/// Build the ordered, renderable field-state list for one form session.
///
/// One state per non-Unknown schema entry, in schema order, plus one hidden
/// companion text field immediately after each dropdown that allows "Other".
/// When `tiktok_url` is given, the state of the first TextField schema entry
/// is pre-filled with it and locked (the shared-link arrival flow).
pub fn assemble(schemas: &[FieldSchema], tiktok_url: Option<&str>) -> Vec<FieldState> {
    let first_text_idx = schemas
        .iter()
        .position(|s| matches!(s, FieldSchema::TextField { .. }));
    let mut out: Vec<FieldState> = Vec::with_capacity(schemas.len());
    for (idx, schema) in schemas.iter().enumerate() {
        match schema {
            FieldSchema::TextField {
                id,
                is_required,
                label,
                placeholder,
                description,
                multiline,
                max_lines,
                is_tik_tok_link,
            } => {
                let purpose = if *is_tik_tok_link == Some(true) {
                    TextPurpose::TikTokLink
                } else {
                    TextPurpose::Plain
                };
                let mut fld = FieldState {
                    id: id.clone(),
                    kind: FieldKind::Text {
                        multiline: *multiline,
                        max_lines: *max_lines,
                        purpose,
                    },
                    value: FieldValue::Text(String::new()),
                    label: label.clone(),
                    description: description.clone(),
                    placeholder: placeholder.clone(),
                    visible: true,
                    required: *is_required,
                    read_only: false,
                    edited: false,
                    error: None,
                    companion_of: None,
                };
                if Some(idx) == first_text_idx {
                    if let Some(url) = tiktok_url {
                        fld.read_only = true;
                        fld.value = FieldValue::Text(url.to_string());
                    }
                }
                out.push(fld);
            }
            FieldSchema::DropDown {
                id,
                is_required,
                label,
                description,
                placeholder,
                options,
                selected_option_id,
                has_other_option,
            } => {
                // Dangling selectedOptionId degrades to an empty selection.
                let selected_title = options
                    .iter()
                    .find(|o| o.id == *selected_option_id)
                    .map(|o| o.title.clone())
                    .unwrap_or_default();
                let mut titles: Vec<String> =
                    options.iter().map(|o| o.title.clone()).collect();
                if *has_other_option {
                    titles.push(OTHER_OPTION_TITLE.to_string());
                }
                out.push(FieldState {
                    id: id.clone(),
                    kind: FieldKind::DropDown { options: titles },
                    value: FieldValue::Text(selected_title),
                    label: label.clone(),
                    description: description.clone(),
                    placeholder: placeholder.clone(),
                    visible: true,
                    required: *is_required,
                    read_only: false,
                    edited: false,
                    error: None,
                    companion_of: None,
                });
                if *has_other_option {
                    out.push(FieldState {
                        id: other_field_id(id),
                        kind: FieldKind::Text {
                            multiline: false,
                            max_lines: None,
                            purpose: TextPurpose::Plain,
                        },
                        value: FieldValue::Text(String::new()),
                        label: OTHER_FIELD_LABEL.to_string(),
                        description: String::new(),
                        placeholder: placeholder.clone(),
                        visible: false,
                        required: false,
                        read_only: false,
                        edited: false,
                        error: None,
                        companion_of: Some(id.clone()),
                    });
                }
            }
            FieldSchema::Slider {
                id,
                is_required,
                label,
                description,
                max,
                step,
                left_label,
                right_label,
            } => {
                out.push(FieldState {
                    id: id.clone(),
                    kind: FieldKind::Slider {
                        max: *max,
                        step: *step,
                        left_label: left_label.clone(),
                        right_label: right_label.clone(),
                    },
                    value: FieldValue::Number(0),
                    label: label.clone(),
                    description: description.clone(),
                    placeholder: String::new(),
                    visible: true,
                    required: *is_required,
                    read_only: false,
                    edited: false,
                    error: None,
                    companion_of: None,
                });
            }
            FieldSchema::Unknown => {}
        }
    }
    out
}
