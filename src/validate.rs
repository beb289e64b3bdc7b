use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

use crate::assemble::OTHER_OPTION_TITLE;
use crate::state::{FieldKind, FieldState, TextPurpose};

/// Validation outcome attached to a single field. Surfaced to the rendering
/// collaborator for inline display; never raised as an error value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldError {
    Empty,
    EmptyCategory,
    NoTikTokLink,
    EmailInvalid,
}

static TIKTOK_RE: OnceLock<Regex> = OnceLock::new();
static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn tiktok_re() -> &'static Regex {
    TIKTOK_RE.get_or_init(|| {
        Regex::new(r"(?i)^https?://([a-z0-9-]+\.)?tiktok\.com/\S+$").expect("tiktok pattern")
    })
}

fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"(?i)^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}$").expect("email pattern")
    })
}

pub fn is_tiktok_link(s: &str) -> bool {
    tiktok_re().is_match(s.trim())
}

pub fn is_valid_email(s: &str) -> bool {
    email_re().is_match(s.trim())
}

/// Run all field rules and attach errors in place. Returns true iff no
/// visible field carries an error afterwards. Idempotent: errors are cleared
/// before each pass, so repeated calls on the same values agree.
///
/// Hidden fields (a collapsed "other" box) are exempt even when required.
/// Required-empty takes precedence over shape checks; shape checks run only
/// on non-blank values, including for non-required fields.
pub fn validate(fields: &mut [FieldState]) -> bool {
    for f in fields.iter_mut() {
        f.error = None;
    }
    let mut errors: Vec<(usize, FieldError)> = Vec::new();
    for (i, f) in fields.iter().enumerate() {
        if !f.visible {
            continue;
        }
        match &f.kind {
            FieldKind::Text { purpose, .. } => {
                if f.required && f.value.is_blank() {
                    errors.push((i, FieldError::Empty));
                    continue;
                }
                if f.value.is_blank() {
                    continue;
                }
                match purpose {
                    TextPurpose::TikTokLink if !is_tiktok_link(f.value.as_text()) => {
                        errors.push((i, FieldError::NoTikTokLink));
                    }
                    TextPurpose::Email if !is_valid_email(f.value.as_text()) => {
                        errors.push((i, FieldError::EmailInvalid));
                    }
                    _ => {}
                }
            }
            FieldKind::DropDown { .. } => {
                if f.required && f.value.is_blank() {
                    errors.push((i, FieldError::Empty));
                    continue;
                }
                if f.value.as_text() == OTHER_OPTION_TITLE {
                    // The free-text box answers for the sentinel choice; a
                    // blank one fails on the companion, not the dropdown.
                    let companion = fields
                        .iter()
                        .position(|c| c.companion_of.as_deref() == Some(f.id.as_str()));
                    if let Some(ci) = companion {
                        if fields[ci].value.is_blank() {
                            errors.push((ci, FieldError::EmptyCategory));
                        }
                    }
                }
            }
            FieldKind::Slider { .. } => {}
        }
    }
    let ok = errors.is_empty();
    for (i, e) in errors {
        fields[i].error = Some(e);
    }
    ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble::assemble;
    use crate::schema::decode_fields;
    use crate::state::{set_value, FieldState, FieldValue};
    use serde_json::json;

    fn link_form() -> Vec<FieldState> {
        let schemas = decode_fields(&json!([
            {"type": "TextField", "id": "link", "isRequired": true, "label": "Link",
             "isTikTokLink": true},
            {"type": "DropDown", "id": "cat", "isRequired": true, "label": "Category",
             "options": [{"id": "a", "title": "Cats"}],
             "selectedOptionId": "", "hasOtherOption": true}
        ]))
        .unwrap();
        assemble(&schemas, None)
    }

    #[test]
    fn required_blank_text_is_empty() {
        let mut fields = link_form();
        assert!(!validate(&mut fields));
        assert_eq!(fields[0].error, Some(FieldError::Empty));
    }

    #[test]
    fn blank_takes_precedence_over_link_shape() {
        let mut fields = link_form();
        validate(&mut fields);
        // required + blank on a link-tagged field reports Empty, not NoTikTokLink
        assert_eq!(fields[0].error, Some(FieldError::Empty));
    }

    #[test]
    fn bad_link_shape_is_flagged() {
        let mut fields = link_form();
        set_value(&mut fields, "link", FieldValue::Text("not a url".into()));
        assert!(!validate(&mut fields));
        assert_eq!(fields[0].error, Some(FieldError::NoTikTokLink));
    }

    #[test]
    fn good_link_passes() {
        let mut fields = link_form();
        set_value(
            &mut fields,
            "link",
            FieldValue::Text("https://vm.tiktok.com/ZM8x".into()),
        );
        set_value(&mut fields, "cat", FieldValue::Text("Cats".into()));
        assert!(validate(&mut fields));
        assert!(fields.iter().all(|f| f.error.is_none()));
    }

    #[test]
    fn other_with_blank_companion_fails_on_companion() {
        let mut fields = link_form();
        set_value(
            &mut fields,
            "link",
            FieldValue::Text("https://www.tiktok.com/@u/video/1".into()),
        );
        set_value(&mut fields, "cat", FieldValue::Text("Other".into()));
        assert!(!validate(&mut fields));
        assert!(fields[1].error.is_none());
        assert_eq!(fields[2].error, Some(FieldError::EmptyCategory));
    }

    #[test]
    fn other_with_filled_companion_passes() {
        let mut fields = link_form();
        set_value(
            &mut fields,
            "link",
            FieldValue::Text("https://vm.tiktok.com/ZM8x".into()),
        );
        set_value(&mut fields, "cat", FieldValue::Text("Other".into()));
        set_value(
            &mut fields,
            "cat_other_category_id",
            FieldValue::Text("Lizards".into()),
        );
        assert!(validate(&mut fields));
    }

    #[test]
    fn hidden_fields_are_exempt() {
        let mut fields = link_form();
        // companion is hidden and blank; only the two visible fields count
        set_value(
            &mut fields,
            "link",
            FieldValue::Text("https://vm.tiktok.com/ZM8x".into()),
        );
        set_value(&mut fields, "cat", FieldValue::Text("Cats".into()));
        assert!(validate(&mut fields));
    }

    #[test]
    fn validate_is_idempotent() {
        let mut fields = link_form();
        set_value(&mut fields, "link", FieldValue::Text("nope".into()));
        assert!(!validate(&mut fields));
        let first = fields.clone();
        assert!(!validate(&mut fields));
        assert_eq!(fields, first);
    }

    #[test]
    fn email_shapes() {
        let mut fields = vec![FieldState::email("em", "Email")];
        set_value(&mut fields, "em", FieldValue::Text("a@b.com".into()));
        assert!(validate(&mut fields));
        set_value(&mut fields, "em", FieldValue::Text("a@b".into()));
        assert!(!validate(&mut fields));
        assert_eq!(fields[0].error, Some(FieldError::EmailInvalid));
        // blank + not required: no error
        set_value(&mut fields, "em", FieldValue::Text(String::new()));
        assert!(validate(&mut fields));
        assert!(fields[0].error.is_none());
    }

    #[test]
    fn slider_never_errors() {
        let schemas = decode_fields(&json!([
            {"type": "Slider", "id": "s", "isRequired": true, "max": 10, "step": 1}
        ]))
        .unwrap();
        let mut fields = assemble(&schemas, None);
        assert!(validate(&mut fields));
    }

    #[test]
    fn link_shape_checked_even_when_not_required() {
        let schemas = decode_fields(&json!([
            {"type": "TextField", "id": "link", "isRequired": false, "isTikTokLink": true}
        ]))
        .unwrap();
        let mut fields = assemble(&schemas, None);
        assert!(validate(&mut fields));
        set_value(&mut fields, "link", FieldValue::Text("tiktok dot com".into()));
        assert!(!validate(&mut fields));
        assert_eq!(fields[0].error, Some(FieldError::NoTikTokLink));
    }
}
