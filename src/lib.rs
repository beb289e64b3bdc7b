//! Dynamic form model engine.
//!
//! Turns a server-delivered field schema into an ordered, editable field
//! state list, tracks per-field edits and validation errors, and serializes
//! the result back into a submission payload. Rendering, transport, and
//! persistence are collaborators on the other side of plain data: schema
//! JSON in, `FormSubmission` out.
//!
//! Typical flow:
//! `schema::decode_fields` → `assemble::assemble` → user edits via
//! `state::set_value` → `validate::validate` on submit → if valid,
//! `submit::serialize`.
//!
//! All operations are synchronous, bounded-time transforms over in-memory
//! lists; callers needing concurrency serialize access externally.

pub mod assemble;
pub mod schema;
pub mod state;
pub mod submit;
pub mod validate;

pub use assemble::{assemble, OTHER_OPTION_TITLE};
pub use schema::{decode_fields, FieldSchema, SchemaOption};
pub use state::{set_value, FieldKind, FieldState, FieldValue, TextPurpose};
pub use submit::{serialize, FormSubmission, SubmittedField};
pub use validate::{validate, FieldError};
