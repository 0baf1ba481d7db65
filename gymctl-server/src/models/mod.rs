//! Domain models
//!
//! Request bodies decode into these types; patch input is validated into a
//! `FieldUpdate` before any SQL runs.

pub mod field;
pub mod member;
pub mod validation;

pub use field::{FieldKind, FieldUpdate, FieldValue, MemberField};
pub use member::{EmergencyContact, Member, MemberSummary, Membership, Plan};
pub use validation::ValidationError;
