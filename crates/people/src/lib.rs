//! People domain module (persons and students as value objects).
//!
//! This crate contains the value-object model for people, implemented purely as
//! deterministic domain logic. The only IO is the opt-in file export.

pub mod export;
pub mod honorarium;
pub mod person;

pub use export::ExportError;
pub use honorarium::{Honorarium, honorarium};
pub use person::{
    DEFAULT_GPA, Overrides, Person, PersonKind, PersonRecord, Student, StudentOverrides, equals,
    render,
};
