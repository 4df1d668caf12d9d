//! The walkthrough: build a student, rename it and back, compare, classify.

use std::io::Write;

use anyhow::Context;

use personae_core::identity_equals;
use personae_people::{Honorarium, Overrides, Person, PersonRecord, Student, equals, honorarium};

use crate::config::DemoConfig;

/// What the walkthrough observed.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoReport {
    /// Student equals the copy renamed away and back.
    pub equals: bool,
    /// Student is the same instance as that copy.
    pub reference_equals: bool,
    /// Student equals a plain person with the same names.
    pub person_and_student_equal: bool,
    pub person_status: Honorarium,
    pub student_status: Honorarium,
}

/// Run the walkthrough, printing one line per observation to `out`.
pub fn run(config: &DemoConfig, out: &mut impl Write) -> anyhow::Result<DemoReport> {
    let person: PersonRecord = Student::new(config.first_name.as_str(), config.last_name.as_str())
        .with_gpa(config.gpa)
        .into();

    let other_person = person.with(Overrides::new().last_name(config.alias_last_name.as_str()));

    writeln!(out, "{}", person.describe())?;
    writeln!(out, "{}", other_person.describe())?;

    let original_person = other_person.with(Overrides::new().last_name(person.last_name()));

    let report_equals = equals(&person, &original_person);
    let reference_equals = identity_equals(&person, &original_person);
    writeln!(out, "Equals: {report_equals}")?;
    writeln!(out, "Reference Equals: {reference_equals}")?;

    let p: PersonRecord = Person::new(person.first_name(), person.last_name()).into();
    let person_and_student_equal = equals(&person, &p);
    writeln!(out, "Person and Student: Equals: {person_and_student_equal}")?;

    let (first, last) = person.deconstruct();
    writeln!(out, "{first}, {last}")?;

    let person_status = honorarium(Some(&p))?;
    let student_status = honorarium(Some(&other_person))?;
    writeln!(out, "Person status: {person_status}")?;
    writeln!(out, "Student status: {student_status}")?;

    if let Some(path) = &config.export_path {
        person
            .write_to_file(path)
            .with_context(|| format!("exporting {}", person.describe()))?;
        tracing::info!(path = %path.display(), "exported student record");
    }

    Ok(DemoReport {
        equals: report_equals,
        reference_equals,
        person_and_student_equal,
        person_status,
        student_status,
    })
}
