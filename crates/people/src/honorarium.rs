//! Honorarium classification of people by academic standing.

use serde::{Deserialize, Serialize};

use personae_core::{DomainError, DomainResult};

use crate::person::PersonRecord;

/// Standing a person is awarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Honorarium {
    Satisfactory,
    DistinguishedHonors,
    HighHonors,
    Honors,
    Pass,
    Graduate,
}

impl Honorarium {
    pub fn as_str(self) -> &'static str {
        match self {
            Honorarium::Satisfactory => "Satisfactory",
            Honorarium::DistinguishedHonors => "Distinguished honors",
            Honorarium::HighHonors => "High honors",
            Honorarium::Honors => "Honors",
            Honorarium::Pass => "pass",
            Honorarium::Graduate => "graduate",
        }
    }
}

impl core::fmt::Display for Honorarium {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered GPA rules, first match wins. Anything unmatched is a pass.
///
/// The first rule's lower bound is exclusive, so a GPA of exactly 1.0 (or below)
/// is a pass rather than satisfactory.
const GPA_RULES: [(fn(f64) -> bool, Honorarium); 4] = [
    (is_satisfactory, Honorarium::Satisfactory),
    (is_perfect, Honorarium::DistinguishedHonors),
    (is_high, Honorarium::HighHonors),
    (is_honors, Honorarium::Honors),
];

fn is_satisfactory(gpa: f64) -> bool {
    gpa < 3.0 && gpa > 1.0
}

fn is_perfect(gpa: f64) -> bool {
    gpa == 4.0
}

fn is_high(gpa: f64) -> bool {
    gpa >= 3.5
}

fn is_honors(gpa: f64) -> bool {
    gpa >= 3.0
}

fn classify_gpa(gpa: f64) -> Honorarium {
    GPA_RULES
        .iter()
        .find(|(matches, _)| matches(gpa))
        .map(|(_, honorarium)| *honorarium)
        .unwrap_or(Honorarium::Pass)
}

/// Classify a person: students by GPA, everyone else as a graduate.
///
/// Fails with [`DomainError::NullInput`] when no person is given.
pub fn honorarium(p: Option<&PersonRecord>) -> DomainResult<Honorarium> {
    match p {
        None => Err(DomainError::null_input("p", "Person can't be null")),
        Some(PersonRecord::Student(s)) => Ok(classify_gpa(s.gpa())),
        Some(PersonRecord::Person(_)) => Ok(Honorarium::Graduate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::{Person, Student};

    fn student(gpa: f64) -> PersonRecord {
        Student::new("Scott", "Hunter").with_gpa(gpa).into()
    }

    fn classify(gpa: f64) -> &'static str {
        honorarium(Some(&student(gpa))).unwrap().as_str()
    }

    #[test]
    fn plain_person_is_a_graduate() {
        let p: PersonRecord = Person::new("Scott", "Hunter").into();
        assert_eq!(honorarium(Some(&p)).unwrap(), Honorarium::Graduate);
        assert_eq!(honorarium(Some(&p)).unwrap().to_string(), "graduate");
    }

    #[test]
    fn missing_person_is_rejected() {
        let err = honorarium(None).unwrap_err();
        match err {
            DomainError::NullInput { param, .. } => assert_eq!(param, "p"),
            _ => panic!("Expected NullInput error for missing person"),
        }
    }

    #[test]
    fn student_gpa_bands() {
        assert_eq!(classify(3.8), "High honors");
        assert_eq!(classify(4.0), "Distinguished honors");
        assert_eq!(classify(3.5), "High honors");
        assert_eq!(classify(3.0), "Honors");
        assert_eq!(classify(3.2), "Honors");
        assert_eq!(classify(2.9), "Satisfactory");
        assert_eq!(classify(1.5), "Satisfactory");
    }

    #[test]
    fn default_student_has_distinguished_honors() {
        let s: PersonRecord = Student::new("Scott", "Hunter").into();
        assert_eq!(honorarium(Some(&s)).unwrap(), Honorarium::DistinguishedHonors);
    }

    // The satisfactory band starts strictly above 1.0; at or below it falls through to pass.
    #[test]
    fn gpa_at_or_below_one_is_a_pass() {
        assert_eq!(classify(1.0), "pass");
        assert_eq!(classify(0.5), "pass");
        assert_eq!(classify(0.0), "pass");
        assert_eq!(classify(-1.0), "pass");
    }

    #[test]
    fn out_of_range_and_nan_gpa() {
        assert_eq!(classify(4.5), "High honors");
        assert_eq!(classify(f64::NAN), "pass");
    }

    #[test]
    fn classification_uses_current_gpa() {
        let mut s = Student::new("Scott", "Hunter");
        s.set_gpa(2.0);
        let record: PersonRecord = s.into();
        assert_eq!(honorarium(Some(&record)).unwrap(), Honorarium::Satisfactory);
    }
}
