use serde::{Deserialize, Serialize};

use personae_core::ValueObject;

/// GPA a student starts with when none is given.
pub const DEFAULT_GPA: f64 = 4.0;

/// Kind discriminant of a [`PersonRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonKind {
    Person,
    Student,
}

/// Value object: a person identified only by their names.
///
/// Name fields are fixed at construction; use [`Person::with`] to derive a changed copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    first_name: String,
    last_name: String,
}

impl Person {
    /// Names are stored verbatim. Empty strings are allowed.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Copy of `self` with the given overrides applied (`None` keeps the current value).
    pub fn with(&self, overrides: Overrides) -> Self {
        Self {
            first_name: overrides
                .first_name
                .unwrap_or_else(|| self.first_name.clone()),
            last_name: overrides.last_name.unwrap_or_else(|| self.last_name.clone()),
        }
    }

    /// `(first_name, last_name)`, in that order.
    pub fn deconstruct(&self) -> (String, String) {
        (self.first_name.clone(), self.last_name.clone())
    }

    /// Record-style description, e.g. `Person { FirstName = Scott, LastName = Hunter }`.
    pub fn describe(&self) -> String {
        format!("Person {{ {} }}", self.describe_fields())
    }

    fn describe_fields(&self) -> String {
        format!(
            "FirstName = {}, LastName = {}",
            self.first_name, self.last_name
        )
    }
}

/// Placeholder person used when nothing better is known.
impl Default for Person {
    fn default() -> Self {
        Self::new("John", "Doe")
    }
}

impl core::fmt::Display for Person {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

impl From<Person> for (String, String) {
    fn from(value: Person) -> Self {
        (value.first_name, value.last_name)
    }
}

impl ValueObject for Person {}

/// Value object: a person enrolled as a student.
///
/// Unlike the names, `gpa` can be changed in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    #[serde(flatten)]
    person: Person,
    gpa: f64,
}

impl Student {
    /// New student with [`DEFAULT_GPA`].
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            person: Person::new(first_name, last_name),
            gpa: DEFAULT_GPA,
        }
    }

    pub fn with_gpa(mut self, gpa: f64) -> Self {
        self.gpa = gpa;
        self
    }

    pub fn gpa(&self) -> f64 {
        self.gpa
    }

    pub fn set_gpa(&mut self, gpa: f64) {
        self.gpa = gpa;
    }

    /// The base person view of this student.
    pub fn as_person(&self) -> &Person {
        &self.person
    }

    pub fn first_name(&self) -> &str {
        self.person.first_name()
    }

    pub fn last_name(&self) -> &str {
        self.person.last_name()
    }

    /// Copy of `self` with the given overrides applied.
    ///
    /// Accepts plain [`Overrides`] too, in which case the GPA is carried over.
    pub fn with(&self, overrides: impl Into<StudentOverrides>) -> Self {
        let overrides = overrides.into();
        Self {
            person: self.person.with(overrides.base),
            gpa: overrides.gpa.unwrap_or(self.gpa),
        }
    }

    pub fn deconstruct(&self) -> (String, String) {
        self.person.deconstruct()
    }

    /// Record-style description, e.g. `Student { FirstName = Scott, LastName = Hunter, Gpa = 3.8 }`.
    pub fn describe(&self) -> String {
        format!(
            "Student {{ {}, Gpa = {} }}",
            self.person.describe_fields(),
            self.gpa
        )
    }
}

/// GPAs compare by value, with NaN equal to NaN so every student equals its own copy.
impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.person == other.person && gpa_eq(self.gpa, other.gpa)
    }
}

fn gpa_eq(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

impl core::fmt::Display for Student {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.person, f)
    }
}

impl ValueObject for Student {}

/// A person of either kind.
///
/// Equality compares the kind first: a `Person` record never equals a `Student`
/// record, whatever their names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PersonRecord {
    Person(Person),
    Student(Student),
}

impl PersonRecord {
    pub fn kind(&self) -> PersonKind {
        match self {
            PersonRecord::Person(_) => PersonKind::Person,
            PersonRecord::Student(_) => PersonKind::Student,
        }
    }

    pub fn as_person(&self) -> &Person {
        match self {
            PersonRecord::Person(p) => p,
            PersonRecord::Student(s) => s.as_person(),
        }
    }

    pub fn as_student(&self) -> Option<&Student> {
        match self {
            PersonRecord::Student(s) => Some(s),
            PersonRecord::Person(_) => None,
        }
    }

    pub fn first_name(&self) -> &str {
        self.as_person().first_name()
    }

    pub fn last_name(&self) -> &str {
        self.as_person().last_name()
    }

    /// Copy with name overrides applied. The concrete kind (and a student's GPA) is kept.
    pub fn with(&self, overrides: Overrides) -> Self {
        match self {
            PersonRecord::Person(p) => PersonRecord::Person(p.with(overrides)),
            PersonRecord::Student(s) => PersonRecord::Student(s.with(overrides)),
        }
    }

    pub fn deconstruct(&self) -> (String, String) {
        self.as_person().deconstruct()
    }

    pub fn describe(&self) -> String {
        match self {
            PersonRecord::Person(p) => p.describe(),
            PersonRecord::Student(s) => s.describe(),
        }
    }
}

impl core::fmt::Display for PersonRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(self.as_person(), f)
    }
}

impl From<Person> for PersonRecord {
    fn from(value: Person) -> Self {
        PersonRecord::Person(value)
    }
}

impl From<Student> for PersonRecord {
    fn from(value: Student) -> Self {
        PersonRecord::Student(value)
    }
}

impl ValueObject for PersonRecord {}

/// Structural equality between two records (kind included).
pub fn equals(a: &PersonRecord, b: &PersonRecord) -> bool {
    a == b
}

/// Display form: `"FirstName LastName"`.
pub fn render(p: &PersonRecord) -> String {
    p.to_string()
}

/// Name overrides for [`Person::with`] / [`PersonRecord::with`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Optional new first name (if None, keep existing).
    pub first_name: Option<String>,
    /// Optional new last name (if None, keep existing).
    pub last_name: Option<String>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = Some(value.into());
        self
    }

    pub fn last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = Some(value.into());
        self
    }
}

/// Overrides for [`Student::with`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentOverrides {
    pub base: Overrides,
    /// Optional new GPA (if None, keep existing).
    pub gpa: Option<f64>,
}

impl StudentOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first_name(mut self, value: impl Into<String>) -> Self {
        self.base = self.base.first_name(value);
        self
    }

    pub fn last_name(mut self, value: impl Into<String>) -> Self {
        self.base = self.base.last_name(value);
        self
    }

    pub fn gpa(mut self, value: f64) -> Self {
        self.gpa = Some(value);
        self
    }
}

impl From<Overrides> for StudentOverrides {
    fn from(base: Overrides) -> Self {
        Self { base, gpa: None }
    }
}
