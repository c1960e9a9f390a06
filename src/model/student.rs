use crate::error::Error;
use std::cmp::Ordering;
use std::fmt;

/// Opaque non-empty student identifier. Ordering is ordinal on the
/// underlying string.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct StudentId(String);

impl StudentId {
    pub fn new(id: impl Into<String>) -> Result<StudentId, Error> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "student identifier must not be empty".to_owned(),
            ));
        }
        Ok(StudentId(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A student record. Fields are set once at construction; equality and
/// ordering consider the identifier only, so two records with the same id
/// compare equal even if their names differ.
#[derive(Clone, Debug)]
pub struct Student {
    id: StudentId,
    name: String,
    age: u32,
}

impl Student {
    pub fn new(id: &str, name: &str, age: u32) -> Result<Student, Error> {
        let id = StudentId::new(id)?;
        if name.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "student name must not be empty".to_owned(),
            ));
        }
        Ok(Student {
            id,
            name: name.to_owned(),
            age,
        })
    }

    pub fn id(&self) -> &StudentId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }
}

impl PartialEq for Student {
    fn eq(&self, other: &Student) -> bool {
        self.id == other.id
    }
}

impl Eq for Student {}

impl Ord for Student {
    fn cmp(&self, other: &Student) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl PartialOrd for Student {
    fn partial_cmp(&self, other: &Student) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}), age {}", self.name, self.id, self.age)
    }
}

#[test]
fn test_reject_empty_identity() {
    assert!(StudentId::new("").is_err());
    assert!(StudentId::new("   ").is_err());
    assert!(Student::new("", "Ada", 20).is_err());
    assert!(Student::new("s1", " ", 20).is_err());
    assert!(Student::new("s1", "Ada", 20).is_ok());
}

#[test]
fn test_identity_drives_comparison() {
    let a = Student::new("2021001", "Ada", 20).unwrap();
    let b = Student::new("2021002", "Grace", 19).unwrap();
    let a_again = Student::new("2021001", "Someone Else", 42).unwrap();
    assert!(a < b);
    assert_eq!(a, a_again);
}
