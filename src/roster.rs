use crate::model::{Student, StudentId};

/// In-memory student store, insertion order preserved. Records are never
/// mutated in place; they can only be added or removed.
#[derive(Debug, Default)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    pub fn new() -> Roster {
        Roster::default()
    }

    pub fn add(&mut self, student: Student) {
        self.students.push(student);
    }

    /// Remove the first record matching this identifier. Returns whether a
    /// record was found.
    pub fn remove(&mut self, id: &StudentId) -> bool {
        match self.students.iter().position(|s| s.id() == id) {
            Some(index) => {
                self.students.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &StudentId) -> Option<&Student> {
        self.students.iter().find(|s| s.id() == id)
    }

    pub fn all(&self) -> Vec<Student> {
        self.students.clone()
    }

    pub fn find<F>(&self, predicate: F) -> Vec<Student>
    where
        F: Fn(&Student) -> bool,
    {
        self.students
            .iter()
            .filter(|s| predicate(s))
            .cloned()
            .collect()
    }

    /// Students whose age falls within `min..=max`.
    pub fn by_age(&self, min: u32, max: u32) -> Vec<Student> {
        self.find(|s| s.age() >= min && s.age() <= max)
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}
