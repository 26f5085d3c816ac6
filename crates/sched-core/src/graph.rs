//! The integrated document written at the end of a run.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Course, Professor, Room, Student};

/// Courses plus the professor, student and room views derived from them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct IntegratedGraph {
    pub courses: Vec<Course>,
    pub professors: Vec<Professor>,
    pub students: Vec<Student>,
    pub rooms: Vec<Room>,
}

impl IntegratedGraph {
    #[must_use]
    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|course| course.id == id)
    }

    #[must_use]
    pub fn professor(&self, id: i64) -> Option<&Professor> {
        self.professors.iter().find(|professor| professor.id == id)
    }

    #[must_use]
    pub fn room(&self, number: &str) -> Option<&Room> {
        self.rooms.iter().find(|room| room.number == number)
    }

    #[must_use]
    pub fn student(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|student| student.id == id)
    }
}
