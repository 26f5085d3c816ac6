//! Merged entity structs.
//!
//! Courses own their sections. Professors, rooms and students are views
//! derived from the merged course set and the validated request data. All
//! structs derive `Serialize`, `Deserialize`, and `JsonSchema` so the
//! integrated document can be validated against its own schema.

mod course;
mod professor;
mod room;
mod student;

pub use course::{
    Course, CoursePlanning, IdentitySource, ProfessorRef, RequestSummary, RoomRef, Section,
};
pub use professor::{Professor, TaughtSection};
pub use room::{AssignedSection, Room};
pub use student::{Request, Student, request_weight};
