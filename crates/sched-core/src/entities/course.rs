use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Where a course's identity came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum IdentitySource {
    /// The authoritative Course ID.
    CourseId,
    /// Course Code, used when a catalog record has no Course ID.
    CourseCode,
    /// Deterministic hash of code and section for lecturer-only evidence.
    Synthetic,
}

/// A merged course. `id` is unique across the merged set.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Course {
    pub id: String,
    pub identity: IdentitySource,
    pub code: Option<String>,
    pub title: Option<String>,
    pub length: Option<Value>,
    pub credits: Option<Value>,
    pub department: Option<String>,
    #[serde(flatten)]
    pub planning: CoursePlanning,
    pub sections: Vec<Section>,
}

/// Scheduling constraints carried by catalog records. Empty for courses
/// created from room or lecturer evidence alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CoursePlanning {
    pub priority: Option<Value>,
    pub available_blocks: Vec<String>,
    pub unavailable_blocks: Vec<String>,
    pub minimum_section_size: Option<i64>,
    pub target_section_size: Option<i64>,
    pub maximum_section_size: Option<i64>,
    pub number_of_sections: Option<i64>,
    pub total_credits: Option<Value>,
}

impl Course {
    #[must_use]
    pub fn section(&self, number: Option<i64>) -> Option<&Section> {
        self.sections.iter().find(|section| section.number == number)
    }

    #[must_use]
    pub const fn is_synthetic(&self) -> bool {
        matches!(self.identity, IdentitySource::Synthetic)
    }
}

/// One section of a course. Linked to at most one room and one professor.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Section {
    pub number: Option<i64>,
    pub term: Option<String>,
    /// Year, term description and term name come from the room record.
    pub year: Option<String>,
    pub term_description: Option<String>,
    pub term_name: Option<String>,
    pub room: Option<RoomRef>,
    pub professor: Option<ProfessorRef>,
    pub requests: Vec<RequestSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RoomRef {
    pub number: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProfessorRef {
    pub id: i64,
}

/// A student request as seen from the course it targets.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RequestSummary {
    pub student_id: String,
    #[serde(rename = "type")]
    pub request_type: Option<String>,
    /// Numeric weight of `type`: Required 3, Requested 2, Recommended 1.
    pub weight: Option<u8>,
    pub priority: Option<Value>,
    pub start_term: Option<String>,
}
