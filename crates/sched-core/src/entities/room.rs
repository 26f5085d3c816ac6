use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A room and every course section assigned to it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Room {
    pub number: String,
    pub sections: Vec<AssignedSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AssignedSection {
    pub course_id: String,
    pub course_code: Option<String>,
    pub course_title: Option<String>,
    pub section: Option<i64>,
    pub term: Option<String>,
    pub professor: Option<i64>,
}
