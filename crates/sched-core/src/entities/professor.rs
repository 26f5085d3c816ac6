use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Everything one professor teaches across the merged course set.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Professor {
    pub id: i64,
    pub sections: Vec<TaughtSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaughtSection {
    pub course_id: String,
    pub course_code: Option<String>,
    pub course_title: Option<String>,
    pub section: Option<i64>,
    pub term: Option<String>,
    pub room: Option<String>,
}
