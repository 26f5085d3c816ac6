use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A student, synthesized from every validated request sharing a Student ID.
/// Never emitted without at least one request.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Student {
    pub id: String,
    pub college_year: Option<Value>,
    pub requests: Vec<Request>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Request {
    /// ID of the merged course the request resolved to.
    pub course_id: String,
    pub course_code: Option<String>,
    pub course_title: Option<String>,
    #[serde(rename = "type")]
    pub request_type: Option<String>,
    pub weight: Option<u8>,
    pub priority: Option<Value>,
    pub start_term: Option<String>,
    pub length: Option<Value>,
}

/// Weight of a request type. Unknown or missing types have none.
#[must_use]
pub fn request_weight(request_type: &str) -> Option<u8> {
    match request_type.trim().to_ascii_lowercase().as_str() {
        "required" => Some(3),
        "requested" => Some(2),
        "recommended" => Some(1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_types_map_to_weights() {
        assert_eq!(request_weight("Required"), Some(3));
        assert_eq!(request_weight(" requested "), Some(2));
        assert_eq!(request_weight("RECOMMENDED"), Some(1));
        assert_eq!(request_weight("Elective"), None);
    }
}
