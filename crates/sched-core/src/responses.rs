//! Summary types printed as JSON by `sched` commands.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;

/// Why a record was left out of identity-bearing output.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Catalog record with neither Course ID nor Course Code.
    CourseWithoutIdentity,
    /// Catalog record whose identity was already merged.
    DuplicateCourse,
    /// Room record without a Course ID.
    RoomWithoutCourseId,
    /// Room record without a Room Number.
    RoomWithoutNumber,
    /// Lecturer record without a Course Code.
    LecturerWithoutCode,
    /// Lecturer record for a code and section already taught by another professor.
    DuplicateLecturerSection,
    /// Professor ID missing or not an integer.
    InvalidProfessorId,
    /// Request without a Student ID.
    RequestWithoutStudent,
    /// Request whose Course ID and Course Code match no merged course.
    RequestWithoutCourse,
}

/// Counters for records excluded by the missing-key policy.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SkipCounts(BTreeMap<SkipReason, u32>);

impl SkipCounts {
    pub fn record(&mut self, reason: SkipReason) {
        *self.0.entry(reason).or_default() += 1;
    }

    /// Add `count` skips at once, as reported by an index's unindexed total.
    pub fn add(&mut self, reason: SkipReason, count: usize) {
        if count == 0 {
            return;
        }
        let count = u32::try_from(count).unwrap_or(u32::MAX);
        let entry = self.0.entry(reason).or_default();
        *entry = entry.saturating_add(count);
    }

    #[must_use]
    pub fn get(&self, reason: SkipReason) -> u32 {
        self.0.get(&reason).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }
}

/// Outcome of validating one dependent dataset against the authority.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DatasetValidation {
    pub dataset: Dataset,
    pub authority: Dataset,
    pub total: u32,
    pub matched: u32,
    pub unmatched: u32,
}

/// Response from `sched validate`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ValidationSummary {
    pub authority_codes: u32,
    pub datasets: Vec<DatasetValidation>,
    pub written: Vec<String>,
}

/// Response from `sched run`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RunSummary {
    pub validation: ValidationSummary,
    pub courses: u32,
    pub synthesized_courses: u32,
    pub professors: u32,
    pub rooms: u32,
    pub students: u32,
    pub skipped: SkipCounts,
    pub duration_ms: u64,
}
