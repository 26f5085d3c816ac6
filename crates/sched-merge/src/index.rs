//! Cross-reference indexes.
//!
//! An index maps the string-coerced value of one field to every record
//! carrying that value, in input order. Records whose key is missing or null
//! are left out and only counted. Indexes borrow the datasets they were built
//! from and are never mutated after construction.

use std::collections::BTreeMap;

use sched_core::dataset::Sources;
use sched_core::fields::{course_list, lecturer_details, rooms_data, student_requests};
use sched_core::record::Record;

/// One-to-many lookup over a dataset, keyed by a single derived value.
#[derive(Debug, Clone, Default)]
pub struct CrossIndex<'a> {
    label: String,
    entries: BTreeMap<String, Vec<&'a Record>>,
    order: Vec<String>,
    unindexed: usize,
}

impl<'a> CrossIndex<'a> {
    /// Index `records` by the string-coerced value of `field`.
    #[must_use]
    pub fn build(records: &'a [Record], field: &str) -> Self {
        Self::build_with(records, field, |record| record.key(field))
    }

    /// Index `records` by the lower-cased value of `field`.
    #[must_use]
    pub fn build_lower(records: &'a [Record], field: &str) -> Self {
        Self::build_with(records, field, |record| record.key_lower(field))
    }

    /// Index `records` by an arbitrary derived key. `None` keys are skipped.
    pub fn build_with<F>(records: &'a [Record], label: &str, key: F) -> Self
    where
        F: Fn(&Record) -> Option<String>,
    {
        let mut index = Self {
            label: label.to_string(),
            ..Self::default()
        };
        for record in records {
            let Some(value) = key(record) else {
                index.unindexed += 1;
                continue;
            };
            let bucket = index.entries.entry(value).or_insert_with_key(|value| {
                index.order.push(value.clone());
                Vec::new()
            });
            bucket.push(record);
        }
        if index.unindexed > 0 {
            tracing::debug!(
                index = %index.label,
                skipped = index.unindexed,
                "records without key left out of index"
            );
        }
        index
    }

    /// Records sharing `key`, in input order. Empty when the key is unknown.
    #[must_use]
    pub fn get(&self, key: &str) -> &[&'a Record] {
        self.entries.get(key).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Distinct keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records that had no usable key.
    #[must_use]
    pub const fn unindexed(&self) -> usize {
        self.unindexed
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Composite key for lecturer lookups on (Course Code, Section Number).
#[must_use]
pub fn section_key(code_lower: &str, section: Option<i64>) -> String {
    match section {
        Some(number) => format!("{code_lower}#{number}"),
        None => format!("{code_lower}#"),
    }
}

/// Every index the merger and graph builder read.
#[derive(Debug, Clone)]
pub struct Indexes<'a> {
    pub courses_by_id: CrossIndex<'a>,
    /// Keys are lower-cased course codes.
    pub courses_by_code: CrossIndex<'a>,
    pub rooms_by_course_id: CrossIndex<'a>,
    pub rooms_by_number: CrossIndex<'a>,
    /// Keys are integer-coerced professor IDs.
    pub lecturers_by_professor_id: CrossIndex<'a>,
    /// Keys come from [`section_key`].
    pub lecturers_by_section: CrossIndex<'a>,
    pub requests_by_course_id: CrossIndex<'a>,
    pub requests_by_student_id: CrossIndex<'a>,
}

impl<'a> Indexes<'a> {
    #[must_use]
    pub fn build(sources: &'a Sources) -> Self {
        let lecturers = sources.lecturer_details.as_slice();
        Self {
            courses_by_id: CrossIndex::build(&sources.course_list, course_list::COURSE_ID),
            courses_by_code: CrossIndex::build_lower(
                &sources.course_list,
                course_list::COURSE_CODE,
            ),
            rooms_by_course_id: CrossIndex::build(&sources.rooms_data, rooms_data::COURSE_ID),
            rooms_by_number: CrossIndex::build(&sources.rooms_data, rooms_data::ROOM_NUMBER),
            lecturers_by_professor_id: CrossIndex::build_with(
                lecturers,
                lecturer_details::PROF_ID,
                |record| {
                    record
                        .integer(lecturer_details::PROF_ID)
                        .map(|id| id.to_string())
                },
            ),
            lecturers_by_section: CrossIndex::build_with(lecturers, "lecturer section", |record| {
                let section = record.integer(lecturer_details::SECTION_NUMBER);
                record
                    .key_lower(lecturer_details::COURSE_CODE)
                    .map(|code| section_key(&code, section))
            }),
            requests_by_course_id: CrossIndex::build(
                &sources.student_requests,
                student_requests::COURSE_ID,
            ),
            requests_by_student_id: CrossIndex::build(
                &sources.student_requests,
                student_requests::STUDENT_ID,
            ),
        }
    }
}
