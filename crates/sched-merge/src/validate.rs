//! Referential validation against the lecturer course codes.
//!
//! Each dependent dataset (student requests, course catalog, room data) is
//! split into records whose Course Code appears, case-insensitively, in the
//! lecturer dataset and records that do not. Nothing is dropped: the
//! unmatched partition is kept for the audit artifact.

use std::collections::BTreeSet;

use sched_core::dataset::{Dataset, Sources};
use sched_core::fields::{course_list, lecturer_details, rooms_data, student_requests};
use sched_core::record::Record;
use sched_core::responses::DatasetValidation;

/// Lower-cased course codes that define validity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorityCodes(BTreeSet<String>);

impl AuthorityCodes {
    /// Collect the lower-cased, non-null values of `field`.
    #[must_use]
    pub fn from_records(records: &[Record], field: &str) -> Self {
        Self(
            records
                .iter()
                .filter_map(|record| record.key_lower(field))
                .collect(),
        )
    }

    #[must_use]
    pub fn from_lecturers(records: &[Record]) -> Self {
        Self::from_records(records, lecturer_details::COURSE_CODE)
    }

    /// Case-insensitive membership.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.0.contains(&code.trim().to_lowercase())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Matched and unmatched records, each in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition {
    pub matched: Vec<Record>,
    pub unmatched: Vec<Record>,
}

/// Split `records` on whether `code_field` resolves against `authority`.
///
/// A null, absent or unknown code lands in `unmatched`.
#[must_use]
pub fn partition(records: Vec<Record>, code_field: &str, authority: &AuthorityCodes) -> Partition {
    let (matched, unmatched) = records.into_iter().partition(|record| {
        record
            .key(code_field)
            .is_some_and(|code| authority.contains(&code))
    });
    Partition { matched, unmatched }
}

/// Sources after validation: dependent datasets hold only matched records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatedSources {
    pub sources: Sources,
    /// Unmatched records per dependent dataset, in validation order.
    pub unmatched: Vec<(Dataset, Vec<Record>)>,
    pub report: Vec<DatasetValidation>,
    pub authority_codes: usize,
}

impl ValidatedSources {
    #[must_use]
    pub fn unmatched_for(&self, dataset: Dataset) -> &[Record] {
        self.unmatched
            .iter()
            .find(|(candidate, _)| *candidate == dataset)
            .map_or(&[], |(_, records)| records.as_slice())
    }
}

/// Validate every dependent dataset against the lecturer course codes.
#[must_use]
pub fn validate_sources(mut sources: Sources) -> ValidatedSources {
    let authority = AuthorityCodes::from_lecturers(sources.get(Dataset::AUTHORITY));
    if authority.is_empty() {
        tracing::warn!("lecturer dataset has no course codes; every dependent record is unmatched");
    }

    let mut unmatched = Vec::with_capacity(Dataset::DEPENDENT.len());
    let mut report = Vec::with_capacity(Dataset::DEPENDENT.len());

    for dataset in Dataset::DEPENDENT {
        let records = sources.take(dataset);
        let total = records.len();
        let split = partition(records, code_field(dataset), &authority);

        if !split.unmatched.is_empty() {
            tracing::info!(
                %dataset,
                unmatched = split.unmatched.len(),
                total,
                "orphan records routed to audit"
            );
        }

        report.push(DatasetValidation {
            dataset,
            authority: Dataset::AUTHORITY,
            total: count(total),
            matched: count(split.matched.len()),
            unmatched: count(split.unmatched.len()),
        });
        sources.set(dataset, split.matched);
        unmatched.push((dataset, split.unmatched));
    }

    ValidatedSources {
        sources,
        unmatched,
        report,
        authority_codes: authority.len(),
    }
}

const fn code_field(dataset: Dataset) -> &'static str {
    match dataset {
        Dataset::CourseList => course_list::COURSE_CODE,
        Dataset::RoomsData => rooms_data::COURSE_CODE,
        Dataset::StudentRequests => student_requests::COURSE_CODE,
        Dataset::LecturerDetails => lecturer_details::COURSE_CODE,
    }
}

fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
