//! Source dataset catalogue.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::record::Record;

/// The four source datasets a run consumes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Dataset {
    CourseList,
    RoomsData,
    LecturerDetails,
    StudentRequests,
}

impl Dataset {
    pub const ALL: [Self; 4] = [
        Self::CourseList,
        Self::RoomsData,
        Self::LecturerDetails,
        Self::StudentRequests,
    ];

    /// Datasets checked against the lecturer authority, in validation order.
    pub const DEPENDENT: [Self; 3] = [Self::StudentRequests, Self::CourseList, Self::RoomsData];

    /// The dataset whose course codes define validity.
    pub const AUTHORITY: Self = Self::LecturerDetails;

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CourseList => "course_list",
            Self::RoomsData => "rooms_data",
            Self::LecturerDetails => "lecturer_details",
            Self::StudentRequests => "student_requests",
        }
    }

    /// File name inside the data directory.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::CourseList => "course_list.json",
            Self::RoomsData => "rooms_data.json",
            Self::LecturerDetails => "lecturer_details.json",
            Self::StudentRequests => "student_requests.json",
        }
    }

    /// Name of the audit artifact listing records of `self` unmatched against `authority`.
    #[must_use]
    pub fn audit_file_name(self, authority: Self) -> String {
        format!(
            "unmatched from {} when compared to {}.json",
            self.as_str(),
            authority.as_str()
        )
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dataset {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stem = s.trim().trim_end_matches(".json");
        Self::ALL
            .into_iter()
            .find(|dataset| dataset.as_str() == stem)
            .ok_or_else(|| CoreError::UnknownDataset(s.to_string()))
    }
}

/// All four datasets, fully materialized.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sources {
    pub course_list: Vec<Record>,
    pub rooms_data: Vec<Record>,
    pub lecturer_details: Vec<Record>,
    pub student_requests: Vec<Record>,
}

impl Sources {
    #[must_use]
    pub fn get(&self, dataset: Dataset) -> &[Record] {
        match dataset {
            Dataset::CourseList => &self.course_list,
            Dataset::RoomsData => &self.rooms_data,
            Dataset::LecturerDetails => &self.lecturer_details,
            Dataset::StudentRequests => &self.student_requests,
        }
    }

    pub fn set(&mut self, dataset: Dataset, records: Vec<Record>) {
        match dataset {
            Dataset::CourseList => self.course_list = records,
            Dataset::RoomsData => self.rooms_data = records,
            Dataset::LecturerDetails => self.lecturer_details = records,
            Dataset::StudentRequests => self.student_requests = records,
        }
    }

    /// Move the records of `dataset` out, leaving it empty.
    pub fn take(&mut self, dataset: Dataset) -> Vec<Record> {
        match dataset {
            Dataset::CourseList => std::mem::take(&mut self.course_list),
            Dataset::RoomsData => std::mem::take(&mut self.rooms_data),
            Dataset::LecturerDetails => std::mem::take(&mut self.lecturer_details),
            Dataset::StudentRequests => std::mem::take(&mut self.student_requests),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stem_and_file_name() {
        assert_eq!("rooms_data".parse::<Dataset>().unwrap(), Dataset::RoomsData);
        assert_eq!(
            "student_requests.json".parse::<Dataset>().unwrap(),
            Dataset::StudentRequests
        );
        assert!("timetable".parse::<Dataset>().is_err());
    }

    #[test]
    fn audit_file_name_names_both_sides() {
        assert_eq!(
            Dataset::StudentRequests.audit_file_name(Dataset::AUTHORITY),
            "unmatched from student_requests when compared to lecturer_details.json"
        );
    }

    #[test]
    fn authority_is_not_a_dependent_dataset() {
        assert!(!Dataset::DEPENDENT.contains(&Dataset::AUTHORITY));
    }

    #[test]
    fn take_leaves_dataset_empty() {
        let mut sources = Sources {
            course_list: vec![Record::default()],
            ..Sources::default()
        };
        assert_eq!(sources.take(Dataset::CourseList).len(), 1);
        assert!(sources.get(Dataset::CourseList).is_empty());
    }
}
