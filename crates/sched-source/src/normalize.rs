//! Field-name and value normalization.
//!
//! Each dataset has one declarative [`FieldMap`]: canonical field name plus the
//! raw spellings exports are known to use. Raw keys are folded (trimmed,
//! lower-cased, `_`/`-` read as spaces, runs of whitespace collapsed) before the
//! lookup, so `course_code`, `Course code` and `COURSE  CODE` all resolve.
//!
//! Values are left alone apart from trimming strings and turning spreadsheet
//! blanks (`""`, `NaN`, `null`, `None`) into JSON null. Underscore-encoded
//! spaces inside values are decoded later, by the merger.

use sched_core::dataset::Dataset;
use sched_core::fields::{course_list, lecturer_details, rooms_data, student_requests};
use sched_core::record::Record;
use serde_json::{Map, Value};

/// Accepted raw spellings for one canonical field. Aliases are pre-folded.
#[derive(Debug, Clone, Copy)]
pub struct FieldAlias {
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
}

/// The mapping table for one dataset.
#[derive(Debug, Clone, Copy)]
pub struct FieldMap {
    pub dataset: Dataset,
    pub fields: &'static [FieldAlias],
}

const COURSE_LIST: &[FieldAlias] = &[
    FieldAlias {
        canonical: course_list::COURSE_ID,
        aliases: &["courseid", "id"],
    },
    FieldAlias {
        canonical: course_list::COURSE_CODE,
        aliases: &["code", "lecture code"],
    },
    FieldAlias {
        canonical: course_list::COURSE_TITLE,
        aliases: &["title", "course name"],
    },
    FieldAlias {
        canonical: course_list::LENGTH,
        aliases: &["course length"],
    },
    FieldAlias {
        canonical: course_list::CREDITS,
        aliases: &["total credits", "credit"],
    },
    FieldAlias {
        canonical: course_list::DEPARTMENTS,
        aliases: &["departments", "department"],
    },
    FieldAlias {
        canonical: course_list::PRIORITY,
        aliases: &["course priority"],
    },
    FieldAlias {
        canonical: course_list::AVAILABLE_BLOCKS,
        aliases: &["available block"],
    },
    FieldAlias {
        canonical: course_list::UNAVAILABLE_BLOCKS,
        aliases: &["unavailable block"],
    },
    FieldAlias {
        canonical: course_list::MINIMUM_SECTION_SIZE,
        aliases: &["min section size"],
    },
    FieldAlias {
        canonical: course_list::TARGET_SECTION_SIZE,
        aliases: &[],
    },
    FieldAlias {
        canonical: course_list::MAXIMUM_SECTION_SIZE,
        aliases: &["max section size"],
    },
    FieldAlias {
        canonical: course_list::NUMBER_OF_SECTIONS,
        aliases: &["sections", "section count"],
    },
    FieldAlias {
        canonical: course_list::TOTAL_CREDITS,
        aliases: &[],
    },
];

const ROOMS_DATA: &[FieldAlias] = &[
    FieldAlias {
        canonical: rooms_data::COURSE_ID,
        aliases: &["courseid", "id"],
    },
    FieldAlias {
        canonical: rooms_data::ROOM_NUMBER,
        aliases: &["room", "room no", "room no."],
    },
    FieldAlias {
        canonical: rooms_data::SECTION_NUMBER,
        aliases: &["section", "section no"],
    },
    FieldAlias {
        canonical: rooms_data::COURSE_CODE,
        aliases: &["code", "lecture code"],
    },
    FieldAlias {
        canonical: rooms_data::START_TERM,
        aliases: &["term"],
    },
    FieldAlias {
        canonical: rooms_data::YEAR,
        aliases: &["college year"],
    },
    FieldAlias {
        canonical: rooms_data::TERM_DESCRIPTION,
        aliases: &[],
    },
    FieldAlias {
        canonical: rooms_data::TERM_NAME,
        aliases: &[],
    },
];

const LECTURER_DETAILS: &[FieldAlias] = &[
    FieldAlias {
        canonical: lecturer_details::PROF_ID,
        aliases: &["professor id", "lecturer id", "prof"],
    },
    FieldAlias {
        canonical: lecturer_details::COURSE_CODE,
        aliases: &["code", "lecture code"],
    },
    FieldAlias {
        canonical: lecturer_details::COURSE_TITLE,
        aliases: &["title"],
    },
    FieldAlias {
        canonical: lecturer_details::SECTION_NUMBER,
        aliases: &["section", "section no"],
    },
    FieldAlias {
        canonical: lecturer_details::LENGTH,
        aliases: &["course length"],
    },
    FieldAlias {
        canonical: lecturer_details::START_TERM,
        aliases: &["term"],
    },
];

const STUDENT_REQUESTS: &[FieldAlias] = &[
    FieldAlias {
        canonical: student_requests::STUDENT_ID,
        aliases: &["student", "studentid"],
    },
    FieldAlias {
        canonical: student_requests::COURSE_ID,
        aliases: &["courseid"],
    },
    FieldAlias {
        canonical: student_requests::COURSE_CODE,
        aliases: &["code", "lecture code"],
    },
    FieldAlias {
        canonical: student_requests::COURSE_TITLE,
        aliases: &["title"],
    },
    FieldAlias {
        canonical: student_requests::TYPE,
        aliases: &["request type"],
    },
    FieldAlias {
        canonical: student_requests::PRIORITY,
        aliases: &[],
    },
    FieldAlias {
        canonical: student_requests::REQUEST_START_TERM,
        aliases: &["start term"],
    },
    FieldAlias {
        canonical: student_requests::LENGTH,
        aliases: &["course length"],
    },
    FieldAlias {
        canonical: student_requests::COLLEGE_YEAR,
        aliases: &["year"],
    },
];

impl FieldMap {
    #[must_use]
    pub const fn for_dataset(dataset: Dataset) -> Self {
        let fields = match dataset {
            Dataset::CourseList => COURSE_LIST,
            Dataset::RoomsData => ROOMS_DATA,
            Dataset::LecturerDetails => LECTURER_DETAILS,
            Dataset::StudentRequests => STUDENT_REQUESTS,
        };
        Self { dataset, fields }
    }

    /// Canonical name for a raw key, if the table knows it.
    #[must_use]
    pub fn canonical(&self, raw: &str) -> Option<&'static str> {
        let folded = fold_key(raw);
        self.fields
            .iter()
            .find(|field| {
                fold_key(field.canonical) == folded || field.aliases.contains(&folded.as_str())
            })
            .map(|field| field.canonical)
    }
}

/// Fold a raw key for table lookup.
#[must_use]
pub fn fold_key(raw: &str) -> String {
    raw.replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Normalize one raw JSON object into a canonical record.
///
/// Unknown keys are kept under their trimmed raw name. When two raw keys map
/// to the same canonical field, the first non-null value wins.
#[must_use]
pub fn normalize_record(map: &FieldMap, raw: Map<String, Value>) -> Record {
    let mut record = Record::default();
    for (key, value) in raw {
        let value = normalize_value(value);
        let name = map
            .canonical(&key)
            .map_or_else(|| key.trim().to_string(), str::to_string);

        match record.get(&name) {
            Some(_) => {
                tracing::debug!(
                    dataset = %map.dataset,
                    field = %name,
                    raw = %key,
                    "duplicate field spelling ignored"
                );
            }
            None => {
                record.insert(name, value);
            }
        }
    }
    record
}

fn normalize_value(value: Value) -> Value {
    match value {
        Value::String(text) => {
            let trimmed = text.trim();
            if is_blank_sentinel(trimmed) {
                Value::Null
            } else if trimmed.len() == text.len() {
                Value::String(text)
            } else {
                Value::String(trimmed.to_string())
            }
        }
        other => other,
    }
}

fn is_blank_sentinel(text: &str) -> bool {
    text.is_empty()
        || text.eq_ignore_ascii_case("nan")
        || text.eq_ignore_ascii_case("null")
        || text.eq_ignore_ascii_case("none")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    fn raw(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    #[rstest]
    #[case(Dataset::CourseList, "course_code", "Course Code")]
    #[case(Dataset::CourseList, "Course code", "Course Code")]
    #[case(Dataset::CourseList, "Total credits", "Credits")]
    #[case(Dataset::CourseList, "minimum_section_size", "Minimum section size")]
    #[case(Dataset::CourseList, "Available Blocks", "Available blocks")]
    #[case(Dataset::RoomsData, "Section number", "Section Number")]
    #[case(Dataset::RoomsData, " Year", "Year")]
    #[case(Dataset::RoomsData, "term_description", "Term Description")]
    #[case(Dataset::RoomsData, "room_number", "Room Number")]
    #[case(Dataset::LecturerDetails, "Lecturer ID", "Prof ID")]
    #[case(Dataset::LecturerDetails, "lecture Code", "Course Code")]
    #[case(Dataset::StudentRequests, " Year", "College Year")]
    #[case(Dataset::StudentRequests, "REQUEST-START-TERM", "Request start term")]
    fn resolves_known_spellings(
        #[case] dataset: Dataset,
        #[case] raw_key: &str,
        #[case] canonical: &str,
    ) {
        assert_eq!(FieldMap::for_dataset(dataset).canonical(raw_key), Some(canonical));
    }

    #[test]
    fn unknown_keys_are_kept_trimmed() {
        let map = FieldMap::for_dataset(Dataset::CourseList);
        let record = normalize_record(&map, raw(json!({" Scheduling notes ": "lab"})));
        assert_eq!(record.get("Scheduling notes"), Some(&json!("lab")));
    }

    #[test]
    fn blank_sentinels_become_null() {
        let map = FieldMap::for_dataset(Dataset::RoomsData);
        let record = normalize_record(
            &map,
            raw(json!({"Room Number": "NaN", "Start Term": "  ", "Course ID": " 5 "})),
        );
        assert!(record.get("Room Number").is_none());
        assert!(record.get("Start Term").is_none());
        assert_eq!(record.get("Course ID"), Some(&json!("5")));
    }

    #[test]
    fn first_non_null_spelling_wins() {
        let map = FieldMap::for_dataset(Dataset::LecturerDetails);
        let record = normalize_record(
            &map,
            raw(json!({"Lecturer ID": null, "Prof ID": 7, "professor_id": 9})),
        );
        assert_eq!(record.integer("Prof ID"), Some(7));
    }

    #[test]
    fn underscores_inside_values_are_untouched() {
        let map = FieldMap::for_dataset(Dataset::CourseList);
        let record = normalize_record(&map, raw(json!({"Course Title": "Intro_to_Computing"})));
        assert_eq!(record.get("Course Title"), Some(&json!("Intro_to_Computing")));
    }
}
