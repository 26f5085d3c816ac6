//! Entity merging.
//!
//! Courses are resolved from three sources in priority order:
//!
//! 1. Catalog records always create a course (identity: Course ID, else Course Code).
//! 2. Room records create a course only for a Course ID not already merged.
//! 3. Lecturer records are resolved on (Course Code, Section Number). A code
//!    that is unknown, or known without that section, yields a synthesized
//!    course built from the lecturer fields alone.
//!
//! Every section gets at most one room (same Course ID and Section Number)
//! and at most one professor (direct, or the first valid one in the lecturer
//! index). Requests are then resolved to exactly one merged course, by
//! Course ID first and Course Code second, and listed both on that course's
//! sections and under their student, so every request a student carries
//! points at a course in the output.

use std::collections::BTreeMap;

use sched_core::dataset::Sources;
use sched_core::entities::{
    Course, CoursePlanning, IdentitySource, ProfessorRef, Request, RequestSummary, RoomRef,
    Section, Student, request_weight,
};
use sched_core::fields::{course_list, lecturer_details, rooms_data, student_requests};
use sched_core::record::Record;
use sched_core::responses::{SkipCounts, SkipReason};

use crate::index::{Indexes, section_key};
use crate::synthetic::synthetic_course_id;
use crate::text::decode_opt;

/// Merged courses and students, plus the records left out on the way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergeOutcome {
    pub courses: Vec<Course>,
    pub students: Vec<Student>,
    pub skipped: SkipCounts,
}

impl MergeOutcome {
    #[must_use]
    pub fn synthesized(&self) -> usize {
        self.courses.iter().filter(|course| course.is_synthetic()).count()
    }
}

/// Merge validated sources into one course per identity.
#[must_use]
pub fn merge_courses(sources: &Sources, indexes: &Indexes<'_>) -> MergeOutcome {
    let mut set = CourseSet::default();
    let mut skipped = SkipCounts::default();

    merge_catalog(sources, indexes, &mut set, &mut skipped);
    merge_rooms(indexes, &mut set);
    merge_lecturers(sources, indexes, &mut set, &mut skipped);

    skipped.add(
        SkipReason::RoomWithoutCourseId,
        indexes.rooms_by_course_id.unindexed(),
    );
    skipped.add(
        SkipReason::LecturerWithoutCode,
        indexes.lecturers_by_section.unindexed(),
    );

    attach_requests_by_code(sources, &mut set);
    let students = build_students(indexes, &set, &mut skipped);
    let courses = set.into_courses();
    tracing::info!(
        courses = courses.len(),
        students = students.len(),
        skipped = skipped.total(),
        "merge complete"
    );

    MergeOutcome {
        courses,
        students,
        skipped,
    }
}

fn merge_catalog(
    sources: &Sources,
    indexes: &Indexes<'_>,
    set: &mut CourseSet,
    skipped: &mut SkipCounts,
) {
    for record in &sources.course_list {
        let code = record.key(course_list::COURSE_CODE);
        let (id, identity) = match (record.key(course_list::COURSE_ID), &code) {
            (Some(id), _) => (id, IdentitySource::CourseId),
            (None, Some(code)) => {
                let has_identified_twin = indexes
                    .courses_by_code
                    .get(&code.to_lowercase())
                    .iter()
                    .any(|twin| twin.key(course_list::COURSE_ID).is_some());
                if has_identified_twin {
                    tracing::debug!(
                        %code,
                        "catalog record without ID duplicates an identified course"
                    );
                    skipped.record(SkipReason::DuplicateCourse);
                    continue;
                }
                (code.clone(), IdentitySource::CourseCode)
            }
            (None, None) => {
                skipped.record(SkipReason::CourseWithoutIdentity);
                continue;
            }
        };

        if set.position(&id).is_some() {
            tracing::warn!(course_id = %id, "catalog repeats a course identity; first record wins");
            skipped.record(SkipReason::DuplicateCourse);
            continue;
        }

        let sections = sections_from_rooms(&id, code.as_deref(), indexes);
        set.insert(Course {
            id,
            identity,
            title: decode_opt(record.text(course_list::COURSE_TITLE)),
            length: record.get(course_list::LENGTH).cloned(),
            credits: record.get(course_list::CREDITS).cloned(),
            department: decode_opt(record.text(course_list::DEPARTMENTS)),
            planning: planning(record),
            code,
            sections,
        });
    }
}

fn planning(record: &Record) -> CoursePlanning {
    CoursePlanning {
        priority: record.get(course_list::PRIORITY).cloned(),
        available_blocks: record.list(course_list::AVAILABLE_BLOCKS),
        unavailable_blocks: record.list(course_list::UNAVAILABLE_BLOCKS),
        minimum_section_size: record.integer(course_list::MINIMUM_SECTION_SIZE),
        target_section_size: record.integer(course_list::TARGET_SECTION_SIZE),
        maximum_section_size: record.integer(course_list::MAXIMUM_SECTION_SIZE),
        number_of_sections: record.integer(course_list::NUMBER_OF_SECTIONS),
        total_credits: record.get(course_list::TOTAL_CREDITS).cloned(),
    }
}

fn merge_rooms(indexes: &Indexes<'_>, set: &mut CourseSet) {
    for course_id in indexes.rooms_by_course_id.keys() {
        if set.position(course_id).is_some() {
            continue;
        }
        let code = indexes
            .rooms_by_course_id
            .get(course_id)
            .iter()
            .find_map(|room| room.key(rooms_data::COURSE_CODE));

        tracing::debug!(%course_id, "course created from room data");
        let sections = sections_from_rooms(course_id, code.as_deref(), indexes);
        set.insert(Course {
            id: course_id.to_string(),
            identity: IdentitySource::CourseId,
            code,
            title: None,
            length: None,
            credits: None,
            department: None,
            planning: CoursePlanning::default(),
            sections,
        });
    }
}

fn merge_lecturers(
    sources: &Sources,
    indexes: &Indexes<'_>,
    set: &mut CourseSet,
    skipped: &mut SkipCounts,
) {
    for record in &sources.lecturer_details {
        let Some(code) = record.key(lecturer_details::COURSE_CODE) else {
            continue;
        };
        let code_lower = code.to_lowercase();
        let number = record.integer(lecturer_details::SECTION_NUMBER);
        let professor = record.integer(lecturer_details::PROF_ID);

        if let Some(section) = set.find_section_mut(&code_lower, number) {
            match (section.professor, professor) {
                (None, Some(id)) => section.professor = Some(ProfessorRef { id }),
                (Some(kept), Some(ignored)) if kept.id != ignored => {
                    tracing::warn!(
                        %code,
                        section = ?number,
                        kept = kept.id,
                        ignored,
                        "section already has a professor; lecturer record ignored"
                    );
                    skipped.record(SkipReason::DuplicateLecturerSection);
                }
                _ => {}
            }
            continue;
        }

        let id = synthetic_course_id(&code_lower, number);
        tracing::debug!(
            %code,
            section = ?number,
            course_id = %id,
            "synthesized course from lecturer record"
        );
        let section = build_section(
            &id,
            &code_lower,
            number,
            professor,
            record.text(lecturer_details::START_TERM),
            indexes,
        );
        set.insert(Course {
            id,
            identity: IdentitySource::Synthetic,
            code: Some(code),
            title: decode_opt(record.text(lecturer_details::COURSE_TITLE)),
            length: record.get(lecturer_details::LENGTH).cloned(),
            credits: None,
            department: None,
            planning: CoursePlanning::default(),
            sections: vec![section],
        });
    }
}

/// One section per distinct Section Number among the course's rooms, in
/// first-seen order. Without room evidence the course gets a single
/// unnumbered section.
fn sections_from_rooms(
    course_id: &str,
    code: Option<&str>,
    indexes: &Indexes<'_>,
) -> Vec<Section> {
    let mut numbers: Vec<Option<i64>> = Vec::new();
    for room in indexes.rooms_by_course_id.get(course_id) {
        let number = room.integer(rooms_data::SECTION_NUMBER);
        if !numbers.contains(&number) {
            numbers.push(number);
        }
    }
    if numbers.is_empty() {
        numbers.push(None);
    }

    let code_lower = code.map(str::to_lowercase).unwrap_or_default();
    numbers
        .into_iter()
        .map(|number| build_section(course_id, &code_lower, number, None, None, indexes))
        .collect()
}

fn build_section(
    course_id: &str,
    code_lower: &str,
    number: Option<i64>,
    professor: Option<i64>,
    term: Option<String>,
    indexes: &Indexes<'_>,
) -> Section {
    let evidence: Vec<&Record> = indexes
        .rooms_by_course_id
        .get(course_id)
        .iter()
        .copied()
        .filter(|room| room.integer(rooms_data::SECTION_NUMBER) == number)
        .collect();
    let room = evidence
        .iter()
        .copied()
        .find(|room| room.key(rooms_data::ROOM_NUMBER).is_some());
    let room_details = room.or_else(|| evidence.first().copied());

    let lecturers: &[&Record] = if code_lower.is_empty() {
        &[]
    } else {
        indexes
            .lecturers_by_section
            .get(&section_key(code_lower, number))
    };
    let professor = professor.or_else(|| {
        lecturers
            .iter()
            .find_map(|lecturer| lecturer.integer(lecturer_details::PROF_ID))
    });

    let term = room_details
        .and_then(|room| room.text(rooms_data::START_TERM))
        .or(term)
        .or_else(|| {
            lecturers
                .iter()
                .find_map(|lecturer| lecturer.text(lecturer_details::START_TERM))
        });

    Section {
        number,
        term: decode_opt(term),
        year: room_details.and_then(|room| room.text(rooms_data::YEAR)),
        term_description: decode_opt(
            room_details.and_then(|room| room.text(rooms_data::TERM_DESCRIPTION)),
        ),
        term_name: decode_opt(room_details.and_then(|room| room.text(rooms_data::TERM_NAME))),
        room: room
            .and_then(|room| room.key(rooms_data::ROOM_NUMBER))
            .map(|number| RoomRef { number }),
        professor: professor.map(|id| ProfessorRef { id }),
        requests: indexes
            .requests_by_course_id
            .get(course_id)
            .iter()
            .filter_map(|request| request_summary(request))
            .collect(),
    }
}

/// List requests whose Course ID names no merged course on the course their
/// Course Code resolves to.
fn attach_requests_by_code(sources: &Sources, set: &mut CourseSet) {
    for record in &sources.student_requests {
        let direct = record
            .key(student_requests::COURSE_ID)
            .is_some_and(|id| set.position(&id).is_some());
        if direct {
            continue;
        }
        let (Some(position), Some(summary)) = (set.resolve(record), request_summary(record)) else {
            continue;
        };
        let course = &mut set.courses[position];
        tracing::debug!(
            course_id = %course.id,
            student_id = %summary.student_id,
            "request attached by course code"
        );
        for section in &mut course.sections {
            section.requests.push(summary.clone());
        }
    }
}

fn request_summary(record: &Record) -> Option<RequestSummary> {
    let request_type = decode_opt(record.text(student_requests::TYPE));
    Some(RequestSummary {
        student_id: record.key(student_requests::STUDENT_ID)?,
        weight: request_type.as_deref().and_then(request_weight),
        request_type,
        priority: record.get(student_requests::PRIORITY).cloned(),
        start_term: decode_opt(record.text(student_requests::REQUEST_START_TERM)),
    })
}

/// One student per distinct Student ID, in first-seen order. Requests that
/// resolve to no merged course are left out; a student left with none is
/// not emitted.
fn build_students(
    indexes: &Indexes<'_>,
    set: &CourseSet,
    skipped: &mut SkipCounts,
) -> Vec<Student> {
    skipped.add(
        SkipReason::RequestWithoutStudent,
        indexes.requests_by_student_id.unindexed(),
    );

    let mut students = Vec::with_capacity(indexes.requests_by_student_id.len());
    for student_id in indexes.requests_by_student_id.keys() {
        let records = indexes.requests_by_student_id.get(student_id);
        let mut requests = Vec::with_capacity(records.len());
        for record in records {
            let Some(position) = set.resolve(record) else {
                tracing::debug!(%student_id, "request resolves to no merged course");
                skipped.record(SkipReason::RequestWithoutCourse);
                continue;
            };
            requests.push(request(&set.courses[position].id, record));
        }
        if requests.is_empty() {
            continue;
        }
        students.push(Student {
            id: student_id.to_string(),
            college_year: records
                .iter()
                .find_map(|record| record.get(student_requests::COLLEGE_YEAR).cloned()),
            requests,
        });
    }
    students
}

fn request(course_id: &str, record: &Record) -> Request {
    let request_type = decode_opt(record.text(student_requests::TYPE));
    Request {
        course_id: course_id.to_string(),
        course_code: record.key(student_requests::COURSE_CODE),
        course_title: decode_opt(record.text(student_requests::COURSE_TITLE)),
        weight: request_type.as_deref().and_then(request_weight),
        request_type,
        priority: record.get(student_requests::PRIORITY).cloned(),
        start_term: decode_opt(record.text(student_requests::REQUEST_START_TERM)),
        length: record.get(student_requests::LENGTH).cloned(),
    }
}

/// Courses under construction, with identity and code lookups.
#[derive(Debug, Default)]
struct CourseSet {
    courses: Vec<Course>,
    by_id: BTreeMap<String, usize>,
    by_code: BTreeMap<String, Vec<usize>>,
}

impl CourseSet {
    fn position(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    fn insert(&mut self, course: Course) {
        let position = self.courses.len();
        self.by_id.insert(course.id.clone(), position);
        if let Some(code) = &course.code {
            self.by_code
                .entry(code.to_lowercase())
                .or_default()
                .push(position);
        }
        self.courses.push(course);
    }

    /// A section with `number` on the first known course carrying `code_lower`.
    fn find_section_mut(
        &mut self,
        code_lower: &str,
        number: Option<i64>,
    ) -> Option<&mut Section> {
        let position = self
            .by_code
            .get(code_lower)?
            .iter()
            .copied()
            .find(|&position| self.courses[position].section(number).is_some())?;
        self.courses[position]
            .sections
            .iter_mut()
            .find(|section| section.number == number)
    }

    /// The course a request targets: its Course ID when merged, otherwise the
    /// first course carrying its Course Code.
    fn resolve(&self, record: &Record) -> Option<usize> {
        record
            .key(student_requests::COURSE_ID)
            .and_then(|id| self.position(&id))
            .or_else(|| {
                let code = record.key_lower(student_requests::COURSE_CODE)?;
                self.by_code.get(&code)?.first().copied()
            })
    }

    fn into_courses(self) -> Vec<Course> {
        self.courses
    }
}
