//! Integrated-graph building.
//!
//! Professor and room views are inverted from the merged courses, so they
//! can only ever list sections that exist in `courses`. The indexes decide
//! which professors and rooms are enumerated and in what order.

use std::collections::BTreeMap;

use sched_core::entities::{AssignedSection, Course, Professor, Room, TaughtSection};
use sched_core::graph::IntegratedGraph;
use sched_core::responses::{SkipCounts, SkipReason};

use crate::index::Indexes;
use crate::merge::MergeOutcome;

/// Assemble the integrated document from a merge outcome.
///
/// Professors come out in ascending ID order, rooms in first-seen order of
/// the room dataset, students as built by the merge.
#[must_use]
pub fn build_graph(merged: MergeOutcome, indexes: &Indexes<'_>) -> (IntegratedGraph, SkipCounts) {
    let MergeOutcome {
        courses,
        students,
        mut skipped,
    } = merged;

    skipped.add(
        SkipReason::InvalidProfessorId,
        indexes.lecturers_by_professor_id.unindexed(),
    );
    skipped.add(
        SkipReason::RoomWithoutNumber,
        indexes.rooms_by_number.unindexed(),
    );

    let professors = professor_views(&courses, indexes);
    let rooms = room_views(&courses, indexes);
    tracing::info!(
        professors = professors.len(),
        rooms = rooms.len(),
        "integrated views built"
    );

    (
        IntegratedGraph {
            courses,
            professors,
            students,
            rooms,
        },
        skipped,
    )
}

fn professor_views(courses: &[Course], indexes: &Indexes<'_>) -> Vec<Professor> {
    let mut taught: BTreeMap<i64, Vec<TaughtSection>> = BTreeMap::new();
    for course in courses {
        for section in &course.sections {
            let Some(professor) = section.professor else {
                continue;
            };
            taught.entry(professor.id).or_default().push(TaughtSection {
                course_id: course.id.clone(),
                course_code: course.code.clone(),
                course_title: course.title.clone(),
                section: section.number,
                term: section.term.clone(),
                room: section.room.as_ref().map(|room| room.number.clone()),
            });
        }
    }

    let mut ids: Vec<i64> = indexes
        .lecturers_by_professor_id
        .keys()
        .filter_map(|id| id.parse().ok())
        .collect();
    ids.sort_unstable();

    ids.into_iter()
        .filter_map(|id| {
            let sections = taught.remove(&id)?;
            Some(Professor { id, sections })
        })
        .collect()
}

fn room_views(courses: &[Course], indexes: &Indexes<'_>) -> Vec<Room> {
    let mut assigned: BTreeMap<&str, Vec<AssignedSection>> = BTreeMap::new();
    for course in courses {
        for section in &course.sections {
            let Some(room) = &section.room else {
                continue;
            };
            assigned
                .entry(room.number.as_str())
                .or_default()
                .push(AssignedSection {
                    course_id: course.id.clone(),
                    course_code: course.code.clone(),
                    course_title: course.title.clone(),
                    section: section.number,
                    term: section.term.clone(),
                    professor: section.professor.map(|professor| professor.id),
                });
        }
    }

    indexes
        .rooms_by_number
        .keys()
        .map(|number| Room {
            number: number.to_string(),
            sections: assigned.remove(number).unwrap_or_default(),
        })
        .collect()
}
