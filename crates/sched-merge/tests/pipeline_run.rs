//! Full runs against a data directory on disk.

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use sched_core::dataset::Dataset;
use sched_core::graph::IntegratedGraph;
use sched_core::record::Record;
use sched_merge::{OutputLayout, Pipeline, PipelineError};
use sched_source::SourceError;
use tempfile::TempDir;

fn write_source(dir: &Path, dataset: Dataset, body: &str) {
    fs::write(dir.join(dataset.file_name()), body).unwrap();
}

fn seed(dir: &Path) {
    write_source(
        dir,
        Dataset::CourseList,
        r#"[
            {"Course ID": 5, "Course code": "CS101", "Title": "Intro_to_Computing"},
            {"Course ID": 9, "Course code": "ART100"}
        ]"#,
    );
    write_source(
        dir,
        Dataset::RoomsData,
        r#"[{"Course ID": 5, "Course Code": "CS101", "Room Number": "B12", "Section Number": 1}]"#,
    );
    write_source(
        dir,
        Dataset::LecturerDetails,
        r#"[
            {"Prof ID": 7, "Course Code": "CS101", "Section Number": 1},
            {"Prof ID": 8, "Course Code": "PHIL200", "Section Number": 2}
        ]"#,
    );
    write_source(
        dir,
        Dataset::StudentRequests,
        r#"[
            {"Student ID": 1001, "Course ID": 5, "Course Code": "CS101", "Type": "Required"},
            {"Student ID": 1002, "Course ID": 99, "Course Code": "PHIL999"}
        ]"#,
    );
}

fn layout(root: &TempDir, replace_sources: bool) -> OutputLayout {
    let data_dir = root.path().join("jsonfiles");
    let output_dir = root.path().join("output");
    fs::create_dir_all(&data_dir).unwrap();
    seed(&data_dir);
    OutputLayout {
        data_dir,
        audit_dir: output_dir.clone(),
        integrated_path: output_dir.join("integrated_data.json"),
        replace_sources,
        pretty: true,
    }
}

fn read_records(path: &Path) -> Vec<Record> {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn run_writes_integrated_document_and_audits() {
    let root = TempDir::new().unwrap();
    let layout = layout(&root, true);
    let pipeline = Pipeline::new(layout.clone());

    let summary = pipeline.run().expect("run succeeds");

    assert_eq!(summary.courses, 2);
    assert_eq!(summary.synthesized_courses, 1);
    assert_eq!(summary.professors, 2);
    assert_eq!(summary.rooms, 1);
    assert_eq!(summary.students, 1);
    assert_eq!(summary.validation.authority_codes, 2);
    assert_eq!(summary.validation.written.len(), 7);

    let graph: IntegratedGraph =
        serde_json::from_str(&fs::read_to_string(&layout.integrated_path).unwrap()).unwrap();
    assert_eq!(graph.courses.len(), 2);
    assert!(graph.student("1002").is_none());

    let audit = layout
        .audit_dir
        .join(Dataset::StudentRequests.audit_file_name(Dataset::AUTHORITY));
    let orphans = read_records(&audit);
    assert_eq!(orphans.len(), 1);
    assert_eq!(orphans[0].key("Course Code").as_deref(), Some("PHIL999"));

    let rewritten = read_records(&layout.data_dir.join(Dataset::StudentRequests.file_name()));
    assert_eq!(rewritten.len(), 1);
    assert_eq!(rewritten[0].key("Student ID").as_deref(), Some("1001"));
}

#[test]
fn sources_are_left_alone_when_not_replaced() {
    let root = TempDir::new().unwrap();
    let layout = layout(&root, false);
    let course_list = layout.data_dir.join(Dataset::CourseList.file_name());
    let before = fs::read(&course_list).unwrap();

    let summary = Pipeline::new(layout).run().expect("run succeeds");

    assert_eq!(summary.validation.written.len(), 4);
    assert_eq!(fs::read(&course_list).unwrap(), before);
}

#[test]
fn rerun_over_rewritten_sources_is_byte_identical() {
    let root = TempDir::new().unwrap();
    let layout = layout(&root, true);
    let pipeline = Pipeline::new(layout.clone());

    pipeline.run().expect("first run");
    let first = fs::read(&layout.integrated_path).unwrap();
    pipeline.run().expect("second run");
    let second = fs::read(&layout.integrated_path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn validate_writes_audits_only() {
    let root = TempDir::new().unwrap();
    let layout = layout(&root, false);

    let summary = Pipeline::new(layout.clone()).validate().expect("validate succeeds");

    assert_eq!(summary.datasets.len(), 3);
    let requests = &summary.datasets[0];
    assert_eq!(requests.dataset, Dataset::StudentRequests);
    assert_eq!((requests.total, requests.matched, requests.unmatched), (2, 1, 1));
    assert_eq!(summary.written.len(), 3);
    assert!(!layout.integrated_path.exists());
}

#[test]
fn unreadable_source_aborts_before_any_write() {
    let root = TempDir::new().unwrap();
    let layout = layout(&root, true);
    fs::remove_file(layout.data_dir.join(Dataset::RoomsData.file_name())).unwrap();
    let requests = layout.data_dir.join(Dataset::StudentRequests.file_name());
    let before = fs::read(&requests).unwrap();

    let error = Pipeline::new(layout.clone()).run().unwrap_err();

    assert!(matches!(
        error,
        PipelineError::Source(SourceError::Unreadable { .. })
    ));
    assert!(!layout.audit_dir.exists());
    assert_eq!(fs::read(&requests).unwrap(), before);
}

#[test]
fn malformed_source_is_fatal() {
    let root = TempDir::new().unwrap();
    let layout = layout(&root, true);
    write_source(&layout.data_dir, Dataset::LecturerDetails, "[{\"Prof ID\": 7,");

    let error = Pipeline::new(layout).run().unwrap_err();
    assert!(matches!(
        error,
        PipelineError::Source(SourceError::Malformed { .. })
    ));
}
