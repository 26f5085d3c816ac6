//! Loading the four source exports.
//!
//! Every dataset is read fully into memory. Any unreadable or unparseable
//! file is fatal: the caller gets a [`SourceError`] naming the file and the
//! underlying cause, and nothing downstream runs.

use std::fs;
use std::path::Path;

use sched_core::dataset::{Dataset, Sources};
use sched_core::record::Record;
use serde_json::Value;

use crate::error::SourceError;
use crate::normalize::{FieldMap, normalize_record};

/// Load and normalize one dataset from `dir`.
pub fn load_dataset(dir: &Path, dataset: Dataset) -> Result<Vec<Record>, SourceError> {
    let path = dir.join(dataset.file_name());
    let text = fs::read_to_string(&path).map_err(|source| SourceError::Unreadable {
        path: path.clone(),
        source,
    })?;
    let value: Value = serde_json::from_str(&text).map_err(|source| SourceError::Malformed {
        path: path.clone(),
        source,
    })?;

    let rows = match value {
        Value::Array(rows) => rows,
        other => {
            return Err(SourceError::NotAnArray {
                path,
                found: json_kind(&other),
            });
        }
    };

    let map = FieldMap::for_dataset(dataset);
    let records = rows
        .into_iter()
        .enumerate()
        .map(|(index, row)| match row {
            Value::Object(fields) => Ok(normalize_record(&map, fields)),
            _ => Err(SourceError::NotAnObject {
                path: path.clone(),
                index,
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(%dataset, path = %path.display(), records = records.len(), "loaded source");
    Ok(records)
}

/// Load all four datasets. Fails on the first unreadable source.
pub fn load_all(dir: &Path) -> Result<Sources, SourceError> {
    let mut sources = Sources::default();
    for dataset in Dataset::ALL {
        sources.set(dataset, load_dataset(dir, dataset)?);
    }
    tracing::info!(
        courses = sources.course_list.len(),
        rooms = sources.rooms_data.len(),
        lecturers = sources.lecturer_details.len(),
        requests = sources.student_requests.len(),
        "sources loaded"
    );
    Ok(sources)
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
