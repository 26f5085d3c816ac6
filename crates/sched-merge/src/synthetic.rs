//! Deterministic identity for courses synthesized from lecturer-only evidence.

use sha2::{Digest, Sha256};

/// Prefix marking a synthesized course ID.
pub const SYNTHETIC_PREFIX: &str = "syn-";

/// `syn-` + first 16 hex chars of `sha256("{code}:{section}")`.
///
/// `code` must already be lower-cased. A missing section hashes as an empty
/// string, so the ID is stable across runs for the same code and section.
#[must_use]
pub fn synthetic_course_id(code: &str, section: Option<i64>) -> String {
    let section = section.map(|number| number.to_string()).unwrap_or_default();
    let digest = Sha256::digest(format!("{code}:{section}").as_bytes());
    let hex: String = digest.iter().take(8).map(|byte| format!("{byte:02x}")).collect();
    format!("{SYNTHETIC_PREFIX}{hex}")
}
