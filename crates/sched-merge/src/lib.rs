//! # sched-merge
//!
//! The entity-resolution core of the scheduling pipeline.
//!
//! Stages, in the order a run applies them:
//! 1. [`validate`] partitions each dependent dataset against the lecturer course codes
//! 2. [`index`] builds immutable one-to-many lookups over the validated data
//! 3. [`merge`] resolves one course per identity and attaches rooms, professors and requests
//! 4. [`graph`] derives the professor, room and student views from the merged courses
//!
//! [`pipeline`] wires the stages together with loading and all-or-nothing writing.

pub mod error;
pub mod graph;
pub mod index;
pub mod merge;
pub mod pipeline;
pub mod synthetic;
pub mod text;
pub mod validate;

pub use error::PipelineError;
pub use graph::build_graph;
pub use index::{CrossIndex, Indexes};
pub use merge::{MergeOutcome, merge_courses};
pub use pipeline::{OutputLayout, Pipeline, PipelineOutput};
pub use validate::{AuthorityCodes, Partition, ValidatedSources, partition, validate_sources};
