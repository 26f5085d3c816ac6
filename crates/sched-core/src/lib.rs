//! # sched-core
//!
//! Core types shared across the scheduling pipeline crates.
//!
//! This crate provides the foundational types every stage works with:
//! - `Record`, the loosely-typed row every source dataset is made of, with key coercion
//! - Canonical field names per source dataset
//! - The `Dataset` catalogue and the `Sources` bundle of all four inputs
//! - Merged entity structs (courses, sections, professors, rooms, students)
//! - The integrated document written at the end of a run
//! - Run and validation summaries printed by the CLI
//! - Cross-cutting error types

pub mod dataset;
pub mod entities;
pub mod errors;
pub mod fields;
pub mod graph;
pub mod record;
pub mod responses;
