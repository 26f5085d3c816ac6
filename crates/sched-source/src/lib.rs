//! # sched-source
//!
//! The I/O edge of the scheduling pipeline:
//! - [`load`] reads the four JSON exports and fails fast on unreadable input
//! - [`normalize`] maps raw field spellings onto canonical names, one table per dataset
//! - [`write`] stages every output file and commits them by atomic rename

pub mod error;
pub mod load;
pub mod normalize;
pub mod write;

pub use error::SourceError;
pub use load::{load_all, load_dataset};
pub use normalize::{FieldMap, normalize_record};
pub use write::{PendingWrite, write_all};
