//! End-to-end run: load → validate → index → merge → graph → write.
//!
//! Everything up to the write step is pure and in memory. Outputs (audit
//! files, rewritten sources, integrated document) are all rendered before the
//! first byte hits disk and are then committed together, so a failing run
//! leaves no partial output behind.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use sched_config::SchedConfig;
use sched_core::dataset::{Dataset, Sources};
use sched_core::graph::IntegratedGraph;
use sched_core::responses::{RunSummary, SkipCounts, ValidationSummary};
use sched_source::{PendingWrite, SourceError, load_all, write_all};

use crate::error::PipelineError;
use crate::graph::build_graph;
use crate::index::Indexes;
use crate::merge::merge_courses;
use crate::validate::{ValidatedSources, validate_sources};

/// Where a run reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    pub data_dir: PathBuf,
    pub audit_dir: PathBuf,
    pub integrated_path: PathBuf,
    pub replace_sources: bool,
    pub pretty: bool,
}

impl OutputLayout {
    #[must_use]
    pub fn from_config(config: &SchedConfig) -> Self {
        Self {
            data_dir: config.paths.data_dir.clone(),
            audit_dir: config
                .validation
                .audit_dir_or(&config.paths.output_dir)
                .to_path_buf(),
            integrated_path: config.paths.integrated_path(),
            replace_sources: config.validation.replace_sources,
            pretty: config.output.pretty,
        }
    }

    /// Audit files, plus the matched partitions when sources are replaced.
    pub fn validation_writes(
        &self,
        validated: &ValidatedSources,
    ) -> Result<Vec<PendingWrite>, SourceError> {
        let mut writes = Vec::with_capacity(validated.unmatched.len() * 2);
        for (dataset, unmatched) in &validated.unmatched {
            let audit = self
                .audit_dir
                .join(dataset.audit_file_name(Dataset::AUTHORITY));
            writes.push(PendingWrite::json(audit, unmatched, self.pretty)?);

            if self.replace_sources {
                let source = self.data_dir.join(dataset.file_name());
                writes.push(PendingWrite::json(
                    source,
                    validated.sources.get(*dataset),
                    self.pretty,
                )?);
            }
        }
        Ok(writes)
    }
}

/// In-memory result of a run, before anything is written.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    pub validated: ValidatedSources,
    pub graph: IntegratedGraph,
    pub skipped: SkipCounts,
}

impl PipelineOutput {
    /// Run every pure stage over fully loaded sources.
    #[must_use]
    pub fn from_sources(sources: Sources) -> Self {
        let validated = validate_sources(sources);
        let (graph, skipped) = {
            let indexes = Indexes::build(&validated.sources);
            let merged = merge_courses(&validated.sources, &indexes);
            build_graph(merged, &indexes)
        };
        Self {
            validated,
            graph,
            skipped,
        }
    }

    /// Every file this run produces, fully rendered.
    pub fn writes(&self, layout: &OutputLayout) -> Result<Vec<PendingWrite>, SourceError> {
        let mut writes = layout.validation_writes(&self.validated)?;
        writes.push(PendingWrite::json(
            &layout.integrated_path,
            &self.graph,
            layout.pretty,
        )?);
        Ok(writes)
    }

    #[must_use]
    pub fn summary(&self, written: &[PathBuf], elapsed: Duration) -> RunSummary {
        RunSummary {
            validation: validation_summary(&self.validated, written),
            courses: count(self.graph.courses.len()),
            synthesized_courses: count(
                self.graph
                    .courses
                    .iter()
                    .filter(|course| course.is_synthetic())
                    .count(),
            ),
            professors: count(self.graph.professors.len()),
            rooms: count(self.graph.rooms.len()),
            students: count(self.graph.students.len()),
            skipped: self.skipped.clone(),
            duration_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        }
    }
}

/// Runs the pipeline against one layout.
#[derive(Debug, Clone)]
pub struct Pipeline {
    layout: OutputLayout,
}

impl Pipeline {
    #[must_use]
    pub const fn new(layout: OutputLayout) -> Self {
        Self { layout }
    }

    #[must_use]
    pub const fn layout(&self) -> &OutputLayout {
        &self.layout
    }

    /// Full run. Writes audits, optionally rewritten sources, and the
    /// integrated document.
    pub fn run(&self) -> Result<RunSummary, PipelineError> {
        let started = Instant::now();
        let sources = load_all(&self.layout.data_dir)?;
        let output = PipelineOutput::from_sources(sources);

        let writes = output.writes(&self.layout)?;
        let written = write_all(&writes)?;
        tracing::info!(files = written.len(), "run complete");
        Ok(output.summary(&written, started.elapsed()))
    }

    /// Validation only. Writes audits and, if configured, rewritten sources.
    pub fn validate(&self) -> Result<ValidationSummary, PipelineError> {
        let sources = load_all(&self.layout.data_dir)?;
        let validated = validate_sources(sources);

        let writes = self.layout.validation_writes(&validated)?;
        let written = write_all(&writes)?;
        Ok(validation_summary(&validated, &written))
    }
}

fn validation_summary(validated: &ValidatedSources, written: &[PathBuf]) -> ValidationSummary {
    ValidationSummary {
        authority_codes: count(validated.authority_codes),
        datasets: validated.report.clone(),
        written: written
            .iter()
            .map(|path| path.display().to_string())
            .collect(),
    }
}

fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
