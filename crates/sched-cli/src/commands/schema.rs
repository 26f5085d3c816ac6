use sched_core::graph::IntegratedGraph;
use sched_core::record::Record;
use sched_core::responses::{RunSummary, ValidationSummary};
use schemars::{Schema, schema_for};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaDocument};
use crate::output::output;

/// Handle `sched schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema(args.document), flags.format)
}

fn schema(document: SchemaDocument) -> Schema {
    match document {
        SchemaDocument::Integrated => schema_for!(IntegratedGraph),
        SchemaDocument::RunSummary => schema_for!(RunSummary),
        SchemaDocument::ValidationSummary => schema_for!(ValidationSummary),
        SchemaDocument::Record => schema_for!(Record),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integrated_schema_lists_top_level_views() {
        let value =
            serde_json::to_value(schema(SchemaDocument::Integrated)).expect("schema serializes");
        let properties = value["properties"].as_object().expect("object schema");
        for key in ["courses", "professors", "students", "rooms"] {
            assert!(properties.contains_key(key), "missing {key}");
        }
    }

    #[test]
    fn record_schema_is_an_open_object() {
        let value =
            serde_json::to_value(schema(SchemaDocument::Record)).expect("schema serializes");
        assert_eq!(value["type"], "object");
    }
}
