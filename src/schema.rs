//! JSON Schema contract for job catalog documents.
//!
//! The contract lives in `schema/job_catalog.schema.json` and is compiled into
//! the crate so the bundled catalog and any override file are checked against
//! the same rules before they are decoded.

use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::sync::OnceLock;

/// Schema contract source, embedded at build time.
pub const CATALOG_SCHEMA_JSON: &str = include_str!("../schema/job_catalog.schema.json");

static CATALOG_SCHEMA: OnceLock<Result<JSONSchema, String>> = OnceLock::new();

fn compile_catalog_schema() -> Result<JSONSchema> {
    let schema: Value =
        serde_json::from_str(CATALOG_SCHEMA_JSON).context("parsing job catalog schema")?;
    JSONSchema::compile(&schema).map_err(|err| anyhow!("compiling job catalog schema: {err}"))
}

/// The compiled contract, built on first use and shared afterwards.
fn catalog_schema() -> Result<&'static JSONSchema> {
    CATALOG_SCHEMA
        .get_or_init(|| compile_catalog_schema().map_err(|err| format!("{err:#}")))
        .as_ref()
        .map_err(|err| anyhow!("{err}"))
}

/// Check a raw catalog document against the schema contract.
///
/// All violations are reported together, one per line, each prefixed with the
/// JSON pointer of the offending value.
pub fn validate_catalog_document(document: &Value) -> Result<()> {
    let compiled = catalog_schema()?;
    if let Err(errors) = compiled.validate(document) {
        let details = errors
            .map(|err| format!("{}: {}", err.instance_path, err))
            .collect::<Vec<_>>()
            .join("\n");
        bail!("job catalog failed schema validation:\n{}", details);
    }
    Ok(())
}
