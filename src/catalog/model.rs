//! Serde model of a job catalog document.
//!
//! A document wraps the job list with a schema version and a small metadata
//! block. The bundled document under `catalogs/` is compiled into the binary;
//! alternate documents can be read from disk with the same shape.

use crate::catalog::{EmploymentType, JobCategory, JobId, Urgency};
use crate::schema::validate_catalog_document;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Bundled catalog document, embedded at build time.
pub const BUNDLED_CATALOG_JSON: &str = include_str!("../../catalogs/jobs.json");

/// Application portal used when a catalog document does not name one.
pub const DEFAULT_APPLY_URL: &str = match option_env!("CAREERS_APPLY_URL") {
    Some(url) => url,
    None => "https://mps.cms.work/hiring/apply",
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: JobId,
    pub title: String,
    pub category: JobCategory,
    pub location: String,
    #[serde(rename = "type")]
    pub employment_type: EmploymentType,
    pub urgency: Urgency,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
}

impl JobRecord {
    /// Requirement tags shown on a job card.
    pub fn requirement_preview(&self) -> &[String] {
        let end = self.requirements.len().min(REQUIREMENT_PREVIEW_LEN);
        &self.requirements[..end]
    }
}

pub const REQUIREMENT_PREVIEW_LEN: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogMetadata {
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub apply_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobCatalogDocument {
    pub schema_version: String,
    pub catalog: CatalogMetadata,
    pub jobs: Vec<JobRecord>,
}

/// Parse a catalog document, checking it against the schema contract first.
///
/// Only the document shape is checked here; `JobCatalog` applies the
/// semantic rules (unique ids, allowed schema versions, blank fields).
pub fn parse_catalog_document(raw: &str) -> Result<JobCatalogDocument> {
    let value: Value = serde_json::from_str(raw).context("parsing catalog JSON")?;
    validate_catalog_document(&value)?;
    serde_json::from_value(value).context("decoding catalog document")
}

pub fn load_catalog_from_path(path: &Path) -> Result<JobCatalogDocument> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading job catalog {}", path.display()))?;
    parse_catalog_document(&data).with_context(|| format!("loading {}", path.display()))
}
