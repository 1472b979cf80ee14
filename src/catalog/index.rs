//! Validated, read-only view of a job catalog.
//!
//! `JobCatalog` keeps the jobs in document order (filtering must preserve
//! it) and builds an id index next to them. Loading is strict: duplicate ids,
//! blank display fields and unknown schema versions are rejected so the page
//! never renders a half-valid catalog.

use crate::catalog::model::{
    BUNDLED_CATALOG_JSON, DEFAULT_APPLY_URL, JobCatalogDocument, JobRecord,
    load_catalog_from_path, parse_catalog_document,
};
use crate::catalog::{CatalogMetadata, JobCategory, JobId};
use crate::filter::{self, FilterState};
use anyhow::{Context, Result, bail};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use tracing::debug;

const DEFAULT_SCHEMA_VERSION: &str = "job_catalog_v1";
const ENV_ALLOWED_SCHEMA_VERSIONS: &str = "CAREERS_ALLOWED_CATALOG_SCHEMAS";

#[derive(Debug, Clone)]
/// Ordered job list plus a derived index keyed by job id.
pub struct JobCatalog {
    metadata: CatalogMetadata,
    jobs: Vec<JobRecord>,
    by_id: BTreeMap<JobId, usize>,
    stats: CatalogStats,
}

/// Aggregates over the full, unfiltered catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub total_count: usize,
    pub urgent_count: usize,
    pub distinct_locations: Vec<String>,
    pub distinct_categories: Vec<JobCategory>,
    pub count_by_category: BTreeMap<JobCategory, usize>,
}

impl JobCatalog {
    /// Load the catalog compiled into the crate.
    pub fn embedded() -> Result<Self> {
        let document =
            parse_catalog_document(BUNDLED_CATALOG_JSON).context("loading bundled job catalog")?;
        Self::from_document(document)
    }

    /// Load and validate a catalog document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let document = load_catalog_from_path(path)?;
        Self::from_document(document).with_context(|| format!("validating {}", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Self::from_document(parse_catalog_document(raw)?)
    }

    /// Validate an already-decoded document and build the index.
    pub fn from_document(document: JobCatalogDocument) -> Result<Self> {
        validate_schema_version(&document.schema_version)?;
        validate_catalog_metadata(&document.catalog)?;
        let by_id = build_index(&document.jobs)?;
        let stats = CatalogStats::compute(&document.jobs);
        debug!(
            key = %document.catalog.key,
            jobs = stats.total_count,
            urgent = stats.urgent_count,
            "job catalog loaded"
        );
        Ok(Self {
            metadata: document.catalog,
            jobs: document.jobs,
            by_id,
            stats,
        })
    }

    pub fn metadata(&self) -> &CatalogMetadata {
        &self.metadata
    }

    /// Jobs in document order.
    pub fn jobs(&self) -> &[JobRecord] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Resolve a job by id.
    pub fn get(&self, id: &JobId) -> Option<&JobRecord> {
        self.by_id.get(id).map(|&pos| &self.jobs[pos])
    }

    pub fn stats(&self) -> &CatalogStats {
        &self.stats
    }

    /// External application portal every job links to.
    pub fn apply_url(&self) -> &str {
        self.metadata.apply_url.as_deref().unwrap_or(DEFAULT_APPLY_URL)
    }

    /// Jobs matching `state`, in document order.
    pub fn filter(&self, state: &FilterState) -> Vec<&JobRecord> {
        filter::filter(&self.jobs, state)
    }
}

impl CatalogStats {
    pub fn compute(jobs: &[JobRecord]) -> Self {
        let mut locations: BTreeSet<&str> = BTreeSet::new();
        let mut count_by_category: BTreeMap<JobCategory, usize> = BTreeMap::new();
        for job in jobs {
            locations.insert(job.location.as_str());
            *count_by_category.entry(job.category).or_default() += 1;
        }
        Self {
            total_count: jobs.len(),
            urgent_count: jobs.iter().filter(|job| job.urgency.is_priority()).count(),
            distinct_locations: locations.into_iter().map(str::to_string).collect(),
            distinct_categories: count_by_category.keys().copied().collect(),
            count_by_category,
        }
    }
}

pub fn allowed_schema_versions() -> BTreeSet<String> {
    let mut versions: BTreeSet<String> = BTreeSet::new();
    versions.insert(DEFAULT_SCHEMA_VERSION.to_string());
    if let Ok(raw) = std::env::var(ENV_ALLOWED_SCHEMA_VERSIONS) {
        for v in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            versions.insert(v.to_string());
        }
    }
    versions
}

fn validate_schema_version(schema_version: &str) -> Result<()> {
    if schema_version.is_empty() {
        bail!("schema_version must not be empty");
    }

    let allowed = allowed_schema_versions();
    if !allowed.contains(schema_version) {
        bail!(
            "schema_version '{}' not in allowed set {:?}",
            schema_version,
            allowed
        );
    }

    Ok(())
}

fn validate_catalog_metadata(meta: &CatalogMetadata) -> Result<()> {
    if !is_valid_key(&meta.key) {
        bail!("catalog.key must match ^[A-Za-z0-9_.-]+$, got '{}'", meta.key);
    }
    if meta.title.trim().is_empty() {
        bail!("catalog.title must not be empty");
    }
    if let Some(url) = &meta.apply_url {
        if url.trim().is_empty() {
            bail!("catalog.apply_url must not be blank when present");
        }
    }
    Ok(())
}

fn is_valid_key(raw: &str) -> bool {
    !raw.is_empty()
        && raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
}

fn build_index(jobs: &[JobRecord]) -> Result<BTreeMap<JobId, usize>> {
    if jobs.is_empty() {
        bail!("catalog contains no jobs");
    }

    let mut map = BTreeMap::new();
    for (pos, job) in jobs.iter().enumerate() {
        if !is_valid_key(job.id.as_str()) {
            bail!("job id must match ^[A-Za-z0-9_.-]+$, got '{}'", job.id);
        }
        if map.contains_key(&job.id) {
            bail!("duplicate job id {}", job.id);
        }
        for (field, value) in [
            ("title", &job.title),
            ("location", &job.location),
            ("description", &job.description),
        ] {
            if value.trim().is_empty() {
                bail!("job {} has an empty {}", job.id, field);
            }
        }
        if job.requirements.iter().any(|req| req.trim().is_empty()) {
            bail!("job {} lists an empty requirement", job.id);
        }
        map.insert(job.id.clone(), pos);
    }
    Ok(map)
}
