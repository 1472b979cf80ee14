#![allow(dead_code)]

use anyhow::Result;
use careers::{
    EmploymentType, FilterState, JobCatalog, JobCategory, JobId, JobRecord, Selection, Urgency,
};
use serde_json::{Value, json};
use std::io::Write;
use tempfile::NamedTempFile;

pub fn bundled_catalog() -> JobCatalog {
    JobCatalog::embedded().expect("bundled catalog should load")
}

pub fn job(id: &str, title: &str, category: JobCategory, kind: EmploymentType) -> JobRecord {
    JobRecord {
        id: JobId::from(id),
        title: title.to_string(),
        category,
        location: "Pierceland".to_string(),
        employment_type: kind,
        urgency: Urgency::Normal,
        description: "Fixture position".to_string(),
        requirements: Vec::new(),
    }
}

pub fn ids<'a>(jobs: &[&'a JobRecord]) -> Vec<&'a str> {
    jobs.iter().map(|job| job.id.as_str()).collect()
}

// Wraps job objects in a minimal catalog document.
pub fn catalog_document(jobs: Value) -> Value {
    json!({
        "schema_version": "job_catalog_v1",
        "catalog": {"key": "fixture_catalog", "title": "fixture catalog"},
        "jobs": jobs
    })
}

pub fn job_json(id: &str, category: &str, kind: &str) -> Value {
    json!({
        "id": id,
        "title": format!("{id} title"),
        "category": category,
        "location": "Shop",
        "type": kind,
        "urgency": "normal",
        "description": "fixture",
        "requirements": ["fixture requirement"]
    })
}

pub fn write_document(document: &Value) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    serde_json::to_writer(&mut file, document)?;
    file.flush()?;
    Ok(file)
}

// Every combination of a handful of queries with every category and type
// selection, including labels outside the enumerations.
pub fn sample_states() -> Vec<FilterState> {
    let queries = ["", "weld", "WELD", "field", "Pierceland HQ", "zzz-nonexistent"];
    let mut categories: Vec<Selection<JobCategory>> = vec![Selection::All];
    categories.extend(JobCategory::ALL.into_iter().map(Selection::Only));
    categories.push(Selection::Unrecognized("Plumbing".to_string()));
    let mut kinds: Vec<Selection<EmploymentType>> = vec![Selection::All];
    kinds.extend(EmploymentType::ALL.into_iter().map(Selection::Only));
    kinds.push(Selection::Unrecognized("Seasonal".to_string()));

    let mut states = Vec::new();
    for query in queries {
        for category in &categories {
            for kind in &kinds {
                states.push(FilterState {
                    search_query: query.to_string(),
                    category: category.clone(),
                    employment_type: kind.clone(),
                });
            }
        }
    }
    states
}
