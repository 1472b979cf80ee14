pub mod catalog;
pub mod filter;
pub mod logging;
pub mod portal;
pub mod schema;

pub use catalog::{
    CatalogMetadata, CatalogStats, EmploymentType, JobCatalog, JobCatalogDocument, JobCategory,
    JobId, JobRecord, Urgency, load_catalog_from_path,
};
pub use filter::{FilterState, Selection, filter};
pub use portal::{CareerPortal, JobCard, ResultSummary};

use anyhow::Result;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

const ENV_CATALOG_PATH: &str = "CAREERS_CATALOG";

/// Where the job catalog should come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogSource {
    Bundled,
    File(PathBuf),
}

/// Pick the catalog source: an explicit path wins, then `CAREERS_CATALOG`,
/// then the bundled catalog.
pub fn catalog_source(explicit: Option<&Path>, env_hint: Option<String>) -> CatalogSource {
    if let Some(path) = explicit {
        return CatalogSource::File(path.to_path_buf());
    }
    match env_hint {
        Some(hint) if !hint.trim().is_empty() => CatalogSource::File(PathBuf::from(hint.trim())),
        _ => CatalogSource::Bundled,
    }
}

pub fn load_catalog(explicit: Option<&Path>) -> Result<JobCatalog> {
    let source = catalog_source(explicit, env::var(ENV_CATALOG_PATH).ok());
    debug!(?source, "resolving job catalog");
    match source {
        CatalogSource::Bundled => JobCatalog::embedded(),
        CatalogSource::File(path) => JobCatalog::load(&path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn explicit_path_beats_env_hint() {
        let source = catalog_source(Some(Path::new("a.json")), Some("b.json".to_string()));
        assert_eq!(source, CatalogSource::File(PathBuf::from("a.json")));
    }

    #[test]
    fn blank_env_hint_falls_back_to_bundled() {
        assert_eq!(catalog_source(None, Some("  ".to_string())), CatalogSource::Bundled);
        assert_eq!(catalog_source(None, None), CatalogSource::Bundled);
        assert_eq!(
            catalog_source(None, Some("jobs.json".to_string())),
            CatalogSource::File(PathBuf::from("jobs.json"))
        );
    }

    #[test]
    fn load_catalog_reads_explicit_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(catalog::BUNDLED_CATALOG_JSON.as_bytes())
            .unwrap();
        let catalog = load_catalog(Some(file.path())).unwrap();
        assert_eq!(catalog.len(), 16);
    }

    #[test]
    fn load_catalog_reports_missing_file() {
        let err = load_catalog(Some(Path::new("/nonexistent/jobs.json"))).unwrap_err();
        assert!(format!("{err:#}").contains("reading job catalog"));
    }
}
