//! Job catalog wiring.
//!
//! The bundled catalog (`catalogs/jobs.json`) is embedded at build time and
//! validated on load. Types here mirror the document fields; callers use
//! `JobCatalog` for ordered access, id lookups and filtering.

pub mod identity;
pub mod index;
pub mod model;

pub use identity::{EmploymentType, JobCategory, JobId, Urgency};
pub use index::{CatalogStats, JobCatalog};
pub use model::{
    BUNDLED_CATALOG_JSON, CatalogMetadata, DEFAULT_APPLY_URL, JobCatalogDocument, JobRecord,
    load_catalog_from_path, parse_catalog_document,
};
