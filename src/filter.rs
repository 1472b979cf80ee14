//! Search and filter predicates over job records.
//!
//! A `FilterState` combines free-text search with a category and an
//! employment-type selection. A record is visible only when all three
//! predicates hold. Filtering is pure and keeps the input order, so feeding a
//! filtered result back through the same state yields the same result.

use crate::catalog::{EmploymentType, JobCategory, JobRecord};
use serde::{Serialize, Serializer};
use std::fmt;
use tracing::warn;

/// Label the UI uses for "no restriction".
pub const ALL_LABEL: &str = "All";

/// One field of a filter: everything, one enumerated value, or a raw label
/// that names no known value.
///
/// `Unrecognized` keeps the raw input instead of failing the query. It can
/// never equal a record's value, so it matches nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
    Unrecognized(String),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T> Selection<T>
where
    T: PartialEq + for<'a> TryFrom<&'a str, Error = anyhow::Error>,
{
    /// Interpret a raw label coming from a UI control or a CLI flag.
    ///
    /// Labels must match exactly; `"welding"` or `"all"` name nothing.
    pub fn parse(raw: &str) -> Self {
        if raw == ALL_LABEL {
            return Selection::All;
        }
        match T::try_from(raw) {
            Ok(value) => Selection::Only(value),
            Err(err) => {
                warn!(selection = raw, error = %err, "unrecognized filter selection matches nothing");
                Selection::Unrecognized(raw.to_string())
            }
        }
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(selected) => selected == value,
            Selection::Unrecognized(_) => false,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str(ALL_LABEL),
            Selection::Only(value) => value.fmt(f),
            Selection::Unrecognized(raw) => f.write_str(raw),
        }
    }
}

// Serialized as the label a UI control would show.
impl<T: fmt::Display> Serialize for Selection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    pub search_query: String,
    pub category: Selection<JobCategory>,
    pub employment_type: Selection<EmploymentType>,
}

impl FilterState {
    /// Build a state from the raw values a UI would hand over.
    pub fn from_raw(search_query: &str, category: &str, employment_type: &str) -> Self {
        Self {
            search_query: search_query.to_string(),
            category: Selection::parse(category),
            employment_type: Selection::parse(employment_type),
        }
    }

    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    pub fn with_category(mut self, category: JobCategory) -> Self {
        self.category = Selection::Only(category);
        self
    }

    pub fn with_employment_type(mut self, employment_type: EmploymentType) -> Self {
        self.employment_type = Selection::Only(employment_type);
        self
    }

    /// True when any field narrows the catalog.
    pub fn is_active(&self) -> bool {
        !self.search_query.is_empty() || !self.category.is_all() || !self.employment_type.is_all()
    }

    pub fn matches(&self, job: &JobRecord) -> bool {
        Matcher::new(self).matches(job)
    }
}

// Lowercases the query once per filter pass rather than once per record.
struct Matcher<'s> {
    needle: Option<String>,
    state: &'s FilterState,
}

impl<'s> Matcher<'s> {
    fn new(state: &'s FilterState) -> Self {
        let needle = if state.search_query.is_empty() {
            None
        } else {
            Some(state.search_query.to_lowercase())
        };
        Self { needle, state }
    }

    fn matches(&self, job: &JobRecord) -> bool {
        self.matches_text(job)
            && self.state.category.matches(&job.category)
            && self.state.employment_type.matches(&job.employment_type)
    }

    fn matches_text(&self, job: &JobRecord) -> bool {
        let Some(needle) = self.needle.as_deref() else {
            return true;
        };
        [&job.title, &job.description, &job.location]
            .into_iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Records from `jobs` that satisfy every predicate in `state`, in input order.
pub fn filter<'a, I>(jobs: I, state: &FilterState) -> Vec<&'a JobRecord>
where
    I: IntoIterator<Item = &'a JobRecord>,
{
    let matcher = Matcher::new(state);
    jobs.into_iter().filter(|job| matcher.matches(job)).collect()
}
