//! Careers page session: current filter state plus its memoized result.
//!
//! The page replaces the filter state wholesale on every interaction (a
//! keystroke, a category chip, a type chip, "clear filters"). The visible
//! list is derived from the catalog and that state and is recomputed only
//! when the state differs from the one the cached list was built for.

use crate::catalog::{EmploymentType, JobCatalog, JobCategory, JobId, JobRecord};
use crate::filter::{FilterState, Selection};
use serde::Serialize;
use std::fmt;
use tracing::debug;

pub struct CareerPortal<'c> {
    catalog: &'c JobCatalog,
    state: FilterState,
    computed_for: Option<FilterState>,
    visible: Vec<&'c JobRecord>,
    recomputes: usize,
}

/// "Showing N of M positions".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ResultSummary {
    pub showing: usize,
    pub total: usize,
}

impl fmt::Display for ResultSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing {} of {} positions", self.showing, self.total)
    }
}

/// Display view of one visible job.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct JobCard<'c> {
    pub id: &'c JobId,
    pub title: &'c str,
    pub category: JobCategory,
    pub location: &'c str,
    pub employment_type: EmploymentType,
    pub priority: bool,
    pub description: &'c str,
    pub requirements: &'c [String],
    pub apply_url: &'c str,
}

impl<'c> CareerPortal<'c> {
    pub fn new(catalog: &'c JobCatalog) -> Self {
        Self::with_state(catalog, FilterState::default())
    }

    pub fn with_state(catalog: &'c JobCatalog, state: FilterState) -> Self {
        Self {
            catalog,
            state,
            computed_for: None,
            visible: Vec::new(),
            recomputes: 0,
        }
    }

    pub fn catalog(&self) -> &'c JobCatalog {
        self.catalog
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn replace_state(&mut self, state: FilterState) {
        self.state = state;
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.replace_state(FilterState {
            search_query: query.into(),
            ..self.state.clone()
        });
    }

    /// Select a category by its UI label; `All` lifts the restriction.
    pub fn select_category(&mut self, label: &str) {
        self.replace_state(FilterState {
            category: Selection::parse(label),
            ..self.state.clone()
        });
    }

    /// Select an employment type by its UI label; `All` lifts the restriction.
    pub fn select_employment_type(&mut self, label: &str) {
        self.replace_state(FilterState {
            employment_type: Selection::parse(label),
            ..self.state.clone()
        });
    }

    pub fn clear_filters(&mut self) {
        self.replace_state(FilterState::default());
    }

    /// Whether the "clear filters" control should be offered.
    pub fn has_active_filters(&self) -> bool {
        self.state.is_active()
    }

    /// Jobs visible under the current state, in catalog order.
    pub fn visible(&mut self) -> &[&'c JobRecord] {
        if self.computed_for.as_ref() != Some(&self.state) {
            self.visible = self.catalog.filter(&self.state);
            self.computed_for = Some(self.state.clone());
            self.recomputes += 1;
            debug!(
                query = %self.state.search_query,
                category = %self.state.category,
                employment_type = %self.state.employment_type,
                visible = self.visible.len(),
                "recomputed visible jobs"
            );
        }
        &self.visible
    }

    pub fn summary(&mut self) -> ResultSummary {
        ResultSummary {
            showing: self.visible().len(),
            total: self.catalog.len(),
        }
    }

    pub fn cards(&mut self) -> Vec<JobCard<'c>> {
        let catalog: &'c JobCatalog = self.catalog;
        let apply_url = catalog.apply_url();
        self.visible()
            .iter()
            .copied()
            .map(|job| JobCard {
                id: &job.id,
                title: &job.title,
                category: job.category,
                location: &job.location,
                employment_type: job.employment_type,
                priority: job.urgency.is_priority(),
                description: &job.description,
                requirements: job.requirement_preview(),
                apply_url,
            })
            .collect()
    }

    /// How many times the visible list has been rebuilt.
    pub fn recompute_count(&self) -> usize {
        self.recomputes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchanged_state_reuses_cached_result() {
        let catalog = JobCatalog::embedded().unwrap();
        let mut portal = CareerPortal::new(&catalog);
        assert_eq!(portal.visible().len(), 16);
        assert_eq!(portal.visible().len(), 16);
        assert_eq!(portal.recompute_count(), 1);

        portal.set_search_query("weld");
        portal.visible();
        portal.summary();
        assert_eq!(portal.recompute_count(), 2);

        // Same query typed again replaces the state with an equal one.
        portal.set_search_query("weld");
        portal.visible();
        assert_eq!(portal.recompute_count(), 2);
    }

    #[test]
    fn summary_and_clear_filters() {
        let catalog = JobCatalog::embedded().unwrap();
        let mut portal = CareerPortal::new(&catalog);
        assert!(!portal.has_active_filters());

        portal.select_category("Management");
        assert!(portal.has_active_filters());
        assert_eq!(
            portal.summary(),
            ResultSummary {
                showing: 3,
                total: 16
            }
        );
        assert_eq!(portal.summary().to_string(), "Showing 3 of 16 positions");

        portal.clear_filters();
        assert!(!portal.has_active_filters());
        assert_eq!(portal.summary().showing, 16);
    }

    #[test]
    fn cards_carry_priority_and_requirement_preview() {
        let catalog = JobCatalog::embedded().unwrap();
        let mut portal = CareerPortal::new(&catalog);
        portal.select_employment_type("Apprentice");
        let cards = portal.cards();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].title, "1st-3rd Year Welder Apprentice");
        assert!(!cards[0].priority);
        assert_eq!(cards[0].requirements.len(), 3);
        assert_eq!(cards[1].requirements.len(), 2);
        assert_eq!(cards[0].apply_url, "https://mps.cms.work/hiring/apply");

        portal.clear_filters();
        let cards = portal.cards();
        let first = &cards[0];
        assert_eq!(first.id.as_str(), "cwb-welder");
        assert!(first.priority);
    }
}
