//! The combined table filter: five facets reduced to one row predicate.

use crate::facet::FacetSelection;
use crate::row::{WorkItem, WorkItemKind};
use crate::selection::AnalyticSelection;
use serde::{Deserialize, Serialize};

/// Filter state for the whole table. Every facet defaults to "All".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableFilter {
    pub request_types: FacetSelection,
    pub analytics: AnalyticSelection,
    pub sources: FacetSelection,
    pub roles: FacetSelection,
    pub assignees: FacetSelection,
}

impl TableFilter {
    /// True when any facet deviates from its default, which is what enables
    /// the "Clear filters" button
    pub fn is_active(&self) -> bool {
        self.request_types.is_active()
            || self.analytics.is_active()
            || self.sources.is_active()
            || self.roles.is_active()
            || self.assignees.is_active()
    }

    /// Reset every facet to "All"
    pub fn clear(&mut self) {
        *self = TableFilter::default();
    }

    /// Drop stale analytic keys carried in from an older catalog
    pub fn sanitize(&mut self) {
        self.analytics.sanitize();
    }

    /// The row predicate: the kind-specific facet ANDed with the three
    /// independent facets
    pub fn matches(&self, item: &WorkItem) -> bool {
        let kind_ok = match &item.kind {
            WorkItemKind::Request(rt) => self.request_types.matches(rt.code()),
            WorkItemKind::Analytic {
                type_key,
                subtype_key,
            } => self.analytics.matches(type_key, Some(subtype_key)),
        };
        kind_ok
            && self.sources.matches(item.source.code())
            && self.roles.matches(item.role.code())
            && self.assignees.matches(&item.assignee_key())
    }

    /// Visible rows, in input order. Borrows so callers decide whether the
    /// filtered view needs its own copies.
    pub fn apply<'a>(&self, items: &'a [WorkItem]) -> Vec<&'a WorkItem> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}
