//! Flat facet selection for the single-level filters (request type, source,
//! role, assigned-to).
//!
//! "All" and "None" are distinguished states rather than set contents: "All"
//! is the default and matches everything, "None" (offered by the request-type
//! widget only) matches nothing, and `Picked` holds the chosen keys. Toggling
//! collapses a full pick back to "All" and reverts an emptied pick to "All".

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacetSelection {
    All,
    None,
    Picked(BTreeSet<String>),
}

impl Default for FacetSelection {
    fn default() -> Self {
        FacetSelection::All
    }
}

impl FacetSelection {
    pub fn is_all(&self) -> bool {
        matches!(self, FacetSelection::All)
    }

    pub fn is_none(&self) -> bool {
        matches!(self, FacetSelection::None)
    }

    /// Any state other than the default "All" filters rows
    pub fn is_active(&self) -> bool {
        !self.is_all()
    }

    /// Whether the option with this key shows as checked
    pub fn contains(&self, key: &str) -> bool {
        match self {
            FacetSelection::All => true,
            FacetSelection::None => false,
            FacetSelection::Picked(keys) => keys.contains(key),
        }
    }

    /// Row predicate for this facet
    pub fn matches(&self, key: &str) -> bool {
        self.contains(key)
    }

    /// Number of explicitly picked keys, for the trigger caption
    pub fn selected_count(&self) -> usize {
        match self {
            FacetSelection::Picked(keys) => keys.len(),
            _ => 0,
        }
    }

    /// Toggle one option. From "All" or "None" the pick narrows to exactly
    /// this key. A pick that grows to cover the whole universe collapses to
    /// "All"; a pick emptied by the toggle reverts to "All".
    pub fn toggle(&mut self, key: &str, universe: &[String]) {
        match self {
            FacetSelection::All | FacetSelection::None => {
                let mut keys = BTreeSet::new();
                keys.insert(key.to_string());
                *self = FacetSelection::Picked(keys);
            }
            FacetSelection::Picked(keys) => {
                if !keys.remove(key) {
                    keys.insert(key.to_string());
                }
                if keys.is_empty() || universe.iter().all(|k| keys.contains(k)) {
                    *self = FacetSelection::All;
                }
            }
        }
    }

    pub fn select_all(&mut self) {
        *self = FacetSelection::All;
    }

    pub fn select_none(&mut self) {
        *self = FacetSelection::None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn universe() -> Vec<String> {
        ["alpha", "bravo", "charlie"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_default_matches_everything() {
        let sel = FacetSelection::default();
        assert!(sel.is_all());
        assert!(!sel.is_active());
        assert!(sel.matches("alpha"));
        assert!(sel.matches("anything"));
    }

    #[test]
    fn test_none_matches_nothing() {
        let mut sel = FacetSelection::All;
        sel.select_none();
        assert!(sel.is_none());
        assert!(sel.is_active());
        assert!(!sel.matches("alpha"));
    }

    #[test]
    fn test_toggle_from_all_narrows_to_single_key() {
        let mut sel = FacetSelection::All;
        sel.toggle("bravo", &universe());
        assert!(sel.matches("bravo"));
        assert!(!sel.matches("alpha"));
        assert_eq!(sel.selected_count(), 1);
    }

    #[test]
    fn test_toggle_from_none_narrows_to_single_key() {
        let mut sel = FacetSelection::None;
        sel.toggle("alpha", &universe());
        assert!(sel.matches("alpha"));
        assert!(!sel.matches("bravo"));
    }

    #[test]
    fn test_toggle_off_last_key_reverts_to_all() {
        let mut sel = FacetSelection::All;
        sel.toggle("alpha", &universe());
        sel.toggle("alpha", &universe());
        assert!(sel.is_all());
    }

    #[test]
    fn test_full_pick_collapses_to_all() {
        let mut sel = FacetSelection::All;
        sel.toggle("alpha", &universe());
        sel.toggle("bravo", &universe());
        assert_eq!(sel.selected_count(), 2);
        sel.toggle("charlie", &universe());
        assert!(sel.is_all());
    }

    #[test]
    fn test_toggle_twice_restores_prior_pick() {
        let mut sel = FacetSelection::All;
        sel.toggle("alpha", &universe());
        let before = sel.clone();
        sel.toggle("bravo", &universe());
        sel.toggle("bravo", &universe());
        assert_eq!(sel, before);
    }
}
