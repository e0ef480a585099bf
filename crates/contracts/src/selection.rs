//! Hierarchical selection state for the analytic type filter.
//!
//! The selection is a pair of key sets: chosen categories and chosen leaves.
//! A chosen category always carries all of its leaves, so the canonical "All"
//! state is simply both sets fully populated. Toggling keeps the pair
//! consistent: selecting the last missing leaf of a category promotes the
//! category key, removing a leaf demotes it, and a selection emptied by a
//! toggle (but not by an explicit "Select None") reverts to "All".

use crate::catalog;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Selected analytic categories and leaves
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticSelection {
    pub types: BTreeSet<String>,
    pub subtypes: BTreeSet<String>,
}

/// What an active-selection chip points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipKind {
    Type,
    Subtype,
}

/// One removable chip in the filter dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChip {
    pub kind: ChipKind,
    pub key: String,
    pub label: String,
    /// Leaf count, present for category chips only
    pub leaf_count: Option<usize>,
}

impl Default for AnalyticSelection {
    fn default() -> Self {
        Self::all()
    }
}

impl AnalyticSelection {
    /// Canonical "All": every category and every leaf selected
    pub fn all() -> Self {
        Self {
            types: catalog::all_type_keys().map(str::to_string).collect(),
            subtypes: catalog::all_subtype_keys().map(str::to_string).collect(),
        }
    }

    /// Genuinely empty selection, reachable only via an explicit "Select None"
    pub fn none() -> Self {
        Self {
            types: BTreeSet::new(),
            subtypes: BTreeSet::new(),
        }
    }

    pub fn is_all(&self) -> bool {
        catalog::all_type_keys().all(|k| self.types.contains(k))
            && catalog::all_subtype_keys().all(|k| self.subtypes.contains(k))
    }

    pub fn is_none(&self) -> bool {
        self.types.is_empty() && self.subtypes.is_empty()
    }

    /// Any state other than canonical "All" filters rows
    pub fn is_active(&self) -> bool {
        !self.is_all()
    }

    /// Toggle a category: add or remove it together with all of its leaves.
    /// Unknown keys are ignored.
    pub fn toggle_type(&mut self, type_key: &str) {
        if catalog::find_type(type_key).is_none() {
            return;
        }
        if self.types.contains(type_key) {
            self.remove_type(type_key);
        } else {
            self.types.insert(type_key.to_string());
            for leaf in catalog::subtype_keys_of(type_key) {
                self.subtypes.insert(leaf.to_string());
            }
        }
    }

    /// Toggle a leaf, promoting or demoting its parent category as needed.
    /// Unknown keys are ignored.
    pub fn toggle_subtype(&mut self, subtype_key: &str) {
        let Some(subtype) = catalog::find_subtype(subtype_key) else {
            return;
        };
        if self.subtypes.contains(subtype_key) {
            self.remove_subtype(subtype_key);
        } else {
            self.subtypes.insert(subtype_key.to_string());
            let siblings = catalog::subtype_keys_of(subtype.parent);
            if siblings.iter().all(|k| self.subtypes.contains(*k)) {
                self.types.insert(subtype.parent.to_string());
            }
        }
    }

    /// Remove a category and all of its leaves (chip removal path)
    pub fn remove_type(&mut self, type_key: &str) {
        self.types.remove(type_key);
        for leaf in catalog::subtype_keys_of(type_key) {
            self.subtypes.remove(leaf);
        }
        self.revert_if_empty();
    }

    /// Remove a single leaf, demoting its parent category (chip removal path)
    pub fn remove_subtype(&mut self, subtype_key: &str) {
        if self.subtypes.remove(subtype_key) {
            if let Some(subtype) = catalog::find_subtype(subtype_key) {
                self.types.remove(subtype.parent);
            }
        }
        self.revert_if_empty();
    }

    pub fn select_all(&mut self) {
        *self = Self::all();
    }

    pub fn select_none(&mut self) {
        *self = Self::none();
    }

    /// Drop keys that are not in the catalog. A selection that held nothing
    /// but unknown keys reverts to "All".
    pub fn sanitize(&mut self) {
        let was_empty = self.is_none();
        self.types.retain(|k| catalog::find_type(k).is_some());
        self.subtypes.retain(|k| catalog::find_subtype(k).is_some());
        if !was_empty {
            self.revert_if_empty();
        }
    }

    /// Row predicate: an analytic row is visible when the selection is "All",
    /// its category is selected, or its specific leaf is selected.
    pub fn matches(&self, type_key: &str, subtype_key: Option<&str>) -> bool {
        if self.is_all() {
            return true;
        }
        if self.types.contains(type_key) {
            return true;
        }
        subtype_key.is_some_and(|k| self.subtypes.contains(k))
    }

    /// Number of effectively selected leaves, for the trigger caption.
    /// A selected category counts all of its leaves, which the selection
    /// invariant already keeps in the leaf set.
    pub fn selected_leaf_count(&self) -> usize {
        self.subtypes.len()
    }

    /// Chips for the active selection: one per selected category (with leaf
    /// count) plus one per leaf selected outside a selected category. Empty
    /// for "All" and "None".
    pub fn chips(&self) -> Vec<SelectionChip> {
        if self.is_all() {
            return Vec::new();
        }
        let mut chips = Vec::new();
        for analytic_type in catalog::ANALYTIC_TYPES {
            if self.types.contains(analytic_type.key) {
                chips.push(SelectionChip {
                    kind: ChipKind::Type,
                    key: analytic_type.key.to_string(),
                    label: analytic_type.label.to_string(),
                    leaf_count: Some(analytic_type.subtypes.len()),
                });
            }
        }
        for analytic_type in catalog::ANALYTIC_TYPES {
            if self.types.contains(analytic_type.key) {
                continue;
            }
            for subtype in analytic_type.subtypes {
                if self.subtypes.contains(subtype.key) {
                    chips.push(SelectionChip {
                        kind: ChipKind::Subtype,
                        key: subtype.key.to_string(),
                        label: subtype.label.to_string(),
                        leaf_count: None,
                    });
                }
            }
        }
        chips
    }

    fn revert_if_empty(&mut self) {
        if self.is_none() {
            *self = Self::all();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only(types: &[&str], subtypes: &[&str]) -> AnalyticSelection {
        AnalyticSelection {
            types: types.iter().map(|s| s.to_string()).collect(),
            subtypes: subtypes.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_default_is_all() {
        let sel = AnalyticSelection::default();
        assert!(sel.is_all());
        assert!(!sel.is_active());
        assert_eq!(sel.selected_leaf_count(), 9);
    }

    #[test]
    fn test_toggle_type_twice_restores_prior_selection() {
        let mut sel = only(&["loe_variance"], &[
            "chemical_vs_al",
            "chemical_vs_formation",
            "chemical_vs_route",
            "compressor_vs_al",
            "compressor_vs_formation",
        ]);
        let before = sel.clone();
        sel.toggle_type("margin_variance");
        assert!(sel.types.contains("margin_variance"));
        assert!(sel.subtypes.contains("boe_vs_al"));
        sel.toggle_type("margin_variance");
        assert_eq!(sel, before);
    }

    #[test]
    fn test_toggle_subtype_twice_restores_prior_selection() {
        let mut sel = only(&[], &["margin_vs_route"]);
        let before = sel.clone();
        sel.toggle_subtype("top_margin_lost");
        sel.toggle_subtype("top_margin_lost");
        assert_eq!(sel, before);
    }

    #[test]
    fn test_promotion_equals_direct_type_selection() {
        let mut leaf_by_leaf = AnalyticSelection::none();
        for key in [
            "chemical_vs_al",
            "chemical_vs_formation",
            "chemical_vs_route",
            "compressor_vs_al",
            "compressor_vs_formation",
        ] {
            leaf_by_leaf.toggle_subtype(key);
        }

        let mut direct = AnalyticSelection::none();
        direct.toggle_type("loe_variance");

        assert_eq!(leaf_by_leaf, direct);
        assert!(leaf_by_leaf.types.contains("loe_variance"));
    }

    #[test]
    fn test_no_promotion_while_a_sibling_is_missing() {
        let mut sel = AnalyticSelection::none();
        sel.toggle_subtype("top_margin_lost");
        sel.toggle_subtype("boe_vs_al");
        sel.toggle_subtype("margin_vs_route");
        assert!(!sel.types.contains("margin_variance"));
        sel.toggle_subtype("consecutive_negative");
        assert!(sel.types.contains("margin_variance"));
    }

    #[test]
    fn test_demotion_from_all() {
        let mut sel = AnalyticSelection::all();
        sel.toggle_subtype("boe_vs_al");

        // Owning category loses its key, the other leaves stay selected
        assert!(!sel.types.contains("margin_variance"));
        assert!(sel.types.contains("loe_variance"));
        assert!(!sel.subtypes.contains("boe_vs_al"));
        assert!(sel.subtypes.contains("top_margin_lost"));
        assert_eq!(sel.selected_leaf_count(), 8);
    }

    #[test]
    fn test_selecting_everything_collapses_to_all() {
        let mut sel = AnalyticSelection::none();
        sel.toggle_type("loe_variance");
        sel.toggle_type("margin_variance");
        assert!(sel.is_all());
        assert_eq!(sel, AnalyticSelection::all());
    }

    #[test]
    fn test_empty_via_toggle_reverts_to_all() {
        let mut sel = AnalyticSelection::none();
        sel.toggle_subtype("margin_vs_route");
        sel.toggle_subtype("margin_vs_route");
        assert!(sel.is_all());

        let mut sel = AnalyticSelection::none();
        sel.toggle_type("loe_variance");
        sel.toggle_type("loe_variance");
        assert!(sel.is_all());
    }

    #[test]
    fn test_explicit_none_is_genuinely_empty() {
        let mut sel = AnalyticSelection::all();
        sel.select_none();
        assert!(sel.is_none());
        assert!(sel.is_active());
        assert_eq!(sel.selected_leaf_count(), 0);
        assert!(!sel.matches("margin_variance", Some("boe_vs_al")));
    }

    #[test]
    fn test_chip_removal_demotes_and_reverts() {
        let mut sel = AnalyticSelection::none();
        sel.toggle_type("margin_variance");
        sel.remove_subtype("top_margin_lost");
        assert!(!sel.types.contains("margin_variance"));
        assert_eq!(sel.selected_leaf_count(), 3);

        for key in ["boe_vs_al", "margin_vs_route", "consecutive_negative"] {
            sel.remove_subtype(key);
        }
        // Removing the last chip falls back to "All", not "None"
        assert!(sel.is_all());
    }

    #[test]
    fn test_row_visibility() {
        let mut sel = AnalyticSelection::none();
        sel.toggle_type("margin_variance");

        // Fully selected category matches any of its leaves
        assert!(sel.matches("margin_variance", Some("boe_vs_al")));
        assert!(sel.matches("margin_variance", Some("top_margin_lost")));
        assert!(!sel.matches("loe_variance", Some("chemical_vs_al")));

        // A lone leaf matches only rows carrying that leaf
        let mut sel = AnalyticSelection::none();
        sel.toggle_subtype("chemical_vs_route");
        assert!(sel.matches("loe_variance", Some("chemical_vs_route")));
        assert!(!sel.matches("loe_variance", Some("chemical_vs_al")));
        assert!(!sel.matches("loe_variance", None));
    }

    #[test]
    fn test_unknown_keys_are_ignored_by_toggles() {
        let mut sel = AnalyticSelection::all();
        sel.toggle_type("not_a_type");
        sel.toggle_subtype("not_a_subtype");
        assert!(sel.is_all());
    }

    #[test]
    fn test_sanitize_drops_unknown_keys() {
        let mut sel = only(&["margin_variance", "stale_type"], &[
            "boe_vs_al",
            "stale_leaf",
        ]);
        sel.sanitize();
        assert_eq!(sel, only(&["margin_variance"], &["boe_vs_al"]));

        // Nothing but stale keys: malformed selection defaults to "All"
        let mut sel = only(&["stale_type"], &["stale_leaf"]);
        sel.sanitize();
        assert!(sel.is_all());

        // An explicit "None" survives sanitize untouched
        let mut sel = AnalyticSelection::none();
        sel.sanitize();
        assert!(sel.is_none());
    }

    #[test]
    fn test_chips() {
        assert!(AnalyticSelection::all().chips().is_empty());
        assert!(AnalyticSelection::none().chips().is_empty());

        let mut sel = AnalyticSelection::none();
        sel.toggle_type("loe_variance");
        sel.toggle_subtype("margin_vs_route");

        let chips = sel.chips();
        assert_eq!(chips.len(), 2);
        assert_eq!(chips[0].kind, ChipKind::Type);
        assert_eq!(chips[0].label, "LOE Variance");
        assert_eq!(chips[0].leaf_count, Some(5));
        assert_eq!(chips[1].kind, ChipKind::Subtype);
        assert_eq!(chips[1].label, "Margin vs Route");
        assert_eq!(chips[1].leaf_count, None);
    }
}
