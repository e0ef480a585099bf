//! Trigger captions for the filter dropdowns.

use contracts::facet::FacetSelection;
use contracts::selection::AnalyticSelection;

/// "Label: All", "Label: None" or "Label: (n)" for a flat facet
pub fn facet_caption(label: &str, selection: &FacetSelection) -> String {
    if selection.is_all() {
        format!("{}: All", label)
    } else if selection.is_none() {
        format!("{}: None", label)
    } else {
        format!("{}: ({})", label, selection.selected_count())
    }
}

/// Caption for the hierarchical analytic filter; the count is effective
/// leaves, so a selected category counts all of its subtypes
pub fn analytic_caption(selection: &AnalyticSelection) -> String {
    if selection.is_none() {
        "Analytic type: None".to_string()
    } else if selection.is_all() {
        "Analytic type: All".to_string()
    } else {
        format!("Analytic type: ({})", selection.selected_leaf_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facet_caption() {
        let mut sel = FacetSelection::All;
        assert_eq!(facet_caption("Source", &sel), "Source: All");

        sel.select_none();
        assert_eq!(facet_caption("Request type", &sel), "Request type: None");

        let universe = vec!["cygnet".to_string(), "workqueue".to_string()];
        sel.toggle("cygnet", &universe);
        assert_eq!(facet_caption("Source", &sel), "Source: (1)");
    }

    #[test]
    fn test_analytic_caption() {
        let mut sel = AnalyticSelection::all();
        assert_eq!(analytic_caption(&sel), "Analytic type: All");

        sel.select_none();
        assert_eq!(analytic_caption(&sel), "Analytic type: None");

        sel.toggle_type("margin_variance");
        assert_eq!(analytic_caption(&sel), "Analytic type: (4)");

        sel.toggle_subtype("chemical_vs_al");
        assert_eq!(analytic_caption(&sel), "Analytic type: (5)");
    }
}
