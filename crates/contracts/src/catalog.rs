//! Static catalog of analytic types and their subtypes.
//!
//! The hierarchy is fixed at compile time; the lazily built indexes exist so
//! the filter code can resolve keys without scanning the tree on every row.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Top-level analytic category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyticType {
    pub key: &'static str,
    pub label: &'static str,
    pub subtypes: &'static [AnalyticSubtype],
}

/// Leaf analytic under a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyticSubtype {
    pub key: &'static str,
    pub label: &'static str,
    pub parent: &'static str,
}

pub static ANALYTIC_TYPES: &[AnalyticType] = &[
    AnalyticType {
        key: "loe_variance",
        label: "LOE Variance",
        subtypes: &[
            AnalyticSubtype {
                key: "chemical_vs_al",
                label: "Chemical vs Artificial Lift Avg",
                parent: "loe_variance",
            },
            AnalyticSubtype {
                key: "chemical_vs_formation",
                label: "Chemical vs Formation Avg",
                parent: "loe_variance",
            },
            AnalyticSubtype {
                key: "chemical_vs_route",
                label: "Chemical vs Route Avg",
                parent: "loe_variance",
            },
            AnalyticSubtype {
                key: "compressor_vs_al",
                label: "Compressor vs Artificial Lift Avg",
                parent: "loe_variance",
            },
            AnalyticSubtype {
                key: "compressor_vs_formation",
                label: "Compressor vs Formation Avg",
                parent: "loe_variance",
            },
        ],
    },
    AnalyticType {
        key: "margin_variance",
        label: "Margin Variance",
        subtypes: &[
            AnalyticSubtype {
                key: "top_margin_lost",
                label: "Top Cumulative Margin Lost",
                parent: "margin_variance",
            },
            AnalyticSubtype {
                key: "boe_vs_al",
                label: "$/BOE vs Artificial List",
                parent: "margin_variance",
            },
            AnalyticSubtype {
                key: "margin_vs_route",
                label: "Margin vs Route",
                parent: "margin_variance",
            },
            AnalyticSubtype {
                key: "consecutive_negative",
                label: "12 mo. Consecutive Negative Margin",
                parent: "margin_variance",
            },
        ],
    },
];

static TYPE_INDEX: Lazy<HashMap<&'static str, &'static AnalyticType>> =
    Lazy::new(|| ANALYTIC_TYPES.iter().map(|t| (t.key, t)).collect());

static SUBTYPE_INDEX: Lazy<HashMap<&'static str, &'static AnalyticSubtype>> = Lazy::new(|| {
    ANALYTIC_TYPES
        .iter()
        .flat_map(|t| t.subtypes.iter())
        .map(|st| (st.key, st))
        .collect()
});

/// Find a category by key
pub fn find_type(key: &str) -> Option<&'static AnalyticType> {
    TYPE_INDEX.get(key).copied()
}

/// Find a leaf by key
pub fn find_subtype(key: &str) -> Option<&'static AnalyticSubtype> {
    SUBTYPE_INDEX.get(key).copied()
}

/// Keys of every category
pub fn all_type_keys() -> impl Iterator<Item = &'static str> {
    ANALYTIC_TYPES.iter().map(|t| t.key)
}

/// Keys of every leaf across all categories
pub fn all_subtype_keys() -> impl Iterator<Item = &'static str> {
    ANALYTIC_TYPES
        .iter()
        .flat_map(|t| t.subtypes.iter())
        .map(|st| st.key)
}

/// Keys of the leaves under one category; empty if the key is unknown
pub fn subtype_keys_of(type_key: &str) -> Vec<&'static str> {
    find_type(type_key)
        .map(|t| t.subtypes.iter().map(|st| st.key).collect())
        .unwrap_or_default()
}
