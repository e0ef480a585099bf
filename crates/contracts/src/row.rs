//! Table row model: one work item, either an operational request or an
//! analytic finding from the catalog.

use crate::catalog;
use crate::enums::{RequestType, Role, Source};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkItemKind {
    Request(RequestType),
    Analytic {
        type_key: String,
        subtype_key: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    pub id: Uuid,
    pub location: String,
    pub kind: WorkItemKind,
    pub description: String,
    pub source: Source,
    pub role: Role,
    /// Engineer name as "Last, First"; `None` renders as "Unassigned"
    pub assigned_to: Option<String>,
    pub arrival_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

/// Filter key for an assignee name: lowercase with whitespace stripped,
/// `None` maps to `"unassigned"`
pub fn assignee_key(assigned_to: Option<&str>) -> String {
    match assigned_to {
        Some(name) => name
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect(),
        None => "unassigned".to_string(),
    }
}

impl WorkItem {
    pub fn is_request(&self) -> bool {
        matches!(self.kind, WorkItemKind::Request(_))
    }

    /// Main label of the "Type" column
    pub fn type_label(&self) -> String {
        match &self.kind {
            WorkItemKind::Request(rt) => rt.display_name().to_string(),
            WorkItemKind::Analytic { type_key, .. } => catalog::find_type(type_key)
                .map(|t| t.label.to_string())
                .unwrap_or_else(|| type_key.clone()),
        }
    }

    /// Leaf label for analytic rows
    pub fn subtype_label(&self) -> Option<String> {
        match &self.kind {
            WorkItemKind::Request(_) => None,
            WorkItemKind::Analytic { subtype_key, .. } => Some(
                catalog::find_subtype(subtype_key)
                    .map(|st| st.label.to_string())
                    .unwrap_or_else(|| subtype_key.clone()),
            ),
        }
    }

    pub fn assignee_key(&self) -> String {
        assignee_key(self.assigned_to.as_deref())
    }

    pub fn assigned_display(&self) -> String {
        self.assigned_to
            .clone()
            .unwrap_or_else(|| "Unassigned".to_string())
    }

    pub fn arrival_display(&self) -> String {
        format_short_date(self.arrival_date)
    }

    /// End date column; requests run open-ended and render empty
    pub fn end_display(&self) -> String {
        if self.is_request() {
            return String::new();
        }
        self.end_date.map(format_short_date).unwrap_or_default()
    }
}

/// mm/dd/yy, the format the table renders dates in
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%m/%d/%y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analytic_item() -> WorkItem {
        WorkItem {
            id: Uuid::new_v4(),
            location: "RDX 21-31 PAD".to_string(),
            kind: WorkItemKind::Analytic {
                type_key: "margin_variance".to_string(),
                subtype_key: "boe_vs_al".to_string(),
            },
            description: "Margin review".to_string(),
            source: Source::DataBricks,
            role: Role::ProductionEngineer,
            assigned_to: Some("Kowalski, Anna".to_string()),
            arrival_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 22),
        }
    }

    #[test]
    fn test_assignee_key_normalization() {
        assert_eq!(assignee_key(Some("Kowalski, Anna")), "kowalski,anna");
        assert_eq!(assignee_key(Some("O'Connor, Sean")), "o'connor,sean");
        assert_eq!(assignee_key(None), "unassigned");
    }

    #[test]
    fn test_analytic_labels() {
        let item = analytic_item();
        assert!(!item.is_request());
        assert_eq!(item.type_label(), "Margin Variance");
        assert_eq!(item.subtype_label().as_deref(), Some("$/BOE vs Artificial List"));
        assert_eq!(item.arrival_display(), "03/15/24");
        assert_eq!(item.end_display(), "03/22/24");
    }

    #[test]
    fn test_request_labels() {
        let mut item = analytic_item();
        item.kind = WorkItemKind::Request(RequestType::AlReview);
        item.assigned_to = None;
        assert!(item.is_request());
        assert_eq!(item.type_label(), "AL Review");
        assert_eq!(item.subtype_label(), None);
        assert_eq!(item.assigned_display(), "Unassigned");
        // Requests never show an end date, even when one is recorded
        assert_eq!(item.end_display(), "");
    }
}
