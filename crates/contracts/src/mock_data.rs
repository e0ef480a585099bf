//! Demo dataset for the work queue table: one analytic row per catalog leaf
//! plus a fixed batch of operational requests, shuffled deterministically so
//! the table (and the tests) see the same order on every run.

use crate::catalog;
use crate::enums::{RequestType, Role, Source};
use crate::row::{WorkItem, WorkItemKind};
use chrono::NaiveDate;
use uuid::Uuid;

/// Engineer roster, "Last, First"
pub static ENGINEERS: &[&str] = &[
    "Kowalski, Anna",
    "Gupta, Priya",
    "Thompson, Sarah",
    "Chen, Wei",
    "O'Connor, Sean",
    "Kim, David",
    "Zhang, Min",
    "Martinez, Ana",
    "Santos, Miguel",
    "Wilson, Thomas",
    "Nguyen, Lisa",
    "Brown, Jessica",
    "Anderson, Mark",
    "Rodriguez, Carlos",
    "Patel, Raj",
];

/// Well and battery locations the demo rows point at
pub static WELL_LOCATIONS: &[&str] = &[
    "VEGA 29 FED 1H_2H BATTERY",
    "CROSS MOUNTAIN 40-28-1H PAD",
    "QUINN 37-36 EAST PAD",
    "PECOS STATE 46-3H 4H TB PAD",
    "RDX 21-31 PAD",
    "EAST PECOS FEDERAL COM 22-1H PAD",
    "NORTH THISTLE 2 CTB 1",
    "FIJI 17 CTB 1",
    "BOYD 21 PRODUCTION PAD",
    "MULE 11 CTB 2",
    "MULE 23 CTB 2",
    "RDX 22-32 PAD",
    "VEGA 31 FED 2H_3H BATTERY",
    "THISTLE 4 CTB 2",
    "CROSS MOUNTAIN 42-28-2H PAD",
];

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("invalid mock date")
}

/// One analytic row per catalog leaf, with engineer, location and source
/// assigned round-robin
pub fn analytic_items() -> Vec<WorkItem> {
    let sources = Source::analytic();
    let mut items = Vec::new();
    for (type_index, analytic_type) in catalog::ANALYTIC_TYPES.iter().enumerate() {
        for (subtype_index, subtype) in analytic_type.subtypes.iter().enumerate() {
            let offset = type_index + subtype_index;
            let source = sources[offset % sources.len()];
            let flavor = match source {
                Source::Cygnet => "using real-time historian data",
                Source::PiAfAnalytics => "through asset framework analytics",
                _ => "via data lake processing",
            };
            items.push(WorkItem {
                id: Uuid::new_v4(),
                location: WELL_LOCATIONS[offset % WELL_LOCATIONS.len()].to_string(),
                kind: WorkItemKind::Analytic {
                    type_key: analytic_type.key.to_string(),
                    subtype_key: subtype.key.to_string(),
                },
                description: format!(
                    "Detailed analysis comparing {} metrics {}.",
                    subtype.label.to_lowercase(),
                    flavor
                ),
                source,
                role: Role::ProductionEngineer,
                assigned_to: Some(ENGINEERS[offset % ENGINEERS.len()].to_string()),
                arrival_date: date(2024, 3, 15),
                end_date: Some(date(2024, 3, 22)),
            });
        }
    }
    items
}

fn request(
    location: &str,
    request_type: RequestType,
    description: &str,
    role: Role,
    assigned_to: &str,
    arrival: NaiveDate,
    end: Option<NaiveDate>,
) -> WorkItem {
    WorkItem {
        id: Uuid::new_v4(),
        location: location.to_string(),
        kind: WorkItemKind::Request(request_type),
        description: description.to_string(),
        source: Source::WorkQueue,
        role,
        assigned_to: Some(assigned_to.to_string()),
        arrival_date: arrival,
        end_date: end,
    }
}

/// The fixed batch of operational requests sitting in the queue
pub fn request_items() -> Vec<WorkItem> {
    vec![
        request(
            "VEGA 29 FED 1H_2H BATTERY",
            RequestType::AdHoc,
            "Custom analysis request for well performance optimization.",
            Role::ProductionEngineer,
            "Kowalski, Anna",
            date(2024, 3, 15),
            Some(date(2024, 3, 22)),
        ),
        request(
            "CROSS MOUNTAIN 40-28-1H PAD",
            RequestType::DownWell,
            "Investigation of downwell conditions and maintenance requirements.",
            Role::ProductionForeman,
            "Gupta, Priya",
            date(2024, 3, 15),
            None,
        ),
        request(
            "QUINN 37-36 EAST PAD",
            RequestType::AdHoc,
            "Pressure anomaly investigation and optimization strategy.",
            Role::ProductionEngineer,
            "Thompson, Sarah",
            date(2024, 3, 14),
            Some(date(2024, 3, 21)),
        ),
        request(
            "PECOS STATE 46-3H 4H TB PAD",
            RequestType::DownWell,
            "Emergency maintenance inspection for pump failure.",
            Role::ProductionAssistantForeman,
            "Chen, Wei",
            date(2024, 3, 14),
            None,
        ),
        request(
            "RDX 21-31 PAD",
            RequestType::AlReview,
            "Review of artificial lift system performance and optimization opportunities.",
            Role::ProductionEngineer,
            "O'Connor, Sean",
            date(2024, 3, 14),
            Some(date(2024, 3, 21)),
        ),
        request(
            "EAST PECOS FEDERAL COM 22-1H PAD",
            RequestType::AlReview,
            "Comprehensive ESP performance evaluation and optimization.",
            Role::DscProductionAnalyst,
            "Kim, David",
            date(2024, 3, 13),
            Some(date(2024, 3, 20)),
        ),
        request(
            "NORTH THISTLE 2 CTB 1",
            RequestType::Margin,
            "Analysis of well margin and profitability metrics.",
            Role::ProductionEngineer,
            "Zhang, Min",
            date(2024, 3, 13),
            Some(date(2024, 3, 20)),
        ),
        request(
            "FIJI 17 CTB 1",
            RequestType::Margin,
            "Economic analysis of artificial lift conversion project.",
            Role::DscProductionAnalyst,
            "Martinez, Ana",
            date(2024, 3, 13),
            Some(date(2024, 3, 20)),
        ),
        request(
            "BOYD 21 PRODUCTION PAD",
            RequestType::Allocation,
            "Review and adjustment of production allocation methods.",
            Role::ProductionEngineer,
            "Santos, Miguel",
            date(2024, 3, 12),
            None,
        ),
        request(
            "MULE 11 CTB 2",
            RequestType::Allocation,
            "Production allocation verification for commingled wells.",
            Role::ProductionForeman,
            "Wilson, Thomas",
            date(2024, 3, 12),
            None,
        ),
        request(
            "MULE 23 CTB 2",
            RequestType::ProductionFault,
            "Investigation of production system fault and remediation planning.",
            Role::ProductionAssistantForeman,
            "Nguyen, Lisa",
            date(2024, 3, 11),
            Some(date(2024, 3, 18)),
        ),
        request(
            "RDX 22-32 PAD",
            RequestType::ProductionFault,
            "Emergency response to sudden production decline.",
            Role::ProductionForeman,
            "Brown, Jessica",
            date(2024, 3, 11),
            Some(date(2024, 3, 18)),
        ),
        request(
            "VEGA 31 FED 2H_3H BATTERY",
            RequestType::AdHoc,
            "Production optimization analysis for multi-well pad.",
            Role::DscProductionAnalyst,
            "Anderson, Mark",
            date(2024, 3, 15),
            Some(date(2024, 3, 22)),
        ),
        request(
            "THISTLE 4 CTB 2",
            RequestType::DownWell,
            "Downhole equipment performance review.",
            Role::ProductionAssistantForeman,
            "Rodriguez, Carlos",
            date(2024, 3, 14),
            None,
        ),
        request(
            "CROSS MOUNTAIN 42-28-2H PAD",
            RequestType::AlReview,
            "Artificial lift system maintenance schedule review.",
            Role::ProductionForeman,
            "Patel, Raj",
            date(2024, 3, 13),
            Some(date(2024, 3, 20)),
        ),
    ]
}

/// Fisher-Yates with a fixed-seed LCG: stable order without an RNG dependency
fn shuffle<T>(items: &mut [T]) {
    let mut state: u64 = 0x5DEECE66D;
    for i in (1..items.len()).rev() {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let j = (state >> 33) as usize % (i + 1);
        items.swap(i, j);
    }
}

/// The full dataset the table renders
pub fn generate_all_data() -> Vec<WorkItem> {
    let mut items = analytic_items();
    items.extend(request_items());
    shuffle(&mut items);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_dataset_shape() {
        let items = generate_all_data();
        assert_eq!(items.len(), 24);
        assert_eq!(items.iter().filter(|i| i.is_request()).count(), 15);
        assert_eq!(items.iter().filter(|i| !i.is_request()).count(), 9);
    }

    #[test]
    fn test_every_catalog_leaf_appears_once() {
        let items = analytic_items();
        let leaves: BTreeSet<&str> = items
            .iter()
            .filter_map(|i| match &i.kind {
                WorkItemKind::Analytic { subtype_key, .. } => Some(subtype_key.as_str()),
                WorkItemKind::Request(_) => None,
            })
            .collect();
        assert_eq!(leaves.len(), 9);
        assert_eq!(items.len(), 9);
    }

    #[test]
    fn test_shuffle_is_deterministic() {
        let first: Vec<String> = generate_all_data()
            .into_iter()
            .map(|i| format!("{}|{}", i.location, i.description))
            .collect();
        let second: Vec<String> = generate_all_data()
            .into_iter()
            .map(|i| format!("{}|{}", i.location, i.description))
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_analytic_descriptions_follow_source() {
        for item in analytic_items() {
            match item.source {
                Source::Cygnet => assert!(item.description.ends_with("historian data.")),
                Source::PiAfAnalytics => {
                    assert!(item.description.ends_with("framework analytics."))
                }
                _ => assert!(item.description.ends_with("data lake processing.")),
            }
        }
    }

    #[test]
    fn test_requests_come_from_the_work_queue() {
        assert!(request_items().iter().all(|i| i.source == Source::WorkQueue));
    }
}
