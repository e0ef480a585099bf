use serde::{Deserialize, Serialize};

/// Operational request types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestType {
    AdHoc,
    DownWell,
    AlReview,
    Margin,
    Allocation,
    ProductionFault,
}

impl RequestType {
    /// Stable filter key for the request type
    pub fn code(&self) -> &'static str {
        match self {
            RequestType::AdHoc => "adhoc",
            RequestType::DownWell => "downwell",
            RequestType::AlReview => "alreview",
            RequestType::Margin => "margin",
            RequestType::Allocation => "allocation",
            RequestType::ProductionFault => "productionfault",
        }
    }

    /// Human-readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            RequestType::AdHoc => "Ad Hoc",
            RequestType::DownWell => "Down Well",
            RequestType::AlReview => "AL Review",
            RequestType::Margin => "Margin",
            RequestType::Allocation => "Allocation",
            RequestType::ProductionFault => "Production Fault",
        }
    }

    /// All request types
    pub fn all() -> Vec<RequestType> {
        vec![
            RequestType::AdHoc,
            RequestType::DownWell,
            RequestType::AlReview,
            RequestType::Margin,
            RequestType::Allocation,
            RequestType::ProductionFault,
        ]
    }

    /// Parse from a filter key
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.code() == code)
    }
}

impl std::fmt::Display for RequestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
