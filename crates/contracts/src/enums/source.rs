use serde::{Deserialize, Serialize};

/// Systems a work item can originate from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    WorkQueue,
    DataBricks,
    Cygnet,
    PiAfAnalytics,
}

impl Source {
    /// Stable filter key for the source
    pub fn code(&self) -> &'static str {
        match self {
            Source::WorkQueue => "workqueue",
            Source::DataBricks => "databricks",
            Source::Cygnet => "cygnet",
            Source::PiAfAnalytics => "piafanalytics",
        }
    }

    /// Human-readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            Source::WorkQueue => "WorkQueue",
            Source::DataBricks => "DataBricks",
            Source::Cygnet => "Cygnet",
            Source::PiAfAnalytics => "PI-AF Analytics",
        }
    }

    /// All sources
    pub fn all() -> Vec<Source> {
        vec![
            Source::WorkQueue,
            Source::DataBricks,
            Source::Cygnet,
            Source::PiAfAnalytics,
        ]
    }

    /// Sources that produce analytics rows (everything except the manual queue)
    pub fn analytic() -> Vec<Source> {
        vec![Source::DataBricks, Source::Cygnet, Source::PiAfAnalytics]
    }

    /// Parse from a filter key
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
