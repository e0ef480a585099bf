use serde::{Deserialize, Serialize};

/// Roles a work item can be routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    ProductionEngineer,
    ProductionForeman,
    ProductionAssistantForeman,
    DscProductionAnalyst,
}

impl Role {
    /// Stable filter key for the role
    pub fn code(&self) -> &'static str {
        match self {
            Role::ProductionEngineer => "productionengineer",
            Role::ProductionForeman => "productionforeman",
            Role::ProductionAssistantForeman => "productionassistantforeman",
            Role::DscProductionAnalyst => "dscproductionanalyst",
        }
    }

    /// Human-readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::ProductionEngineer => "Production Engineer",
            Role::ProductionForeman => "Production Foreman",
            Role::ProductionAssistantForeman => "Production Assistant Foreman",
            Role::DscProductionAnalyst => "DSC Production Analyst",
        }
    }

    /// All roles
    pub fn all() -> Vec<Role> {
        vec![
            Role::ProductionEngineer,
            Role::ProductionForeman,
            Role::ProductionAssistantForeman,
            Role::DscProductionAnalyst,
        ]
    }

    /// Parse from a filter key
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|r| r.code() == code)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
