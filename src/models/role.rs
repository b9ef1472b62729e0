use serde::{Deserialize, Serialize};

/// Capabilities a roster member can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// May clock in and out.
    Staff,
    /// Human resources: reports, corrections, removals, warnings.
    Hr,
    /// May look at ongoing sessions.
    Supervisor,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Staff => "staff",
            Role::Hr => "hr",
            Role::Supervisor => "supervisor",
        }
    }
}
