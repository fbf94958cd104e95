use serde::{Deserialize, Serialize};

use super::Identity;

/// Effect of a policy decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    Allow,
    Deny,
}

impl Effect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Effect::Allow => "Allow",
            Effect::Deny => "Deny",
        }
    }
}

/// Outcome of one authorization check. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyDecision {
    pub principal: Identity,
    pub effect: Effect,
    pub resource: String,
}

impl PolicyDecision {
    pub fn allow(principal: Identity, resource: impl Into<String>) -> Self {
        Self {
            principal,
            effect: Effect::Allow,
            resource: resource.into(),
        }
    }
}
