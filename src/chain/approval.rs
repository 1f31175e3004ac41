//! Expense approval: the reference handler chain, driven by configuration.

use crate::chain::error::PolicyError;
use crate::chain::handler::{CatchAll, Measured, ThresholdHandler};
use crate::chain::sequence::HandlerChain;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// An expense waiting for sign-off.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub amount: f64,
    #[serde(default)]
    pub description: String,
}

impl Expense {
    pub fn new(amount: f64) -> Self {
        Self {
            amount,
            description: String::new(),
        }
    }

    pub fn described(amount: f64, description: impl Into<String>) -> Self {
        Self {
            amount,
            description: description.into(),
        }
    }
}

impl Measured for Expense {
    fn magnitude(&self) -> f64 {
        self.amount
    }
}

/// Sign-off produced by the approver that accepted an expense.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Approval {
    pub approver: String,
    pub amount: f64,
    pub message: String,
}

/// One approver in a policy.
///
/// A tier without a `limit` approves any amount.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApprovalTier {
    pub name: String,
    #[serde(default)]
    pub limit: Option<f64>,
}

impl ApprovalTier {
    pub fn capped(name: impl Into<String>, limit: f64) -> Self {
        Self {
            name: name.into(),
            limit: Some(limit),
        }
    }

    pub fn unlimited(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            limit: None,
        }
    }
}

/// Ordered approval tiers, loadable from JSON.
///
/// ```json
/// { "tiers": [
///     { "name": "Manager", "limit": 1000 },
///     { "name": "Director", "limit": 10000 },
///     { "name": "CEO" }
/// ] }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApprovalPolicy {
    pub tiers: Vec<ApprovalTier>,
}

impl ApprovalPolicy {
    /// Manager up to 1000, Director up to 10000, CEO for anything above.
    pub fn standard() -> Self {
        Self {
            tiers: vec![
                ApprovalTier::capped("Manager", 1000.0),
                ApprovalTier::capped("Director", 10000.0),
                ApprovalTier::unlimited("CEO"),
            ],
        }
    }

    /// Parse and validate a policy document.
    pub fn from_json(json: &str) -> Result<Self, PolicyError> {
        let policy: Self = serde_json::from_str(json)?;
        policy.validate()?;
        Ok(policy)
    }

    /// Check that every tier can be reached.
    ///
    /// Limits have to strictly increase, and nothing may follow a tier
    /// without a limit.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.tiers.is_empty() {
            return Err(PolicyError::Empty);
        }

        let mut ceiling: Option<f64> = None;
        let mut open_ended = false;
        for tier in &self.tiers {
            if open_ended {
                return Err(PolicyError::UnreachableTier {
                    name: tier.name.clone(),
                });
            }
            match tier.limit {
                None => open_ended = true,
                Some(limit) if !limit.is_finite() || limit < 0.0 => {
                    return Err(PolicyError::InvalidLimit {
                        name: tier.name.clone(),
                        limit,
                    });
                }
                Some(limit) => {
                    if ceiling.is_some_and(|previous| limit <= previous) {
                        return Err(PolicyError::UnreachableTier {
                            name: tier.name.clone(),
                        });
                    }
                    ceiling = Some(limit);
                }
            }
        }
        Ok(())
    }

    /// Whether the policy ends with a tier that approves anything.
    pub fn has_catch_all(&self) -> bool {
        self.tiers.last().is_some_and(|tier| tier.limit.is_none())
    }

    /// Assemble the handler chain for this policy.
    pub fn build_chain(&self) -> Result<HandlerChain<Expense, Approval>, PolicyError> {
        self.validate()?;

        let respond: Arc<dyn Fn(&str, &Expense) -> Approval + Send + Sync> = Arc::new(approve);
        let mut chain = HandlerChain::new();
        for tier in &self.tiers {
            match tier.limit {
                Some(limit) => {
                    chain.attach(ThresholdHandler::with_responder(
                        tier.name.clone(),
                        limit,
                        Arc::clone(&respond),
                    ));
                }
                None => {
                    chain.attach(CatchAll::with_responder(
                        tier.name.clone(),
                        Arc::clone(&respond),
                    ));
                }
            }
        }

        debug!(
            "Built approval chain: {}",
            chain.handler_names().join(" -> ")
        );
        Ok(chain)
    }
}

fn approve(approver: &str, expense: &Expense) -> Approval {
    Approval {
        approver: approver.to_string(),
        amount: expense.amount,
        message: format!("{approver} approved expense: ${}", expense.amount),
    }
}
