//! Errors for approval policy configuration.

use thiserror::Error;

/// Errors raised while loading or checking an [`ApprovalPolicy`](super::ApprovalPolicy).
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("Failed to parse approval policy: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Approval policy has no tiers")]
    Empty,

    #[error("Tier '{name}' has an invalid limit {limit}; limits must be non-negative numbers")]
    InvalidLimit { name: String, limit: f64 },

    #[error("Tier '{name}' can never be reached: an earlier tier accepts everything it would")]
    UnreachableTier { name: String },
}
