//! # Verification Module
//!
//! Client-facing proof-of-storage status and the reporter that projects
//! backend responses into it.

pub mod reporter;

pub use reporter::report;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Proof-of-storage status in the stable shape clients depend on.
///
/// Produced fresh on each query; proof state changes over time and is
/// never cached by the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationStatus {
    /// Whether the backend holds the piece at all
    pub exists: bool,
    /// When the piece was last proven, if ever
    #[serde(rename = "lastProven")]
    pub last_proven: Option<DateTime<Utc>>,
    /// When the next proof is due, if scheduled
    #[serde(rename = "nextProofDue")]
    pub next_proof_due: Option<DateTime<Utc>>,
}
