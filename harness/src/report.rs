//! `SearchReportV1`: canonical summary of one harness run.
//!
//! The report commits to the domain, the policy, the outcome, the derived
//! statistics and the full trace. Its digest is SHA-256 over the canonical
//! JSON bytes under [`HashDomain::SearchReport`].
//!
//! The branching factor is stored as an integer ratio; canonical JSON does
//! not admit floats.

use treesearch::policy::SearchPolicy;
use treesearch::search::BranchingRatio;
use treesearch::trace::SearchTrace;
use treesearch_kernel::proof::canon::{canonical_json_bytes, CanonError};
use treesearch_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

/// Schema tag written into every report.
pub const REPORT_SCHEMA_VERSION: &str = "search_report.v1";

/// The outcome of one search run.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchReportV1 {
    pub domain_id: String,
    pub policy: SearchPolicy,
    /// `Display` rendering of the initial state.
    pub initial: String,
    /// Root-to-goal state labels, or `None` if no goal was reached.
    pub path: Option<Vec<String>>,
    pub solution_length: Option<u32>,
    /// Cost accumulated along `path`.
    pub solution_cost: Option<i64>,
    pub terminals: u64,
    pub non_terminals: u64,
    /// `None` without a solution or when no node was expanded.
    pub branching: Option<BranchingRatio>,
    pub trace: SearchTrace,
}

impl SearchReportV1 {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.path.is_some()
    }

    /// Serialize to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonicalization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value()?)
    }

    /// Content hash of the canonical bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonicalization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(HashDomain::SearchReport, &bytes))
    }

    /// JSON form, including the trace digest.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if the embedded trace cannot be canonicalized.
    pub fn to_json_value(&self) -> Result<serde_json::Value, CanonError> {
        let trace_digest = self.trace.digest()?;
        let policy_digest = canonical_hash(
            HashDomain::SearchPolicy,
            &canonical_json_bytes(&self.policy.to_json_value())?,
        );
        Ok(serde_json::json!({
            "branching": self.branching.map(|b| serde_json::json!({
                "denominator": b.denominator,
                "numerator": b.numerator,
            })),
            "domain_id": self.domain_id,
            "initial": self.initial,
            "non_terminals": self.non_terminals,
            "path": self.path,
            "policy": self.policy.to_json_value(),
            "policy_digest": policy_digest.as_str(),
            "schema_version": REPORT_SCHEMA_VERSION,
            "solution_cost": self.solution_cost,
            "solution_length": self.solution_length,
            "terminals": self.terminals,
            "trace": self.trace.to_json_value(),
            "trace_digest": trace_digest.as_str(),
        }))
    }
}
