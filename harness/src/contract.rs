//! Harness domain contract.

use treesearch::contract::StateDomain;

/// A state domain the harness runner can package into a report.
///
/// Adds a stable identifier to [`StateDomain`]; the identifier is part of the
/// report bytes and therefore of its digest.
pub trait HarnessDomain: StateDomain {
    /// Unique domain identifier (e.g., `"linear_chain"`).
    fn domain_id(&self) -> &str;
}
