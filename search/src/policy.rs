//! Search policy: strategy selection and depth limit.
//!
//! A policy is the whole configuration surface of a search. It can be built
//! in code, taken from [`SearchPolicy::default`], or loaded from a JSON
//! document in which every key is optional:
//!
//! ```json
//! {"strategy": "depth", "depth_limit": 5}
//! ```

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::SearchError;

/// Default maximum depth for expansion and goal acceptance.
///
/// Breadth-first search allocates up to `b^limit` nodes for a domain with
/// branching factor `b`; lower this for wide domains.
pub const DEFAULT_DEPTH_LIMIT: u32 = 12;

/// Where newly generated nodes enter the frontier.
///
/// Nodes are always taken from the front; only insertion differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Append to the back (FIFO, breadth-first order).
    #[default]
    Breadth,
    /// Prepend to the front keeping relative order (LIFO, depth-first order).
    Depth,
    /// Insert after every queued node of lower or equal accumulated cost.
    Uniform,
}

impl Strategy {
    pub const ALL: &'static [Strategy] = &[Strategy::Breadth, Strategy::Depth, Strategy::Uniform];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Breadth => "breadth",
            Self::Depth => "depth",
            Self::Uniform => "uniform",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| SearchError::UnknownStrategy { name: s.to_string() })
    }
}

/// Strategy and depth limit for one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchPolicy {
    /// Frontier insertion rule.
    pub strategy: Strategy,
    /// Maximum depth for both expansion and goal acceptance.
    pub depth_limit: u32,
}

impl SearchPolicy {
    #[must_use]
    pub fn new(strategy: Strategy, depth_limit: u32) -> Self {
        Self {
            strategy,
            depth_limit,
        }
    }

    /// Parse a policy from JSON. Missing keys take their default values.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::PolicyParse`] for malformed JSON, unknown keys
    /// or an unknown strategy name.
    pub fn from_json_str(json: &str) -> Result<Self, SearchError> {
        serde_json::from_str(json).map_err(|e| SearchError::PolicyParse {
            detail: e.to_string(),
        })
    }

    /// Policy echo for reports and traces.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "depth_limit": self.depth_limit,
            "strategy": self.strategy.as_str(),
        })
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self::new(Strategy::Breadth, DEFAULT_DEPTH_LIMIT)
    }
}
