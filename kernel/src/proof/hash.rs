//! Content hashes with typed domain separation.
//!
//! Every digest is SHA-256 over `domain_prefix || data`, rendered as
//! `"sha256:<hex>"`. Each artifact kind has its own [`HashDomain`] so a trace
//! and a report with identical bytes can never share a digest.

use sha2::{Digest, Sha256};

/// Algorithm tag carried in every [`ContentHash`].
pub const HASH_ALGORITHM: &str = "sha256";

/// A content-addressed hash with algorithm identifier.
///
/// Format: `"algorithm:hex_digest"`. The inner string always has exactly one
/// `:` with non-empty text on both sides (enforced by [`ContentHash::parse`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
    colon: usize,
}

impl ContentHash {
    /// Parse from `"algorithm:hex"` format.
    ///
    /// Returns `None` when the colon is missing or either side is empty.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let colon = s.find(':')?;
        if colon == 0 || colon + 1 == s.len() || s[colon + 1..].contains(':') {
            return None;
        }
        Some(Self {
            full: s.to_string(),
            colon,
        })
    }

    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.full[..self.colon]
    }

    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

/// Typed domain separator for [`canonical_hash`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashDomain {
    /// Canonical bytes of a `SearchTrace`.
    SearchTrace,
    /// Canonical bytes of a search policy echo.
    SearchPolicy,
    /// Canonical bytes of a harness `SearchReportV1`.
    SearchReport,
}

impl HashDomain {
    /// All domains in declaration order.
    pub const ALL: &'static [HashDomain] = &[
        HashDomain::SearchTrace,
        HashDomain::SearchPolicy,
        HashDomain::SearchReport,
    ];

    /// The null-terminated prefix bytes hashed ahead of the payload.
    #[must_use]
    pub const fn as_bytes(self) -> &'static [u8] {
        match self {
            Self::SearchTrace => b"TREESEARCH::SEARCH_TRACE::V1\0",
            Self::SearchPolicy => b"TREESEARCH::SEARCH_POLICY::V1\0",
            Self::SearchReport => b"TREESEARCH::SEARCH_REPORT::V1\0",
        }
    }
}

/// Compute the canonical hash of `data` under `domain`.
#[must_use]
pub fn canonical_hash(domain: HashDomain, data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain.as_bytes());
    hasher.update(data);
    let digest = hasher.finalize();

    let full = format!("{HASH_ALGORITHM}:{}", hex::encode(digest));
    ContentHash {
        colon: HASH_ALGORITHM.len(),
        full,
    }
}
