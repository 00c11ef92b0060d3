//! Canonical bytes and content hashes for search artifacts.

pub mod canon;
pub mod hash;
