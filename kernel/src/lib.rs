//! Tree search kernel: deterministic serialization and hashing.
//!
//! Everything that turns a finished search into bytes goes through this
//! crate, so that the same search always yields the same report digest.
//!
//! # API Surface
//!
//! - [`proof::canon::canonical_json_bytes`] -- canonical JSON bytes of a `serde_json::Value`
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256 over bytes

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod proof;
