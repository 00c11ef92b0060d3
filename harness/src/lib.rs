//! Tree search harness: concrete domains and report packaging.
//!
//! The harness runs a domain through [`treesearch::search::SearchTree`] and
//! packages the outcome as a canonical, digest-bound
//! [`report::SearchReportV1`].
//!
//! The harness does NOT implement search logic; it delegates to
//! `treesearch`. Domains provide state spaces only; the runner owns
//! orchestration.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod contract;
pub mod domains;
pub mod report;
pub mod runner;
