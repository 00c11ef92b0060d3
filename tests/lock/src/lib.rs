//! Shared scenario builders for the lock tests and the fixture binary.

#![forbid(unsafe_code)]
