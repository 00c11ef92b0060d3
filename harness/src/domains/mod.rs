//! Domain implementations for the harness runner.

pub mod cities;
pub mod graph;
pub mod linear_chain;
