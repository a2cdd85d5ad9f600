//! Benchmark support crate for the Kruskal workspace.
//!
//! Provides seeded synthetic graphs and parameter types used by the Criterion
//! benchmarks for matrix loading and MST construction.

pub mod error;
pub mod params;
pub mod source;
