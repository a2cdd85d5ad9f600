//! Property-based tests for the sequential Kruskal implementation.
//!
//! Verifies Kruskal against a Prim's oracle, validates structural invariants
//! (acyclicity, component count, ascending acceptance order) and checks that
//! repeated runs and both cycle-check strategies agree edge for edge across
//! graph topologies with varied weight distributions.

mod determinism;
mod oracle;
mod strategies;
mod structural;
