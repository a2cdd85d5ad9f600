//! Kruskal minimum spanning tree core library.
//!
//! Loads a weighted adjacency matrix, verifies the graph is connected,
//! collapses the matrix into a canonical ordered edge set and runs Kruskal's
//! algorithm over it.
//!
//! Ties between equal weights are broken on the lower endpoint and then the
//! higher endpoint, so every run over the same input accepts the same edges
//! in the same order.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod connectivity;
mod cycle;
mod edges;
mod error;
mod loader;
mod matrix;
mod mst;
mod pipeline;

pub use crate::{
    builder::{CycleCheckStrategy, KruskalBuilder},
    connectivity::{is_connected, reachable_from_origin},
    cycle::{AdjacencyForest, CycleCheck, DisjointSet},
    edges::{EdgeSet, WeightedEdge},
    error::{KruskalError, KruskalErrorCode, LoadError, LoadErrorCode, Result},
    loader::load_matrix,
    matrix::{AdjacencyMatrix, Weight},
    mst::{SpanningTree, TreeEdge, kruskal, kruskal_with},
    pipeline::Kruskal,
};
