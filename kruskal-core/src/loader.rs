//! Parsing of whitespace-separated adjacency matrices.
//!
//! The input format is a vertex count `N` followed by `N×N` non-negative
//! integers in row-major order. Input that ends early leaves the remaining
//! entries at zero.

use std::io::BufRead;
use std::str::FromStr;

use tracing::{debug, instrument, warn};

use crate::error::LoadError;
use crate::matrix::{AdjacencyMatrix, Weight};

/// Reads an adjacency matrix from `reader`.
///
/// # Errors
/// Returns [`LoadError`] when the reader fails, the vertex count is missing or
/// malformed, or an entry is not a non-negative integer.
///
/// # Examples
/// ```
/// use kruskal_core::load_matrix;
///
/// let matrix = load_matrix("2\n0 7\n7 0\n".as_bytes())?;
/// assert_eq!(matrix.weight(1, 0), Some(7));
/// # Ok::<(), kruskal_core::LoadError>(())
/// ```
#[instrument(name = "core.load", err, skip(reader))]
pub fn load_matrix<R: BufRead>(mut reader: R) -> Result<AdjacencyMatrix, LoadError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    text.parse()
}

impl FromStr for AdjacencyMatrix {
    type Err = LoadError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut tokens = input.split_whitespace();
        let count_token = tokens.next().ok_or(LoadError::MissingVertexCount)?;
        let vertex_count: usize =
            count_token
                .parse()
                .map_err(|_| LoadError::InvalidVertexCount {
                    token: count_token.to_owned(),
                })?;

        let mut matrix = Self::empty(vertex_count)
            .ok_or(LoadError::CapacityOverflow { vertex_count })?;

        let mut filled = 0_usize;
        for (slot, token) in matrix.weights_mut().iter_mut().zip(tokens.by_ref()) {
            *slot = parse_weight(token, filled, vertex_count)?;
            filled += 1;
        }

        let expected = vertex_count.saturating_mul(vertex_count);
        if filled < expected {
            warn!(
                vertex_count,
                filled, expected, "input ended early; remaining entries default to no edge"
            );
        }
        let trailing = tokens.count();
        if trailing > 0 {
            debug!(trailing, "ignoring tokens after the matrix");
        }

        Ok(matrix)
    }
}

fn parse_weight(token: &str, position: usize, vertex_count: usize) -> Result<Weight, LoadError> {
    token.parse().map_err(|_| {
        let (row, column) = position_to_cell(position, vertex_count);
        LoadError::InvalidWeight {
            row,
            column,
            token: token.to_owned(),
        }
    })
}

fn position_to_cell(position: usize, vertex_count: usize) -> (usize, usize) {
    match (
        position.checked_div(vertex_count),
        position.checked_rem(vertex_count),
    ) {
        (Some(row), Some(column)) => (row, column),
        _ => (0, position),
    }
}
