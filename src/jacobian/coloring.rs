use std::collections::HashSet;

use crate::{graph::GraphBuilder, graph_error, Graph, KempeError};

/// Returns a vector of rows where each row contains
/// a vector of its column indices.
fn cols_by_rows(non_zeros: &[(usize, usize)]) -> Vec<Vec<usize>> {
    let nrows = non_zeros.iter().map(|(i, _j)| i + 1).max().unwrap_or(0);
    let mut cols_by_rows = vec![Vec::new(); nrows];
    for (i, j) in non_zeros.iter() {
        cols_by_rows[*i].push(*j);
    }
    cols_by_rows
}

/// Generate the column-intersection graph of a sparsity pattern: columns are vertices, keyed by
/// column index, and two columns are connected by an edge only if both have a non-zero in some
/// common row.
///
/// non_zeros: A vector of indices (i, j) where i is the row index and j is the column index.
/// Repeated entries are allowed.
pub fn nonzeros2graph(
    non_zeros: &[(usize, usize)],
    ncols: usize,
) -> Result<Graph<usize>, KempeError> {
    if let Some(&(_, j)) = non_zeros.iter().find(|(_, j)| *j >= ncols) {
        return Err(graph_error!(ColumnOutOfRange, j, ncols));
    }
    let cols_by_rows = cols_by_rows(non_zeros);
    let mut edges = Vec::new();
    let mut seen = HashSet::new();
    for cols in cols_by_rows.iter() {
        for cur_col in cols.iter() {
            for next_col in cols.iter() {
                if next_col < cur_col && seen.insert((*next_col, *cur_col)) {
                    edges.push((*next_col, *cur_col));
                }
            }
        }
    }
    let mut builder = GraphBuilder::with_capacity(ncols, edges.len());
    for j in 0..ncols {
        builder.add_vertex(j)?;
    }
    for (i, j) in edges.iter() {
        builder.add_edge(i, j)?;
    }
    Ok(builder.build())
}
