//! Adjacency matrix preparation.
//!
//! The networks in this crate take the adjacency as an opaque dense `(N, N)`
//! tensor and propagate with a dense matmul (candle has no sparse kernels).
//! These helpers build and precondition that tensor:
//!
//! - [`from_edges`]: dense 0/1 matrix from a directed edge list
//! - [`add_self_loops`]: `A + I`
//! - [`row_normalize`]: `D^-1 A`, rows sum to 1
//! - [`symmetric_normalize`]: `D^-1/2 A D^-1/2` (Kipf & Welling style)
//!
//! Normalization is applied once, before training; the layers themselves do
//! not touch the adjacency.

use candle_core::{Device, Tensor};

use crate::error::{Error, Result};

// Keeps isolated nodes finite: 0-degree rows divide by eps and stay zero.
const DEGREE_EPS: f64 = 1e-8;

/// Build a dense `(num_nodes, num_nodes)` adjacency matrix from a directed
/// edge list, `adj[s][t] = 1` for each `(s, t)`.
///
/// Duplicate edges collapse to a single 1. For an undirected graph, list
/// both directions.
pub fn from_edges(
    edges: &[(usize, usize)],
    num_nodes: usize,
    device: &Device,
) -> Result<Tensor> {
    let mut data = vec![0f32; num_nodes * num_nodes];
    for &(s, t) in edges {
        let node = s.max(t);
        if node >= num_nodes {
            return Err(Error::NodeOutOfBounds { node, num_nodes });
        }
        data[s * num_nodes + t] = 1.0;
    }
    Ok(Tensor::from_vec(data, (num_nodes, num_nodes), device)?)
}

/// Add self-loops: `A + I`.
pub fn add_self_loops(adj: &Tensor) -> Result<Tensor> {
    let n = square_dim(adj)?;
    let eye = Tensor::eye(n, adj.dtype(), adj.device())?;
    Ok((adj + &eye)?)
}

/// Row-normalize: `D^-1 A`, so each row sums to 1.
///
/// Rows of isolated nodes stay zero.
pub fn row_normalize(adj: &Tensor) -> Result<Tensor> {
    square_dim(adj)?;
    let degree = adj.sum_keepdim(1)?.affine(1.0, DEGREE_EPS)?;
    Ok(adj.broadcast_div(&degree)?)
}

/// Symmetric normalization: `D^-1/2 A D^-1/2`.
///
/// The standard preconditioning for spectral-rule graph convolutions;
/// usually combined with [`add_self_loops`] first. Rows of isolated nodes
/// stay zero.
pub fn symmetric_normalize(adj: &Tensor) -> Result<Tensor> {
    square_dim(adj)?;
    // D^-1/2 as a column, then its transpose for the right side.
    let d_inv_sqrt = adj
        .sum_keepdim(1)?
        .affine(1.0, DEGREE_EPS)?
        .sqrt()?
        .recip()?;
    let left = adj.broadcast_mul(&d_inv_sqrt)?;
    Ok(left.broadcast_mul(&d_inv_sqrt.t()?)?)
}

/// Check squareness, returning N.
fn square_dim(adj: &Tensor) -> Result<usize> {
    let (rows, cols) = adj.dims2()?;
    if rows != cols {
        return Err(Error::DimensionMismatch {
            expected: rows,
            got: cols,
        });
    }
    Ok(rows)
}
