//! The graph convolution layer.
//!
//! Implements the plain spectral-rule convolution used throughout this crate:
//!
//! ```text
//! H' = A · (H · W) + b
//! ```
//!
//! Where:
//! - A is the (preprocessed) adjacency matrix
//! - H is the node feature matrix
//! - W is the learnable weight matrix, b the optional learnable bias
//!
//! Unlike [`candle_nn::Linear`], the weight is stored `(in_features,
//! out_features)` and multiplied on the right, and both parameters are drawn
//! uniformly from `[-1/sqrt(out_features), +1/sqrt(out_features)]`. Degree
//! normalization is not part of the layer; prepare the adjacency with
//! [`crate::adjacency`] before the forward pass.
//!
//! # Reference
//!
//! Kipf & Welling, "Semi-Supervised Classification with Graph Convolutional
//! Networks", ICLR 2017.

use std::fmt;

use candle_core::Tensor;
use candle_nn::{Init, VarBuilder};
use tracing::debug;

use crate::error::Result;
use crate::GraphModule;

/// Graph convolution layer.
///
/// Owns a weight matrix `(in_features, out_features)` and an optional bias
/// vector `(out_features,)`. Parameters are registered on the [`VarBuilder`]
/// passed at construction (`"weight"` / `"bias"`), so a caller-side
/// [`candle_nn::VarMap`] sees them for optimization.
pub struct GraphConv {
    weight: Tensor,
    bias: Option<Tensor>,
    in_features: usize,
    out_features: usize,
}

impl GraphConv {
    /// Create a new graph convolution layer.
    ///
    /// # Arguments
    /// - `in_features`: Input feature dimension
    /// - `out_features`: Output feature dimension
    /// - `bias`: Whether to include a bias term
    /// - `vb`: Variable builder for parameter registration
    ///
    /// Both weight and bias are initialized uniformly in
    /// `[-1/sqrt(out_features), +1/sqrt(out_features)]`.
    pub fn new(
        in_features: usize,
        out_features: usize,
        bias: bool,
        vb: VarBuilder,
    ) -> Result<Self> {
        let stdv = 1.0 / (out_features as f64).sqrt();
        let init = Init::Uniform {
            lo: -stdv,
            up: stdv,
        };
        let weight = vb.get_with_hints((in_features, out_features), "weight", init)?;
        let bias = if bias {
            Some(vb.get_with_hints(out_features, "bias", init)?)
        } else {
            None
        };
        debug!(
            in_features,
            out_features,
            bias = bias.is_some(),
            "initialized graph conv"
        );
        Ok(Self {
            weight,
            bias,
            in_features,
            out_features,
        })
    }

    /// Forward pass: `adj · (x · W) [+ b]`.
    ///
    /// # Arguments
    /// - `x`: Node features `(N x in_features)`
    /// - `adj`: Adjacency matrix `(N x N)`, dense; normalize beforehand if
    ///   the architecture calls for it
    ///
    /// # Returns
    /// - Node features `(N x out_features)`
    ///
    /// Shape mismatches surface as the underlying matmul error.
    pub fn forward(&self, x: &Tensor, adj: &Tensor) -> Result<Tensor> {
        // Linear transform: X * W
        let support = x.matmul(&self.weight)?;
        // Neighborhood propagation: A * (XW)
        let output = adj.matmul(&support)?;
        match &self.bias {
            Some(b) => Ok(output.broadcast_add(b)?),
            None => Ok(output),
        }
    }

    /// Input feature dimension.
    pub fn in_features(&self) -> usize {
        self.in_features
    }

    /// Output feature dimension.
    pub fn out_features(&self) -> usize {
        self.out_features
    }

    /// The weight matrix, `(in_features, out_features)`.
    pub fn weight(&self) -> &Tensor {
        &self.weight
    }

    /// The bias vector `(out_features,)`, if enabled.
    pub fn bias(&self) -> Option<&Tensor> {
        self.bias.as_ref()
    }
}

impl GraphModule for GraphConv {
    /// The layer itself has no train-dependent behavior; `train` is ignored.
    fn forward_t(&self, x: &Tensor, adj: &Tensor, _train: bool) -> Result<Tensor> {
        self.forward(x, adj)
    }
}

impl fmt::Display for GraphConv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GraphConv ({} -> {})", self.in_features, self.out_features)
    }
}
