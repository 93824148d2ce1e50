//! Encoder and decoder networks.
//!
//! Both are two stacked [`GraphConv`] layers with ReLU and dropout after
//! each stage:
//!
//! ```text
//! x -> gc1 -> relu -> dropout -> gc2 -> relu -> dropout
//! ```
//!
//! The two types are structurally identical; [`Encoder`] maps node features
//! to a latent embedding and [`Decoder`] maps an embedding back to a
//! reconstructed (super-resolved) feature matrix. Dropout fires only when
//! the forward is invoked with `train = true`.

use candle_core::Tensor;
use candle_nn::{Dropout, VarBuilder};

use crate::conv::GraphConv;
use crate::error::Result;
use crate::GraphModule;

/// Encoder network: node features -> latent embedding.
pub struct Encoder {
    gc1: GraphConv,
    gc2: GraphConv,
    dropout: Dropout,
}

impl Encoder {
    /// Create an encoder stacking `in_features -> hidden -> out_features`.
    ///
    /// # Arguments
    /// - `in_features`: Input feature dimension
    /// - `hidden`: Hidden feature dimension
    /// - `out_features`: Embedding dimension
    /// - `dropout`: Dropout rate applied after each activation
    /// - `vb`: Variable builder; layers register under `"gc1"` / `"gc2"`
    pub fn new(
        in_features: usize,
        hidden: usize,
        out_features: usize,
        dropout: f32,
        vb: VarBuilder,
    ) -> Result<Self> {
        Ok(Self {
            gc1: GraphConv::new(in_features, hidden, true, vb.pp("gc1"))?,
            gc2: GraphConv::new(hidden, out_features, true, vb.pp("gc2"))?,
            dropout: Dropout::new(dropout),
        })
    }

    /// Forward pass with explicit training mode.
    ///
    /// Output shape `(N x out_features)` for any node count N.
    pub fn forward_t(&self, x: &Tensor, adj: &Tensor, train: bool) -> Result<Tensor> {
        let h = self.gc1.forward(x, adj)?.relu()?;
        let h = self.dropout.forward(&h, train)?;
        let h = self.gc2.forward(&h, adj)?.relu()?;
        Ok(self.dropout.forward(&h, train)?)
    }

    /// Forward pass in inference mode (dropout inactive).
    pub fn forward(&self, x: &Tensor, adj: &Tensor) -> Result<Tensor> {
        self.forward_t(x, adj, false)
    }

    /// Embedding dimension produced by this encoder.
    pub fn out_features(&self) -> usize {
        self.gc2.out_features()
    }
}

impl GraphModule for Encoder {
    fn forward_t(&self, x: &Tensor, adj: &Tensor, train: bool) -> Result<Tensor> {
        Encoder::forward_t(self, x, adj, train)
    }
}

/// Decoder network: latent embedding -> reconstructed feature matrix.
///
/// Same stack as [`Encoder`]; the semantic role differs, not the structure.
pub struct Decoder {
    gc1: GraphConv,
    gc2: GraphConv,
    dropout: Dropout,
}

impl Decoder {
    /// Create a decoder stacking `in_features -> hidden -> out_features`.
    ///
    /// `in_features` is the embedding dimension of the paired encoder.
    pub fn new(
        in_features: usize,
        hidden: usize,
        out_features: usize,
        dropout: f32,
        vb: VarBuilder,
    ) -> Result<Self> {
        Ok(Self {
            gc1: GraphConv::new(in_features, hidden, true, vb.pp("gc1"))?,
            gc2: GraphConv::new(hidden, out_features, true, vb.pp("gc2"))?,
            dropout: Dropout::new(dropout),
        })
    }

    /// Forward pass with explicit training mode.
    pub fn forward_t(&self, x: &Tensor, adj: &Tensor, train: bool) -> Result<Tensor> {
        let h = self.gc1.forward(x, adj)?.relu()?;
        let h = self.dropout.forward(&h, train)?;
        let h = self.gc2.forward(&h, adj)?.relu()?;
        Ok(self.dropout.forward(&h, train)?)
    }

    /// Forward pass in inference mode (dropout inactive).
    pub fn forward(&self, x: &Tensor, adj: &Tensor) -> Result<Tensor> {
        self.forward_t(x, adj, false)
    }

    /// Output feature dimension produced by this decoder.
    pub fn out_features(&self) -> usize {
        self.gc2.out_features()
    }
}

impl GraphModule for Decoder {
    fn forward_t(&self, x: &Tensor, adj: &Tensor, train: bool) -> Result<Tensor> {
        Decoder::forward_t(self, x, adj, train)
    }
}
