//! Discriminator network.
//!
//! Three chained [`GraphConv`] stages squeeze the node features down to one
//! scalar per node; the resulting vector is read two ways at once, per-node
//! sigmoid and whole-vector softmax. Which view is meaningful depends on the
//! loss being trained against it — adversarial real/fake losses use
//! [`DiscriminatorOutput::realness`], distribution-matching losses use
//! [`DiscriminatorOutput::distribution`].

use candle_core::Tensor;
use candle_nn::ops;
use candle_nn::{Dropout, VarBuilder};
use tracing::debug;

use crate::conv::GraphConv;
use crate::error::Result;

/// Hidden widths of the two internal stages.
const HIDDEN1: usize = 32;
const HIDDEN2: usize = 16;

/// Both readings of the discriminator's per-node scores.
///
/// Computed from one length-N logit vector: `realness` is the elementwise
/// sigmoid (each entry in (0, 1)), `distribution` the softmax across nodes
/// (entries sum to 1).
#[derive(Debug, Clone)]
pub struct DiscriminatorOutput {
    /// Per-node real/fake probability, `(N,)`.
    pub realness: Tensor,
    /// Softmax over the node scores, `(N,)`.
    pub distribution: Tensor,
}

/// Discriminator with graph-convolutional feature extraction.
///
/// Stage widths are `input_size -> 32 -> 16 -> output_size`. The final
/// `(N, output_size)` activation is flattened to a length-N vector, which
/// requires `output_size == 1`; any other value fails at forward time with
/// a shape error, there is no construction-time check.
pub struct Discriminator {
    gc1: GraphConv,
    gc2: GraphConv,
    gc3: GraphConv,
    dropout: Dropout,
}

impl Discriminator {
    /// Create a discriminator.
    ///
    /// # Arguments
    /// - `input_size`: Input feature dimension
    /// - `output_size`: Per-node score width (1 for the flatten to succeed)
    /// - `dropout`: Dropout rate between the first two stages
    /// - `vb`: Variable builder; layers register under `"gc1"`..`"gc3"`
    pub fn new(
        input_size: usize,
        output_size: usize,
        dropout: f32,
        vb: VarBuilder,
    ) -> Result<Self> {
        let gc1 = GraphConv::new(input_size, HIDDEN1, true, vb.pp("gc1"))?;
        let gc2 = GraphConv::new(HIDDEN1, HIDDEN2, true, vb.pp("gc2"))?;
        let gc3 = GraphConv::new(HIDDEN2, output_size, true, vb.pp("gc3"))?;
        debug!(input_size, output_size, "initialized discriminator");
        Ok(Self {
            gc1,
            gc2,
            gc3,
            dropout: Dropout::new(dropout),
        })
    }

    /// Forward pass with explicit training mode.
    ///
    /// # Arguments
    /// - `x`: Node features `(N x input_size)`
    /// - `adj`: Adjacency matrix `(N x N)`
    ///
    /// # Returns
    /// - Sigmoid and softmax views of the per-node scores, both `(N,)`
    pub fn forward_t(
        &self,
        x: &Tensor,
        adj: &Tensor,
        train: bool,
    ) -> Result<DiscriminatorOutput> {
        let h = self.gc1.forward(x, adj)?.relu()?;
        let h = self.dropout.forward(&h, train)?;
        let h = self.gc2.forward(&h, adj)?.relu()?;
        let h = self.dropout.forward(&h, train)?;
        let scores = self.gc3.forward(&h, adj)?;

        // (N, output_size) -> (N,); fails unless output_size == 1.
        let n = scores.dim(0)?;
        let logits = scores.reshape((n,))?;

        Ok(DiscriminatorOutput {
            realness: ops::sigmoid(&logits)?,
            distribution: ops::softmax(&logits, 0)?,
        })
    }

    /// Forward pass in inference mode (dropout inactive).
    pub fn forward(&self, x: &Tensor, adj: &Tensor) -> Result<DiscriminatorOutput> {
        self.forward_t(x, adj, false)
    }
}
