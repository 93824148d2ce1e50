//! Graph-convolutional teacher/student networks for graph super-resolution.
//!
//! `destila` defines the model side of a graph super-resolution system
//! trained by knowledge distillation: a plain graph convolution layer, the
//! encoder/decoder stacks built from it, a discriminator for adversarial
//! regularization, and the [`Teacher`]/[`Student`] wrapper networks whose
//! forward passes expose both the latent embedding and the decoded matrix.
//! Losses, optimization and data loading live outside this crate; parameters
//! are registered on a caller-owned [`candle_nn::VarMap`] so any candle
//! optimizer can drive them.
//!
//! # Modules
//!
//! - [`conv`]: The `A · (X · W) + b` graph convolution layer
//! - [`adjacency`]: Dense adjacency construction and normalization
//! - [`autoencoder`]: Encoder and decoder stacks
//! - [`discriminator`]: Three-stage discriminator with dual score views
//! - [`distill`]: Teacher/Student networks and their configuration
//!
//! # Example: Teacher forward pass
//!
//! ```rust,ignore
//! use candle_core::{DType, Device, Tensor};
//! use candle_nn::{VarBuilder, VarMap};
//! use destila::{adjacency, NetworkConfig, Teacher};
//!
//! let device = Device::Cpu;
//! let varmap = VarMap::new();
//! let vb = VarBuilder::from_varmap(&varmap, DType::F32, &device);
//!
//! // 160 nodes with one feature column per node.
//! let x = Tensor::randn(0f32, 1f32, (160, 160), &device)?;
//! let adj = adjacency::symmetric_normalize(
//!     &adjacency::add_self_loops(&adjacency::from_edges(&edges, 160, &device)?)?,
//! )?;
//!
//! let teacher = Teacher::new(&NetworkConfig::default(), vb.pp("teacher"))?;
//! let resolved = teacher.forward(&x, &adj)?;
//! // resolved.embedding: (160, 50), resolved.output: (160, 320)
//!
//! // Training elsewhere: hand varmap.all_vars() to a candle optimizer.
//! ```

pub mod adjacency;
pub mod autoencoder;
pub mod conv;
pub mod discriminator;
pub mod distill;
pub mod error;

pub use autoencoder::{Decoder, Encoder};
pub use conv::GraphConv;
pub use discriminator::{Discriminator, DiscriminatorOutput};
pub use distill::{NetworkConfig, Student, SuperResolution, Teacher};
pub use error::{Error, Result};

use candle_core::Tensor;

/// Common seam for networks mapping `(features, adjacency)` to features.
///
/// `forward_t` takes the training flag explicitly (candle's `ModuleT`
/// convention); `forward` runs in inference mode. Implemented by
/// [`GraphConv`], [`Encoder`] and [`Decoder`]. Networks returning more than
/// one tensor ([`Discriminator`], [`Teacher`], [`Student`]) expose inherent
/// methods instead.
pub trait GraphModule {
    /// Forward pass with explicit training mode.
    fn forward_t(&self, x: &Tensor, adj: &Tensor, train: bool) -> Result<Tensor>;

    /// Forward pass in inference mode.
    fn forward(&self, x: &Tensor, adj: &Tensor) -> Result<Tensor> {
        self.forward_t(x, adj, false)
    }
}
