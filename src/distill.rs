//! Teacher and student networks.
//!
//! Each network is one [`Encoder`] feeding one [`Decoder`] over the same
//! adjacency; the forward pass returns both the latent embedding and the
//! decoded super-resolved matrix, so a distillation loss outside this crate
//! can supervise either. Teacher and Student are the same structure — the
//! caller distinguishes them by the widths in their [`NetworkConfig`]s,
//! typically a wide teacher and a narrow student.
//!
//! # Example
//!
//! ```rust,ignore
//! use candle_core::{DType, Device, Tensor};
//! use candle_nn::{VarBuilder, VarMap};
//! use destila::{NetworkConfig, Student, Teacher};
//!
//! let varmap = VarMap::new();
//! let vb = VarBuilder::from_varmap(&varmap, DType::F32, &Device::Cpu);
//!
//! let teacher = Teacher::new(&NetworkConfig::default(), vb.pp("teacher"))?;
//! let student_cfg = NetworkConfig::default()
//!     .with_encoder_hidden(50)
//!     .with_decoder_hidden(100);
//! let student = Student::new(&student_cfg, vb.pp("student"))?;
//!
//! let out = teacher.forward(&x, &adj)?;
//! // out.embedding: (N, embedding_dim), out.output: (N, out_features)
//! // varmap.all_vars() goes to the optimizer.
//! ```

use candle_core::Tensor;
use candle_nn::VarBuilder;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::autoencoder::{Decoder, Encoder};
use crate::error::Result;

/// Widths and dropout rate of a teacher or student network.
///
/// The encoder runs `in_features -> encoder_hidden -> embedding_dim`, the
/// decoder `embedding_dim -> decoder_hidden -> out_features`; one dropout
/// rate is shared by both halves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Input feature dimension (default: 160).
    pub in_features: usize,
    /// Encoder hidden width (default: 100).
    pub encoder_hidden: usize,
    /// Latent embedding dimension (default: 50).
    pub embedding_dim: usize,
    /// Decoder hidden width (default: 200).
    pub decoder_hidden: usize,
    /// Output feature dimension (default: 320).
    pub out_features: usize,
    /// Dropout rate for all four layers (default: 0.1).
    pub dropout: f32,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            in_features: 160,
            encoder_hidden: 100,
            embedding_dim: 50,
            decoder_hidden: 200,
            out_features: 320,
            dropout: 0.1,
        }
    }
}

impl NetworkConfig {
    pub fn with_in_features(mut self, dim: usize) -> Self {
        self.in_features = dim;
        self
    }

    pub fn with_encoder_hidden(mut self, dim: usize) -> Self {
        self.encoder_hidden = dim;
        self
    }

    pub fn with_embedding_dim(mut self, dim: usize) -> Self {
        self.embedding_dim = dim;
        self
    }

    pub fn with_decoder_hidden(mut self, dim: usize) -> Self {
        self.decoder_hidden = dim;
        self
    }

    pub fn with_out_features(mut self, dim: usize) -> Self {
        self.out_features = dim;
        self
    }

    pub fn with_dropout(mut self, rate: f32) -> Self {
        self.dropout = rate;
        self
    }
}

/// Embedding and decoded matrix from one teacher or student forward pass.
#[derive(Debug, Clone)]
pub struct SuperResolution {
    /// Latent node embedding, `(N, embedding_dim)`.
    pub embedding: Tensor,
    /// Decoded super-resolved feature matrix, `(N, out_features)`.
    pub output: Tensor,
}

/// Teacher network: encoder plus decoder.
pub struct Teacher {
    encoder: Encoder,
    decoder: Decoder,
    config: NetworkConfig,
}

impl Teacher {
    /// Build the network described by `config`; parameters register under
    /// `"encoder"` and `"decoder"` on `vb`.
    pub fn new(config: &NetworkConfig, vb: VarBuilder) -> Result<Self> {
        let encoder = Encoder::new(
            config.in_features,
            config.encoder_hidden,
            config.embedding_dim,
            config.dropout,
            vb.pp("encoder"),
        )?;
        let decoder = Decoder::new(
            config.embedding_dim,
            config.decoder_hidden,
            config.out_features,
            config.dropout,
            vb.pp("decoder"),
        )?;
        debug!(
            in_features = config.in_features,
            embedding_dim = config.embedding_dim,
            out_features = config.out_features,
            "initialized teacher network"
        );
        Ok(Self {
            encoder,
            decoder,
            config: config.clone(),
        })
    }

    /// Encode then decode over the same adjacency, returning both tensors.
    pub fn forward_t(&self, x: &Tensor, adj: &Tensor, train: bool) -> Result<SuperResolution> {
        let embedding = self.encoder.forward_t(x, adj, train)?;
        let output = self.decoder.forward_t(&embedding, adj, train)?;
        Ok(SuperResolution { embedding, output })
    }

    /// Forward pass in inference mode (dropout inactive).
    pub fn forward(&self, x: &Tensor, adj: &Tensor) -> Result<SuperResolution> {
        self.forward_t(x, adj, false)
    }

    /// The encoder half.
    pub fn encoder(&self) -> &Encoder {
        &self.encoder
    }

    /// The decoder half.
    pub fn decoder(&self) -> &Decoder {
        &self.decoder
    }

    /// The configuration this network was built from.
    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }
}

/// Student network: encoder plus decoder.
///
/// Identical in structure to [`Teacher`]; built from a (typically narrower)
/// configuration of its own and trained against the teacher's embeddings
/// and outputs by a distillation scheme outside this crate.
pub struct Student {
    encoder: Encoder,
    decoder: Decoder,
    config: NetworkConfig,
}

impl Student {
    /// Build the network described by `config`; parameters register under
    /// `"encoder"` and `"decoder"` on `vb`.
    pub fn new(config: &NetworkConfig, vb: VarBuilder) -> Result<Self> {
        let encoder = Encoder::new(
            config.in_features,
            config.encoder_hidden,
            config.embedding_dim,
            config.dropout,
            vb.pp("encoder"),
        )?;
        let decoder = Decoder::new(
            config.embedding_dim,
            config.decoder_hidden,
            config.out_features,
            config.dropout,
            vb.pp("decoder"),
        )?;
        debug!(
            in_features = config.in_features,
            embedding_dim = config.embedding_dim,
            out_features = config.out_features,
            "initialized student network"
        );
        Ok(Self {
            encoder,
            decoder,
            config: config.clone(),
        })
    }

    /// Encode then decode over the same adjacency, returning both tensors.
    pub fn forward_t(&self, x: &Tensor, adj: &Tensor, train: bool) -> Result<SuperResolution> {
        let embedding = self.encoder.forward_t(x, adj, train)?;
        let output = self.decoder.forward_t(&embedding, adj, train)?;
        Ok(SuperResolution { embedding, output })
    }

    /// Forward pass in inference mode (dropout inactive).
    pub fn forward(&self, x: &Tensor, adj: &Tensor) -> Result<SuperResolution> {
        self.forward_t(x, adj, false)
    }

    /// The encoder half.
    pub fn encoder(&self) -> &Encoder {
        &self.encoder
    }

    /// The decoder half.
    pub fn decoder(&self) -> &Decoder {
        &self.decoder
    }

    /// The configuration this network was built from.
    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }
}
