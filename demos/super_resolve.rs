//! Super-Resolution Forward Pass Demo
//!
//! Builds a teacher and a narrower student over a small ring graph and runs
//! both forward passes, printing the tensor shapes and the embedding gap a
//! distillation loss would act on.
//!
//! ```bash
//! cargo run --example super_resolve
//! ```

use candle_core::{DType, Device, Tensor};
use candle_nn::{VarBuilder, VarMap};

use destila::{adjacency, NetworkConfig, Student, Teacher};

fn main() -> anyhow::Result<()> {
    println!("Graph Super-Resolution Demo");
    println!("===========================\n");

    let device = Device::Cpu;
    let varmap = VarMap::new();
    let vb = VarBuilder::from_varmap(&varmap, DType::F32, &device);

    // Ring of 12 nodes with self-loops, symmetrically normalized.
    let n = 12;
    let mut edges = Vec::new();
    for i in 0..n {
        edges.push((i, (i + 1) % n));
        edges.push(((i + 1) % n, i));
    }
    let adj = adjacency::from_edges(&edges, n, &device)?;
    let adj = adjacency::add_self_loops(&adj)?;
    let adj = adjacency::symmetric_normalize(&adj)?;
    println!("adjacency: {:?} (ring, self-looped, normalized)", adj.dims());

    let teacher_cfg = NetworkConfig::default()
        .with_in_features(20)
        .with_encoder_hidden(16)
        .with_embedding_dim(8)
        .with_decoder_hidden(16)
        .with_out_features(40);
    let student_cfg = teacher_cfg
        .clone()
        .with_encoder_hidden(6)
        .with_decoder_hidden(6);

    let teacher = Teacher::new(&teacher_cfg, vb.pp("teacher"))?;
    let student = Student::new(&student_cfg, vb.pp("student"))?;
    println!("trainable tensors: {}", varmap.all_vars().len());

    let x = Tensor::randn(0f32, 1f32, (n, 20), &device)?;

    let t = teacher.forward(&x, &adj)?;
    let s = student.forward(&x, &adj)?;
    println!("\nteacher embedding: {:?}  output: {:?}", t.embedding.dims(), t.output.dims());
    println!("student embedding: {:?}  output: {:?}", s.embedding.dims(), s.output.dims());

    // The quantity a distillation loss would shrink.
    let gap = (&t.embedding - &s.embedding)?
        .sqr()?
        .mean_all()?
        .to_scalar::<f32>()?;
    println!("\nmean squared embedding gap (untrained): {gap:.6}");

    Ok(())
}
