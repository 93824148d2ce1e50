//! Integration tests for the super-resolution networks.
//!
//! Exercises the full path: edge list -> preconditioned adjacency ->
//! teacher/student/discriminator forward passes.

use candle_core::{DType, Device, Tensor};
use candle_nn::{VarBuilder, VarMap};

use destila::{adjacency, Discriminator, GraphConv, GraphModule, NetworkConfig, Student, Teacher};

/// Undirected ring over `n` nodes, both directions listed.
fn ring_edges(n: usize) -> Vec<(usize, usize)> {
    let mut edges = Vec::with_capacity(2 * n);
    for i in 0..n {
        let j = (i + 1) % n;
        edges.push((i, j));
        edges.push((j, i));
    }
    edges
}

/// Self-looped, symmetrically normalized ring adjacency.
fn ring_adjacency(n: usize, device: &Device) -> Tensor {
    let adj = adjacency::from_edges(&ring_edges(n), n, device).unwrap();
    let adj = adjacency::add_self_loops(&adj).unwrap();
    adjacency::symmetric_normalize(&adj).unwrap()
}

fn small_config() -> NetworkConfig {
    NetworkConfig::default()
        .with_in_features(12)
        .with_encoder_hidden(8)
        .with_embedding_dim(4)
        .with_decoder_hidden(10)
        .with_out_features(16)
        .with_dropout(0.1)
}

#[test]
fn test_teacher_pipeline_shapes() {
    let device = Device::Cpu;
    let varmap = VarMap::new();
    let vb = VarBuilder::from_varmap(&varmap, DType::F32, &device);

    let teacher = Teacher::new(&small_config(), vb.pp("teacher")).unwrap();

    let n = 10;
    let x = Tensor::randn(0f32, 1f32, (n, 12), &device).unwrap();
    let adj = ring_adjacency(n, &device);

    let resolved = teacher.forward(&x, &adj).unwrap();
    assert_eq!(resolved.embedding.dims(), &[n, 4]);
    assert_eq!(resolved.output.dims(), &[n, 16]);
}

#[test]
fn test_teacher_student_with_shared_parameters_agree() {
    // Building both networks over the same VarBuilder prefix makes the
    // VarMap hand the student the teacher's tensors, so with dropout
    // inactive the two structurally identical networks must agree exactly.
    let device = Device::Cpu;
    let varmap = VarMap::new();
    let vb = VarBuilder::from_varmap(&varmap, DType::F32, &device);

    let cfg = small_config();
    let teacher = Teacher::new(&cfg, vb.pp("net")).unwrap();
    let student = Student::new(&cfg, vb.pp("net")).unwrap();
    assert_eq!(varmap.all_vars().len(), 8);

    let n = 7;
    let x = Tensor::randn(0f32, 1f32, (n, 12), &device).unwrap();
    let adj = ring_adjacency(n, &device);

    let t = teacher.forward(&x, &adj).unwrap();
    let s = student.forward(&x, &adj).unwrap();

    assert_eq!(
        t.embedding.to_vec2::<f32>().unwrap(),
        s.embedding.to_vec2::<f32>().unwrap()
    );
    assert_eq!(
        t.output.to_vec2::<f32>().unwrap(),
        s.output.to_vec2::<f32>().unwrap()
    );
}

#[test]
fn test_separate_teacher_and_student_differ() {
    // Distinct prefixes draw independent parameters; identical inputs
    // should not produce identical embeddings.
    let device = Device::Cpu;
    let varmap = VarMap::new();
    let vb = VarBuilder::from_varmap(&varmap, DType::F32, &device);

    let cfg = small_config();
    let teacher = Teacher::new(&cfg, vb.pp("teacher")).unwrap();
    let student = Student::new(&cfg, vb.pp("student")).unwrap();
    assert_eq!(varmap.all_vars().len(), 16);

    let n = 7;
    let x = Tensor::randn(0f32, 1f32, (n, 12), &device).unwrap();
    let adj = ring_adjacency(n, &device);

    let t = teacher.forward(&x, &adj).unwrap();
    let s = student.forward(&x, &adj).unwrap();
    assert_ne!(
        t.embedding.to_vec2::<f32>().unwrap(),
        s.embedding.to_vec2::<f32>().unwrap()
    );
}

#[test]
fn test_train_mode_reaches_both_halves() {
    // forward_t(.., true) must hand the flag down to the encoder and the
    // decoder; under dropout the output pair differs from the eval pass.
    let device = Device::Cpu;
    let varmap = VarMap::new();
    let vb = VarBuilder::from_varmap(&varmap, DType::F32, &device);

    let cfg = small_config().with_embedding_dim(8).with_dropout(0.6);
    let teacher = Teacher::new(&cfg, vb.pp("teacher")).unwrap();
    let student = Student::new(&cfg, vb.pp("student")).unwrap();

    let n = 9;
    let x = Tensor::randn(0f32, 1f32, (n, 12), &device).unwrap();
    let adj = ring_adjacency(n, &device);

    let t_eval = teacher.forward(&x, &adj).unwrap();
    let t_train = teacher.forward_t(&x, &adj, true).unwrap();
    assert_ne!(
        t_train.embedding.to_vec2::<f32>().unwrap(),
        t_eval.embedding.to_vec2::<f32>().unwrap()
    );
    assert_ne!(
        t_train.output.to_vec2::<f32>().unwrap(),
        t_eval.output.to_vec2::<f32>().unwrap()
    );

    let s_eval = student.forward(&x, &adj).unwrap();
    let s_train = student.forward_t(&x, &adj, true).unwrap();
    assert_ne!(
        s_train.embedding.to_vec2::<f32>().unwrap(),
        s_eval.embedding.to_vec2::<f32>().unwrap()
    );
}

#[test]
fn test_bias_contributes_additively() {
    // Two layers over the same prefix share the weight matrix; only one
    // carries the bias. Their outputs must differ by exactly that bias.
    let device = Device::Cpu;
    let varmap = VarMap::new();
    let vb = VarBuilder::from_varmap(&varmap, DType::F32, &device);

    let biased = GraphConv::new(5, 3, true, vb.pp("g")).unwrap();
    let unbiased = GraphConv::new(5, 3, false, vb.pp("g")).unwrap();

    let n = 6;
    let x = Tensor::randn(0f32, 1f32, (n, 5), &device).unwrap();
    let adj = ring_adjacency(n, &device);

    let with_bias = biased.forward(&x, &adj).unwrap().to_vec2::<f32>().unwrap();
    let without = unbiased.forward(&x, &adj).unwrap().to_vec2::<f32>().unwrap();
    let bias = biased.bias().unwrap().to_vec1::<f32>().unwrap();

    for (row_b, row_u) in with_bias.iter().zip(&without) {
        for ((b, u), expected) in row_b.iter().zip(row_u).zip(&bias) {
            assert!((b - u - expected).abs() < 1e-6);
        }
    }
}

#[test]
fn test_zero_adjacency_cancels_features() {
    // N=4, Fin=3, Fout=2: zero connectivity leaves only the bias.
    let device = Device::Cpu;
    let varmap = VarMap::new();
    let vb = VarBuilder::from_varmap(&varmap, DType::F32, &device);

    let layer = GraphConv::new(3, 2, true, vb.pp("g")).unwrap();
    let x = Tensor::randn(0f32, 1f32, (4, 3), &device).unwrap();
    let adj = Tensor::zeros((4, 4), DType::F32, &device).unwrap();

    let out = layer.forward(&x, &adj).unwrap().to_vec2::<f32>().unwrap();
    let bias = layer.bias().unwrap().to_vec1::<f32>().unwrap();
    for row in &out {
        assert_eq!(row, &bias);
    }
}

#[test]
fn test_discriminator_over_normalized_ring() {
    let device = Device::Cpu;
    let varmap = VarMap::new();
    let vb = VarBuilder::from_varmap(&varmap, DType::F32, &device);

    let disc = Discriminator::new(12, 1, 0.2, vb.pp("disc")).unwrap();

    let n = 8;
    let x = Tensor::randn(0f32, 1f32, (n, 12), &device).unwrap();
    let adj = ring_adjacency(n, &device);

    let out = disc.forward(&x, &adj).unwrap();
    for v in out.realness.to_vec1::<f32>().unwrap() {
        assert!(v > 0.0 && v < 1.0);
    }
    let sum: f32 = out.distribution.to_vec1::<f32>().unwrap().iter().sum();
    assert!((sum - 1.0).abs() < 1e-5);
}

#[test]
fn test_graph_module_seam() {
    // Encoder and a bare layer both fit behind the trait.
    fn eval_twice<M: GraphModule>(
        m: &M,
        x: &Tensor,
        adj: &Tensor,
    ) -> (Vec<Vec<f32>>, Vec<Vec<f32>>) {
        let a = m.forward(x, adj).unwrap().to_vec2::<f32>().unwrap();
        let b = m.forward_t(x, adj, false).unwrap().to_vec2::<f32>().unwrap();
        (a, b)
    }

    let device = Device::Cpu;
    let varmap = VarMap::new();
    let vb = VarBuilder::from_varmap(&varmap, DType::F32, &device);

    let layer = GraphConv::new(4, 3, true, vb.pp("layer")).unwrap();
    let x = Tensor::randn(0f32, 1f32, (5, 4), &device).unwrap();
    let adj = ring_adjacency(5, &device);

    let (a, b) = eval_twice(&layer, &x, &adj);
    assert_eq!(a, b);
}
