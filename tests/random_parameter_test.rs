use ndarray::{ArrayD, IxDyn};
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;
use rustyaug::batch::TensorBatch;
use rustyaug::ops::InterpolationMode;
use rustyaug::random::{
    DiscreteParameter, NormalParameter, ParameterSampler, UniformParameter,
};
use rustyaug::transforms::{Transform, Zoom};

#[test]
fn test_draw_fills_requested_shape() {
    let mut param = UniformParameter::new(0.0, 1.0, Some(42)).unwrap();
    let drawn = param.draw(&[2, 3, 4]).unwrap();
    assert_eq!(drawn.shape(), &[2, 3, 4]);
    assert!(drawn.iter().all(|&v| (0.0..1.0).contains(&v)));
}

#[test]
fn test_boxed_samplers_share_an_interface() {
    let mut samplers: Vec<Box<dyn ParameterSampler>> = vec![
        Box::new(UniformParameter::new(0.0, 1.0, Some(1)).unwrap()),
        Box::new(NormalParameter::new(0.0, 1.0, Some(2)).unwrap()),
        Box::new(DiscreteParameter::with_replacement(vec![1.0_f32, 2.0], Some(3)).unwrap()),
    ];

    for sampler in &mut samplers {
        let drawn = sampler.draw(&[4]).unwrap();
        assert_eq!(drawn.shape(), &[4]);
        let scalar = sampler.draw_scalar().unwrap();
        assert!(scalar.is_finite());
    }
}

#[test]
fn test_sampled_zoom_on_random_batch() {
    // Random input exercises the full sampler-into-transform path
    let data = ArrayD::<f32>::random(IxDyn(&[2, 3, 20, 20]), Uniform::new(0.0, 1.0));
    let mut batch = TensorBatch::new();
    batch.insert("data", data);

    let mut transform = Zoom::new(
        (0.5, 1.5),
        InterpolationMode::Bilinear,
        false,
        true,
        vec!["data".to_string()],
        Some(42),
    )
    .unwrap();
    let batch = transform.apply(batch).unwrap();

    let zoomed = batch.get("data").unwrap();
    assert_eq!(&zoomed.shape()[..2], &[2, 3]);
    assert!(zoomed.shape()[2] >= 10 && zoomed.shape()[2] < 30);
    // preserve_range keeps the output inside the input's value range
    assert!(zoomed.iter().all(|&v| (0.0..=1.0).contains(&v)));
}

#[test]
fn test_discrete_parameter_over_dimension_pairs() {
    let mut pairs =
        DiscreteParameter::new(vec![(0_usize, 1_usize), (1, 0)], Some(42)).unwrap();
    for _ in 0..10 {
        let (first, second) = pairs.choose_one().unwrap();
        assert_ne!(first, second);
        assert!(first < 2 && second < 2);
    }
}

#[test]
fn test_independent_seeds_decorrelate() {
    let mut a = UniformParameter::new(0.0, 1.0, Some(1)).unwrap();
    let mut b = UniformParameter::new(0.0, 1.0, Some(2)).unwrap();
    assert_ne!(a.sample(8).unwrap(), b.sample(8).unwrap());
}
