use ndarray::Array4;
use rustyaug::batch::TensorBatch;
use rustyaug::error::TransformError;
use rustyaug::ops::InterpolationMode;
use rustyaug::random::ConstantParameter;
use rustyaug::transforms::{DEFAULT_ZOOM_RANGE, Transform, Zoom};

#[test]
fn test_zoom_shapes_stay_within_sampled_range() {
    let mut transform = Zoom::new(
        (0.5, 0.75),
        InterpolationMode::Nearest,
        false,
        false,
        vec!["data".to_string()],
        Some(42),
    )
    .unwrap();

    for _ in 0..6 {
        let mut batch = TensorBatch::new();
        batch.insert("data", Array4::<f32>::zeros((1, 1, 16, 16)).into_dyn());
        let batch = transform.apply(batch).unwrap();
        let shape = batch.get("data").unwrap().shape().to_vec();
        assert!(shape[2] >= 8 && shape[2] < 12, "unexpected extent {}", shape[2]);
        assert!(shape[3] >= 8 && shape[3] < 12, "unexpected extent {}", shape[3]);
    }
}

#[test]
fn test_zoom_with_constant_sampler_is_deterministic() {
    let mut batch = TensorBatch::new();
    batch.insert("data", Array4::<f32>::zeros((2, 3, 16, 16)).into_dyn());

    let mut transform = Zoom::with_sampler(
        Box::new(ConstantParameter::new(0.5)),
        InterpolationMode::Nearest,
        false,
        false,
        vec!["data".to_string()],
    )
    .unwrap();
    let batch = transform.apply(batch).unwrap();
    assert_eq!(batch.get("data").unwrap().shape(), &[2, 3, 8, 8]);
}

#[test]
fn test_zoom_applies_same_factors_to_all_keys() {
    let mut transform = Zoom::new(
        (0.5, 1.5),
        InterpolationMode::Nearest,
        false,
        false,
        vec!["data".to_string(), "mask".to_string()],
        Some(7),
    )
    .unwrap();

    for _ in 0..6 {
        let mut batch = TensorBatch::new();
        batch.insert("data", Array4::<f32>::zeros((1, 3, 16, 16)).into_dyn());
        batch.insert("mask", Array4::<f32>::zeros((1, 1, 16, 16)).into_dyn());
        let batch = transform.apply(batch).unwrap();

        let data_shape = batch.get("data").unwrap().shape().to_vec();
        let mask_shape = batch.get("mask").unwrap().shape().to_vec();
        assert_eq!(&data_shape[2..], &mask_shape[2..]);
    }
}

#[test]
fn test_zoom_seeded_runs_are_reproducible() {
    let make_batch = || {
        let mut batch = TensorBatch::new();
        batch.insert("data", Array4::<f32>::zeros((1, 1, 32, 32)).into_dyn());
        batch
    };

    let mut a = Zoom::new(
        DEFAULT_ZOOM_RANGE,
        InterpolationMode::Bilinear,
        false,
        false,
        vec!["data".to_string()],
        Some(13),
    )
    .unwrap();
    let mut b = Zoom::new(
        DEFAULT_ZOOM_RANGE,
        InterpolationMode::Bilinear,
        false,
        false,
        vec!["data".to_string()],
        Some(13),
    )
    .unwrap();

    for _ in 0..4 {
        let first = a.apply(make_batch()).unwrap();
        let second = b.apply(make_batch()).unwrap();
        assert_eq!(
            first.get("data").unwrap().shape(),
            second.get("data").unwrap().shape()
        );
    }
}

#[test]
fn test_zoom_missing_key_errors() {
    let mut transform = Zoom::new(
        DEFAULT_ZOOM_RANGE,
        InterpolationMode::Nearest,
        false,
        false,
        vec!["data".to_string()],
        Some(42),
    )
    .unwrap();
    assert!(matches!(
        transform.apply(TensorBatch::new()),
        Err(TransformError::MissingKey(_))
    ));
}

#[test]
fn test_zoom_rejects_unbatched_tensor() {
    let mut batch = TensorBatch::new();
    batch.insert("data", ndarray::Array2::<f32>::zeros((4, 4)).into_dyn());

    let mut transform = Zoom::new(
        DEFAULT_ZOOM_RANGE,
        InterpolationMode::Nearest,
        false,
        false,
        vec!["data".to_string()],
        Some(42),
    )
    .unwrap();
    assert!(matches!(
        transform.apply(batch),
        Err(TransformError::InputValidationError(_))
    ));
}

#[test]
fn test_zoom_rejects_invalid_configuration() {
    assert!(
        Zoom::new(
            (1.0, 1.0),
            InterpolationMode::Nearest,
            false,
            false,
            vec!["data".to_string()],
            None
        )
        .is_err()
    );
    assert!(
        Zoom::new(
            DEFAULT_ZOOM_RANGE,
            InterpolationMode::Nearest,
            false,
            false,
            vec![],
            None
        )
        .is_err()
    );
}
