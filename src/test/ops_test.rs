use crate::error::TransformError;
use crate::ops::{InterpolationMode, interpolate, mirror, resize, rot90};
use approx::assert_abs_diff_eq;
use ndarray::{Array3, Array4, Array5, array};

#[test]
fn test_mirror_flips_selected_dims() {
    let input = array![[[1.0_f32, 2.0, 3.0], [4.0, 5.0, 6.0]]].into_dyn();
    // Shape [1, 2, 3]: one spatial dimension of extent 3
    let flipped = mirror(&input, &[0]).unwrap();
    assert_eq!(flipped[[0, 0, 0]], 3.0);
    assert_eq!(flipped[[0, 0, 2]], 1.0);
    assert_eq!(flipped[[0, 1, 0]], 6.0);
}

#[test]
fn test_mirror_twice_is_identity() {
    let input = array![[[[1.0_f32, 2.0], [3.0, 4.0]]]].into_dyn();
    let back = mirror(&mirror(&input, &[0, 1]).unwrap(), &[0, 1]).unwrap();
    assert_eq!(back, input);
}

#[test]
fn test_mirror_empty_dims_is_identity() {
    let input = array![[[1.0_f32, 2.0, 3.0]]].into_dyn();
    assert_eq!(mirror(&input, &[]).unwrap(), input);
}

#[test]
fn test_mirror_rejects_out_of_range_dim() {
    let input = array![[[1.0_f32, 2.0]]].into_dyn();
    assert!(matches!(
        mirror(&input, &[1]),
        Err(TransformError::InputValidationError(_))
    ));
    assert!(matches!(
        mirror(&input, &[0, 0]),
        Err(TransformError::InputValidationError(_))
    ));
}

#[test]
fn test_rot90_single_rotation_values() {
    let input = array![[[[1.0_f32, 2.0], [3.0, 4.0]]]].into_dyn();
    let rotated = rot90(&input, 1, (0, 1)).unwrap();
    assert_eq!(rotated[[0, 0, 0, 0]], 2.0);
    assert_eq!(rotated[[0, 0, 0, 1]], 4.0);
    assert_eq!(rotated[[0, 0, 1, 0]], 1.0);
    assert_eq!(rotated[[0, 0, 1, 1]], 3.0);
}

#[test]
fn test_rot90_two_rotations_reverse_both_axes() {
    let input = array![[[[1.0_f32, 2.0], [3.0, 4.0]]]].into_dyn();
    let rotated = rot90(&input, 2, (0, 1)).unwrap();
    assert_eq!(rotated[[0, 0, 0, 0]], 4.0);
    assert_eq!(rotated[[0, 0, 1, 1]], 1.0);
}

#[test]
fn test_rot90_four_rotations_is_identity() {
    let input = array![[[[1.0_f32, 2.0, 3.0], [4.0, 5.0, 6.0]]]].into_dyn();
    assert_eq!(rot90(&input, 4, (0, 1)).unwrap(), input);
    assert_eq!(rot90(&input, 0, (0, 1)).unwrap(), input);
}

#[test]
fn test_rot90_swaps_extents_for_odd_counts() {
    let input = Array4::<f32>::zeros((2, 3, 4, 6)).into_dyn();
    let rotated = rot90(&input, 1, (0, 1)).unwrap();
    assert_eq!(rotated.shape(), &[2, 3, 6, 4]);
    let rotated = rot90(&input, 3, (0, 1)).unwrap();
    assert_eq!(rotated.shape(), &[2, 3, 6, 4]);
}

#[test]
fn test_rot90_rejects_equal_dims() {
    let input = Array4::<f32>::zeros((1, 1, 2, 2)).into_dyn();
    assert!(matches!(
        rot90(&input, 1, (0, 0)),
        Err(TransformError::InputValidationError(_))
    ));
}

#[test]
fn test_nearest_downscale_picks_sources() {
    let input = array![[[1.0_f32, 2.0, 3.0, 4.0]]].into_dyn();
    let out = interpolate(&input, Some(&[2]), None, InterpolationMode::Nearest, false).unwrap();
    assert_eq!(out.shape(), &[1, 1, 2]);
    assert_eq!(out[[0, 0, 0]], 1.0);
    assert_eq!(out[[0, 0, 1]], 3.0);
}

#[test]
fn test_nearest_upscale_repeats_sources() {
    let input = array![[[1.0_f32, 2.0]]].into_dyn();
    let out = interpolate(&input, Some(&[4]), None, InterpolationMode::Nearest, false).unwrap();
    assert_eq!(out[[0, 0, 0]], 1.0);
    assert_eq!(out[[0, 0, 1]], 1.0);
    assert_eq!(out[[0, 0, 2]], 2.0);
    assert_eq!(out[[0, 0, 3]], 2.0);
}

#[test]
fn test_linear_upscale_align_corners_hits_grid() {
    let input = array![[[0.0_f32, 3.0]]].into_dyn();
    let out = interpolate(&input, Some(&[4]), None, InterpolationMode::Linear, true).unwrap();
    assert_abs_diff_eq!(out[[0, 0, 0]], 0.0, epsilon = 1e-5);
    assert_abs_diff_eq!(out[[0, 0, 1]], 1.0, epsilon = 1e-5);
    assert_abs_diff_eq!(out[[0, 0, 2]], 2.0, epsilon = 1e-5);
    assert_abs_diff_eq!(out[[0, 0, 3]], 3.0, epsilon = 1e-5);
}

#[test]
fn test_bilinear_align_corners_center() {
    let input = array![[[[0.0_f32, 1.0], [2.0, 3.0]]]].into_dyn();
    let out = interpolate(&input, Some(&[3, 3]), None, InterpolationMode::Bilinear, true).unwrap();
    // Corners reproduce the input exactly, the center is the mean
    assert_abs_diff_eq!(out[[0, 0, 0, 0]], 0.0, epsilon = 1e-5);
    assert_abs_diff_eq!(out[[0, 0, 0, 2]], 1.0, epsilon = 1e-5);
    assert_abs_diff_eq!(out[[0, 0, 2, 0]], 2.0, epsilon = 1e-5);
    assert_abs_diff_eq!(out[[0, 0, 2, 2]], 3.0, epsilon = 1e-5);
    assert_abs_diff_eq!(out[[0, 0, 1, 1]], 1.5, epsilon = 1e-5);
}

#[test]
fn test_bilinear_half_pixel_centers() {
    let input = array![[[[0.0_f32, 1.0], [2.0, 3.0]]]].into_dyn();
    let out =
        interpolate(&input, Some(&[4, 4]), None, InterpolationMode::Bilinear, false).unwrap();
    assert_abs_diff_eq!(out[[0, 0, 0, 0]], 0.0, epsilon = 1e-5);
    assert_abs_diff_eq!(out[[0, 0, 1, 1]], 0.75, epsilon = 1e-5);
    assert_abs_diff_eq!(out[[0, 0, 3, 3]], 3.0, epsilon = 1e-5);
}

#[test]
fn test_trilinear_shape_and_constant_field() {
    let input = Array5::<f32>::ones((1, 2, 2, 4, 4)).into_dyn();
    let out =
        interpolate(&input, Some(&[4, 2, 2]), None, InterpolationMode::Trilinear, false).unwrap();
    assert_eq!(out.shape(), &[1, 2, 4, 2, 2]);
    for &v in out.iter() {
        assert_abs_diff_eq!(v, 1.0, epsilon = 1e-6);
    }
}

#[test]
fn test_area_downscale_averages_windows() {
    let input = array![[[1.0_f32, 2.0, 3.0, 4.0]]].into_dyn();
    let out = interpolate(&input, Some(&[2]), None, InterpolationMode::Area, false).unwrap();
    assert_abs_diff_eq!(out[[0, 0, 0]], 1.5, epsilon = 1e-5);
    assert_abs_diff_eq!(out[[0, 0, 1]], 3.5, epsilon = 1e-5);
}

#[test]
fn test_area_2d_global_average() {
    let input = array![[[[1.0_f32, 2.0], [3.0, 4.0]]]].into_dyn();
    let out = interpolate(&input, Some(&[1, 1]), None, InterpolationMode::Area, false).unwrap();
    assert_abs_diff_eq!(out[[0, 0, 0, 0]], 2.5, epsilon = 1e-5);
}

#[test]
fn test_interpolate_scale_factor_resolution() {
    let input = Array4::<f32>::zeros((1, 1, 16, 16)).into_dyn();
    let out =
        interpolate(&input, None, Some(&[0.5]), InterpolationMode::Nearest, false).unwrap();
    assert_eq!(out.shape(), &[1, 1, 8, 8]);

    // Tiny factors still yield at least one element per dimension
    let out =
        interpolate(&input, None, Some(&[0.01]), InterpolationMode::Nearest, false).unwrap();
    assert_eq!(out.shape(), &[1, 1, 1, 1]);
}

#[test]
fn test_interpolate_identity_size_returns_input() {
    let input = array![[[1.0_f32, 2.0, 3.0]]].into_dyn();
    let out = interpolate(&input, Some(&[3]), None, InterpolationMode::Linear, false).unwrap();
    assert_eq!(out, input);
}

#[test]
fn test_interpolate_rejects_conflicting_arguments() {
    let input = array![[[1.0_f32, 2.0]]].into_dyn();
    assert!(matches!(
        interpolate(&input, Some(&[4]), Some(&[2.0]), InterpolationMode::Nearest, false),
        Err(TransformError::InputValidationError(_))
    ));
    assert!(matches!(
        interpolate(&input, None, None, InterpolationMode::Nearest, false),
        Err(TransformError::InputValidationError(_))
    ));
}

#[test]
fn test_interpolate_rejects_mode_rank_mismatch() {
    let input = Array4::<f32>::zeros((1, 1, 4, 4)).into_dyn();
    assert!(matches!(
        interpolate(&input, Some(&[2, 2]), None, InterpolationMode::Linear, false),
        Err(TransformError::InputValidationError(_))
    ));
    let input = Array3::<f32>::zeros((1, 1, 4)).into_dyn();
    assert!(matches!(
        interpolate(&input, Some(&[2]), None, InterpolationMode::Trilinear, false),
        Err(TransformError::InputValidationError(_))
    ));
}

#[test]
fn test_interpolate_rejects_bad_scale_factors() {
    let input = Array4::<f32>::zeros((1, 1, 4, 4)).into_dyn();
    assert!(matches!(
        interpolate(&input, None, Some(&[0.0]), InterpolationMode::Nearest, false),
        Err(TransformError::InputValidationError(_))
    ));
    assert!(matches!(
        interpolate(&input, None, Some(&[f32::NAN]), InterpolationMode::Nearest, false),
        Err(TransformError::InputValidationError(_))
    ));
}

#[test]
fn test_interpolate_rejects_unbatched_input() {
    let input = ndarray::Array2::<f32>::zeros((4, 4)).into_dyn();
    assert!(matches!(
        interpolate(&input, Some(&[2, 2]), None, InterpolationMode::Nearest, false),
        Err(TransformError::InputValidationError(_))
    ));
}

#[test]
fn test_resize_preserve_range_stays_in_input_range() {
    let input = array![[[[0.0_f32, 1.0], [2.0, 3.0]]]].into_dyn();
    let out = resize(
        &input,
        Some(&[5, 5]),
        None,
        InterpolationMode::Bilinear,
        false,
        true,
    )
    .unwrap();
    for &v in out.iter() {
        assert!((0.0..=3.0).contains(&v));
    }
}

#[test]
fn test_resize_mirrored_input_matches_mirrored_resize() {
    // Resizing a flipped tensor equals flipping the resized tensor for
    // symmetric modes, which exercises non-contiguous input handling.
    let input = array![[[1.0_f32, 2.0, 3.0, 4.0]]].into_dyn();
    let flipped = mirror(&input, &[0]).unwrap();
    let a = resize(&flipped, Some(&[2]), None, InterpolationMode::Area, false, false).unwrap();
    let b = mirror(
        &resize(&input, Some(&[2]), None, InterpolationMode::Area, false, false).unwrap(),
        &[0],
    )
    .unwrap();
    for (&x, &y) in a.iter().zip(b.iter()) {
        assert_abs_diff_eq!(x, y, epsilon = 1e-5);
    }
}
