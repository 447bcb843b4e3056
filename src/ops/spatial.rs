use crate::batch::Tensor;
use crate::error::TransformError;
use crate::ops::helper_function::{validate_batched_input, validate_spatial_axes};
use crate::ops::interpolation::{InterpolationMode, interpolate};
use ndarray::Axis;

/// Flips a batched tensor along the given spatial dimensions.
///
/// Spatial dimension `d` addresses tensor axis `d + 2`, so the batch and
/// channel axes are never mirrored. An empty `dims` slice returns the input
/// unchanged.
///
/// # Parameters
///
/// - `input` - Input tensor shaped `[batch_size, channels, spatial...]`
/// - `dims` - Spatial dimensions to flip
///
/// # Returns
///
/// * `Result<Tensor, TransformError>` - The mirrored tensor on success
///
/// # Errors
///
/// - `TransformError::InputValidationError` - If the input is not batched
///   spatial data or a dimension index is out of range or repeated
///
/// # Example
/// ```rust
/// use rustyaug::ops::mirror;
/// use ndarray::array;
///
/// let input = array![[[1.0_f32, 2.0, 3.0]]].into_dyn();
/// let flipped = mirror(&input, &[0]).unwrap();
/// assert_eq!(flipped[[0, 0, 0]], 3.0);
/// assert_eq!(flipped[[0, 0, 2]], 1.0);
/// ```
pub fn mirror(input: &Tensor, dims: &[usize]) -> Result<Tensor, TransformError> {
    validate_batched_input(input.shape(), "mirror")?;
    validate_spatial_axes(input.ndim(), dims, "mirror")?;

    let mut output = input.clone();
    for &d in dims {
        output.invert_axis(Axis(d + 2));
    }
    Ok(output)
}

/// Rotates a batched tensor by `k * 90` degrees in the plane spanned by two
/// spatial dimensions.
///
/// The rotation runs from the first dimension towards the second; one
/// rotation is a transpose of the two axes followed by a flip of the first.
/// `k` is taken modulo 4, so `k = 0` (and `k = 4`) returns the input
/// unchanged. For odd `k` the two spatial extents swap places in the output
/// shape.
///
/// # Parameters
///
/// - `input` - Input tensor shaped `[batch_size, channels, spatial...]`
/// - `k` - Number of 90 degree rotations
/// - `dims` - The two distinct spatial dimensions spanning the rotation plane
///
/// # Returns
///
/// * `Result<Tensor, TransformError>` - The rotated tensor on success
///
/// # Errors
///
/// - `TransformError::InputValidationError` - If the input is not batched
///   spatial data or the dimensions are out of range or equal
///
/// # Example
/// ```rust
/// use rustyaug::ops::rot90;
/// use ndarray::array;
///
/// let input = array![[[[1.0_f32, 2.0], [3.0, 4.0]]]].into_dyn();
/// let rotated = rot90(&input, 1, (0, 1)).unwrap();
/// assert_eq!(rotated[[0, 0, 0, 0]], 2.0);
/// assert_eq!(rotated[[0, 0, 0, 1]], 4.0);
/// assert_eq!(rotated[[0, 0, 1, 0]], 1.0);
/// assert_eq!(rotated[[0, 0, 1, 1]], 3.0);
/// ```
pub fn rot90(input: &Tensor, k: usize, dims: (usize, usize)) -> Result<Tensor, TransformError> {
    validate_batched_input(input.shape(), "rot90")?;
    validate_spatial_axes(input.ndim(), &[dims.0, dims.1], "rot90")?;

    let first = dims.0 + 2;
    let second = dims.1 + 2;

    let mut output = input.clone();
    for _ in 0..(k % 4) {
        let mut view = output.view();
        view.swap_axes(first, second);
        let mut rotated = view.to_owned();
        rotated.invert_axis(Axis(first));
        output = rotated;
    }
    Ok(output)
}

/// Resizes a batched tensor, optionally preserving the input value range.
///
/// This is [`interpolate`] plus the `preserve_range` post-step: when set, the
/// output is clamped to the `[min, max]` range of the input, which keeps
/// overshooting linear interpolation from leaving the original range.
///
/// # Parameters
///
/// - `input` - Input tensor shaped `[batch_size, channels, spatial...]`
/// - `size` - Optional target spatial size
/// - `scale_factor` - Optional per-dimension scale factors
/// - `mode` - Interpolation mode
/// - `align_corners` - Align the corner points of input and output grids
/// - `preserve_range` - Clamp the output to the input's value range
///
/// # Returns
///
/// * `Result<Tensor, TransformError>` - The resized tensor on success
///
/// # Errors
///
/// Propagates the validation errors of [`interpolate`].
pub fn resize(
    input: &Tensor,
    size: Option<&[usize]>,
    scale_factor: Option<&[f32]>,
    mode: InterpolationMode,
    align_corners: bool,
    preserve_range: bool,
) -> Result<Tensor, TransformError> {
    let output = interpolate(input, size, scale_factor, mode, align_corners)?;

    if preserve_range {
        let min = input.fold(f32::INFINITY, |acc, &v| acc.min(v));
        let max = input.fold(f32::NEG_INFINITY, |acc, &v| acc.max(v));
        return Ok(output.mapv(|v| v.clamp(min, max)));
    }
    Ok(output)
}
