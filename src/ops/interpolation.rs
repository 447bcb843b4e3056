use crate::batch::Tensor;
use crate::error::TransformError;
use crate::ops::helper_function::{
    execute_batch_channel, numel, row_major_strides, validate_all_dims_positive,
    validate_batched_input,
};
use ndarray::IxDyn;

/// Threshold for deciding between parallel and sequential execution.
/// When batch_size * channels >= this threshold, use parallel execution.
pub const INTERPOLATION_PARALLEL_THRESHOLD: usize = 32;

/// Interpolation modes supported by [`interpolate`].
///
/// The linear family is tied to a fixed number of spatial dimensions:
/// `Linear` to one, `Bilinear` to two and `Trilinear` to three. `Nearest` and
/// `Area` work for any supported spatial rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpolationMode {
    Nearest,
    Linear,
    Bilinear,
    Trilinear,
    Area,
}

impl InterpolationMode {
    /// Returns the lowercase name of the mode
    pub fn as_str(&self) -> &'static str {
        match self {
            InterpolationMode::Nearest => "nearest",
            InterpolationMode::Linear => "linear",
            InterpolationMode::Bilinear => "bilinear",
            InterpolationMode::Trilinear => "trilinear",
            InterpolationMode::Area => "area",
        }
    }

    /// Number of spatial dimensions the mode is defined for, if fixed
    fn required_spatial_dims(&self) -> Option<usize> {
        match self {
            InterpolationMode::Linear => Some(1),
            InterpolationMode::Bilinear => Some(2),
            InterpolationMode::Trilinear => Some(3),
            InterpolationMode::Nearest | InterpolationMode::Area => None,
        }
    }
}

impl std::fmt::Display for InterpolationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resamples a batched tensor to a new spatial size.
///
/// The input must be shaped `[batch_size, channels, spatial...]` with one to
/// three spatial dimensions. Exactly one of `size` and `scale_factor` must be
/// given; either may hold one entry per spatial dimension or a single entry
/// that is broadcast to all of them. With `scale_factor`, each output extent
/// is `max(1, floor(input_extent * factor))`.
///
/// Coordinate mapping follows the usual conventions: `nearest` picks the
/// source index `floor(dst * in / out)`; the linear family maps
/// `dst * (in - 1) / (out - 1)` when `align_corners` is set and
/// `(dst + 0.5) * in / out - 0.5` (clamped at 0) otherwise; `area` averages
/// over adaptive windows. `align_corners` only affects the linear family.
///
/// # Parameters
///
/// - `input` - Input tensor shaped `[batch_size, channels, spatial...]`
/// - `size` - Optional target spatial size
/// - `scale_factor` - Optional per-dimension scale factors
/// - `mode` - Interpolation mode
/// - `align_corners` - Align the corner points of input and output grids
///
/// # Returns
///
/// * `Result<Tensor, TransformError>` - The resampled tensor on success
///
/// # Errors
///
/// - `TransformError::InputValidationError` - If the input is not batched
///   spatial data, has a zero dimension, if neither or both of `size` and
///   `scale_factor` are given, if an entry is non-positive, or if the mode
///   does not match the spatial rank
///
/// # Example
/// ```rust
/// use rustyaug::ops::{interpolate, InterpolationMode};
/// use ndarray::array;
///
/// let input = array![[[1.0_f32, 2.0, 3.0, 4.0]]].into_dyn();
/// let out = interpolate(&input, Some(&[2]), None, InterpolationMode::Nearest, false).unwrap();
/// assert_eq!(out.shape(), &[1, 1, 2]);
/// assert_eq!(out[[0, 0, 0]], 1.0);
/// assert_eq!(out[[0, 0, 1]], 3.0);
/// ```
///
/// # Performance
///
/// Per-(batch, channel) planes are processed in parallel when
/// `batch_size * channels >= INTERPOLATION_PARALLEL_THRESHOLD` (32).
pub fn interpolate(
    input: &Tensor,
    size: Option<&[usize]>,
    scale_factor: Option<&[f32]>,
    mode: InterpolationMode,
    align_corners: bool,
) -> Result<Tensor, TransformError> {
    let shape = input.shape();
    validate_batched_input(shape, "interpolate")?;
    validate_all_dims_positive(shape)?;

    let in_dims: Vec<usize> = shape[2..].to_vec();
    let spatial_rank = in_dims.len();

    if let Some(required) = mode.required_spatial_dims() {
        if spatial_rank != required {
            return Err(TransformError::InputValidationError(format!(
                "{} interpolation requires {} spatial dimension(s), got input with {}",
                mode.as_str(),
                required,
                spatial_rank
            )));
        }
    }

    let out_dims = resolve_output_size(&in_dims, size, scale_factor)?;
    if out_dims == in_dims {
        return Ok(input.clone());
    }

    let batch_size = shape[0];
    let channels = shape[1];
    let in_numel = numel(&in_dims);
    let out_numel = numel(&out_dims);

    // Gather tables only depend on the spatial geometry, so they are built
    // once and shared by every (batch, channel) plane.
    let standard = input.as_standard_layout();
    let data = standard.as_slice().ok_or_else(|| {
        TransformError::ProcessingError(
            "input tensor is not contiguous after layout conversion".to_string(),
        )
    })?;

    let planes: Vec<(usize, Vec<f32>)> = match mode {
        InterpolationMode::Nearest => {
            let table = build_nearest_table(&in_dims, &out_dims);
            execute_batch_channel(
                batch_size,
                channels,
                INTERPOLATION_PARALLEL_THRESHOLD,
                |b, c| {
                    let plane = &data[(b * channels + c) * in_numel..][..in_numel];
                    let values: Vec<f32> = table.iter().map(|&src| plane[src]).collect();
                    (b * channels + c, values)
                },
            )
        }
        InterpolationMode::Linear | InterpolationMode::Bilinear | InterpolationMode::Trilinear => {
            let table = build_linear_table(&in_dims, &out_dims, align_corners);
            execute_batch_channel(
                batch_size,
                channels,
                INTERPOLATION_PARALLEL_THRESHOLD,
                |b, c| {
                    let plane = &data[(b * channels + c) * in_numel..][..in_numel];
                    let values: Vec<f32> = table
                        .iter()
                        .map(|contribs| {
                            contribs
                                .iter()
                                .map(|&(src, weight)| plane[src] * weight)
                                .sum()
                        })
                        .collect();
                    (b * channels + c, values)
                },
            )
        }
        InterpolationMode::Area => {
            let table = build_area_table(&in_dims, &out_dims);
            execute_batch_channel(
                batch_size,
                channels,
                INTERPOLATION_PARALLEL_THRESHOLD,
                |b, c| {
                    let plane = &data[(b * channels + c) * in_numel..][..in_numel];
                    let values: Vec<f32> = table
                        .iter()
                        .map(|(window, inv_count)| {
                            window.iter().map(|&src| plane[src]).sum::<f32>() * inv_count
                        })
                        .collect();
                    (b * channels + c, values)
                },
            )
        }
    };

    // Merge plane results into the output buffer
    let mut out_data = vec![0.0f32; batch_size * channels * out_numel];
    for (plane_idx, values) in planes {
        out_data[plane_idx * out_numel..][..out_numel].copy_from_slice(&values);
    }

    let mut out_shape = vec![batch_size, channels];
    out_shape.extend_from_slice(&out_dims);
    Tensor::from_shape_vec(IxDyn(&out_shape), out_data).map_err(|e| {
        TransformError::ProcessingError(format!("failed to assemble interpolation output: {}", e))
    })
}

/// Resolves the target spatial size from `size` or `scale_factor`.
fn resolve_output_size(
    in_dims: &[usize],
    size: Option<&[usize]>,
    scale_factor: Option<&[f32]>,
) -> Result<Vec<usize>, TransformError> {
    match (size, scale_factor) {
        (Some(_), Some(_)) => Err(TransformError::InputValidationError(
            "only one of size and scale_factor may be specified".to_string(),
        )),
        (None, None) => Err(TransformError::InputValidationError(
            "either size or scale_factor must be specified".to_string(),
        )),
        (Some(size), None) => {
            let size = broadcast_spatial_param(size, in_dims.len(), "size")?;
            if size.iter().any(|&s| s == 0) {
                return Err(TransformError::InputValidationError(format!(
                    "target size entries must be greater than zero, got {:?}",
                    size
                )));
            }
            Ok(size)
        }
        (None, Some(factors)) => {
            let factors = broadcast_spatial_param(factors, in_dims.len(), "scale_factor")?;
            for &factor in &factors {
                if !factor.is_finite() || factor <= 0.0 {
                    return Err(TransformError::InputValidationError(format!(
                        "scale factors must be positive and finite, got {}",
                        factor
                    )));
                }
            }
            Ok(in_dims
                .iter()
                .zip(&factors)
                .map(|(&extent, &factor)| ((extent as f32 * factor).floor() as usize).max(1))
                .collect())
        }
    }
}

/// Broadcasts a single entry to the spatial rank, or passes a full-length
/// parameter through.
fn broadcast_spatial_param<T: Copy>(
    values: &[T],
    rank: usize,
    name: &str,
) -> Result<Vec<T>, TransformError> {
    if values.len() == rank {
        Ok(values.to_vec())
    } else if values.len() == 1 {
        Ok(vec![values[0]; rank])
    } else {
        Err(TransformError::InputValidationError(format!(
            "{} must have one entry or one per spatial dimension ({}), got {}",
            name,
            rank,
            values.len()
        )))
    }
}

/// Source index per output index for nearest interpolation along one axis.
fn nearest_index_map(in_len: usize, out_len: usize) -> Vec<usize> {
    let scale = in_len as f32 / out_len as f32;
    (0..out_len)
        .map(|i| ((i as f32 * scale).floor() as usize).min(in_len - 1))
        .collect()
}

/// `(lower, upper, fraction)` per output index for linear interpolation along
/// one axis.
fn linear_index_map(in_len: usize, out_len: usize, align_corners: bool) -> Vec<(usize, usize, f32)> {
    (0..out_len)
        .map(|i| {
            let src = if align_corners {
                if out_len > 1 {
                    i as f32 * (in_len - 1) as f32 / (out_len - 1) as f32
                } else {
                    0.0
                }
            } else {
                let scale = in_len as f32 / out_len as f32;
                ((i as f32 + 0.5) * scale - 0.5).max(0.0)
            };
            let lower = (src.floor() as usize).min(in_len - 1);
            let upper = (lower + 1).min(in_len - 1);
            (lower, upper, src - lower as f32)
        })
        .collect()
}

/// `[start, end)` averaging window per output index for area interpolation
/// along one axis.
fn area_window_map(in_len: usize, out_len: usize) -> Vec<(usize, usize)> {
    (0..out_len)
        .map(|i| {
            let start = i * in_len / out_len;
            let end = ((i + 1) * in_len).div_ceil(out_len).max(start + 1);
            (start, end)
        })
        .collect()
}

/// Flat source index per flat output index for nearest gathering.
fn build_nearest_table(in_dims: &[usize], out_dims: &[usize]) -> Vec<usize> {
    let maps: Vec<Vec<usize>> = in_dims
        .iter()
        .zip(out_dims)
        .map(|(&in_len, &out_len)| nearest_index_map(in_len, out_len))
        .collect();
    let in_strides = row_major_strides(in_dims);
    let out_strides = row_major_strides(out_dims);

    (0..numel(out_dims))
        .map(|flat| {
            let mut src = 0;
            let mut rem = flat;
            for d in 0..out_dims.len() {
                let coord = rem / out_strides[d];
                rem %= out_strides[d];
                src += maps[d][coord] * in_strides[d];
            }
            src
        })
        .collect()
}

/// Weighted source contributions per flat output index for the linear family.
fn build_linear_table(
    in_dims: &[usize],
    out_dims: &[usize],
    align_corners: bool,
) -> Vec<Vec<(usize, f32)>> {
    let maps: Vec<Vec<(usize, usize, f32)>> = in_dims
        .iter()
        .zip(out_dims)
        .map(|(&in_len, &out_len)| linear_index_map(in_len, out_len, align_corners))
        .collect();
    let in_strides = row_major_strides(in_dims);
    let out_strides = row_major_strides(out_dims);

    (0..numel(out_dims))
        .map(|flat| {
            let mut contribs: Vec<(usize, f32)> = vec![(0, 1.0)];
            let mut rem = flat;
            for d in 0..out_dims.len() {
                let coord = rem / out_strides[d];
                rem %= out_strides[d];
                let (lower, upper, fraction) = maps[d][coord];
                let mut expanded = Vec::with_capacity(contribs.len() * 2);
                for &(src, weight) in &contribs {
                    if fraction < 1.0 {
                        expanded.push((src + lower * in_strides[d], weight * (1.0 - fraction)));
                    }
                    if fraction > 0.0 {
                        expanded.push((src + upper * in_strides[d], weight * fraction));
                    }
                }
                contribs = expanded;
            }
            contribs
        })
        .collect()
}

/// Averaging windows (flat source indices and inverse count) per flat output
/// index for area interpolation.
fn build_area_table(in_dims: &[usize], out_dims: &[usize]) -> Vec<(Vec<usize>, f32)> {
    let maps: Vec<Vec<(usize, usize)>> = in_dims
        .iter()
        .zip(out_dims)
        .map(|(&in_len, &out_len)| area_window_map(in_len, out_len))
        .collect();
    let in_strides = row_major_strides(in_dims);
    let out_strides = row_major_strides(out_dims);

    (0..numel(out_dims))
        .map(|flat| {
            let mut indices: Vec<usize> = vec![0];
            let mut rem = flat;
            for d in 0..out_dims.len() {
                let coord = rem / out_strides[d];
                rem %= out_strides[d];
                let (start, end) = maps[d][coord];
                let mut expanded = Vec::with_capacity(indices.len() * (end - start));
                for &base in &indices {
                    for j in start..end {
                        expanded.push(base + j * in_strides[d]);
                    }
                }
                indices = expanded;
            }
            let inv_count = 1.0 / indices.len() as f32;
            (indices, inv_count)
        })
        .collect()
}
