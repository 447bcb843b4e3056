use crate::error::TransformError;
use rayon::iter::{IntoParallelIterator, ParallelIterator};

/// Number of elements described by a shape slice.
pub(crate) fn numel(dims: &[usize]) -> usize {
    dims.iter().product()
}

/// Row-major strides for a shape slice.
pub(crate) fn row_major_strides(dims: &[usize]) -> Vec<usize> {
    let mut strides = vec![1; dims.len()];
    for d in (0..dims.len().saturating_sub(1)).rev() {
        strides[d] = strides[d + 1] * dims[d + 1];
    }
    strides
}

/// Runs `compute` for every `(batch, channel)` pair, in parallel when the
/// workload is at least `threshold` pairs and sequentially otherwise.
pub(crate) fn execute_batch_channel<T, F>(
    batch_size: usize,
    channels: usize,
    threshold: usize,
    compute: F,
) -> Vec<T>
where
    F: Fn(usize, usize) -> T + Send + Sync,
    T: Send,
{
    let total = batch_size * channels;
    if total >= threshold {
        (0..total)
            .into_par_iter()
            .map(|idx| compute(idx / channels, idx % channels))
            .collect()
    } else {
        (0..total)
            .map(|idx| compute(idx / channels, idx % channels))
            .collect()
    }
}

/// Validates that the tensor is batched spatial data, i.e. shaped
/// `[batch_size, channels, spatial...]` with one to three spatial dimensions.
///
/// # Errors
///
/// Returns `TransformError::InputValidationError` if the number of dimensions
/// is outside the supported range.
pub(crate) fn validate_batched_input(shape: &[usize], op: &str) -> Result<(), TransformError> {
    if shape.len() < 3 || shape.len() > 5 {
        return Err(TransformError::InputValidationError(format!(
            "{} expects a tensor shaped [batch_size, channels, spatial...] with 1 to 3 spatial dimensions, got {} dimension(s)",
            op,
            shape.len()
        )));
    }
    Ok(())
}

/// Validates that all dimensions of the input shape are greater than zero.
///
/// # Errors
///
/// Returns `TransformError::InputValidationError` if any dimension is 0.
pub(crate) fn validate_all_dims_positive(shape: &[usize]) -> Result<(), TransformError> {
    if !shape.iter().all(|&dim| dim > 0) {
        return Err(TransformError::InputValidationError(format!(
            "All dimensions of the input tensor must be greater than zero. Got: {:?}",
            shape
        )));
    }
    Ok(())
}

/// Validates spatial dimension indices against a tensor's rank.
///
/// Spatial dimension `d` addresses tensor axis `d + 2`; indices must be in
/// range and free of duplicates.
///
/// # Errors
///
/// Returns `TransformError::InputValidationError` if an index is out of range
/// or repeated.
pub(crate) fn validate_spatial_axes(
    ndim: usize,
    dims: &[usize],
    op: &str,
) -> Result<(), TransformError> {
    let spatial = ndim - 2;
    for (i, &d) in dims.iter().enumerate() {
        if d >= spatial {
            return Err(TransformError::InputValidationError(format!(
                "{}: spatial dimension index {} is out of range for a tensor with {} spatial dimension(s)",
                op, d, spatial
            )));
        }
        if dims[..i].contains(&d) {
            return Err(TransformError::InputValidationError(format!(
                "{}: duplicate spatial dimension index {}",
                op, d
            )));
        }
    }
    Ok(())
}
