use crate::error::TransformError;

/// Validates that a uniform sampling range is finite and non-empty.
///
/// # Errors
///
/// Returns `TransformError::InputValidationError` if either bound is not
/// finite or `low >= high`.
pub(crate) fn validate_uniform_range(low: f32, high: f32) -> Result<(), TransformError> {
    if !low.is_finite() || !high.is_finite() {
        return Err(TransformError::InputValidationError(format!(
            "uniform range bounds must be finite, got [{}, {})",
            low, high
        )));
    }
    if low >= high {
        return Err(TransformError::InputValidationError(format!(
            "uniform range must satisfy low < high, got [{}, {})",
            low, high
        )));
    }
    Ok(())
}

/// Validates the parameters of a normal distribution.
///
/// # Errors
///
/// Returns `TransformError::InputValidationError` if `mean` is not finite or
/// `std` is negative or not finite.
pub(crate) fn validate_normal_params(mean: f32, std: f32) -> Result<(), TransformError> {
    if !mean.is_finite() || !std.is_finite() {
        return Err(TransformError::InputValidationError(format!(
            "normal distribution parameters must be finite, got mean {} and std {}",
            mean, std
        )));
    }
    if std < 0.0 {
        return Err(TransformError::InputValidationError(format!(
            "standard deviation must be non-negative, got {}",
            std
        )));
    }
    Ok(())
}

/// Validates that a discrete sampling pool is not empty.
///
/// # Errors
///
/// Returns `TransformError::InputValidationError` if the pool has no entries.
pub(crate) fn validate_pool_not_empty(pool_len: usize) -> Result<(), TransformError> {
    if pool_len == 0 {
        return Err(TransformError::InputValidationError(
            "discrete sampling pool must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validates sampling weights against the pool they describe.
///
/// # Errors
///
/// Returns `TransformError::InputValidationError` if the weight count does
/// not match the pool, any weight is negative or not finite, or all weights
/// are zero.
pub(crate) fn validate_weights(pool_len: usize, weights: &[f64]) -> Result<(), TransformError> {
    if weights.len() != pool_len {
        return Err(TransformError::InputValidationError(format!(
            "expected one weight per pool entry ({}), got {}",
            pool_len,
            weights.len()
        )));
    }
    if weights.iter().any(|&w| !w.is_finite() || w < 0.0) {
        return Err(TransformError::InputValidationError(
            "sampling weights must be finite and non-negative".to_string(),
        ));
    }
    if weights.iter().sum::<f64>() <= 0.0 {
        return Err(TransformError::InputValidationError(
            "at least one sampling weight must be positive".to_string(),
        ));
    }
    Ok(())
}
