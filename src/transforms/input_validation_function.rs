use crate::error::TransformError;

/// Validates the key selection of a transform.
///
/// # Errors
///
/// Returns `TransformError::InputValidationError` if no keys are given or a
/// key is repeated.
pub(crate) fn validate_keys(keys: &[String]) -> Result<(), TransformError> {
    if keys.is_empty() {
        return Err(TransformError::InputValidationError(
            "at least one batch key must be selected".to_string(),
        ));
    }
    for (i, key) in keys.iter().enumerate() {
        if keys[..i].contains(key) {
            return Err(TransformError::InputValidationError(format!(
                "duplicate batch key \"{}\"",
                key
            )));
        }
    }
    Ok(())
}

/// Validates an application probability.
///
/// # Errors
///
/// Returns `TransformError::InputValidationError` if `prob` is outside
/// `[0.0, 1.0]` or not finite.
pub(crate) fn validate_probability(prob: f32) -> Result<(), TransformError> {
    if !prob.is_finite() || !(0.0..=1.0).contains(&prob) {
        return Err(TransformError::InputValidationError(format!(
            "probability must be in [0.0, 1.0], got {}",
            prob
        )));
    }
    Ok(())
}

/// Validates the spatial dimension configuration of a transform.
///
/// Range checks against concrete tensors happen at apply time; this only
/// rejects configurations that can never be valid.
///
/// # Errors
///
/// Returns `TransformError::InputValidationError` if `dims` is empty, has
/// fewer entries than `min_len`, or repeats an entry.
pub(crate) fn validate_transform_dims(dims: &[usize], min_len: usize) -> Result<(), TransformError> {
    if dims.len() < min_len {
        return Err(TransformError::InputValidationError(format!(
            "at least {} spatial dimension(s) must be configured, got {}",
            min_len,
            dims.len()
        )));
    }
    for (i, &d) in dims.iter().enumerate() {
        if dims[..i].contains(&d) {
            return Err(TransformError::InputValidationError(format!(
                "duplicate spatial dimension index {}",
                d
            )));
        }
    }
    Ok(())
}

/// Validates a fixed target size.
///
/// # Errors
///
/// Returns `TransformError::InputValidationError` if the size is empty or an
/// extent is zero.
pub(crate) fn validate_target_size(size: &[usize]) -> Result<(), TransformError> {
    if size.is_empty() {
        return Err(TransformError::InputValidationError(
            "target size must not be empty".to_string(),
        ));
    }
    if size.iter().any(|&s| s == 0) {
        return Err(TransformError::InputValidationError(format!(
            "target size entries must be greater than zero, got {:?}",
            size
        )));
    }
    Ok(())
}
