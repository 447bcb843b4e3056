use crate::batch::{Tensor, TensorBatch};
use crate::error::TransformError;

/// Applies `op` to every selected batch entry, replacing each tensor with the
/// result.
///
/// # Errors
///
/// Returns `TransformError::MissingKey` for the first selected key not
/// present in the batch; errors from `op` are propagated.
pub(crate) fn apply_to_keys<F>(
    mut batch: TensorBatch,
    keys: &[String],
    mut op: F,
) -> Result<TensorBatch, TransformError>
where
    F: FnMut(&Tensor) -> Result<Tensor, TransformError>,
{
    for key in keys {
        let tensor = batch
            .get(key)
            .ok_or_else(|| TransformError::MissingKey(key.clone()))?;
        let transformed = op(tensor)?;
        batch.insert(key.clone(), transformed);
    }
    Ok(batch)
}
