use crate::batch::TensorBatch;
use crate::error::TransformError;

/// Common interface of all batch transforms.
///
/// A transform consumes a [`TensorBatch`], augments the entries it was
/// configured with and returns the batch. Randomized transforms draw their
/// parameters once per call and apply the same values to every selected
/// entry, so paired tensors such as an image and its segmentation mask stay
/// aligned.
///
/// `apply` takes `&mut self` because randomized transforms advance their
/// internal random number generator state on every call.
pub trait Transform {
    /// Applies the transform to the batch.
    ///
    /// # Parameters
    ///
    /// * `batch` - The batch to augment
    ///
    /// # Returns
    ///
    /// * `Result<TensorBatch, TransformError>` - The augmented batch on success
    ///
    /// # Errors
    ///
    /// - `TransformError::MissingKey` - If a selected key is not present in
    ///   the batch
    /// - `TransformError::InputValidationError` - If a selected tensor does
    ///   not fit the transform's requirements
    fn apply(&mut self, batch: TensorBatch) -> Result<TensorBatch, TransformError>;

    /// Returns the name of the transform type
    fn transform_type(&self) -> &str;
}
