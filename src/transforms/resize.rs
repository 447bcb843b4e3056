use crate::batch::TensorBatch;
use crate::error::TransformError;
use crate::ops;
use crate::ops::InterpolationMode;
use crate::transforms::Transform;
use crate::transforms::helper_function::apply_to_keys;
use crate::transforms::input_validation_function::{validate_keys, validate_target_size};

/// Resize transform scaling batch entries to a fixed spatial size.
///
/// The target size holds one extent per spatial dimension, or a single extent
/// that is broadcast to all of them. With `preserve_range` the output of each
/// entry is clamped to that entry's input value range.
///
/// # Fields
///
/// - `keys` - Batch entries the transform is applied to
/// - `size` - Target spatial size
/// - `mode` - Interpolation mode
/// - `align_corners` - Align the corner points of input and output grids
/// - `preserve_range` - Clamp each output to its input's value range
///
/// # Example
/// ```rust
/// use rustyaug::batch::TensorBatch;
/// use rustyaug::ops::InterpolationMode;
/// use rustyaug::transforms::{Resize, Transform};
/// use ndarray::Array4;
///
/// let mut batch = TensorBatch::new();
/// batch.insert("data", Array4::<f32>::zeros((2, 3, 16, 16)).into_dyn());
///
/// let mut transform = Resize::new(
///     vec![8],
///     InterpolationMode::Nearest,
///     false,
///     false,
///     vec!["data".to_string()],
/// )
/// .unwrap();
/// let batch = transform.apply(batch).unwrap();
///
/// assert_eq!(batch.get("data").unwrap().shape(), &[2, 3, 8, 8]);
/// ```
pub struct Resize {
    keys: Vec<String>,
    size: Vec<usize>,
    mode: InterpolationMode,
    align_corners: bool,
    preserve_range: bool,
}

impl Resize {
    /// Creates a new resize transform.
    ///
    /// # Parameters
    ///
    /// - `size` - Target spatial size, one extent per spatial dimension or a
    ///   single broadcast extent
    /// - `mode` - Interpolation mode
    /// - `align_corners` - Align the corner points of input and output grids
    /// - `preserve_range` - Clamp each output to its input's value range
    /// - `keys` - Batch entries to apply the transform to
    ///
    /// # Returns
    ///
    /// - `Result<Resize, TransformError>` - New transform on success
    ///
    /// # Errors
    ///
    /// - `TransformError::InputValidationError` - If `size` or `keys` is
    ///   empty or `size` contains a zero extent
    pub fn new(
        size: Vec<usize>,
        mode: InterpolationMode,
        align_corners: bool,
        preserve_range: bool,
        keys: Vec<String>,
    ) -> Result<Self, TransformError> {
        validate_keys(&keys)?;
        validate_target_size(&size)?;
        Ok(Self {
            keys,
            size,
            mode,
            align_corners,
            preserve_range,
        })
    }

    get_field_as_ref!(get_keys, keys, &[String]);

    get_field_as_ref!(get_size, size, &[usize]);

    get_field!(get_mode, mode, InterpolationMode);
}

impl Transform for Resize {
    fn apply(&mut self, batch: TensorBatch) -> Result<TensorBatch, TransformError> {
        let size = self.size.clone();
        let mode = self.mode;
        let align_corners = self.align_corners;
        let preserve_range = self.preserve_range;
        apply_to_keys(batch, &self.keys, |tensor| {
            ops::resize(tensor, Some(&size), None, mode, align_corners, preserve_range)
        })
    }

    fn transform_type(&self) -> &str {
        "Resize"
    }
}
