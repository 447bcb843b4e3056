use crate::batch::TensorBatch;
use crate::error::TransformError;
use crate::ops;
use crate::ops::InterpolationMode;
use crate::random::{ParameterSampler, UniformParameter};
use crate::transforms::Transform;
use crate::transforms::helper_function::apply_to_keys;
use crate::transforms::input_validation_function::validate_keys;

/// Default scale factor range of the zoom transform.
pub const DEFAULT_ZOOM_RANGE: (f32, f32) = (0.75, 1.25);

/// Random zoom transform rescaling batch entries by sampled factors.
///
/// Each call draws one scale factor per spatial dimension from the configured
/// sampler and resizes every selected entry with those factors, so all keys
/// zoom in lockstep. Factors below 1 shrink, factors above 1 enlarge; each
/// output extent is `max(1, floor(input_extent * factor))`.
///
/// All selected tensors must share the same number of spatial dimensions,
/// since the factors are drawn once from the first selected entry's rank.
///
/// # Fields
///
/// - `keys` - Batch entries the transform is applied to
/// - `scale` - Sampler the per-dimension scale factors are drawn from
/// - `mode` - Interpolation mode
/// - `align_corners` - Align the corner points of input and output grids
/// - `preserve_range` - Clamp each output to its input's value range
///
/// # Example
/// ```rust
/// use rustyaug::batch::TensorBatch;
/// use rustyaug::ops::InterpolationMode;
/// use rustyaug::transforms::{Transform, Zoom};
/// use ndarray::Array4;
///
/// let mut batch = TensorBatch::new();
/// batch.insert("data", Array4::<f32>::zeros((1, 1, 16, 16)).into_dyn());
///
/// let mut transform = Zoom::new(
///     (0.5, 0.75),
///     InterpolationMode::Nearest,
///     false,
///     false,
///     vec!["data".to_string()],
///     Some(42),
/// )
/// .unwrap();
/// let batch = transform.apply(batch).unwrap();
///
/// let zoomed = batch.get("data").unwrap();
/// assert!(zoomed.shape()[2] >= 8 && zoomed.shape()[2] < 12);
/// assert!(zoomed.shape()[3] >= 8 && zoomed.shape()[3] < 12);
/// ```
pub struct Zoom {
    keys: Vec<String>,
    scale: Box<dyn ParameterSampler>,
    mode: InterpolationMode,
    align_corners: bool,
    preserve_range: bool,
}

impl Zoom {
    /// Creates a new zoom transform drawing factors uniformly from
    /// `scale_range`.
    ///
    /// # Parameters
    ///
    /// - `scale_range` - `(low, high)` range the factors are drawn from;
    ///   [`DEFAULT_ZOOM_RANGE`] is the usual choice
    /// - `mode` - Interpolation mode
    /// - `align_corners` - Align the corner points of input and output grids
    /// - `preserve_range` - Clamp each output to its input's value range
    /// - `keys` - Batch entries to apply the transform to
    /// - `random_state` - Random seed, `None` for OS entropy
    ///
    /// # Returns
    ///
    /// - `Result<Zoom, TransformError>` - New transform on success
    ///
    /// # Errors
    ///
    /// - `TransformError::InputValidationError` - If `keys` is invalid or the
    ///   range is not a valid uniform range
    pub fn new(
        scale_range: (f32, f32),
        mode: InterpolationMode,
        align_corners: bool,
        preserve_range: bool,
        keys: Vec<String>,
        random_state: Option<u64>,
    ) -> Result<Self, TransformError> {
        let scale = UniformParameter::new(scale_range.0, scale_range.1, random_state)?;
        Self::with_sampler(Box::new(scale), mode, align_corners, preserve_range, keys)
    }

    /// Creates a new zoom transform drawing factors from an arbitrary
    /// sampler.
    ///
    /// # Parameters
    ///
    /// - `scale` - Sampler producing one factor per spatial dimension
    /// - `mode` - Interpolation mode
    /// - `align_corners` - Align the corner points of input and output grids
    /// - `preserve_range` - Clamp each output to its input's value range
    /// - `keys` - Batch entries to apply the transform to
    ///
    /// # Errors
    ///
    /// - `TransformError::InputValidationError` - If `keys` is invalid
    pub fn with_sampler(
        scale: Box<dyn ParameterSampler>,
        mode: InterpolationMode,
        align_corners: bool,
        preserve_range: bool,
        keys: Vec<String>,
    ) -> Result<Self, TransformError> {
        validate_keys(&keys)?;
        Ok(Self {
            keys,
            scale,
            mode,
            align_corners,
            preserve_range,
        })
    }

    get_field_as_ref!(get_keys, keys, &[String]);

    get_field!(get_mode, mode, InterpolationMode);
}

impl Transform for Zoom {
    fn apply(&mut self, batch: TensorBatch) -> Result<TensorBatch, TransformError> {
        // Keys are validated non-empty at construction
        let first_key = &self.keys[0];
        let reference = batch
            .get(first_key)
            .ok_or_else(|| TransformError::MissingKey(first_key.clone()))?;
        if reference.ndim() < 3 {
            return Err(TransformError::InputValidationError(format!(
                "zoom expects tensors shaped [batch_size, channels, spatial...], got {} dimension(s)",
                reference.ndim()
            )));
        }
        let spatial_rank = reference.ndim() - 2;

        let factors: Vec<f32> = self.scale.draw(&[spatial_rank])?.iter().copied().collect();
        let mode = self.mode;
        let align_corners = self.align_corners;
        let preserve_range = self.preserve_range;
        apply_to_keys(batch, &self.keys, |tensor| {
            ops::resize(
                tensor,
                None,
                Some(&factors),
                mode,
                align_corners,
                preserve_range,
            )
        })
    }

    fn transform_type(&self) -> &str {
        "Zoom"
    }
}
