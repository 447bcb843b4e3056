use crate::batch::TensorBatch;
use crate::error::TransformError;
use crate::ops;
use crate::ops::InterpolationMode;
use crate::transforms::Transform;
use crate::transforms::helper_function::apply_to_keys;
use crate::transforms::input_validation_function::validate_keys;
use crate::transforms::scheduler::SizeScheduler;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Resize transform whose target size follows a step schedule.
///
/// Each call asks the scheduler for the size of the current step, resizes
/// every selected entry to it and then increments the shared step counter.
/// Training loops that grow the input resolution over time pair this with a
/// [`SizeStepScheduler`](crate::transforms::SizeStepScheduler).
///
/// The step counter is an atomic, so the transform can be shared across
/// worker threads; the size lookup and the increment are still two separate
/// operations, which means concurrent workers may observe step counts that
/// jump within a range of the number of workers.
///
/// # Fields
///
/// - `keys` - Batch entries the transform is applied to
/// - `scheduler` - Maps the current step to a target spatial size
/// - `mode` - Interpolation mode
/// - `align_corners` - Align the corner points of input and output grids
/// - `preserve_range` - Clamp each output to its input's value range
/// - `step` - Shared step counter incremented on every application
///
/// # Example
/// ```rust
/// use rustyaug::batch::TensorBatch;
/// use rustyaug::ops::InterpolationMode;
/// use rustyaug::transforms::{ProgressiveResize, SizeStepScheduler, Transform};
/// use ndarray::Array4;
///
/// let scheduler = SizeStepScheduler::new(vec![2], vec![vec![4], vec![8]]).unwrap();
/// let mut transform = ProgressiveResize::new(
///     scheduler,
///     InterpolationMode::Nearest,
///     false,
///     false,
///     vec!["data".to_string()],
/// )
/// .unwrap();
///
/// for expected in [4, 4, 8] {
///     let mut batch = TensorBatch::new();
///     batch.insert("data", Array4::<f32>::zeros((1, 1, 16, 16)).into_dyn());
///     let batch = transform.apply(batch).unwrap();
///     assert_eq!(batch.get("data").unwrap().shape(), &[1, 1, expected, expected]);
/// }
/// assert_eq!(transform.step(), 3);
/// ```
pub struct ProgressiveResize {
    keys: Vec<String>,
    scheduler: Box<dyn SizeScheduler>,
    mode: InterpolationMode,
    align_corners: bool,
    preserve_range: bool,
    step: AtomicUsize,
}

impl ProgressiveResize {
    /// Creates a new progressive resize transform starting at step 0.
    ///
    /// # Parameters
    ///
    /// - `scheduler` - Maps the current step to a target spatial size
    /// - `mode` - Interpolation mode
    /// - `align_corners` - Align the corner points of input and output grids
    /// - `preserve_range` - Clamp each output to its input's value range
    /// - `keys` - Batch entries to apply the transform to
    ///
    /// # Returns
    ///
    /// - `Result<ProgressiveResize, TransformError>` - New transform on success
    ///
    /// # Errors
    ///
    /// - `TransformError::InputValidationError` - If `keys` is empty or
    ///   contains duplicates
    pub fn new<S>(
        scheduler: S,
        mode: InterpolationMode,
        align_corners: bool,
        preserve_range: bool,
        keys: Vec<String>,
    ) -> Result<Self, TransformError>
    where
        S: SizeScheduler + 'static,
    {
        validate_keys(&keys)?;
        Ok(Self {
            keys,
            scheduler: Box::new(scheduler),
            mode,
            align_corners,
            preserve_range,
            step: AtomicUsize::new(0),
        })
    }

    /// Returns the current step count
    pub fn step(&self) -> usize {
        self.step.load(Ordering::SeqCst)
    }

    /// Increments the step count by 1.
    ///
    /// # Returns
    ///
    /// * `&Self` - Reference to self to allow chaining
    pub fn increment(&self) -> &Self {
        self.step.fetch_add(1, Ordering::SeqCst);
        self
    }

    /// Resets the step count to 0.
    ///
    /// # Returns
    ///
    /// * `&Self` - Reference to self to allow chaining
    pub fn reset_step(&self) -> &Self {
        self.step.store(0, Ordering::SeqCst);
        self
    }

    get_field_as_ref!(get_keys, keys, &[String]);

    get_field!(get_mode, mode, InterpolationMode);
}

impl Transform for ProgressiveResize {
    fn apply(&mut self, batch: TensorBatch) -> Result<TensorBatch, TransformError> {
        let size = self.scheduler.size_for_step(self.step());
        let mode = self.mode;
        let align_corners = self.align_corners;
        let preserve_range = self.preserve_range;
        let batch = apply_to_keys(batch, &self.keys, |tensor| {
            ops::resize(tensor, Some(&size), None, mode, align_corners, preserve_range)
        })?;
        self.increment();
        Ok(batch)
    }

    fn transform_type(&self) -> &str {
        "ProgressiveResize"
    }
}
