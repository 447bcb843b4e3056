use crate::error::TransformError;

/// Maps a step count to a target spatial size.
///
/// Schedulers drive [`ProgressiveResize`](crate::transforms::ProgressiveResize):
/// the transform asks for the size of the current step before each resize.
/// Any `Fn(usize) -> Vec<usize>` closure is a scheduler, as is
/// [`SizeStepScheduler`].
pub trait SizeScheduler: Send + Sync {
    /// Returns the target spatial size for the given step
    fn size_for_step(&self, step: usize) -> Vec<usize>;
}

impl<F> SizeScheduler for F
where
    F: Fn(usize) -> Vec<usize> + Send + Sync,
{
    fn size_for_step(&self, step: usize) -> Vec<usize> {
        self(step)
    }
}

/// Scheduler switching to a new size whenever a milestone step is reached.
///
/// `sizes` includes the initial size, so it holds one element more than
/// `milestones`. A lookup walks the milestones from the largest downwards and
/// returns the size of the first milestone the step has reached.
///
/// # Example
/// ```rust
/// use rustyaug::transforms::{SizeScheduler, SizeStepScheduler};
///
/// let scheduler =
///     SizeStepScheduler::new(vec![10, 20], vec![vec![8, 8], vec![16, 16], vec![32, 32]]).unwrap();
///
/// assert_eq!(scheduler.size_for_step(0), vec![8, 8]);
/// assert_eq!(scheduler.size_for_step(10), vec![16, 16]);
/// assert_eq!(scheduler.size_for_step(25), vec![32, 32]);
/// ```
pub struct SizeStepScheduler {
    // (milestone, size) pairs sorted by milestone descending
    targets: Vec<(usize, Vec<usize>)>,
}

impl SizeStepScheduler {
    /// Creates a new milestone scheduler.
    ///
    /// # Parameters
    ///
    /// - `milestones` - Steps at which the size changes
    /// - `sizes` - Sizes corresponding to the milestones, including the
    ///   initial size as the first element
    ///
    /// # Returns
    ///
    /// - `Result<SizeStepScheduler, TransformError>` - New scheduler on success
    ///
    /// # Errors
    ///
    /// - `TransformError::InputValidationError` - If `sizes` does not hold
    ///   exactly one element more than `milestones`, or a size is empty or
    ///   contains a zero extent
    pub fn new(
        milestones: Vec<usize>,
        sizes: Vec<Vec<usize>>,
    ) -> Result<Self, TransformError> {
        if sizes.len() != milestones.len() + 1 {
            return Err(TransformError::InputValidationError(format!(
                "sizes must include the initial size and thus have one element more than milestones, got {} sizes for {} milestones",
                sizes.len(),
                milestones.len()
            )));
        }
        for size in &sizes {
            if size.is_empty() || size.iter().any(|&s| s == 0) {
                return Err(TransformError::InputValidationError(format!(
                    "scheduled sizes must be non-empty with positive extents, got {:?}",
                    size
                )));
            }
        }

        let mut targets: Vec<(usize, Vec<usize>)> = std::iter::once(0)
            .chain(milestones)
            .zip(sizes)
            .collect();
        targets.sort_by(|a, b| b.0.cmp(&a.0));
        Ok(Self { targets })
    }

    /// Returns the number of scheduled targets, including the initial size
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Returns `true` if the scheduler holds no targets
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl SizeScheduler for SizeStepScheduler {
    fn size_for_step(&self, step: usize) -> Vec<usize> {
        for (milestone, size) in &self.targets {
            if step >= *milestone {
                return size.clone();
            }
        }
        // Unreachable in practice: the initial size carries milestone 0
        self.targets
            .last()
            .map(|(_, size)| size.clone())
            .unwrap_or_default()
    }
}
