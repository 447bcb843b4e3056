use crate::error::TransformError;
use crate::random::input_validation_function::{validate_pool_not_empty, validate_weights};
use crate::random::{ParameterSampler, seed_rng};
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::rngs::StdRng;
use rand::seq::index;

/// Parameter sampler drawing from a fixed pool of values.
///
/// Draws are without replacement by default, so a single call never repeats a
/// pool entry; successive calls are independent. Optional weights bias the
/// selection.
///
/// The pool may hold any cloneable value - transforms use this to sample
/// dimension pairs or rotation counts. A pool of `f32` values additionally
/// acts as a [`ParameterSampler`].
///
/// # Fields
///
/// - `pool` - Values to draw from
/// - `replacement` - Whether one call may return the same entry twice
/// - `weights` - Optional selection weights, one per pool entry
///
/// # Example
/// ```rust
/// use rustyaug::random::DiscreteParameter;
///
/// let mut rotations = DiscreteParameter::new(vec![0_usize, 1, 2, 3], Some(42)).unwrap();
/// let k = rotations.choose_one().unwrap();
/// assert!(k < 4);
/// ```
pub struct DiscreteParameter<T> {
    pool: Vec<T>,
    replacement: bool,
    weights: Option<Vec<f64>>,
    rng: StdRng,
}

impl<T: Clone> DiscreteParameter<T> {
    /// Creates a new discrete parameter sampler drawing without replacement.
    ///
    /// # Parameters
    ///
    /// - `pool` - Values to draw from, must not be empty
    /// - `random_state` - Random seed, `None` for OS entropy
    ///
    /// # Returns
    ///
    /// - `Result<DiscreteParameter<T>, TransformError>` - New sampler on success
    ///
    /// # Errors
    ///
    /// - `TransformError::InputValidationError` - If the pool is empty
    pub fn new(pool: Vec<T>, random_state: Option<u64>) -> Result<Self, TransformError> {
        validate_pool_not_empty(pool.len())?;
        Ok(Self {
            pool,
            replacement: false,
            weights: None,
            rng: seed_rng(random_state),
        })
    }

    /// Creates a new discrete parameter sampler drawing with replacement.
    ///
    /// # Parameters
    ///
    /// - `pool` - Values to draw from, must not be empty
    /// - `random_state` - Random seed, `None` for OS entropy
    ///
    /// # Errors
    ///
    /// - `TransformError::InputValidationError` - If the pool is empty
    pub fn with_replacement(pool: Vec<T>, random_state: Option<u64>) -> Result<Self, TransformError> {
        validate_pool_not_empty(pool.len())?;
        Ok(Self {
            pool,
            replacement: true,
            weights: None,
            rng: seed_rng(random_state),
        })
    }

    /// Creates a new weighted discrete parameter sampler.
    ///
    /// # Parameters
    ///
    /// - `pool` - Values to draw from, must not be empty
    /// - `weights` - Selection weights, one non-negative finite value per
    ///   pool entry, not all zero
    /// - `replacement` - Whether one call may return the same entry twice
    /// - `random_state` - Random seed, `None` for OS entropy
    ///
    /// # Errors
    ///
    /// - `TransformError::InputValidationError` - If the pool is empty or the
    ///   weights do not describe it
    pub fn with_weights(
        pool: Vec<T>,
        weights: Vec<f64>,
        replacement: bool,
        random_state: Option<u64>,
    ) -> Result<Self, TransformError> {
        validate_pool_not_empty(pool.len())?;
        validate_weights(pool.len(), &weights)?;
        Ok(Self {
            pool,
            replacement,
            weights: Some(weights),
            rng: seed_rng(random_state),
        })
    }

    /// Draws `n_samples` values from the pool.
    ///
    /// # Parameters
    ///
    /// * `n_samples` - Number of values to draw
    ///
    /// # Returns
    ///
    /// * `Result<Vec<T>, TransformError>` - The drawn values on success
    ///
    /// # Errors
    ///
    /// - `TransformError::InputValidationError` - If more samples than pool
    ///   entries are requested without replacement
    /// - `TransformError::ProcessingError` - If the weighted selection runs
    ///   out of positive-weight entries
    pub fn choose(&mut self, n_samples: usize) -> Result<Vec<T>, TransformError> {
        if n_samples == 0 {
            return Ok(Vec::new());
        }
        if !self.replacement && n_samples > self.pool.len() {
            return Err(TransformError::InputValidationError(format!(
                "cannot draw {} samples from a pool of {} without replacement",
                n_samples,
                self.pool.len()
            )));
        }

        match (&self.weights, self.replacement) {
            (None, true) => Ok((0..n_samples)
                .map(|_| self.pool[self.rng.random_range(0..self.pool.len())].clone())
                .collect()),
            (None, false) => {
                let chosen = index::sample(&mut self.rng, self.pool.len(), n_samples);
                Ok(chosen.iter().map(|i| self.pool[i].clone()).collect())
            }
            (Some(weights), true) => {
                let distr = WeightedIndex::new(weights.iter().copied()).map_err(|e| {
                    TransformError::ProcessingError(format!(
                        "failed to build weighted selection: {}",
                        e
                    ))
                })?;
                Ok((0..n_samples)
                    .map(|_| self.pool[distr.sample(&mut self.rng)].clone())
                    .collect())
            }
            (Some(weights), false) => {
                // Sequential weighted draws, zeroing the weight of each entry
                // once it has been taken.
                let mut remaining = weights.clone();
                let mut drawn = Vec::with_capacity(n_samples);
                for _ in 0..n_samples {
                    let distr = WeightedIndex::new(remaining.iter().copied()).map_err(|e| {
                        TransformError::ProcessingError(format!(
                            "failed to draw without replacement from weighted pool: {}",
                            e
                        ))
                    })?;
                    let i = distr.sample(&mut self.rng);
                    drawn.push(self.pool[i].clone());
                    remaining[i] = 0.0;
                }
                Ok(drawn)
            }
        }
    }

    /// Draws a single value from the pool.
    ///
    /// # Returns
    ///
    /// * `Result<T, TransformError>` - The drawn value on success
    pub fn choose_one(&mut self) -> Result<T, TransformError> {
        self.choose(1)?.into_iter().next().ok_or_else(|| {
            TransformError::ProcessingError(
                "discrete sampler returned no values for a request of 1".to_string(),
            )
        })
    }

    /// Returns the number of entries in the pool
    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    get_field!(get_replacement, replacement, bool);
}

impl ParameterSampler for DiscreteParameter<f32> {
    fn sample(&mut self, n_samples: usize) -> Result<Vec<f32>, TransformError> {
        self.choose(n_samples)
    }
}
