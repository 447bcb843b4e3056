use crate::error::TransformError;
use crate::random::input_validation_function::{validate_normal_params, validate_uniform_range};
use crate::random::{ParameterSampler, seed_rng};
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal, Uniform};

/// Parameter sampler drawing from a uniform distribution over `[low, high)`.
///
/// # Fields
///
/// - `low` - Inclusive lower bound of the range
/// - `high` - Exclusive upper bound of the range
///
/// # Example
/// ```rust
/// use rustyaug::random::{ParameterSampler, UniformParameter};
///
/// let mut param = UniformParameter::new(-1.0, 1.0, Some(42)).unwrap();
/// let values = param.sample(4).unwrap();
/// assert_eq!(values.len(), 4);
/// assert!(values.iter().all(|&v| (-1.0..1.0).contains(&v)));
/// ```
pub struct UniformParameter {
    low: f32,
    high: f32,
    distr: Uniform<f32>,
    rng: StdRng,
}

impl UniformParameter {
    /// Creates a new uniform parameter sampler.
    ///
    /// # Parameters
    ///
    /// - `low` - Inclusive lower bound of the range
    /// - `high` - Exclusive upper bound of the range
    /// - `random_state` - Random seed, `None` for OS entropy
    ///
    /// # Returns
    ///
    /// - `Result<UniformParameter, TransformError>` - New sampler on success
    ///
    /// # Errors
    ///
    /// - `TransformError::InputValidationError` - If a bound is not finite or
    ///   `low >= high`
    pub fn new(low: f32, high: f32, random_state: Option<u64>) -> Result<Self, TransformError> {
        validate_uniform_range(low, high)?;
        let distr = Uniform::new(low, high).map_err(|e| {
            TransformError::ProcessingError(format!("failed to build uniform distribution: {}", e))
        })?;
        Ok(Self {
            low,
            high,
            distr,
            rng: seed_rng(random_state),
        })
    }

    get_field!(get_low, low, f32);

    get_field!(get_high, high, f32);
}

impl ParameterSampler for UniformParameter {
    fn sample(&mut self, n_samples: usize) -> Result<Vec<f32>, TransformError> {
        Ok((0..n_samples)
            .map(|_| self.distr.sample(&mut self.rng))
            .collect())
    }
}

/// Parameter sampler drawing from a normal distribution.
///
/// # Fields
///
/// - `mean` - Mean of the distribution
/// - `std` - Standard deviation of the distribution, `0.0` degenerates to a
///   constant draw
///
/// # Example
/// ```rust
/// use rustyaug::random::{NormalParameter, ParameterSampler};
///
/// let mut param = NormalParameter::new(0.0, 1.0, Some(42)).unwrap();
/// let values = param.sample(8).unwrap();
/// assert_eq!(values.len(), 8);
/// ```
pub struct NormalParameter {
    mean: f32,
    std: f32,
    distr: Normal<f32>,
    rng: StdRng,
}

impl NormalParameter {
    /// Creates a new normal parameter sampler.
    ///
    /// # Parameters
    ///
    /// - `mean` - Mean of the distribution
    /// - `std` - Standard deviation, must be non-negative
    /// - `random_state` - Random seed, `None` for OS entropy
    ///
    /// # Returns
    ///
    /// - `Result<NormalParameter, TransformError>` - New sampler on success
    ///
    /// # Errors
    ///
    /// - `TransformError::InputValidationError` - If a parameter is not
    ///   finite or `std` is negative
    pub fn new(mean: f32, std: f32, random_state: Option<u64>) -> Result<Self, TransformError> {
        validate_normal_params(mean, std)?;
        let distr = Normal::new(mean, std).map_err(|e| {
            TransformError::ProcessingError(format!("failed to build normal distribution: {}", e))
        })?;
        Ok(Self {
            mean,
            std,
            distr,
            rng: seed_rng(random_state),
        })
    }

    get_field!(get_mean, mean, f32);

    get_field!(get_std, std, f32);
}

impl ParameterSampler for NormalParameter {
    fn sample(&mut self, n_samples: usize) -> Result<Vec<f32>, TransformError> {
        Ok((0..n_samples)
            .map(|_| self.distr.sample(&mut self.rng))
            .collect())
    }
}
