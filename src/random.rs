/// Module that contains the constant parameter sampler
pub mod constant;
/// Module that contains continuous parameter samplers (uniform, normal)
pub mod continuous;
/// Module that contains the discrete parameter sampler
pub mod discrete;

mod input_validation_function;

pub use constant::ConstantParameter;
pub use continuous::{NormalParameter, UniformParameter};
pub use discrete::DiscreteParameter;

use crate::batch::Tensor;
use crate::error::TransformError;
use ndarray::IxDyn;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Builds a random number generator from an optional seed.
///
/// Seeded generators make transform output reproducible; without a seed the
/// generator is initialized from the operating system.
pub(crate) fn seed_rng(random_state: Option<u64>) -> StdRng {
    match random_state {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Source of random values for transform arguments.
///
/// Implementors provide [`sample`](ParameterSampler::sample), which draws a
/// requested number of raw values. The provided [`draw`](ParameterSampler::draw)
/// and [`draw_scalar`](ParameterSampler::draw_scalar) methods handle the shape
/// bookkeeping on top: `draw` computes the element count of the requested
/// shape, samples, broadcasts a single value to the full count when the
/// implementor yields one value for a larger request, and reshapes the flat
/// samples to the target shape.
///
/// Transforms own samplers and call them once per application, so one draw
/// parameterizes every selected batch entry identically.
///
/// # Example
/// ```rust
/// use rustyaug::random::{ParameterSampler, UniformParameter};
///
/// let mut scale = UniformParameter::new(0.75, 1.25, Some(7)).unwrap();
///
/// // One value per spatial dimension of a 2D image
/// let factors = scale.draw(&[2]).unwrap();
/// assert_eq!(factors.shape(), &[2]);
/// assert!(factors.iter().all(|&f| (0.75..1.25).contains(&f)));
///
/// // A bare scalar draw
/// let single = scale.draw_scalar().unwrap();
/// assert!((0.75..1.25).contains(&single));
/// ```
pub trait ParameterSampler {
    /// Draws `n_samples` raw values from the underlying distribution.
    ///
    /// # Parameters
    ///
    /// * `n_samples` - Number of values to draw
    ///
    /// # Returns
    ///
    /// * `Result<Vec<f32>, TransformError>` - The drawn values on success
    fn sample(&mut self, n_samples: usize) -> Result<Vec<f32>, TransformError>;

    /// Draws values shaped to `size`.
    ///
    /// The number of samples is the element count of `size`; an empty slice
    /// describes a 0-dimensional tensor holding a single value. When the
    /// implementor returns exactly one value for a larger request, the value
    /// is broadcast to the full element count.
    ///
    /// # Parameters
    ///
    /// * `size` - Target shape of the drawn tensor
    ///
    /// # Returns
    ///
    /// * `Result<Tensor, TransformError>` - Tensor of drawn values with shape `size`
    ///
    /// # Errors
    ///
    /// - `TransformError::ProcessingError` - If the implementor returns a
    ///   sample count that is neither 1 nor the requested count, or if the
    ///   samples cannot be shaped to `size`
    fn draw(&mut self, size: &[usize]) -> Result<Tensor, TransformError> {
        let n_samples: usize = size.iter().product();
        let mut samples = self.sample(n_samples)?;

        if samples.len() == 1 && n_samples > 1 {
            samples = vec![samples[0]; n_samples];
        } else if samples.len() != n_samples {
            return Err(TransformError::ProcessingError(format!(
                "sampler returned {} values for a request of {}",
                samples.len(),
                n_samples
            )));
        }

        Tensor::from_shape_vec(IxDyn(size), samples).map_err(|e| {
            TransformError::ProcessingError(format!(
                "cannot reshape samples to {:?}: {}",
                size, e
            ))
        })
    }

    /// Draws a single unshaped value.
    ///
    /// # Returns
    ///
    /// * `Result<f32, TransformError>` - The drawn value on success
    fn draw_scalar(&mut self) -> Result<f32, TransformError> {
        let samples = self.sample(1)?;
        samples.into_iter().next().ok_or_else(|| {
            TransformError::ProcessingError(
                "sampler returned no values for a request of 1".to_string(),
            )
        })
    }
}
