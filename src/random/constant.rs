use crate::error::TransformError;
use crate::random::ParameterSampler;

/// Parameter sampler that always yields the same value.
///
/// Useful wherever a transform expects a sampler but the argument should stay
/// fixed, e.g. a zoom with a deterministic scale factor.
///
/// # Example
/// ```rust
/// use rustyaug::random::{ConstantParameter, ParameterSampler};
///
/// let mut param = ConstantParameter::new(0.5);
/// assert_eq!(param.sample(3).unwrap(), vec![0.5, 0.5, 0.5]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ConstantParameter {
    value: f32,
}

impl ConstantParameter {
    /// Creates a new constant parameter sampler yielding `value`
    pub fn new(value: f32) -> Self {
        Self { value }
    }

    get_field!(get_value, value, f32);
}

impl ParameterSampler for ConstantParameter {
    fn sample(&mut self, n_samples: usize) -> Result<Vec<f32>, TransformError> {
        Ok(vec![self.value; n_samples])
    }
}
