use crate::batch::TensorBatch;
use crate::error::TransformError;
use crate::ops;
use crate::random::seed_rng;
use crate::transforms::Transform;
use crate::transforms::helper_function::apply_to_keys;
use crate::transforms::input_validation_function::{
    validate_keys, validate_probability, validate_transform_dims,
};
use rand::Rng;
use rand::rngs::StdRng;

/// Mirror transform flipping batch entries along spatial dimensions.
///
/// In its deterministic form every configured dimension is flipped on every
/// call. The randomized form flips each configured dimension independently
/// with probability `prob`, so over many calls every subset of the configured
/// dimensions occurs. Within one call the same flips are applied to every
/// selected key.
///
/// # Fields
///
/// - `keys` - Batch entries the transform is applied to
/// - `dims` - Spatial dimensions considered for flipping
/// - `prob` - Per-dimension flip probability, `None` for deterministic flips
///
/// # Example
/// ```rust
/// use rustyaug::batch::TensorBatch;
/// use rustyaug::transforms::{Mirror, Transform};
/// use ndarray::array;
///
/// let mut batch = TensorBatch::new();
/// batch.insert("data", array![[[1.0_f32, 2.0, 3.0]]].into_dyn());
///
/// let mut transform = Mirror::new(vec![0], vec!["data".to_string()]).unwrap();
/// let batch = transform.apply(batch).unwrap();
///
/// let flipped = batch.get("data").unwrap();
/// assert_eq!(flipped[[0, 0, 0]], 3.0);
/// assert_eq!(flipped[[0, 0, 2]], 1.0);
/// ```
pub struct Mirror {
    keys: Vec<String>,
    dims: Vec<usize>,
    prob: Option<f32>,
    rng: StdRng,
}

impl Mirror {
    /// Creates a deterministic mirror transform flipping all configured
    /// dimensions on every call.
    ///
    /// # Parameters
    ///
    /// - `dims` - Spatial dimensions to flip
    /// - `keys` - Batch entries to apply the transform to
    ///
    /// # Returns
    ///
    /// - `Result<Mirror, TransformError>` - New transform on success
    ///
    /// # Errors
    ///
    /// - `TransformError::InputValidationError` - If `dims` or `keys` is
    ///   empty or contains duplicates
    pub fn new(dims: Vec<usize>, keys: Vec<String>) -> Result<Self, TransformError> {
        validate_keys(&keys)?;
        validate_transform_dims(&dims, 1)?;
        Ok(Self {
            keys,
            dims,
            prob: None,
            rng: seed_rng(None),
        })
    }

    /// Creates a randomized mirror transform flipping each configured
    /// dimension independently with probability `prob`.
    ///
    /// # Parameters
    ///
    /// - `dims` - Spatial dimensions considered for flipping
    /// - `prob` - Per-dimension flip probability in `[0.0, 1.0]`
    /// - `keys` - Batch entries to apply the transform to
    /// - `random_state` - Random seed, `None` for OS entropy
    ///
    /// # Returns
    ///
    /// - `Result<Mirror, TransformError>` - New transform on success
    ///
    /// # Errors
    ///
    /// - `TransformError::InputValidationError` - If `dims` or `keys` is
    ///   invalid or `prob` is outside `[0.0, 1.0]`
    pub fn with_prob(
        dims: Vec<usize>,
        prob: f32,
        keys: Vec<String>,
        random_state: Option<u64>,
    ) -> Result<Self, TransformError> {
        validate_keys(&keys)?;
        validate_transform_dims(&dims, 1)?;
        validate_probability(prob)?;
        Ok(Self {
            keys,
            dims,
            prob: Some(prob),
            rng: seed_rng(random_state),
        })
    }

    get_field_as_ref!(get_keys, keys, &[String]);

    get_field_as_ref!(get_dims, dims, &[usize]);

    get_field!(get_prob, prob, Option<f32>);
}

impl Transform for Mirror {
    fn apply(&mut self, batch: TensorBatch) -> Result<TensorBatch, TransformError> {
        let dims: Vec<usize> = match self.prob {
            None => self.dims.clone(),
            Some(prob) => self
                .dims
                .iter()
                .copied()
                .filter(|_| self.rng.random::<f32>() < prob)
                .collect(),
        };

        if dims.is_empty() {
            return Ok(batch);
        }
        apply_to_keys(batch, &self.keys, |tensor| ops::mirror(tensor, &dims))
    }

    fn transform_type(&self) -> &str {
        "Mirror"
    }
}
