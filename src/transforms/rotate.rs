use crate::batch::TensorBatch;
use crate::error::TransformError;
use crate::ops;
use crate::random::{DiscreteParameter, seed_rng};
use crate::transforms::Transform;
use crate::transforms::helper_function::apply_to_keys;
use crate::transforms::input_validation_function::{
    validate_keys, validate_probability, validate_transform_dims,
};
use rand::Rng;
use rand::rngs::StdRng;

/// Random 90 degree rotation transform.
///
/// Each call is gated by `prob`; when it fires, an ordered pair of spatial
/// dimensions is drawn from all 2-permutations of the configured dimensions
/// and a rotation count is drawn from `{0, 1, 2, 3}`. Every selected key is
/// then rotated by the same amount in the same plane, so paired tensors stay
/// aligned.
///
/// # Fields
///
/// - `keys` - Batch entries the transform is applied to
/// - `prob` - Probability of rotating at all on a given call
/// - `dim_pairs` - Sampler over the ordered rotation-plane candidates
/// - `num_rots` - Sampler over the rotation counts
///
/// # Example
/// ```rust
/// use rustyaug::batch::TensorBatch;
/// use rustyaug::transforms::{Rot90, Transform};
/// use ndarray::Array4;
///
/// let mut batch = TensorBatch::new();
/// batch.insert("data", Array4::<f32>::zeros((2, 3, 8, 8)).into_dyn());
///
/// let mut transform =
///     Rot90::new(vec![0, 1], 1.0, vec!["data".to_string()], Some(42)).unwrap();
/// let batch = transform.apply(batch).unwrap();
///
/// // Square spatial extents keep the shape stable for every rotation count
/// assert_eq!(batch.get("data").unwrap().shape(), &[2, 3, 8, 8]);
/// ```
pub struct Rot90 {
    keys: Vec<String>,
    prob: f32,
    dim_pairs: DiscreteParameter<(usize, usize)>,
    num_rots: DiscreteParameter<usize>,
    rng: StdRng,
}

impl Rot90 {
    /// Creates a new random rotation transform.
    ///
    /// If more than two dimensions are configured, each call randomly picks
    /// the plane to rotate in.
    ///
    /// # Parameters
    ///
    /// - `dims` - Spatial dimensions eligible for rotation, at least two
    /// - `prob` - Probability of rotating on a given call, in `[0.0, 1.0]`
    /// - `keys` - Batch entries to apply the transform to
    /// - `random_state` - Random seed, `None` for OS entropy
    ///
    /// # Returns
    ///
    /// - `Result<Rot90, TransformError>` - New transform on success
    ///
    /// # Errors
    ///
    /// - `TransformError::InputValidationError` - If fewer than two distinct
    ///   dimensions are given, `keys` is invalid, or `prob` is outside
    ///   `[0.0, 1.0]`
    pub fn new(
        dims: Vec<usize>,
        prob: f32,
        keys: Vec<String>,
        random_state: Option<u64>,
    ) -> Result<Self, TransformError> {
        validate_keys(&keys)?;
        validate_probability(prob)?;
        validate_transform_dims(&dims, 2)?;

        // All ordered pairs of distinct configured dimensions
        let mut pairs = Vec::with_capacity(dims.len() * (dims.len() - 1));
        for &first in &dims {
            for &second in &dims {
                if first != second {
                    pairs.push((first, second));
                }
            }
        }

        let dim_pairs = DiscreteParameter::new(pairs, random_state.map(|s| s.wrapping_add(1)))?;
        let num_rots =
            DiscreteParameter::new(vec![0, 1, 2, 3], random_state.map(|s| s.wrapping_add(2)))?;

        Ok(Self {
            keys,
            prob,
            dim_pairs,
            num_rots,
            rng: seed_rng(random_state),
        })
    }

    get_field_as_ref!(get_keys, keys, &[String]);

    get_field!(get_prob, prob, f32);
}

impl Transform for Rot90 {
    fn apply(&mut self, batch: TensorBatch) -> Result<TensorBatch, TransformError> {
        if self.rng.random::<f32>() >= self.prob {
            return Ok(batch);
        }

        let k = self.num_rots.choose_one()?;
        let dims = self.dim_pairs.choose_one()?;
        apply_to_keys(batch, &self.keys, |tensor| ops::rot90(tensor, k, dims))
    }

    fn transform_type(&self) -> &str {
        "Rot90"
    }
}
