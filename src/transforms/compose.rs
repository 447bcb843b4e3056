use crate::batch::TensorBatch;
use crate::error::TransformError;
use crate::transforms::Transform;

/// An ordered pipeline of transforms applied left to right.
///
/// # Fields
///
/// - `transforms` - The transforms in application order, stored as boxed
///   trait objects
///
/// # Example
/// ```rust
/// use rustyaug::batch::TensorBatch;
/// use rustyaug::ops::InterpolationMode;
/// use rustyaug::transforms::{Compose, Mirror, Resize, Transform};
/// use ndarray::Array4;
///
/// let mut pipeline = Compose::new();
/// pipeline
///     .add(Mirror::with_prob(vec![0, 1], 0.5, vec!["data".to_string()], Some(42)).unwrap())
///     .add(
///         Resize::new(
///             vec![8],
///             InterpolationMode::Nearest,
///             false,
///             false,
///             vec!["data".to_string()],
///         )
///         .unwrap(),
///     );
///
/// let mut batch = TensorBatch::new();
/// batch.insert("data", Array4::<f32>::zeros((2, 3, 16, 16)).into_dyn());
/// let batch = pipeline.apply(batch).unwrap();
///
/// assert_eq!(batch.get("data").unwrap().shape(), &[2, 3, 8, 8]);
/// ```
#[derive(Default)]
pub struct Compose {
    transforms: Vec<Box<dyn Transform>>,
}

impl Compose {
    /// Creates a new empty pipeline
    ///
    /// # Returns
    ///
    /// * `Compose` - an empty pipeline
    pub fn new() -> Self {
        Self {
            transforms: Vec::new(),
        }
    }

    /// Adds a transform to the end of the pipeline
    ///
    /// Supports method chaining pattern
    ///
    /// # Parameters
    ///
    /// * `transform` - The transform to append
    ///
    /// # Returns
    ///
    /// * `&mut Compose` - Mutable reference to self for method chaining
    pub fn add<T: 'static + Transform>(&mut self, transform: T) -> &mut Self {
        self.transforms.push(Box::new(transform));
        self
    }

    /// Returns the number of transforms in the pipeline
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Returns `true` if the pipeline holds no transforms
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }
}

impl Transform for Compose {
    fn apply(&mut self, batch: TensorBatch) -> Result<TensorBatch, TransformError> {
        let mut batch = batch;
        for transform in &mut self.transforms {
            batch = transform.apply(batch)?;
        }
        Ok(batch)
    }

    fn transform_type(&self) -> &str {
        "Compose"
    }
}
