/// A macro that generates a getter method for any field.
///
/// This macro creates a public getter method that returns the value
/// of the specified field. The generated method includes appropriate documentation
/// describing the field being accessed.
///
/// # Parameters
///
/// - `$method_name` - The name of the getter method (e.g., get_prob)
/// - `$field_name` - The name of the field to access (e.g., prob)
/// - `$return_type` - The return type of the getter method
///
/// # Generated Method
///
/// The macro generates a method that returns the field value,
/// with documentation that describes what field is being accessed.
macro_rules! get_field {
    ($method_name:ident, $field_name:ident, $return_type:ty) => {
        #[doc = concat!("Gets the `", stringify!($field_name), "` field.\n\n")]
        #[doc = "# Returns\n\n"]
        #[doc = concat!("* `", stringify!($return_type), "` - The value of the `", stringify!($field_name), "` field")]
        pub fn $method_name(&self) -> $return_type {
            self.$field_name
        }
    };
}

/// A macro that generates a public getter method returning a reference to a field.
///
/// This macro creates a method that provides immutable reference access to a private field
/// in a struct, following the Rust convention of getter methods.
///
/// # Parameters
///
/// - `$method_name` - The identifier for the generated getter method name
/// - `$field_name` - The identifier of the struct field to access
/// - `$return_type` - The type expression for the return value (typically a reference type like `&Type`)
///
/// # Generated Method
///
/// The macro generates a method that returns the field value as a reference,
/// with documentation that describes what field is being accessed
macro_rules! get_field_as_ref {
    ($method_name:ident, $field_name:ident, $return_type:ty) => {
        #[doc = concat!("Gets the `", stringify!($field_name), "` field.\n\n")]
        #[doc = "# Returns\n\n"]
        #[doc = concat!("* `", stringify!($return_type), "` - The value of the `", stringify!($field_name), "` field as a reference")]
        pub fn $method_name(&self) -> $return_type {
            self.$field_name.as_ref()
        }
    };
}

/// Module `batch` contains the tensor alias and the named tensor batch.
///
/// A [`batch::TensorBatch`] is a dictionary of named `f32` tensors; spatial
/// transforms select the entries they operate on by key, so an image and its
/// segmentation mask can travel through the same pipeline while a label
/// tensor passes through untouched.
///
/// # Example
/// ```rust
/// use rustyaug::batch::TensorBatch;
/// use ndarray::Array4;
///
/// let mut batch = TensorBatch::new();
/// batch.insert("data", Array4::<f32>::zeros((2, 3, 32, 32)).into_dyn());
/// batch.insert("mask", Array4::<f32>::zeros((2, 1, 32, 32)).into_dyn());
/// assert_eq!(batch.len(), 2);
/// ```
pub mod batch;

/// Module `error` contains the crate-wide error type.
pub mod error;

/// Module `ops` contains pure spatial tensor functions.
///
/// These are the stateless building blocks the transforms delegate to:
/// mirroring, 90 degree rotation and resampling of tensors shaped
/// `[batch_size, channels, spatial...]` with one to three spatial dimensions.
///
/// # Core Functions
///
/// - `mirror` - Flip along selected spatial dimensions
/// - `rot90` - Rotate by multiples of 90 degrees in a spatial plane
/// - `interpolate` - Nearest / linear / bilinear / trilinear / area resampling
/// - `resize` - Interpolation plus optional value-range preservation
///
/// # Example
/// ```rust
/// use rustyaug::ops::{interpolate, InterpolationMode};
/// use ndarray::Array4;
///
/// let input = Array4::<f32>::zeros((2, 3, 16, 16)).into_dyn();
/// let half = interpolate(&input, Some(&[8, 8]), None, InterpolationMode::Bilinear, false).unwrap();
/// assert_eq!(half.shape(), &[2, 3, 8, 8]);
/// ```
pub mod ops;

/// Module `random` contains the parameter samplers that inject randomness
/// into transform arguments.
///
/// The [`random::ParameterSampler`] trait produces raw values and ships a
/// provided `draw` method that handles the shape bookkeeping: element count
/// calculation, single-value broadcast and reshaping to the requested target
/// shape.
///
/// # Available Samplers
///
/// - **UniformParameter**: uniform values over `[low, high)`
/// - **NormalParameter**: Gaussian values with configurable mean and std
/// - **ConstantParameter**: a fixed value, for deterministic arguments
/// - **DiscreteParameter**: draws from a value pool, optionally weighted,
///   with or without replacement
///
/// # Example
/// ```rust
/// use rustyaug::random::{ParameterSampler, UniformParameter};
///
/// let mut scale = UniformParameter::new(0.75, 1.25, Some(42)).unwrap();
/// let factors = scale.draw(&[3]).unwrap();
/// assert_eq!(factors.shape(), &[3]);
/// ```
pub mod random;

/// Module `transforms` contains the randomized batch transforms.
///
/// Every transform implements [`transforms::Transform`], consuming a batch
/// and returning the augmented batch. Randomized transforms draw their
/// parameters once per call and apply them to every selected key, keeping
/// paired tensors aligned.
///
/// # Available Transforms
///
/// - **Mirror**: deterministic or probabilistic flips along spatial dimensions
/// - **Rot90**: probability-gated random 90 degree rotations
/// - **Resize**: resampling to a fixed spatial size
/// - **Zoom**: resampling by sampled per-dimension scale factors
/// - **ProgressiveResize**: scheduled resampling with a shared step counter
/// - **Compose**: an ordered pipeline of boxed transforms
///
/// # Schedulers
///
/// - **SizeScheduler**: trait mapping a step count to a spatial size,
///   implemented by any matching closure
/// - **SizeStepScheduler**: milestone-based size switching
///
/// # Example
/// ```rust
/// use rustyaug::batch::TensorBatch;
/// use rustyaug::ops::InterpolationMode;
/// use rustyaug::transforms::{Compose, Mirror, Transform, Zoom};
/// use ndarray::Array4;
///
/// let mut pipeline = Compose::new();
/// pipeline
///     .add(Mirror::with_prob(vec![0, 1], 0.5, vec!["data".to_string()], Some(42)).unwrap())
///     .add(
///         Zoom::new(
///             (0.75, 1.25),
///             InterpolationMode::Bilinear,
///             false,
///             false,
///             vec!["data".to_string()],
///             Some(42),
///         )
///         .unwrap(),
///     );
///
/// let mut batch = TensorBatch::new();
/// batch.insert("data", Array4::<f32>::zeros((4, 3, 24, 24)).into_dyn());
/// let batch = pipeline.apply(batch).unwrap();
/// assert_eq!(batch.get("data").unwrap().shape()[..2], [4, 3]);
/// ```
pub mod transforms;

/// A convenience module that re-exports the most commonly used types and traits from this crate.
///
/// This module provides a single import point for frequently used items,
/// enabling quick access to essential components with a single `use` statement.
///
/// # Available Components
///
/// ## Batch Transforms
/// - Spatial transforms (Mirror, Rot90, Resize, Zoom, ProgressiveResize)
/// - Pipeline composition (Compose) and the Transform trait
/// - Size schedulers (SizeScheduler, SizeStepScheduler)
///
/// ## Parameter Samplers
/// - UniformParameter, NormalParameter, ConstantParameter, DiscreteParameter
/// - The ParameterSampler trait with shaped draws
///
/// ## Tensor Operations
/// - mirror, rot90, interpolate, resize and the InterpolationMode enum
/// - The Tensor alias and TensorBatch container
///
/// # Examples
/// ```rust
/// use rustyaug::prelude::*;
///
/// // Quick access to all commonly used components
/// ```
pub mod prelude;

#[cfg(test)]
mod test;
