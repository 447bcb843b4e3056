pub use crate::batch::{Tensor, TensorBatch};
pub use crate::error::TransformError;
pub use crate::ops::{InterpolationMode, interpolate, mirror, resize, rot90};
pub use crate::transforms::{
    Compose, DEFAULT_ZOOM_RANGE, Mirror, ProgressiveResize, Resize, Rot90, SizeScheduler,
    SizeStepScheduler, Transform, Zoom,
};
