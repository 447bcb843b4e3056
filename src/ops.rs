/// Module that contains the interpolation engine used by the resize transforms
pub mod interpolation;
/// Module that contains pure spatial tensor functions (mirror, rotation, resize)
pub mod spatial;

mod helper_function;

pub use interpolation::{INTERPOLATION_PARALLEL_THRESHOLD, InterpolationMode, interpolate};
pub use spatial::{mirror, resize, rot90};
