/// Module that contains the transform pipeline
pub mod compose;
/// Module that contains the mirror transform
pub mod mirror;
/// Module that contains the progressive resize transform
pub mod progressive;
/// Module that contains the fixed-size resize transform
pub mod resize;
/// Module that contains the random 90 degree rotation transform
pub mod rotate;
/// Module that contains the size schedulers
pub mod scheduler;
/// Module that contains the common transform interface
pub mod transform_trait;
/// Module that contains the random zoom transform
pub mod zoom;

mod helper_function;
mod input_validation_function;

pub use compose::Compose;
pub use mirror::Mirror;
pub use progressive::ProgressiveResize;
pub use resize::Resize;
pub use rotate::Rot90;
pub use scheduler::{SizeScheduler, SizeStepScheduler};
pub use transform_trait::Transform;
pub use zoom::{DEFAULT_ZOOM_RANGE, Zoom};
