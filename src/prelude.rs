/// Prelude module for parameter samplers.
pub mod random_prelude;
/// Prelude module for batch transforms and tensor operations.
pub mod transform_prelude;

pub use random_prelude::*;
pub use transform_prelude::*;
