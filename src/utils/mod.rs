/// Group of useful computations
pub mod computations;
/// Linear and 3D indices into a cubic cell grid
pub mod indices;
pub mod types;

pub use computations::*;
pub use indices::Index;
pub use types::Types;
