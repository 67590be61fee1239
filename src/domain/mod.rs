pub mod turbine;
pub mod types;

pub use turbine::*;
pub use types::*;
