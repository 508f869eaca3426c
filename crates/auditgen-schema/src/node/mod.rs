mod audit;
mod domain;
mod field;

pub use audit::*;
pub use domain::*;
pub use field::*;
