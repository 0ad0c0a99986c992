pub mod derivative_field;
pub use derivative_field::*;
