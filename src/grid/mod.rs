pub mod control_grid;
pub mod grid_error;
pub use control_grid::*;
pub use grid_error::*;
