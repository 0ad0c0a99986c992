pub mod surface_state;
pub use surface_state::*;
