pub mod camera_controller;
pub mod camera_options;
pub mod drag_state;
pub use camera_controller::*;
pub use camera_options::*;
pub use drag_state::*;

#[cfg(test)]
mod tests;
