pub mod frame_uniforms;
pub mod render_bridge;
pub mod render_settings;
pub use frame_uniforms::*;
pub use render_bridge::*;
pub use render_settings::*;
