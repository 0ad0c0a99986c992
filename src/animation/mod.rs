pub mod frame_clock;
pub mod surface_animator;
pub mod waveform;
pub use frame_clock::*;
pub use surface_animator::*;
pub use waveform::*;
