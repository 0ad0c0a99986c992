mod animation;
mod camera;
mod derivative;
mod grid;
mod misc;
mod patch;
mod pipeline;
mod render;
mod surface;

pub mod prelude {
    pub use crate::animation::*;
    pub use crate::camera::*;
    pub use crate::derivative::*;
    pub use crate::grid::*;
    pub use crate::misc::*;
    pub use crate::patch::*;
    pub use crate::pipeline::*;
    pub use crate::render::*;
    pub use crate::surface::*;
}
