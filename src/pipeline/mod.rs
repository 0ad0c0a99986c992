pub mod command;
pub mod frame_host;
pub mod pipeline_options;
pub mod surface_pipeline;
pub use command::*;
pub use frame_host::*;
pub use pipeline_options::*;
pub use surface_pipeline::*;
