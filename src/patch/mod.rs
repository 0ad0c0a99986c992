pub mod patch_buffer;
pub use patch_buffer::*;

/// Vertices per patch primitive: 4 corners, then `du` and `dv` at each corner
pub const PATCH_VERTEX_COUNT: usize = 12;

/// Components per packed vector
pub const VECTOR_COMPONENTS: usize = 3;

/// Scalars per packed patch
pub const FLOATS_PER_PATCH: usize = PATCH_VERTEX_COUNT * VECTOR_COMPONENTS;
