use crate::{misc::FloatingPoint, patch::PatchBuffer, render::FrameUniforms};

/// GPU side of the pipeline: owns the patch buffer object and the tessellation stages
///
/// Implementations declare patch primitives of twelve vertices
/// and consume the packed buffer verbatim.
pub trait RenderBridge<T: FloatingPoint> {
    /// Replace the whole GPU-side patch buffer
    fn upload(&mut self, patches: &PatchBuffer<T>) -> anyhow::Result<()>;

    /// Issue the draw call of the uploaded patches
    fn draw(&mut self, frame: &FrameUniforms<T>) -> anyhow::Result<()>;

    /// Wait for the display frame pacing and show the frame
    fn present(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}
