use crate::{misc::FloatingPoint, pipeline::InputEvent};

/// Window side of the frame loop: event polling, timing and framebuffer size
pub trait FrameHost<T: FloatingPoint> {
    /// Drain the input received since the previous frame
    fn poll_events(&mut self) -> Vec<InputEvent<T>>;

    /// Seconds elapsed since startup, drives the animation
    fn elapsed(&self) -> T;

    /// Framebuffer size in pixels
    fn framebuffer_size(&self) -> (u32, u32);

    fn close_requested(&self) -> bool;
}
