use nalgebra::{Point2, Vector2};

use crate::misc::FloatingPoint;

/// Pointer drag state machine of the camera
#[derive(Clone, Debug, PartialEq)]
pub enum DragState<T: FloatingPoint> {
    Idle,
    /// The primary pointer is held, `last` is the previous sample if any
    Dragging { last: Option<Point2<T>> },
}

impl<T: FloatingPoint> Default for DragState<T> {
    fn default() -> Self {
        DragState::Idle
    }
}

impl<T: FloatingPoint> DragState<T> {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// Primary pointer pressed: start a drag without a reference sample
    pub fn press(&mut self) {
        *self = DragState::Dragging { last: None };
    }

    pub fn release(&mut self) {
        *self = DragState::Idle;
    }

    /// Record a pointer sample and return the delta to the previous one.
    /// The first sample after a press only becomes the reference.
    pub fn sample(&mut self, x: T, y: T) -> Option<Vector2<T>> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { last } => {
                let current = Point2::new(x, y);
                last.replace(current).map(|previous| current - previous)
            }
        }
    }
}
