use crate::misc::FloatingPoint;

/// Discrete commands bound to keys by the host
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    IncreaseTessellation,
    DecreaseTessellation,
    MoveForward,
    MoveBackward,
    OrbitLeft,
    OrbitRight,
    StrafeUp,
    StrafeDown,
    ToggleCentering,
    ToggleWireframe,
}

/// Input polled from the host at the start of a frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent<T: FloatingPoint> {
    Command(Command),
    /// Primary pointer button pressed
    PointerPressed,
    /// Primary pointer button released
    PointerReleased,
    PointerMoved {
        x: T,
        y: T,
    },
}

impl<T: FloatingPoint> From<Command> for InputEvent<T> {
    fn from(command: Command) -> Self {
        InputEvent::Command(command)
    }
}
