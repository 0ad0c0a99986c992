use crate::misc::FloatingPoint;

/// Tracks the simulated time between frames
#[derive(Clone, Debug, Default)]
pub struct FrameClock<T> {
    previous: Option<T>,
    delta: T,
    frames: u64,
}

impl<T: FloatingPoint> FrameClock<T> {
    pub fn new() -> Self {
        Self {
            previous: None,
            delta: T::zero(),
            frames: 0,
        }
    }

    /// Advance to `now` and return the elapsed time since the previous tick.
    /// The first tick has no reference and yields zero.
    pub fn tick(&mut self, now: T) -> T {
        self.delta = match self.previous {
            Some(previous) => now - previous,
            None => T::zero(),
        };
        self.previous = Some(now);
        self.frames += 1;
        self.delta
    }

    pub fn delta(&self) -> T {
        self.delta
    }

    /// Current simulated time, zero before the first tick
    pub fn time(&self) -> T {
        self.previous.unwrap_or_else(T::zero)
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn first_tick_has_no_delta() {
        let mut clock = FrameClock::<f64>::new();
        assert_eq!(clock.tick(3.5), 0.);
        assert_relative_eq!(clock.tick(3.75), 0.25);
        assert_relative_eq!(clock.time(), 3.75);
        assert_eq!(clock.frames(), 2);
    }
}
