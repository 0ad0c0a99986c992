use nalgebra::convert;

use crate::misc::FloatingPoint;

/// A closed-form height function of the control point indices and time
pub trait Waveform<T: FloatingPoint> {
    fn height(&self, i: usize, j: usize, t: T) -> T;
}

impl<T: FloatingPoint, F> Waveform<T> for F
where
    F: Fn(usize, usize, T) -> T,
{
    fn height(&self, i: usize, j: usize, t: T) -> T {
        self(i, j, t)
    }
}

/// `row_amplitude * sin(i + t) + column_amplitude * sin(j + t) * cos(j + t)`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RippleWaveform<T> {
    pub row_amplitude: T,
    pub column_amplitude: T,
}

impl<T: FloatingPoint> RippleWaveform<T> {
    pub fn new(row_amplitude: T, column_amplitude: T) -> Self {
        Self {
            row_amplitude,
            column_amplitude,
        }
    }
}

impl<T: FloatingPoint> Default for RippleWaveform<T> {
    fn default() -> Self {
        Self {
            row_amplitude: convert(4.0),
            column_amplitude: convert(2.0),
        }
    }
}

impl<T: FloatingPoint> Waveform<T> for RippleWaveform<T> {
    fn height(&self, i: usize, j: usize, t: T) -> T {
        let u = T::from_index(i) + t;
        let v = T::from_index(j) + t;
        self.row_amplitude * u.sin() + self.column_amplitude * v.sin() * v.cos()
    }
}
