use nalgebra::{convert, RealField};
use num_traits::ToPrimitive;

/// Trait for floating point types (f32, f64)
/// Mainly used to identify the scalar type of grids, derivatives and packed patches
pub trait FloatingPoint: RealField + ToPrimitive + Copy {
    /// Convert a grid row or column index into the scalar type
    fn from_index(index: usize) -> Self {
        convert(index as f64)
    }
}

impl FloatingPoint for f32 {}
impl FloatingPoint for f64 {}

#[cfg(test)]
mod tests {
    use super::FloatingPoint;

    #[test]
    fn index_conversion() {
        assert_eq!(f32::from_index(7), 7.0);
        assert_eq!(f64::from_index(0), 0.0);
    }
}
