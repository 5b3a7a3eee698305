use nalgebra::RealField;
use num_traits::ToPrimitive;

/// Trait for floating point types (f32, f64)
/// Mainly used to identify the type of the coordinates in nalgebra
pub trait FloatingPoint: RealField + ToPrimitive + Copy {
    /// Convert from `f64`, used to carry interpolation weights into the coordinate type
    fn from_f64_lossy(value: f64) -> Self {
        <Self as num_traits::FromPrimitive>::from_f64(value)
            .unwrap_or_else(<Self as num_traits::Zero>::zero)
    }

    /// Check that the value is neither NaN nor infinite
    fn is_finite_value(&self) -> bool {
        ToPrimitive::to_f64(self).is_some_and(f64::is_finite)
    }
}

impl FloatingPoint for f32 {}
impl FloatingPoint for f64 {}
