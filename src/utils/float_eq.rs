use crate::math::Real;
use na::ComplexField;

/// Relative tolerance used by [`float_eq`].
pub const FLOAT_EQ_EPSILON: Real = 5.960_464_5e-8;

/// Relative-epsilon equality of two scalars.
///
/// Both `|(a - b) / b|` and `|(a - b) / a|` must be smaller than [`FLOAT_EQ_EPSILON`], so two
/// distinct values are never equal when one of them is zero.
pub fn float_eq(a: Real, b: Real) -> bool {
    if a == b {
        return true;
    }

    let diff = a - b;
    ComplexField::abs(diff / b) < FLOAT_EQ_EPSILON && ComplexField::abs(diff / a) < FLOAT_EQ_EPSILON
}

#[cfg(test)]
mod test {
    use super::float_eq;

    #[test]
    fn float_eq_is_relative() {
        assert!(float_eq(1.0, 1.0));
        assert!(float_eq(1.0e6, 1.0e6 + 0.01));
        assert!(!float_eq(1.0, 1.001));
        assert!(!float_eq(0.0, 1.0e-30));
        assert!(float_eq(0.0, 0.0));
    }
}
