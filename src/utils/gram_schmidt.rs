use crate::math::*;

/// Splits `p` into its component along the unit vector `n` and the tangential remainder.
///
/// Returns `(p_n, p_t)` with `p_n = p · n` and `p_t = p - p_n * n`.
#[inline]
pub fn gram_schmidt(p: &Vector<Real>, n: &UnitVector<Real>) -> (Real, Vector<Real>) {
    let p_n = p.dot(n);
    (p_n, p - n.into_inner() * p_n)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn tangential_part_is_orthogonal() {
        let n = UnitVector::new_normalize(Vector::new(1.0, 1.0, 0.0));
        let p = Vector::new(3.0, -1.0, 2.0);
        let (p_n, p_t) = gram_schmidt(&p, &n);

        assert_relative_eq!(p_t.dot(&n), 0.0, epsilon = 1.0e-6);
        assert_relative_eq!(n.into_inner() * p_n + p_t, p, epsilon = 1.0e-6);
    }
}
