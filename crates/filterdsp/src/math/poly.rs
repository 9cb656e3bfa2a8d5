//! Polynomials with complex roots and coefficients.
use alloc::vec::Vec;
use num_complex::Complex64;

/// Expands the monic polynomial with the given `roots`.
///
/// Coefficients are returned in descending powers, i.e., `poly(&[r])` is
/// `[1, -r]`. An empty set of roots yields the constant polynomial `[1]`.
pub fn poly(roots: &[Complex64]) -> Vec<Complex64> {
    let mut coeffs = Vec::with_capacity(roots.len() + 1);
    coeffs.push(Complex64::new(1.0, 0.0));
    for root in roots {
        coeffs.push(Complex64::new(0.0, 0.0));
        for k in (1..coeffs.len()).rev() {
            let prev = coeffs[k - 1];
            coeffs[k] -= root * prev;
        }
    }
    coeffs
}

/// Evaluates `Σ c[k] x^k` with Horner's scheme.
///
/// Coefficients are in ascending powers, which is the layout of filter taps
/// when `x = z^-1`.
pub fn polyval_ascending(coeffs: &[f64], x: Complex64) -> Complex64 {
    coeffs
        .iter()
        .rev()
        .fold(Complex64::new(0.0, 0.0), |acc, &c| acc * x + c)
}

/// Product of all `values`; one for an empty slice.
pub fn product(values: impl IntoIterator<Item = Complex64>) -> Complex64 {
    values
        .into_iter()
        .fold(Complex64::new(1.0, 0.0), |acc, v| acc * v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_real_roots() {
        let c = poly(&[Complex64::new(1.0, 0.0), Complex64::new(2.0, 0.0)]);
        let re: Vec<f64> = c.iter().map(|c| c.re).collect();
        assert_eq!(re, vec![1.0, -3.0, 2.0]);
        assert!(c.iter().all(|c| c.im == 0.0));
    }

    #[test]
    fn conjugate_pairs_give_real_coefficients() {
        let c = poly(&[Complex64::new(0.5, 0.5), Complex64::new(0.5, -0.5)]);
        assert_eq!(c.len(), 3);
        assert!((c[1].re + 1.0).abs() < 1e-15);
        assert!((c[2].re - 0.5).abs() < 1e-15);
        assert!(c.iter().all(|c| c.im.abs() < 1e-15));
    }

    #[test]
    fn no_roots_is_constant() {
        assert_eq!(poly(&[]), vec![Complex64::new(1.0, 0.0)]);
    }

    #[test]
    fn horner_matches_direct_sum() {
        let x = Complex64::new(0.3, -0.7);
        let v = polyval_ascending(&[1.0, 2.0, 3.0], x);
        let direct = 1.0 + x * 2.0 + x * x * 3.0;
        assert!((v - direct).norm() < 1e-12);
    }
}
