//! Mathematical special functions.
use num_traits::Float;

const SMALL: [f64; 7] = [
    1.0, 3.5156229, 3.0899424, 1.2067492, 0.2659732, 0.0360768, 0.0045813,
];
const LARGE: [f64; 9] = [
    0.39894228,
    0.01328592,
    0.00225319,
    -0.00157565,
    0.00916281,
    -0.02057706,
    0.02635537,
    -0.01647633,
    0.00392377,
];

/// Modified Bessel function of the first kind of order zero.
///
/// Polynomial approximation from Abramowitz and Stegun (eqs. 9.8.1 and
/// 9.8.2). The absolute error is below 1.6e-7 for `|x| <= 3.75` and below
/// 1.9e-7 above. Since `I0` is even, negative arguments are mirrored.
///
/// ```
/// use filterdsp::math::special_funs::besseli0;
///
/// assert_eq!(besseli0(0.0), 1.0);
/// ```
pub fn besseli0(x: f64) -> f64 {
    let ax = x.abs();
    if ax <= 3.75 {
        let t2 = Float::powi(x / 3.75, 2);
        SMALL.iter().rev().fold(0.0, |acc, c| acc * t2 + c)
    } else {
        let u = 3.75 / ax;
        let series = LARGE.iter().rev().fold(0.0, |acc, c| acc * u + c);
        series * Float::exp(ax) / Float::sqrt(ax)
    }
}

#[cfg(test)]
#[allow(clippy::excessive_precision)]
mod tests {
    use super::*;

    fn check(xs: &[f64], want: &[f64], abs_epsilon: f64) {
        let rel_epsilon = 1.0e-7;
        for (x, w) in xs.iter().zip(want) {
            let tol = abs_epsilon + rel_epsilon * w.abs();
            let have = besseli0(*x);
            assert!((have - w).abs() < tol, "abs({have} - {w}) < {tol} (x={x})");
        }
    }

    #[test]
    fn besseli0_small_arguments() {
        check(
            &[-3.75, -1.5, -0.1, 0.0, 0.01, 0.3, 1.0, 2.0, 3.0, 3.75],
            &[
                9.118945860844564,
                1.646723189772891,
                1.002501562934095,
                1.000000000000000,
                1.000025000156250,
                1.022626879351597,
                1.266065877752008,
                2.279585302336067,
                4.880792585865025,
                9.118945860844564,
            ],
            1.6e-7,
        );
    }

    #[test]
    fn besseli0_large_arguments() {
        check(
            &[3.8, 5.0, 8.0, 10.0, -10.0],
            &[
                9.516888026098954,
                27.239871823604449,
                4.275641157218048e2,
                2.815716628466255e3,
                2.815716628466255e3,
            ],
            1.9e-7,
        );
    }
}
