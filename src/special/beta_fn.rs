//! Beta function and log-beta via lgamma.

use super::gamma_fn::lgamma;

/// Beta function B(a, b) = Γ(a)·Γ(b) / Γ(a+b).
///
/// Computed as `exp(lbeta(a, b))` so large arguments do not overflow.
///
/// ```
/// use zmatrix::special::beta;
///
/// assert!((beta(1.0, 1.0) - 1.0).abs() < 1e-14);
/// assert!((beta(2.0, 3.0) - 1.0 / 12.0).abs() < 1e-14);
/// ```
pub fn beta(a: f64, b: f64) -> f64 {
    lbeta(a, b).exp()
}

/// ln B(a, b) = lgamma(a) + lgamma(b) − lgamma(a+b).
pub fn lbeta(a: f64, b: f64) -> f64 {
    lgamma(a) + lgamma(b) - lgamma(a + b)
}
