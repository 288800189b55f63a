//! Real special functions.
//!
//! Backs the special-function family on [`Complex`](crate::Complex), which
//! evaluates these on the real part.
//!
//! # Functions
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`gamma`] | Gamma function Γ(x) |
//! | [`lgamma`] | Log-gamma ln Γ(x) |
//! | [`factorial`] | x! = Γ(x+1), exact for integers |
//! | [`nchoosek`] | Binomial coefficient |
//! | [`beta`] | Beta function B(a,b) = Γ(a)Γ(b)/Γ(a+b) |
//! | [`lbeta`] | Log-beta ln B(a,b) |
//! | [`erf`] | Error function |
//! | [`erfc`] | Complementary error function 1−erf(x) |
//! | [`erfinv`] | Inverse error function |
//! | [`erfcinv`] | Inverse complementary error function |
//!
//! # Example
//!
//! ```
//! use zmatrix::special::{beta, erf, erfinv, gamma};
//!
//! assert!((gamma(5.0) - 24.0).abs() < 1e-12);
//! assert!((beta(2.0, 3.0) - beta(3.0, 2.0)).abs() < 1e-14);
//! assert!(erf(0.0).abs() < 1e-16);
//! assert!((erfinv(erf(0.3)) - 0.3).abs() < 1e-10);
//! ```

mod beta_fn;
mod erf_fn;
mod gamma_fn;


pub use beta_fn::{beta, lbeta};
pub use erf_fn::{erf, erfc, erfcinv, erfinv};
pub use gamma_fn::{factorial, gamma, lgamma, nchoosek};

// ---------------------------------------------------------------------------
// Lanczos approximation constants (g = 7, n = 9)
// ---------------------------------------------------------------------------

/// Lanczos parameter g.
pub(crate) const LANCZOS_G: f64 = 7.0;

/// Lanczos series coefficients (n = 9).
pub(crate) const LANCZOS_COEFFS: [f64; 9] = [
    0.99999999999980993,
    676.5203681218851,
    -1259.1392167224028,
    771.32342877765313,
    -176.61502916214059,
    12.507343278686905,
    -0.13857109526572012,
    9.9843695780195716e-6,
    1.5056327351493116e-7,
];

/// Ag(z) = c0 + c1/(z+1) + c2/(z+2) + ...
#[inline]
pub(crate) fn lanczos_sum(z: f64) -> f64 {
    LANCZOS_COEFFS[1..]
        .iter()
        .enumerate()
        .fold(LANCZOS_COEFFS[0], |sum, (i, &c)| sum + c / (z + (i + 1) as f64))
}
