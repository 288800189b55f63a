use core::cmp::Ordering;

use zmatrix::{Complex, Error, Matrix, VectorMode};

const TOL: f64 = 1e-12;

fn c(re: f64, im: f64) -> Complex {
    Complex::new(re, im)
}

fn assert_complex_near(a: Complex, b: Complex, tol: f64, msg: &str) {
    assert!(
        (a.re - b.re).abs() < tol && (a.im - b.im).abs() < tol,
        "{}: {} vs {}",
        msg,
        a,
        b
    );
}

// ── Arithmetic ───────────────────────────────────────────────────────

#[test]
fn field_operations() {
    let a = c(3.0, -2.0);
    let b = c(-1.0, 4.0);
    assert_eq!(a + b, c(2.0, 2.0));
    assert_eq!(a - b, c(4.0, -6.0));
    assert_eq!(a * b, c(5.0, 14.0));
    assert_complex_near((a * b) / b, a, TOL, "(a·b)/b");
    assert_complex_near(a * a.inv(), Complex::ONE, TOL, "a·a⁻¹");
    assert_eq!(-a, c(-3.0, 2.0));
    assert_eq!(a + 1.0, c(4.0, -2.0));
    assert_eq!(2.0 * a, c(6.0, -4.0));
}

#[test]
fn dot_conjugates_left_operand() {
    assert_eq!(Complex::I.dot(Complex::I), Complex::ONE);
    assert_eq!(c(1.0, 2.0).dot(c(3.0, 0.0)), c(3.0, -6.0));
}

#[test]
fn division_by_zero_propagates_non_finite() {
    assert!((Complex::ZERO / Complex::ZERO).is_nan());
    assert!((Complex::ONE / Complex::ZERO).is_infinite());
}

#[test]
fn iterator_sum_and_product() {
    let v = [c(1.0, 1.0), c(2.0, -1.0), c(-0.5, 0.0)];
    assert_eq!(v.iter().sum::<Complex>(), c(2.5, 0.0));
    assert_eq!(v.iter().product::<Complex>(), c(-1.5, -0.5));
}

#[test]
fn remainder_and_modulo() {
    assert_eq!(Complex::from(7.5).rem(2.0).unwrap(), Complex::from(1.5));
    assert_eq!(Complex::from(-7.0).modulo(3.0).unwrap(), Complex::from(2.0));
    assert_eq!(Complex::from(5.0).modulo(0.0).unwrap(), Complex::from(5.0));
    assert!(Complex::from(5.0).rem(0.0).unwrap().is_nan());
    assert_eq!(Complex::I.modulo(2.0), Err(Error::NotReal { op: "mod" }));
}

// ── Elementary functions ─────────────────────────────────────────────

#[test]
fn exp_log_inverse() {
    for z in [c(1.5, -2.0), c(-3.0, 0.5), c(0.2, 0.0), c(0.0, 2.5)] {
        assert_complex_near(z.log().exp(), z, 1e-12, "exp(log z)");
        assert_complex_near(z.exp().log(), z, 1e-12, "log(exp z)");
    }
    assert_complex_near(Complex::from(-1.0).log(), c(0.0, core::f64::consts::PI), TOL, "log(-1)");
}

#[test]
fn roots() {
    let z = c(-4.0, 3.0);
    assert_complex_near(z.sqrt() * z.sqrt(), z, TOL, "sqrt²");
    assert_complex_near(z.rsqrt() * z.sqrt(), Complex::ONE, TOL, "rsqrt·sqrt");
    assert_eq!(Complex::from(-9.0).sqrt(), c(0.0, 3.0));
    for branch in 0..3 {
        let r = z.cbrt(branch);
        assert_complex_near(r * r * r, z, 1e-12, "cbrt³");
    }
    assert_complex_near(Complex::from(8.0).cbrt(0), Complex::from(2.0), TOL, "principal");
}

#[test]
fn trigonometric_identities() {
    for z in [c(0.3, 0.4), c(-1.2, 0.7), c(0.5, 0.0)] {
        let s = z.sin();
        let k = z.cos();
        assert_complex_near(s * s + k * k, Complex::ONE, 1e-12, "sin²+cos²");
        assert_complex_near(z.tan(), s / k, 1e-12, "tan");
        assert_complex_near(z.sin().asin(), z, 1e-10, "asin(sin z)");
        assert_complex_near(z.tan().atan(), z, 1e-10, "atan(tan z)");
        assert_complex_near(z.sec(), k.inv(), 1e-12, "sec");
    }
    assert_complex_near(
        Complex::from(1.0).atan2(Complex::from(-1.0)).unwrap(),
        Complex::from(3.0 * core::f64::consts::FRAC_PI_4),
        TOL,
        "atan2",
    );
    assert!(Complex::I.atan2(Complex::ONE).is_err());
}

#[test]
fn hyperbolic_identities() {
    for z in [c(0.3, 0.4), c(-1.2, 0.7), c(0.5, 0.0)] {
        let s = z.sinh();
        let k = z.cosh();
        assert_complex_near(k * k - s * s, Complex::ONE, 1e-12, "cosh²-sinh²");
        assert_complex_near(z.sinh().asinh(), z, 1e-10, "asinh(sinh z)");
        assert_complex_near(z.tanh().atanh(), z, 1e-10, "atanh(tanh z)");
    }
    assert_eq!(Complex::from(1000.0).tanh(), Complex::ONE);
    assert_eq!(Complex::from(-1000.0).tanh(), Complex::MINUS_ONE);
}

#[test]
fn sinc_at_zero_is_one() {
    assert_eq!(Complex::ZERO.sinc(), Complex::ONE);
    assert!(Complex::from(1.0).sinc().norm() < 1e-15);
}

// ── Special functions ────────────────────────────────────────────────

#[test]
fn special_values() {
    assert_complex_near(Complex::from(5.0).gamma(), Complex::from(24.0), 1e-9, "Γ(5)");
    assert_complex_near(Complex::from(0.5).gamma(), Complex::from(core::f64::consts::PI.sqrt()), 1e-10, "Γ(½)");
    assert_eq!(Complex::from(5.0).factorial(), Complex::from(120.0));
    assert_complex_near(Complex::from(5.0).nchoosek(2.0), Complex::from(10.0), 1e-9, "5C2");
    assert_complex_near(Complex::from(2.0).beta(3.0), Complex::from(1.0 / 12.0), 1e-10, "B(2,3)");
    assert_eq!(Complex::ZERO.erf(), Complex::ZERO);
    let x = Complex::from(0.5);
    assert_complex_near(x.erf().erfinv(), x, 1e-9, "erfinv(erf x)");
    assert_complex_near(x.erfc().erfcinv(), x, 1e-9, "erfcinv(erfc x)");
}

// ── Ordering ─────────────────────────────────────────────────────────

#[test]
fn ordering_uses_sum_of_parts() {
    assert_eq!(c(1.0, 2.0).compare_to(&c(3.0, 0.0)), Some(Ordering::Equal));
    assert_eq!(c(1.0, 2.0).compare_to(&c(0.0, 2.0)), Some(Ordering::Greater));
    assert_eq!(c(1.0, 0.0).compare_to_tol(&c(1.05, 0.0), 0.1), Some(Ordering::Equal));
    assert_eq!(c(1.0, 0.0).compare_to_tol(&c(1.2, 0.0), 0.1), Some(Ordering::Less));
}

#[test]
fn ordering_with_non_finite_values() {
    let inf = Complex::POSITIVE_INFINITY;
    let ninf = Complex::NEGATIVE_INFINITY;
    let one = Complex::ONE;
    assert_eq!(inf.compare_to(&inf), Some(Ordering::Equal));
    assert_eq!(one.compare_to(&inf), Some(Ordering::Less));
    assert_eq!(one.compare_to(&ninf), Some(Ordering::Greater));
    assert_eq!(inf.compare_to(&one), Some(Ordering::Greater));
    assert_eq!(ninf.compare_to(&one), Some(Ordering::Less));
    assert_eq!(inf.compare_to(&ninf), None);
    assert_eq!(one.compare_to(&Complex::NAN), None);
    assert_eq!(one.compare_to(&c(f64::INFINITY, f64::NEG_INFINITY)), None);
}

#[test]
fn max_min_clip() {
    let a = c(1.0, 1.0);
    let b = Complex::from(3.0);
    assert_eq!(a.max(b), b);
    assert_eq!(a.min(b), a);
    assert_eq!(Complex::from(-2.0).clip(Complex::ZERO, b).unwrap(), Complex::ZERO);
    assert!(a.clip(b, Complex::ZERO).is_err());
}

#[test]
fn matrix_reductions_follow_scalar_ordering() {
    let v = Matrix::new("[1+2i 4 -1 2i]").unwrap();
    assert_eq!(v.max(VectorMode::Auto).scalar().unwrap(), Complex::from(4.0));
    assert_eq!(v.min(VectorMode::Auto).scalar().unwrap(), Complex::from(-1.0));
}

// ── Rounding and predicates ──────────────────────────────────────────

#[test]
fn rounding_acts_on_both_parts() {
    let z = c(2.5, -1.5);
    assert_eq!(z.floor(), c(2.0, -2.0));
    assert_eq!(z.ceil(), c(3.0, -1.0));
    assert_eq!(z.round(), c(3.0, -2.0));
    assert_eq!(z.fix(), c(2.0, -1.0));
    // fractional part is taken against floor
    assert_eq!(z.fract(), c(0.5, 0.5));
}

#[test]
fn sign_of_complex_is_unit_direction() {
    assert_eq!(Complex::from(-3.0).sign(), Complex::MINUS_ONE);
    assert_complex_near(c(3.0, 4.0).sign(), c(0.6, 0.8), TOL, "z/|z|");
    assert!(c(1.0, f64::INFINITY).sign().is_nan());
}

#[test]
fn predicates() {
    assert!(Complex::from(2.0).is_real());
    assert!(c(0.0, 1.0).is_complex());
    assert!(Complex::from(-0.5).is_negative());
    assert!(Complex::ZERO.is_not_negative());
    assert!(Complex::NEGATIVE_INFINITY.is_negative_infinity());
    assert!(Complex::NAN.is_nan());
    assert!(!Complex::NAN.equals(&Complex::NAN));
    assert!(c(1.0, 1e-17).equals(&Complex::ONE));
}

#[test]
fn polar_round_trip() {
    let z = Complex::from_polar(2.0, core::f64::consts::FRAC_PI_3);
    assert!((z.abs() - 2.0).abs() < TOL);
    assert!((z.arg() - core::f64::consts::FRAC_PI_3).abs() < TOL);
}

// ── num-complex interop ──────────────────────────────────────────────

#[cfg(feature = "complex")]
mod interop {
    use super::*;
    use zmatrix::IntoComplex;

    #[test]
    fn converts_both_ways() {
        let n = num_complex::Complex::new(1.5, -2.0);
        let z = Complex::from(n);
        assert_eq!(z, c(1.5, -2.0));
        let back: num_complex::Complex<f64> = z.into();
        assert_eq!(back, n);
        assert_eq!(n.into_complex().unwrap(), z);
    }

    #[test]
    fn products_agree() {
        let a = num_complex::Complex::new(0.3, 1.7);
        let b = num_complex::Complex::new(-2.1, 0.4);
        let ours = Complex::from(a) * Complex::from(b);
        assert_complex_near(ours, Complex::from(a * b), 1e-15, "a·b");
        assert_complex_near(Complex::from(a).exp(), Complex::from(a.exp()), 1e-14, "exp");
    }
}
