use core::fmt;

use super::Complex;

/// Six significant digits, trailing zeros trimmed, exponent form outside
/// `[1e-6, 1e6)` (`1.23457e+7`).
pub(crate) fn format_g(x: f64) -> String {
    if let Some(s) = non_finite(x) {
        return s.to_string();
    }
    if x == 0.0 {
        return "0".to_string();
    }
    let sci = format!("{:.5e}", x);
    let (mantissa, exp) = split_exponent(&sci);
    if !(-6..6).contains(&exp) {
        let m = trim_zeros(mantissa);
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{m}e{sign}{}", exp.abs())
    } else {
        let decimals = (5 - exp) as usize;
        trim_zeros(&format!("{:.*}", decimals, x)).to_string()
    }
}

/// Fixed notation with `decimals` digits after the point.
pub(crate) fn format_fixed(x: f64, decimals: usize) -> String {
    match non_finite(x) {
        Some(s) => s.to_string(),
        None => format!("{:.*}", decimals, x),
    }
}

/// Exponent notation with `digits` mantissa decimals and a three-digit
/// signed exponent (`1.2346e+009`).
pub(crate) fn format_exp(x: f64, digits: usize) -> String {
    if let Some(s) = non_finite(x) {
        return s.to_string();
    }
    let sci = format!("{:.*e}", digits, x);
    let (mantissa, exp) = split_exponent(&sci);
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:03}", exp.abs())
}

/// Shortest round-trip text, switching to exponent form for very large or
/// very small magnitudes so the output stays compact.
pub(crate) fn format_literal(x: f64) -> String {
    if let Some(s) = non_finite(x) {
        return s.to_string();
    }
    let a = x.abs();
    if a != 0.0 && !(1e-6..1e21).contains(&a) {
        format!("{:e}", x)
    } else {
        format!("{}", x)
    }
}

fn non_finite(x: f64) -> Option<&'static str> {
    if x.is_nan() {
        Some("NaN")
    } else if x == f64::INFINITY {
        Some("Inf")
    } else if x == f64::NEG_INFINITY {
        Some("-Inf")
    } else {
        None
    }
}

fn split_exponent(sci: &str) -> (&str, i32) {
    match sci.split_once('e') {
        Some((m, e)) => (m, e.parse().unwrap_or(0)),
        None => (sci, 0),
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

impl Complex {
    /// Full-precision text that parses back to the identical value.
    ///
    /// ```
    /// use zmatrix::Complex;
    /// let z = Complex::new(0.1, -1.0 / 3.0);
    /// let text = z.to_literal_string();
    /// assert_eq!(text.parse::<Complex>().unwrap(), z);
    /// ```
    pub fn to_literal_string(&self) -> String {
        if self.im == 0.0 {
            return format_literal(self.re);
        }
        let im = format_literal(self.im);
        if self.re == 0.0 {
            format!("{im}i")
        } else if self.im >= 0.0 || self.im.is_nan() {
            format!("{}+{im}i", format_literal(self.re))
        } else {
            format!("{}{im}i", format_literal(self.re))
        }
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_real() {
            return f.write_str(&format_g(self.re));
        }
        if self.re == 0.0 {
            write!(f, "{}i", format_g(self.im))
        } else if self.im >= 0.0 || self.im.is_nan() {
            write!(f, "{} + {}i", format_g(self.re), format_g(self.im))
        } else {
            write!(f, "{} - {}i", format_g(self.re), format_g(-self.im))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_g_fixed_range() {
        assert_eq!(format_g(1.0), "1");
        assert_eq!(format_g(-2.5), "-2.5");
        assert_eq!(format_g(0.1 + 0.2), "0.3");
        assert_eq!(format_g(123456.0), "123456");
        assert_eq!(format_g(3.14159265), "3.14159");
        assert_eq!(format_g(0.000001), "0.000001");
        assert_eq!(format_g(-0.0), "0");
    }

    #[test]
    fn format_g_exponent_range() {
        assert_eq!(format_g(1234567.0), "1.23457e+6");
        assert_eq!(format_g(1e21), "1e+21");
        assert_eq!(format_g(1.5e-7), "1.5e-7");
        assert_eq!(format_g(f64::NEG_INFINITY), "-Inf");
        assert_eq!(format_g(f64::NAN), "NaN");
    }

    #[test]
    fn format_exp_pads_exponent() {
        assert_eq!(format_exp(1234567890.0, 4), "1.2346e+009");
        assert_eq!(format_exp(2.0e-12, 4), "2.0000e-012");
        assert_eq!(format_exp(5.0e120, 4), "5.0000e+120");
    }

    #[test]
    fn display_complex() {
        assert_eq!(Complex::new(1.0, 2.0).to_string(), "1 + 2i");
        assert_eq!(Complex::new(1.0, -2.0).to_string(), "1 - 2i");
        assert_eq!(Complex::new(0.0, -2.0).to_string(), "-2i");
        assert_eq!(Complex::new(3.0, 1e-17).to_string(), "3");
        assert_eq!(Complex::new(f64::INFINITY, 0.0).to_string(), "Inf");
    }

    #[test]
    fn literal_roundtrip() {
        for z in [
            Complex::new(1.0 / 3.0, 0.0),
            Complex::new(-2.0, -0.1),
            Complex::new(0.0, 7.25),
            Complex::new(1e300, -1e-300),
            Complex::new(f64::NEG_INFINITY, 0.0),
        ] {
            let back: Complex = z.to_literal_string().parse().unwrap();
            assert_eq!(back, z, "{}", z.to_literal_string());
        }
    }
}
