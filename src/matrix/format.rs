use core::fmt;

use crate::complex::format::{format_exp, format_fixed};

use super::Matrix;

/// Layout knobs for the column-aligned grid produced by [`Matrix`]'s
/// `Display` impl and [`Matrix::to_string_with`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormatOptions {
    /// Switch every cell to exponent notation once any finite part
    /// reaches this magnitude.
    pub exp_threshold: f64,
    /// Mantissa decimals in exponent notation.
    pub exp_digits: usize,
    /// Decimals in fixed notation when any element has a fractional part.
    pub decimal_digits: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            exp_threshold: 1e9,
            exp_digits: 4,
            decimal_digits: 4,
        }
    }
}

struct Cell {
    re_sign: char,
    re: String,
    im_sign: char,
    im: String,
}

fn right(text: &str, width: usize, out: &mut String) {
    for _ in text.chars().count()..width {
        out.push(' ');
    }
    out.push_str(text);
}

impl Matrix {
    /// Render the aligned grid with explicit layout options.
    ///
    /// A 1×1 matrix renders as its scalar. Otherwise every cell gets a sign
    /// column and a right-aligned magnitude; when any element is complex the
    /// imaginary part follows as `+ b i` / `- b i`. Rows end with `'\n'`.
    ///
    /// ```
    /// use zmatrix::{FormatOptions, Matrix};
    ///
    /// let m = Matrix::new("[1 -2; 3.5 4]").unwrap();
    /// assert_eq!(m.to_string(), " 1.0000 -2.0000\n 3.5000  4.0000\n");
    ///
    /// let opts = FormatOptions { decimal_digits: 1, ..FormatOptions::default() };
    /// assert_eq!(m.to_string_with(&opts), " 1.0 -2.0\n 3.5  4.0\n");
    /// ```
    pub fn to_string_with(&self, opts: &FormatOptions) -> String {
        if self.is_scalar() {
            return self.data[0].to_string();
        }

        let draw_imag = self.iter().any(|z| !z.is_real());
        let big = |x: f64| x.is_finite() && x.abs() >= opts.exp_threshold;
        let draw_exp = self.iter().any(|z| big(z.re) || big(z.im));
        let decimals = if self.iter().any(|z| z.decimal_position() > 0) {
            opts.decimal_digits
        } else {
            0
        };
        let render = |x: f64| {
            if draw_exp {
                format_exp(x, opts.exp_digits)
            } else {
                format_fixed(x, decimals)
            }
        };

        let mut width = 0;
        let cells: Vec<Cell> = self
            .iter()
            .map(|z| {
                let re = render(z.re.abs());
                width = width.max(re.len() + 1);
                let im = if draw_imag {
                    let im = render(z.im.abs());
                    width = width.max(im.len() + 1);
                    im
                } else {
                    String::new()
                };
                Cell {
                    re_sign: if z.re < 0.0 { '-' } else { ' ' },
                    re,
                    im_sign: if z.im < 0.0 { '-' } else { '+' },
                    im,
                }
            })
            .collect();

        let mut out = String::new();
        let mut signed = String::new();
        for (i, cell) in cells.iter().enumerate() {
            signed.clear();
            signed.push(cell.re_sign);
            signed.push_str(&cell.re);
            right(&signed, width, &mut out);
            if draw_imag {
                out.push(' ');
                out.push(cell.im_sign);
                right(&cell.im, width, &mut out);
                out.push('i');
            }
            out.push(if (i + 1) % self.ncols == 0 { '\n' } else { ' ' });
        }
        out
    }

    /// `[ a, b; c, d ]` with each element in its short `Display` form; a
    /// 1×1 matrix renders as the bare scalar. The result parses back with
    /// [`Matrix::new`].
    ///
    /// ```
    /// use zmatrix::Matrix;
    /// let m = Matrix::new("[1 2+i; 3 4]").unwrap();
    /// assert_eq!(m.to_one_line_string(), "[ 1, 2 + 1i; 3, 4 ]");
    /// assert!(Matrix::new(m.to_one_line_string()).unwrap().equals(&m));
    /// ```
    pub fn to_one_line_string(&self) -> String {
        if self.is_scalar() {
            return self.data[0].to_string();
        }
        let rows: Vec<String> = self
            .data
            .chunks(self.ncols)
            .map(|row| row.iter().map(ToString::to_string).collect::<Vec<_>>().join(", "))
            .collect();
        format!("[ {} ]", rows.join("; "))
    }

    /// `[a,b;c,d]` with every element at full precision, so that parsing the
    /// text gives back the identical matrix.
    pub fn to_literal_string(&self) -> String {
        let rows: Vec<String> = self
            .data
            .chunks(self.ncols)
            .map(|row| {
                row.iter()
                    .map(|z| z.to_literal_string())
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect();
        format!("[{}]", rows.join(";"))
    }
}

/// The default grid, computed on first use and cached for the lifetime of
/// the value.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(
            self.text
                .get_or_init(|| self.to_string_with(&FormatOptions::default())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Complex;

    fn m(s: &str) -> Matrix {
        Matrix::new(s).unwrap()
    }

    #[test]
    fn integer_grid() {
        assert_eq!(m("[1 2; 3 4]").to_string(), " 1  2\n 3  4\n");
        assert_eq!(m("[10 -2]").to_string(), " 10  -2\n");
    }

    #[test]
    fn complex_grid() {
        let s = m("[1+2i 3-4i]").to_string();
        assert_eq!(s, " 1 + 2i  3 - 4i\n");
    }

    #[test]
    fn exponent_grid() {
        let s = m("[1e10 1]").to_string();
        assert_eq!(s, " 1.0000e+010  1.0000e+000\n");
    }

    #[test]
    fn non_finite_cells() {
        let s = Matrix::from_vec(1, 2, vec![Complex::POSITIVE_INFINITY, Complex::NAN])
            .unwrap()
            .to_string();
        assert_eq!(s, " Inf  NaN\n");
    }

    #[test]
    fn scalar_renders_bare() {
        assert_eq!(m("[2.5]").to_string(), "2.5");
        assert_eq!(m("[2.5]").to_one_line_string(), "2.5");
    }

    #[test]
    fn literal_roundtrip() {
        let a = Matrix::from_fn(2, 2, |r, c| Complex::new(1.0 / (r + c + 3) as f64, -(r as f64) / 7.0));
        let text = a.to_literal_string();
        assert_eq!(m(&text), a);
    }

    #[test]
    fn display_is_cached() {
        let a = m("[1 2]");
        let first = a.to_string();
        assert_eq!(first, a.to_string());
        assert!(a.text.get().is_some());
    }
}
