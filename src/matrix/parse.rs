//! Matrix literal grammar.
//!
//! Three forms, tried in order:
//!
//! 1. `[ ... ]` with an optional run of trailing `'` (odd count means
//!    conjugate transpose). Inside, nested `[a, b]` groups are JSON-style
//!    rows; otherwise rows are split on `;` and elements on whitespace or
//!    commas, with `a:b` / `a:step:b` ranges.
//! 2. Unbracketed text that contains `;`, `,` or two numbers separated by
//!    whitespace is read as MATLAB-style rows. Trailing `'` marks work as
//!    in the bracketed form.
//! 3. Anything else is a single complex literal.

use crate::complex::parse::ElementParser;
use crate::{Complex, Error, Result};

use super::Matrix;

pub(crate) fn parse_matrix(text: &str) -> Result<Matrix> {
    let trimmed = text.trim();
    let (body, transpose) = strip_quotes(trimmed);

    if body.len() >= 2 && body.starts_with('[') && body.ends_with(']') {
        let inner = &body[1..body.len() - 1];
        let rows = if inner.contains(['[', ']']) {
            json_rows(text, inner)?
        } else {
            matlab_rows(inner)?
        };
        let m = Matrix::from_rows(rows)?;
        return Ok(if transpose { m.ctranspose() } else { m });
    }

    if body.contains([';', ',']) || has_spaced_digits(body) {
        let flat: String = body
            .chars()
            .filter(|&c| c != '[' && c != ']')
            .map(|c| if c == ',' { ' ' } else { c })
            .collect();
        let m = Matrix::from_rows(matlab_rows(&flat)?)?;
        return Ok(if transpose { m.ctranspose() } else { m });
    }

    if trimmed.is_empty() {
        return Err(Error::Empty);
    }
    let z: Complex = trimmed.parse()?;
    Ok(Matrix::from_parts(1, 1, vec![z]))
}

/// Split off trailing `'` marks (whitespace between them allowed).
fn strip_quotes(text: &str) -> (&str, bool) {
    if !text.ends_with('\'') {
        return (text, false);
    }
    let body = text.trim_end_matches(|c: char| c == '\'' || c.is_whitespace());
    let quotes = text[body.len()..].chars().filter(|&c| c == '\'').count();
    (body, quotes % 2 == 1)
}

fn has_spaced_digits(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let mut j = i + 1;
            while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                j += 1;
            }
            if j > i + 1 && j < bytes.len() && bytes[j].is_ascii_digit() {
                return true;
            }
        }
        i += 1;
    }
    false
}

/// `[1, 2], [3, 4]`: each bracket group is a row of comma-separated
/// literals.
fn json_rows(text: &str, inner: &str) -> Result<Vec<Vec<Complex>>> {
    let mut rows = Vec::new();
    let mut rest = inner;
    loop {
        rest = rest.trim_start_matches(|c: char| c == ',' || c.is_whitespace());
        if rest.is_empty() {
            return Ok(rows);
        }
        let body = rest
            .strip_prefix('[')
            .ok_or_else(|| Error::parse(text, "expected '[' to open a row"))?;
        let close = body
            .find(']')
            .ok_or_else(|| Error::parse(text, "unclosed row bracket"))?;
        let group = &body[..close];
        if group.contains('[') {
            return Err(Error::parse(text, "rows nest at most one level"));
        }
        let row = group
            .split(',')
            .map(|cell| cell.trim().parse::<Complex>())
            .collect::<Result<Vec<_>>>()?;
        rows.push(row);
        rest = &body[close + 1..];
    }
}

/// `1 2; 3 4` with optional commas and ranges. Blank rows and rows that
/// are only `:` are skipped.
fn matlab_rows(inner: &str) -> Result<Vec<Vec<Complex>>> {
    let mut rows = Vec::new();
    for row in inner.split(';') {
        let row = row.trim();
        if row.is_empty() || row == ":" {
            continue;
        }
        let lowered = row.to_lowercase();
        rows.push(ElementParser::new(&lowered)?.row()?);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64, im: f64) -> Complex {
        Complex::new(re, im)
    }

    #[test]
    fn matlab_form() {
        let m = parse_matrix("[1 2; 3 4]").unwrap();
        assert_eq!(m.size(), (2, 2));
        assert_eq!(m[(1, 0)], c(3.0, 0.0));

        let m = parse_matrix("[1+2i, 3-4j; -i 5]").unwrap();
        assert_eq!(m.as_slice(), &[c(1.0, 2.0), c(3.0, -4.0), c(0.0, -1.0), c(5.0, 0.0)]);
    }

    #[test]
    fn json_form() {
        let m = parse_matrix("[[1, 2], [3, 4+i]]").unwrap();
        assert_eq!(m.size(), (2, 2));
        assert_eq!(m[(1, 1)], c(4.0, 1.0));
        assert!(parse_matrix("[[1, 2], [3]]").is_err());
        assert!(parse_matrix("[[1, 2] x [3, 4]]").is_err());
    }

    #[test]
    fn ranges_and_transpose() {
        let m = parse_matrix("[1:2:9]").unwrap();
        assert_eq!(m.size(), (1, 5));
        assert_eq!(m[(0, 4)], c(9.0, 0.0));

        let t = parse_matrix("[1:3]'").unwrap();
        assert_eq!(t.size(), (3, 1));
        let back = parse_matrix("[1:3]' '").unwrap();
        assert_eq!(back.size(), (1, 3));

        let h = parse_matrix("[1+i 2]'").unwrap();
        assert_eq!(h[(0, 0)], c(1.0, -1.0));
    }

    #[test]
    fn unbracketed_rows() {
        assert_eq!(parse_matrix("1 2 3").unwrap().size(), (1, 3));
        assert_eq!(parse_matrix("1, 2; 3, 4").unwrap().size(), (2, 2));
        let t = parse_matrix("1 2 3'").unwrap();
        assert_eq!(t.size(), (3, 1));
        assert_eq!(t[(2, 0)], c(3.0, 0.0));
        let h = parse_matrix("1+i, 2; 3, 4''").unwrap();
        assert_eq!(h.size(), (2, 2));
        assert_eq!(h[(0, 0)], c(1.0, 1.0));
        let s = parse_matrix(" 3+4i ").unwrap();
        assert!(s.is_scalar());
        assert_eq!(s[(0, 0)], c(3.0, 4.0));
    }

    #[test]
    fn colon_rows_are_dropped() {
        let m = parse_matrix("[1 2; :; 3 4]").unwrap();
        assert_eq!(m.size(), (2, 2));
    }

    #[test]
    fn malformed() {
        assert_eq!(parse_matrix("[]"), Err(Error::Empty));
        assert_eq!(parse_matrix("   "), Err(Error::Empty));
        assert!(matches!(
            parse_matrix("[1 2; 3]"),
            Err(Error::RaggedRows { row: 1, expected: 2, got: 1 })
        ));
        assert!(matches!(parse_matrix("[1 x]"), Err(Error::Parse { .. })));
        assert!(parse_matrix("abc").is_err());
    }
}
