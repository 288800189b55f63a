//! Number literal lexer and element grammar.
//!
//! Shared by [`Complex::from_str`](core::str::FromStr) and the matrix row
//! grammar. Input is lowercased before lexing, so `Inf`, `NaN` and `1E3`
//! are accepted.
//!
//! An element is either `[sign] real [(+|-) [-] imag]` or
//! `[sign] imag [+ [-] real]`, where an imaginary token is a number with a
//! trailing `i`/`j` (a bare `i` means `1i`). Whitespace is insignificant: a
//! sign always binds to the number after it, so `1 - 2` is the two elements
//! `1` and `-2` while `1 - 2i` is the single element `1-2i`.

use core::cmp::Ordering;
use core::str::FromStr;

use logos::Logos;

use super::Complex;
use crate::{Error, Result};

/// Longest sequence a `start:step:stop` range may expand to.
pub(crate) const MAX_RANGE_LEN: usize = 0x10000;

fn parse_imag(lex: &mut logos::Lexer<Token>) -> Option<f64> {
    let s = lex.slice();
    s[..s.len() - 1].parse::<f64>().ok()
}

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
pub(crate) enum Token {
    #[regex(r"([0-9]+(\.[0-9]*)?|\.[0-9]+)(e[+-]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    #[regex(r"inf(inity)?", |_| f64::INFINITY)]
    #[token("nan", |_| f64::NAN)]
    Real(f64),

    #[regex(r"([0-9]+(\.[0-9]*)?|\.[0-9]+)(e[+-]?[0-9]+)?[ij]", parse_imag)]
    #[regex(r"(inf(inity)?|nan)[ij]", parse_imag)]
    #[regex(r"[ij]", |_| 1.0)]
    Imag(f64),

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token(":")]
    Colon,

    #[token(";")]
    Semicolon,

    #[token(",")]
    Comma,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("'")]
    Quote,
}

/// How an element that starts with an imaginary token may continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ImagLead {
    /// `4j+3` and `4j-3` both join (standalone literals).
    AnySign,
    /// Only `4j+3` joins; `4j -3` is two row elements.
    PlusOnly,
}

/// Cursor over the lexed tokens of one literal or one matrix row.
pub(crate) struct ElementParser<'a> {
    input: &'a str,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'a> ElementParser<'a> {
    /// Lex `input` (already lowercased).
    pub(crate) fn new(input: &'a str) -> Result<Self> {
        let mut tokens = Vec::new();
        let mut lex = Token::lexer(input);
        while let Some(tok) = lex.next() {
            match tok {
                Ok(t) => tokens.push(t),
                Err(()) => {
                    return Err(Error::parse(
                        input,
                        format!("unexpected {:?} at offset {}", lex.slice(), lex.span().start),
                    ));
                }
            }
        }
        Ok(Self {
            input,
            tokens,
            pos: 0,
        })
    }

    fn peek_at(&self, offset: usize) -> Option<Token> {
        self.tokens.get(self.pos + offset).copied()
    }

    fn is_done(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn eat(&mut self, tok: Token) -> bool {
        if self.peek_at(0) == Some(tok) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn sign_at(&self, offset: usize, allow_minus: bool) -> Option<f64> {
        match self.peek_at(offset) {
            Some(Token::Plus) => Some(1.0),
            Some(Token::Minus) if allow_minus => Some(-1.0),
            _ => None,
        }
    }

    /// Matches `(+|-) [-] <tail>` without consuming on failure.
    fn joined_part(&mut self, allow_minus: bool, want_imag: bool) -> Option<f64> {
        let s1 = self.sign_at(0, allow_minus)?;
        let (s2, at) = match self.peek_at(1) {
            Some(Token::Minus) => (-1.0, 2),
            _ => (1.0, 1),
        };
        let v = match (self.peek_at(at), want_imag) {
            (Some(Token::Imag(v)), true) => v,
            (Some(Token::Real(v)), false) => v,
            _ => return None,
        };
        self.pos += at + 1;
        Some(s1 * s2 * v)
    }

    /// One complex element.
    pub(crate) fn element(&mut self, lead: ImagLead) -> Result<Complex> {
        let sign = if self.eat(Token::Plus) {
            1.0
        } else if self.eat(Token::Minus) {
            -1.0
        } else {
            1.0
        };
        match self.peek_at(0) {
            Some(Token::Real(v)) => {
                self.pos += 1;
                let im = self.joined_part(true, true).unwrap_or(0.0);
                Ok(Complex::new(sign * v, im))
            }
            Some(Token::Imag(v)) => {
                self.pos += 1;
                let re = self
                    .joined_part(lead == ImagLead::AnySign, false)
                    .unwrap_or(0.0);
                Ok(Complex::new(re, sign * v))
            }
            Some(other) => Err(Error::parse(
                self.input,
                format!("expected a number, found {other:?}"),
            )),
            None => Err(Error::parse(self.input, "expected a number")),
        }
    }

    /// Elements of one matrix row, with `a:b` and `a:step:b` ranges expanded.
    /// Commas are optional separators.
    pub(crate) fn row(mut self) -> Result<Vec<Complex>> {
        let mut out = Vec::new();
        loop {
            while self.eat(Token::Comma) {}
            if self.is_done() {
                return Ok(out);
            }
            let first = self.element(ImagLead::PlusOnly)?;
            if !self.eat(Token::Colon) {
                out.push(first);
                continue;
            }
            let second = self.element(ImagLead::PlusOnly)?;
            let values = if self.eat(Token::Colon) {
                let third = self.element(ImagLead::PlusOnly)?;
                interpolate(first, second, third, true)?
            } else {
                interpolate(first, Complex::ONE, second, true)?
            };
            out.extend(values);
        }
    }
}

impl FromStr for Complex {
    type Err = Error;

    /// Parse a single literal such as `"3+4i"`, `"4j-3"`, `"-i"`, `"-Inf"`.
    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.to_lowercase();
        let mut p = ElementParser::new(&lowered)?;
        let z = p.element(ImagLead::AnySign)?;
        if !p.is_done() {
            return Err(Error::parse(s, "trailing characters after number"));
        }
        Ok(z)
    }
}

/// Expand `from, from+delta, ...` towards `to`.
///
/// With `include_last` the end point is kept when stepping lands on it
/// exactly (within machine epsilon); otherwise it is always excluded.
/// A zero step, a step pointing away from `to`, or more than
/// `MAX_RANGE_LEN` elements is an error.
pub(crate) fn interpolate(
    from: Complex,
    delta: Complex,
    to: Complex,
    include_last: bool,
) -> Result<Vec<Complex>> {
    let dir = from
        .compare_to(&to)
        .ok_or_else(|| Error::invalid("range", format!("cannot order {from} and {to}")))?;
    if dir == Ordering::Equal {
        return Ok(vec![from]);
    }
    if delta.is_zero() {
        return Err(Error::invalid("range", "step must be non-zero"));
    }
    if (delta.is_negative() && dir == Ordering::Less)
        || (delta.is_positive() && dir == Ordering::Greater)
    {
        return Err(Error::invalid(
            "range",
            format!("step {delta} never reaches {to} from {from}"),
        ));
    }

    let mut values = vec![from];
    let mut num = from;
    loop {
        num += delta;
        let done = match to.compare_to(&num) {
            Some(c) if include_last => c == dir,
            Some(c) => c == dir || c == Ordering::Equal,
            None => false,
        };
        if done {
            return Ok(values);
        }
        if values.len() == MAX_RANGE_LEN {
            return Err(Error::invalid(
                "range",
                format!("more than {MAX_RANGE_LEN} elements"),
            ));
        }
        values.push(num);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64, im: f64) -> Complex {
        Complex::new(re, im)
    }

    fn row(s: &str) -> Vec<Complex> {
        ElementParser::new(s).unwrap().row().unwrap()
    }

    #[test]
    fn literal_forms() {
        assert_eq!("3+4i".parse::<Complex>().unwrap(), c(3.0, 4.0));
        assert_eq!("4j+3".parse::<Complex>().unwrap(), c(3.0, 4.0));
        assert_eq!("4j-3".parse::<Complex>().unwrap(), c(-3.0, 4.0));
        assert_eq!(" 3 - 4i ".parse::<Complex>().unwrap(), c(3.0, -4.0));
        assert_eq!("-i".parse::<Complex>().unwrap(), c(0.0, -1.0));
        assert_eq!("1.2e3".parse::<Complex>().unwrap(), c(1200.0, 0.0));
        assert_eq!("1.2E-3".parse::<Complex>().unwrap(), c(0.0012, 0.0));
        assert_eq!("1 - -2j".parse::<Complex>().unwrap(), c(1.0, 2.0));
    }

    #[test]
    fn non_finite_literals() {
        assert_eq!("inf".parse::<Complex>().unwrap(), Complex::POSITIVE_INFINITY);
        assert_eq!("-Infinity".parse::<Complex>().unwrap(), Complex::NEGATIVE_INFINITY);
        assert!("NaN".parse::<Complex>().unwrap().is_nan());
        assert_eq!("infi".parse::<Complex>().unwrap(), c(0.0, f64::INFINITY));
    }

    #[test]
    fn malformed_literals() {
        assert!("".parse::<Complex>().is_err());
        assert!("1+".parse::<Complex>().is_err());
        assert!("abc".parse::<Complex>().is_err());
        assert!("1 2".parse::<Complex>().is_err());
        assert!("[1]".parse::<Complex>().is_err());
    }

    #[test]
    fn row_sign_binding() {
        assert_eq!(row("1 - 2"), vec![c(1.0, 0.0), c(-2.0, 0.0)]);
        assert_eq!(row("1 - 2i"), vec![c(1.0, -2.0)]);
        assert_eq!(row("1 2i"), vec![c(1.0, 0.0), c(0.0, 2.0)]);
        assert_eq!(row("2i -3"), vec![c(0.0, 2.0), c(-3.0, 0.0)]);
        assert_eq!(row("2i + 3"), vec![c(3.0, 2.0)]);
        assert_eq!(row("1, 2,3"), vec![c(1.0, 0.0), c(2.0, 0.0), c(3.0, 0.0)]);
    }

    #[test]
    fn row_ranges() {
        let r = row("1:3");
        assert_eq!(r, vec![c(1.0, 0.0), c(2.0, 0.0), c(3.0, 0.0)]);
        let r = row("1:2:9");
        assert_eq!(r.len(), 5);
        assert_eq!(r[4], c(9.0, 0.0));
        let r = row("0 5:-2:0");
        assert_eq!(r, vec![c(0.0, 0.0), c(5.0, 0.0), c(3.0, 0.0), c(1.0, 0.0)]);
    }

    #[test]
    fn interpolate_rejects_bad_steps() {
        let one = Complex::ONE;
        let five = Complex::from(5.0);
        assert!(interpolate(one, Complex::ZERO, five, true).is_err());
        assert!(interpolate(one, Complex::from(-1.0), five, true).is_err());
        assert!(interpolate(five, one, one, true).is_err());
        assert_eq!(interpolate(five, Complex::ZERO, five, true).unwrap(), vec![five]);
    }

    #[test]
    fn interpolate_exclusive_end() {
        let v = interpolate(Complex::ZERO, Complex::ONE, Complex::from(3.0), false).unwrap();
        assert_eq!(v, vec![c(0.0, 0.0), c(1.0, 0.0), c(2.0, 0.0)]);
        let v = interpolate(Complex::ZERO, Complex::from(0.5), Complex::from(1.2), false).unwrap();
        assert_eq!(v.len(), 3);
    }

    #[test]
    fn interpolate_length_cap() {
        let v = interpolate(Complex::ONE, Complex::ONE, Complex::from(65536.0), true).unwrap();
        assert_eq!(v.len(), MAX_RANGE_LEN);
        assert!(interpolate(Complex::ONE, Complex::ONE, Complex::from(65537.0), true).is_err());
    }
}
