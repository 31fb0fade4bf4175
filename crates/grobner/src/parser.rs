//! TeX-like textual format: monomials as `x_N` / `x_{N}` factors with
//! optional `^K` / `^{K}` exponents, polynomials as signed monomial sums,
//! systems as a leading count plus whitespace-separated polynomials.
//!
//! A coefficient field only needs to parse/print its own literal; this
//! module owns the surrounding monomial/polynomial/system grammar and the
//! sign handling in front of each term.

use std::fmt;

use crate::field::Field;
use crate::monomial::Monomial;
use crate::ordering::{Context, VarId};
use crate::polynomial::Polynomial;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError(pub String);

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseError {}

struct Lexer<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Lexer<'a> {
    fn new(text: &'a str) -> Self {
        Lexer { bytes: text.as_bytes(), pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(b) if b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn eat(&mut self, c: u8) -> bool {
        if self.peek() == Some(c) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn read_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a str {
        let start = self.pos;
        while matches!(self.peek(), Some(b) if pred(b)) {
            self.pos += 1;
        }
        std::str::from_utf8(&self.bytes[start..self.pos]).unwrap()
    }

    fn read_integer(&mut self) -> Option<u32> {
        let digits = self.read_while(|b| b.is_ascii_digit());
        if digits.is_empty() {
            None
        } else {
            digits.parse().ok()
        }
    }

    /// Read `N` or `{N}` for some integer `N`.
    fn read_braced_integer(&mut self) -> Result<u32, ParseError> {
        if self.eat(b'{') {
            let n = self.read_integer().ok_or_else(|| ParseError("expected integer inside braces".to_string()))?;
            if !self.eat(b'}') {
                return Err(ParseError("missing closing brace".to_string()));
            }
            Ok(n)
        } else {
            self.read_integer().ok_or_else(|| ParseError("expected integer".to_string()))
        }
    }

    /// Read everything up to (not including) the next `+`, `-`, `;`, `x`, or
    /// whitespace -- i.e. a coefficient literal, which may itself contain
    /// `/`, `.`, or digits but not braces. A `.` is always part of the
    /// literal here: the system-level terminator is stripped by the caller
    /// before a single polynomial's text ever reaches this lexer, so a `.`
    /// seen mid-monomial is unambiguously a decimal point.
    fn read_coefficient_literal(&mut self) -> &'a str {
        self.read_while(|b| b != b'+' && b != b'-' && b != b';' && b != b'x' && !b.is_ascii_whitespace())
    }
}

/// Parse a single monomial (optional sign, optional coefficient, zero or
/// more `x_N[^K]` factors) starting at the lexer's current position.
fn parse_monomial<F: Field>(ctx: &Context, template: &F, lex: &mut Lexer) -> Result<Monomial<F>, ParseError> {
    lex.skip_ws();
    let negative = if lex.eat(b'-') {
        true
    } else {
        lex.eat(b'+');
        false
    };
    lex.skip_ws();

    let coeff_text = lex.read_coefficient_literal();
    let mut coeff = if coeff_text.is_empty() {
        template.one()
    } else {
        template.parse(coeff_text).map_err(|e| ParseError(e.to_string()))?
    };
    if negative {
        coeff = coeff.neg();
    }

    let mut exponents: Vec<(VarId, u32)> = Vec::new();
    loop {
        lex.skip_ws();
        if lex.peek() != Some(b'x') {
            break;
        }
        lex.bump();
        if !lex.eat(b'_') {
            return Err(ParseError("expected '_' after 'x'".to_string()));
        }
        let id = lex.read_braced_integer()?;
        let deg = if lex.eat(b'^') { lex.read_braced_integer()? } else { 1 };
        if deg == 0 {
            return Err(ParseError("variable exponent must be >= 1".to_string()));
        }
        exponents.push((id, deg));
    }

    Ok(Monomial::new(ctx, coeff, exponents))
}

/// Parse a polynomial: a non-empty sum of signed monomials.
pub fn parse_polynomial<F: Field>(ctx: &Context, template: &F, text: &str) -> Result<Polynomial<F>, ParseError> {
    let trimmed = text.trim();
    if trimmed == "0" {
        return Ok(Polynomial::zero());
    }
    let mut lex = Lexer::new(trimmed);
    let mut monos = Vec::new();
    loop {
        let m = parse_monomial(ctx, template, &mut lex)?;
        monos.push(m);
        lex.skip_ws();
        match lex.peek() {
            Some(b'+') | Some(b'-') => continue,
            Some(_) => return Err(ParseError("unexpected trailing character in polynomial".to_string())),
            None => break,
        }
    }
    if monos.is_empty() {
        return Err(ParseError("polynomial must contain at least one monomial".to_string()));
    }
    Ok(Polynomial::new(ctx, monos))
}

/// Parse a polynomial system: a leading count, then that many `;`-separated
/// polynomials, terminated by `.`. The separator must be `;` rather than bare
/// whitespace, since a printed polynomial's own `+`/`-` terms are themselves
/// whitespace-separated (see [`format_polynomial`]).
pub fn parse_system<F: Field>(ctx: &Context, template: &F, text: &str) -> Result<Vec<Polynomial<F>>, ParseError> {
    let trimmed = text.trim();
    if trimmed == "0" {
        return Ok(Vec::new());
    }
    let body = trimmed.strip_suffix('.').unwrap_or(trimmed);
    let mut lex = Lexer::new(body);
    lex.skip_ws();
    let count = lex.read_integer().ok_or_else(|| ParseError("missing polynomial count".to_string()))?;
    let rest = body[lex.pos..].trim();
    let parts: Vec<&str> = if rest.is_empty() { Vec::new() } else { rest.split(';').map(|s| s.trim()).collect() };
    if parts.len() != count as usize {
        return Err(ParseError(format!("expected {count} polynomials in system, found {}", parts.len())));
    }
    let mut polys = Vec::with_capacity(count as usize);
    for part in parts {
        polys.push(parse_polynomial(ctx, template, part)?);
    }
    Ok(polys)
}

/// Print a polynomial in the surface syntax: `0` for the zero polynomial,
/// otherwise signed monomials joined without separators (the sign of each
/// non-leading term supplies the separator).
pub fn format_polynomial<F: Field>(p: &Polynomial<F>) -> String {
    if p.is_zero() {
        return "0".to_string();
    }
    let mut out = String::new();
    for (i, term) in p.terms().iter().enumerate() {
        let sign = term.coeff.sign();
        let is_negative = matches!(sign, crate::field::Sign::Negative);
        if i == 0 {
            if is_negative {
                out.push('-');
            }
        } else {
            out.push_str(if is_negative { " - " } else { " + " });
        }
        let printed = if is_negative { term.negate() } else { term.clone() };
        out.push_str(&format_monomial_unsigned(&printed));
    }
    out
}

fn format_monomial_unsigned<F: Field>(m: &Monomial<F>) -> String {
    let mut out = String::new();
    let coeff_is_one = !m.is_constant() && m.coeff.sub(&m.coeff.one()).is_zero();
    if !coeff_is_one || m.is_constant() {
        out.push_str(&m.coeff.format());
    }
    for occ in m.occurrences() {
        if !out.is_empty() {
            out.push(' ');
        }
        if occ.id >= 10 {
            out.push_str(&format!("x_{{{}}}", occ.id));
        } else {
            out.push_str(&format!("x_{}", occ.id));
        }
        if occ.deg > 1 {
            if occ.deg >= 10 {
                out.push_str(&format!("^{{{}}}", occ.deg));
            } else {
                out.push_str(&format!("^{}", occ.deg));
            }
        }
    }
    out
}

/// Print a polynomial system: empty prints as `0`, otherwise `N p1; p2; ...
/// pN.`.
pub fn format_system<F: Field>(polys: &[Polynomial<F>]) -> String {
    if polys.is_empty() {
        return "0".to_string();
    }
    let joined: Vec<String> = polys.iter().map(format_polynomial).collect();
    format!("{} {}.", polys.len(), joined.join("; "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::RationalField;

    fn ctx() -> Context {
        Context::lex()
    }

    #[test]
    fn parse_simple_monomial() {
        let m = parse_monomial(&ctx(), &RationalField::from_int(0), &mut Lexer::new("3x_1^2")).unwrap();
        assert_eq!(m.coeff, RationalField::from_int(3));
        assert_eq!(m.total_degree(), 2);
    }

    #[test]
    fn parse_braced_variable_and_exponent() {
        let m = parse_monomial(&ctx(), &RationalField::from_int(0), &mut Lexer::new("x_{12}^{3}")).unwrap();
        assert_eq!(m.occurrences()[0].id, 12);
        assert_eq!(m.occurrences()[0].deg, 3);
    }

    #[test]
    fn parse_polynomial_with_signs() {
        let p = parse_polynomial(&ctx(), &RationalField::from_int(0), "x_1^2 - 3x_1 + 1").unwrap();
        assert_eq!(p.terms().len(), 3);
    }

    #[test]
    fn parse_zero_polynomial() {
        let p: Polynomial<RationalField> = parse_polynomial(&ctx(), &RationalField::from_int(0), "0").unwrap();
        assert!(p.is_zero());
    }

    #[test]
    fn roundtrip_format_and_parse() {
        let original = parse_polynomial(&ctx(), &RationalField::from_int(0), "x_1^2 - 3x_1 + 1").unwrap();
        let printed = format_polynomial(&original);
        let reparsed = parse_polynomial(&ctx(), &RationalField::from_int(0), &printed).unwrap();
        assert_eq!(original, reparsed);
    }

    #[test]
    fn system_roundtrip() {
        let ctx = ctx();
        let f = parse_polynomial(&ctx, &RationalField::from_int(0), "x_1").unwrap();
        let g = parse_polynomial(&ctx, &RationalField::from_int(0), "x_2").unwrap();
        let printed = format_system(&[f.clone(), g.clone()]);
        assert_eq!(printed, "2 x_1; x_2.");
        let reparsed = parse_system(&ctx, &RationalField::from_int(0), &printed).unwrap();
        assert_eq!(reparsed, vec![f, g]);
    }

    #[test]
    fn empty_system_prints_as_zero() {
        let empty: Vec<Polynomial<RationalField>> = Vec::new();
        assert_eq!(format_system(&empty), "0");
    }
}
