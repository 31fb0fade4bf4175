//! The coefficient field contract.
//!
//! The Groebner kernel is generic over a field: it never assumes rationals,
//! floats, or any particular representation. A type only needs to supply the
//! handful of operations a commutative field provides, plus parse/print and a
//! sign hint used when formatting a leading `+`.
//!
//! `zero`/`one`/`parse` are instance methods rather than associated functions:
//! a value acts as a *template* carrying whatever side configuration its type
//! needs (the modulus, for `ZpField`). Rational and floating-point fields
//! simply ignore the template and return their fixed identities.

use std::fmt;

use arith::{add_q, div_q, mul_q, sub_q, Q};

/// How a field value should be signed when printing "+"-separated sums.
///
/// Fields without a natural order (e.g. `Z_p`, where every representative is
/// stored as a non-negative residue) report [`Sign::NonNegative`] rather than
/// forcing an arbitrary choice between positive and negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
    /// The field has no natural sign; treat as non-negative for printing.
    NonNegative,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError(pub String);

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for FieldError {}

/// A commutative field, used as the coefficient domain of monomials and
/// polynomials.
pub trait Field: Clone + fmt::Debug + PartialEq {
    /// Additive identity, configured the same way as `self`.
    fn zero(&self) -> Self;
    /// Multiplicative identity, configured the same way as `self`.
    fn one(&self) -> Self;
    fn is_zero(&self) -> bool;
    fn add(&self, rhs: &Self) -> Self;
    fn sub(&self, rhs: &Self) -> Self;
    fn mul(&self, rhs: &Self) -> Self;
    /// Precondition: `rhs` is non-zero.
    fn div(&self, rhs: &Self) -> Self;
    fn neg(&self) -> Self;
    fn sign(&self) -> Sign;
    /// Parse `text`, using `self` as a configuration template (e.g. the
    /// modulus for `Z_p`).
    fn parse(&self, text: &str) -> Result<Self, FieldError>
    where
        Self: Sized;
    fn format(&self) -> String;
}

/// Exact rationals, backed by `arith::Q` (i64 numerator/denominator).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RationalField(pub Q);

impl RationalField {
    pub fn new(num: i64, den: i64) -> Self {
        RationalField(Q::new(num, den))
    }
    pub fn from_int(n: i64) -> Self {
        RationalField(Q(n, 1))
    }
}

impl Field for RationalField {
    fn zero(&self) -> Self {
        RationalField(Q::zero())
    }
    fn one(&self) -> Self {
        RationalField(Q::one())
    }
    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
    fn add(&self, rhs: &Self) -> Self {
        RationalField(add_q(self.0, rhs.0))
    }
    fn sub(&self, rhs: &Self) -> Self {
        RationalField(sub_q(self.0, rhs.0))
    }
    fn mul(&self, rhs: &Self) -> Self {
        RationalField(mul_q(self.0, rhs.0))
    }
    fn div(&self, rhs: &Self) -> Self {
        assert!(!rhs.is_zero(), "division by zero field element");
        RationalField(div_q(self.0, rhs.0))
    }
    fn neg(&self) -> Self {
        RationalField(Q(-self.0 .0, self.0 .1))
    }
    fn sign(&self) -> Sign {
        if self.0.is_zero() {
            Sign::Zero
        } else if self.0 .0 > 0 {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
    fn parse(&self, text: &str) -> Result<Self, FieldError> {
        parse_rational(text).map(RationalField).ok_or_else(|| {
            FieldError(format!("cannot parse rational coefficient: {text}"))
        })
    }
    fn format(&self) -> String {
        if self.0 .1 == 1 {
            self.0 .0.to_string()
        } else {
            format!("{}/{}", self.0 .0, self.0 .1)
        }
    }
}

fn parse_rational(text: &str) -> Option<Q> {
    if let Some((num, den)) = text.split_once('/') {
        Some(Q::new(num.trim().parse().ok()?, den.trim().parse().ok()?))
    } else {
        Some(Q(text.trim().parse().ok()?, 1))
    }
}

/// Double-precision floating point field. Equality and zero-testing are
/// exact (no epsilon fuzz) to keep the contract simple; callers that need
/// tolerance should round inputs before handing them to the kernel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatField(pub f64);

impl Field for FloatField {
    fn zero(&self) -> Self {
        FloatField(0.0)
    }
    fn one(&self) -> Self {
        FloatField(1.0)
    }
    fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
    fn add(&self, rhs: &Self) -> Self {
        FloatField(self.0 + rhs.0)
    }
    fn sub(&self, rhs: &Self) -> Self {
        FloatField(self.0 - rhs.0)
    }
    fn mul(&self, rhs: &Self) -> Self {
        FloatField(self.0 * rhs.0)
    }
    fn div(&self, rhs: &Self) -> Self {
        assert!(!rhs.is_zero(), "division by zero field element");
        FloatField(self.0 / rhs.0)
    }
    fn neg(&self) -> Self {
        FloatField(-self.0)
    }
    fn sign(&self) -> Sign {
        if self.0 == 0.0 {
            Sign::Zero
        } else if self.0 > 0.0 {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
    fn parse(&self, text: &str) -> Result<Self, FieldError> {
        text.trim()
            .parse::<f64>()
            .map(FloatField)
            .map_err(|_| FieldError(format!("cannot parse float coefficient: {text}")))
    }
    fn format(&self) -> String {
        format!("{}", self.0)
    }
}

/// Integers modulo a prime `p`, with the modulus carried in the value itself
/// rather than as process-global state. Inversion uses Fermat's little
/// theorem: `a^(p-2) mod p`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZpField {
    pub value: u64,
    pub modulus: u64,
}

impl ZpField {
    pub fn new(value: i64, modulus: u64) -> Self {
        assert!(modulus >= 2, "Z_p modulus must be at least 2");
        let m = modulus as i64;
        let v = ((value % m) + m) % m;
        ZpField { value: v as u64, modulus }
    }

    fn same_modulus(&self, rhs: &Self) -> u64 {
        assert_eq!(self.modulus, rhs.modulus, "Z_p values from different moduli");
        self.modulus
    }

    fn pow_mod(mut base: u64, mut exp: u64, modulus: u64) -> u64 {
        let mut acc: u64 = 1 % modulus;
        base %= modulus;
        while exp > 0 {
            if exp & 1 == 1 {
                acc = (acc as u128 * base as u128 % modulus as u128) as u64;
            }
            base = (base as u128 * base as u128 % modulus as u128) as u64;
            exp >>= 1;
        }
        acc
    }
}

impl Field for ZpField {
    fn zero(&self) -> Self {
        ZpField { value: 0, modulus: self.modulus }
    }
    fn one(&self) -> Self {
        ZpField { value: 1 % self.modulus, modulus: self.modulus }
    }
    fn is_zero(&self) -> bool {
        self.value == 0
    }
    fn add(&self, rhs: &Self) -> Self {
        let m = self.same_modulus(rhs);
        ZpField { value: (self.value + rhs.value) % m, modulus: m }
    }
    fn sub(&self, rhs: &Self) -> Self {
        let m = self.same_modulus(rhs);
        ZpField { value: (self.value + m - rhs.value) % m, modulus: m }
    }
    fn mul(&self, rhs: &Self) -> Self {
        let m = self.same_modulus(rhs);
        ZpField { value: (self.value as u128 * rhs.value as u128 % m as u128) as u64, modulus: m }
    }
    fn div(&self, rhs: &Self) -> Self {
        assert!(!rhs.is_zero(), "division by zero field element");
        self.mul(&rhs.inverse())
    }
    fn neg(&self) -> Self {
        if self.value == 0 {
            *self
        } else {
            ZpField { value: self.modulus - self.value, modulus: self.modulus }
        }
    }
    fn sign(&self) -> Sign {
        // Every representative is stored as a non-negative residue; there is
        // no natural negative element to report.
        if self.value == 0 {
            Sign::Zero
        } else {
            Sign::NonNegative
        }
    }
    fn parse(&self, text: &str) -> Result<Self, FieldError> {
        text.trim()
            .parse::<i64>()
            .map(|v| ZpField::new(v, self.modulus))
            .map_err(|_| FieldError(format!("cannot parse Z_p coefficient: {text}")))
    }
    fn format(&self) -> String {
        self.value.to_string()
    }
}

impl ZpField {
    /// `self^(modulus - 2) mod modulus`, valid because `modulus` is prime.
    pub fn inverse(&self) -> Self {
        assert!(!self.is_zero(), "inverse of zero in Z_p");
        ZpField { value: Self::pow_mod(self.value, self.modulus - 2, self.modulus), modulus: self.modulus }
    }
}
