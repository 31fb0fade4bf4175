//! Groebner basis computation over a pluggable coefficient field.
//!
//! A polynomial ideal is represented as a [`polynomial::Polynomial`] list;
//! [`set::buchberger`] turns a set of generators into a Groebner basis for
//! the ideal they generate, from which ideal membership
//! ([`set::is_member`]) and normal forms ([`set::normal_form`]) follow
//! directly. The monomial ordering and variable order are packaged into an
//! explicit [`ordering::Context`] passed to every operation rather than
//! read from global configuration.
//!
//! Four coefficient fields are provided out of the box
//! ([`field::RationalField`], [`field::FloatField`], [`field::ZpField`]),
//! and a caller can plug in its own by implementing [`field::Field`].

#![deny(warnings)]

pub mod field;
pub mod monomial;
pub mod ordering;
pub mod parser;
pub mod polynomial;
pub mod set;

pub use field::{Field, FieldError, Sign};
pub use monomial::{Monomial, Occurrence};
pub use ordering::{Context, MonomialOrdering, VarId, VarOrder};
pub use parser::{format_polynomial, format_system, parse_polynomial, parse_system, ParseError};
pub use polynomial::Polynomial;
pub use set::{autoreduce, build_minimum_basis, buchberger, is_member, normal_form, BuchbergerVariant, PolynomialSet};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::RationalField;

    // End-to-end scenario: two generators whose S-polynomial reduces to a
    // new basis element, exercised through the public surface only.
    #[test]
    fn end_to_end_buchberger_and_membership() {
        let ctx = Context::new(VarOrder::canonical(), MonomialOrdering::GrLex);
        let template = RationalField::from_int(0);
        let f1 = parse_polynomial(&ctx, &template, "x_1^2 x_2 - 1").unwrap();
        let f2 = parse_polynomial(&ctx, &template, "x_1 x_2^2 - x_1").unwrap();

        let basis = build_minimum_basis(&ctx, vec![f1.clone(), f2.clone()], BuchbergerVariant::Default);
        assert!(!basis.is_empty());
        assert!(is_member(&ctx, &f1, &basis));
        assert!(is_member(&ctx, &f2, &basis));

        // A basis for the ideal reduces every one of its own elements to
        // zero and is stable under another Buchberger pass.
        let rebuilt = build_minimum_basis(&ctx, basis.clone(), BuchbergerVariant::Default);
        assert_eq!(rebuilt.len(), basis.len());
    }

    #[test]
    fn system_parse_and_print_roundtrip() {
        let ctx = Context::lex();
        let template = RationalField::from_int(0);
        let text = "2 x_1 + 1; x_2 - 1.";
        let system = parse_system(&ctx, &template, text).unwrap();
        assert_eq!(system.len(), 2);
        assert_eq!(format_system(&system), text);
    }
}
