//! Property-based tests for the monomial and polynomial laws (spec-testable
//! properties): multiplication identities, divisibility/lcm structure, and
//! the additive/subtractive identities polynomials inherit from them.

use grobner::field::{Field, RationalField};
use grobner::{Context, Monomial, MonomialOrdering, Polynomial, VarOrder};
use proptest::prelude::*;

fn ctx() -> Context {
    Context::new(VarOrder::canonical(), MonomialOrdering::GrLex)
}

fn small_coeff() -> impl Strategy<Value = i64> {
    prop_oneof![(-5i64..=-1), (1i64..=5)]
}

fn small_exponents() -> impl Strategy<Value = Vec<(u32, u32)>> {
    prop::collection::vec((1u32..=3, 1u32..=3), 0..=3)
}

fn monomial() -> impl Strategy<Value = Monomial<RationalField>> {
    (small_coeff(), small_exponents())
        .prop_map(|(c, exps)| Monomial::new(&ctx(), RationalField::from_int(c), exps))
}

fn polynomial() -> impl Strategy<Value = Polynomial<RationalField>> {
    prop::collection::vec(monomial(), 0..=4).prop_map(|terms| Polynomial::new(&ctx(), terms))
}

proptest! {
    #[test]
    fn mul_by_one_is_identity(m in monomial()) {
        let one = Monomial::constant(RationalField::from_int(1));
        let product = m.mul(&ctx(), &one);
        prop_assert_eq!(product, m);
    }

    #[test]
    fn mul_by_zero_is_zero(m in monomial()) {
        let zero = Monomial::constant(RationalField::from_int(0));
        let product = m.mul(&ctx(), &zero);
        prop_assert!(product.coeff.is_zero());
    }

    #[test]
    fn monomial_multiplication_is_commutative(a in monomial(), b in monomial()) {
        let ab = a.mul(&ctx(), &b);
        let ba = b.mul(&ctx(), &a);
        prop_assert_eq!(ab.coeff, ba.coeff);
        prop_assert_eq!(ab.occurrences_as_pairs(), ba.occurrences_as_pairs());
    }

    #[test]
    fn monomial_multiplication_is_associative(a in monomial(), b in monomial(), c in monomial()) {
        let ab_c = a.mul(&ctx(), &b).mul(&ctx(), &c);
        let a_bc = a.mul(&ctx(), &b.mul(&ctx(), &c));
        prop_assert_eq!(ab_c.coeff, a_bc.coeff);
        prop_assert_eq!(ab_c.occurrences_as_pairs(), a_bc.occurrences_as_pairs());
    }

    #[test]
    fn exact_division_undoes_multiplication(a in monomial(), b in monomial()) {
        // a * b divided by b must recover a's monomial part (coefficients
        // may differ only by field arithmetic, which is exact here).
        prop_assume!(!b.coeff.is_zero());
        let product = a.mul(&ctx(), &b);
        prop_assume!(!product.coeff.is_zero());
        prop_assert!(product.divides(&b));
        let recovered = product.exact_div(&ctx(), &b);
        prop_assert_eq!(recovered.occurrences_as_pairs(), a.occurrences_as_pairs());
    }

    #[test]
    fn lcm_is_commutative_and_has_max_exponents(a in monomial(), b in monomial()) {
        prop_assume!(!a.coeff.is_zero() && !b.coeff.is_zero());
        let lcm_ab = a.lcm(&ctx(), &b);
        let lcm_ba = b.lcm(&ctx(), &a);
        prop_assert_eq!(lcm_ab.occurrences_as_pairs(), lcm_ba.occurrences_as_pairs());
        prop_assert!(lcm_ab.divides(&a));
        prop_assert!(lcm_ab.divides(&b));
    }

    #[test]
    fn polynomial_add_zero_is_identity(p in polynomial()) {
        let zero = Polynomial::zero();
        prop_assert_eq!(p.add(&ctx(), &zero), p);
    }

    #[test]
    fn polynomial_sub_self_is_zero(p in polynomial()) {
        prop_assert!(p.sub(&ctx(), &p).is_zero());
    }

    #[test]
    fn polynomial_mul_by_zero_monomial_is_zero(p in polynomial()) {
        let zero = Monomial::constant(RationalField::from_int(0));
        prop_assert!(p.mul_monomial(&ctx(), &zero).is_zero());
    }

    #[test]
    fn leading_monomial_is_the_greatest_term(p in polynomial()) {
        if let Some(lead) = p.leading_monomial() {
            for term in p.terms() {
                let cmp = ctx().compare_occurrences(
                    lead.occurrences_as_pairs().as_slice(),
                    term.occurrences_as_pairs().as_slice(),
                );
                prop_assert!(cmp != std::cmp::Ordering::Less);
            }
        }
    }
}
