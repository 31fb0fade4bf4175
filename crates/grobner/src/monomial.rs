//! Monomials: a coefficient times a product of variable powers.

use crate::field::Field;
use crate::ordering::{Context, VarId};

/// One variable raised to a power within a monomial, e.g. `x_3^2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence {
    pub id: VarId,
    pub deg: u32,
}

/// A single term `coeff * x_{i1}^{e1} * x_{i2}^{e2} * ...`.
///
/// Occurrences are kept sorted by the owning [`Context`]'s variable rank and
/// never contain a zero exponent or a repeated variable id -- constructors
/// merge repeats and drop zeros so two monomials with the same non-zero
/// exponents always compare equal regardless of construction order.
#[derive(Debug, Clone, PartialEq)]
pub struct Monomial<F: Field> {
    pub coeff: F,
    occurrences: Vec<Occurrence>,
    degree: u32,
}

impl<F: Field> Monomial<F> {
    /// Build a monomial from coefficient and exponents, normalizing
    /// (merging duplicate ids, dropping zero exponents, sorting by rank).
    pub fn new(ctx: &Context, coeff: F, mut exponents: Vec<(VarId, u32)>) -> Self {
        exponents.sort_by_key(|&(id, _)| ctx.rank(id));
        let mut merged: Vec<Occurrence> = Vec::with_capacity(exponents.len());
        for (id, deg) in exponents {
            if deg == 0 {
                continue;
            }
            if let Some(last) = merged.last_mut() {
                if last.id == id {
                    last.deg += deg;
                    continue;
                }
            }
            merged.push(Occurrence { id, deg });
        }
        let degree = merged.iter().map(|o| o.deg).sum();
        Monomial { coeff, occurrences: merged, degree }
    }

    pub fn constant(coeff: F) -> Self {
        Monomial { coeff, occurrences: Vec::new(), degree: 0 }
    }

    pub fn occurrences(&self) -> &[Occurrence] {
        &self.occurrences
    }

    pub fn total_degree(&self) -> u32 {
        self.degree
    }

    pub fn is_constant(&self) -> bool {
        self.occurrences.is_empty()
    }

    fn exponent_pairs(&self) -> Vec<(VarId, u32)> {
        self.occurrences.iter().map(|o| (o.id, o.deg)).collect()
    }

    /// Exponents as `(id, degree)` pairs, for callers (outside this module)
    /// that need to rebuild a monomial with a different coefficient.
    pub fn occurrences_as_pairs(&self) -> Vec<(VarId, u32)> {
        self.exponent_pairs()
    }

    /// Whether two monomials have the same monomial part (ignoring
    /// coefficient); used as the precondition for addition.
    pub fn same_shape(&self, other: &Self) -> bool {
        self.occurrences == other.occurrences
    }

    /// Scale the coefficient by `scalar`, keeping the monomial part fixed.
    pub fn scale(&self, scalar: &F) -> Self {
        Monomial { coeff: self.coeff.mul(scalar), occurrences: self.occurrences.clone(), degree: self.degree }
    }

    /// Add two monomials sharing the same monomial part.
    ///
    /// Precondition: `self.same_shape(other)`.
    pub fn add(&self, other: &Self) -> Self {
        debug_assert!(self.same_shape(other), "add requires matching monomial parts");
        Monomial { coeff: self.coeff.add(&other.coeff), occurrences: self.occurrences.clone(), degree: self.degree }
    }

    /// Multiply two monomials: coefficients multiply, exponents add.
    pub fn mul(&self, ctx: &Context, other: &Self) -> Self {
        let mut exps = self.exponent_pairs();
        exps.extend(other.exponent_pairs());
        Monomial::new(ctx, self.coeff.mul(&other.coeff), exps)
    }

    /// Confusingly-named, matching the reference: `self.divides(other)`
    /// means "self is divisible by other", i.e. every variable in `other`
    /// appears in `self` with at least as large an exponent. This is the
    /// opposite of the usual meaning of `a.divides(b)`; the name is kept to
    /// match the algorithm descriptions that quote it.
    ///
    /// Divisibility by the zero monomial is always false, even though an
    /// empty occurrence list would otherwise vacuously satisfy `all()`.
    pub fn divides(&self, other: &Self) -> bool {
        !other.coeff.is_zero()
            && other.occurrences.iter().all(|o| {
                self.occurrences.iter().any(|s| s.id == o.id && s.deg >= o.deg)
            })
    }

    /// Exact division of monomial parts: `self / other`, where `other`'s
    /// exponents must each be `<=` the corresponding exponent in `self`
    /// (i.e. `self.divides(other)` must hold).
    pub fn exact_div(&self, ctx: &Context, other: &Self) -> Self {
        debug_assert!(self.divides(other), "exact_div requires self divisible by other");
        let mut exps = self.exponent_pairs();
        for o in &other.occurrences {
            if let Some(e) = exps.iter_mut().find(|(id, _)| *id == o.id) {
                e.1 -= o.deg;
            }
        }
        Monomial::new(ctx, self.coeff.div(&other.coeff), exps)
    }

    /// Least common multiple of the monomial parts (coefficient dropped to
    /// the field's one, since lcm is a structural operation).
    pub fn lcm(&self, ctx: &Context, other: &Self) -> Self {
        let mut by_id: Vec<(VarId, u32)> = self.exponent_pairs();
        for o in &other.occurrences {
            if let Some(e) = by_id.iter_mut().find(|(id, _)| *id == o.id) {
                e.1 = e.1.max(o.deg);
            } else {
                by_id.push((o.id, o.deg));
            }
        }
        Monomial::new(ctx, self.coeff.one(), by_id)
    }

    /// A copy with the coefficient forced to the field's multiplicative
    /// identity, used when only the monomial part matters (e.g. leaders
    /// compared for criteria that don't care about scale).
    pub fn normalized(&self) -> Self {
        Monomial { coeff: self.coeff.one(), occurrences: self.occurrences.clone(), degree: self.degree }
    }

    /// A copy with the coefficient negated, monomial part unchanged.
    pub fn negate(&self) -> Self {
        Monomial { coeff: self.coeff.neg(), occurrences: self.occurrences.clone(), degree: self.degree }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::RationalField;

    fn ctx() -> Context {
        Context::lex()
    }

    fn m(coeff: i64, exps: &[(VarId, u32)]) -> Monomial<RationalField> {
        Monomial::new(&ctx(), RationalField::from_int(coeff), exps.to_vec())
    }

    #[test]
    fn construction_merges_and_drops_zero() {
        let a = m(1, &[(1, 2), (1, 3), (2, 0)]);
        assert_eq!(a.occurrences(), &[Occurrence { id: 1, deg: 5 }]);
        assert_eq!(a.total_degree(), 5);
    }

    #[test]
    fn multiplication_adds_exponents() {
        let a = m(2, &[(1, 1)]);
        let b = m(3, &[(1, 2), (2, 1)]);
        let prod = a.mul(&ctx(), &b);
        assert_eq!(prod.coeff, RationalField::from_int(6));
        assert_eq!(prod.occurrences(), &[Occurrence { id: 1, deg: 3 }, Occurrence { id: 2, deg: 1 }]);
    }

    #[test]
    fn divides_semantics_are_the_confusing_way_round() {
        // self = x1^2 x2, other = x1 -- self is divisible by other.
        let self_m = m(1, &[(1, 2), (2, 1)]);
        let other = m(1, &[(1, 1)]);
        assert!(self_m.divides(&other));
        // other is not divisible by self.
        assert!(!other.divides(&self_m));
    }

    #[test]
    fn exact_division_subtracts_exponents() {
        let a = m(6, &[(1, 2), (2, 1)]);
        let b = m(2, &[(1, 1)]);
        let q = a.exact_div(&ctx(), &b);
        assert_eq!(q.coeff, RationalField::from_int(3));
        assert_eq!(q.occurrences(), &[Occurrence { id: 1, deg: 1 }, Occurrence { id: 2, deg: 1 }]);
    }

    #[test]
    fn lcm_takes_max_exponents_and_unit_coefficient() {
        let a = m(5, &[(1, 2), (2, 1)]);
        let b = m(7, &[(1, 1), (3, 4)]);
        let l = a.lcm(&ctx(), &b);
        assert_eq!(l.coeff, RationalField::from_int(1));
        assert_eq!(l.occurrences(), &[Occurrence { id: 1, deg: 2 }, Occurrence { id: 2, deg: 1 }, Occurrence { id: 3, deg: 4 }]);
    }

    #[test]
    fn nothing_is_divisible_by_the_zero_monomial() {
        let zero = Monomial::constant(RationalField::from_int(0));
        let nonzero = m(1, &[(1, 1)]);
        assert!(!nonzero.divides(&zero));
        assert!(!zero.divides(&zero));
    }
}
