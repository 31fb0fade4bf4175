//! Polynomial sets: normal forms, autoreduction, and the four Buchberger
//! variants that turn a set of generators into a Groebner basis.

use std::collections::HashSet;

use crate::field::Field;
use crate::ordering::Context;
use crate::polynomial::Polynomial;

/// Which pair-selection criteria `buchberger` applies while building the
/// basis. All four compute the same textbook Groebner basis; they differ
/// only in how many S-polynomial reductions they skip along the way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuchbergerVariant {
    /// Process every critical pair once; no pruning.
    Default,
    /// Like `Default`, but never re-enqueues a pair already processed.
    /// (The reference re-derives this by popping from a worklist without
    /// tracking visited pairs, which can reprocess a pair if it is pushed
    /// twice; tracking visited pairs explicitly avoids that.)
    DoNotRepeat,
    /// Buchberger's first criterion: skip a pair whose leaders are
    /// coprime, since its S-polynomial is guaranteed to reduce to zero.
    SkipCoprime,
    /// Buchberger's first criterion plus his second (LCM) criterion: also
    /// skip a pair `(i, j)` when some other basis element `k` has already
    /// had both `(i, k)` and `(j, k)` resolved, and
    /// `lcm(lt_i, lt_k)` and `lcm(lt_j, lt_k)` each properly divide
    /// `lcm(lt_i, lt_j)`.
    LcmCriterion,
}

/// Normal form of `f` with respect to `basis`: repeatedly apply elementary
/// reduction by whichever basis element's leader divides a term of the
/// current remainder, until none do.
pub fn normal_form<F: Field>(ctx: &Context, f: &Polynomial<F>, basis: &[Polynomial<F>]) -> Polynomial<F> {
    f.reduce_by_set(ctx, basis)
}

/// Membership test: `f` lies in the ideal generated by `basis` iff its
/// normal form with respect to a Groebner basis for that ideal is zero.
/// `basis` must already be a Groebner basis (run [`buchberger`] first).
pub fn is_member<F: Field>(ctx: &Context, f: &Polynomial<F>, groebner_basis: &[Polynomial<F>]) -> bool {
    normal_form(ctx, f, groebner_basis).is_zero()
}

/// Remove polynomials that reduce to zero against the rest of the set, then
/// fully reduce each remaining polynomial against the others, repeating
/// until stable. Produces a minimal, inter-reduced set with the same span.
pub fn autoreduce<F: Field>(ctx: &Context, polys: &[Polynomial<F>]) -> Vec<Polynomial<F>> {
    let mut current: Vec<Polynomial<F>> = polys.iter().filter(|p| !p.is_zero()).cloned().collect();
    loop {
        let mut changed = false;
        let mut next: Vec<Polynomial<F>> = Vec::new();
        for i in 0..current.len() {
            let others: Vec<Polynomial<F>> = current.iter().enumerate().filter(|(j, _)| *j != i).map(|(_, p)| p.clone()).collect();
            let reduced = current[i].reduce_by_set(ctx, &others);
            if reduced.is_zero() {
                changed = true;
                continue;
            }
            if reduced != current[i] {
                changed = true;
            }
            next.push(reduced);
        }
        current = next;
        if !changed {
            break;
        }
    }
    current
}

/// Buchberger's algorithm: given generators of an ideal, compute a
/// Groebner basis for it under the context's monomial ordering.
pub fn buchberger<F: Field>(ctx: &Context, generators: Vec<Polynomial<F>>, variant: BuchbergerVariant) -> Vec<Polynomial<F>> {
    let basis: Vec<Polynomial<F>> = generators.into_iter().filter(|g| !g.is_zero()).collect();
    match variant {
        BuchbergerVariant::Default => buchberger_rounds(ctx, basis),
        other => buchberger_queue(ctx, basis, other),
    }
}

/// The `default` variant: each round, compute the normal form of every
/// unordered pair's S-polynomial over the current set and append every
/// non-zero result; stop when a round adds nothing.
fn buchberger_rounds<F: Field>(ctx: &Context, mut basis: Vec<Polynomial<F>>) -> Vec<Polynomial<F>> {
    loop {
        let mut additions = Vec::new();
        for i in 0..basis.len() {
            for j in (i + 1)..basis.len() {
                let Some(s) = basis[i].s_polynomial(ctx, &basis[j]) else { continue };
                let remainder = s.reduce_by_set(ctx, &basis);
                if !remainder.is_zero() {
                    additions.push(remainder);
                }
            }
        }
        if additions.is_empty() {
            break;
        }
        basis.extend(additions);
    }
    basis
}

/// The `do-not-repeat`, `skip-coprime`, and `lcm-criterion` variants: a
/// worklist of pairs, seeded with all initial pairs and extended with
/// `(k, new)` whenever a polynomial is appended, applying whichever
/// pruning criteria the variant calls for.
fn buchberger_queue<F: Field>(ctx: &Context, mut basis: Vec<Polynomial<F>>, variant: BuchbergerVariant) -> Vec<Polynomial<F>> {
    let mut pairs: Vec<(usize, usize)> = Vec::new();
    for i in 0..basis.len() {
        for j in (i + 1)..basis.len() {
            pairs.push((i, j));
        }
    }
    let mut visited: HashSet<(usize, usize)> = HashSet::new();

    while let Some((i, j)) = pairs.pop() {
        if variant == BuchbergerVariant::DoNotRepeat && !visited.insert((i, j)) {
            continue;
        }

        if matches!(variant, BuchbergerVariant::SkipCoprime | BuchbergerVariant::LcmCriterion)
            && basis[i].leaders_coprime(&basis[j])
        {
            continue;
        }

        if variant == BuchbergerVariant::LcmCriterion && lcm_criterion_applies(ctx, &basis, &pairs, i, j) {
            continue;
        }

        let s = match basis[i].s_polynomial(ctx, &basis[j]) {
            Some(s) => s,
            None => continue,
        };
        let remainder = s.reduce_by_set(ctx, &basis);
        if !remainder.is_zero() {
            let new_idx = basis.len();
            for k in 0..new_idx {
                pairs.push((k, new_idx));
            }
            basis.push(remainder);
        }
    }

    basis
}

/// Buchberger's second criterion: `(i, j)` can be skipped if there is a
/// third basis element `k` whose pairs with `i` and `j` have already been
/// resolved (are no longer pending), and whose leader's lcm with each of
/// `i` and `j` properly divides `lcm(lt_i, lt_j)`.
fn lcm_criterion_applies<F: Field>(ctx: &Context, basis: &[Polynomial<F>], pending: &[(usize, usize)], i: usize, j: usize) -> bool {
    let li = match basis[i].leading_monomial() {
        Some(m) => m,
        None => return false,
    };
    let lj = match basis[j].leading_monomial() {
        Some(m) => m,
        None => return false,
    };
    let lij = li.lcm(ctx, lj);

    let pair_pending = |a: usize, b: usize| {
        let key = if a < b { (a, b) } else { (b, a) };
        pending.contains(&key)
    };

    for (k, poly_k) in basis.iter().enumerate() {
        if k == i || k == j {
            continue;
        }
        let lk = match poly_k.leading_monomial() {
            Some(m) => m,
            None => continue,
        };
        let lik = li.lcm(ctx, lk);
        let ljk = lj.lcm(ctx, lk);
        let ik_proper = lij.divides(&lik) && lik != lij;
        let jk_proper = lij.divides(&ljk) && ljk != lij;
        if ik_proper && jk_proper && !pair_pending(i, k) && !pair_pending(j, k) {
            return true;
        }
    }
    false
}

/// Remove any polynomial whose leader is divisible by another polynomial's
/// leader, keeping the earlier one of the two in list order. Repeats until a
/// full sweep removes nothing.
fn prune_leader_multiples<F: Field>(polys: Vec<Polynomial<F>>) -> Vec<Polynomial<F>> {
    let mut current = polys;
    loop {
        let mut keep = vec![true; current.len()];
        for i in 0..current.len() {
            if !keep[i] {
                continue;
            }
            let Some(li) = current[i].leading_monomial() else { continue };
            for (j, pj) in current.iter().enumerate() {
                if i == j || !keep[j] {
                    continue;
                }
                let Some(lj) = pj.leading_monomial() else { continue };
                if li.divides(lj) {
                    keep[i] = false;
                    break;
                }
            }
        }
        if keep.iter().all(|&k| k) {
            return current;
        }
        current = current.into_iter().zip(keep).filter(|(_, k)| *k).map(|(p, _)| p).collect();
    }
}

/// Build the minimum (minimal, reduced) Groebner basis for the ideal
/// generated by `generators`, following the textbook recipe: autoreduce the
/// generators, run Buchberger, normalize to monic leaders, prune any
/// polynomial whose leader is a multiple of another's, then autoreduce
/// again.
pub fn build_minimum_basis<F: Field>(ctx: &Context, generators: Vec<Polynomial<F>>, variant: BuchbergerVariant) -> Vec<Polynomial<F>> {
    let pre_reduced = autoreduce(ctx, &generators);
    let raw = buchberger(ctx, pre_reduced, variant);
    let monic: Vec<Polynomial<F>> = raw.iter().map(|p| p.monic(ctx)).collect();
    let pruned = prune_leader_multiples(monic);
    autoreduce(ctx, &pruned)
}

/// A mutable collection of polynomials that remembers whether it is
/// currently known to be a Groebner basis for the ideal it generates.
///
/// Closure operations ([`PolynomialSet::buchberger`],
/// [`PolynomialSet::build_minimum_basis`]) set the flag once they complete;
/// any structural mutation -- appending a generator, autoreducing -- resets
/// it, since the result of those operations is not in general still a basis
/// computed under the fixed ordering. Free functions in this module remain
/// the functional core; `PolynomialSet` is a thin stateful wrapper around
/// them for callers that want to avoid recomputing a basis they already
/// have.
#[derive(Debug, Clone)]
pub struct PolynomialSet<F: Field> {
    polys: Vec<Polynomial<F>>,
    is_groebner_basis: bool,
}

impl<F: Field> PolynomialSet<F> {
    pub fn new(generators: Vec<Polynomial<F>>) -> Self {
        PolynomialSet { polys: generators, is_groebner_basis: false }
    }

    pub fn polys(&self) -> &[Polynomial<F>] {
        &self.polys
    }

    pub fn is_groebner_basis(&self) -> bool {
        self.is_groebner_basis
    }

    pub fn into_polys(self) -> Vec<Polynomial<F>> {
        self.polys
    }

    /// Insert an arbitrary polynomial; the set is no longer known to be a
    /// Groebner basis until a closure operation re-establishes it.
    pub fn push(&mut self, p: Polynomial<F>) {
        self.polys.push(p);
        self.is_groebner_basis = false;
    }

    /// Full reduction of `f` against the current polynomials.
    pub fn normal_form(&self, ctx: &Context, f: &Polynomial<F>) -> Polynomial<F> {
        normal_form(ctx, f, &self.polys)
    }

    pub fn autoreduce(&mut self, ctx: &Context) {
        self.polys = autoreduce(ctx, &self.polys);
        self.is_groebner_basis = false;
    }

    /// Run Buchberger's algorithm, unless the set is already known to be a
    /// Groebner basis (a no-op in that case).
    pub fn buchberger(&mut self, ctx: &Context, variant: BuchbergerVariant) {
        if self.is_groebner_basis {
            return;
        }
        self.polys = buchberger(ctx, std::mem::take(&mut self.polys), variant);
        self.is_groebner_basis = true;
    }

    /// Replace the set with the minimum (reduced) Groebner basis of the
    /// ideal it generates.
    pub fn build_minimum_basis(&mut self, ctx: &Context, variant: BuchbergerVariant) {
        self.polys = build_minimum_basis(ctx, std::mem::take(&mut self.polys), variant);
        self.is_groebner_basis = true;
    }

    /// Ideal membership: ensures the set is a Groebner basis (running
    /// Buchberger if needed), then checks whether `f`'s normal form is zero.
    pub fn contains(&mut self, ctx: &Context, f: &Polynomial<F>, variant: BuchbergerVariant) -> bool {
        self.buchberger(ctx, variant);
        self.normal_form(ctx, f).is_zero()
    }
}
