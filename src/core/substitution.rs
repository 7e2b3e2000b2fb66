//! Substitutions map variables to terms.
//!
//! Terms can be literals, pairs or variables themselves. A substitution
//! is persistent: extending it produces a new substitution that shares
//! structure with the old one, which stays valid and unchanged.

use crate::core::atom::Atomic;
use crate::core::logic_variable::Var;
use crate::core::term::Term;
use im::OrdMap;
use std::collections::HashMap;
use std::fmt::Formatter;
use tracing::trace;

/// Mapping of variables to terms.
pub struct Substitution<A> {
    subs: OrdMap<Var, Term<A>>,
}

impl<A: Atomic> Clone for Substitution<A> {
    fn clone(&self) -> Self {
        Substitution {
            subs: self.subs.clone(),
        }
    }
}

impl<A: Atomic> PartialEq for Substitution<A> {
    fn eq(&self, other: &Self) -> bool {
        self.subs == other.subs
    }
}

impl<A: Atomic> Default for Substitution<A> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<A: Atomic> Substitution<A> {
    /// Initialize an empty substitution
    pub fn empty() -> Self {
        Substitution {
            subs: OrdMap::new(),
        }
    }

    /// Get number of substituted variables
    pub fn len(&self) -> usize {
        self.subs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subs.is_empty()
    }

    /// Get the term `x` is directly bound to, without walking.
    pub fn get(&self, x: &Var) -> Option<&Term<A>> {
        self.subs.get(x)
    }

    /// Iterate over all bindings in order of variable index.
    pub fn iter(&self) -> impl Iterator<Item = (&Var, &Term<A>)> {
        self.subs.iter()
    }

    /// Extend substitution with a variable => term mapping.
    ///
    /// `self` is not modified. An existing binding of `x` is replaced.
    pub fn extend(&self, x: Var, v: Term<A>) -> Self {
        Substitution {
            subs: self.subs.update(x, v),
        }
    }

    /// Attempt to resolve the value of a variable.
    ///
    /// If `v` is no variable or a variable that is not substituted,
    /// `v` is returned. Chains of variables are followed to their end.
    pub fn walk<'a>(&'a self, mut v: &'a Term<A>) -> &'a Term<A> {
        while let Term::Var(var) = v {
            match self.subs.get(var) {
                Some(next) => v = next,
                None => break,
            }
        }
        v
    }

    /// Attempt to resolve any variables contained in `v`.
    ///
    /// List spines are followed in a loop; only nested first elements
    /// recurse.
    pub fn walk_star(&self, v: &Term<A>) -> Term<A> {
        let mut firsts = vec![];
        let mut v = self.walk(v);
        while let Term::Pair(first, rest) = v {
            firsts.push(self.walk_star(first));
            v = self.walk(rest);
        }
        Term::list(firsts, v.clone())
    }

    /// Returns `true` if `v` contains a variable that is equivalent
    /// to `x` under this substitution.
    pub fn occurs(&self, x: &Var, v: &Term<A>) -> bool {
        let mut pending = vec![v];
        while let Some(v) = pending.pop() {
            match self.walk(v) {
                Term::Var(var) if var == x => return true,
                Term::Pair(first, rest) => {
                    pending.push(rest);
                    pending.push(first);
                }
                _ => {}
            }
        }
        false
    }

    /// Attempt to unify `u` and `v` under this substitution.
    ///
    /// Returns the extended substitution, or `None` if the terms cannot
    /// be made equal. Pairs are unified first component first, threading
    /// the bindings into the rest.
    ///
    /// No occurs-check is performed: unifying a variable with a term that
    /// contains it succeeds and creates a cyclic binding, on which
    /// `walk_star` and `reify` do not terminate. Use `unify_checked` when
    /// such terms can arise.
    pub fn unify(&self, u: &Term<A>, v: &Term<A>) -> Option<Self> {
        self.unify_with(u, v, false)
    }

    /// Like `unify`, but fails instead of binding a variable to a term
    /// that contains it.
    pub fn unify_checked(&self, u: &Term<A>, v: &Term<A>) -> Option<Self> {
        self.unify_with(u, v, true)
    }

    fn unify_with(&self, u: &Term<A>, v: &Term<A>, check_occurs: bool) -> Option<Self> {
        let mut s = self.clone();
        let mut pending = vec![(u.clone(), v.clone())];

        while let Some((u, v)) = pending.pop() {
            let u = s.walk(&u).clone();
            let v = s.walk(&v).clone();

            match (&u, &v) {
                (Term::Var(x), Term::Var(y)) if x == y => {}
                (Term::Var(x), _) => s = s.bind(*x, v.clone(), check_occurs)?,
                (_, Term::Var(y)) => s = s.bind(*y, u.clone(), check_occurs)?,
                (Term::Pair(ua, ud), Term::Pair(va, vd)) => {
                    pending.push(((**ud).clone(), (**vd).clone()));
                    pending.push(((**ua).clone(), (**va).clone()));
                }
                (Term::Literal(a), Term::Literal(b)) if a == b => {}
                _ => {
                    trace!(?u, ?v, "unification failed");
                    return None;
                }
            }
        }

        Some(s)
    }

    fn bind(&self, x: Var, v: Term<A>, check_occurs: bool) -> Option<Self> {
        if check_occurs && self.occurs(&x, &v) {
            trace!(?x, ?v, "occurs check failed");
            None
        } else {
            Some(self.extend(x, v))
        }
    }

    /// Replace all variables contained in `v` with their substituted
    /// values and rename the variables that remain fresh to `_0`, `_1`,
    /// ... in order of appearance.
    pub fn reify(&self, v: &Term<A>) -> Term<A> {
        let v = self.walk_star(v);
        reify_fresh(&v, &mut HashMap::new())
    }
}

fn reify_fresh<A: Atomic>(v: &Term<A>, names: &mut HashMap<Var, Var>) -> Term<A> {
    let mut firsts = vec![];
    let mut v = v;
    while let Term::Pair(first, rest) = v {
        firsts.push(reify_fresh(first, names));
        v = &**rest;
    }
    let tail = match v {
        Term::Var(var) => {
            let next = Var::new(names.len());
            Term::Var(*names.entry(*var).or_insert(next))
        }
        _ => v.clone(),
    };
    Term::list(firsts, tail)
}

/// Resolve `term` under `substitution`. See `Substitution::walk`.
pub fn resolve<A: Atomic>(term: &Term<A>, substitution: &Substitution<A>) -> Term<A> {
    substitution.walk(term).clone()
}

impl<A: Atomic> std::fmt::Debug for Substitution<A> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{{")?;
        let mut iter = self.subs.iter();
        if let Some((var, val)) = iter.next() {
            write!(f, "{:?}: {:?}", var, val)?;
        }
        for (var, val) in iter {
            write!(f, ", {:?}: {:?}", var, val)?;
        }
        write!(f, "}}")
    }
}

/// Construct a substitution from `variable index => term` pairs.
#[macro_export]
macro_rules! substitution {
    ($($var:expr => $val:expr),* $(,)?) => {{
        let subs = $crate::core::substitution::Substitution::empty();
        $(
            let subs = subs.extend(
                $crate::core::logic_variable::Var::from($var),
                $crate::core::term::Term::from($val),
            );
        )*
        subs
    }};
}
