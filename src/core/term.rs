//! Logic terms.
//!
//! A term is a literal, a logic variable, or a pair of terms. Pairs
//! whose tail is another pair form lists; a list is *proper* if the
//! last tail is a nil literal (see `Atomic::is_nil`).

use crate::core::atom::{Atom, Atomic};
use crate::core::logic_variable::Var;
use crate::error::{Error, Result};
use std::fmt::{Debug, Formatter};
use std::iter::FromIterator;
use std::rc::Rc;

#[derive(Clone)]
pub enum Term<A> {
    Literal(A),
    Var(Var),
    Pair(Rc<Term<A>>, Rc<Term<A>>),
}

impl<A> Term<A> {
    pub fn lit(value: A) -> Self {
        Term::Literal(value)
    }

    pub fn var(index: usize) -> Self {
        Term::Var(Var::new(index))
    }

    pub fn is_var(&self) -> bool {
        matches!(self, Term::Var(_))
    }

    pub fn is_pair(&self) -> bool {
        matches!(self, Term::Pair(_, _))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    pub fn as_var(&self) -> Option<Var> {
        match self {
            Term::Var(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_pair(&self) -> Option<(&Term<A>, &Term<A>)> {
        match self {
            Term::Pair(first, rest) => Some((&**first, &**rest)),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<&A> {
        match self {
            Term::Literal(a) => Some(a),
            _ => None,
        }
    }
}

impl<A: Atomic> Term<A> {
    pub fn cons(first: impl Into<Term<A>>, rest: impl Into<Term<A>>) -> Self {
        Term::Pair(Rc::new(first.into()), Rc::new(rest.into()))
    }

    /// Build a list of `items` whose last pair ends in `tail`.
    ///
    /// With an empty `items` the result is `tail` itself.
    pub fn list(items: impl IntoIterator<Item = Term<A>>, tail: impl Into<Term<A>>) -> Self {
        let items: Vec<_> = items.into_iter().collect();
        items
            .into_iter()
            .rev()
            .fold(tail.into(), |rest, first| Term::cons(first, rest))
    }

    /// Returns `true` if this is a nil literal, i.e. the empty list.
    pub fn is_nil(&self) -> bool {
        self.as_literal().map(Atomic::is_nil).unwrap_or(false)
    }

    /// Collect the elements of a proper list.
    pub fn to_vec(&self) -> Result<Vec<Term<A>>> {
        let mut items = vec![];
        let mut cursor = self;
        loop {
            match cursor {
                Term::Pair(first, rest) => {
                    items.push((**first).clone());
                    cursor = &**rest;
                }
                Term::Literal(a) if a.is_nil() => return Ok(items),
                _ => return Err(Error::ImproperList),
            }
        }
    }
}

impl<A: Atomic + From<()>> Term<A> {
    /// The empty list.
    pub fn nil() -> Self {
        Term::Literal(A::from(()))
    }
}

/// Shorthand for literals of the heterogeneous `Atom` type.
pub fn atom(value: impl Into<Atom>) -> Term<Atom> {
    Term::Literal(value.into())
}

impl<A: Atomic> From<A> for Term<A> {
    fn from(a: A) -> Self {
        Term::Literal(a)
    }
}

impl<A> From<Var> for Term<A> {
    fn from(v: Var) -> Self {
        Term::Var(v)
    }
}

impl<A: Atomic + From<()>> FromIterator<Term<A>> for Term<A> {
    fn from_iter<I: IntoIterator<Item = Term<A>>>(iter: I) -> Self {
        Term::list(iter, Term::nil())
    }
}

impl<A: PartialEq> PartialEq for Term<A> {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((x, y)) = pending.pop() {
            match (x, y) {
                (Term::Literal(a), Term::Literal(b)) if a == b => {}
                (Term::Var(a), Term::Var(b)) if a == b => {}
                (Term::Pair(xa, xd), Term::Pair(ya, yd)) => {
                    if !Rc::ptr_eq(xd, yd) {
                        pending.push((&**xd, &**yd));
                    }
                    if !Rc::ptr_eq(xa, ya) {
                        pending.push((&**xa, &**ya));
                    }
                }
                _ => return false,
            }
        }
        true
    }
}

impl<A> Drop for Term<A> {
    fn drop(&mut self) {
        let rest = match self {
            Term::Pair(_, rest) if rest.is_pair() && Rc::strong_count(rest) == 1 => rest,
            _ => return,
        };
        let mut next = std::mem::replace(rest, unlinked());
        while let Ok(mut term) = Rc::try_unwrap(next) {
            next = match &mut term {
                Term::Pair(_, rest) if rest.is_pair() => std::mem::replace(rest, unlinked()),
                _ => return,
            };
        }
    }
}

/// Placeholder for a tail that has been taken out of a pair being dropped.
fn unlinked<A>() -> Rc<Term<A>> {
    Rc::new(Term::Var(Var::new(0)))
}

impl<A: Atomic> Debug for Term<A> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Term::Literal(a) => write!(f, "{:?}", a),
            Term::Var(v) => write!(f, "{:?}", v),
            Term::Pair(first, rest) => {
                write!(f, "({:?}", first)?;
                let mut rest = rest;
                loop {
                    match &**rest {
                        Term::Pair(a, d) => {
                            write!(f, " {:?}", a)?;
                            rest = d;
                        }
                        Term::Literal(a) if a.is_nil() => break,
                        tail => {
                            write!(f, " . {:?}", tail)?;
                            break;
                        }
                    }
                }
                write!(f, ")")
            }
        }
    }
}
