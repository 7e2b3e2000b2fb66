//! Search states.

use crate::core::atom::Atomic;
use crate::core::logic_variable::Var;
use crate::core::substitution::Substitution;
use crate::core::term::Term;
use tracing::trace;

/// A point in the search: the bindings made so far and the index of the
/// next fresh variable.
///
/// States are values. Goals derive new states from the one they receive,
/// so separate branches of a search never observe each other's bindings
/// or variable allocations.
pub struct State<A> {
    pub substitution: Substitution<A>,
    pub counter: usize,
}

impl<A: Atomic> State<A> {
    /// The initial state: no bindings, no variables allocated.
    pub fn new() -> Self {
        State {
            substitution: Substitution::empty(),
            counter: 0,
        }
    }

    pub fn with_substitution(&self, substitution: Substitution<A>) -> Self {
        State {
            substitution,
            counter: self.counter,
        }
    }

    /// Allocate a fresh variable.
    ///
    /// Returns the variable and the state whose counter is advanced past it.
    pub fn fresh_var(self) -> (Var, Self) {
        let var = Var::new(self.counter);
        trace!(?var, "fresh variable");
        let state = State {
            substitution: self.substitution,
            counter: self.counter + 1,
        };
        (var, state)
    }

    /// See `Substitution::walk`.
    pub fn walk<'a>(&'a self, t: &'a Term<A>) -> &'a Term<A> {
        self.substitution.walk(t)
    }

    /// See `Substitution::reify`.
    pub fn reify(&self, t: &Term<A>) -> Term<A> {
        self.substitution.reify(t)
    }
}

impl<A: Atomic> Default for State<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Atomic> Clone for State<A> {
    fn clone(&self) -> Self {
        State {
            substitution: self.substitution.clone(),
            counter: self.counter,
        }
    }
}

impl<A: Atomic> PartialEq for State<A> {
    fn eq(&self, other: &Self) -> bool {
        self.counter == other.counter && self.substitution == other.substitution
    }
}

impl<A: Atomic> std::fmt::Debug for State<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}#{}", self.substitution, self.counter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_states_are_empty() {
        let state = State::<i32>::new();
        assert!(state.substitution.is_empty());
        assert_eq!(state.counter, 0);
        assert_eq!(state, State::default());
    }

    #[test]
    fn fresh_variables_advance_the_counter() {
        let (x, state) = State::<i32>::new().fresh_var();
        let (y, state) = state.fresh_var();
        assert_eq!(x, Var::new(0));
        assert_eq!(y, Var::new(1));
        assert_eq!(state.counter, 2);
    }

    #[test]
    fn fresh_variables_in_separate_branches_are_independent() {
        let (_, state) = State::<i32>::new().fresh_var();
        let (left, _) = state.clone().fresh_var();
        let (right, _) = state.fresh_var();
        assert_eq!(left, right);
    }

    #[test]
    fn states_print_substitution_and_counter() {
        let (x, state) = State::new().fresh_var();
        let state = state.with_substitution(state.substitution.extend(x, Term::lit(23)));
        assert_eq!(format!("{:?}", state), "{_0: 23}#1");
    }
}
