use crate::core::atom::Atomic;
use crate::core::goal::Goal;
use crate::core::logic_variable::Var;
use crate::core::state::State;
use crate::core::stream::Stream;
use crate::core::term::Term;
use crate::goals::combinators::disj2;

/// Creates a goal that succeeds if `u` and `v` unify.
///
/// The goal never allocates variables. Like `Substitution::unify` it does
/// not check whether a variable occurs in the term it is bound to.
pub fn eq<A: Atomic>(u: impl Into<Term<A>>, v: impl Into<Term<A>>) -> impl Goal<A> {
    let u = u.into();
    let v = v.into();
    move |s: State<A>| match s.substitution.unify(&u, &v) {
        Some(subs) => Stream::singleton(s.with_substitution(subs)),
        None => Stream::empty(),
    }
}

/// Creates a goal that succeeds if `u` and `v` unify without creating
/// cyclic bindings.
pub fn eq_checked<A: Atomic>(u: impl Into<Term<A>>, v: impl Into<Term<A>>) -> impl Goal<A> {
    let u = u.into();
    let v = v.into();
    move |s: State<A>| match s.substitution.unify_checked(&u, &v) {
        Some(subs) => Stream::singleton(s.with_substitution(subs)),
        None => Stream::empty(),
    }
}

pub fn succeed<A: Atomic>() -> impl Goal<A> {
    |s: State<A>| Stream::singleton(s)
}

pub fn fail<A: Atomic>() -> impl Goal<A> {
    |_: State<A>| Stream::empty()
}

/// Creates a goal that introduces a fresh variable.
///
/// The variable gets the index of the state's counter; the goal built by
/// `f` sees the state with the counter advanced.
pub fn fresh<A: Atomic, G: Goal<A>>(f: impl 'static + Fn(Term<A>) -> G) -> impl Goal<A> {
    move |s: State<A>| {
        let (var, s) = s.fresh_var();
        f(Term::Var(var)).apply(s)
    }
}

/// Like `fresh`, but passes the bare variable, which is `Copy`.
pub fn fresh_var<A: Atomic, G: Goal<A>>(f: impl 'static + Fn(Var) -> G) -> impl Goal<A> {
    move |s: State<A>| {
        let (var, s) = s.fresh_var();
        f(var).apply(s)
    }
}

/// A goal that neither succeeds nor fails.
pub fn nevero<A: Atomic>() -> impl Goal<A> {
    |s: State<A>| Stream::suspension(move || nevero::<A>().apply(s))
}

/// A goal that succeeds an unbounded number of times.
pub fn alwayso<A: Atomic>() -> impl Goal<A> {
    |s: State<A>| Stream::suspension(move || disj2(succeed::<A>(), alwayso::<A>()).apply(s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::goal::run_goal;
    use crate::substitution;

    fn state(subs: crate::core::substitution::Substitution<i32>) -> State<i32> {
        State::new().with_substitution(subs)
    }

    #[test]
    fn eq_extends_the_substitution() {
        let x = Var::new(0);
        let u = Var::new(1);
        assert_eq!(
            eq(x, u).apply(State::new()),
            Stream::singleton(state(substitution! {0 => u}))
        );
        assert_eq!(
            eq(x, 42).apply(State::new()),
            Stream::singleton(state(substitution! {0 => 42}))
        );
        assert_eq!(eq(42, 42).apply(State::new()), Stream::singleton(State::new()));
        assert_eq!(eq(42, 123).apply(State::new()), Stream::empty());
    }

    #[test]
    fn eq_keeps_the_counter() {
        let s = State::<i32> {
            substitution: Default::default(),
            counter: 5,
        };
        let r = eq(Var::new(1), 2).apply(s).into_vec();
        assert_eq!(r[0].counter, 5);
    }

    #[test]
    fn eq_does_not_modify_input_state() {
        let s = state(substitution! {0 => 1});
        let r = eq(Var::new(1), 2).apply(s.clone()).into_vec();
        assert_eq!(s, state(substitution! {0 => 1}));
        assert_eq!(r, vec![state(substitution! {0 => 1, 1 => 2})]);
    }

    #[test]
    fn eq_checked_rejects_cyclic_terms() {
        let x = Var::new(0);
        assert!(eq_checked(x, Term::cons(x, 1)).apply(State::new()).is_empty());
        assert!(!eq(x, Term::cons(x, 1)).apply(State::new()).is_empty());
        assert!(!eq_checked(x, Term::cons(2, 1)).apply(State::new()).is_empty());
    }

    #[test]
    fn succeed_and_fail() {
        assert_eq!(succeed().apply(State::<i32>::new()), Stream::singleton(State::new()));
        assert_eq!(fail().apply(State::<i32>::new()), Stream::Empty);
        assert_eq!(eq(true, false).apply(State::new()), Stream::Empty);
    }

    #[test]
    fn fresh_allocates_variable_from_counter() {
        let goal = fresh(|v| eq(v, 23));
        let result = run_goal(&goal).into_vec();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].counter, 1);
        assert_eq!(result[0].substitution, substitution! {0 => 23});
    }

    #[test]
    fn nested_fresh_variables_are_distinct() {
        let goal = fresh(|x: Term<i32>| fresh(move |y| eq(x.clone(), y)));
        let result = run_goal(&goal).into_vec();
        assert_eq!(result[0].counter, 2);
        assert_eq!(result[0].substitution, substitution! {0 => Var::new(1)});
    }

    #[test]
    fn fresh_continues_from_the_received_counter() {
        let s = State::<i32> {
            substitution: Default::default(),
            counter: 7,
        };
        let r = fresh_var(|v| eq(v, 1)).apply(s).into_vec();
        assert_eq!(r[0].substitution, substitution! {7 => 1});
        assert_eq!(r[0].counter, 8);
    }

    #[test]
    fn alwayso_succeeds_repeatedly() {
        assert_eq!(
            alwayso().apply(State::<i32>::new()).take(3),
            Stream::from_iter(vec![State::new(), State::new(), State::new()])
        );
    }

    #[test]
    fn nevero_produces_only_suspensions() {
        let results: Vec<_> = nevero::<i32>()
            .apply(State::new())
            .into_iter()
            .with_budget(100)
            .collect();
        assert_eq!(results.len(), 1);
        assert!(results[0].is_err());
    }
}
