//! Compose goals using combinators to build more complex goals
//!

use crate::core::atom::Atomic;
use crate::core::goal::{share, Goal};
use crate::core::state::State;
use crate::core::stream::Stream;

/// Creates a goal that succeeds if either of its subgoals succeeds.
///
/// Both subgoals run on the same state; all results of `g1` come before
/// those of `g2`.
pub fn disj2<A: Atomic>(g1: impl Goal<A>, g2: impl Goal<A>) -> impl Goal<A> {
    move |s: State<A>| Stream::append(g1.apply(s.clone()), g2.apply(s))
}

/// Creates a goal that succeeds if both of its subgoals succeed.
///
/// `g2` runs on every state produced by `g1`.
pub fn conj2<A: Atomic>(g1: impl Goal<A>, g2: impl Goal<A>) -> impl Goal<A> {
    let g2 = share(g2);
    move |s: State<A>| g1.apply(s).append_map(g2.clone())
}

/// Creates a goal that succeeds if g_cond and g_then succeed or g_cond fails and g_else succeeds.
pub fn ifte<A: Atomic>(
    g_cond: impl Goal<A>,
    g_then: impl Goal<A>,
    g_else: impl Goal<A>,
) -> impl Goal<A> {
    let g_then = share(g_then);
    move |s: State<A>| match g_cond.apply(s.clone()).mature() {
        Stream::Empty => g_else.apply(s),
        s_inf => s_inf.append_map(g_then.clone()),
    }
}

/// Creates a goal that succeeds at most once.
pub fn once<A: Atomic>(g: impl Goal<A>) -> impl Goal<A> {
    move |s: State<A>| match g.apply(s).into_parts() {
        Some((a, _)) => Stream::singleton(a),
        None => Stream::empty(),
    }
}
