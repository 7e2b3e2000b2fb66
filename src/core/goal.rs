use super::stream::Stream;
use crate::core::atom::Atomic;
use crate::core::state::State;
use crate::core::stream::StreamIter;
use std::rc::Rc;
use tracing::debug;

/// A goal maps a search state to the stream of states in which it holds.
///
/// Any `Fn(State<A>) -> Stream<State<A>>` closure is a goal.
pub trait Goal<A: Atomic>: 'static {
    fn apply(&self, s: State<A>) -> Stream<State<A>>;

    /// Up to `n` results, starting from the empty state.
    fn run(&self, n: usize) -> Stream<State<A>> {
        debug!(n, "running goal");
        self.apply(State::new()).take(n)
    }

    /// All results, starting from the empty state.
    fn run_all(&self) -> Stream<State<A>> {
        debug!("running goal to completion");
        self.apply(State::new()).take_all()
    }

    fn iter(&self) -> StreamIter<State<A>> {
        self.apply(State::new()).into_iter()
    }
}

impl<A: Atomic, G: 'static + Fn(State<A>) -> Stream<State<A>>> Goal<A> for G {
    fn apply(&self, s: State<A>) -> Stream<State<A>> {
        self(s)
    }
}

/// Apply `goal` to the initial state.
pub fn run_goal<A: Atomic>(goal: &impl Goal<A>) -> Stream<State<A>> {
    debug!("evaluating goal from the initial state");
    goal.apply(State::new())
}

/// A goal that can be handed to suspended streams.
pub(crate) type SharedGoal<A> = Rc<dyn Fn(State<A>) -> Stream<State<A>>>;

pub(crate) fn share<A: Atomic>(goal: impl Goal<A>) -> SharedGoal<A> {
    Rc::new(move |s: State<A>| goal.apply(s))
}
