use crate::core::atom::Atomic;
use crate::core::goal::Goal;
use crate::core::term::Term;

/// Assert that a goal fails
pub fn fails<A: Atomic>(goal: impl Goal<A>) {
    assert!(goal.run(1).is_empty());
}

/// Assert that a goal succeeds at least once
pub fn succeeds<A: Atomic>(goal: impl Goal<A>) {
    assert!(!goal.run(1).is_empty());
}

pub fn has_unique_solution<A: Atomic>(
    mut solutions: impl Iterator<Item = Term<A>>,
    expected: Term<A>,
) {
    assert_eq!(solutions.next(), Some(expected));
    assert_eq!(solutions.next(), None);
}
