//! Errors of the fallible helpers around the kernel.
//!
//! Unification failure is not an error: it shows up as `None` from
//! `Substitution::unify` or as an empty stream from a goal.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("term is not a proper list")]
    ImproperList,

    #[error("search exceeded its budget of {budget} suspended steps")]
    BudgetExhausted { budget: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
