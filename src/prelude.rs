pub use crate::{
    config::{run_with, SearchConfig},
    core::{
        atom::{Atom, Atomic},
        goal::{run_goal, Goal},
        logic_variable::Var,
        state::State,
        stream::{Budgeted, Stream, StreamIter},
        substitution::{resolve, Substitution},
        term::{atom, Term},
    },
    error::Error,
    goals::{combinators::*, list::*, primitive::*},
    reify_query, reify_query_tuple,
};
