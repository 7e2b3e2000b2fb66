#[macro_use]
pub mod macros;
pub mod config;
pub mod core;
pub mod error;
pub mod goals;
pub mod prelude;

#[cfg(test)]
mod testing;

pub use crate::config::{run_with, SearchConfig};
pub use crate::core::goal::run_goal;
pub use crate::error::{Error, Result};

use crate::core::atom::Atomic;
use crate::core::state::State;
use crate::core::term::Term;

/// Reified value of the query variable of `run!`.
#[doc(hidden)]
pub fn reify_query<A: Atomic>(s: State<A>) -> Term<A> {
    s.reify(&Term::var(0))
}

/// Reified list of the first `arity` variables, the query of `run!` with
/// several query variables.
#[doc(hidden)]
pub fn reify_query_tuple<A: Atomic + From<()>>(arity: usize) -> impl Fn(State<A>) -> Term<A> {
    let query: Term<A> = (0..arity).map(Term::var).collect();
    move |s: State<A>| s.reify(&query)
}

#[doc(hidden)]
pub mod __private {
    pub use tracing;
}
