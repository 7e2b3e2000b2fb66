//! Macros for embedding miniKANREN as DSL in Rust

/// Creates a goal that succeeds if any of its subgoals succeeds
#[macro_export]
macro_rules! disj {
    () => { $crate::prelude::fail() };
    ($g:expr) => { $g };
    ($g0:expr; $($g:expr);*) => { $crate::prelude::disj2($g0, $crate::disj!($($g);*))}
}

/// Creates a goal that succeeds if all of its subgoals succeed
#[macro_export]
macro_rules! conj {
    () => { $crate::prelude::succeed() };
    ($g:expr) => { $g };
    ($g0:expr, $($g:expr),*) => { $crate::prelude::conj2($g0, $crate::conj!($($g),*))}
}

/// Define a relation.
/// A relation is a function that creates a goal.
///
/// The body is only built when the goal is applied, and then inside a
/// suspension, so relations may refer to themselves.
///
/// The relation is generic over the literal payload unless the payload
/// is named, as in `teacup(t) -> Goal<&'static str> { ... }`.
///
/// Prefixing the name with `trace` logs every application of the
/// relation, with its reified arguments, at `trace` level.
#[macro_export]
macro_rules! defrel {
    (@body: $a:ty, $($args:ident),* { $($g:expr),* }) => {{
        $(
            let $args: $crate::prelude::Term<$a> = $args.into();
        )*
        move |s: $crate::prelude::State<$a>| {
            $(
                let $args = $args.clone();
            )*
            $crate::prelude::Stream::suspension(move || {
                $crate::prelude::Goal::apply(&$crate::conj!($($g),*), s)
            })
        }
    }};

    ($(#[$outer:meta])* $vis:vis trace $name:ident($($args:ident),*) { $($g:expr),* $(,)? }) => {
        $(#[$outer])*
        $vis fn $name<A: $crate::prelude::Atomic>(
            $($args: impl Into<$crate::prelude::Term<A>>),*
        ) -> impl $crate::prelude::Goal<A> {
            $(
                let $args: $crate::prelude::Term<A> = $args.into();
            )*
            move |s: $crate::prelude::State<A>| {
                $crate::__private::tracing::trace!(
                    relation = stringify!($name)
                    $(, $args = ?s.reify(&$args))*,
                    "apply"
                );
                $(
                    let $args = $args.clone();
                )*
                $crate::prelude::Stream::suspension(move || {
                    $crate::prelude::Goal::apply(&$crate::conj!($($g),*), s)
                })
            }
        }
    };

    ($(#[$outer:meta])* $vis:vis $name:ident($($args:ident),*) -> Goal<$a:ty> { $($g:expr),* $(,)? }) => {
        $(#[$outer])*
        $vis fn $name(
            $($args: impl Into<$crate::prelude::Term<$a>>),*
        ) -> impl $crate::prelude::Goal<$a> {
            $crate::defrel!(@body: $a, $($args),* { $($g),* })
        }
    };

    ($(#[$outer:meta])* $vis:vis $name:ident($($args:ident),*) { $($g:expr),* $(,)? }) => {
        $(#[$outer])*
        $vis fn $name<A: $crate::prelude::Atomic>(
            $($args: impl Into<$crate::prelude::Term<A>>),*
        ) -> impl $crate::prelude::Goal<A> {
            $crate::defrel!(@body: A, $($args),* { $($g),* })
        }
    };

    // alternate syntax: separate goals with ;
    ($(#[$outer:meta])* $vis:vis $name:ident($($args:ident),*) { $($g:expr);* $(;)? }) => {
        $crate::defrel!{$(#[$outer])* $vis $name($($args),*) { $($g),* }}
    };
}

/// Run one or more goals.
///
/// The syntax `run!(n, q, goal1, goal2, ...)` produces at most n
/// solutions; in Scheme you would write `(run n (q) goal1 goal2 ...)`.
/// The syntax `run!(*, q, goal1, goal2, ...)` produces all
/// solutions; in Scheme you would write `(run* (q) goal1 goal2 ...)`.
/// The latter does not return if there are infinitely many solutions.
///
/// We support an additional syntax `run!(q, goal1, goal2, ...)`
/// that returns a (possibly infinite) iterator over all solutions.
///
/// `q` is bound to a fresh variable for the goals; each solution is the
/// reified value of `q`. With several query variables, as in
/// `run!(*, (x, y), ...)`, each solution is the reified list `(x y)`.
#[macro_export]
macro_rules! run {
    (*, ($($q:ident),+) $(, $g:expr)* $(,)?) => {
        $crate::prelude::Goal::run_all(&$crate::fresh!(($($q),+) $(, $g)*))
            .map($crate::prelude::reify_query_tuple([$(stringify!($q)),+].len()))
    };

    (*, $q:ident $(, $g:expr)* $(,)?) => {
        $crate::prelude::Goal::run_all(&$crate::fresh!(($q) $(, $g)*))
            .map($crate::prelude::reify_query)
    };

    ($n:expr, ($($q:ident),+) $(, $g:expr)* $(,)?) => {
        $crate::prelude::Goal::run(&$crate::fresh!(($($q),+) $(, $g)*), $n)
            .map($crate::prelude::reify_query_tuple([$(stringify!($q)),+].len()))
    };

    ($n:expr, $q:ident $(, $g:expr)* $(,)?) => {
        $crate::prelude::Goal::run(&$crate::fresh!(($q) $(, $g)*), $n)
            .map($crate::prelude::reify_query)
    };

    (($($q:ident),+) $(, $g:expr)* $(,)?) => {
        $crate::prelude::Goal::iter(&$crate::fresh!(($($q),+) $(, $g)*))
            .map($crate::prelude::reify_query_tuple([$(stringify!($q)),+].len()))
    };

    ($q:ident $(, $g:expr)* $(,)?) => {
        $crate::prelude::Goal::iter(&$crate::fresh!(($q) $(, $g)*))
            .map($crate::prelude::reify_query)
    };
}

/// Bind fresh variables with scope inside the body of `fresh!`.
///
/// The variables are `Var`s, which are `Copy`. The goals are built anew
/// for every state the result is applied to, so other terms they mention
/// have to be cloned where they are used.
#[macro_export]
macro_rules! fresh {
    (($($x:ident),*) $(, $g:expr)* $(,)?) => {
        move |s: $crate::prelude::State<_>| {
            $(
                let ($x, s) = s.fresh_var();
                let _ = &$x;
            )*
            $crate::prelude::Goal::apply(&$crate::conj!($($g),*), s)
        }
    };
}

/// Creates a goal that succeeds if any of its *lines* succeeds.
/// Every successful *line* contributes one or more values.
///
/// A *line* (terminated by `;`) succeeds if all of its
/// goals (separated by `,`) succeed.
#[macro_export]
macro_rules! conde {
    ( $($($g:expr),*;)* ) => {
        $crate::disj!($($crate::conj!( $($g),*));*)
    }
}

/// Build a list term.
///
/// `list![a, b, c]` is a proper list; `list![a, b ; t]` ends in the term `t`.
#[macro_export]
macro_rules! list {
    () => { $crate::prelude::Term::nil() };

    ($($item:expr),+ $(,)?) => {
        $crate::prelude::Term::list(
            vec![$($crate::prelude::Term::from($item)),+],
            $crate::prelude::Term::nil(),
        )
    };

    ($($item:expr),+ ; $tail:expr) => {
        $crate::prelude::Term::list(
            vec![$($crate::prelude::Term::from($item)),+],
            $tail,
        )
    };
}
