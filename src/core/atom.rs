//! Atomic payloads of literal terms.

use std::fmt::{Debug, Formatter, Result};
use std::rc::Rc;

/// Values that can be stored in a `Term::Literal`.
///
/// Atomic values unify only if they are equal. Equality must be
/// reflexive, so floating point numbers are not atomic.
pub trait Atomic: Clone + Eq + Debug + 'static {
    /// Returns `true` if the value terminates a proper list.
    fn is_nil(&self) -> bool {
        false
    }
}

impl Atomic for () {
    fn is_nil(&self) -> bool {
        true
    }
}

impl Atomic for bool {}

impl Atomic for u8 {}

impl Atomic for u16 {}

impl Atomic for u32 {}

impl Atomic for u64 {}

impl Atomic for u128 {}

impl Atomic for usize {}

impl Atomic for i8 {}

impl Atomic for i16 {}

impl Atomic for i32 {}

impl Atomic for i64 {}

impl Atomic for i128 {}

impl Atomic for isize {}

impl Atomic for char {}

impl Atomic for String {}

impl Atomic for &'static str {}

/// A literal that can hold values of different kinds in the same term.
#[derive(Clone, PartialEq, Eq)]
pub enum Atom {
    Nil,
    Bool(bool),
    Int(i64),
    Char(char),
    Str(Rc<str>),
}

impl Atomic for Atom {
    fn is_nil(&self) -> bool {
        matches!(self, Atom::Nil)
    }
}

impl Debug for Atom {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Atom::Nil => write!(f, "()"),
            Atom::Bool(b) => write!(f, "{:?}", b),
            Atom::Int(i) => write!(f, "{:?}", i),
            Atom::Char(c) => write!(f, "{:?}", c),
            Atom::Str(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<()> for Atom {
    fn from(_: ()) -> Self {
        Atom::Nil
    }
}

impl From<bool> for Atom {
    fn from(b: bool) -> Self {
        Atom::Bool(b)
    }
}

impl From<i64> for Atom {
    fn from(i: i64) -> Self {
        Atom::Int(i)
    }
}

impl From<i32> for Atom {
    fn from(i: i32) -> Self {
        Atom::Int(i64::from(i))
    }
}

impl From<char> for Atom {
    fn from(c: char) -> Self {
        Atom::Char(c)
    }
}

impl From<&str> for Atom {
    fn from(s: &str) -> Self {
        Atom::Str(s.into())
    }
}

impl From<String> for Atom {
    fn from(s: String) -> Self {
        Atom::Str(s.into())
    }
}
