//! Lazy streams of search results.
//!
//! A stream is either empty, a mature pair of a value and the rest of
//! the stream, or a suspension that produces the rest of the stream
//! when forced. Suspensions let goals describe unbounded result sets.

use crate::error::{Error, Result};
use std::ops::Deref;
use std::rc::Rc;

pub enum Stream<T> {
    Empty,
    Pair(T, Rest<T>),
    Suspension(Box<dyn FnOnce() -> Stream<T>>),
}

/// The owned tail of a mature stream node.
///
/// Dropping a tail unlinks the nodes behind it one at a time, so long
/// streams are released without deep recursion.
pub struct Rest<T>(Box<Stream<T>>);

impl<T> Rest<T> {
    pub fn new(s: Stream<T>) -> Self {
        Rest(Box::new(s))
    }

    pub fn into_stream(mut self) -> Stream<T> {
        std::mem::replace(&mut *self.0, Stream::Empty)
    }
}

impl<T> Deref for Rest<T> {
    type Target = Stream<T>;
    fn deref(&self) -> &Stream<T> {
        &self.0
    }
}

impl<T> Drop for Rest<T> {
    fn drop(&mut self) {
        let mut next = std::mem::replace(&mut *self.0, Stream::Empty);
        while let Stream::Pair(a, d) = next {
            drop(a);
            next = d.into_stream();
        }
    }
}

impl<T> Stream<T> {
    pub fn empty() -> Self {
        Stream::Empty
    }

    pub fn singleton(x: T) -> Self {
        Stream::cons(x, Stream::Empty)
    }

    pub fn cons(a: T, d: Self) -> Self {
        Stream::Pair(a, Rest::new(d))
    }

    pub fn suspension(sup: impl 'static + FnOnce() -> Stream<T>) -> Self {
        Stream::Suspension(Box::new(sup))
    }

    pub fn from_iter(iter: impl IntoIterator<Item = T>) -> Self {
        let items: Vec<_> = iter.into_iter().collect();
        Stream::prepend(items, Stream::Empty)
    }

    /// Put `items` in front of `tail`, keeping their order.
    fn prepend(items: Vec<T>, tail: Self) -> Self {
        items
            .into_iter()
            .rev()
            .fold(tail, |d, a| Stream::cons(a, d))
    }

    /// Returns `true` only for the empty stream; an unforced suspension
    /// is not known to be empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, Stream::Empty)
    }

    pub fn is_mature(&self) -> bool {
        !matches!(self, Stream::Suspension(_))
    }

    /// Number of elements, or `None` if the stream contains a suspension.
    pub fn len(&self) -> Option<usize> {
        let mut n = 0;
        let mut s = self;
        loop {
            match s {
                Stream::Empty => return Some(n),
                Stream::Pair(_, d) => {
                    n += 1;
                    s = &**d;
                }
                Stream::Suspension(_) => return None,
            }
        }
    }

    pub fn head(&self) -> Option<&T> {
        match self {
            Stream::Pair(a, _) => Some(a),
            _ => None,
        }
    }

    pub fn tail(&self) -> Option<&Stream<T>> {
        match self {
            Stream::Pair(_, d) => Some(&**d),
            _ => None,
        }
    }

    /// Force suspensions until the stream is empty or has a head.
    pub fn mature(self) -> Self {
        let mut s = self;
        loop {
            match s {
                Stream::Suspension(sup) => s = sup(),
                s => return s,
            }
        }
    }

    /// Split a stream into its first element and the rest, forcing
    /// suspensions as needed.
    pub fn into_parts(self) -> Option<(T, Stream<T>)> {
        match self.mature() {
            Stream::Pair(a, d) => Some((a, d.into_stream())),
            _ => None,
        }
    }

    /// Take at most `n` elements, forcing suspensions as needed.
    pub fn take(self, n: usize) -> Stream<T> {
        Stream::from_iter(self.into_iter().take(n))
    }

    /// Take all elements. Does not return if the stream is infinite.
    pub fn take_all(self) -> Stream<T> {
        Stream::from_iter(self)
    }

    pub fn into_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }
}

impl<T> std::iter::IntoIterator for Stream<T> {
    type Item = T;
    type IntoIter = StreamIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        StreamIter(self)
    }
}

impl<T: 'static> Stream<T> {
    /// All elements of `s` followed by all elements of `t`.
    ///
    /// The order is strictly left-biased: if `s` is infinite, no element
    /// of `t` is ever produced.
    pub fn append(s: Stream<T>, t: Stream<T>) -> Self {
        let mut prefix = vec![];
        let mut s = s;
        let tail = loop {
            match s {
                Stream::Empty => break t,
                Stream::Pair(a, d) => {
                    prefix.push(a);
                    s = d.into_stream();
                }
                Stream::Suspension(sup) => {
                    break Stream::suspension(move || Stream::append(sup(), t));
                }
            }
        };
        Stream::prepend(prefix, tail)
    }

    /// Apply `g` to every element and concatenate the resulting streams
    /// in order.
    pub fn append_map(self, g: Rc<dyn Fn(T) -> Self>) -> Self {
        let mut heads = vec![];
        let mut s = self;
        let rest = loop {
            match s {
                Stream::Empty => break Stream::Empty,
                Stream::Pair(a, d) => {
                    heads.push(a);
                    s = d.into_stream();
                }
                Stream::Suspension(sup) => {
                    let g = g.clone();
                    break Stream::suspension(move || sup().append_map(g));
                }
            }
        };
        let results: Vec<_> = heads.into_iter().map(|a| g(a)).collect();
        results
            .into_iter()
            .rev()
            .fold(rest, |acc, r| Stream::append(r, acc))
    }

    pub fn map<U: 'static>(self, f: impl 'static + Fn(T) -> U) -> Stream<U> {
        Stream::map_rc(self, Rc::new(f))
    }

    fn map_rc<U: 'static>(self, f: Rc<dyn Fn(T) -> U>) -> Stream<U> {
        let mut heads = vec![];
        let mut s = self;
        let rest = loop {
            match s {
                Stream::Empty => break Stream::Empty,
                Stream::Pair(a, d) => {
                    heads.push(f(a));
                    s = d.into_stream();
                }
                Stream::Suspension(sup) => {
                    let f = f.clone();
                    break Stream::suspension(move || sup().map_rc(f));
                }
            }
        };
        Stream::prepend(heads, rest)
    }
}

impl<T: PartialEq> PartialEq for Stream<T> {
    fn eq(&self, other: &Self) -> bool {
        use Stream::*;
        let (mut x, mut y) = (self, other);
        loop {
            match (x, y) {
                (Empty, Empty) => return true,
                (Pair(a, dx), Pair(b, dy)) if a == b => {
                    x = &**dx;
                    y = &**dy;
                }
                _ => return false,
            }
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stream<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Stream::Empty => write!(f, "()"),
            Stream::Suspension(_) => write!(f, "(...)"),
            Stream::Pair(x, next) => {
                let mut next = next;
                write!(f, "({:?}", x)?;
                loop {
                    match &**next {
                        Stream::Empty => break,
                        Stream::Pair(x, n) => {
                            write!(f, " {:?}", x)?;
                            next = n;
                        }
                        Stream::Suspension(_) => {
                            write!(f, " ...")?;
                            break;
                        }
                    }
                }
                write!(f, ")")
            }
        }
    }
}

pub struct StreamIter<T>(Stream<T>);

impl<T> StreamIter<T> {
    /// Limit the number of suspensions the iterator may force.
    pub fn with_budget(self, budget: usize) -> Budgeted<T> {
        Budgeted {
            stream: self.0,
            budget,
            remaining: budget,
            exhausted: false,
        }
    }
}

impl<T> Iterator for StreamIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match std::mem::replace(&mut self.0, Stream::Empty) {
                Stream::Empty => return None,
                Stream::Pair(a, d) => {
                    self.0 = d.into_stream();
                    return Some(a);
                }
                Stream::Suspension(sup) => self.0 = sup(),
            }
        }
    }
}

/// Stream iterator that gives up after forcing a fixed number of
/// suspensions.
///
/// Yields `Err(Error::BudgetExhausted)` once when the budget runs out,
/// and nothing after that.
pub struct Budgeted<T> {
    stream: Stream<T>,
    budget: usize,
    remaining: usize,
    exhausted: bool,
}

impl<T> Iterator for Budgeted<T> {
    type Item = Result<T>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        loop {
            match std::mem::replace(&mut self.stream, Stream::Empty) {
                Stream::Empty => return None,
                Stream::Pair(a, d) => {
                    self.stream = d.into_stream();
                    return Some(Ok(a));
                }
                Stream::Suspension(sup) => {
                    if self.remaining == 0 {
                        self.exhausted = true;
                        return Some(Err(Error::BudgetExhausted {
                            budget: self.budget,
                        }));
                    }
                    self.remaining -= 1;
                    self.stream = sup();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ones() -> Stream<i32> {
        Stream::suspension(|| Stream::cons(1, ones()))
    }

    fn delayed(s: Stream<i32>) -> Stream<i32> {
        Stream::suspension(move || s)
    }

    #[test]
    fn empty_stream_has_no_head() {
        let s = Stream::<i32>::empty();
        assert!(s.is_empty());
        assert_eq!(s.head(), None);
        assert!(s.tail().is_none());
        assert_eq!(s.len(), Some(0));
    }

    #[test]
    fn head_and_tail_of_mature_stream() {
        let s = Stream::from_iter(vec![1, 2, 3]);
        assert_eq!(s.head(), Some(&1));
        assert_eq!(s.tail().and_then(Stream::head), Some(&2));
        assert_eq!(s.len(), Some(3));
    }

    #[test]
    fn suspensions_have_no_known_length() {
        let s = Stream::cons(0, delayed(Stream::singleton(1)));
        assert_eq!(s.len(), None);
        assert!(!s.is_empty());
        assert!(!delayed(Stream::empty()).is_mature());
    }

    #[test]
    fn append_to_empty_returns_second_stream() {
        let s = Stream::append(Stream::empty(), Stream::from_iter(vec![1, 2]));
        assert_eq!(s, Stream::from_iter(vec![1, 2]));
    }

    #[test]
    fn append_yields_first_stream_before_second() {
        let s = Stream::append(Stream::from_iter(vec![1, 2]), Stream::from_iter(vec![3, 4]));
        assert_eq!(s, Stream::from_iter(vec![1, 2, 3, 4]));
    }

    #[test]
    fn append_keeps_left_bias_across_suspensions() {
        let s = Stream::append(
            Stream::cons(1, delayed(Stream::from_iter(vec![2, 3]))),
            Stream::from_iter(vec![4]),
        );
        assert_eq!(s.into_vec(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn append_with_infinite_first_stream_never_reaches_second() {
        let s = Stream::append(ones(), Stream::singleton(2));
        assert_eq!(s.take(5).into_vec(), vec![1; 5]);
    }

    #[test]
    fn append_map_concatenates_results_in_order() {
        let s = Stream::from_iter(vec![1, 2, 3]);
        let g: Rc<dyn Fn(i32) -> Stream<i32>> =
            Rc::new(|x| Stream::from_iter(vec![x * 10, x * 10 + 1]));
        assert_eq!(
            s.append_map(g).into_vec(),
            vec![10, 11, 20, 21, 30, 31]
        );
    }

    #[test]
    fn append_map_of_empty_is_empty() {
        let g: Rc<dyn Fn(i32) -> Stream<i32>> = Rc::new(Stream::singleton);
        assert!(Stream::empty().append_map(g).is_empty());
    }

    #[test]
    fn append_map_defers_suspended_tails() {
        let s = Stream::cons(1, delayed(Stream::singleton(2)));
        let g: Rc<dyn Fn(i32) -> Stream<i32>> = Rc::new(|x| Stream::singleton(-x));
        let r = s.append_map(g);
        assert_eq!(r.len(), None);
        assert_eq!(r.into_vec(), vec![-1, -2]);
    }

    #[test]
    fn take_forces_only_what_is_needed() {
        assert_eq!(ones().take(3), Stream::from_iter(vec![1, 1, 1]));
        assert_eq!(ones().take(0), Stream::empty());
    }

    #[test]
    fn into_parts_matures_the_stream() {
        let (a, d) = delayed(Stream::from_iter(vec![7, 8])).into_parts().unwrap();
        assert_eq!(a, 7);
        assert_eq!(d, Stream::singleton(8));
        assert!(delayed(Stream::empty()).into_parts().is_none());
    }

    #[test]
    fn map_transforms_lazily() {
        let s = ones().map(|x| x + 1);
        assert_eq!(s.take(2).into_vec(), vec![2, 2]);
    }

    #[test]
    fn budget_stops_infinite_search() {
        let results: Vec<_> = ones().into_iter().with_budget(3).collect();
        assert_eq!(
            results,
            vec![Ok(1), Ok(1), Ok(1), Err(Error::BudgetExhausted { budget: 3 })]
        );
    }

    #[test]
    fn budget_is_not_reported_for_finite_search() {
        let s = delayed(Stream::from_iter(vec![1, 2]));
        let results: Vec<_> = s.into_iter().with_budget(1).collect();
        assert_eq!(results, vec![Ok(1), Ok(2)]);
    }

    #[test]
    fn long_streams_can_be_dropped() {
        let s = Stream::from_iter(0..200_000);
        assert_eq!(s.len(), Some(200_000));
        drop(s);

        let s = ones().take(200_000);
        assert_eq!(s.head(), Some(&1));
    }

    #[test]
    fn streams_print_as_lists() {
        assert_eq!(format!("{:?}", Stream::<i32>::empty()), "()");
        assert_eq!(format!("{:?}", Stream::from_iter(vec![1, 2])), "(1 2)");
        assert_eq!(format!("{:?}", Stream::cons(1, ones())), "(1 ...)");
        assert_eq!(format!("{:?}", ones()), "(...)");
    }
}
