//! Single-pass lazy sequences with chainable combinators.
//!
//! A [`FunctionalIterator`] wraps any iterator of `Result<T>`. Combinators
//! (`filter`, `map`, `take`, ...) only build a new pipeline; nothing is pulled
//! from the source until a terminal operation (`list`, `sum`, `for_each`, ...)
//! runs. Terminals pull one element at a time and stop at the first error.
//!
//! Sequences are consumed by every terminal. Use [`FunctionalIterator::list`]
//! when the elements are needed more than once.

use crate::error::{FileQueryError, Result};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::iter::Sum;

pub struct FunctionalIterator<'a, T> {
    inner: Box<dyn Iterator<Item = Result<T>> + 'a>,
}

impl<'a, T: 'a> FunctionalIterator<'a, T> {
    /// Wrap an infallible source.
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Self::from_results(values.into_iter().map(Ok))
    }

    /// Wrap a source whose elements may fail individually.
    pub fn from_results<I>(results: I) -> Self
    where
        I: IntoIterator<Item = Result<T>>,
        I::IntoIter: 'a,
    {
        Self {
            inner: Box::new(results.into_iter()),
        }
    }

    /// Keep the elements for which `predicate` holds. Errors pass through.
    pub fn filter<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool + 'a,
    {
        Self {
            inner: Box::new(self.inner.filter(move |item| match item {
                Ok(value) => predicate(value),
                Err(_) => true,
            })),
        }
    }

    /// Like [`filter`](Self::filter), for predicates that can fail. A failing
    /// predicate turns the element into an error.
    pub fn try_filter<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> Result<bool> + 'a,
    {
        Self {
            inner: Box::new(self.inner.filter_map(move |item| match item {
                Ok(value) => match predicate(&value) {
                    Ok(true) => Some(Ok(value)),
                    Ok(false) => None,
                    Err(e) => Some(Err(e)),
                },
                Err(e) => Some(Err(e)),
            })),
        }
    }

    pub fn map<U, F>(self, mut f: F) -> FunctionalIterator<'a, U>
    where
        U: 'a,
        F: FnMut(T) -> U + 'a,
    {
        FunctionalIterator {
            inner: Box::new(self.inner.map(move |item| item.map(&mut f))),
        }
    }

    /// Map with a fallible function. An `Err` returned by `f` surfaces when the
    /// element is pulled.
    pub fn try_map<U, F>(self, mut f: F) -> FunctionalIterator<'a, U>
    where
        U: 'a,
        F: FnMut(T) -> Result<U> + 'a,
    {
        FunctionalIterator {
            inner: Box::new(self.inner.map(move |item| item.and_then(&mut f))),
        }
    }

    /// Yield at most `n` elements.
    pub fn take(self, n: usize) -> Self {
        Self {
            inner: Box::new(self.inner.take(n)),
        }
    }

    /// Fold the sequence left to right, starting from `start`.
    pub fn reduce<A, F>(self, start: A, mut f: F) -> Result<A>
    where
        F: FnMut(A, T) -> A,
    {
        let mut acc = start;
        for item in self.inner {
            acc = f(acc, item?);
        }
        Ok(acc)
    }

    /// Sum of all elements; `0` for an empty sequence.
    pub fn sum(self) -> Result<T>
    where
        T: Sum<T>,
    {
        self.inner.sum()
    }

    /// Number of elements. Drains the sequence.
    pub fn len(self) -> Result<usize> {
        self.reduce(0, |acc, _| acc + 1)
    }

    pub fn min(self) -> Result<T>
    where
        T: Ord,
    {
        self.reduce(None, |acc: Option<T>, value| match acc {
            Some(current) if current <= value => Some(current),
            _ => Some(value),
        })?
        .ok_or(FileQueryError::EmptySequence)
    }

    pub fn max(self) -> Result<T>
    where
        T: Ord,
    {
        self.reduce(None, |acc: Option<T>, value| match acc {
            Some(current) if current >= value => Some(current),
            _ => Some(value),
        })?
        .ok_or(FileQueryError::EmptySequence)
    }

    /// Materialize the remaining elements, in order.
    pub fn list(self) -> Result<Vec<T>> {
        self.inner.collect()
    }

    pub fn sort_asc(self) -> Result<Vec<T>>
    where
        T: Ord,
    {
        let mut values = self.list()?;
        values.sort();
        Ok(values)
    }

    pub fn sort(self) -> Result<Vec<T>>
    where
        T: Ord,
    {
        self.sort_asc()
    }

    pub fn sort_desc(self) -> Result<Vec<T>>
    where
        T: Ord,
    {
        let mut values = self.list()?;
        values.sort_by(|a, b| b.cmp(a));
        Ok(values)
    }

    /// The `n` largest elements in descending order.
    ///
    /// Keeps a min-heap of at most `n` candidates. Among equal elements the
    /// one that came first in the sequence ranks higher.
    pub fn top_n(self, n: usize) -> Result<Vec<T>>
    where
        T: Ord,
    {
        if n == 0 {
            return Ok(Vec::new());
        }
        let mut heap: BinaryHeap<Reverse<(T, Reverse<usize>)>> = BinaryHeap::with_capacity(n);
        for (idx, item) in self.inner.enumerate() {
            let candidate = (item?, Reverse(idx));
            if heap.len() < n {
                heap.push(Reverse(candidate));
            } else if let Some(mut smallest) = heap.peek_mut() {
                if candidate > smallest.0 {
                    smallest.0 = candidate;
                }
            }
        }
        let mut ranked: Vec<(T, Reverse<usize>)> = heap.into_iter().map(|entry| entry.0).collect();
        ranked.sort_by(|a, b| b.cmp(a));
        Ok(ranked.into_iter().map(|(value, _)| value).collect())
    }

    /// Call `f` on every element, in order.
    pub fn for_each<F>(self, mut f: F) -> Result<()>
    where
        F: FnMut(T),
    {
        for item in self.inner {
            f(item?);
        }
        Ok(())
    }
}

impl<'a, T> IntoIterator for FunctionalIterator<'a, T> {
    type Item = Result<T>;
    type IntoIter = Box<dyn Iterator<Item = Result<T>> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner
    }
}
