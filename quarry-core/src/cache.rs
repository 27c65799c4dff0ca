//! Memoizing random access over lazy sequences.
//!
//! [`LazySequenceCache`] wraps an iterator, possibly infinite, and lets
//! callers read arbitrary positions. Each upstream element is pulled at most
//! once; reading position `i` for the first time pulls everything up to `i`
//! and keeps it.
//!
//! ```rust
//! use quarry_core::cache::{LazySequenceCache, Slot};
//!
//! let mut squares = LazySequenceCache::new((0u64..).map(|n| n * n));
//! assert_eq!(squares.get(10), Slot::Present(&100));
//! assert_eq!(squares.get(3), Slot::Present(&9));
//! assert_eq!(squares.known_size(), None);
//! ```

use std::fmt;

/// Outcome of reading one position of a cached sequence.
///
/// Distinct from `Option`: a sequence of `Option<T>` can hold `None` at a
/// position that exists, which reads as `Present(&None)`, never `Absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot<T> {
    /// The position exists and holds this value.
    Present(T),
    /// The position lies at or beyond the end of a finite sequence.
    Absent,
}

impl<T> Slot<T> {
    /// Whether the position holds a value.
    pub fn is_present(&self) -> bool {
        matches!(self, Slot::Present(_))
    }

    /// Whether the position lies past the end of the sequence.
    pub fn is_absent(&self) -> bool {
        matches!(self, Slot::Absent)
    }

    /// Convert into an `Option`, forgetting the distinction from a payload.
    pub fn present(self) -> Option<T> {
        match self {
            Slot::Present(value) => Some(value),
            Slot::Absent => None,
        }
    }

    /// Apply `f` to a present value.
    pub fn map<U, F>(self, f: F) -> Slot<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Slot::Present(value) => Slot::Present(f(value)),
            Slot::Absent => Slot::Absent,
        }
    }
}

impl<T: Clone> Slot<&T> {
    /// Clone the borrowed value out of the slot.
    pub fn cloned(self) -> Slot<T> {
        self.map(T::clone)
    }
}

/// Random-access cache over a lazy upstream iterator.
///
/// The upstream is dropped as soon as it reports its end; from then on the
/// size is fixed and [`known_size`](Self::known_size) reports it.
pub struct LazySequenceCache<I: Iterator> {
    upstream: Option<I>,
    cache: Vec<I::Item>,
    size: Option<usize>,
}

impl<I: Iterator> LazySequenceCache<I> {
    /// Wrap an upstream sequence. Nothing is pulled until the first read.
    pub fn new<S>(upstream: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        LazySequenceCache {
            upstream: Some(upstream.into_iter()),
            cache: Vec::new(),
            size: None,
        }
    }

    /// Read position `index`, pulling upstream as far as needed.
    ///
    /// On an infinite upstream this loops until `index` is produced.
    pub fn get(&mut self, index: usize) -> Slot<&I::Item> {
        if self.fill_to(index) {
            Slot::Present(&self.cache[index])
        } else {
            Slot::Absent
        }
    }

    /// Read several positions in the given order.
    ///
    /// Returns `None` as soon as one of them is absent. Repeated and
    /// out-of-order indices are allowed.
    pub fn get_many<J>(&mut self, indices: J) -> Option<Vec<I::Item>>
    where
        J: IntoIterator<Item = usize>,
        I::Item: Clone,
    {
        let mut values = Vec::new();
        for index in indices {
            match self.get(index) {
                Slot::Present(value) => values.push(value.clone()),
                Slot::Absent => return None,
            }
        }
        Some(values)
    }

    /// Length of the sequence, once a read has walked past its end.
    pub fn known_size(&self) -> Option<usize> {
        self.size
    }

    /// Number of positions pulled from upstream so far.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.size.is_some()
    }

    /// Walk the sequence from the start, reusing cached positions.
    pub fn iter(&mut self) -> Iter<'_, I>
    where
        I::Item: Clone,
    {
        Iter {
            cache: self,
            position: 0,
        }
    }

    fn fill_to(&mut self, index: usize) -> bool {
        while self.cache.len() <= index {
            let Some(upstream) = self.upstream.as_mut() else {
                return false;
            };
            match upstream.next() {
                Some(item) => self.cache.push(item),
                None => {
                    let size = self.cache.len();
                    tracing::debug!(size, "cached sequence reached its end");
                    self.upstream = None;
                    self.size = Some(size);
                    return false;
                }
            }
        }
        true
    }
}

impl<I: Iterator> fmt::Debug for LazySequenceCache<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazySequenceCache")
            .field("cached_len", &self.cache.len())
            .field("known_size", &self.size)
            .finish()
    }
}

/// Iterator over a [`LazySequenceCache`]; see [`LazySequenceCache::iter`].
pub struct Iter<'a, I: Iterator> {
    cache: &'a mut LazySequenceCache<I>,
    position: usize,
}

impl<I> Iterator for Iter<'_, I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.cache.get(self.position).cloned().present()?;
        self.position += 1;
        Some(value)
    }
}
