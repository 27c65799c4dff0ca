//! Sequences whose length becomes known part-way through.
//!
//! A [`DeferredLengthSequence`] starts with an unknown length and keeps
//! yielding. At some point the producer (or its owner) may learn how many
//! elements the whole sequence will have and declare it once with
//! [`set_output_size`](DeferredLengthSequence::set_output_size). From then on
//! the end is a matter of counting.

use crate::error::*;
use std::iter::FusedIterator;

/// Production counter and declared total of a deferred-length sequence.
///
/// Handed to [`Advance::advance`] so a producer can declare the total from
/// inside its own step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputSize {
    produced: usize,
    declared: Option<usize>,
}

impl OutputSize {
    /// Elements produced so far.
    ///
    /// Inside [`Advance::advance`] this already counts the element being
    /// produced.
    pub fn produced(&self) -> usize {
        self.produced
    }

    /// The declared total, if any.
    pub fn declared(&self) -> Option<usize> {
        self.declared
    }

    pub fn has_next(&self) -> bool {
        self.declared.map_or(true, |size| self.produced < size)
    }

    /// Fix the total number of elements, counting those already produced.
    ///
    /// Fails if a total was already declared or if `size` is smaller than
    /// [`produced`](Self::produced).
    pub fn set_output_size(&mut self, size: usize) -> Result<()> {
        if let Some(existing) = self.declared {
            return Err(Error::OutputSizeAlreadySet { size: existing });
        }
        if size < self.produced {
            return Err(Error::OutputSizeTooSmall {
                requested: size,
                produced: self.produced,
            });
        }
        tracing::trace!(size, produced = self.produced, "sequence length fixed");
        self.declared = Some(size);
        Ok(())
    }
}

/// One step of a deferred-length producer.
pub trait Advance {
    type Item;

    /// Produce the next element. Only called while more elements remain.
    fn advance(&mut self, size: &mut OutputSize) -> Self::Item;
}

/// Producer built from a closure; see [`from_fn`].
#[derive(Debug, Clone)]
pub struct FromFn<F>(F);

impl<F, T> Advance for FromFn<F>
where
    F: FnMut(&mut OutputSize) -> T,
{
    type Item = T;

    fn advance(&mut self, size: &mut OutputSize) -> T {
        (self.0)(size)
    }
}

/// Build a deferred-length sequence from a closure.
///
/// ```rust
/// use quarry_core::deferred;
///
/// let mut words = vec!["c", "b", "a"];
/// let mut seq = deferred::from_fn(move |size| {
///     let word = words.pop().unwrap_or_default();
///     if words.is_empty() {
///         size.set_output_size(size.produced()).ok();
///     }
///     word
/// });
/// assert_eq!(seq.by_ref().collect::<Vec<_>>(), vec!["a", "b", "c"]);
/// assert!(!seq.has_next());
/// ```
pub fn from_fn<F, T>(f: F) -> DeferredLengthSequence<FromFn<F>>
where
    F: FnMut(&mut OutputSize) -> T,
{
    DeferredLengthSequence::new(FromFn(f))
}

/// Iterator-like sequence whose length may be declared late, at most once.
#[derive(Debug, Clone)]
pub struct DeferredLengthSequence<P> {
    producer: P,
    size: OutputSize,
}

impl<P: Advance> DeferredLengthSequence<P> {
    pub fn new(producer: P) -> Self {
        DeferredLengthSequence {
            producer,
            size: OutputSize::default(),
        }
    }

    /// Always true until a total is declared, then `produced < total`.
    pub fn has_next(&self) -> bool {
        self.size.has_next()
    }

    /// Produce the next element.
    pub fn advance(&mut self) -> Result<P::Item> {
        if !self.size.has_next() {
            return Err(Error::Exhausted {
                size: self.size.produced,
            });
        }
        self.size.produced += 1;
        Ok(self.producer.advance(&mut self.size))
    }

    /// Declare the total number of elements, including those produced.
    pub fn set_output_size(&mut self, size: usize) -> Result<()> {
        self.size.set_output_size(size)
    }

    pub fn produced(&self) -> usize {
        self.size.produced
    }

    pub fn output_size(&self) -> Option<usize> {
        self.size.declared
    }

    pub fn producer(&self) -> &P {
        &self.producer
    }
}

impl<P: Advance> Iterator for DeferredLengthSequence<P> {
    type Item = P::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.size.declared {
            Some(size) => {
                let remaining = size - self.size.produced;
                (remaining, Some(remaining))
            }
            None => (0, None),
        }
    }
}

impl<P: Advance> FusedIterator for DeferredLengthSequence<P> {}
