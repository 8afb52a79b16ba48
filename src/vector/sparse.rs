//! Sparse vector: sorted parallel key/value arrays.
//!
//! Keys are kept sorted and located by binary search; absent indices read as
//! zero. An explicitly stored zero still counts toward `used()`, which is what
//! the matrix serialization format validates against. Insertion goes through
//! the backing `Vec`s, so storage grows geometrically and repeated inserts
//! stay amortized.

use super::Entry;
use num_traits::Float;

/// A sparse vector of unique `(index, value)` pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseVector<T> {
    size: usize,
    keys: Vec<usize>,
    values: Vec<T>,
}

impl<T: Float> SparseVector<T> {
    /// An empty vector of the given logical size.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            keys: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Build from a dense slice, storing only the nonzero components.
    pub fn from_slice(values: &[T]) -> Self {
        let mut v = Self::new(values.len());
        for (i, &x) in values.iter().enumerate() {
            if x != T::zero() {
                v.put(i, x);
            }
        }
        v
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Count of explicitly stored (possibly zero-valued) entries.
    pub fn used(&self) -> usize {
        self.keys.len()
    }

    pub fn get(&self, index: usize) -> T {
        assert!(
            index < self.size,
            "index out of range: {} >= {}",
            index,
            self.size
        );
        match self.keys.binary_search(&index) {
            Ok(pos) => self.values[pos],
            Err(_) => T::zero(),
        }
    }

    /// Store `value` at `index`, returning the previous value.
    pub fn put(&mut self, index: usize, value: T) -> T {
        assert!(
            index < self.size,
            "index out of range: {} >= {}",
            index,
            self.size
        );
        match self.keys.binary_search(&index) {
            Ok(pos) => std::mem::replace(&mut self.values[pos], value),
            Err(pos) => {
                self.keys.insert(pos, index);
                self.values.insert(pos, value);
                T::zero()
            }
        }
    }

    /// Add `delta` at `index`, returning the new value.
    pub fn add(&mut self, index: usize, delta: T) -> T {
        assert!(
            index < self.size,
            "index out of range: {} >= {}",
            index,
            self.size
        );
        match self.keys.binary_search(&index) {
            Ok(pos) => {
                self.values[pos] = self.values[pos] + delta;
                self.values[pos]
            }
            Err(pos) => {
                self.keys.insert(pos, index);
                self.values.insert(pos, delta);
                delta
            }
        }
    }

    /// Grow the logical size. Panics when shrinking below a stored key.
    pub fn resize_to(&mut self, size: usize) {
        if let Some(&last) = self.keys.last() {
            assert!(last < size, "resize would drop stored index {}", last);
        }
        self.size = size;
    }

    /// Release excess backing capacity.
    pub fn trim(&mut self) {
        self.keys.shrink_to_fit();
        self.values.shrink_to_fit();
    }

    /// Norm over the stored entries; exact, since implicit zeros contribute
    /// nothing.
    pub fn norm(&self) -> T {
        self.values
            .iter()
            .fold(T::zero(), |acc, &v| acc + v * v)
            .sqrt()
    }

    pub fn scale(&mut self, s: T) {
        for v in &mut self.values {
            *v = *v * s;
        }
    }

    /// Iterate the stored entries in key order.
    pub fn entries(&self) -> SparseEntries<'_, T> {
        SparseEntries {
            keys: &self.keys,
            values: &self.values,
            next: 0,
        }
    }
}

/// Iterator over the stored entries of a sparse vector.
pub struct SparseEntries<'a, T> {
    keys: &'a [usize],
    values: &'a [T],
    next: usize,
}

impl<'a, T: Float> Iterator for SparseEntries<'a, T> {
    type Item = Entry<T>;

    fn next(&mut self) -> Option<Entry<T>> {
        if self.next < self.keys.len() {
            let pos = self.next;
            self.next += 1;
            Some(Entry {
                index: self.keys[pos],
                value: self.values[pos],
            })
        } else {
            None
        }
    }
}
