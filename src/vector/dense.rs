//! Dense vector: a contiguous array of components.

use super::Entry;
use num_traits::Float;

/// A dense vector; every index is materialized.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseVector<T> {
    values: Vec<T>,
}

impl<T: Float> DenseVector<T> {
    /// An all-zero vector of the given size.
    pub fn new(size: usize) -> Self {
        Self {
            values: vec![T::zero(); size],
        }
    }

    /// Copy from a slice.
    pub fn from_slice(values: &[T]) -> Self {
        Self {
            values: values.to_vec(),
        }
    }

    /// Take ownership of a backing array.
    pub fn from_vec(values: Vec<T>) -> Self {
        Self { values }
    }

    pub fn size(&self) -> usize {
        self.values.len()
    }

    pub fn get(&self, index: usize) -> T {
        assert!(
            index < self.values.len(),
            "index out of range: {} >= {}",
            index,
            self.values.len()
        );
        self.values[index]
    }

    /// Store `value`, returning the previous value.
    pub fn put(&mut self, index: usize, value: T) -> T {
        assert!(
            index < self.values.len(),
            "index out of range: {} >= {}",
            index,
            self.values.len()
        );
        std::mem::replace(&mut self.values[index], value)
    }

    /// Add `delta`, returning the new value.
    pub fn add(&mut self, index: usize, delta: T) -> T {
        assert!(
            index < self.values.len(),
            "index out of range: {} >= {}",
            index,
            self.values.len()
        );
        self.values[index] = self.values[index] + delta;
        self.values[index]
    }

    /// All entries of a dense vector are stored.
    pub fn used(&self) -> usize {
        self.values.len()
    }

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

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.values
    }

    /// Iterate the nonzero entries in index order.
    pub fn entries(&self) -> DenseEntries<'_, T> {
        DenseEntries {
            values: &self.values,
            next: 0,
        }
    }
}

/// Iterator over the nonzero entries of a dense vector.
pub struct DenseEntries<'a, T> {
    values: &'a [T],
    next: usize,
}

impl<'a, T: Float> Iterator for DenseEntries<'a, T> {
    type Item = Entry<T>;

    fn next(&mut self) -> Option<Entry<T>> {
        while self.next < self.values.len() {
            let index = self.next;
            self.next += 1;
            let value = self.values[index];
            if value != T::zero() {
                return Some(Entry { index, value });
            }
        }
        None
    }
}
