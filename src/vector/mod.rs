//! Vector module: a polymorphic numeric vector with dense and sparse storage.
//!
//! `Vector<T>` is a sum type over the two representations. Every consumer in
//! this crate dispatches through it without inspecting which variant it holds;
//! the contract (get/put/add, Euclidean norm, in-place scaling, iteration over
//! stored nonzero entries) is identical for both. Out-of-range indices panic,
//! they are never clamped.

pub mod dense;
pub mod sparse;

pub use dense::DenseVector;
pub use sparse::SparseVector;

use num_traits::Float;

/// One explicitly stored `(index, value)` pair of a vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry<T> {
    pub index: usize,
    pub value: T,
}

/// A real vector, dense or sparse.
#[derive(Debug, Clone, PartialEq)]
pub enum Vector<T> {
    Dense(DenseVector<T>),
    Sparse(SparseVector<T>),
}

impl<T: Float> Vector<T> {
    /// A dense all-zero vector of the given size.
    pub fn dense(size: usize) -> Self {
        Vector::Dense(DenseVector::new(size))
    }

    /// A sparse all-zero vector of the given size.
    pub fn sparse(size: usize) -> Self {
        Vector::Sparse(SparseVector::new(size))
    }

    /// A dense vector copied from a slice.
    pub fn from_slice(values: &[T]) -> Self {
        Vector::Dense(DenseVector::from_slice(values))
    }

    /// Number of components.
    pub fn size(&self) -> usize {
        match self {
            Vector::Dense(v) => v.size(),
            Vector::Sparse(v) => v.size(),
        }
    }

    /// Component at `index`. Panics if `index >= size()`.
    pub fn get(&self, index: usize) -> T {
        match self {
            Vector::Dense(v) => v.get(index),
            Vector::Sparse(v) => v.get(index),
        }
    }

    /// Store `value` at `index`, returning the previous value.
    pub fn put(&mut self, index: usize, value: T) -> T {
        match self {
            Vector::Dense(v) => v.put(index, value),
            Vector::Sparse(v) => v.put(index, value),
        }
    }

    /// Add `delta` to the component at `index`, returning the new value.
    pub fn add(&mut self, index: usize, delta: T) -> T {
        match self {
            Vector::Dense(v) => v.add(index, delta),
            Vector::Sparse(v) => v.add(index, delta),
        }
    }

    /// Count of explicitly stored entries (all of them for dense storage).
    pub fn used(&self) -> usize {
        match self {
            Vector::Dense(v) => v.used(),
            Vector::Sparse(v) => v.used(),
        }
    }

    /// Euclidean norm ‖x‖₂. Implicit zeros contribute nothing, so this is
    /// exact for both representations.
    pub fn norm(&self) -> T {
        match self {
            Vector::Dense(v) => v.norm(),
            Vector::Sparse(v) => v.norm(),
        }
    }

    /// In-place scalar multiply: x ← s·x.
    pub fn scale(&mut self, s: T) {
        match self {
            Vector::Dense(v) => v.scale(s),
            Vector::Sparse(v) => v.scale(s),
        }
    }

    /// Dot product ⟨self, other⟩. Panics on size mismatch.
    pub fn dot(&self, other: &Vector<T>) -> T {
        assert_eq!(
            self.size(),
            other.size(),
            "Vectors must have the same length"
        );
        match (self, other) {
            (Vector::Dense(x), Vector::Dense(y)) => x
                .as_slice()
                .iter()
                .zip(y.as_slice())
                .fold(T::zero(), |acc, (&xi, &yi)| acc + xi * yi),
            // Sum over the stored entries of the sparse side only.
            (Vector::Sparse(x), y) => x
                .entries()
                .fold(T::zero(), |acc, e| acc + e.value * y.get(e.index)),
            (x, Vector::Sparse(y)) => y
                .entries()
                .fold(T::zero(), |acc, e| acc + e.value * x.get(e.index)),
        }
    }

    /// In-place y ← y + α·x. Panics on size mismatch.
    pub fn scaled_add(&mut self, alpha: T, x: &Vector<T>) {
        assert_eq!(self.size(), x.size(), "Vectors must have the same length");
        match (self, x) {
            (Vector::Dense(y), Vector::Dense(x)) => {
                for (yi, &xi) in y.as_mut_slice().iter_mut().zip(x.as_slice()) {
                    *yi = *yi + alpha * xi;
                }
            }
            (y, x) => {
                for e in x.entries() {
                    y.add(e.index, alpha * e.value);
                }
            }
        }
    }

    /// Lazy iteration over stored nonzero entries, in an
    /// implementation-defined order.
    pub fn entries(&self) -> Entries<'_, T> {
        match self {
            Vector::Dense(v) => Entries::Dense(v.entries()),
            Vector::Sparse(v) => Entries::Sparse(v.entries()),
        }
    }
}

/// Iterator over the stored entries of either representation.
pub enum Entries<'a, T> {
    Dense(dense::DenseEntries<'a, T>),
    Sparse(sparse::SparseEntries<'a, T>),
}

impl<'a, T: Float> Iterator for Entries<'a, T> {
    type Item = Entry<T>;

    fn next(&mut self) -> Option<Entry<T>> {
        match self {
            Entries::Dense(it) => it.next(),
            Entries::Sparse(it) => it.next(),
        }
    }
}
