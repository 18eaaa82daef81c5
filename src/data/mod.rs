//! Pattern datasets and corruption helpers.
//!
//! A [`DataSet`] is an ordered, non-empty collection of equal-length pattern
//! rows. Length uniformity is checked once at construction so the network can
//! index nodes `0..N` without further checks.

use crate::core::{HopfieldError, HopfieldResult};
use ndarray::{Array1, Array2, ArrayView1, Axis};
use rand::seq::index;
use rand::Rng;

/// Ordered collection of training patterns, one per row.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSet {
    items: Array2<f32>,
}

impl DataSet {
    /// Build a dataset from pattern vectors.
    ///
    /// # Errors
    /// - `EmptyDataset` if there are no items or the first item is empty
    /// - `RaggedDataset` if any item's length differs from the first
    pub fn new(items: Vec<Vec<f32>>) -> HopfieldResult<Self> {
        let width = match items.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(HopfieldError::EmptyDataset),
        };

        if let Some((index, item)) = items.iter().enumerate().find(|(_, it)| it.len() != width) {
            return Err(HopfieldError::RaggedDataset {
                index,
                expected: width,
                actual: item.len(),
            });
        }

        let items = Array2::from_shape_fn((items.len(), width), |(r, c)| items[r][c]);
        Ok(Self { items })
    }

    /// Build a dataset from a matrix whose rows are patterns.
    ///
    /// # Errors
    /// - `EmptyDataset` if the matrix has no rows or no columns
    pub fn from_array(items: Array2<f32>) -> HopfieldResult<Self> {
        if items.nrows() == 0 || items.ncols() == 0 {
            return Err(HopfieldError::EmptyDataset);
        }
        Ok(Self { items })
    }

    /// Number of patterns.
    pub fn len(&self) -> usize {
        self.items.nrows()
    }

    /// Always false for a constructed dataset.
    pub fn is_empty(&self) -> bool {
        self.items.nrows() == 0
    }

    /// Length of every pattern (the network's node count).
    pub fn num_attributes(&self) -> usize {
        self.items.ncols()
    }

    /// The first pattern.
    pub fn first(&self) -> ArrayView1<'_, f32> {
        self.items.row(0)
    }

    /// Pattern at `index`, if any.
    pub fn get(&self, index: usize) -> Option<ArrayView1<'_, f32>> {
        (index < self.len()).then(|| self.items.row(index))
    }

    /// Patterns in order.
    pub fn iter(&self) -> impl Iterator<Item = ArrayView1<'_, f32>> {
        self.items.axis_iter(Axis(0))
    }

    /// Patterns as a `(len, num_attributes)` matrix.
    pub fn items(&self) -> &Array2<f32> {
        &self.items
    }

    /// Index of the first pattern exactly equal to `state`.
    pub fn position(&self, state: &Array1<f32>) -> Option<usize> {
        self.iter().position(|item| item == state.view())
    }

    /// Whether some pattern is exactly equal to `state`.
    pub fn contains(&self, state: &Array1<f32>) -> bool {
        self.position(state).is_some()
    }
}

/// Copy `pattern` with `count` distinct nodes flipped between `active` and
/// `inactive`. Nodes holding any other value are set to `active`.
///
/// `count` is clamped to the pattern length.
pub fn flip_nodes<R: Rng + ?Sized>(
    pattern: ArrayView1<'_, f32>,
    count: usize,
    rng: &mut R,
    active: f32,
    inactive: f32,
) -> Array1<f32> {
    let mut noisy = pattern.to_owned();
    let count = count.min(noisy.len());
    for i in index::sample(rng, noisy.len(), count) {
        noisy[i] = if noisy[i] == active { inactive } else { active };
    }
    noisy
}
