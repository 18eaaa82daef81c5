//! Compact storage for a symmetric, zero-diagonal weight matrix.
//!
//! Only the strictly-lower triangle is kept, row by row in one flat buffer:
//!
//! ```text
//! row 0:  (empty)
//! row 1:  w(1,0)
//! row 2:  w(2,0) w(2,1)
//! row 3:  w(3,0) w(3,1) w(3,2)
//! ...
//! row n-1: w(n-1,0) ... w(n-1,n-2)
//! ```
//!
//! Row `i` starts at offset `i(i-1)/2` and holds `i` entries, so the buffer
//! length is `n(n-1)/2`. Every lookup canonicalizes `(a, b)` so the larger index
//! selects the row.

use ndarray::Array2;

/// Strictly-lower-triangular weight matrix over `n` nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangularWeights {
    n: usize,
    data: Vec<f32>,
}

impl TriangularWeights {
    /// All-zero weights for `n` nodes.
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            data: vec![0.0; n * n.saturating_sub(1) / 2],
        }
    }

    /// Number of nodes the matrix spans.
    pub fn num_nodes(&self) -> usize {
        self.n
    }

    /// Number of stored entries, `n(n-1)/2`.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    fn row_offset(row: usize) -> usize {
        row * row.saturating_sub(1) / 2
    }

    #[inline]
    fn index(a: usize, b: usize) -> usize {
        let (row, col) = if a > b { (a, b) } else { (b, a) };
        Self::row_offset(row) + col
    }

    /// Weight between nodes `a` and `b`; zero on the diagonal.
    ///
    /// # Panics
    /// If either index is `>= num_nodes()`.
    #[inline]
    pub fn get(&self, a: usize, b: usize) -> f32 {
        assert!(
            a < self.n && b < self.n,
            "weight index ({a}, {b}) out of range for {} nodes",
            self.n
        );
        if a == b {
            return 0.0;
        }
        self.data[Self::index(a, b)]
    }

    /// Store the weight for the unordered pair `{a, b}`.
    ///
    /// # Panics
    /// If `a == b` or either index is out of range.
    pub fn set(&mut self, a: usize, b: usize, value: f32) {
        assert!(a != b, "diagonal weight ({a}, {a}) is fixed at zero");
        assert!(
            a < self.n && b < self.n,
            "weight index ({a}, {b}) out of range for {} nodes",
            self.n
        );
        let idx = Self::index(a, b);
        self.data[idx] = value;
    }

    /// Stored entries of row `i`: `w(i,0) .. w(i,i-1)`.
    pub fn row(&self, i: usize) -> &[f32] {
        let start = Self::row_offset(i);
        &self.data[start..start + i]
    }

    /// Expand into the full symmetric `n × n` matrix.
    pub fn to_dense(&self) -> Array2<f32> {
        let mut dense = Array2::zeros((self.n, self.n));
        for i in 1..self.n {
            for (j, &w) in self.row(i).iter().enumerate() {
                dense[[i, j]] = w;
                dense[[j, i]] = w;
            }
        }
        dense
    }
}
