//! Hebbian weight construction.
//!
//! The classical outer-product rule: the weight between two distinct nodes is
//! the dot product of their activation columns across the training set.
//!
//! ```text
//! w_ij = Σ_p  x_p[i] · x_p[j]      for i > j
//! ```
//!
//! Cost is `O(N² · M)` for `N` nodes and `M` patterns, paid once per `train`.

use crate::core::TriangularWeights;
use crate::data::DataSet;

/// Compute the symmetric zero-diagonal weight matrix for `data`.
pub fn hebbian_weights(data: &DataSet) -> TriangularWeights {
    let n = data.num_attributes();
    let items = data.items();
    let mut weights = TriangularWeights::zeros(n);

    for i in 1..n {
        let col_i = items.column(i);
        for j in 0..i {
            // Column dot product: Σ_p items[p, i] * items[p, j]
            let w = col_i.dot(&items.column(j));
            weights.set(i, j, w);
        }
    }

    weights
}
