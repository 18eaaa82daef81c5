//! # Hopfield
//!
//! A discrete Hopfield associative memory.
//!
//! ## Overview
//!
//! Binary patterns are stored in a symmetric, zero-diagonal weight matrix built
//! with the classical **Hebbian outer-product rule**. A noisy or partial input is
//! then relaxed toward a stored pattern by **asynchronous stochastic updates**:
//! one randomly chosen node at a time is re-evaluated against the weighted sum of
//! all other nodes.
//!
//! ```text
//! w_ij = Σ_p  p_i · p_j        (i ≠ j, w_ii = 0)
//! x_i  = active  if Σ_j w_ij x_j > θ
//!        inactive otherwise
//! ```
//!
//! ## Structure
//!
//! - [`core`] — Network, triangular weight storage, index sampling, errors
//! - [`training`] — Hebbian weight construction
//! - [`data`] — Pattern dataset and corruption helpers
//! - [`utils`] — Threshold step, Hamming distance

pub mod core;
pub mod data;
pub mod training;
pub mod utils;

pub use crate::core::{
    Hopfield, HopfieldError, HopfieldResult, IndexSampler, Recall, TriangularWeights,
};
pub use crate::data::DataSet;
pub use crate::training::hebbian_weights;

use serde::{Deserialize, Serialize};

/// Network configuration.
///
/// Read by [`Hopfield::train`], [`Hopfield::run`] and [`Hopfield::eval`] at the
/// start of each call; may be swapped between calls with
/// [`Hopfield::set_config`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Upper bound on propagation steps performed by `eval`.
    pub eval_iterations: usize,
    /// Value written to a node that fires.
    pub active_node_value: f32,
    /// Value written to a node that does not fire (and the initial node value).
    pub inactive_node_value: f32,
    /// A node fires when its weighted input is strictly greater than this.
    pub threshold: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            eval_iterations: 500,
            active_node_value: 1.0,
            inactive_node_value: 0.0,
            threshold: 0.5,
        }
    }
}

impl Config {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    /// - `Json` if the text is not valid JSON for this structure
    /// - `InvalidConfig` if the parsed values fail [`Config::validate`]
    pub fn from_json(text: &str) -> HopfieldResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that node values and threshold are usable.
    ///
    /// # Errors
    /// - `InvalidConfig` if any value is non-finite, or active equals inactive
    pub fn validate(&self) -> HopfieldResult<()> {
        if !self.threshold.is_finite() {
            return Err(HopfieldError::InvalidConfig(format!(
                "threshold must be finite, got {}",
                self.threshold
            )));
        }
        if !self.active_node_value.is_finite() || !self.inactive_node_value.is_finite() {
            return Err(HopfieldError::InvalidConfig(
                "node values must be finite".to_string(),
            ));
        }
        if self.active_node_value == self.inactive_node_value {
            return Err(HopfieldError::InvalidConfig(format!(
                "active and inactive node values are both {}",
                self.active_node_value
            )));
        }
        Ok(())
    }
}
