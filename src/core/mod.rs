//! Core Hopfield network implementation.
//!
//! This module provides the network and the pieces it is built from:
//! - Hebbian-trained, symmetric zero-diagonal weights ([`TriangularWeights`])
//! - Asynchronous stochastic node updates driven by an [`IndexSampler`]
//! - Recall by iterating updates until the state matches a stored pattern
//!
//! ## Update Rule
//!
//! One propagation step picks a single node `i` uniformly at random and sets
//! ```text
//! x_i = active    if Σ_j w_ij x_j > θ
//!       inactive  otherwise
//! ```
//! The self-term vanishes because `w_ii = 0`.

mod sampler;
mod weights;

pub use sampler::{entropy_sampler, seeded_sampler, IndexSampler};
pub use weights::TriangularWeights;

use crate::data::DataSet;
use crate::training::hebbian_weights;
use crate::utils::step;
use crate::Config;
use ndarray::Array1;
use tracing::{debug, trace};

/// Error type for Hopfield operations.
#[derive(Debug, thiserror::Error)]
pub enum HopfieldError {
    /// Input vector length does not match the node count
    #[error("Invalid input: expected {expected} values, got {actual}")]
    InvalidInput { expected: usize, actual: usize },
    /// Node index outside `[0, N)`
    #[error("Node index {index} out of range for {nodes} nodes")]
    NodeOutOfRange { index: usize, nodes: usize },
    /// Dataset has no patterns, or patterns of length zero
    #[error("Dataset is empty")]
    EmptyDataset,
    /// Pattern length differs from the first pattern
    #[error("Ragged dataset: item {index} has {actual} values, expected {expected}")]
    RaggedDataset {
        index: usize,
        expected: usize,
        actual: usize,
    },
    /// Operation requires a trained network
    #[error("Network has not been trained")]
    Untrained,
    /// Invalid network configuration
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    /// Configuration text is not valid JSON for [`Config`]
    #[error("Config parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type HopfieldResult<T> = Result<T, HopfieldError>;

/// Outcome of an [`Hopfield::eval_detailed`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recall {
    /// Propagation steps performed (at most `eval_iterations`)
    pub steps_taken: usize,
    /// Whether the state reached a stored pattern
    pub converged: bool,
    /// Index of the matched pattern in the training set
    pub matched_index: Option<usize>,
}

/// A discrete Hopfield network.
///
/// # Lifecycle
///
/// - [`train`](Self::train) builds the weights from a [`DataSet`], keeps a copy
///   of the patterns for convergence checks, and resets every node to
///   `inactive_node_value`. Any previous training is discarded.
/// - [`run`](Self::run) and [`eval`](Self::eval) overwrite the node vector with
///   the input and then mutate it in place.
///
/// A single instance is meant for single-threaded use; wrap it in a mutex or
/// keep one per worker when sharing.
pub struct Hopfield {
    config: Config,
    /// Hebbian weights; `None` until trained
    weights: Option<TriangularWeights>,
    /// Training patterns, used as the set of convergence targets
    patterns: Option<DataSet>,
    /// Current activations, length N once trained
    nodes: Array1<f32>,
    sampler: Box<dyn IndexSampler>,
}

impl std::fmt::Debug for Hopfield {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hopfield")
            .field("config", &self.config)
            .field("nodes", &self.nodes)
            .field(
                "weights",
                &format!("<{} stored weights>", self.weights.as_ref().map_or(0, |w| w.len())),
            )
            .field(
                "patterns",
                &format!("<{} patterns>", self.patterns.as_ref().map_or(0, |p| p.len())),
            )
            .finish()
    }
}

impl Hopfield {
    /// Create an untrained network with an entropy-seeded sampler.
    ///
    /// # Errors
    /// - `InvalidConfig` if `config` fails validation
    pub fn new(config: Config) -> HopfieldResult<Self> {
        Self::with_sampler(config, entropy_sampler())
    }

    /// Create an untrained network whose node selection is reproducible.
    pub fn with_seed(config: Config, seed: u64) -> HopfieldResult<Self> {
        Self::with_sampler(config, seeded_sampler(seed))
    }

    /// Create an untrained network with a custom node sampler.
    pub fn with_sampler(config: Config, sampler: Box<dyn IndexSampler>) -> HopfieldResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            weights: None,
            patterns: None,
            nodes: Array1::zeros(0),
            sampler,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replace the configuration. Weights and nodes are left untouched.
    ///
    /// # Errors
    /// - `InvalidConfig` if `config` fails validation; the old config is kept
    pub fn set_config(&mut self, config: Config) -> HopfieldResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Current node activations (live state, not a copy).
    pub fn nodes(&self) -> &Array1<f32> {
        &self.nodes
    }

    /// Trained weights, if any.
    pub fn weights(&self) -> Option<&TriangularWeights> {
        self.weights.as_ref()
    }

    /// Patterns the network was trained on, if any.
    pub fn patterns(&self) -> Option<&DataSet> {
        self.patterns.as_ref()
    }

    /// Node count N (zero before training).
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_trained(&self) -> bool {
        self.weights.is_some()
    }

    /// Train on `data` with the Hebbian outer-product rule.
    ///
    /// Sizes the network to the pattern length, resets all nodes to
    /// `inactive_node_value` and stores a copy of `data` as the convergence
    /// targets for [`eval`](Self::eval). Returns `self` for chaining.
    pub fn train(&mut self, data: &DataSet) -> &mut Self {
        let n = data.num_attributes();
        debug!(patterns = data.len(), nodes = n, "training hopfield network");

        self.nodes = Array1::from_elem(n, self.config.inactive_node_value);
        self.weights = Some(hebbian_weights(data));
        self.patterns = Some(data.clone());

        debug!(stored_weights = n * n.saturating_sub(1) / 2, "training complete");
        self
    }

    /// Load `input` and perform exactly one propagation step.
    ///
    /// # Errors
    /// - `Untrained` before [`train`](Self::train)
    /// - `InvalidInput` if `input.len() != N`
    pub fn run(&mut self, input: &Array1<f32>) -> HopfieldResult<&Array1<f32>> {
        self.set_input(input)?;
        self.propagate()?;
        Ok(&self.nodes)
    }

    /// Load `input` and relax until it matches a stored pattern or
    /// `eval_iterations` steps have run. Returns the live node vector.
    ///
    /// # Errors
    /// - `Untrained` before [`train`](Self::train)
    /// - `InvalidInput` if `input.len() != N`
    pub fn eval(&mut self, input: &Array1<f32>) -> HopfieldResult<&Array1<f32>> {
        self.eval_detailed(input)?;
        Ok(&self.nodes)
    }

    /// Like [`eval`](Self::eval), but reports how the relaxation ended.
    ///
    /// The convergence check runs after every step, so an input that already
    /// equals a stored pattern still takes at least one step.
    pub fn eval_detailed(&mut self, input: &Array1<f32>) -> HopfieldResult<Recall> {
        self.set_input(input)?;

        let max_steps = self.config.eval_iterations;
        for step in 0..max_steps {
            self.propagate()?;

            let matched = self
                .patterns
                .as_ref()
                .and_then(|patterns| patterns.position(&self.nodes));
            if let Some(index) = matched {
                debug!(steps = step + 1, pattern = index, "eval converged");
                return Ok(Recall {
                    steps_taken: step + 1,
                    converged: true,
                    matched_index: Some(index),
                });
            }
        }

        debug!(steps = max_steps, "eval stopped without reaching a stored pattern");
        Ok(Recall {
            steps_taken: max_steps,
            converged: false,
            matched_index: None,
        })
    }

    /// Perform one asynchronous update on the current nodes.
    ///
    /// Picks one node `i` from the sampler, recomputes `Σ_j w(i,j) · x_j` over
    /// all nodes and writes `active_node_value` when the sum is strictly greater
    /// than `threshold`, `inactive_node_value` otherwise.
    ///
    /// # Returns
    /// The index of the node that was re-evaluated.
    ///
    /// # Errors
    /// - `Untrained` before [`train`](Self::train)
    /// - `NodeOutOfRange` if the sampler returns an index `>= N`; nodes are left unchanged
    pub fn propagate(&mut self) -> HopfieldResult<usize> {
        let weights = self.weights.as_ref().ok_or(HopfieldError::Untrained)?;
        let n = self.nodes.len();

        let i = self.sampler.sample_index(n);
        if i >= n {
            return Err(HopfieldError::NodeOutOfRange { index: i, nodes: n });
        }

        let sum: f32 = self
            .nodes
            .iter()
            .enumerate()
            .map(|(j, &x)| weights.get(i, j) * x)
            .sum();

        self.nodes[i] = step(
            sum,
            self.config.threshold,
            self.config.active_node_value,
            self.config.inactive_node_value,
        );
        trace!(node = i, sum, value = self.nodes[i], "propagate");

        Ok(i)
    }

    /// Weight between nodes `a` and `b`; zero when `a == b`.
    ///
    /// # Errors
    /// - `Untrained` before [`train`](Self::train)
    /// - `NodeOutOfRange` if either index is `>= N`
    pub fn weight(&self, a: usize, b: usize) -> HopfieldResult<f32> {
        let weights = self.weights.as_ref().ok_or(HopfieldError::Untrained)?;
        let nodes = weights.num_nodes();
        if let Some(&index) = [a, b].iter().find(|&&idx| idx >= nodes) {
            return Err(HopfieldError::NodeOutOfRange { index, nodes });
        }
        Ok(weights.get(a, b))
    }

    /// Overwrite the node vector with `input`, element by element.
    fn set_input(&mut self, input: &Array1<f32>) -> HopfieldResult<()> {
        if !self.is_trained() {
            return Err(HopfieldError::Untrained);
        }
        if input.len() != self.nodes.len() {
            return Err(HopfieldError::InvalidInput {
                expected: self.nodes.len(),
                actual: input.len(),
            });
        }
        self.nodes.assign(input);
        Ok(())
    }
}
