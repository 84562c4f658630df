//! Naive Bayes classification
//!
//! Bernoulli Naive Bayes over per-message token presence, with add-one
//! smoothing and log-space scoring.

pub mod classifier;
pub mod model;
pub mod types;

pub use classifier::Classifier;
pub use model::{Model, WordFrequencies};
pub use types::*;
