//! spam-rs: Naive Bayes spam filter
//!
//! Classifies email messages as spam or ham with a Bernoulli Naive Bayes
//! model trained on labeled message directories.
//!
//! # Model
//!
//! - **Features**: the set of distinct space-delimited tokens of a message,
//!   after a fixed-length header span is skipped
//! - **Training**: per-class document frequencies with add-one smoothing,
//!   `P(t|c) = (f + 1) / (n + 2)`
//! - **Scoring**: sum of log-probabilities plus the log class prior; tokens
//!   unseen in training are ignored and ties go to ham
//!
//! # Example
//!
//! ```
//! use spam_rs::bayes::{Classifier, Label};
//!
//! let mut classifier = Classifier::default();
//! classifier
//!     .train(["Subject: win money"], ["Subject: hello friend"])
//!     .unwrap();
//!
//! assert_eq!(classifier.classify("Subject: win").unwrap(), Label::Spam);
//! ```
//!
//! # Modules
//!
//! - [`bayes`]: Model training, scoring and classifier lifecycle
//! - [`tokenizer`]: Message to feature set conversion
//! - [`storage`]: Corpus directory access and test file ranking
//! - [`pipeline`]: End-to-end run and result output
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling

pub mod bayes;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod storage;
pub mod tokenizer;

// Re-export commonly used types
pub use bayes::{Classifier, Label, Model};
pub use config::Config;
pub use error::{Result, SpamError};
pub use tokenizer::{tokenize, FeatureSet, Tokenizer};
