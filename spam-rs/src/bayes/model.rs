//! Naive Bayes training and scoring
//!
//! Training counts, per class, how many messages contain each token, then
//! turns the counts into Laplace-smoothed probabilities. Scoring sums the
//! log-probabilities of the tokens of a message under each class.

use std::collections::HashMap;
use tracing::{debug, info};

use super::types::*;
use crate::error::{Result, SpamError};
use crate::tokenizer::{FeatureSet, Tokenizer};

/// Add-one smoothed probability of a token given a class
fn smoothed(frequency: u32, samples: usize) -> f64 {
    (frequency as f64 + 1.0) / (samples as f64 + 2.0)
}

/// Per-token document frequencies for both classes
///
/// Every token ever observed carries both counts, so the spam and ham
/// vocabularies can never disagree.
#[derive(Debug, Clone, Default)]
pub struct WordFrequencies {
    counts: HashMap<String, TokenCounts>,
    spam_messages: usize,
    ham_messages: usize,
}

impl WordFrequencies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one training message
    pub fn observe(&mut self, features: FeatureSet, label: Label) {
        match label {
            Label::Spam => self.spam_messages += 1,
            Label::Ham => self.ham_messages += 1,
        }

        for token in features {
            self.counts.entry(token).or_default().increment(label);
        }
    }

    /// Counts for a token, if it was seen in either class
    pub fn counts(&self, token: &str) -> Option<TokenCounts> {
        self.counts.get(token).copied()
    }

    pub fn message_count(&self, label: Label) -> usize {
        match label {
            Label::Spam => self.spam_messages,
            Label::Ham => self.ham_messages,
        }
    }

    pub fn vocabulary_size(&self) -> usize {
        self.counts.len()
    }

    /// Freeze the counts into a model.
    ///
    /// Fails with `DegenerateCorpus` when either class is empty, since the
    /// priors are undefined then.
    pub fn into_model(self, tokenizer: Tokenizer) -> Result<Model> {
        if self.spam_messages == 0 {
            return Err(SpamError::DegenerateCorpus { class: Label::Spam });
        }
        if self.ham_messages == 0 {
            return Err(SpamError::DegenerateCorpus { class: Label::Ham });
        }

        let (n_spam, n_ham) = (self.spam_messages, self.ham_messages);
        let total = (n_spam + n_ham) as f64;

        let probabilities = self
            .counts
            .into_iter()
            .map(|(token, counts)| {
                let probability = TokenProbability {
                    spam: smoothed(counts.spam, n_spam),
                    ham: smoothed(counts.ham, n_ham),
                };
                (token, probability)
            })
            .collect();

        Ok(Model {
            tokenizer,
            probabilities,
            prior_spam: n_spam as f64 / total,
            prior_ham: n_ham as f64 / total,
            spam_messages: n_spam,
            ham_messages: n_ham,
        })
    }
}

/// Trained Bernoulli Naive Bayes model
///
/// Immutable once built. Holds the tokenizer it was trained with so that
/// inference strips headers the same way training did.
#[derive(Debug, Clone)]
pub struct Model {
    tokenizer: Tokenizer,
    probabilities: HashMap<String, TokenProbability>,
    prior_spam: f64,
    prior_ham: f64,
    spam_messages: usize,
    ham_messages: usize,
}

impl Model {
    /// Train from raw spam and ham messages
    pub fn train<S, H>(tokenizer: Tokenizer, spam: S, ham: H) -> Result<Self>
    where
        S: IntoIterator,
        S::Item: AsRef<str>,
        H: IntoIterator,
        H::Item: AsRef<str>,
    {
        Self::from_feature_sets(
            tokenizer,
            spam.into_iter().map(|m| tokenizer.tokenize(m.as_ref())),
            ham.into_iter().map(|m| tokenizer.tokenize(m.as_ref())),
        )
    }

    /// Train from messages that are already tokenized
    pub fn from_feature_sets<S, H>(tokenizer: Tokenizer, spam: S, ham: H) -> Result<Self>
    where
        S: IntoIterator<Item = FeatureSet>,
        H: IntoIterator<Item = FeatureSet>,
    {
        let mut frequencies = WordFrequencies::new();

        for features in spam {
            frequencies.observe(features, Label::Spam);
        }
        for features in ham {
            frequencies.observe(features, Label::Ham);
        }

        debug!(
            "Counted {} distinct tokens over {} spam and {} ham messages",
            frequencies.vocabulary_size(),
            frequencies.message_count(Label::Spam),
            frequencies.message_count(Label::Ham)
        );

        let model = frequencies.into_model(tokenizer)?;

        info!(
            spam_messages = model.spam_messages,
            ham_messages = model.ham_messages,
            vocabulary = model.vocabulary_size(),
            "Model trained"
        );

        Ok(model)
    }

    /// Log-likelihood of a feature set under each class.
    ///
    /// Tokens never seen in training contribute nothing to either score.
    /// Terms are summed in token order, so equal inputs give bit-identical
    /// scores.
    pub fn score(&self, features: &FeatureSet) -> Scores {
        let mut spam = 0.0f64;
        let mut ham = 0.0f64;

        for token in features.iter() {
            if let Some(probability) = self.probabilities.get(token) {
                spam += probability.spam.ln();
                ham += probability.ham.ln();
            }
        }

        Scores {
            spam: spam + self.prior_spam.ln(),
            ham: ham + self.prior_ham.ln(),
        }
    }

    /// Label an already tokenized message
    pub fn classify_features(&self, features: &FeatureSet) -> Label {
        self.score(features).label()
    }

    /// Tokenize and label a raw message
    pub fn classify(&self, message: &str) -> Label {
        let features = self.tokenizer.tokenize(message);
        let scores = self.score(&features);
        let label = scores.label();

        debug!(
            spam_score = scores.spam,
            ham_score = scores.ham,
            %label,
            "Scored message"
        );

        label
    }

    /// Smoothed probabilities for a token seen in training
    pub fn probability(&self, token: &str) -> Option<TokenProbability> {
        self.probabilities.get(token).copied()
    }

    /// Class prior P(label)
    pub fn prior(&self, label: Label) -> f64 {
        match label {
            Label::Spam => self.prior_spam,
            Label::Ham => self.prior_ham,
        }
    }

    /// Number of training messages of a class
    pub fn message_count(&self, label: Label) -> usize {
        match label {
            Label::Spam => self.spam_messages,
            Label::Ham => self.ham_messages,
        }
    }

    pub fn vocabulary_size(&self) -> usize {
        self.probabilities.len()
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }
}
