//! Classifier lifecycle
//!
//! A `Classifier` starts untrained and becomes trained once a model has been
//! built from a labeled corpus. Classification is only possible afterwards.

use tracing::info;

use super::model::Model;
use super::types::Label;
use crate::error::{Result, SpamError};
use crate::tokenizer::Tokenizer;

/// Spam classifier
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    tokenizer: Tokenizer,
    model: Option<Model>,
}

impl Classifier {
    /// Create an untrained classifier
    pub fn new(tokenizer: Tokenizer) -> Self {
        Self {
            tokenizer,
            model: None,
        }
    }

    /// Train on labeled messages.
    ///
    /// On failure the classifier keeps whatever state it had before.
    pub fn train<S, H>(&mut self, spam: S, ham: H) -> Result<&Model>
    where
        S: IntoIterator,
        S::Item: AsRef<str>,
        H: IntoIterator,
        H::Item: AsRef<str>,
    {
        let model = Model::train(self.tokenizer, spam, ham)?;
        if self.model.is_some() {
            info!("Replacing previously trained model");
        }
        Ok(&*self.model.insert(model))
    }

    /// Label a raw message
    pub fn classify(&self, message: &str) -> Result<Label> {
        Ok(self.model()?.classify(message))
    }

    /// Trained model, or `UntrainedModel`
    pub fn model(&self) -> Result<&Model> {
        self.model.as_ref().ok_or(SpamError::UntrainedModel)
    }

    pub fn is_trained(&self) -> bool {
        self.model.is_some()
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }
}

impl From<Model> for Classifier {
    fn from(model: Model) -> Self {
        Self {
            tokenizer: *model.tokenizer(),
            model: Some(model),
        }
    }
}
