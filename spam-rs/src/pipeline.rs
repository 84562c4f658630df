//! Train-then-classify run over a data directory

use serde::Serialize;
use std::io::Write;
use tracing::info;

use crate::bayes::{Classifier, Label};
use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::storage::{CorpusStore, TestMessage};

/// Label assigned to one test file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prediction {
    #[serde(rename = "file")]
    pub file_name: String,
    pub label: Label,
}

/// Train on the configured corpus and classify every test file, in rank order
pub async fn run(config: &Config) -> Result<Vec<Prediction>> {
    let store = CorpusStore::new(config.data.clone());

    let corpus = store.load_training().await?;
    let mut classifier = Classifier::new(config.tokenizer.tokenizer());
    classifier.train(&corpus.spam, &corpus.ham)?;
    drop(corpus);

    let messages = store.load_test_set().await?;
    let predictions = predict(&classifier, &messages)?;

    let spam = predictions.iter().filter(|p| p.label == Label::Spam).count();
    info!(
        "Classified {} test messages: {} spam, {} ham",
        predictions.len(),
        spam,
        predictions.len() - spam
    );

    Ok(predictions)
}

/// Classify already loaded test messages
pub fn predict(classifier: &Classifier, messages: &[TestMessage]) -> Result<Vec<Prediction>> {
    messages
        .iter()
        .map(|message| -> Result<Prediction> {
            Ok(Prediction {
                file_name: message.file_name.clone(),
                label: classifier.classify(&message.text)?,
            })
        })
        .collect()
}

/// Write one line per prediction
pub fn write_predictions<W: Write>(
    mut out: W,
    predictions: &[Prediction],
    format: OutputFormat,
) -> Result<()> {
    for prediction in predictions {
        match format {
            OutputFormat::Text => {
                writeln!(out, "{} {}", prediction.file_name, prediction.label)?;
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut out, prediction)?;
                writeln!(out)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}
