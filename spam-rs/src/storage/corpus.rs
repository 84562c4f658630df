//! Message directory access

use std::path::Path;
use tokio::fs;
use tracing::{debug, info};

use super::ranking::rank_by_file_name;
use super::types::*;
use crate::config::DataConfig;
use crate::error::{Result, SpamError};

/// Reads messages from the configured corpus directories
pub struct CorpusStore {
    data: DataConfig,
}

impl CorpusStore {
    pub fn new(data: DataConfig) -> Self {
        Self { data }
    }

    /// Load every spam and ham training message
    pub async fn load_training(&self) -> Result<TrainingCorpus> {
        let spam = self.load_dir(&self.data.spam_path()).await?;
        let ham = self.load_dir(&self.data.ham_path()).await?;

        info!(
            "Loaded {} spam and {} ham training messages from {}",
            spam.len(),
            ham.len(),
            self.data.base_dir
        );

        Ok(TrainingCorpus { spam, ham })
    }

    /// Load the test messages in rank order
    pub async fn load_test_set(&self) -> Result<Vec<TestMessage>> {
        let dir = self.data.test_path();
        let files = list_message_files(&dir).await?;
        let ranked = rank_by_file_name(files, |file| file.name.as_str())?;

        let mut messages = Vec::with_capacity(ranked.len());
        for file in ranked {
            let text = read_message(&file.path).await?;
            messages.push(TestMessage {
                file_name: file.name,
                text,
            });
        }

        info!("Loaded {} test messages from {}", messages.len(), dir.display());

        Ok(messages)
    }

    async fn load_dir(&self, dir: &Path) -> Result<Vec<String>> {
        let mut messages = Vec::new();
        for file in list_message_files(dir).await? {
            messages.push(read_message(&file.path).await?);
        }
        Ok(messages)
    }
}

/// Regular files in `dir`, sorted by path.
///
/// Sub-directories and other non-file entries are skipped. Names that are
/// not valid UTF-8 keep their original path for reading.
pub async fn list_message_files(dir: &Path) -> Result<Vec<MessageFile>> {
    let mut entries = fs::read_dir(dir)
        .await
        .map_err(|e| SpamError::storage(dir, e))?;

    let mut files = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| SpamError::storage(dir, e))?
    {
        let path = entry.path();
        let metadata = fs::metadata(&path)
            .await
            .map_err(|e| SpamError::storage(&path, e))?;

        if !metadata.is_file() {
            debug!("Skipping non-file entry {}", path.display());
            continue;
        }

        files.push(MessageFile {
            name: entry.file_name().to_string_lossy().into_owned(),
            path,
        });
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}

/// Read one message as text.
///
/// Invalid UTF-8 is replaced with U+FFFD, and `\r\n` or a lone `\r` become
/// `\n` so that a line break always counts as a single character.
pub async fn read_message(path: &Path) -> Result<String> {
    let bytes = fs::read(path)
        .await
        .map_err(|e| SpamError::storage(path, e))?;

    Ok(translate_newlines(&String::from_utf8_lossy(&bytes)))
}

fn translate_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
