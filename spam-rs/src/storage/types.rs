//! Corpus types

use std::path::PathBuf;

/// Labeled training messages
#[derive(Debug, Clone, Default)]
pub struct TrainingCorpus {
    pub spam: Vec<String>,
    pub ham: Vec<String>,
}

/// An unlabeled message awaiting classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestMessage {
    /// File name within the test directory
    pub file_name: String,
    /// Message text
    pub text: String,
}

/// A regular file found in a message directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageFile {
    /// File name for display and ranking; invalid UTF-8 is replaced
    pub name: String,
    /// Path used to read the file, exactly as listed
    pub path: PathBuf,
}
