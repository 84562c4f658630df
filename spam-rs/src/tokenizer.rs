//! Message tokenization
//!
//! Reduces a raw message to the set of distinct space-delimited tokens it
//! contains. Only presence is modelled, so repeated words collapse into a
//! single feature.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Characters skipped at the start of every message (`"Subject: "`)
pub const DEFAULT_HEADER_SKIP: usize = 9;

/// How the leading header span is removed before splitting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum HeaderSkip {
    /// Drop a fixed number of characters
    Chars { count: usize },
    /// Drop everything up to and including the first newline
    FirstLine,
}

impl Default for HeaderSkip {
    fn default() -> Self {
        HeaderSkip::Chars {
            count: DEFAULT_HEADER_SKIP,
        }
    }
}

impl HeaderSkip {
    /// Return the part of `text` that follows the header span.
    ///
    /// Text shorter than the span yields an empty body.
    fn strip<'a>(&self, text: &'a str) -> &'a str {
        match *self {
            HeaderSkip::Chars { count } => match text.char_indices().nth(count) {
                Some((offset, _)) => &text[offset..],
                None => "",
            },
            HeaderSkip::FirstLine => match text.find('\n') {
                Some(offset) => &text[offset + 1..],
                None => "",
            },
        }
    }
}

/// Distinct tokens of one message, iterated in sorted order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureSet {
    tokens: BTreeSet<String>,
}

impl FeatureSet {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl IntoIterator for FeatureSet {
    type Item = String;
    type IntoIter = std::collections::btree_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

/// Message tokenizer
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer {
    header_skip: HeaderSkip,
}

impl Tokenizer {
    pub fn new(header_skip: HeaderSkip) -> Self {
        Self { header_skip }
    }

    pub fn header_skip(&self) -> HeaderSkip {
        self.header_skip
    }

    /// Tokenize a raw message into its feature set.
    ///
    /// Carriage returns are removed, newlines become spaces, and the text is
    /// split on single spaces. Consecutive spaces produce the empty token,
    /// which is kept as an ordinary feature.
    pub fn tokenize(&self, raw_text: &str) -> FeatureSet {
        let body = self
            .header_skip
            .strip(raw_text)
            .replace('\r', "")
            .replace('\n', " ");

        body.split(' ').collect()
    }
}

/// Tokenize with the default header skip
pub fn tokenize(raw_text: &str) -> FeatureSet {
    Tokenizer::default().tokenize(raw_text)
}
