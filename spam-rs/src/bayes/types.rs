//! Classifier types and data structures

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Class label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Spam,
    Ham,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Spam => "spam",
            Label::Ham => "ham",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spam" => Ok(Label::Spam),
            "ham" => Ok(Label::Ham),
            other => Err(format!("unknown label: {}", other)),
        }
    }
}

/// Number of training messages of each class containing a token
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenCounts {
    pub spam: u32,
    pub ham: u32,
}

impl TokenCounts {
    pub(crate) fn increment(&mut self, label: Label) {
        match label {
            Label::Spam => self.spam += 1,
            Label::Ham => self.ham += 1,
        }
    }
}

/// Smoothed P(token present | class) for both classes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenProbability {
    pub spam: f64,
    pub ham: f64,
}

impl TokenProbability {
    pub fn get(&self, label: Label) -> f64 {
        match label {
            Label::Spam => self.spam,
            Label::Ham => self.ham,
        }
    }
}

/// Accumulated log-likelihood of a message under each class
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scores {
    pub spam: f64,
    pub ham: f64,
}

impl Scores {
    /// Ties go to ham.
    pub fn label(&self) -> Label {
        if self.ham >= self.spam {
            Label::Ham
        } else {
            Label::Spam
        }
    }
}
