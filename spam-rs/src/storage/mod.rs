//! Corpus storage
//!
//! Reads the spam, ham and test message directories described by the data
//! configuration.

pub mod corpus;
pub mod ranking;
pub mod types;

pub use corpus::CorpusStore;
pub use ranking::{rank_by_file_name, RankKey};
pub use types::*;
