//! PageRank of a small closed corpus of hyperlinked pages.
//!
//! A [`Corpus`] is built from raw extracted links (see [`crawl`] for reading
//! a directory of HTML files). Two independent estimators then rank it:
//! [`page_rank::SampledPageRank`] simulates a random surfer and
//! [`page_rank::IteratedPageRank`] iterates the PageRank equation to its
//! fixed point.

mod common;
pub use self::common::*;
mod corpus;
pub use self::corpus::{Corpus, Page};
pub mod crawl;
pub mod error;
pub use self::error::{Error, Result};

pub mod page_rank;

#[cfg(test)]
mod testing;
