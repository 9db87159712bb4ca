//! The two rank estimators and the transition model they share.
//!
//! [`sampled`] walks the corpus at random and counts visits; [`iterated`]
//! applies the PageRank equation until it reaches its fixed point. Both
//! converge to the stationary distribution of the chain described by
//! [`transition`].

pub mod iterated;
pub mod sampled;
pub mod transition;
mod traits;
pub use self::traits::*;

pub use self::iterated::{iterate_rank, IteratedPageRank};
pub use self::sampled::{sample_rank, SampledPageRank};
pub use self::transition::transition;

pub const DEFAULT_DAMPING: f64 = 0.85;
