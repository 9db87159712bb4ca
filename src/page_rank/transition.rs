use super::*;
use crate::{error::check_damping, Corpus, Error, Result};
use algograph::graph::VertexId;
use std::collections::HashSet;

/// Probability of each page being the next one after `page`.
///
/// With probability `damping` the surfer follows one of the links of `page`,
/// chosen uniformly, and otherwise jumps to any page of the corpus. A
/// dangling page is treated as linking to every page, itself included, so the
/// next hop is uniform.
pub fn transition(corpus: &Corpus, page: &str, damping: f64) -> Result<TransitionDistribution> {
    check_damping(damping)?;
    if corpus.is_empty() {
        return Err(Error::EmptyCorpus);
    }
    let u = corpus
        .vertex(page)
        .ok_or_else(|| Error::UnknownPage(page.into()))?;
    Ok(PageDistribution::from_aligned(
        corpus,
        &weights(corpus, u, damping),
    ))
}

/// Transition probabilities out of `u`, aligned with [`Corpus::vertices`].
pub(crate) fn weights(corpus: &Corpus, u: VertexId, damping: f64) -> Vec<f64> {
    let n = corpus.len() as f64;
    let links: HashSet<VertexId, ahash::RandomState> = corpus.out_links(u).collect();
    if links.is_empty() {
        return vec![1.0 / n; corpus.len()];
    }
    let jump = (1.0 - damping) / n;
    let follow = damping / (links.len() as f64);
    corpus
        .vertices()
        .iter()
        .map(|v| {
            if links.contains(v) {
                jump + follow
            } else {
                jump
            }
        })
        .collect()
}
