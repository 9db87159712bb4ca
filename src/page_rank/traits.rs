use crate::{Corpus, Page};
use algograph::graph::VertexId;
use std::{
    collections::{BTreeMap, HashMap},
    fmt,
};

pub trait PageRank {
    type Result: PageRankResult;

    fn calc(&mut self) -> Self::Result;
}

pub trait PageRankResult {
    fn page_rank(&self) -> &RankVector;

    /// Name-sorted listing, four decimals per page.
    fn display(&self) -> impl fmt::Display + '_ {
        Listing(self.page_rank())
    }
}

/// Probability per page, in name order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageDistribution(BTreeMap<Page, f64>);

/// Output of an estimator.
pub type RankVector = PageDistribution;

/// Where a walk goes next from a given page.
pub type TransitionDistribution = PageDistribution;

impl PageDistribution {
    /// `values` is aligned with the corpus' name order.
    pub(crate) fn from_aligned(corpus: &Corpus, values: &[f64]) -> Self {
        debug_assert_eq!(corpus.len(), values.len());
        Self(corpus.pages().cloned().zip(values.iter().copied()).collect())
    }

    pub(crate) fn from_vertices(
        corpus: &Corpus,
        values: &HashMap<VertexId, f64, ahash::RandomState>,
    ) -> Self {
        Self(
            corpus
                .vertices()
                .iter()
                .map(|v| (corpus.page(*v).clone(), *values.get(v).unwrap()))
                .collect(),
        )
    }

    pub fn get(&self, page: &str) -> Option<f64> {
        self.0.get(page).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Page, f64)> + '_ {
        self.0.iter().map(|(p, x)| (p, *x))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn sum(&self) -> f64 {
        self.0.values().sum()
    }

    /// ℓ₁ distance, pages missing on one side counting as zero.
    pub fn l1_distance(&self, other: &Self) -> f64 {
        let mut res: f64 = self
            .0
            .iter()
            .map(|(p, x)| (x - other.get(p.as_str()).unwrap_or(0.0)).abs())
            .sum();
        for (p, y) in other.0.iter() {
            if !self.0.contains_key(p) {
                res += y.abs();
            }
        }
        res
    }
}

impl<'a> IntoIterator for &'a PageDistribution {
    type Item = (&'a Page, &'a f64);
    type IntoIter = std::collections::btree_map::Iter<'a, Page, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

struct Listing<'a>(&'a RankVector);

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (page, rank) in self.0.iter() {
            writeln!(f, "  {page}: {rank:.4}")?;
        }
        Ok(())
    }
}
