use super::*;
use crate::*;
use algograph::graph::VertexId;
use std::collections::{BTreeMap, HashMap};

/// Power iteration of the PageRank equation
///
/// > PR(p) = (1 − d)/N + d · Σ_{q → p} PR(q) / L(q)
///
/// where dangling pages are patched to link to the whole corpus, themselves
/// included. Each round reads only the ranks of the previous one.
pub struct IteratedPageRank<'a> {
    corpus: &'a Corpus,
    damping: f64,
    threshold: f64,
    transitions: BTreeMap<(VertexId, VertexId), f64>,
    dangling: Vec<VertexId>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    pub threshold: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            threshold: 0.001,
        }
    }
}

impl Config {
    pub fn validate(&self) -> crate::Result<()> {
        error::check_damping(self.damping)?;
        if self.threshold.is_nan() || self.threshold <= 0.0 {
            return Err(Error::invalid("threshold", self.threshold));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Result {
    pub page_rank: RankVector,
    /// Change of each page in the last round.
    pub delta: BTreeMap<Page, f64>,
    pub iterations: usize,
}

/// What a stopping criterion gets to see after each round.
#[derive(Debug, Clone, Copy)]
pub struct Round {
    /// Rounds completed so far, starting at 1.
    pub iteration: usize,
    pub max_delta: f64,
    pub norm_delta: f64,
}

pub trait Converged {
    fn converged(&mut self, round: &Round) -> bool;

    fn or<C: Converged>(self, other: C) -> Or<Self, C>
    where
        Self: Sized,
    {
        Or(self, other)
    }
}

impl<F: FnMut(&Round) -> bool> Converged for F {
    fn converged(&mut self, round: &Round) -> bool {
        self(round)
    }
}

/// Stops once every page moved by strictly less than the threshold.
#[derive(Debug, Clone, Copy)]
pub struct Threshold(pub f64);

impl Converged for Threshold {
    fn converged(&mut self, round: &Round) -> bool {
        round.max_delta < self.0
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MaxRounds(pub usize);

impl Converged for MaxRounds {
    fn converged(&mut self, round: &Round) -> bool {
        round.iteration >= self.0
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Or<A, B>(A, B);

impl<A: Converged, B: Converged> Converged for Or<A, B> {
    fn converged(&mut self, round: &Round) -> bool {
        // both sides see every round
        let a = self.0.converged(round);
        let b = self.1.converged(round);
        a || b
    }
}

impl<'a> IteratedPageRank<'a> {
    pub fn new(corpus: &'a Corpus, config: &Config) -> crate::Result<Self> {
        config.validate()?;
        if corpus.is_empty() {
            return Err(Error::EmptyCorpus);
        }
        let damping = config.damping;
        let mut transitions = BTreeMap::new();
        let mut dangling = vec![];
        for u in corpus.vertices().iter().copied() {
            let k = corpus.out_degree(u);
            if k == 0 {
                dangling.push(u);
                continue;
            }
            let unit = damping / (k as f64);
            for v in corpus.out_links(u) {
                transitions.insert((u, v), unit);
            }
        }
        log::info!(
            "{} pages, {} dangling, damping {}, threshold {}",
            corpus.len(),
            dangling.len(),
            damping,
            config.threshold
        );
        Ok(Self {
            corpus,
            damping,
            threshold: config.threshold,
            transitions,
            dangling,
        })
    }

    /// Iterates until `criterion` reports convergence. There is no implicit
    /// cap on the number of rounds.
    pub fn calc_until(&self, mut criterion: impl Converged) -> self::Result {
        let n = self.corpus.len() as f64;
        let mut p: HashMap<VertexId, f64, ahash::RandomState> = self
            .corpus
            .vertices()
            .iter()
            .map(|v| (*v, 1.0 / n))
            .collect();
        let mut r = HashMap::with_hasher(ahash::RandomState::new());
        let mut iteration = 0;
        loop {
            iteration += 1;
            self.round(&p, &mut r);

            let delta = delta(&r, &p);
            let round = Round {
                iteration,
                max_delta: max_abs(&delta),
                norm_delta: norm_1(&delta),
            };
            log::debug!(
                "Round {}: max delta {:e}, norm delta {:e}",
                round.iteration,
                round.max_delta,
                round.norm_delta
            );

            if criterion.converged(&round) {
                log::info!("Stopped after {iteration} rounds");
                self.renormalize(&mut r);
                return self::Result {
                    page_rank: PageDistribution::from_vertices(self.corpus, &r),
                    delta: self
                        .corpus
                        .vertices()
                        .iter()
                        .map(|v| (self.corpus.page(*v).clone(), *delta.get(v).unwrap()))
                        .collect(),
                    iterations: iteration,
                };
            }

            std::mem::swap(&mut p, &mut r);
            r.clear();
        }
    }

    /// One round of the update applied to `ranks`.
    pub fn step(&self, ranks: &RankVector) -> RankVector {
        let p: HashMap<VertexId, f64, ahash::RandomState> = self
            .corpus
            .vertices()
            .iter()
            .map(|v| {
                let x = ranks.get(self.corpus.page(*v).as_str()).unwrap_or(0.0);
                (*v, x)
            })
            .collect();
        let mut r = HashMap::with_hasher(ahash::RandomState::new());
        self.round(&p, &mut r);
        PageDistribution::from_vertices(self.corpus, &r)
    }

    fn round(
        &self,
        p: &HashMap<VertexId, f64, ahash::RandomState>,
        r: &mut HashMap<VertexId, f64, ahash::RandomState>,
    ) {
        let n = self.corpus.len() as f64;
        // a dangling page hands its rank to everybody alike
        let dangling: f64 = self.dangling.iter().map(|v| p.get(v).unwrap()).sum();
        let base = (1.0 - self.damping) / n + self.damping * dangling / n;
        for v in self.corpus.vertices() {
            r.insert(*v, base);
        }
        for ((v0, v1), w) in self.transitions.iter() {
            let from = p.get(v0).unwrap();
            let to = r.get_mut(v1).unwrap();
            *to += from * w;
        }
    }

    fn renormalize(&self, r: &mut HashMap<VertexId, f64, ahash::RandomState>) {
        let sum: f64 = r.values().sum();
        if (sum - 1.0).abs() > 1e-9 {
            log::warn!("Rank sum drifted to {sum}, renormalizing");
            for x in r.values_mut() {
                *x /= sum;
            }
        }
    }
}

impl PageRank for IteratedPageRank<'_> {
    type Result = self::Result;

    fn calc(&mut self) -> Self::Result {
        self.calc_until(Threshold(self.threshold))
    }
}

impl PageRankResult for self::Result {
    fn page_rank(&self) -> &RankVector {
        &self.page_rank
    }
}

/// Ranks once no page changes by `threshold` or more in a round.
pub fn iterate_rank(corpus: &Corpus, damping: f64, threshold: f64) -> crate::Result<RankVector> {
    let config = Config { damping, threshold };
    let mut ipr = IteratedPageRank::new(corpus, &config)?;
    Ok(ipr.calc().page_rank)
}
