use super::*;
use crate::{error::check_damping, Corpus, Error, Page};
use rand::{
    distr::{weighted::WeightedIndex, Distribution},
    Rng,
};
use std::collections::BTreeMap;

/// Monte-Carlo PageRank: the visit frequencies of a random surfer.
pub struct SampledPageRank<'a, R>
where
    R: Rng,
{
    corpus: &'a Corpus,
    damping: f64,
    samples: usize,
    rng: R,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    pub samples: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            samples: 10_000,
        }
    }
}

impl Config {
    pub fn validate(&self) -> crate::Result<()> {
        check_damping(self.damping)?;
        if self.samples == 0 {
            return Err(Error::invalid("number of samples", self.samples));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Result {
    pub page_rank: RankVector,
    pub visits: BTreeMap<Page, usize>,
    pub samples: usize,
}

impl<'a, R: Rng> SampledPageRank<'a, R> {
    pub fn new(corpus: &'a Corpus, config: &Config, rng: R) -> crate::Result<Self> {
        config.validate()?;
        if corpus.is_empty() {
            return Err(Error::EmptyCorpus);
        }
        Ok(Self {
            corpus,
            damping: config.damping,
            samples: config.samples,
            rng,
        })
    }
}

impl<R: Rng> PageRank for SampledPageRank<'_, R> {
    type Result = self::Result;

    fn calc(&mut self) -> Self::Result {
        log::info!(
            "Sampling {} steps over {} pages, damping {}",
            self.samples,
            self.corpus.len(),
            self.damping
        );
        let vertices = self.corpus.vertices();
        let mut visits = vec![0usize; vertices.len()];
        let mut cur = self.rng.random_range(0..vertices.len());
        for _ in 0..self.samples {
            visits[cur] += 1;
            let weights = transition::weights(self.corpus, vertices[cur], self.damping);
            // every row is a probability distribution, so at least one weight is positive
            let next = WeightedIndex::new(&weights).unwrap();
            cur = next.sample(&mut self.rng);
        }

        let n = self.samples as f64;
        let ranks: Vec<f64> = visits.iter().map(|x| *x as f64 / n).collect();
        let visits = self.corpus.pages().cloned().zip(visits).collect();
        Self::Result {
            page_rank: PageDistribution::from_aligned(self.corpus, &ranks),
            visits,
            samples: self.samples,
        }
    }
}

impl PageRankResult for self::Result {
    fn page_rank(&self) -> &RankVector {
        &self.page_rank
    }
}

/// Ranks from a walk of `samples` steps with `rng` as the only source of
/// randomness.
pub fn sample_rank<R: Rng>(
    corpus: &Corpus,
    damping: f64,
    samples: usize,
    rng: &mut R,
) -> crate::Result<RankVector> {
    let config = Config { damping, samples };
    let mut spr = SampledPageRank::new(corpus, &config, rng)?;
    Ok(spr.calc().page_rank)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use quickcheck_macros::quickcheck;
    use rand::{rngs::SmallRng, SeedableRng};

    fn sample(c: &Corpus, samples: usize, seed: u64) -> self::Result {
        let config = Config {
            damping: 0.85,
            samples,
        };
        let rng = SmallRng::seed_from_u64(seed);
        SampledPageRank::new(c, &config, rng).unwrap().calc()
    }

    fn corpus0() -> Corpus {
        corpus(&[
            ("1.html", &["2.html"]),
            ("2.html", &["1.html", "3.html"]),
            ("3.html", &["2.html", "4.html"]),
            ("4.html", &["2.html"]),
        ])
    }

    #[test]
    fn single_page() {
        let c = corpus(&[("a", &[])]);
        let res = sample(&c, 100, 3407);
        assert_eq!(res.page_rank.get("a"), Some(1.0));
        assert_eq!(res.visits[&Page::from("a")], 100);
    }

    #[test]
    fn reproducible() {
        let c = corpus0();
        let a = sample(&c, 1000, 3407);
        let b = sample(&c, 1000, 3407);
        assert_eq!(a.visits, b.visits);
        assert_eq!(a.page_rank, b.page_rank);
    }

    #[test]
    fn close_to_iterated() {
        let c = corpus0();
        let oracle = iterate_rank(&c, 0.85, 0.001).unwrap();
        let res = sample(&c, 10_000, 3407);
        let dist = res.page_rank.l1_distance(&oracle);
        assert!(dist < 0.05, "{dist}\n{}", res.display());
    }

    #[test]
    fn more_samples_get_closer() {
        let c = corpus(&[
            ("a", &["b", "c"]),
            ("b", &["c"]),
            ("c", &["a"]),
            ("d", &["c"]),
            ("e", &[]),
        ]);
        let oracle = iterate_rank(&c, 0.85, 1e-9).unwrap();
        let few = sample(&c, 100, 3407).page_rank.l1_distance(&oracle);
        let many = sample(&c, 100_000, 3407).page_rank.l1_distance(&oracle);
        assert!(many < few, "{many} >= {few}");
        assert!(many < 0.02, "{many}");
    }

    #[test]
    fn dangling_target_ranked_higher() {
        let c = corpus(&[("a", &["b"]), ("b", &[])]);
        let res = sample(&c, 10_000, 3407);
        let a = res.page_rank.get("a").unwrap();
        let b = res.page_rank.get("b").unwrap();
        assert!(a > 0.0 && b > a, "{a} {b}");
    }

    #[test]
    fn sample_rank_with_borrowed_rng() {
        let c = corpus0();
        let mut rng = SmallRng::seed_from_u64(7);
        let first = sample_rank(&c, 0.85, 500, &mut rng).unwrap();
        let second = sample_rank(&c, 0.85, 500, &mut rng).unwrap();
        assert!((first.sum() - 1.0).abs() < 1e-12);
        assert!((second.sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zero_samples() {
        let c = corpus0();
        let mut rng = SmallRng::seed_from_u64(7);
        let err = sample_rank(&c, 0.85, 0, &mut rng).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { .. }));
    }

    #[test]
    fn empty_corpus() {
        let c = corpus(&[]);
        let mut rng = SmallRng::seed_from_u64(7);
        let err = sample_rank(&c, 0.85, 10, &mut rng).unwrap_err();
        assert!(matches!(err, Error::EmptyCorpus));
    }

    #[quickcheck]
    fn counts_are_exact(raw: RandomCorpus, seed: u64, samples: u16) {
        let c = raw.corpus();
        let samples = usize::from(samples % 2000) + 1;
        let res = sample(&c, samples, seed);
        assert_eq!(res.visits.values().sum::<usize>(), samples);
        assert_eq!(res.page_rank.len(), c.len());
        assert!((res.page_rank.sum() - 1.0).abs() < 1e-9);
    }
}
