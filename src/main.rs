use anyhow::{Context, Result};
use clap::Parser;
use corpus_rank::{
    crawl::crawl,
    page_rank::{iterated, sampled, IteratedPageRank, PageRank, PageRankResult, SampledPageRank},
};
use rand::{rngs::SmallRng, SeedableRng};
use std::path::PathBuf;

/// Ranks the pages of a directory of HTML files, once by sampling a random
/// surfer and once by iterating the PageRank equation.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Directory holding the `.html` pages.
    corpus: PathBuf,

    /// Probability of following a link rather than jumping to a random page.
    #[arg(short, long, default_value_t = 0.85)]
    damping: f64,

    /// Number of steps of the random walk.
    #[arg(short = 'n', long, default_value_t = 10_000)]
    samples: usize,

    /// Iteration stops once no page moves by this much in a round.
    #[arg(short, long, default_value_t = 0.001)]
    threshold: f64,

    /// Seed of the random walk; OS entropy when absent.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let corpus = crawl(&cli.corpus)
        .with_context(|| format!("Could not crawl {}", cli.corpus.display()))?;

    let rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    let config = sampled::Config {
        damping: cli.damping,
        samples: cli.samples,
    };
    let by_sampling = SampledPageRank::new(&corpus, &config, rng)?.calc();
    println!("PageRank Results from Sampling (n = {})", by_sampling.samples);
    print!("{}", by_sampling.display());

    let config = iterated::Config {
        damping: cli.damping,
        threshold: cli.threshold,
    };
    let by_iteration = IteratedPageRank::new(&corpus, &config)?.calc();
    println!("PageRank Results from Iteration");
    print!("{}", by_iteration.display());

    Ok(())
}
