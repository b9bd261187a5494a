use anyhow::Context;
use clap::Parser;
use link_rank::{
    crawl,
    page_rank::{iterated, sampled, IteratedPageRank, PageRank, PageRankResult, SampledPageRank},
    LinkGraph, RankVector,
};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Rank the pages of an HTML corpus by sampling and by iteration",
    long_about = None
)]
struct Cli {
    /// Directory holding the `*.html` pages.
    corpus: PathBuf,

    /// Probability of following a link rather than jumping to a random page.
    #[arg(long, default_value_t = 0.85)]
    damping: f64,

    /// Number of random-surfer samples.
    #[arg(long, default_value_t = 10_000)]
    samples: usize,

    /// Seed for the random surfer; unseeded when absent.
    #[arg(long)]
    seed: Option<u64>,

    /// Give up on iteration after this many rounds.
    #[arg(long, default_value_t = 10_000)]
    max_iterations: usize,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("PAGERANK_LOG")
        .unwrap_or_else(|_| EnvFilter::new("link_rank=info,warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

fn print_ranks(graph: &LinkGraph, ranks: &RankVector) {
    for page in graph.pages() {
        let rank = ranks.get(page).copied().unwrap_or_default();
        println!("  {page}: {rank:.4}");
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let graph = crawl(&cli.corpus)
        .with_context(|| format!("failed to crawl {}", cli.corpus.display()))?;

    let config = sampled::Config {
        damping: cli.damping,
        samples: cli.samples,
        seed: cli.seed,
    };
    let ranks = SampledPageRank::new(&graph, &config)
        .calc()
        .context("sampling failed")?;
    println!("PageRank Results from Sampling (n = {})", cli.samples);
    print_ranks(&graph, ranks.page_rank());

    let config = iterated::Config {
        damping: cli.damping,
        max_iterations: cli.max_iterations,
        ..iterated::Config::default()
    };
    let ranks = IteratedPageRank::new(&graph, &config)
        .calc()
        .context("iteration failed")?;
    println!("PageRank Results from Iteration");
    print_ranks(&graph, ranks.page_rank());

    Ok(())
}
