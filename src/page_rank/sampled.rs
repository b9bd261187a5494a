use super::*;
use crate::common::{check_damping, check_graph};
use crate::*;
use algograph::graph::VertexId;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Each of the `samples` steps credits every page with `1 / samples` of its
/// probability under the distribution the step draws from, starting uniform.
pub struct SampledPageRank<'a> {
    graph: &'a LinkGraph,
    damping: f64,
    samples: usize,
    seed: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    pub samples: usize,
    /// Seed for the walk. `None` draws one from the operating system, so
    /// repeated runs differ.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: 0.85,
            samples: 10_000,
            seed: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Result {
    pub page_rank: RankVector,
    pub samples: usize,
}

impl<'a> SampledPageRank<'a> {
    pub fn new(g: &'a LinkGraph, config: &Config) -> Self {
        Self {
            graph: g,
            damping: config.damping,
            samples: config.samples,
            seed: config.seed,
        }
    }

    #[instrument(skip(self, rng), fields(pages = self.graph.len(), samples = self.samples))]
    pub fn calc_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> RankResult<self::Result> {
        check_graph(self.graph)?;
        check_damping(self.damping)?;
        if self.samples == 0 {
            return Err(RankError::InvalidSampleCount);
        }

        let weight = 1.0 / self.samples as f64;
        let mut acc: HashMap<VertexId, f64, ahash::RandomState> =
            self.graph.vertices().map(|v| (v, 0.0)).collect();
        let mut dist = Distribution::uniform(self.graph);
        for step in 0..self.samples {
            for (v, w) in dist.weights() {
                if let Some(x) = acc.get_mut(&v) {
                    *x += w * weight;
                }
            }
            if step + 1 == self.samples {
                break;
            }
            let current = dist.draw(rng);
            dist = Distribution::transition(self.graph, Some(current), self.damping);
        }

        let page_rank: RankVector = acc
            .into_iter()
            .map(|(v, w)| (self.graph.page(v).to_owned(), w))
            .collect();
        debug!(total = norm_1(&page_rank), "sampling finished");
        Ok(self::Result {
            page_rank,
            samples: self.samples,
        })
    }
}

impl PageRank for SampledPageRank<'_> {
    type Result = self::Result;

    fn calc(&self) -> RankResult<Self::Result> {
        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        self.calc_with_rng(&mut rng)
    }
}

impl PageRankResult for self::Result {
    fn page_rank(&self) -> &RankVector {
        &self.page_rank
    }

    fn debug<'a>(&'a self, graph: &'a LinkGraph) -> impl std::fmt::Debug + 'a {
        ResultDebug {
            graph,
            result: self,
        }
    }
}

pub struct ResultDebug<'a> {
    graph: &'a LinkGraph,
    result: &'a self::Result,
}

impl std::fmt::Debug for ResultDebug<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "samples: {}", self.result.samples)?;
        for page in self.graph.pages() {
            let p = self.result.page_rank.get(page).copied().unwrap_or_default();
            writeln!(f, "{page}: {p:?}")?;
        }
        Ok(())
    }
}
