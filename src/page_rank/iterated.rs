use super::*;
use crate::common::{check_damping, check_graph};
use crate::*;
use algograph::graph::{QueryableGraph, VertexId};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, instrument, trace, warn};

/// Power iteration on the PageRank recurrence
///
/// ```text
/// PR(p) = (1 - d) / N + d * Σ PR(i) / L(i)   for each link i → p
/// ```
///
/// until no page moves by `epsilon` or more in one step. The ranks returned
/// are the ones that step started from, not the ones it produced.
///
/// Pages without outbound links contribute nothing to the sum. Unlike
/// [`transition_model`], their mass is not spread over all pages, so on a
/// graph with dangling pages the ranks sum to less than 1.
pub struct IteratedPageRank<'a> {
    graph: &'a LinkGraph,
    damping: f64,
    epsilon: f64,
    max_iterations: usize,
    // (source, sink) -> 1 / out_degree(source)
    transitions: BTreeMap<(VertexId, VertexId), f64>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    /// Absolute per-page change below which a step counts as converged.
    pub epsilon: f64,
    pub max_iterations: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: 0.85,
            epsilon: 0.001,
            max_iterations: 10_000,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Result {
    pub page_rank: RankVector,
    /// Change each page would make in one more step.
    pub delta: RankVector,
    /// Steps computed, including the one that found the change below `epsilon`.
    pub iterations: usize,
}

impl<'a> IteratedPageRank<'a> {
    pub fn new(g: &'a LinkGraph, config: &Config) -> Self {
        let transitions = {
            let mut transitions = BTreeMap::new();
            for e in g.graph().iter_edges() {
                let unit = 1.0 / (g.out_degree_of(e.source) as f64);
                transitions.insert((e.source, e.sink), unit);
            }
            transitions
        };
        Self {
            graph: g,
            damping: config.damping,
            epsilon: config.epsilon,
            max_iterations: config.max_iterations,
            transitions,
        }
    }

    fn validate(&self) -> RankResult<()> {
        check_graph(self.graph)?;
        check_damping(self.damping)?;
        if self.epsilon.is_nan() || self.epsilon <= 0.0 {
            return Err(RankError::InvalidEpsilon(self.epsilon));
        }
        if self.max_iterations == 0 {
            return Err(RankError::InvalidIterationLimit);
        }
        Ok(())
    }

    fn named(&self, v: &HashMap<VertexId, f64, ahash::RandomState>) -> RankVector {
        v.iter()
            .map(|(u, w)| (self.graph.page(*u).to_owned(), *w))
            .collect()
    }
}

impl PageRank for IteratedPageRank<'_> {
    type Result = self::Result;

    #[instrument(skip(self), fields(pages = self.graph.len(), damping = self.damping))]
    fn calc(&self) -> RankResult<Self::Result> {
        self.validate()?;
        let damping = self.damping;
        let n = self.graph.len() as f64;

        if self.graph.len() == 1 {
            let page = self.graph.pages().next().unwrap_or_default().to_owned();
            return Ok(Self::Result {
                page_rank: [(page.clone(), 1.0)].into_iter().collect(),
                delta: [(page, 0.0)].into_iter().collect(),
                iterations: 0,
            });
        }

        let mut p: HashMap<_, _, ahash::RandomState> =
            self.graph.vertices().map(|v| (v, 1.0 / n)).collect();
        let mut r = HashMap::with_hasher(ahash::RandomState::new());
        let mut delta = HashMap::with_hasher(ahash::RandomState::new());
        let mut max_delta = 0.0;
        for iteration in 1..=self.max_iterations {
            for v in self.graph.vertices() {
                r.insert(v, 0.0);
            }
            for ((v0, v1), w) in self.transitions.iter() {
                let from = p[v0];
                if let Some(to) = r.get_mut(v1) {
                    *to += from * w;
                }
            }
            for w in r.values_mut() {
                *w = (1.0 - damping) / n + damping * *w;
            }

            delta.clear();
            for v in self.graph.vertices() {
                delta.insert(v, r[&v] - p[&v]);
            }
            max_delta = delta.values().fold(0.0, |acc: f64, d| acc.max(d.abs()));
            trace!(iteration, max_delta, "power iteration step");

            if delta.values().all(|d| d.abs() < self.epsilon) {
                debug!(iteration, norm = norm_1(&delta), "converged");
                return Ok(Self::Result {
                    page_rank: self.named(&p),
                    delta: self.named(&delta),
                    iterations: iteration,
                });
            }

            std::mem::swap(&mut p, &mut r);
        }

        warn!(
            iterations = self.max_iterations,
            max_delta, "power iteration did not converge"
        );
        Err(RankError::NonConvergence {
            iterations: self.max_iterations,
            max_delta,
        })
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
        for page in self.graph.pages() {
            let p = self.result.page_rank.get(page).copied().unwrap_or_default();
            let d = self.result.delta.get(page).copied().unwrap_or_default();
            writeln!(f, "{page}: {p:?}, {d:?}")?;
        }
        Ok(())
    }
}
