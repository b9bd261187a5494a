use crate::common::{check_damping, check_graph};
use crate::{LinkGraph, RankResult, RankVector};
use algograph::graph::*;
use rand::Rng;

#[derive(Debug, Clone)]
pub struct Distribution<'a> {
    graph: &'a LinkGraph,
    // in page order
    probs: Vec<(VertexId, f64)>,
}

/// A page without outbound links, or unknown to `graph`, leads to every page
/// with equal probability.
pub fn transition_model<'a>(
    graph: &'a LinkGraph,
    page: &str,
    damping: f64,
) -> RankResult<Distribution<'a>> {
    check_graph(graph)?;
    check_damping(damping)?;
    Ok(Distribution::transition(graph, graph.vertex(page), damping))
}

impl<'a> Distribution<'a> {
    pub(crate) fn uniform(graph: &'a LinkGraph) -> Self {
        let unit = 1.0 / graph.len() as f64;
        Self {
            graph,
            probs: graph.vertices().map(|v| (v, unit)).collect(),
        }
    }

    pub(crate) fn transition(graph: &'a LinkGraph, from: Option<VertexId>, damping: f64) -> Self {
        let out_degree = from.map_or(0, |u| graph.out_degree_of(u));
        let Some(u) = from.filter(|_| out_degree > 0) else {
            return Self::uniform(graph);
        };
        let base = (1.0 - damping) / graph.len() as f64;
        let mut probs: Vec<_> = graph.vertices().map(|v| (v, base)).collect();
        let unit = damping / out_degree as f64;
        for e in graph.graph().out_edges(&u) {
            // probs is sorted by page, not by vertex id
            if let Some((_, w)) = probs.iter_mut().find(|(v, _)| *v == e.sink) {
                *w += unit;
            }
        }
        Self { graph, probs }
    }

    pub fn get(&self, page: &str) -> f64 {
        self.graph
            .vertex(page)
            .and_then(|v| self.probs.iter().find(|(u, _)| *u == v))
            .map_or(0.0, |(_, w)| *w)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, f64)> + '_ {
        let graph = self.graph;
        self.probs.iter().map(move |(v, w)| (graph.page(*v), *w))
    }

    pub fn sum(&self) -> f64 {
        self.probs.iter().map(|(_, w)| w).sum()
    }

    pub fn to_rank_vector(&self) -> RankVector {
        self.iter().map(|(page, w)| (page.to_owned(), w)).collect()
    }

    pub(crate) fn weights(&self) -> impl Iterator<Item = (VertexId, f64)> + '_ {
        self.probs.iter().copied()
    }

    // inverts the cumulative distribution
    pub(crate) fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> VertexId {
        let x: f64 = rng.random::<f64>() * self.sum();
        let mut acc = 0.0;
        for (v, w) in self.probs.iter() {
            acc += w;
            if x < acc {
                return *v;
            }
        }
        // round-off left x at or past the last prefix sum
        self.probs
            .iter()
            .rev()
            .find(|(_, w)| *w > 0.0)
            .or(self.probs.last())
            .map(|(v, _)| *v)
            .unwrap_or_else(|| unreachable!("distribution over an empty graph"))
    }
}
