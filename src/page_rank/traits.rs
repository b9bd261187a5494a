use crate::{LinkGraph, RankResult, RankVector};

pub trait PageRank {
    type Result: PageRankResult;

    fn calc(&self) -> RankResult<Self::Result>;
}

pub trait PageRankResult {
    fn page_rank(&self) -> &RankVector;
    fn debug<'a>(&'a self, graph: &'a LinkGraph) -> impl std::fmt::Debug + 'a;
}
