use crate::{LinkGraph, RankError, RankResult};
use std::{collections::HashMap, hash::Hash};

/// Page identifier to estimated rank.
pub type RankVector = HashMap<String, f64, ahash::RandomState>;

pub fn norm_1<K: Eq + Hash, S>(v: &HashMap<K, f64, S>) -> f64 {
    v.values().map(|x| x.abs()).sum()
}

pub(crate) fn check_graph(graph: &LinkGraph) -> RankResult<()> {
    if graph.is_empty() {
        return Err(RankError::EmptyGraph);
    }
    Ok(())
}

pub(crate) fn check_damping(damping: f64) -> RankResult<()> {
    // also rejects NaN
    if damping > 0.0 && damping < 1.0 {
        Ok(())
    } else {
        Err(RankError::InvalidDamping(damping))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn norm_1_sums_magnitudes() {
        let v: HashMap<_, _, ahash::RandomState> =
            [("a", 0.5), ("b", -0.25), ("c", 0.0)].into_iter().collect();
        assert!((norm_1(&v) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn damping_bounds_are_exclusive() {
        assert!(check_damping(0.85).is_ok());
        assert_eq!(check_damping(0.0), Err(RankError::InvalidDamping(0.0)));
        assert_eq!(check_damping(1.0), Err(RankError::InvalidDamping(1.0)));
        assert!(check_damping(-0.1).is_err());
        assert!(check_damping(f64::NAN).is_err());
    }

    #[test]
    fn empty_graph_is_rejected() {
        let g = LinkGraph::new(Vec::<(String, Vec<String>)>::new());
        assert_eq!(check_graph(&g), Err(RankError::EmptyGraph));
    }
}
