use algograph::graph::*;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::debug;

/// Pages iterate in lexicographic order. Self-links and links to unknown
/// pages are dropped while building.
#[derive(Debug, Clone)]
pub struct LinkGraph {
    graph: directed::TreeBackedGraph,
    vertices: BTreeMap<String, VertexId>,
    names: HashMap<VertexId, String, ahash::RandomState>,
}

impl LinkGraph {
    /// Repeated pages merge their links.
    pub fn new<I, P, L, Q>(links: I) -> Self
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<String>,
        L: IntoIterator<Item = Q>,
        Q: Into<String>,
    {
        let mut adjacency: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (page, outs) in links {
            adjacency
                .entry(page.into())
                .or_default()
                .extend(outs.into_iter().map(Into::into));
        }

        let mut graph = directed::TreeBackedGraph::new();
        let mut vertices = BTreeMap::new();
        let mut names = HashMap::with_hasher(ahash::RandomState::new());
        for page in adjacency.keys() {
            let v = graph.add_vertex();
            vertices.insert(page.clone(), v);
            names.insert(v, page.clone());
        }
        for (page, outs) in adjacency.iter() {
            let u = vertices[page];
            for target in outs.iter() {
                if target == page {
                    debug!(page = %page, "dropping self-link");
                    continue;
                }
                match vertices.get(target) {
                    Some(v) => {
                        graph.add_edge(u, *v);
                    }
                    None => debug!(page = %page, target = %target, "dropping link to unknown page"),
                }
            }
        }

        Self {
            graph,
            vertices,
            names,
        }
    }

    pub fn len(&self) -> usize {
        self.graph.vertex_size()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn link_count(&self) -> usize {
        self.graph.edge_size()
    }

    pub fn contains(&self, page: &str) -> bool {
        self.vertices.contains_key(page)
    }

    pub fn pages(&self) -> impl Iterator<Item = &str> + '_ {
        self.vertices.keys().map(String::as_str)
    }

    /// Empty for dangling and unknown pages.
    pub fn links(&self, page: &str) -> Vec<&str> {
        let mut links: Vec<_> = self
            .vertex(page)
            .map(|u| {
                self.graph
                    .out_edges(&u)
                    .map(|e| self.page(e.sink))
                    .collect()
            })
            .unwrap_or_default();
        links.sort_unstable();
        links
    }

    pub fn out_degree(&self, page: &str) -> usize {
        self.vertex(page)
            .map(|u| self.out_degree_of(u))
            .unwrap_or(0)
    }

    pub(crate) fn vertex(&self, page: &str) -> Option<VertexId> {
        self.vertices.get(page).copied()
    }

    pub(crate) fn page(&self, v: VertexId) -> &str {
        self.names[&v].as_str()
    }

    pub(crate) fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.values().copied()
    }

    pub(crate) fn out_degree_of(&self, u: VertexId) -> usize {
        self.graph.out_edges(&u).count()
    }

    pub(crate) fn graph(&self) -> &directed::TreeBackedGraph {
        &self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        let g = LinkGraph::new(Vec::<(&str, Vec<&str>)>::new());
        assert!(g.is_empty());
        assert_eq!(g.len(), 0);
        assert_eq!(g.pages().count(), 0);
        assert!(g.links("A").is_empty());
    }

    #[test]
    fn pages_are_sorted() {
        let g = LinkGraph::new([("c", vec!["a"]), ("a", vec!["b"]), ("b", vec![])]);
        let pages: Vec<_> = g.pages().collect();
        assert_eq!(pages, vec!["a", "b", "c"]);
        assert_eq!(g.link_count(), 2);
    }

    #[test]
    fn self_links_and_unknown_targets_are_dropped() {
        let g = LinkGraph::new([("A", vec!["A", "B", "Z"]), ("B", vec!["A"])]);
        assert_eq!(g.links("A"), vec!["B"]);
        assert_eq!(g.links("B"), vec!["A"]);
        assert_eq!(g.link_count(), 2);
        assert!(!g.contains("Z"));
    }

    #[test]
    fn repeated_pages_merge() {
        let g = LinkGraph::new([
            ("A", vec!["B"]),
            ("B", vec![]),
            ("C", vec![]),
            ("A", vec!["C", "B"]),
        ]);
        assert_eq!(g.len(), 3);
        assert_eq!(g.links("A"), vec!["B", "C"]);
        assert_eq!(g.out_degree("A"), 2);
    }

    #[test]
    fn dangling_and_unknown_pages_have_no_links() {
        let g = LinkGraph::new([("A", vec!["B"]), ("B", vec![])]);
        assert!(g.links("B").is_empty());
        assert_eq!(g.out_degree("B"), 0);
        assert!(g.links("nowhere").is_empty());
        assert_eq!(g.out_degree("nowhere"), 0);
    }

    #[test]
    fn vertex_names_round_trip() {
        let g = LinkGraph::new([("x", vec!["y"]), ("y", vec!["x"])]);
        for page in g.pages() {
            let v = g.vertex(page).unwrap();
            assert_eq!(g.page(v), page);
        }
        assert_eq!(g.vertices().count(), g.graph().vertex_size());
    }
}
