use crate::LinkGraph;
use quickcheck::{Arbitrary, Gen};

const N: usize = 10;

fn page_name(i: usize) -> String {
    format!("{i}.html")
}

/// Up to `N` pages with a handful of random links; may contain dangling pages.
#[derive(Debug, Clone)]
pub struct RandomLinkGraph {
    pub graph: LinkGraph,
}

impl Arbitrary for RandomLinkGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let n: usize = usize::arbitrary(g) % N;
        let mut links: Vec<(String, Vec<String>)> =
            (0..n).map(|i| (page_name(i), vec![])).collect();
        if n > 0 {
            for _ in 0..(n * 2) {
                let u = usize::arbitrary(g) % n;
                let v = usize::arbitrary(g) % n;
                links[u].1.push(page_name(v));
            }
        }
        Self {
            graph: LinkGraph::new(links),
        }
    }
}

/// At least one page, and every page links to at least one other page.
#[derive(Debug, Clone)]
pub struct LinkedGraph {
    pub graph: LinkGraph,
}

impl Arbitrary for LinkedGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let n: usize = usize::arbitrary(g) % (N - 2) + 2;
        let links: Vec<(String, Vec<String>)> = (0..n)
            .map(|i| {
                // a ring keeps every page non-dangling
                let mut outs = vec![page_name((i + 1) % n)];
                for _ in 0..(usize::arbitrary(g) % 3) {
                    outs.push(page_name(usize::arbitrary(g) % n));
                }
                (page_name(i), outs)
            })
            .collect();
        Self {
            graph: LinkGraph::new(links),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Damping(pub f64);

impl Arbitrary for Damping {
    fn arbitrary(g: &mut Gen) -> Self {
        let step = u8::arbitrary(g) % 99 + 1;
        Self(step as f64 / 100.0)
    }
}
