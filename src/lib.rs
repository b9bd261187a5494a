mod common;
pub use self::common::*;
mod error;
pub use self::error::*;
mod link_graph;
pub use self::link_graph::LinkGraph;

pub mod corpus;
pub use self::corpus::crawl;
pub mod page_rank;

#[cfg(test)]
mod testing;
