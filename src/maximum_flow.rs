pub mod edmonds_karp;
pub mod generator;
pub mod graph;
pub mod path_search;

use crate::error::Result;
use edmonds_karp::EdmondsKarp;
use graph::Graph;
use num_traits::{CheckedAdd, NumAssign};
use std::fmt::Debug;

/// Maximum flow from `source` to `sink` with the default solver settings.
pub fn compute_max_flow<Flow>(graph: &mut Graph<Flow>, source: usize, sink: usize) -> Result<Flow>
where
    Flow: NumAssign + CheckedAdd + Ord + Copy + Debug,
{
    EdmondsKarp::default().solve(source, sink, graph)
}
