use crate::error::{Error, Result};
use crate::maximum_flow::graph::Graph;
use num_traits::{CheckedAdd, NumAssign};
use std::collections::VecDeque;

/// Outcome of one breadth-first search over the residual network.
///
/// `predecessors[v]` is the arc used to first reach `v`. The map is built
/// fresh by every search, so nothing from an earlier run can leak into it.
#[derive(PartialEq, Debug, Clone)]
pub struct SearchTree {
    pub source: usize,
    pub target: usize,
    pub reachable: bool,
    predecessors: Vec<Option<usize>>,
}

impl SearchTree {
    #[inline]
    pub fn predecessor(&self, v: usize) -> Option<usize> {
        self.predecessors.get(v).copied().flatten()
    }

    /// Arcs of the augmenting path, walked from the target back to the source.
    /// Empty when the target is unreachable or equal to the source.
    pub fn path<Flow>(&self, graph: &Graph<Flow>) -> Vec<usize>
    where
        Flow: NumAssign + CheckedAdd + Ord + Copy,
    {
        let mut path = Vec::new();
        if !self.reachable {
            return path;
        }

        let mut v = self.target;
        while v != self.source {
            let Some(e) = self.predecessor(v) else {
                return Vec::new();
            };
            path.push(e);
            v = graph.arcs[e].from;
        }
        path
    }
}

/// Breadth-first search from `source` using only arcs with positive residual
/// capacity. Each vertex is enqueued once, through the first arc that reaches
/// it, so the recorded path to `target` has the fewest arcs.
pub fn breadth_first_search<Flow>(graph: &Graph<Flow>, source: usize, target: usize) -> Result<SearchTree>
where
    Flow: NumAssign + CheckedAdd + Ord + Copy,
{
    let n = graph.num_nodes();
    if source >= n {
        return Err(Error::NotFound(format!("vertex #{source}")));
    }
    if target >= n {
        return Err(Error::NotFound(format!("vertex #{target}")));
    }

    let mut predecessors = vec![None; n];
    if source == target {
        return Ok(SearchTree { source, target, reachable: true, predecessors });
    }

    let mut visited = vec![false; n];
    let mut queue = VecDeque::from([source]);
    visited[source] = true;

    while let Some(u) = queue.pop_front() {
        // everything enqueued before the target keeps its place in the tree
        if u == target {
            break;
        }

        for (e, arc) in graph.neighbors(u) {
            if visited[arc.to] || !arc.is_residual() {
                continue;
            }

            visited[arc.to] = true;
            predecessors[arc.to] = Some(e);
            queue.push_back(arc.to);
        }
    }

    Ok(SearchTree { source, target, reachable: visited[target], predecessors })
}
