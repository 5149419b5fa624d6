use crate::error::{Error, Result};
use crate::maximum_flow::graph::Graph;
use crate::maximum_flow::path_search::breadth_first_search;
use log::{debug, trace};
use num_traits::{CheckedAdd, NumAssign};
use std::fmt::Debug;

/// What a computation that ends with zero total flow reports.
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ZeroFlowPolicy {
    /// Zero is a valid maximum flow.
    #[default]
    Accept,
    /// Zero flow fails with `Error::NoAugmentingPath`.
    Reject,
}

#[derive(Default, Debug)]
pub struct EdmondsKarp {
    zero_flow: ZeroFlowPolicy,
    augmentations: usize,
}

impl EdmondsKarp {
    pub fn zero_flow(mut self, policy: ZeroFlowPolicy) -> Self {
        self.zero_flow = policy;
        self
    }

    /// Number of augmenting paths applied by the last `solve`.
    #[inline]
    pub fn augmentations(&self) -> usize {
        self.augmentations
    }

    /// Pushes flow from `source` to `sink` along shortest augmenting paths
    /// until none is left and returns the total. Residual capacities of
    /// `graph` are left in their final state.
    pub fn solve<Flow>(&mut self, source: usize, sink: usize, graph: &mut Graph<Flow>) -> Result<Flow>
    where
        Flow: NumAssign + CheckedAdd + Ord + Copy + Debug,
    {
        if source >= graph.num_nodes() {
            return Err(Error::NotFound(format!("vertex #{source}")));
        }
        if sink >= graph.num_nodes() {
            return Err(Error::NotFound(format!("vertex #{sink}")));
        }
        if source == sink {
            return Err(Error::InvalidArgument("source and sink must differ".to_string()));
        }

        debug!("edmonds-karp on {:?}: {} vertices, {} arcs, {} -> {}", graph.name(), graph.num_nodes(), graph.num_edges(), source, sink);
        self.augmentations = 0;
        let mut flow = Flow::zero();

        loop {
            let tree = breadth_first_search(graph, source, sink)?;
            if !tree.reachable {
                break;
            }

            // calculate delta, resolving every reverse arc before any capacity changes
            let path = tree.path(graph);
            let mut delta: Option<Flow> = None;
            let mut reverses = Vec::with_capacity(path.len());
            for &edge_id in path.iter() {
                let residual_capacity = graph.arcs[edge_id].residual_capacity();
                delta = Some(delta.map_or(residual_capacity, |d| d.min(residual_capacity)));
                reverses.push(graph.reverse_of(edge_id)?);
            }
            let Some(delta) = delta else {
                break;
            };
            let Some(total) = flow.checked_add(&delta) else {
                return Err(Error::FlowOverflow);
            };

            // update flow
            for (&edge_id, &rev) in path.iter().zip(reverses.iter()) {
                graph.push_flow(edge_id, rev, delta);
            }

            flow = total;
            self.augmentations += 1;
            trace!("augmentation {}: {} arcs, bottleneck {:?}", self.augmentations, path.len(), delta);
        }

        debug!("edmonds-karp finished: flow {:?} after {} augmentations", flow, self.augmentations);
        if flow == Flow::zero() && self.zero_flow == ZeroFlowPolicy::Reject {
            return Err(Error::NoAugmentingPath);
        }
        Ok(flow)
    }
}
