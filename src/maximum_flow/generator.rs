use crate::error::{Error, Result};
use crate::maximum_flow::graph::Graph;
use log::debug;
use num_traits::{CheckedAdd, NumAssign};
use rand::Rng;

pub const MAX_VERTICES: usize = 2500;

// one undirected edge = two paired arcs of equal capacity
fn add_edge<Flow>(graph: &mut Graph<Flow>, u: usize, v: usize, capacity: Flow) -> Result<()>
where
    Flow: NumAssign + CheckedAdd + Ord + Copy,
{
    let (from, to) = (vertex_id(graph, u)?, vertex_id(graph, v)?);
    graph.create_arc_pair(format!("a{from}_{to}"), format!("a{to}_{from}"), u, v, capacity, capacity)?;
    Ok(())
}

fn vertex_id<Flow>(graph: &Graph<Flow>, u: usize) -> Result<String>
where
    Flow: NumAssign + CheckedAdd + Ord + Copy,
{
    graph.vertex(u).map(|v| v.id.clone()).ok_or_else(|| Error::NotFound(format!("vertex #{u}")))
}

/// Connected random tree on `v1..vn`: every new vertex is joined to a random
/// vertex created before it.
pub fn random_tree<Flow, R>(n: usize, capacity: Flow, rng: &mut R) -> Result<Graph<Flow>>
where
    Flow: NumAssign + CheckedAdd + Ord + Copy,
    R: Rng,
{
    if n > MAX_VERTICES {
        return Err(Error::InvalidArgument(format!("too many vertices: {n}")));
    }

    let mut graph = Graph::new(format!("random tree ({n})"));
    for i in 0..n {
        let u = graph.create_vertex(format!("v{}", i + 1))?;
        if i > 0 {
            let v = rng.random_range(0..i);
            add_edge(&mut graph, v, u, capacity)?;
        }
    }
    Ok(graph)
}

/// Connected simple random graph with `n` vertices and `m` undirected edges
/// (no loops, no multiple edges). Requires `n - 1 <= m <= n(n-1)/2`.
pub fn random_simple_graph<Flow, R>(n: usize, m: usize, capacity: Flow, rng: &mut R) -> Result<Graph<Flow>>
where
    Flow: NumAssign + CheckedAdd + Ord + Copy,
    R: Rng,
{
    if n > MAX_VERTICES {
        return Err(Error::InvalidArgument(format!("too many vertices: {n}")));
    }
    if n == 0 {
        return Ok(Graph::new("random graph (0, 0)"));
    }
    if m < n - 1 || m > n * (n - 1) / 2 {
        return Err(Error::InvalidArgument(format!("impossible number of edges: {m}")));
    }

    let mut graph = random_tree(n, capacity, rng)?;
    graph.rename(format!("random graph ({n}, {m})"));

    let mut connected = graph.adjacency_matrix();
    let mut remaining = m - (n - 1);
    while remaining > 0 {
        let i = rng.random_range(0..n);
        let j = rng.random_range(0..n);
        if i == j || connected[i][j] != 0 || connected[j][i] != 0 {
            continue;
        }

        add_edge(&mut graph, i, j, capacity)?;
        connected[i][j] = 1;
        connected[j][i] = 1;
        remaining -= 1;
    }

    debug!("generated {:?}: {} arcs", graph.name(), graph.num_edges());
    Ok(graph)
}
