use crate::error::{Error, Result};
use num_traits::{CheckedAdd, NumAssign};
use std::collections::{HashMap, VecDeque};
use std::fmt;

#[derive(PartialEq, Debug, Clone)]
pub struct Edge<Flow> {
    pub id: String,
    pub from: usize,
    pub to: usize,
    pub upper: Flow,
    pub(crate) capacity: Flow, // residual capacity
    pub(crate) rev: Option<usize>,
}

impl<Flow> Edge<Flow>
where
    Flow: NumAssign + CheckedAdd + Ord + Copy,
{
    #[inline]
    pub fn residual_capacity(&self) -> Flow {
        self.capacity
    }

    #[inline]
    pub fn is_residual(&self) -> bool {
        self.capacity > Flow::zero()
    }

    #[inline]
    pub fn rev(&self) -> Option<usize> {
        self.rev
    }
}

#[derive(PartialEq, Debug, Clone)]
pub struct Vertex {
    pub id: String,
    pub(crate) arcs: Vec<usize>,
}

impl Vertex {
    /// Indices of the arcs leaving this vertex, in creation order.
    #[inline]
    pub fn arcs(&self) -> &[usize] {
        &self.arcs
    }
}

/// A capacitated directed network. Every arc is meant to be paired with an
/// arc in the opposite direction (possibly of capacity 0); augmentation pushes
/// residual capacity from an arc to its pair.
#[derive(Default, Debug, Clone)]
pub struct Graph<Flow> {
    name: String,
    vertices: Vec<Vertex>,
    pub(crate) arcs: Vec<Edge<Flow>>,
    vertex_index: HashMap<String, usize>,
    arc_index: HashMap<String, usize>,
}

impl<Flow> Graph<Flow>
where
    Flow: NumAssign + CheckedAdd + Ord + Copy,
{
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vertices: Vec::new(),
            arcs: Vec::new(),
            vertex_index: HashMap::new(),
            arc_index: HashMap::new(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.arcs.len()
    }

    // return vertex index
    pub fn create_vertex(&mut self, id: impl Into<String>) -> Result<usize> {
        let id = id.into();
        if self.vertex_index.contains_key(&id) {
            return Err(Error::DuplicateId(id));
        }

        let u = self.vertices.len();
        self.vertex_index.insert(id.clone(), u);
        self.vertices.push(Vertex { id, arcs: Vec::new() });
        Ok(u)
    }

    /// Creates the arc `from -> to`. The arc is paired with the first still
    /// unpaired arc `to -> from`, if any; otherwise it stays unpaired until
    /// its counterpart is created.
    pub fn create_arc(&mut self, id: impl Into<String>, from: usize, to: usize, capacity: Flow) -> Result<usize> {
        let id = id.into();
        self.check_arc(&id, from, to, capacity)?;

        let rev = self.vertices[to].arcs.iter().copied().find(|&r| self.arcs[r].to == from && self.arcs[r].rev.is_none());
        if let Some(r) = rev {
            Self::check_pair_capacity(&id, capacity, self.arcs[r].upper)?;
        }
        let e = self.push_arc(id, from, to, capacity, rev);
        if let Some(r) = rev {
            self.arcs[r].rev = Some(e);
        }
        Ok(e)
    }

    /// Creates `from -> to` and `to -> from` paired with each other.
    pub fn create_arc_pair(
        &mut self,
        id: impl Into<String>,
        reverse_id: impl Into<String>,
        from: usize,
        to: usize,
        capacity: Flow,
        reverse_capacity: Flow,
    ) -> Result<(usize, usize)> {
        let (id, reverse_id) = (id.into(), reverse_id.into());
        if id == reverse_id {
            return Err(Error::DuplicateId(id));
        }
        self.check_arc(&id, from, to, capacity)?;
        self.check_arc(&reverse_id, to, from, reverse_capacity)?;
        Self::check_pair_capacity(&id, capacity, reverse_capacity)?;

        let e = self.arcs.len();
        self.push_arc(id, from, to, capacity, Some(e + 1));
        self.push_arc(reverse_id, to, from, reverse_capacity, Some(e));
        Ok((e, e + 1))
    }

    fn check_arc(&self, id: &str, from: usize, to: usize, capacity: Flow) -> Result<()> {
        if from >= self.num_nodes() {
            return Err(Error::NotFound(format!("vertex #{from}")));
        }
        if to >= self.num_nodes() {
            return Err(Error::NotFound(format!("vertex #{to}")));
        }
        if from == to {
            return Err(Error::InvalidArgument(format!("arc {id} is a self-loop")));
        }
        if capacity < Flow::zero() {
            return Err(Error::InvalidArgument(format!("arc {id} has a negative capacity")));
        }
        if self.arc_index.contains_key(id) {
            return Err(Error::DuplicateId(id.to_string()));
        }
        Ok(())
    }

    // residual capacity moves between the two arcs of a pair, so their sum must fit in Flow
    fn check_pair_capacity(id: &str, capacity: Flow, reverse_capacity: Flow) -> Result<()> {
        match capacity.checked_add(&reverse_capacity) {
            Some(_) => Ok(()),
            None => Err(Error::InvalidArgument(format!("arc {id} and its reverse exceed the capacity range"))),
        }
    }

    fn push_arc(&mut self, id: String, from: usize, to: usize, capacity: Flow, rev: Option<usize>) -> usize {
        let e = self.arcs.len();
        self.arc_index.insert(id.clone(), e);
        self.arcs.push(Edge { id, from, to, upper: capacity, capacity, rev });
        self.vertices[from].arcs.push(e);
        e
    }

    pub fn get_vertex(&self, id: &str) -> Result<usize> {
        self.vertex_index.get(id).copied().ok_or_else(|| Error::NotFound(id.to_string()))
    }

    pub fn get_arc(&self, id: &str) -> Result<usize> {
        self.arc_index.get(id).copied().ok_or_else(|| Error::NotFound(id.to_string()))
    }

    #[inline]
    pub fn vertex(&self, u: usize) -> Option<&Vertex> {
        self.vertices.get(u)
    }

    #[inline]
    pub fn arc(&self, e: usize) -> Option<&Edge<Flow>> {
        self.arcs.get(e)
    }

    /// Outgoing arcs of `u` as `(arc index, arc)`. Panics if `u` is out of range.
    #[inline]
    pub fn neighbors(&self, u: usize) -> impl Iterator<Item = (usize, &Edge<Flow>)> + '_ {
        self.vertices[u].arcs().iter().map(move |&e| (e, &self.arcs[e]))
    }

    pub fn reverse_of(&self, e: usize) -> Result<usize> {
        let arc = self.arcs.get(e).ok_or_else(|| Error::NotFound(format!("arc #{e}")))?;
        arc.rev().ok_or_else(|| Error::MalformedNetwork { arc: arc.id.clone() })
    }

    /// Fails on the first arc without a reverse pair.
    pub fn validate(&self) -> Result<()> {
        match self.arcs.iter().find(|a| a.rev().is_none()) {
            Some(arc) => Err(Error::MalformedNetwork { arc: arc.id.clone() }),
            None => Ok(()),
        }
    }

    /// Flow carried in the direction of `e`, after cancellation against its pair.
    pub fn flow(&self, e: usize) -> Option<Flow> {
        let arc = self.arcs.get(e)?;
        if arc.upper > arc.capacity {
            Some(arc.upper - arc.capacity)
        } else {
            Some(Flow::zero())
        }
    }

    #[inline]
    pub(crate) fn push_flow(&mut self, e: usize, rev: usize, flow: Flow) {
        self.arcs[e].capacity -= flow;
        self.arcs[rev].capacity += flow;
    }

    pub fn reset_capacities(&mut self) {
        self.arcs.iter_mut().for_each(|arc| arc.capacity = arc.upper);
    }

    // res[u][v] = number of arcs u -> v
    pub fn adjacency_matrix(&self) -> Vec<Vec<usize>> {
        let mut res = vec![vec![0; self.num_nodes()]; self.num_nodes()];
        for arc in self.arcs.iter() {
            res[arc.from][arc.to] += 1;
        }
        res
    }

    // vertices reachable from source in the residual network, in bfs order
    pub fn minimum_cut(&self, source: usize) -> Vec<usize> {
        let mut cut = Vec::new();
        if source >= self.num_nodes() {
            return cut;
        }

        let mut visited = vec![false; self.num_nodes()];
        let mut que = VecDeque::from([source]);
        visited[source] = true;

        while let Some(u) = que.pop_front() {
            cut.push(u);
            for (_, arc) in self.neighbors(u) {
                if !visited[arc.to] && arc.is_residual() {
                    visited[arc.to] = true;
                    que.push_back(arc.to);
                }
            }
        }

        cut
    }
}

impl<Flow> fmt::Display for Graph<Flow>
where
    Flow: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        for v in self.vertices.iter() {
            write!(f, "{} -->", v.id)?;
            for &e in v.arcs.iter() {
                let arc = &self.arcs[e];
                write!(f, " {} ({}) ({}->{})", arc.id, arc.capacity, v.id, self.vertices[arc.to].id)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_vertices() -> (Graph<i32>, usize, usize) {
        let mut graph = Graph::new("G");
        let a = graph.create_vertex("a").unwrap();
        let b = graph.create_vertex("b").unwrap();
        (graph, a, b)
    }

    #[test]
    fn duplicate_vertex_id() {
        let (mut graph, _, _) = two_vertices();
        assert_eq!(graph.create_vertex("a"), Err(Error::DuplicateId("a".to_string())));
        assert_eq!(graph.num_nodes(), 2);
    }

    #[test]
    fn duplicate_arc_id() {
        let (mut graph, a, b) = two_vertices();
        graph.create_arc("x", a, b, 1).unwrap();
        assert_eq!(graph.create_arc("x", b, a, 1), Err(Error::DuplicateId("x".to_string())));
        assert_eq!(graph.create_arc_pair("y", "y", a, b, 1, 1), Err(Error::DuplicateId("y".to_string())));
    }

    #[test]
    fn lookup() {
        let (graph, a, b) = two_vertices();
        assert_eq!(graph.get_vertex("a"), Ok(a));
        assert_eq!(graph.get_vertex("b"), Ok(b));
        assert_eq!(graph.get_vertex("c"), Err(Error::NotFound("c".to_string())));
        assert_eq!(graph.get_arc("a_b"), Err(Error::NotFound("a_b".to_string())));
    }

    #[test]
    fn rejects_bad_arcs() {
        let (mut graph, a, b) = two_vertices();
        assert!(matches!(graph.create_arc("loop", a, a, 1), Err(Error::InvalidArgument(_))));
        assert!(matches!(graph.create_arc("neg", a, b, -1), Err(Error::InvalidArgument(_))));
        assert!(matches!(graph.create_arc("far", a, 7, 1), Err(Error::NotFound(_))));
        assert_eq!(graph.num_edges(), 0);
    }

    #[test]
    fn pairs_on_creation() {
        let (mut graph, a, b) = two_vertices();
        let ab = graph.create_arc("a_b", a, b, 5).unwrap();
        assert_eq!(graph.reverse_of(ab), Err(Error::MalformedNetwork { arc: "a_b".to_string() }));
        assert!(graph.validate().is_err());

        let ba = graph.create_arc("b_a", b, a, 0).unwrap();
        assert_eq!(graph.reverse_of(ab), Ok(ba));
        assert_eq!(graph.reverse_of(ba), Ok(ab));
        assert_eq!(graph.validate(), Ok(()));
    }

    #[test]
    fn parallel_arcs_pair_one_to_one() {
        let (mut graph, a, b) = two_vertices();
        let ab1 = graph.create_arc("ab1", a, b, 1).unwrap();
        let ab2 = graph.create_arc("ab2", a, b, 2).unwrap();
        let ba1 = graph.create_arc("ba1", b, a, 0).unwrap();
        assert_eq!(graph.reverse_of(ab1), Ok(ba1));
        assert!(graph.reverse_of(ab2).is_err());

        let ba2 = graph.create_arc("ba2", b, a, 0).unwrap();
        assert_eq!(graph.reverse_of(ab2), Ok(ba2));
        assert_eq!(graph.reverse_of(ba2), Ok(ab2));
    }

    #[test]
    fn arc_pair() {
        let (mut graph, a, b) = two_vertices();
        let (ab, ba) = graph.create_arc_pair("a_b", "b_a", a, b, 3, 0).unwrap();
        assert_eq!(graph.reverse_of(ab), Ok(ba));
        assert_eq!(graph.arc(ba).unwrap().from, b);
        assert_eq!(graph.neighbors(a).map(|(e, _)| e).collect::<Vec<_>>(), vec![ab]);
        assert_eq!(graph.neighbors(b).map(|(e, _)| e).collect::<Vec<_>>(), vec![ba]);
    }

    #[test]
    fn rejects_pair_capacity_overflow() {
        let mut graph: Graph<u8> = Graph::new("narrow");
        let a = graph.create_vertex("a").unwrap();
        let b = graph.create_vertex("b").unwrap();
        assert!(matches!(graph.create_arc_pair("a_b", "b_a", a, b, 200, 200), Err(Error::InvalidArgument(_))));
        assert_eq!(graph.num_edges(), 0);

        let ab = graph.create_arc("a_b", a, b, 200).unwrap();
        assert!(matches!(graph.create_arc("b_a", b, a, 56), Err(Error::InvalidArgument(_))));
        let ba = graph.create_arc("b_a", b, a, 55).unwrap();
        assert_eq!(graph.reverse_of(ab), Ok(ba));
    }

    #[test]
    fn push_flow_and_reset() {
        let (mut graph, a, b) = two_vertices();
        let (ab, ba) = graph.create_arc_pair("a_b", "b_a", a, b, 3, 1).unwrap();
        graph.push_flow(ab, ba, 2);
        assert_eq!(graph.arc(ab).unwrap().residual_capacity(), 1);
        assert_eq!(graph.arc(ba).unwrap().residual_capacity(), 3);
        assert_eq!(graph.flow(ab), Some(2));
        assert_eq!(graph.flow(ba), Some(0));
        assert_eq!(graph.minimum_cut(a), vec![a, b]);

        graph.reset_capacities();
        assert_eq!(graph.arc(ab).unwrap().residual_capacity(), 3);
        assert_eq!(graph.arc(ba).unwrap().residual_capacity(), 1);
    }

    #[test]
    fn minimum_cut_follows_residual_arcs() {
        let (mut graph, a, b) = two_vertices();
        let c = graph.create_vertex("c").unwrap();
        graph.create_arc_pair("a_b", "b_a", a, b, 1, 0).unwrap();
        graph.create_arc_pair("b_c", "c_b", b, c, 0, 4).unwrap();
        assert_eq!(graph.minimum_cut(a), vec![a, b]);
        assert_eq!(graph.minimum_cut(c), vec![c, b]);
        assert!(graph.minimum_cut(9).is_empty());
    }

    #[test]
    fn adjacency_matrix() {
        let (mut graph, a, b) = two_vertices();
        graph.create_arc_pair("a_b", "b_a", a, b, 1, 1).unwrap();
        graph.create_arc("a_b_2", a, b, 1).unwrap();
        assert_eq!(graph.adjacency_matrix(), vec![vec![0, 2], vec![1, 0]]);
    }

    #[test]
    fn display() {
        let (mut graph, a, b) = two_vertices();
        graph.create_arc_pair("a_b", "b_a", a, b, 5, 0).unwrap();
        assert_eq!(graph.to_string(), "G\na --> a_b (5) (a->b)\nb --> b_a (0) (b->a)\n");
    }
}
