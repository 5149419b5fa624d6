use network_flow::maximum_flow::compute_max_flow;
use network_flow::maximum_flow::generator::random_simple_graph;
use network_flow::maximum_flow::graph::Graph;
use network_flow::Result;

fn random_graph(from: &str, to: &str) -> Result<u32> {
    let mut graph = random_simple_graph(4, 4, 10u32, &mut rand::rng())?;
    graph.rename(format!("G: {from} -> {to}"));
    let (source, sink) = (graph.get_vertex(from)?, graph.get_vertex(to)?);
    let flow = compute_max_flow(&mut graph, source, sink)?;
    println!("{graph}");
    Ok(flow)
}

fn fixed_graph(from: &str, to: &str) -> Result<u32> {
    let mut graph = Graph::new(format!("G2: {from} -> {to}"));
    let v3 = graph.create_vertex("v3")?;
    let v2 = graph.create_vertex("v2")?;
    let v1 = graph.create_vertex("v1")?;
    let v0 = graph.create_vertex("v0")?;

    graph.create_arc("v3_v2", v3, v2, 0)?;
    graph.create_arc("v3_v1", v3, v1, 0)?;
    graph.create_arc("v2_v3", v2, v3, 3)?;
    graph.create_arc("v2_v1", v2, v1, 1)?;
    graph.create_arc("v2_v0", v2, v0, 0)?;
    graph.create_arc("v1_v3", v1, v3, 8)?;
    graph.create_arc("v1_v2", v1, v2, 1)?;
    graph.create_arc("v1_v0", v1, v0, 0)?;
    graph.create_arc("v0_v2", v0, v2, 8)?;
    graph.create_arc("v0_v1", v0, v1, 4)?;
    graph.validate()?;

    let (source, sink) = (graph.get_vertex(from)?, graph.get_vertex(to)?);
    let flow = compute_max_flow(&mut graph, source, sink)?;
    println!("{graph}");
    Ok(flow)
}

fn main() {
    env_logger::init();

    println!("Result: {:?}", random_graph("v1", "v2"));
    for (from, to) in [("v1", "v0"), ("v2", "v3"), ("v0", "v1")] {
        println!("Result: {:?}", fixed_graph(from, to));
    }
}
