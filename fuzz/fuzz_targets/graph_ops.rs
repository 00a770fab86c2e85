#![no_main]

use flowgraph::{algorithms::DfsTrace, Graph, GraphConfig, NodeId};
use libfuzzer_sys::fuzz_target;

fn pick(ids: &[NodeId], raw: u8) -> Option<NodeId> {
    (!ids.is_empty()).then(|| ids[usize::from(raw) % ids.len()])
}

fn check(graph: &Graph<u8>) {
    let mut out_total = 0;
    for node in graph.node_ids() {
        for &succ in graph.neighbours(node) {
            assert!(graph.in_neighbours(succ).contains(&node));
        }
        for &pred in graph.in_neighbours(node) {
            assert!(graph.neighbours(pred).contains(&node));
        }
        out_total += graph.out_degree(node);
    }
    assert_eq!(graph.edge_count(), out_total);

    let mut trace = DfsTrace::new();
    graph.dfs(&mut trace);
    assert_eq!(trace.discovered.len(), graph.node_count());
    assert_eq!(trace.edges.len(), graph.edge_count());
}

fuzz_target!(|data: &[u8]| {
    let config = match data.first() {
        Some(b) if b & 1 == 1 => GraphConfig::permissive(),
        _ => GraphConfig::default(),
    };
    let mut graph = Graph::with_config(config);
    let mut ids = Vec::new();

    for op in data.chunks_exact(3) {
        match op[0] % 6 {
            0 | 1 => ids.push(graph.add_node(op[1])),
            2 => {
                if let (Some(from), Some(to)) = (pick(&ids, op[1]), pick(&ids, op[2])) {
                    let _ = graph.add_edge_at(from, to, usize::from(op[0] >> 4));
                }
            }
            3 => {
                if let (Some(from), Some(to)) = (pick(&ids, op[1]), pick(&ids, op[2])) {
                    let _ = graph.delete_edge(from, to);
                }
            }
            4 => {
                if let Some(node) = pick(&ids, op[1]) {
                    if op[2] & 1 == 0 {
                        let _ = graph.delete_node(node);
                    } else if let Ok(new) = graph.split_forward(node, op[2]) {
                        ids.push(new);
                    }
                }
            }
            _ => {
                if op[1] == 0xff {
                    graph.reset();
                }
            }
        }
        check(&graph);
    }
});
