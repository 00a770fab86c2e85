//! Graph container integration tests.
//!
//! These tests drive the public API the way an analysis pass would:
//! 1. Build a graph from nodes and ordered edges
//! 2. Edit it (delete, split, reset)
//! 3. Verify adjacency consistency, edge counts and id stability after every edit
//!
//! The property tests replay random operation sequences against a plain
//! `BTreeMap<NodeId, Vec<NodeId>>` model of the outgoing lists.

use std::{
    collections::{BTreeMap, HashSet},
    sync::{Arc, Mutex},
};

use flowgraph::{
    DuplicateEdgePolicy, Edge, Error, Graph, GraphConfig, NodeId, NodeInfo, Result,
};
use proptest::prelude::*;

/// Checks both directions of every edge and the edge count.
fn assert_consistent<T>(graph: &Graph<T>) {
    let mut out_total = 0;
    for node in graph.node_ids() {
        for &succ in graph.neighbours(node) {
            assert!(
                graph.in_neighbours(succ).contains(&node),
                "{succ} does not list {node} as predecessor"
            );
        }
        for &pred in graph.in_neighbours(node) {
            assert!(
                graph.neighbours(pred).contains(&node),
                "{pred} does not list {node} as successor"
            );
        }
        out_total += graph.neighbours(node).len();
    }
    assert_eq!(graph.edge_count(), out_total, "edge count drifted");
}

/// A small CFG: `entry -> cond`, `cond -> [exit, body]`, `body -> cond`.
fn build_loop() -> Result<(Graph<NodeInfo>, [NodeId; 4])> {
    let mut graph = Graph::new();
    let entry = graph.add_node_info("entry", "", 0x1000);
    let cond = graph.add_node_info("cond", "cmp eax, 10", 0x1004);
    let body = graph.add_node_info("body", "inc eax", 0x1008);
    let exit = graph.add_node_info("exit", "ret", 0x100c);

    graph.add_edge(entry, cond)?;
    graph.add_edge(cond, exit)?;
    graph.add_edge(cond, body)?;
    graph.add_edge(body, cond)?;
    Ok((graph, [entry, cond, body, exit]))
}

#[test]
fn test_build_loop() -> Result<()> {
    let (graph, [entry, cond, body, exit]) = build_loop()?;

    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 4);
    assert_eq!(graph.neighbours(cond), &[exit, body]);
    assert_eq!(graph.in_neighbours(cond), &[entry, body]);
    assert_eq!(graph.nth_neighbour(cond, 0), Some(exit));
    assert_eq!(graph.nth_neighbour(cond, 2), None);
    assert!(graph.adjacent(body, cond));
    assert!(!graph.adjacent(cond, entry));
    assert_eq!(graph.node(body).map(|info| info.offset), Some(0x1008));
    assert_consistent(&graph);
    Ok(())
}

#[test]
fn test_edges_report_positions() -> Result<()> {
    let (graph, [entry, cond, body, exit]) = build_loop()?;

    let edges: Vec<Edge> = graph.edges().collect();
    assert_eq!(
        edges,
        vec![
            Edge::new(entry, cond, 0),
            Edge::new(cond, exit, 0),
            Edge::new(cond, body, 1),
            Edge::new(body, cond, 0),
        ]
    );
    Ok(())
}

#[test]
fn test_edge_consistency_after_edits() -> Result<()> {
    let (mut graph, [entry, cond, body, exit]) = build_loop()?;

    assert!(graph.delete_edge(cond, exit)?);
    assert_consistent(&graph);

    graph.add_edge_at(cond, exit, 0)?;
    assert_eq!(graph.neighbours(cond), &[exit, body]);
    assert_consistent(&graph);

    graph.delete_node(body)?;
    assert_eq!(graph.neighbours(cond), &[exit]);
    assert_eq!(graph.in_neighbours(cond), &[entry]);
    assert_consistent(&graph);
    Ok(())
}

#[test]
fn test_delete_node_detaches_everywhere() -> Result<()> {
    let (mut graph, [entry, cond, body, exit]) = build_loop()?;
    let before = graph.node_count();

    graph.delete_node(cond)?;

    assert_eq!(graph.node_count(), before - 1);
    assert!(!graph.contains_node(cond));
    for node in [entry, body, exit] {
        assert!(!graph.neighbours(node).contains(&cond));
        assert!(!graph.in_neighbours(node).contains(&cond));
    }
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.delete_node(cond), Err(Error::InvalidNode(cond)));
    Ok(())
}

#[test]
fn test_ids_never_reused() -> Result<()> {
    let mut graph = Graph::new();
    let first = graph.add_node(1);
    let second = graph.add_node(2);
    let third = graph.add_node(3);

    graph.delete_node(second)?;
    let fourth = graph.add_node(4);

    assert_ne!(fourth, first);
    assert_ne!(fourth, second);
    assert_ne!(fourth, third);
    assert_eq!(graph.node(second), None);

    graph.reset();
    let fifth = graph.add_node(5);
    assert!(fifth.index() > fourth.index());
    assert_eq!(graph.node(fourth), None);
    assert_eq!(graph.node(fifth), Some(&5));
    Ok(())
}

#[test]
fn test_add_edge_at_position_is_kept() -> Result<()> {
    let mut graph = Graph::new();
    let n = graph.add_node("n");
    let a = graph.add_node("a");
    let to = graph.add_node("to");
    let other = graph.add_node("other");

    graph.add_edge(n, a)?;
    graph.add_edge_at(n, to, 1)?;
    assert_eq!(graph.neighbours(n), &[a, to]);
    assert_eq!(graph.nth_neighbour(n, 1), Some(to));

    // Inserting in front shifts, but `to` keeps its place relative to `a`.
    graph.add_edge_at(n, other, 0)?;
    assert_eq!(graph.neighbours(n), &[other, a, to]);
    assert_eq!(graph.nth_neighbour(n, 2), Some(to));

    graph.delete_edge(n, other)?;
    assert_eq!(graph.nth_neighbour(n, 1), Some(to));
    Ok(())
}

#[test]
fn test_split_forward_moves_outgoing() -> Result<()> {
    let mut graph = Graph::new();
    let pred = graph.add_node("pred");
    let n = graph.add_node("n");
    let x = graph.add_node("x");
    let y = graph.add_node("y");
    graph.add_edge(pred, n)?;
    graph.add_edge(n, x)?;
    graph.add_edge(n, y)?;
    graph.add_edge(y, x)?;
    let edges_before = graph.edge_count();

    let new = graph.split_forward(n, "n.tail")?;

    assert_eq!(graph.neighbours(n), &[new]);
    assert_eq!(graph.neighbours(new), &[x, y]);
    assert_eq!(graph.in_neighbours(new), &[n]);
    assert_eq!(graph.in_neighbours(n), &[pred]);
    assert_eq!(graph.in_neighbours(x), &[new, y]);
    assert_eq!(graph.edge_count(), edges_before + 1);
    assert_consistent(&graph);
    Ok(())
}

#[test]
fn test_duplicate_edge_policies() -> Result<()> {
    let mut strict = Graph::with_config(GraphConfig::strict());
    let a = strict.add_node(());
    let b = strict.add_node(());
    strict.add_edge(a, b)?;
    assert_eq!(
        strict.add_edge(a, b),
        Err(Error::DuplicateEdge { from: a, to: b })
    );
    assert_eq!(strict.add_edge(a, a), Err(Error::SelfLoop(a)));
    assert_eq!(strict.edge_count(), 1);

    let mut lenient = Graph::with_config(GraphConfig {
        duplicate_edges: DuplicateEdgePolicy::Ignore,
        allow_self_loops: true,
    });
    let a = lenient.add_node(());
    let b = lenient.add_node(());
    lenient.add_edge(a, b)?;
    lenient.add_edge_at(a, b, 0)?;
    lenient.add_edge(a, a)?;
    assert_eq!(lenient.neighbours(a), &[b, a]);
    assert_eq!(lenient.edge_count(), 2);
    assert_consistent(&lenient);
    Ok(())
}

#[test]
fn test_release_hooks_across_lifecycle() -> Result<()> {
    let released = Arc::new(Mutex::new(Vec::new()));
    let hook = |name: &'static str| {
        let sink = Arc::clone(&released);
        move |data: &'static str| {
            assert_eq!(data, name);
            sink.lock().unwrap().push(data);
        }
    };

    let mut graph = Graph::new();
    let a = graph.add_node_with_release("a", hook("a"));
    let b = graph.add_node_with_release("b", hook("b"));
    graph.add_edge(a, b)?;
    graph.split_forward_with_release(a, "a'", hook("a'"))?;

    graph.delete_node(b)?;
    assert_eq!(*released.lock().unwrap(), vec!["b"]);

    graph.reset();
    let mut after_reset = released.lock().unwrap().clone();
    after_reset.sort_unstable();
    assert_eq!(after_reset, vec!["a", "a'", "b"]);

    graph.add_node_with_release("c", hook("c"));
    drop(graph);
    assert_eq!(released.lock().unwrap().len(), 4);
    Ok(())
}

#[test]
fn test_node_info_payload() {
    let mut graph: Graph<NodeInfo> = Graph::new();
    let n = graph.add_node_info("sub_401000", "push ebp", 0x401000);

    if let Some(info) = graph.node_mut(n) {
        info.body.push_str("\nmov ebp, esp");
    }

    let info = graph.node(n).cloned().unwrap_or_default();
    assert_eq!(info.title, "sub_401000");
    assert_eq!(info.body.lines().count(), 2);
    assert_eq!(info.to_string(), "sub_401000 @ 0x401000");
}

#[derive(Debug, Clone)]
enum Operation {
    AddNode,
    DeleteNode(u8),
    AddEdgeAt(u8, u8, u8),
    DeleteEdge(u8, u8),
    SplitForward(u8),
    Reset,
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        40 => Just(Operation::AddNode),
        10 => any::<u8>().prop_map(Operation::DeleteNode),
        60 => (any::<u8>(), any::<u8>(), 0u8..4).prop_map(|(a, b, n)| Operation::AddEdgeAt(a, b, n)),
        20 => (any::<u8>(), any::<u8>()).prop_map(|(a, b)| Operation::DeleteEdge(a, b)),
        10 => any::<u8>().prop_map(Operation::SplitForward),
        1 => Just(Operation::Reset),
    ]
}

/// Picks a handle from every id ever handed out, dead ones included.
fn pick(ids: &[NodeId], raw: u8) -> Option<NodeId> {
    if ids.is_empty() {
        None
    } else {
        Some(ids[usize::from(raw) % ids.len()])
    }
}

fn assert_matches_model<T>(graph: &Graph<T>, model: &BTreeMap<NodeId, Vec<NodeId>>) {
    assert_eq!(graph.node_count(), model.len(), "node count mismatch");
    assert_eq!(
        graph.node_ids().collect::<Vec<_>>(),
        model.keys().copied().collect::<Vec<_>>(),
        "live node mismatch"
    );

    let mut expected_in: BTreeMap<NodeId, Vec<NodeId>> =
        model.keys().map(|&node| (node, Vec::new())).collect();
    for (&from, targets) in model {
        assert_eq!(graph.neighbours(from), targets.as_slice(), "outgoing mismatch on {from}");
        for &to in targets {
            expected_in.entry(to).or_default().push(from);
        }
    }
    for (node, mut preds) in expected_in {
        let mut actual = graph.in_neighbours(node).to_vec();
        actual.sort_unstable();
        preds.sort_unstable();
        assert_eq!(actual, preds, "incoming mismatch on {node}");
    }

    let edges: usize = model.values().map(Vec::len).sum();
    assert_eq!(graph.edge_count(), edges, "edge count mismatch");
}

proptest! {
    #[test]
    fn test_graph_matches_adjacency_model(ops in proptest::collection::vec(operation(), 1..200)) {
        let mut graph = Graph::new();
        let mut model: BTreeMap<NodeId, Vec<NodeId>> = BTreeMap::new();
        let mut ids: Vec<NodeId> = Vec::new();
        let mut seen: HashSet<NodeId> = HashSet::new();

        for op in ops {
            match op {
                Operation::AddNode => {
                    let id = graph.add_node(());
                    prop_assert!(seen.insert(id), "id {} handed out twice", id);
                    ids.push(id);
                    model.insert(id, Vec::new());
                }
                Operation::DeleteNode(raw) => {
                    let Some(node) = pick(&ids, raw) else { continue };
                    if model.remove(&node).is_some() {
                        prop_assert_eq!(graph.delete_node(node), Ok(()));
                        for targets in model.values_mut() {
                            targets.retain(|&to| to != node);
                        }
                    } else {
                        prop_assert_eq!(graph.delete_node(node), Err(Error::InvalidNode(node)));
                    }
                }
                Operation::AddEdgeAt(a, b, nth) => {
                    let (Some(from), Some(to)) = (pick(&ids, a), pick(&ids, b)) else { continue };
                    let result = graph.add_edge_at(from, to, usize::from(nth));
                    if !model.contains_key(&from) {
                        prop_assert_eq!(result, Err(Error::InvalidNode(from)));
                    } else if !model.contains_key(&to) {
                        prop_assert_eq!(result, Err(Error::InvalidNode(to)));
                    } else if model[&from].contains(&to) {
                        prop_assert_eq!(result, Err(Error::DuplicateEdge { from, to }));
                    } else {
                        prop_assert_eq!(result, Ok(()));
                        if let Some(targets) = model.get_mut(&from) {
                            let at = usize::from(nth).min(targets.len());
                            targets.insert(at, to);
                        }
                    }
                }
                Operation::DeleteEdge(a, b) => {
                    let (Some(from), Some(to)) = (pick(&ids, a), pick(&ids, b)) else { continue };
                    let result = graph.delete_edge(from, to);
                    if !model.contains_key(&from) || !model.contains_key(&to) {
                        prop_assert!(result.is_err());
                    } else if let Some(targets) = model.get_mut(&from) {
                        let existed = targets.contains(&to);
                        targets.retain(|&t| t != to);
                        prop_assert_eq!(result, Ok(existed));
                    }
                }
                Operation::SplitForward(raw) => {
                    let Some(node) = pick(&ids, raw) else { continue };
                    let result = graph.split_forward(node, ());
                    match model.get_mut(&node) {
                        Some(targets) => {
                            let new = result.map_err(|e| TestCaseError::fail(e.to_string()))?;
                            prop_assert!(seen.insert(new));
                            ids.push(new);
                            let moved = std::mem::replace(targets, vec![new]);
                            model.insert(new, moved);
                        }
                        None => {
                            prop_assert_eq!(result, Err(Error::InvalidNode(node)));
                        }
                    }
                }
                Operation::Reset => {
                    graph.reset();
                    model.clear();
                }
            }

            assert_matches_model(&graph, &model);
            assert_consistent(&graph);
        }
    }

    #[test]
    fn test_reset_never_rewinds_ids(before in 0usize..20, after in 1usize..20) {
        let mut graph = Graph::new();
        let old: Vec<NodeId> = (0..before).map(|i| graph.add_node(i)).collect();
        let bound = graph.last_index();
        graph.reset();
        prop_assert_eq!(graph.last_index(), bound);

        for i in 0..after {
            let id = graph.add_node(i);
            prop_assert!(!old.contains(&id));
            prop_assert!(id.index() >= bound);
        }
        prop_assert_eq!(graph.node_count(), after);
    }
}
