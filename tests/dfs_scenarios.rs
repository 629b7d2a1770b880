use amgraph::{EdgeId, EdgeLabel, GraphBuilder, GraphError, GraphSpec, VertexId, VertexLabel};

fn endpoints(graph: &amgraph::AdjacencyMatrixGraph, ids: &[EdgeId]) -> Vec<(usize, usize)> {
    ids.iter().map(|&id| graph.edge(id).endpoints()).collect()
}

#[test]
fn path_graph_is_one_spanning_tree() {
    let mut g = GraphBuilder::with_vertices(3)
        .with_edges([(0, 1), (1, 2)])
        .build()
        .unwrap();

    let forest = g.depth_first_search();

    assert_eq!(endpoints(&g, forest.discovery_edges()), vec![(0, 1), (1, 2)]);
    assert!(g.vertices().iter().all(|v| v.label() == VertexLabel::Visited));
    assert!(forest.is_spanning_tree(g.vertex_count()));
    assert!(forest.touches_every_vertex(&g));
}

#[test]
fn two_disjoint_edges_are_not_connected() {
    let mut g = GraphBuilder::with_vertices(4)
        .with_edges([(0, 1), (2, 3)])
        .build()
        .unwrap();

    let forest = g.depth_first_search();

    assert_eq!(endpoints(&g, forest.discovery_edges()), vec![(0, 1), (2, 3)]);
    assert_eq!(forest.tree_count(), 2);
    // Every vertex touches a discovery edge, yet the graph has two components.
    assert!(forest.touches_every_vertex(&g));
    assert!(!forest.is_spanning_tree(g.vertex_count()));
    assert!(!g.is_connected());
}

#[test]
fn two_vertex_matrix_cells() {
    let g = GraphBuilder::with_vertices(2).with_edges([(0, 1)]).build().unwrap();

    assert_eq!(g.cell(0, 1), Some(EdgeId(0)));
    assert_eq!(g.cell(1, 0), Some(EdgeId(0)));
    assert_eq!(g.cell(0, 0), None);
    assert_eq!(g.cell(1, 1), None);
}

#[test]
fn second_run_finds_nothing_new() {
    let mut g = GraphSpec::sample().build().unwrap();
    let first = g.depth_first_search();
    assert_eq!(first.len(), g.vertex_count() - 1);

    let labels_before: Vec<EdgeLabel> = g.edges().iter().map(|e| e.label()).collect();
    let second = g.depth_first_search();
    assert!(second.is_empty());
    assert_eq!(second.tree_count(), 0);
    assert_eq!(labels_before, g.edges().iter().map(|e| e.label()).collect::<Vec<_>>());

    g.reset_labels();
    assert_eq!(g.depth_first_search(), first);
}

#[test]
fn sample_graph_discovery_order() {
    let mut g = GraphSpec::sample().build().unwrap();
    assert_eq!((g.vertex_count(), g.edge_count()), (13, 16));

    let forest = g.depth_first_search();

    assert_eq!(
        endpoints(&g, forest.discovery_edges()),
        vec![
            (0, 1),
            (0, 2),
            (0, 5),
            (3, 5),
            (3, 4),
            (4, 6),
            (6, 7),
            (7, 8),
            (7, 9),
            (9, 10),
            (9, 11),
            (11, 12),
        ]
    );
    assert_eq!(
        forest.preorder().iter().map(|v| v.index()).collect::<Vec<_>>(),
        vec![0, 1, 2, 5, 3, 4, 6, 7, 8, 9, 10, 11, 12]
    );

    let back: Vec<usize> = g
        .edges()
        .iter()
        .enumerate()
        .filter(|(_, e)| e.label() == EdgeLabel::Back)
        .map(|(k, _)| k)
        .collect();
    assert_eq!(back, vec![3, 6, 8, 14]);
    assert!(forest.is_spanning_tree(13));
}

#[test]
fn sample_graph_rendering() {
    let g = GraphSpec::sample().build().unwrap();
    let rendered = g.display_matrix().to_string();
    let rows: Vec<&str> = rendered.lines().collect();

    assert_eq!(rows.len(), 14);
    assert!(rows[0].starts_with("    0"));
    assert!(rows[1].starts_with(" 0  [None]    (0, 1)"));
    assert!(rows[13].starts_with("12  [None]"));
    assert!(rows[13].ends_with("(11, 12)  [None]"));

    assert_eq!(g.edges()[8].to_string(), "( 4, 11, UNEXPLORED)");
    assert_eq!(g.vertices()[7].to_string(), "( 7, UNEXPLORED)");
}

#[test]
fn opposite_on_foreign_vertex_fails() {
    let g = GraphSpec::sample().build().unwrap();
    let edge = g.edge(EdgeId(0));
    assert_eq!(edge.opposite(VertexId(0)).unwrap(), VertexId(1));
    assert_eq!(edge.opposite(VertexId(1)).unwrap(), VertexId(0));
    assert!(matches!(
        edge.opposite(VertexId(12)),
        Err(GraphError::NotIncident { vertex: 12, .. })
    ));
}

#[test]
fn components_of_disconnected_description() {
    let spec = GraphSpec::from_json_str(include_str!("fixtures/two_triangles.json")).unwrap();
    let mut g = spec.build().unwrap();

    let components = g.connected_components();
    assert_eq!(components.len(), 3);
    assert_eq!(components[0], vec![VertexId(0), VertexId(1), VertexId(2)]);
    assert_eq!(components[1], vec![VertexId(3), VertexId(4), VertexId(5)]);
    assert_eq!(components[2], vec![VertexId(6)]);
    assert!(!g.is_connected());
}
