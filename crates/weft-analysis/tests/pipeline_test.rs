//! End-to-end tests for the analysis pipeline.

use weft_core::config::AnalysisConfig;
use weft_core::types::snapshot::{GraphEdge, GraphNode, NodeKind};
use weft_core::types::source::{EdgeKind, FileRecord};

use weft_analysis::pipeline::{
    analyze_files, analyze_files_observed, analyze_single_file, calculate_metrics, Stage,
};

fn config() -> AnalysisConfig {
    AnalysisConfig::default()
}

#[test]
fn mutual_imports_form_exactly_one_cycle() {
    // A imports B and B imports A: one loop, not two rotations.
    // Resolution is textual, so the analyzed keys match the specifiers
    // as written.
    let files = vec![
        FileRecord::new("A", "import x from \"./B\";\n"),
        FileRecord::new("B", "import y from \"./A\";\n"),
    ];
    let report = analyze_files(&files, &config()).unwrap();

    assert_eq!(report.graph.node_count(), 2);
    assert_eq!(report.graph.edge_count(), 2);
    assert_eq!(report.graph.outgoing("A")[0].target(), "B");
    assert_eq!(report.graph.outgoing("B")[0].target(), "A");

    assert_eq!(report.cycles.len(), 1);
    assert_eq!(report.cycles[0].path, vec!["A", "B", "A"]);
    assert_eq!(report.metrics.circular_dependency_count, 1);
}

#[test]
fn import_extensions_resolve_when_written_explicitly() {
    // Specifiers that include the extension resolve straight onto the
    // analyzed path.
    let files = vec![
        FileRecord::new("src/a.js", "import b from \"./b.js\";\n"),
        FileRecord::new("src/b.js", ""),
    ];
    let report = analyze_files(&files, &config()).unwrap();
    assert_eq!(report.graph.edge_count(), 1);
    assert!(report.graph.externals.is_empty());
}

#[test]
fn three_files_without_imports_are_isolated() {
    let files = vec![
        FileRecord::new("a.js", "const a = 1;\n"),
        FileRecord::new("b.js", "const b = 2;\n"),
        FileRecord::new("c.js", "const c = 3;\n"),
    ];
    let report = analyze_files(&files, &config()).unwrap();

    assert_eq!(report.metrics.total_files, 3);
    assert_eq!(report.metrics.total_dependencies, 0);
    assert_eq!(report.metrics.density, 0.0);
    assert_eq!(report.metrics.connected_components, 3);
    assert_eq!(report.metrics.isolated_nodes, 3);
    assert!(report.cycles.is_empty());
}

#[test]
fn import_and_require_of_the_same_target_are_two_edges() {
    let files = vec![
        FileRecord::new(
            "src/main.js",
            "import x from \"./sibling\";\nconst y = require(\"./sibling\");\n",
        ),
        FileRecord::new("src/sibling", ""),
    ];
    let report = analyze_files(&files, &config()).unwrap();

    let edges = report.graph.outgoing("src/main.js");
    assert_eq!(edges.len(), 2);
    assert_eq!(edges[0].kind, EdgeKind::Import);
    assert_eq!(edges[1].kind, EdgeKind::Require);
    assert_eq!(edges[0].target(), "src/sibling");
    assert_eq!(edges[1].target(), "src/sibling");
    assert_eq!(edges[0].line, 1);
    assert_eq!(edges[1].line, 2);
}

#[test]
fn thousand_file_chain_stays_acyclic_and_fast() {
    // file_0 imports file_1 imports ... imports file_999.
    let mut files = Vec::with_capacity(1000);
    for i in 0..1000 {
        let content = if i < 999 {
            format!("import next from \"./file_{}\";\n", i + 1)
        } else {
            String::new()
        };
        files.push(FileRecord::new(format!("file_{i}"), content));
    }

    let started = std::time::Instant::now();
    let report = analyze_files(&files, &config()).unwrap();
    assert!(
        started.elapsed() < std::time::Duration::from_secs(10),
        "1000-file analysis took too long"
    );

    assert_eq!(report.metrics.total_files, 1000);
    assert_eq!(report.metrics.total_dependencies, 999);
    assert_eq!(report.metrics.circular_dependency_count, 0);
    assert_eq!(report.metrics.max_depth, 1000);
    assert_eq!(report.metrics.connected_components, 1);
}

#[test]
fn pipeline_is_idempotent_on_unchanged_input() {
    let files = vec![
        FileRecord::new("a.js", "import b from \"./b.js\";\nimport c from \"./c.js\";\n"),
        FileRecord::new("b.js", "import c from \"./c.js\";\n"),
        FileRecord::new("c.js", "import a from \"./a.js\";\n"),
        FileRecord::new("d.js", "import ext from \"lodash\";\n"),
    ];
    let first = analyze_files(&files, &config()).unwrap();
    let second = analyze_files(&files, &config()).unwrap();

    assert_eq!(first.graph, second.graph);
    assert_eq!(first.cycles, second.cycles);
    assert_eq!(first.metrics, second.metrics);
    assert_eq!(first.node_metrics, second.node_metrics);
}

#[test]
fn max_depth_is_finite_on_cyclic_graphs() {
    let files = vec![
        FileRecord::new("a.js", "import b from \"./b.js\";\n"),
        FileRecord::new("b.js", "import c from \"./c.js\";\n"),
        FileRecord::new("c.js", "import a from \"./a.js\";\n"),
    ];
    let report = analyze_files(&files, &config()).unwrap();
    assert_eq!(report.cycles.len(), 1);
    assert!(report.metrics.max_depth <= 3);
}

#[test]
fn stage_observer_fires_in_pipeline_order() {
    let files = vec![FileRecord::new("a.js", "")];
    let mut stages = Vec::new();
    analyze_files_observed(&files, &config(), &mut |stage| stages.push(stage)).unwrap();
    assert_eq!(
        stages,
        vec![Stage::Extract, Stage::Graph, Stage::Cycles, Stage::Metrics]
    );
}

#[test]
fn dependency_nodes_carry_file_kind_and_fanout() {
    let files = vec![
        FileRecord::new("a.js", "import b from \"./b.js\";\nimport c from \"./c.js\";\n"),
        FileRecord::new("b.js", ""),
        FileRecord::new("c.js", ""),
    ];
    let report = analyze_files(&files, &config()).unwrap();

    let a = report
        .node_metrics
        .iter()
        .find(|m| m.id == "a.js")
        .unwrap();
    assert_eq!(a.connections.outgoing, 2);
    assert_eq!(a.connections.incoming, 0);
    // Files all share one kind, so every internal edge is cohesive.
    assert_eq!(report.metrics.cohesion, 1.0);
    assert_eq!(report.metrics.coupling, 0.0);
}

#[test]
fn single_file_report_extracts_without_building_a_graph() {
    let file = FileRecord::new(
        "src/entry.js",
        "import a from \"./a\";\nconst b = require(\"b-lib\");\n",
    );
    let report = analyze_single_file(&file);
    assert_eq!(report.path, "src/entry.js");
    assert_eq!(report.edges.len(), 2);
    assert_eq!(report.edges[0].resolved.as_deref(), Some("src/a"));
    assert_eq!(report.edges[1].resolved, None);
}

#[test]
fn snapshot_metrics_respect_caller_kinds() {
    let nodes = vec![
        GraphNode::new("gateway", NodeKind::Api),
        GraphNode::new("users", NodeKind::Service),
        GraphNode::new("orders", NodeKind::Service),
        GraphNode::new("store", NodeKind::Database),
    ];
    let edges = vec![
        GraphEdge::new("gateway", "users"),
        GraphEdge::new("users", "orders"),
        GraphEdge::new("orders", "store"),
    ];
    let report = calculate_metrics(&nodes, &edges, &config()).unwrap();

    assert_eq!(report.metrics.total_files, 4);
    assert_eq!(report.metrics.total_dependencies, 3);
    // One same-kind edge (users -> orders) out of three.
    assert!((report.metrics.cohesion - 1.0 / 3.0).abs() < 1e-9);
    assert!((report.metrics.coupling - 2.0 / 3.0).abs() < 1e-9);
    assert_eq!(report.metrics.circular_dependency_count, 0);
}

#[test]
fn snapshot_cycles_feed_the_composite_score() {
    let nodes = vec![
        GraphNode::new("a", NodeKind::Function),
        GraphNode::new("b", NodeKind::Function),
    ];
    let edges = vec![GraphEdge::new("a", "b"), GraphEdge::new("b", "a")];
    let report = calculate_metrics(&nodes, &edges, &config()).unwrap();
    assert_eq!(report.metrics.circular_dependency_count, 1);
    // 0.1*2 + 2*1 + 10*1 + 1.5*2 = 15.2
    assert!((report.metrics.complexity_score - 15.2).abs() < 1e-9);
}
