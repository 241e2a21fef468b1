use algo_trials::{
    bellman_ford, dijkstra, path_edges, run_search_trials, run_sort_comparison, run_sort_trials,
    string_hash, Graph, PathOutcome, QuickStrategy, SearchKind, SortKind, Topology, TrialReport,
    TRIAL_COUNT,
};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

fn rng(seed: u64) -> Xoshiro256PlusPlus {
    Xoshiro256PlusPlus::seed_from_u64(seed)
}

/// The fixture graph: 1-2 = 1, 2-3 = 2, 1-3 = 5, 3-4 = 1, with both
/// directions spelled out so the matrix and the edge list agree.
fn fixture() -> Graph {
    let mut graph = Graph::new(4, Topology::Directed);
    for (a, b, w) in [(1, 2, 1), (2, 3, 2), (1, 3, 5), (3, 4, 1)] {
        graph.add_edge(a, b, w);
        graph.add_edge(b, a, w);
    }
    graph
}

#[test]
fn search_pages_produce_ten_rows_each() {
    for kind in [
        SearchKind::Linear,
        SearchKind::BinaryIterative,
        SearchKind::BinaryRecursive,
    ] {
        let report = run_search_trials(kind, 1, 500, &mut rng(7)).unwrap();
        assert_eq!(report.rows().len(), TRIAL_COUNT);
        assert_eq!(report.labels(), [kind.label().to_string()]);

        let series = report.series();
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].1.len(), TRIAL_COUNT);
    }
}

#[test]
fn sort_page_scales_sizes_linearly() {
    let report = run_sort_trials(SortKind::Quick(QuickStrategy::InPlace), 20, &mut rng(8)).unwrap();
    let sizes: Vec<usize> = report.rows().iter().map(|row| row.size).collect();
    let expected: Vec<usize> = (1..=TRIAL_COUNT).map(|trial| 20 * trial).collect();
    assert_eq!(sizes, expected);
}

#[test]
fn comparison_page_times_all_five_algorithms() {
    let report = run_sort_comparison(50, 400, &mut rng(9)).unwrap();
    assert_eq!(
        report.labels(),
        [
            "insertion sort",
            "bubble sort",
            "selection sort",
            "quick sort (partitioned)",
            "merge sort",
        ]
    );
    for row in report.rows() {
        assert_eq!(row.timings.len(), 5);
    }
}

#[test]
fn shortest_path_pages_agree_on_non_negative_graphs() {
    let graph = fixture();
    let tree = dijkstra(&graph.adjacency_matrix(), 1).unwrap();
    let run = bellman_ford(&graph, 1).unwrap();

    assert!(!run.negative_cycle);
    for node in 1..=4 {
        assert_eq!(tree.distance_to(node), run.tree.distance_to(node));
    }

    let route = tree.path_to(4).unwrap();
    assert_eq!(
        route,
        PathOutcome::Route {
            nodes: vec![1, 2, 3, 4],
            cost: 4
        }
    );
    let PathOutcome::Route { nodes, .. } = route else {
        unreachable!();
    };
    assert_eq!(path_edges(&nodes), vec![(1, 2), (2, 3), (3, 4)]);
}

#[test]
fn generated_graphs_always_connect_first_to_last() {
    // The spanning chain guarantees node n is reachable from node 1.
    for (seed, topology) in [(21, Topology::Undirected), (22, Topology::Directed)] {
        let graph = Graph::random(9, 1, 9, topology, &mut rng(seed)).unwrap();
        let tree = dijkstra(&graph.adjacency_matrix(), 1).unwrap();
        assert!(tree.path_to(9).unwrap().is_route());
    }
}

#[test]
fn negative_cycle_is_a_warning_not_an_error() {
    let mut graph = Graph::new(4, Topology::Directed);
    graph.add_edge(1, 2, 2);
    graph.add_edge(2, 3, -3);
    graph.add_edge(3, 2, -3);
    graph.add_edge(2, 4, 5);

    let run = bellman_ford(&graph, 1).unwrap();
    assert!(run.negative_cycle);
    // Best-effort distances still come back.
    assert!(run.tree.distance_to(2).is_some());
}

#[test]
fn hash_is_deterministic_across_calls() {
    assert_eq!(string_hash("abc"), string_hash("abc"));
    assert_eq!(string_hash(""), 0);
    assert_ne!(string_hash("abc"), string_hash("abd"));
}

#[test]
fn clear_after_any_sequence_matches_a_fresh_report() {
    let mut report = run_sort_comparison(10, 300, &mut rng(30)).unwrap();
    let mut second = run_search_trials(SearchKind::Linear, 1, 100, &mut rng(31)).unwrap();

    report.clear();
    second.clear();

    assert_eq!(report, TrialReport::new());
    assert_eq!(second, TrialReport::new());
    assert!(report.series().is_empty());
}
