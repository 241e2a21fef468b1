use algo_trials::{
    bellman_ford, dijkstra, hash_values, run_search_trials, run_sort_comparison, run_sort_trials,
    Graph, PathOutcome, QuickStrategy, SearchKind, SortKind, Topology, TrialOutcome, TrialReport,
};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // A fixed seed keeps the demo output stable across runs; swap in
    // rand::thread_rng() for fresh instances every time.
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(2024);

    hashing_demo();
    search_demo(&mut rng)?;
    sort_demo(&mut rng)?;
    comparison_demo(&mut rng)?;
    dijkstra_demo(&mut rng)?;
    bellman_ford_demo(&mut rng)?;

    Ok(())
}

fn hashing_demo() {
    println!("Hashing");
    println!("=======");
    for (value, hashed) in hash_values("uaa, algoritmos, estructuras de datos") {
        println!("  {value} -> {hashed}");
    }
    println!();
}

fn search_demo(rng: &mut Xoshiro256PlusPlus) -> anyhow::Result<()> {
    println!("Search trials (values 1..=2000)");
    println!("===============================");
    for kind in [
        SearchKind::Linear,
        SearchKind::BinaryIterative,
        SearchKind::BinaryRecursive,
    ] {
        let report = run_search_trials(kind, 1, 2000, rng)?;
        println!("{}:", kind.label());
        println!("  {:<6} {:<8} {:<8} {:<10} {:<10}", "trial", "size", "target", "time", "position");
        for row in report.rows() {
            let TrialOutcome::Search { target, position, .. } = row.outcome else {
                continue;
            };
            let position = position.map_or("-1".to_string(), |p| p.to_string());
            println!(
                "  {:<6} {:<8} {:<8} {:<10} {:<10}",
                row.trial,
                row.size,
                target,
                format_ms(row.timings[0]),
                position
            );
        }
        println!();
    }
    Ok(())
}

fn sort_demo(rng: &mut Xoshiro256PlusPlus) -> anyhow::Result<()> {
    println!("Quick sort trials (sizes 250 * trial)");
    println!("=====================================");
    let report = run_sort_trials(SortKind::Quick(QuickStrategy::InPlace), 250, rng)?;
    print_timing_table(&report);
    println!();
    Ok(())
}

fn comparison_demo(rng: &mut Xoshiro256PlusPlus) -> anyhow::Result<()> {
    println!("Sort comparison (sizes and values 100..=2000)");
    println!("=============================================");
    let report = run_sort_comparison(100, 2000, rng)?;
    print_timing_table(&report);

    // Chart feed, one series per algorithm.
    for (label, times) in report.series() {
        let formatted: Vec<String> = times.iter().map(|ms| format!("{ms:.2}")).collect();
        println!("  {label}: [{}] ms", formatted.join(", "));
    }

    println!("{}", serde_json::to_string(&report)?);
    println!();
    Ok(())
}

fn dijkstra_demo(rng: &mut Xoshiro256PlusPlus) -> anyhow::Result<()> {
    println!("Dijkstra on a random undirected graph");
    println!("=====================================");
    let graph = Graph::random(6, 1, 9, Topology::Undirected, rng)?;
    let matrix = graph.adjacency_matrix();
    print_matrix(&matrix);

    let tree = dijkstra(&matrix, 1)?;
    report_route(tree.path_to(6)?, 1, 6);
    println!();
    Ok(())
}

fn bellman_ford_demo(rng: &mut Xoshiro256PlusPlus) -> anyhow::Result<()> {
    println!("Bellman-Ford on a random directed graph");
    println!("=======================================");
    let graph = Graph::random(6, -3, 9, Topology::Directed, rng)?;
    print_matrix(&graph.adjacency_matrix());

    let run = bellman_ford(&graph, 1)?;
    if run.negative_cycle {
        println!("  warning: negative-weight cycle; results may be unreliable");
    }
    report_route(run.tree.path_to(6)?, 1, 6);
    println!();
    Ok(())
}

fn report_route(outcome: PathOutcome, start: usize, end: usize) {
    match outcome {
        PathOutcome::Route { nodes, cost } => {
            let steps: Vec<String> = nodes.iter().map(|n| n.to_string()).collect();
            println!(
                "  shortest path {start} -> {end}: {} (total weight {cost})",
                steps.join(" -> ")
            );
        }
        PathOutcome::Unreachable => println!("  no path exists from {start} to {end}"),
    }
}

fn print_timing_table(report: &TrialReport) {
    print!("  {:<6} {:<8}", "trial", "size");
    for label in report.labels() {
        print!(" {label:<24}");
    }
    println!();
    for row in report.rows() {
        print!("  {:<6} {:<8}", row.trial, row.size);
        for elapsed in &row.timings {
            print!(" {:<24}", format_ms(*elapsed));
        }
        println!();
    }
}

fn print_matrix(matrix: &algo_trials::AdjacencyMatrix) {
    for row in matrix.rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| cell.map_or("∞".to_string(), |w| w.to_string()))
            .collect();
        println!("  [{}]", cells.join(", "));
    }
}

fn format_ms(elapsed: std::time::Duration) -> String {
    format!("{:.2} ms", elapsed.as_secs_f64() * 1_000.0)
}
