use clap::Parser;
use kairo::prelude::*;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;

/// Offline driver for the graph construction pipeline: normalizes a raw
/// generator response and instantiates it without any network dependency.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a file holding the raw generator response (reads stdin when omitted)
    response_path: Option<PathBuf>,

    /// Treat the payload as ad hoc nodes/edges and heal instead of strict instantiation
    #[arg(short = 'l', long)]
    loose: bool,

    /// Optional path to write the resulting graph JSON
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Print the catalog summary used for prompt construction and exit
    #[arg(long)]
    summary: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.summary {
        println!("{}", standard_catalog().summary());
        return;
    }

    let raw = read_response(cli.response_path.as_deref());

    let total_start = Instant::now();

    // --- 1. Normalization + graph construction ---
    let build_start = Instant::now();
    let graph = if cli.loose {
        build_loose(&raw)
    } else {
        let plan = kairo::normalize::normalize(&raw)
            .unwrap_or_else(|e| exit_with_error(&format!("Normalization failed: {}", e)));
        println!(
            "Normalized response: {} node plans, {} edge plans",
            plan.node_plan.len(),
            plan.edges.len()
        );
        if let Some(target_class) = &plan.target_class {
            println!("Target class: {}", target_class);
        }
        instantiate(standard_catalog(), &plan.node_plan, &plan.edges)
            .unwrap_or_else(|e| exit_with_error(&format!("Instantiation failed: {}", e)))
    };
    let build_duration = build_start.elapsed();

    println!(
        "Graph built: {} nodes, {} edges",
        graph.nodes.len(),
        graph.edges.len()
    );

    // --- 2. Output ---
    if let Some(out) = &cli.out {
        let json = serde_json::to_string_pretty(&graph)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize graph: {}", e)));
        fs::write(out, json).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to write '{}': {}", out.display(), e))
        });
        println!("Saved graph to {}", out.display());
    }

    println!("\n--- Performance Summary ---");
    println!("Normalize + Build:  {:?}", build_duration);
    println!("Total:              {:?}", total_start.elapsed());
}

/// Loose mode re-reads the payload as ad hoc nodes and edges and runs the
/// healing pipeline, reporting dropped edges.
fn build_loose(raw: &str) -> Graph {
    #[derive(serde::Deserialize)]
    struct LoosePayload {
        #[serde(default)]
        nodes: Vec<AdHocNode>,
        #[serde(default)]
        edges: Vec<AdHocEdge>,
    }

    let value = kairo::normalize::parse_json(raw)
        .unwrap_or_else(|e| exit_with_error(&format!("Normalization failed: {}", e)));
    let payload: LoosePayload = serde_json::from_value(value)
        .unwrap_or_else(|e| exit_with_error(&format!("Payload did not match loose schema: {}", e)));

    let (graph, report) = heal_graph(payload.nodes, payload.edges);
    println!(
        "Healing report: {} edges healed, {} dropped",
        report.healed, report.dropped
    );
    graph
}

fn read_response(path: Option<&std::path::Path>) -> String {
    match path {
        Some(path) => fs::read_to_string(path).unwrap_or_else(|e| {
            exit_with_error(&format!(
                "Failed to read response file '{}': {}",
                path.display(),
                e
            ))
        }),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to read stdin: {}", e)));
            buffer
        }
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
