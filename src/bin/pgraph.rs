//! CLI entry point for the `pgraph` demo tool.

use std::process;

use clap::{Parser, Subcommand};

use point_graph::cli::commands;
use point_graph::cli::DemoParams;
use point_graph::types::{
    DEFAULT_EDGE_ATTEMPTS, DEFAULT_MAX_WEIGHT, DEFAULT_MIN_WEIGHT, DEFAULT_POINT_COUNT,
};

#[derive(Parser)]
#[command(
    name = "pgraph",
    about = "point-graph CLI — populate and query an in-memory undirected multigraph"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Randomly populate a graph and print each point's neighbors
    Demo {
        /// Number of points to create
        #[arg(long, default_value_t = DEFAULT_POINT_COUNT)]
        points: usize,
        /// Number of random connection attempts
        #[arg(long, default_value_t = DEFAULT_EDGE_ATTEMPTS)]
        edges: usize,
        /// Smallest edge weight (inclusive)
        #[arg(long, default_value_t = DEFAULT_MIN_WEIGHT)]
        min_weight: u32,
        /// Largest edge weight (exclusive)
        #[arg(long, default_value_t = DEFAULT_MAX_WEIGHT)]
        max_weight: u32,
        /// Seed for a reproducible graph
        #[arg(long)]
        seed: Option<u64>,
        /// Remove this point (and its edges) before printing
        #[arg(long)]
        remove: Option<String>,
    },
    /// Build a graph from specs such as `A`, `A-B:10`
    Build {
        /// Points (`A`) and weighted edges (`A-B:10`)
        #[arg(required = true)]
        specs: Vec<String>,
        /// Remove this point (and its edges) before printing
        #[arg(long)]
        remove: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let result = match cli.command {
        Commands::Demo {
            points,
            edges,
            min_weight,
            max_weight,
            seed,
            remove,
        } => {
            let params = DemoParams {
                point_count: points,
                edge_attempts: edges,
                min_weight,
                max_weight,
                seed,
            };
            commands::cmd_demo(&params, remove.as_deref(), json)
        }
        Commands::Build { specs, remove } => commands::cmd_build(&specs, remove.as_deref(), json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
