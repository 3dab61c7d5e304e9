use std::path::PathBuf;

use clap::{Parser, Subcommand};
use euler_circuit::{Config, TraversalOrder};

/// Eulerian circuits of undirected multigraphs
#[derive(Parser, Debug)]
#[command(name = "euler_circuit")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find an Eulerian circuit of a graph read from a file or stdin
    Solve(SolveArgs),
    /// Print a random Eulerian graph in the input format
    Generate(GenerateArgs),
}

#[derive(clap::Args, Debug)]
pub struct SolveArgs {
    /// Graph file: vertex count, edge count, then one vertex pair per edge.
    /// Reads stdin when omitted.
    pub file: Option<PathBuf>,

    /// Traversal used for the connectivity check
    #[arg(long, value_enum, default_value = "depth-first")]
    pub traversal: TraversalArg,

    /// Check the circuit against the graph before printing it
    #[arg(long, default_value_t = false)]
    pub verify: bool,

    /// Print only the diagnostic on failure, without offending vertices
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}

impl SolveArgs {
    pub fn to_config(&self) -> Config {
        Config {
            traversal: self.traversal.clone().into(),
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    /// Number of vertices
    #[arg(short = 'n', long, default_value_t = 10)]
    pub vertices: usize,

    /// Number of closed walks through vertex 0
    #[arg(short, long, default_value_t = 3)]
    pub walks: usize,

    /// Edges per walk
    #[arg(short = 'l', long, default_value_t = 6)]
    pub walk_len: usize,

    #[arg(short, long, default_value_t = 0)]
    pub seed: u64,
}

/// Command-line wrapper for TraversalOrder
#[derive(Debug, Clone, clap::ValueEnum)]
pub enum TraversalArg {
    #[value(name = "depth-first")]
    DepthFirst,
    #[value(name = "breadth-first")]
    BreadthFirst,
}

impl From<TraversalArg> for TraversalOrder {
    fn from(arg: TraversalArg) -> Self {
        match arg {
            TraversalArg::DepthFirst => TraversalOrder::DepthFirst,
            TraversalArg::BreadthFirst => TraversalOrder::BreadthFirst,
        }
    }
}
