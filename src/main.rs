//! Command-line front end: reads a graph, prints its Eulerian circuit or the
//! reason it has none.
//!
//! Exit codes: 0 on success, 1 when the graph has no Eulerian circuit,
//! 2 when the input cannot be read or the circuit fails verification.

mod args;

use std::fs::File;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use clap::Parser;
use euler_circuit::conditions::{edge_components, odd_degree_vertices};
use euler_circuit::generate::{random_eulerian_graph, to_input_format};
use euler_circuit::{read_graph, verify_circuit, Diagnostic, EulerianCircuit};
use tracing::info;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

use args::{Args, Command, GenerateArgs, SolveArgs};

const EXIT_SUCCESS: u8 = 0;
const EXIT_NO_CIRCUIT: u8 = 1;
const EXIT_ERROR: u8 = 2;

type CliResult = Result<u8, Box<dyn std::error::Error>>;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S%.3f".into()))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    let code = match args.command {
        Command::Solve(solve_args) => match &solve_args.file {
            Some(path) => {
                info!("Loading graph: {}", path.display());
                match File::open(path) {
                    Ok(file) => solve(file, &solve_args, &mut stdout, &mut stderr),
                    Err(err) => report_error(&mut stderr, &err),
                }
            }
            None => solve(io::stdin().lock(), &solve_args, &mut stdout, &mut stderr),
        },
        Command::Generate(generate_args) => generate(&generate_args, &mut stdout)
            .unwrap_or_else(|err| report_error(&mut stderr, &*err)),
    };
    ExitCode::from(code)
}

fn report_error<E: Write>(err: &mut E, error: &dyn std::error::Error) -> u8 {
    // Nothing left to report to if stderr itself fails
    let _ = writeln!(err, "error: {error}");
    EXIT_ERROR
}

/// Reads a graph from `input` and writes the circuit to `out`, or the reason
/// there is none to `err`. Returns the process exit code.
fn solve<R: Read, W: Write, E: Write>(
    input: R,
    solve_args: &SolveArgs,
    out: &mut W,
    err: &mut E,
) -> u8 {
    try_solve(input, solve_args, out, err).unwrap_or_else(|error| report_error(err, &*error))
}

fn try_solve<R: Read, W: Write, E: Write>(
    input: R,
    solve_args: &SolveArgs,
    out: &mut W,
    err: &mut E,
) -> CliResult {
    let graph = read_graph(input)?;
    let result = EulerianCircuit::compute_with(&graph, &solve_args.to_config());

    match result.diagnostic() {
        Diagnostic::Success => {
            if solve_args.verify {
                verify_circuit(&graph, result.circuit())?;
                info!("circuit verified");
            }
            if !result.circuit().is_empty() {
                writeln!(out, "{result}")?;
            }
            Ok(EXIT_SUCCESS)
        }
        Diagnostic::Disconnected => {
            writeln!(err, "{}", result.diagnostic())?;
            if !solve_args.quiet {
                writeln!(err, "components with edges: {}", edge_components(&graph))?;
            }
            Ok(EXIT_NO_CIRCUIT)
        }
        Diagnostic::OddDegreeExists => {
            writeln!(err, "{}", result.diagnostic())?;
            if !solve_args.quiet {
                let odd = odd_degree_vertices(&graph)
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(" ");
                writeln!(err, "odd degree vertices: {odd}")?;
            }
            Ok(EXIT_NO_CIRCUIT)
        }
    }
}

fn generate<W: Write>(generate_args: &GenerateArgs, out: &mut W) -> CliResult {
    let graph = random_eulerian_graph(
        generate_args.vertices,
        generate_args.walks,
        generate_args.walk_len,
        generate_args.seed,
    )?;
    write!(out, "{}", to_input_format(&graph))?;
    Ok(EXIT_SUCCESS)
}
