//! Command-line entry point.
//!
//! Runs one policy (or all of them) over a process description file and
//! prints the Gantt chart, execution log, and statistics. `ALL` mode adds
//! a comparison table and SVG charts. Output can be teed to a log file.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{debug, info};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use schedsim::events::derive_events;
use schedsim::input;
use schedsim::metrics::RunMetrics;
use schedsim::models::Process;
use schedsim::policy::Policy;
use schedsim::report::{self, tee::Tee};
use schedsim::validation::validate_processes;

/// Quantum used for round-robin in ALL mode when none is given.
const DEFAULT_QUANTUM: i64 = 2;

#[derive(Debug, Parser)]
#[command(name = "schedsim", version, about = "CPU process scheduling simulator")]
struct Cli {
    /// Path to the process description file.
    #[arg(long)]
    input: PathBuf,

    /// Algorithm to run: FCFS, SJF, SRTF, RR, PRIO_NP, PRIO_P, or ALL.
    #[arg(long)]
    algo: String,

    /// Time quantum for RR.
    #[arg(long)]
    quantum: Option<i64>,

    /// Optional file that also receives all textual output.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .context("failed to initialize logging")?;

    let processes = input::parse_input(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    if processes.is_empty() {
        bail!("no processes found in {}", cli.input.display());
    }
    info!("parsed {} processes from {}", processes.len(), cli.input.display());

    if let Err(errors) = validate_processes(&processes) {
        for error in &errors {
            log::error!("{error}");
        }
        bail!("invalid process set in {}", cli.input.display());
    }

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(
            Tee::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout()),
    };

    if cli.algo == "ALL" {
        run_all(&mut out, &cli, &processes)?;
    } else {
        let policy: Policy = cli.algo.parse()?;
        run_policy(&mut out, policy, &processes, cli.quantum)?;
    }

    out.flush()?;
    Ok(())
}

/// Runs all six policies on independent copies and prints the comparison.
fn run_all(out: &mut dyn Write, cli: &Cli, processes: &[Process]) -> Result<()> {
    writeln!(out, "Running ALL algorithms on {}...\n", cli.input.display())?;

    let quantum = cli.quantum.unwrap_or(DEFAULT_QUANTUM);
    let mut results: Vec<(String, RunMetrics)> = Vec::new();

    for policy in Policy::ALL {
        let metrics = run_policy(out, policy, processes, Some(quantum))?;
        results.push((policy.name().to_string(), metrics));
        writeln!(out, "{}", "-".repeat(50))?;
    }

    writeln!(out)?;
    write!(out, "{}", report::comparison_table(&results))?;

    let graphs_dir = Path::new("graphs");
    report::charts::save_charts(&results, graphs_dir)
        .with_context(|| format!("failed to write charts to {}", graphs_dir.display()))?;
    writeln!(out, "\nGraphs saved to {}/", graphs_dir.display())?;
    Ok(())
}

/// Runs one policy on its own copy of the process set and prints the
/// Gantt chart, execution log, and statistics.
fn run_policy(
    out: &mut dyn Write,
    policy: Policy,
    processes: &[Process],
    quantum: Option<i64>,
) -> Result<RunMetrics> {
    writeln!(out, "--- Running {policy} ---")?;
    debug!("running {policy} over {} processes", processes.len());

    // Each run owns an independent copy so policies never interfere.
    let mut run_set = processes.to_vec();
    let timeline = policy.run(&mut run_set, quantum)?;

    writeln!(out, "\n{}\n", report::gantt::render(&timeline))?;
    let events = derive_events(&run_set, &timeline);
    write!(out, "\n{}", report::events_log(&events))?;

    let metrics = RunMetrics::compute(&run_set, &timeline)?;
    writeln!(out, "\nTotal Context Switches: {}", metrics.context_switches)?;
    write!(out, "\n{}", report::stats_table(&metrics))?;

    debug!("{policy} finished: makespan {}", timeline.makespan());
    Ok(metrics)
}
