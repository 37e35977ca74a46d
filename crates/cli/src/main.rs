//! LC-2K pipeline simulator CLI.
//!
//! This binary loads a machine-code file and runs it on the five-stage pipeline. It performs:
//! 1. **Load:** Prints the `instruction memory:` listing with disassembly.
//! 2. **Run:** Prints the machine state before every cycle (unless `--quiet`) until the
//!    `halt` instruction retires.
//! 3. **Report:** Prints the cycle count, the final state and, with `--stats`, run statistics.
//!
//! Diagnostics go to stderr through `tracing`; set `RUST_LOG=debug` to see stalls and
//! squashes as they happen.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pipesim_core::sim::dump::{ProgramListing, StateDump};
use pipesim_core::sim::loader;
use pipesim_core::{Config, SimError, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "pipesim",
    author,
    version,
    about = "Cycle-accurate LC-2K five-stage pipeline simulator",
    long_about = "Run an LC-2K machine-code file (one hexadecimal word per line) on a five-stage \
                  pipeline with forwarding, load-use stalls and branch squashing.\n\nExamples:\n  \
                  pipesim program.mc\n  pipesim program.mc --quiet --stats\n  \
                  pipesim program.mc --config sim.json"
)]
struct Cli {
    /// Machine-code file to run.
    program: PathBuf,

    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Suppress the per-cycle state dumps. The final state is always printed.
    #[arg(short, long)]
    quiet: bool,

    /// Abort if the machine has not halted after this many cycles.
    #[arg(long)]
    max_cycles: Option<u64>,

    /// Print run statistics after the final state.
    #[arg(long)]
    stats: bool,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Loads the configuration: the file named by `--config` or the defaults, with the
/// command-line overrides applied.
fn load_config(cli: &Cli) -> Result<Config, SimError> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    if cli.quiet {
        config.general.trace = false;
    }
    if cli.max_cycles.is_some() {
        config.general.max_cycles = cli.max_cycles;
    }
    config.validate()?;
    Ok(config)
}

/// Runs one program to completion, printing the classic report to stdout.
fn run(cli: &Cli) -> Result<(), SimError> {
    let config = load_config(cli)?;
    let program = loader::load_program(&cli.program)?;
    print!("{}", ProgramListing(program.words()));

    let mut sim = Simulator::new(&program, &config)?;
    let trace = config.general.trace;
    let cycles = sim.run_with(|cpu| {
        if trace {
            print!("{}", StateDump(cpu));
        }
    })?;

    println!("Machine halted");
    println!("Total of {cycles} cycles executed");
    println!("Final state of machine:");
    print!("{}", StateDump(&sim.cpu));

    if cli.stats {
        sim.stats.print();
    }
    Ok(())
}
