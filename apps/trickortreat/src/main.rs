//! trickortreat — neighborhood candy-run simulator.
//!
//! Spawns one thread per trick-or-treating group plus a background refill
//! feed, reports neighborhood status once per second on stdout, and prints a
//! final tally after a cooperative shutdown.
//!
//! Diagnostics (departures, refills, thread lifecycle) go to stderr through
//! `tracing`; set `RUST_LOG` to control them.  Stdout carries only the
//! status reports.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tt_output::{ConsoleReporter, CsvReporter};
use tt_sim::{Scenario, SimBuilder, SimConfig, SimObserver, SimSnapshot};

// ── CLI ───────────────────────────────────────────────────────────────────────

/// Simulate trick-or-treating groups draining a neighborhood's candy while a
/// background feed refills it.
#[derive(Parser, Debug)]
#[command(name = "trickortreat", version, about)]
struct Cli {
    /// Scenario file: group count, 10 house lines, one line per group, then
    /// the refill schedule.
    scenario: PathBuf,

    /// Simulation length in whole seconds.
    duration: u64,

    /// Also export every snapshot as CSV into this directory.
    #[arg(long, value_name = "DIR")]
    csv_out: Option<PathBuf>,
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Console reporter on stdout, optionally teed into a CSV export.
struct AppObserver {
    console: ConsoleReporter<io::Stdout>,
    csv:     Option<CsvReporter>,
}

impl AppObserver {
    fn new(csv_dir: Option<&Path>) -> Result<Self> {
        let csv = match csv_dir {
            Some(dir) => {
                std::fs::create_dir_all(dir)
                    .with_context(|| format!("creating {}", dir.display()))?;
                Some(CsvReporter::new(dir)?)
            }
            None => None,
        };
        Ok(Self {
            console: ConsoleReporter::new(io::stdout()),
            csv,
        })
    }

    /// Flush the CSV files and surface any write error swallowed mid-run.
    fn finish(mut self) -> Result<()> {
        if let Some(csv) = &mut self.csv {
            csv.finish()?;
            if let Some(e) = csv.take_error() {
                return Err(e.into());
            }
        }
        if let Some(e) = self.console.take_error() {
            return Err(e.into());
        }
        Ok(())
    }
}

impl SimObserver for AppObserver {
    fn on_snapshot(&mut self, elapsed_secs: u64, snapshot: &SimSnapshot) {
        self.console.on_snapshot(elapsed_secs, snapshot);
        if let Some(csv) = &mut self.csv {
            csv.on_snapshot(elapsed_secs, snapshot);
        }
    }

    fn on_final(&mut self, elapsed_secs: u64, snapshot: &SimSnapshot) {
        self.console.on_final(elapsed_secs, snapshot);
        if let Some(csv) = &mut self.csv {
            csv.on_final(elapsed_secs, snapshot);
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() {
    // Every failure — usage included — reports to stderr and the process
    // still exits 0; the status reports are the only stdout output.
    if let Err(e) = run() {
        eprintln!("trickortreat: {e:#}");
    }
}

fn run() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // clap routes --help to stdout and usage errors to stderr.
            let _ = e.print();
            return Ok(());
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let (scenario, schedule) = Scenario::open(&cli.scenario)
        .with_context(|| format!("loading scenario {}", cli.scenario.display()))?;
    info!(
        groups = scenario.groups.len(),
        houses = scenario.houses.len(),
        duration_secs = cli.duration,
        "scenario loaded"
    );

    let sim = SimBuilder::new(
        SimConfig {
            duration_secs: cli.duration,
        },
        scenario,
    )
    .schedule(schedule)
    .build()?;

    let mut observer = AppObserver::new(cli.csv_out.as_deref())?;
    sim.run(&mut observer);
    observer.finish()
}
