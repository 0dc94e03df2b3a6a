use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use env_logger::Builder;
use log::{error, LevelFilter};
use serde::Serialize;

use cpu_schedule::config::SimConfig;
use cpu_schedule::input;
use cpu_schedule::models::{Process, Schedule};
use cpu_schedule::report;
use cpu_schedule::scheduler::{PolicyKind, Simulator, Summary};
use cpu_schedule::workload::{self, BernoulliSpec};
use cpu_schedule::{Result, SimError};

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
enum PolicyArg {
    /// Every policy, in report order
    All,
    /// First-come, first-serve
    Fcfs,
    /// Non-preemptive shortest-job-first
    Sjf,
    /// Shortest-job-first with priority tie-breaking
    Priority,
    /// Round-robin
    Rr,
}

impl PolicyArg {
    fn kind(self) -> Option<PolicyKind> {
        match self {
            Self::All => None,
            Self::Fcfs => Some(PolicyKind::Fcfs),
            Self::Sjf => Some(PolicyKind::Sjf),
            Self::Priority => Some(PolicyKind::PrioritySjf),
            Self::Rr => Some(PolicyKind::RoundRobin),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "cpu-schedule")]
#[command(about = "Simulate classical CPU scheduling policies", long_about = None)]
struct Args {
    /// Process file with `id,burst,arrival[,priority]` rows (stdin if omitted)
    file: Option<PathBuf>,

    /// Policy to run
    #[arg(short, long, value_enum, default_value_t = PolicyArg::All)]
    policy: PolicyArg,

    /// Round-robin time quantum
    #[arg(short, long)]
    quantum: Option<i64>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Generate a random workload over this many ticks instead of reading input
    #[arg(long, value_name = "TICKS", conflicts_with = "file")]
    random: Option<i64>,

    /// Seed for --random
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Emit JSON instead of text
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Run each policy on its own thread
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Debug logging
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

#[derive(Serialize)]
struct PolicyResult<'a> {
    title: &'a str,
    schedule: &'a Schedule,
    summary: Option<Summary>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut logger = Builder::from_default_env();
    if args.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("cpu-schedule: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = build_config(args)?;
    let processes = load(args)?;
    let sim = Simulator::new(config)?;

    let schedules = if args.parallel {
        sim.run_all_parallel(&processes)?
    } else {
        sim.run_all(&processes)?
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if args.json {
        write_json(&mut out, &schedules)?;
    } else {
        for schedule in &schedules {
            report::render(&mut out, title_of(schedule), schedule)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn build_config(args: &Args) -> Result<SimConfig> {
    let mut config = match &args.config {
        Some(path) => SimConfig::from_file(path)?,
        None => SimConfig::default(),
    };
    if let Some(quantum) = args.quantum {
        config = config.with_quantum(quantum);
    }
    if let Some(kind) = args.policy.kind() {
        config = config.with_policies([kind]);
    }
    Ok(config)
}

fn load(args: &Args) -> Result<Vec<Process>> {
    if let Some(ticks) = args.random {
        if ticks < 0 {
            return Err(SimError::config(format!("--random must be >= 0, got {ticks}")));
        }
        return Ok(workload::bernoulli(&BernoulliSpec::new(ticks), args.seed));
    }
    match &args.file {
        Some(path) => input::load_file(path),
        None => input::load_processes(io::stdin().lock()),
    }
}

fn title_of(schedule: &Schedule) -> &str {
    PolicyKind::from_name(&schedule.policy).map_or(schedule.policy.as_str(), |kind| kind.title())
}

fn write_json<W: Write>(out: &mut W, schedules: &[Schedule]) -> Result<()> {
    let results: Vec<PolicyResult<'_>> = schedules
        .iter()
        .map(|schedule| PolicyResult {
            title: title_of(schedule),
            schedule,
            summary: Summary::calculate(schedule).ok(),
        })
        .collect();
    serde_json::to_writer_pretty(&mut *out, &results).map_err(io::Error::from)?;
    writeln!(out)?;
    Ok(())
}
