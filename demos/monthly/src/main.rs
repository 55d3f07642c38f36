//! senka: plan one month of sorties, expeditions, and shop purchases.
//!
//! Reads an action table (CSV, long or wide layout) and plan parameters
//! (JSON file plus command-line overrides), solves the allocation LP, and
//! prints the schedule and resource breakdown.  With no `--actions` file a
//! small built-in table is used.
//!
//! `RUST_LOG=info senka` shows solver progress.

mod report;

use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use sk_core::PlanParams;
use sk_input::{ActionTable, load_actions_csv, load_actions_reader, load_actions_wide_csv};
use sk_opt::{LogCapture, Optimizer};
use sk_output::{CsvWriter, PlanOutputObserver};

// ── Sample action table ───────────────────────────────────────────────────────

// Costs are per run: fuel, ammo, steel, bucket, readiness, seconds.
const SAMPLE_ACTIONS_CSV: &str = "\
name,fuel,ammo,steel,bucket,cond,time,reward,max_share\n\
1-5,120,180,0,0.5,0,420,1.4,1\n\
2-5,900,1100,600,4,0,1500,8.5,1\n\
5-4,1400,1800,1200,6,0,1800,13,0.6\n\
5-5,1900,2300,2100,9,0,2400,16.5,0.4\n\
";

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(name = "senka", version)]
#[command(about = "Monthly sortie, expedition, and shop planner")]
struct Args {
    /// Action table CSV. The built-in sample is used when omitted.
    #[arg(long)]
    actions: Option<PathBuf>,

    /// Read the action table in the column-per-action sheet layout.
    #[arg(long, requires = "actions")]
    wide: bool,

    /// JSON file with plan parameters; missing fields keep their defaults.
    #[arg(long)]
    params: Option<PathBuf>,

    #[arg(long)]
    active_hours: Option<f64>,

    #[arg(long)]
    inactive_hours: Option<f64>,

    #[arg(long)]
    rest_hours: Option<f64>,

    #[arg(long)]
    days: Option<u32>,

    /// Money budget for shop purchases.
    #[arg(long)]
    money: Option<f64>,

    /// Reward added on top of the optimised total.
    #[arg(long)]
    special: Option<f64>,

    #[arg(long)]
    fuel: Option<f64>,

    #[arg(long)]
    ammo: Option<f64>,

    #[arg(long)]
    steel: Option<f64>,

    #[arg(long)]
    bucket: Option<f64>,

    #[arg(long)]
    readiness: Option<f64>,

    /// Keep the four shortest expeditions out of inactive hours.
    #[arg(long)]
    no_short_inactive: bool,

    /// Directory for summary.csv, allocation.csv, and ledger.csv.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Write the whole plan as JSON to this file.
    #[arg(long)]
    json: Option<PathBuf>,

    /// Print the LP model and the solver log.
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn apply_overrides(&self, p: &mut PlanParams) {
        let set = |slot: &mut f64, value: Option<f64>| {
            if let Some(v) = value {
                *slot = v;
            }
        };
        set(&mut p.active_hours, self.active_hours);
        set(&mut p.inactive_hours, self.inactive_hours);
        set(&mut p.rest_hours, self.rest_hours);
        set(&mut p.max_money, self.money);
        set(&mut p.special, self.special);
        set(&mut p.fuel_offset, self.fuel);
        set(&mut p.ammo_offset, self.ammo);
        set(&mut p.steel_offset, self.steel);
        set(&mut p.bucket_offset, self.bucket);
        set(&mut p.readiness_offset, self.readiness);
        if let Some(days) = self.days {
            p.days = days;
        }
        if self.no_short_inactive {
            p.allow_short_inactive = false;
        }
    }
}

fn load_actions(args: &Args) -> Result<ActionTable> {
    let table = match &args.actions {
        Some(path) if args.wide => load_actions_wide_csv(path),
        Some(path) => load_actions_csv(path),
        None => load_actions_reader(Cursor::new(SAMPLE_ACTIONS_CSV)),
    };
    table.context("loading action table")
}

fn load_params(args: &Args) -> Result<PlanParams> {
    let mut params = match &args.params {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            serde_json::from_reader::<_, PlanParams>(BufReader::new(file))
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => PlanParams::default(),
    };
    args.apply_overrides(&mut params);
    Ok(params)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let actions = load_actions(&args)?;
    let params = load_params(&args)?;
    log::info!("{} actions, {} days", actions.len(), params.days);

    let optimizer = Optimizer::standard();
    let mut capture = LogCapture::new();

    let result = match &args.output {
        Some(dir) => {
            let writer = CsvWriter::new(dir)?;
            let mut observers = (capture, PlanOutputObserver::new(writer));
            let result = optimizer.solve_observed(&actions, &params, &mut observers);
            let (c, mut output) = observers;
            capture = c;
            if let Some(e) = output.take_error() {
                eprintln!("output error: {e}");
            }
            result
        }
        None => optimizer.solve_observed(&actions, &params, &mut capture),
    };

    if args.verbose {
        if let Some(text) = &capture.model_text {
            println!("{text}");
        }
        for line in &capture.lines {
            println!("solver: {line}");
        }
        println!();
    }

    let plan = result.context("no plan")?;
    report::print_plan(&plan, &params);

    if let Some(path) = &args.json {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &plan)?;
        println!("\nplan written to {}", path.display());
    }
    if let Some(dir) = &args.output {
        println!("CSV files written to {}", dir.display());
    }

    Ok(())
}
