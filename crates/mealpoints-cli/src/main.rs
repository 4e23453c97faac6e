//! Terminal front-end for the mealpoints reporting engine.
//!
//! Loads an account snapshot from disk, reads "today" and the local offset
//! once, and hands everything to the engine; all rendering happens here.

mod render;

use std::{env, path::PathBuf, process, sync::Once};

use chrono::Local;
use colored::Colorize;

use mealpoints_core::{AggregationService, AxisService, PrefixClassifier, ReportService};
use mealpoints_domain::{AccountSnapshot, BudgetLimit, LedgerEntry};
use mealpoints_storage_json::JsonSnapshotStore;

const DEFAULT_TREND_DAYS: u32 = 30;
const DEFAULT_SNAPSHOT_NAME: &str = "snapshot";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("mealpoints=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
        tracing::info!("mealpoints tracing initialized.");
    });
}

fn main() {
    init_tracing();
    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(message) = run(&args) {
        eprintln!("{} {}", "[x]".red().bold(), message.red());
        process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), String> {
    match args.first().map(String::as_str) {
        Some("trend") => trend(&args[1..]),
        Some("budget") => budget(&args[1..]),
        Some("--help") | Some("-h") | None => {
            print_usage();
            Ok(())
        }
        Some(other) => Err(format!("unknown command `{other}` (try `mealpoints --help`)")),
    }
}

fn print_usage() {
    println!("{}", "mealpoints".red().bold());
    println!("Campus points spend reports.\n");
    println!("USAGE:");
    println!("  mealpoints trend  [--days N] [--snapshot PATH]");
    println!("  mealpoints budget [--snapshot PATH]");
    println!("\nOPTIONS:");
    println!("  --days N         trailing window for the trend view (default {DEFAULT_TREND_DAYS})");
    println!("  --snapshot PATH  snapshot file to report over");
}

struct CliArgs {
    snapshot: Option<PathBuf>,
    days: Option<u32>,
}

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut parsed = CliArgs {
        snapshot: None,
        days: None,
    };
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--snapshot" => {
                let path = iter
                    .next()
                    .ok_or_else(|| "--snapshot requires a path".to_string())?;
                parsed.snapshot = Some(PathBuf::from(path));
            }
            "--days" => {
                let raw = iter
                    .next()
                    .ok_or_else(|| "--days requires a number".to_string())?;
                let days = raw
                    .parse()
                    .map_err(|_| format!("invalid day count `{raw}`"))?;
                parsed.days = Some(days);
            }
            other => return Err(format!("unknown option `{other}`")),
        }
    }
    Ok(parsed)
}

fn load_snapshot(path_override: Option<&PathBuf>) -> Result<AccountSnapshot, String> {
    let loaded = match path_override {
        Some(path) => JsonSnapshotStore::load_path(path),
        None => default_store()?.load(DEFAULT_SNAPSHOT_NAME),
    };
    loaded.map_err(|err| format!("couldn't load report data: {err}"))
}

fn default_store() -> Result<JsonSnapshotStore, String> {
    let root = dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mealpoints");
    JsonSnapshotStore::new(root).map_err(|err| format!("couldn't open snapshot store: {err}"))
}

fn trend(args: &[String]) -> Result<(), String> {
    let parsed = parse_args(args)?;
    let snapshot = load_snapshot(parsed.snapshot.as_ref())?;

    let now = Local::now();
    let report = ReportService::trend_report(
        &snapshot.balances,
        &snapshot.entries,
        parsed.days.unwrap_or(DEFAULT_TREND_DAYS),
        now.date_naive(),
        *now.offset(),
    )
    .map_err(|err| err.to_string())?;

    render::trend(&report);
    Ok(())
}

fn budget(args: &[String]) -> Result<(), String> {
    let parsed = parse_args(args)?;
    if parsed.days.is_some() {
        return Err("--days only applies to the trend view".to_string());
    }
    let snapshot = load_snapshot(parsed.snapshot.as_ref())?;

    let now = Local::now();
    let tz = *now.offset();
    let (week_start, week_end) = AxisService::week_bounds(now.date_naive());

    // The engine expects caller-filtered inputs: entries inside the rendered
    // week, and only budget limits whose date range overlaps it.
    let entries: Vec<LedgerEntry> = snapshot
        .entries
        .iter()
        .filter(|entry| {
            let day = AggregationService::local_day(entry, tz);
            day >= week_start && day <= week_end
        })
        .cloned()
        .collect();
    let mut candidates: Vec<BudgetLimit> = snapshot
        .budgets
        .iter()
        .filter(|limit| limit.overlaps(week_start, week_end))
        .cloned()
        .collect();
    candidates.sort_by_key(|limit| limit.start_date);

    let report = ReportService::budget_report(
        &snapshot.balances,
        &entries,
        &candidates,
        week_start,
        week_end,
        tz,
        &PrefixClassifier,
    )
    .map_err(|err| err.to_string())?;

    render::budget(&report);
    Ok(())
}
