mod render;

use agenda_core::{Config, Direction, Entry, Labels, Scheduler, TimeSpan};
use anyhow::{Context, Result, anyhow};
use chrono::{Local, NaiveDate, NaiveTime};
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// agenda — week/month calendar in the terminal
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// View mode: "week" or "month".
    #[arg(long, short, default_value = "month")]
    mode: String,
    /// Anchor date as YYYY-MM-DD. Defaults to today.
    #[arg(long, short)]
    date: Option<NaiveDate>,
    /// Page back this many steps before rendering.
    #[arg(long, default_value_t = 0)]
    back: u32,
    /// Page forward this many steps before rendering.
    #[arg(long, default_value_t = 0)]
    forward: u32,
    /// Entry to place on the calendar, as `DATE,START,END,TITLE[,DESCRIPTION]`
    /// (e.g. `--entry 2024-02-14,12:00,13:00,Lunch`). Repeatable.
    #[arg(long = "entry")]
    entries: Vec<String>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("agenda: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let span: TimeSpan = cli.mode.parse()?;
    let anchor = cli.date.unwrap_or_else(|| Local::now().date_naive());
    let entries = cli
        .entries
        .iter()
        .map(|raw| parse_entry_arg(raw))
        .collect::<Result<Vec<Entry>>>()?;

    let config = Config::load()?;
    let labels = Labels::with_source(Box::new(config));
    let mut scheduler = Scheduler::with_labels(span, anchor, entries, labels);

    for _ in 0..cli.back {
        scheduler.navigate(Direction::Back);
    }
    for _ in 0..cli.forward {
        scheduler.navigate(Direction::Forward);
    }

    let day_names = scheduler.labels().day_names();
    let (previous, next) = scheduler.navigation_labels();
    print!(
        "{}",
        render::render_plan(scheduler.plan(), &day_names, &previous, &next)
    );
    Ok(())
}

/// Parses `DATE,START,END,TITLE[,DESCRIPTION]` into an [`Entry`].
fn parse_entry_arg(raw: &str) -> Result<Entry> {
    let mut parts = raw.splitn(5, ',');
    let date = parts
        .next()
        .ok_or_else(|| anyhow!("empty --entry value"))?
        .parse::<NaiveDate>()
        .with_context(|| format!("bad date in --entry {raw:?}"))?;
    let start = parse_time(parts.next(), raw)?;
    let end = parse_time(parts.next(), raw)?;
    let title = parts
        .next()
        .filter(|t| !t.is_empty())
        .ok_or_else(|| anyhow!("missing title in --entry {raw:?}"))?;
    let description = parts.next().unwrap_or("");
    Ok(Entry::new(date, start, end, title, description))
}

fn parse_time(part: Option<&str>, raw: &str) -> Result<NaiveTime> {
    let s = part.ok_or_else(|| anyhow!("missing time in --entry {raw:?}"))?;
    NaiveTime::parse_from_str(s, "%H:%M").with_context(|| format!("bad time in --entry {raw:?}"))
}

/// Initialize tracing based on CLI verbosity. `RUST_LOG` overrides the flag.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let default_filter = format!("agenda_core={level},agenda_cli={level}");
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
