//! `whenhub` CLI: evaluate event configurations and inspect the calendars.
//!
//! ## Usage
//!
//! ```sh
//! # Evaluate stored event configuration (stdin → stdout)
//! cat events.json | whenhub eval
//!
//! # Evaluate as of a fixed day, English countdown text, pretty JSON
//! whenhub eval -i events.json --today 2026-10-19 --locale en --pretty
//!
//! # List the catalog holidays with their dates for a year
//! whenhub holidays --year 2026
//!
//! # DST transitions of every region
//! whenhub regions --year 2026
//!
//! # Which DST region applies to a timezone
//! whenhub region-for Europe/Berlin
//! ```
//!
//! Set `RUST_LOG=debug` to trace individual evaluations on stderr.

use anyhow::{Context, Result};
use chrono::{Datelike, Local, Weekday};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use whenhub_engine::catalog::{self, HolidayCategory};
use whenhub_engine::dst::{self, Season};
use whenhub_engine::{evaluate, load_events, parse_date, CalendarDate, EventReport, Locale};

#[derive(Parser)]
#[command(
    name = "whenhub",
    version,
    about = "Countdowns, anniversaries, holidays and DST transitions"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Reference day (YYYY-MM-DD); defaults to the local date
    #[arg(long, global = true, value_parser = parse_day)]
    today: Option<CalendarDate>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate event configuration entries
    Eval {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Language of the countdown text
        #[arg(long, value_enum, default_value_t = LocaleArg::De)]
        locale: LocaleArg,
    },
    /// List catalog holidays and their dates
    Holidays {
        /// Year to resolve (defaults to the year of the reference day)
        #[arg(long)]
        year: Option<i32>,
        /// Only holidays of this category
        #[arg(long, value_enum)]
        category: Option<CategoryArg>,
    },
    /// List DST regions with their transitions
    Regions {
        /// Year to resolve (defaults to the year of the reference day)
        #[arg(long)]
        year: Option<i32>,
    },
    /// Show the DST region of an IANA timezone
    RegionFor {
        /// IANA timezone name, e.g. Europe/Berlin
        timezone: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum LocaleArg {
    De,
    En,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::De => Locale::German,
            LocaleArg::En => Locale::English,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum CategoryArg {
    Traditional,
    Calendar,
    Astronomical,
}

impl From<CategoryArg> for HolidayCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Traditional => HolidayCategory::Traditional,
            CategoryArg::Calendar => HolidayCategory::Calendar,
            CategoryArg::Astronomical => HolidayCategory::Astronomical,
        }
    }
}

// ---------------------------------------------------------------------------
// Output rows
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct NamedReport {
    name: String,
    #[serde(flatten)]
    report: EventReport,
}

#[derive(Serialize)]
struct HolidayRow {
    key: &'static str,
    name: &'static str,
    category: HolidayCategory,
    date: Option<CalendarDate>,
}

#[derive(Serialize)]
struct RegionRow {
    key: &'static str,
    name: &'static str,
    summer_month: u32,
    summer_weekday: Weekday,
    winter_month: u32,
    winter_weekday: Weekday,
    summer_time_starts: Option<CalendarDate>,
    summer_time_ends: Option<CalendarDate>,
    dst_active: bool,
}

#[derive(Serialize)]
struct RegionLookup {
    timezone: String,
    region: Option<&'static str>,
    region_name: Option<&'static str>,
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    debug!(%today, "reference day");

    match cli.command {
        Commands::Eval {
            input,
            output,
            locale,
        } => {
            let json = read_config(input.as_deref())?;
            let events = load_events(&json).context("Failed to load event configuration")?;
            info!(count = events.len(), "evaluating events");

            let locale = Locale::from(locale);
            let reports: Vec<NamedReport> = events
                .into_iter()
                .map(|event| NamedReport {
                    report: evaluate(&event.definition, today, locale),
                    name: event.name,
                })
                .collect();

            emit(output.as_deref(), &to_json(&reports, cli.pretty)?)
        }
        Commands::Holidays { year, category } => {
            let year = year.unwrap_or_else(|| today.year());
            let rows: Vec<HolidayRow> = catalog::holidays()
                .iter()
                .filter(|h| category.is_none_or(|c| h.category == HolidayCategory::from(c)))
                .map(|h| HolidayRow {
                    key: h.key,
                    name: h.name,
                    category: h.category,
                    date: h.rule.resolve(year),
                })
                .collect();
            emit(None, &to_json(&rows, cli.pretty)?)
        }
        Commands::Regions { year } => {
            let year = year.unwrap_or_else(|| today.year());
            let rows: Vec<RegionRow> = catalog::regions()
                .iter()
                .map(|r| RegionRow {
                    key: r.key,
                    name: r.name,
                    summer_month: r.rule.summer.month(),
                    summer_weekday: r.rule.summer.weekday(),
                    winter_month: r.rule.winter.month(),
                    winter_weekday: r.rule.winter.weekday(),
                    summer_time_starts: r.rule.transition(Season::Summer, year),
                    summer_time_ends: r.rule.transition(Season::Winter, year),
                    dst_active: dst::is_dst_active(&r.rule, today),
                })
                .collect();
            emit(None, &to_json(&rows, cli.pretty)?)
        }
        Commands::RegionFor { timezone } => {
            let region = catalog::region_for_timezone(&timezone)
                .with_context(|| format!("Failed to look up DST region for '{}'", timezone))?;
            let lookup = RegionLookup {
                region: region.map(|r| r.key),
                region_name: region.map(|r| r.name),
                timezone,
            };
            emit(None, &to_json(&lookup, cli.pretty)?)
        }
    }
}

/// Log to stderr; `RUST_LOG` overrides the default `warn` level.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn parse_day(value: &str) -> std::result::Result<CalendarDate, String> {
    parse_date(value).map_err(|e| e.to_string())
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let mut json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    json.push('\n');
    Ok(json)
}

/// Event configuration from `path`, or from stdin when no path is given.
fn read_config(path: Option<&Path>) -> Result<String> {
    let Some(path) = path else {
        return io::read_to_string(io::stdin().lock()).context("Failed to read from stdin");
    };
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Write a rendered document to `path`, or to stdout when no path is given.
fn emit(path: Option<&Path>, document: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, document)
            .with_context(|| format!("Failed to write file: {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(document.as_bytes())
                .and_then(|()| stdout.flush())
                .context("Failed to write to stdout")
        }
    }
}
