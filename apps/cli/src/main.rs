//! Runwise CLI - runs one forecast scenario and prints or exports the
//! result. The engine stays pure; everything interactive lives here.

use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::Context;
use chrono::{Datelike, Local, NaiveDate};
use clap::{Parser, ValueEnum};
use runwise_core::{simulate, ForecastRun, KpiSummary, Scenario};
use runwise_export::{write_csv, write_xlsx};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Preset {
    Base,
    Pessimistic,
    Ambitious,
}

impl Preset {
    fn scenario(self) -> Scenario {
        match self {
            Preset::Base => Scenario::base(),
            Preset::Pessimistic => Scenario::pessimistic(),
            Preset::Ambitious => Scenario::ambitious(),
        }
    }
}

/// Deterministic monthly financial forecast for a subscription business.
#[derive(Debug, Parser)]
#[command(name = "runwise", version, about)]
struct Cli {
    /// Scenario preset to start from
    #[arg(long, value_enum, default_value_t = Preset::Base)]
    preset: Preset,

    /// Override the scenario label
    #[arg(long)]
    name: Option<String>,

    /// Monthly net MRR growth rate before churn (fraction, e.g. 0.05)
    #[arg(long)]
    growth: Option<f64>,

    /// Monthly churn rate (fraction)
    #[arg(long)]
    churn: Option<f64>,

    /// COGS as a fraction of revenue
    #[arg(long)]
    cogs_pct: Option<f64>,

    /// Fixed monthly R&D expense
    #[arg(long)]
    opex_rnd: Option<f64>,

    /// Fixed monthly sales & marketing expense
    #[arg(long)]
    opex_sm: Option<f64>,

    /// Fixed monthly general & administrative expense
    #[arg(long)]
    opex_ga: Option<f64>,

    /// Number of months to project
    #[arg(long, default_value_t = 36)]
    months: u32,

    /// First month of the forecast (defaults to the current month)
    #[arg(long)]
    start: Option<NaiveDate>,

    /// Recurring revenue at the start month
    #[arg(long, default_value_t = 50_000.0)]
    mrr: f64,

    /// Cash on hand before the first month's operations
    #[arg(long, default_value_t = 100_000.0)]
    cash: f64,

    /// Write the monthly table as CSV to this path
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write the monthly table as a spreadsheet to this path
    #[arg(long)]
    xlsx: Option<PathBuf>,

    /// Print the full monthly table to stdout
    #[arg(long)]
    table: bool,
}

impl Cli {
    fn scenario(&self) -> Scenario {
        let mut scenario = self.preset.scenario();
        if let Some(name) = &self.name {
            scenario.name = name.clone();
        }
        if let Some(growth) = self.growth {
            scenario.growth = growth;
        }
        if let Some(churn) = self.churn {
            scenario.churn = churn;
        }
        if let Some(cogs_pct) = self.cogs_pct {
            scenario.cogs_pct = cogs_pct;
        }
        if let Some(opex_rnd) = self.opex_rnd {
            scenario.opex_rnd = opex_rnd;
        }
        if let Some(opex_sm) = self.opex_sm {
            scenario.opex_sm = opex_sm;
        }
        if let Some(opex_ga) = self.opex_ga {
            scenario.opex_ga = opex_ga;
        }
        scenario
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();
}

fn current_month_start() -> NaiveDate {
    let today = Local::now().date_naive();
    NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap_or(today)
}

fn print_summary(run: &ForecastRun) {
    let summary = KpiSummary::from_run(run);

    println!("Scenario:        {}", run.metadata.scenario.name);
    if let Some(first) = run.records.first() {
        println!("Horizon:         {} months from {}", run.months(), first.date);
    }
    match summary.arr_month_12 {
        Some(arr) => println!("ARR at month 12: {arr:.0}"),
        None => println!("ARR at month 12: n/a (fewer than 12 months)"),
    }
    println!("Runway (months): {}", summary.runway);
    if let Some(ebitda) = summary.first_month_ebitda {
        println!("EBITDA month 1:  {ebitda:.0}");
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let scenario = cli.scenario();
    let start = cli.start.unwrap_or_else(current_month_start);

    let run = simulate(start, cli.months, cli.mrr, cli.cash, &scenario)
        .context("forecast failed")?;

    print_summary(&run);

    if cli.table {
        println!();
        write_csv(&run, io::stdout().lock()).context("printing monthly table")?;
    }

    if let Some(path) = &cli.csv {
        let file = File::create(path)
            .with_context(|| format!("creating {}", path.display()))?;
        write_csv(&run, file)
            .with_context(|| format!("writing CSV to {}", path.display()))?;
        tracing::info!("wrote CSV to {}", path.display());
    }

    if let Some(path) = &cli.xlsx {
        write_xlsx(&run, path)
            .with_context(|| format!("writing spreadsheet to {}", path.display()))?;
        tracing::info!("wrote spreadsheet to {}", path.display());
    }

    Ok(())
}
