use analytics::{ChartBounds, QueryOutcome, ReportEngine, SummaryStats};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Table};
use configuration::Config;
use core_types::{CoinId, QueryResult, Value};
use database::catalog::{self, ColumnKind, ColumnSpec};
use database::{MarketRepository, PRICE_TABLES, connect};
use std::collections::HashMap;
use std::path::PathBuf;

/// The main entry point for the marketscope dashboard CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Environment overrides (store path etc.) may live in a .env file.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Catalog => handle_catalog(),
        Commands::Run(args) => handle_run(args, &configuration::load_config()?).await?,
        Commands::Overview(args) => handle_overview(args, &configuration::load_config()?).await?,
        Commands::Analyze(args) => handle_analyze(args, &configuration::load_config()?).await?,
        Commands::Stats => handle_stats(&configuration::load_config()?).await?,
    }

    Ok(())
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Cross-market analysis over crypto, oil and stock index prices.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every query in the catalog.
    Catalog,
    /// Run one catalog query by id.
    Run(RunArgs),
    /// Cross-market overview: per-market averages and the daily snapshot.
    Overview(RangeArgs),
    /// Price statistics and series for a single coin.
    Analyze(AnalyzeArgs),
    /// Record counts of the three price tables.
    Stats,
}

#[derive(Parser)]
struct RunArgs {
    /// The catalog query id (see `catalog`).
    #[arg(long)]
    query: String,

    /// Query parameters as name=value pairs, repeatable.
    #[arg(long = "param", value_name = "NAME=VALUE")]
    params: Vec<String>,

    /// Write the result set to a CSV file.
    #[arg(long, value_name = "FILE")]
    export: Option<PathBuf>,
}

#[derive(Parser)]
struct RangeArgs {
    /// Start date (format: YYYY-MM-DD); defaults to the configured range.
    #[arg(long)]
    from: Option<NaiveDate>,

    /// End date (format: YYYY-MM-DD); defaults to the configured range.
    #[arg(long)]
    to: Option<NaiveDate>,

    /// Write the snapshot to a CSV file.
    #[arg(long, value_name = "FILE")]
    export: Option<PathBuf>,
}

#[derive(Parser)]
struct AnalyzeArgs {
    /// The coin to analyze (bitcoin, ethereum or tether).
    #[arg(long)]
    coin: String,

    /// Start date (format: YYYY-MM-DD); defaults to the configured range.
    #[arg(long)]
    from: Option<NaiveDate>,

    /// End date (format: YYYY-MM-DD); defaults to the configured range.
    #[arg(long)]
    to: Option<NaiveDate>,

    /// Write the price series to a CSV file.
    #[arg(long, value_name = "FILE")]
    export: Option<PathBuf>,
}

// ==============================================================================
// Command Handlers
// ==============================================================================

fn handle_catalog() {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(["id", "title", "parameters"]);
    for spec in catalog::all() {
        let params = spec
            .params
            .iter()
            .map(|p| p.name)
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row([spec.id, spec.title, params.as_str()]);
    }
    println!("{table}");
}

async fn handle_run(args: RunArgs, config: &Config) -> anyhow::Result<()> {
    let mut params = HashMap::new();
    for pair in &args.params {
        let (name, value) = pair
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("parameter '{pair}' is not in name=value form"))?;
        params.insert(name.to_string(), value.to_string());
    }

    let spec = catalog::find(&args.query)
        .ok_or_else(|| anyhow::anyhow!("Unknown query id '{}'; see `catalog`", args.query))?;

    let engine = open_engine(config).await?;
    let outcome = engine.execute(spec.id, &params).await?;

    match outcome {
        QueryOutcome::NoData => println!("Query '{}' matched no rows for this filter.", spec.id),
        QueryOutcome::Data(result) => {
            println!("{} rows", result.row_count());
            println!("{}", render_table(&result, spec.columns));
            export_if_requested(&result, args.export.as_deref())?;
        }
    }

    close_engine(engine).await;
    Ok(())
}

async fn handle_overview(args: RangeArgs, config: &Config) -> anyhow::Result<()> {
    let (from, to) = range_or_default(args.from, args.to, config);
    let engine = open_engine(config).await?;

    // The four per-market average metrics of the overview page.
    let range = [
        ("from".to_string(), from.to_string()),
        ("to".to_string(), to.to_string()),
    ];
    let with_coin = |coin: &str| {
        let mut p: HashMap<String, String> = range.iter().cloned().collect();
        p.insert("coin".into(), coin.into());
        p
    };
    let with_ticker = |ticker: &str| {
        let mut p: HashMap<String, String> = range.iter().cloned().collect();
        p.insert("ticker".into(), ticker.into());
        p
    };

    let metrics = [
        ("Bitcoin avg ($)", single_value(&engine, "coin-average-price", &with_coin("bitcoin")).await?),
        ("Oil avg ($)", single_value(&engine, "oil-average-price", &range.iter().cloned().collect()).await?),
        ("S&P 500 avg ($)", single_value(&engine, "index-average-close", &with_ticker("^GSPC")).await?),
        ("NIFTY avg (Rs)", single_value(&engine, "index-average-close", &with_ticker("^NSEI")).await?),
    ];

    println!("Cross-market overview {from} .. {to}");
    for (label, value) in metrics {
        match value {
            Some(v) => println!("  {label}: {v}"),
            None => println!("  {label}: no data"),
        }
    }

    let snapshot_params = range.iter().cloned().collect();
    match engine.execute("market-snapshot", &snapshot_params).await? {
        QueryOutcome::NoData => {
            println!("No overlapping data available for all markets in this date range.")
        }
        QueryOutcome::Data(result) => {
            let spec = catalog::find("market-snapshot").expect("snapshot is in the catalog");
            println!("{}", render_table(&result, spec.columns));
            export_if_requested(&result, args.export.as_deref())?;
        }
    }

    close_engine(engine).await;
    Ok(())
}

async fn handle_analyze(args: AnalyzeArgs, config: &Config) -> anyhow::Result<()> {
    let coin: CoinId = args.coin.parse()?;
    let (from, to) = range_or_default(args.from, args.to, config);
    let engine = open_engine(config).await?;

    let params = HashMap::from([
        ("coin".to_string(), coin.to_string()),
        ("from".to_string(), from.to_string()),
        ("to".to_string(), to.to_string()),
    ]);

    match engine.execute("coin-price-series", &params).await? {
        QueryOutcome::NoData => {
            println!("No {coin} data available for {from} .. {to}.")
        }
        QueryOutcome::Data(result) => {
            if let Some(stats) = SummaryStats::of_column(&result, "price_usd") {
                println!("{coin} price statistics, {from} .. {to}");
                println!("  current: {:.2}", stats.last);
                println!("  average: {:.2}", stats.mean);
                println!("  minimum: {:.2}", stats.min);
                println!("  maximum: {:.2}", stats.max);
                println!("  days:    {}", stats.count);
            }
            if let Some(bounds) = ChartBounds::of_column(&result, "price_usd") {
                println!(
                    "  chart range: {:.2} .. {:.2}",
                    bounds.padded_min, bounds.padded_max
                );
            }

            let spec = catalog::find("coin-price-series").expect("series is in the catalog");
            println!("{}", render_table(&result, spec.columns));
            export_if_requested(&result, args.export.as_deref())?;
        }
    }

    close_engine(engine).await;
    Ok(())
}

async fn handle_stats(config: &Config) -> anyhow::Result<()> {
    let engine = open_engine(config).await?;
    let repo = engine.repository();

    for table in PRICE_TABLES {
        match repo.count_rows(table).await {
            Ok(count) => println!("{table}: {count} records"),
            Err(e) => eprintln!("{table}: unavailable ({e})"),
        }
    }

    close_engine(engine).await;
    Ok(())
}

// ==============================================================================
// Helpers
// ==============================================================================

async fn open_engine(config: &Config) -> anyhow::Result<ReportEngine> {
    let pool = connect(&config.store.path).await?;
    Ok(ReportEngine::new(MarketRepository::new(pool)))
}

/// Closes the store pool deterministically instead of relying on drop order.
async fn close_engine(engine: ReportEngine) {
    engine.repository().close().await;
}

fn range_or_default(
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    config: &Config,
) -> (NaiveDate, NaiveDate) {
    (
        from.unwrap_or(config.analysis.start_date),
        to.unwrap_or(config.analysis.end_date),
    )
}

/// Runs a single-cell aggregate query; `None` when the aggregate is absent.
async fn single_value(
    engine: &ReportEngine,
    query_id: &str,
    params: &HashMap<String, String>,
) -> anyhow::Result<Option<Value>> {
    let outcome = engine.execute(query_id, params).await?;
    Ok(outcome.into_result().and_then(|result| {
        result
            .rows
            .first()
            .and_then(|row| row.first())
            .filter(|value| !value.is_null())
            .cloned()
    }))
}

fn render_table(result: &QueryResult, columns: &[ColumnSpec]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(result.columns.clone());
    for row in &result.rows {
        table.add_row(row.iter().zip(columns).map(|(value, column)| {
            let cell = Cell::new(value.to_string());
            match column.kind {
                ColumnKind::Price | ColumnKind::Integer | ColumnKind::Percent => {
                    cell.set_alignment(CellAlignment::Right)
                }
                ColumnKind::Date | ColumnKind::Text => cell,
            }
        }));
    }
    table
}

fn export_if_requested(result: &QueryResult, path: Option<&std::path::Path>) -> anyhow::Result<()> {
    if let Some(path) = path {
        let bytes = exporter::to_csv(result)?;
        std::fs::write(path, bytes)?;
        println!("Exported {} rows to {}", result.row_count(), path.display());
    }
    Ok(())
}
