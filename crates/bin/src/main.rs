//! Autosales CLI binary.
//!
//! Serves the automobile sales dashboard and prints its reports.

mod integration;

use autosales::charts::{ExportFormat, Exporter, ReportSummary};
use autosales::dashboard::config::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_TITLE};
use autosales::data::{DEFAULT_SOURCE_URL, DataSource};
use autosales::stats::{GroupedSeries, available_statistics};
use autosales::{DashboardConfig, DashboardServer, ReportKind, SalesTable, Statistic, run_report};
use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use integration::cache_manager;
use integration::data_pipeline::{LoadConfig, load_table, print_cache_info};
use std::process;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "autosales")]
#[command(about = "Automobile sales statistics dashboard", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where the sales data comes from.
#[derive(Args, Debug, Clone)]
struct SourceArgs {
    /// CSV path or URL
    #[arg(long, default_value = DEFAULT_SOURCE_URL)]
    source: String,

    /// Disable caching (always download fresh data)
    #[arg(long)]
    no_cache: bool,

    /// Force refresh cached data
    #[arg(long)]
    refresh: bool,
}

impl SourceArgs {
    const fn load_config(&self) -> LoadConfig {
        LoadConfig {
            use_cache: !self.no_cache,
            force_refresh: self.refresh,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the dashboard
    Serve {
        /// Address to bind
        #[arg(long, default_value = DEFAULT_HOST)]
        host: String,

        /// Port to bind
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print a report's tables
    Report {
        /// Report type (yearly or recession)
        kind: String,

        /// Year of a yearly report
        #[arg(long)]
        year: Option<i32>,

        /// Output format (text, markdown or json)
        #[arg(long, default_value = "text")]
        format: String,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Export the table behind one chart
    Export {
        /// Statistic name (see `autosales list`)
        statistic: String,

        /// Year of a per-year statistic
        #[arg(long)]
        year: Option<i32>,

        /// Output format (csv or json)
        #[arg(long, default_value = "csv")]
        format: String,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Show or clear the download cache
    Cache {
        /// Remove every cached download
        #[arg(long)]
        clear: bool,
    },

    /// List available statistics
    List,
}

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port, source } => {
            let table = load(&source).await?;
            let config = DashboardConfig {
                host,
                port,
                title: DEFAULT_TITLE.to_string(),
            };
            info!("Serving {} rows on http://{}", table.height(), config.address());
            DashboardServer::new(table, config).run().await?;
        }
        Commands::Report {
            kind,
            year,
            format,
            source,
        } => {
            let kind: ReportKind = kind.parse()?;
            let table = load(&source).await?;
            print_report(&table, kind, year, &format)?;
        }
        Commands::Export {
            statistic,
            year,
            format,
            source,
        } => {
            let statistic: Statistic = statistic.parse()?;
            let format: ExportFormat = format.parse()?;
            let table = load(&source).await?;
            let series = statistic.compute(&table, year)?;
            println!("{}", series.export_to_string(format)?);
        }
        Commands::Cache { clear } => {
            if clear {
                let removed = cache_manager::open_cache()?.clear()?;
                println!("Removed {} cached download(s)", removed);
            }
            println!("Cache:");
            print_cache_info();
        }
        Commands::List => list_statistics(),
    }

    Ok(())
}

async fn load(args: &SourceArgs) -> Result<SalesTable, Box<dyn std::error::Error>> {
    let source: DataSource = args.source.parse()?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message("Loading sales data...");

    match load_table(&source, args.load_config(), Some(&pb)).await {
        Ok(table) => {
            pb.finish_with_message(format!("Loaded {} rows", table.height()));
            Ok(table)
        }
        Err(e) => {
            pb.finish_with_message("Failed!");
            Err(e.into())
        }
    }
}

fn print_report(
    table: &SalesTable,
    kind: ReportKind,
    year: Option<i32>,
    format: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = run_report(table, kind, year)?;
    let summary = ReportSummary::new(&report);

    match format {
        "text" => println!("{}", summary.to_ascii_table()),
        "markdown" | "md" => println!("{}", summary.to_markdown()),
        "json" => {
            let series: Vec<GroupedSeries> = report.series().into_iter().cloned().collect();
            println!("{}", series.export_to_string(ExportFormat::PrettyJson)?);
        }
        other => return Err(format!("Unknown report format: {}", other).into()),
    }

    Ok(())
}

fn list_statistics() {
    for kind in ReportKind::all() {
        println!("\n{}", kind.label());
        println!("{}", "─".repeat(72));
        for info in available_statistics()
            .into_iter()
            .filter(|info| info.report == kind)
        {
            let year = if info.statistic.needs_year() {
                " (needs --year)"
            } else {
                ""
            };
            println!("  {:<34} {:<5} {}{}", info.name(), info.chart.name(), info.description, year);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rstest::rstest;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["autosales", "serve"]).unwrap();
        let Commands::Serve { host, port, source } = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(host, "127.0.0.1");
        assert_eq!(port, 8050);
        assert_eq!(source.source, DEFAULT_SOURCE_URL);
        assert!(source.load_config().use_cache);
    }

    #[test]
    fn test_source_flags() {
        let cli = Cli::try_parse_from([
            "autosales",
            "report",
            "yearly",
            "--year",
            "1991",
            "--source",
            "data.csv",
            "--no-cache",
            "--refresh",
        ])
        .unwrap();
        let Commands::Report {
            kind, year, source, ..
        } = cli.command
        else {
            panic!("expected report");
        };
        assert_eq!(kind, "yearly");
        assert_eq!(year, Some(1991));
        let config = source.load_config();
        assert!(!config.use_cache);
        assert!(config.force_refresh);
    }

    #[rstest]
    #[case(&["autosales", "export", "monthly_sales", "--year", "2000"])]
    #[case(&["autosales", "cache", "--clear"])]
    #[case(&["autosales", "list"])]
    fn test_subcommands_parse(#[case] args: &[&str]) {
        assert!(Cli::try_parse_from(args).is_ok());
    }
}
