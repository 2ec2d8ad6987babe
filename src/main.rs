//! CLI entry point for the weather report tool.
//!
//! Each report flag loads its own data from the directory, computes the
//! statistics and prints them; flags can be combined in one invocation.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    filter::LevelFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};
use weather_report::{
    analyzers::{month_averages, year_extremes},
    config::Settings,
    error::WeatherError,
    loader::WeatherLoader,
    output::{ChartStyle, render_averages, render_chart, render_extremes, to_json},
    parser::YearMonth,
};

#[derive(Parser)]
#[command(name = "weather_report")]
#[command(
    about = "Yearly extremes, monthly averages and temperature charts from daily weather files",
    long_about = None
)]
struct Cli {
    /// Directory containing `<Location>_weather_<YYYY>_<Mon>.txt` files
    #[arg(value_name = "DIRECTORY")]
    directory: PathBuf,

    /// Highest temperature, lowest temperature and highest humidity for a year
    #[arg(short = 'e', long)]
    year: Option<i32>,

    /// Average temperatures and mean humidity for a month
    #[arg(short = 'a', long = "year_month", value_name = "YYYY/M")]
    year_month: Option<YearMonth>,

    /// Bar chart of daily temperature ranges for a month
    #[arg(short = 'c', long, value_name = "YYYY/M")]
    chart: Option<YearMonth>,

    /// File name location prefix (overrides WEATHER_LOCATION)
    #[arg(short, long)]
    location: Option<String>,

    /// Print extremes and averages as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Draw chart bars without ANSI colors
    #[arg(long, default_value_t = false)]
    no_color: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::from_env().with_location(cli.location.clone());
    let _file_guard = init_tracing(&settings);

    let loader = WeatherLoader::with_location(&cli.directory, settings.location.as_str());
    info!(directory = %cli.directory.display(), location = %settings.location, "Starting");

    if let Some(year) = cli.year {
        yearly_report(&loader, year, cli.json)?;
    }

    if let Some(period) = cli.year_month {
        monthly_report(&loader, period, cli.json)?;
    }

    if let Some(period) = cli.chart {
        let style = ChartStyle {
            color: !cli.no_color,
        };
        chart_report(&loader, period, style)?;
    }

    Ok(())
}

/// Colored stderr logs, plus a JSON rolling log file when `LOG_FILE_PATH` is set.
fn init_tracing(settings: &Settings) -> Option<WorkerGuard> {
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(env_filter("RUST_LOG", LevelFilter::WARN));

    let (json_layer, guard) = match &settings.log_file_path {
        Some(path) => {
            let log_dir = path
                .parent()
                .filter(|dir| !dir.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let log_file_name = path
                .file_name()
                .unwrap_or(OsStr::new("weather_report.log"));

            let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

            let layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .with_writer(non_blocking_file)
                .with_filter(env_filter("RUST_LOG_JSON", LevelFilter::DEBUG));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    guard
}

fn env_filter(var: &str, default: LevelFilter) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default.into())
        .with_env_var(var)
        .from_env_lossy()
}

fn emit(json: bool, report: &impl Serialize, lines: Vec<String>) -> Result<()> {
    if json {
        println!("{}", to_json(report)?);
    } else {
        for line in lines {
            println!("{line}");
        }
    }
    Ok(())
}

#[tracing::instrument(skip(loader))]
fn yearly_report(loader: &WeatherLoader, year: i32, json: bool) -> Result<()> {
    let records = loader.load(year, None)?;
    if records.is_empty() {
        return Err(WeatherError::NoData {
            period: year.to_string(),
        }
        .into());
    }

    let extremes =
        year_extremes(&records).with_context(|| format!("computing extremes for {year}"))?;
    emit(json, &extremes, render_extremes(&extremes))
}

#[tracing::instrument(skip(loader, period), fields(period = %period))]
fn monthly_report(loader: &WeatherLoader, period: YearMonth, json: bool) -> Result<()> {
    let records = loader.load(period.year, Some(period.month))?;
    if records.is_empty() {
        return Err(WeatherError::NoData {
            period: period.to_string(),
        }
        .into());
    }

    let averages =
        month_averages(&records).with_context(|| format!("computing averages for {period}"))?;
    emit(json, &averages, render_averages(&averages))
}

#[tracing::instrument(skip(loader, period), fields(period = %period))]
fn chart_report(loader: &WeatherLoader, period: YearMonth, style: ChartStyle) -> Result<()> {
    let records = loader.load(period.year, Some(period.month))?;
    if records.is_empty() {
        return Err(WeatherError::NoData {
            period: period.to_string(),
        }
        .into());
    }

    let lines = render_chart(&period, &records, style)
        .with_context(|| format!("drawing chart for {period}"))?;
    if lines.len() == 1 {
        warn!("No day in the month has both temperatures");
    }
    for line in lines {
        println!("{line}");
    }
    Ok(())
}
