//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::adapters::csv_account::CsvAccountAdapter;
use crate::adapters::csv_market_data::CsvMarketDataAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::domain::analysis::IndicatorBundle;
use crate::domain::error::AdvisorError;
use crate::domain::projection::ProjectionResult;
use crate::domain::scoring::RecommendationResult;
use crate::ports::config_port::ConfigPort;
use crate::ports::market_data_port::MarketDataPort;
use crate::services::{ProjectionService, RecommendationService};

const DEFAULT_TARGET_AGE: u32 = 65;

#[derive(Parser, Debug)]
#[command(name = "folioadvisor", about = "Portfolio analytics and retirement projections")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute the full indicator bundle for a symbol
    Analyze {
        #[arg(long)]
        symbol: String,
        /// Directory of per-symbol price CSVs
        #[arg(short, long)]
        data: Option<PathBuf>,
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Produce a Buy/Sell/Hold recommendation for a symbol
    Recommend {
        #[arg(long)]
        symbol: String,
        #[arg(short, long)]
        data: Option<PathBuf>,
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Project a user's balance to a target age
    Project {
        #[arg(long)]
        user_id: u64,
        #[arg(long)]
        target_age: Option<u32>,
        #[arg(short, long)]
        data: Option<PathBuf>,
        /// Accounts CSV file
        #[arg(short, long)]
        accounts: Option<PathBuf>,
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// List symbols available in the data directory
    Symbols {
        #[arg(short, long)]
        data: Option<PathBuf>,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    init_tracing();

    match cli.command {
        Command::Analyze {
            symbol,
            data,
            config,
            json,
        } => run_analyze(&symbol, data, config.as_ref(), json),
        Command::Recommend {
            symbol,
            data,
            config,
            json,
        } => run_recommend(&symbol, data, config.as_ref(), json),
        Command::Project {
            user_id,
            target_age,
            data,
            accounts,
            config,
            json,
        } => run_project(user_id, target_age, data, accounts, config.as_ref(), json),
        Command::Symbols { data, config } => run_symbols(data, config.as_ref()),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, AdvisorError> {
    FileConfigAdapter::from_file(path).map_err(|e| AdvisorError::ConfigParse {
        file: path.display().to_string(),
        reason: e.to_string(),
    })
}

fn resolve_prices_dir(
    flag: Option<PathBuf>,
    config: Option<&FileConfigAdapter>,
) -> Result<PathBuf, AdvisorError> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    config
        .and_then(|c| c.get_string("data", "prices_dir"))
        .map(PathBuf::from)
        .ok_or_else(|| AdvisorError::ConfigMissing {
            section: "data".into(),
            key: "prices_dir".into(),
        })
}

fn resolve_accounts_csv(
    flag: Option<PathBuf>,
    config: Option<&FileConfigAdapter>,
) -> Result<PathBuf, AdvisorError> {
    if let Some(path) = flag {
        return Ok(path);
    }
    config
        .and_then(|c| c.get_string("data", "accounts_csv"))
        .map(PathBuf::from)
        .ok_or_else(|| AdvisorError::ConfigMissing {
            section: "data".into(),
            key: "accounts_csv".into(),
        })
}

fn resolve_target_age(flag: Option<u32>, config: Option<&FileConfigAdapter>) -> u32 {
    if let Some(age) = flag {
        return age;
    }
    config
        .map(|c| c.get_int("projection", "default_target_age", i64::from(DEFAULT_TARGET_AGE)))
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(DEFAULT_TARGET_AGE)
}

fn with_config<T>(
    config_path: Option<&PathBuf>,
    f: impl FnOnce(Option<&FileConfigAdapter>) -> Result<T, AdvisorError>,
) -> Result<T, AdvisorError> {
    match config_path {
        Some(path) => {
            eprintln!("Loading config from {}", path.display());
            let adapter = load_config(path)?;
            f(Some(&adapter))
        }
        None => f(None),
    }
}

fn report(result: Result<(), AdvisorError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn run_analyze(
    symbol: &str,
    data: Option<PathBuf>,
    config_path: Option<&PathBuf>,
    json: bool,
) -> ExitCode {
    report(with_config(config_path, |config| {
        let dir = resolve_prices_dir(data, config)?;
        let service = RecommendationService::new(CsvMarketDataAdapter::new(dir));
        let bundle = service.analyze(symbol)?;
        if json {
            println!("{}", to_json(&bundle)?);
        } else {
            print_bundle(symbol, &bundle);
        }
        Ok(())
    }))
}

fn run_recommend(
    symbol: &str,
    data: Option<PathBuf>,
    config_path: Option<&PathBuf>,
    json: bool,
) -> ExitCode {
    report(with_config(config_path, |config| {
        let dir = resolve_prices_dir(data, config)?;
        let service = RecommendationService::new(CsvMarketDataAdapter::new(dir));
        let result = service.recommend(symbol)?;
        if json {
            println!("{}", to_json(&result)?);
        } else {
            print_recommendation(&result);
        }
        Ok(())
    }))
}

fn run_project(
    user_id: u64,
    target_age: Option<u32>,
    data: Option<PathBuf>,
    accounts: Option<PathBuf>,
    config_path: Option<&PathBuf>,
    json: bool,
) -> ExitCode {
    report(with_config(config_path, |config| {
        let dir = resolve_prices_dir(data, config)?;
        let accounts_csv = resolve_accounts_csv(accounts, config)?;
        let target_age = resolve_target_age(target_age, config);

        let service = ProjectionService::new(
            CsvMarketDataAdapter::new(dir),
            CsvAccountAdapter::new(accounts_csv),
        );
        let result = service.project(user_id, target_age)?;
        if json {
            println!("{}", to_json(&result)?);
        } else {
            print_projection(&result);
        }
        Ok(())
    }))
}

fn run_symbols(data: Option<PathBuf>, config_path: Option<&PathBuf>) -> ExitCode {
    report(with_config(config_path, |config| {
        let dir = resolve_prices_dir(data, config)?;
        let adapter = CsvMarketDataAdapter::new(dir);
        for symbol in adapter.list_symbols()? {
            println!("{symbol}");
        }
        Ok(())
    }))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, AdvisorError> {
    serde_json::to_string_pretty(value).map_err(|e| AdvisorError::MarketData {
        reason: format!("serialization error: {}", e),
    })
}

fn print_bundle(symbol: &str, bundle: &IndicatorBundle) {
    let fmt_sma = |sma: Option<rust_decimal::Decimal>| match sma {
        Some(v) => v.to_string(),
        None => "unavailable".to_string(),
    };

    println!("Analysis for {symbol}");
    println!("  SMA(20):              {}", fmt_sma(bundle.sma20));
    println!("  SMA(50):              {}", fmt_sma(bundle.sma50));
    println!("  SMA(200):             {}", fmt_sma(bundle.sma200));
    println!("  Max drawdown:         {:.2}%", bundle.max_drawdown * 100.0);
    println!("  Volatility (ann.):    {:.2}%", bundle.volatility * 100.0);
    println!("  CAGR:                 {:.2}%", bundle.cagr * 100.0);
    println!(
        "  Risk-adjusted return: {:.2}%",
        bundle.risk_adjusted_return * 100.0
    );
}

fn print_recommendation(result: &RecommendationResult) {
    println!(
        "{}: {} (confidence {}%)",
        result.ticker, result.action, result.confidence
    );
    println!("  {}", result.rationale);
}

fn print_projection(result: &ProjectionResult) {
    println!(
        "Projection for user {} to age {} ({} years at {:.2}%/yr):",
        result.user_id,
        result.target_age,
        result.years,
        result.assumed_rate * 100.0
    );
    println!("  {:.2}", result.projected_balance);
}
