//! CSV file market data adapter.
//!
//! One file per symbol under a base directory, named `<SYMBOL>.csv`, with a
//! `date,adj_close` header. Rows are sorted by date after load; the domain
//! validates ordering and uniqueness on top of that.

use crate::domain::error::AdvisorError;
use crate::domain::price::PricePoint;
use crate::ports::market_data_port::MarketDataPort;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

pub struct CsvMarketDataAdapter {
    base_path: PathBuf,
}

impl CsvMarketDataAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn csv_path(&self, symbol: &str) -> PathBuf {
        self.base_path.join(format!("{}.csv", symbol))
    }
}

impl MarketDataPort for CsvMarketDataAdapter {
    fn historical_prices(&self, symbol: &str) -> Result<Vec<PricePoint>, AdvisorError> {
        let path = self.csv_path(symbol);
        let content = fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AdvisorError::NoData {
                    symbol: symbol.to_string(),
                }
            } else {
                AdvisorError::MarketData {
                    reason: format!("failed to read {}: {}", path.display(), e),
                }
            }
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut points = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| AdvisorError::MarketData {
                reason: format!("CSV parse error: {}", e),
            })?;

            let date_str = record.get(0).ok_or_else(|| AdvisorError::MarketData {
                reason: "missing date column".into(),
            })?;
            let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
                AdvisorError::MarketData {
                    reason: format!("invalid date format: {}", e),
                }
            })?;

            let price_str = record.get(1).ok_or_else(|| AdvisorError::MarketData {
                reason: "missing adj_close column".into(),
            })?;
            let adj_close = Decimal::from_str(price_str).map_err(|e| AdvisorError::MarketData {
                reason: format!("invalid adj_close value: {}", e),
            })?;

            points.push(PricePoint { date, adj_close });
        }

        points.sort_by_key(|p| p.date);
        tracing::debug!(symbol, rows = points.len(), "loaded price history");
        Ok(points)
    }

    fn list_symbols(&self) -> Result<Vec<String>, AdvisorError> {
        let entries = fs::read_dir(&self.base_path).map_err(|e| AdvisorError::MarketData {
            reason: format!(
                "failed to read directory {}: {}",
                self.base_path.display(),
                e
            ),
        })?;

        let mut symbols = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| AdvisorError::MarketData {
                reason: format!("directory entry error: {}", e),
            })?;

            let name = entry.file_name();
            let name_str = name.to_string_lossy();
            if let Some(symbol) = name_str.strip_suffix(".csv") {
                symbols.push(symbol.to_string());
            }
        }

        symbols.sort();
        Ok(symbols)
    }
}
