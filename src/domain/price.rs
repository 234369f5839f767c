//! Price series representation.
//!
//! A [`PriceHistory`] is a validated, chronologically ordered sequence of
//! daily adjusted-close prices. Ordering, date uniqueness and non-negative
//! prices are checked once at construction so the analysis engines can
//! assume a well-formed series.

use crate::domain::error::AdvisorError;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// A single observation in a daily price series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub adj_close: Decimal,
}

/// Ordered daily price series, oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceHistory {
    points: Vec<PricePoint>,
}

impl PriceHistory {
    /// Validates and wraps a raw point sequence.
    ///
    /// Rejects out-of-order dates, duplicate dates and negative prices.
    /// An empty sequence is valid; the engines degrade to sentinel values.
    pub fn new(points: Vec<PricePoint>) -> Result<Self, AdvisorError> {
        for (i, point) in points.iter().enumerate() {
            if point.adj_close < Decimal::ZERO {
                return Err(AdvisorError::MalformedHistory {
                    index: i,
                    reason: format!("negative price {} on {}", point.adj_close, point.date),
                });
            }
            if i > 0 {
                let prev = &points[i - 1];
                if point.date == prev.date {
                    return Err(AdvisorError::MalformedHistory {
                        index: i,
                        reason: format!("duplicate date {}", point.date),
                    });
                }
                if point.date < prev.date {
                    return Err(AdvisorError::MalformedHistory {
                        index: i,
                        reason: format!("{} is not after {}", point.date, prev.date),
                    });
                }
            }
        }
        Ok(Self { points })
    }

    pub fn empty() -> Self {
        Self { points: Vec::new() }
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Most recent observation, if any.
    pub fn latest(&self) -> Option<&PricePoint> {
        self.points.last()
    }
}
