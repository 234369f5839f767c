//! Buy/Sell/Hold scoring over an indicator bundle.
//!
//! A fixed, ordered set of signals is evaluated against the bundle and the
//! latest adjusted close:
//!
//! 1. Moving-average crossover: SMA20 above SMA50 (golden cross) is
//!    bullish, below (death cross) is bearish. Skipped when either SMA is
//!    unavailable.
//! 2. Long-term trend: price above SMA200 is bullish, below is bearish.
//! 3. Risk-adjusted return: positive is bullish, negative is bearish.
//!
//! The net signal count decides the action: two or more in agreement for
//! Buy or Sell, anything else Holds. Volatility acts as a band on top of
//! the directional verdict: above [`HIGH_VOLATILITY`] a Buy is downgraded
//! to Hold; below [`LOW_VOLATILITY`] a directional call gains confidence.
//! Scoring is pure and deterministic.

use crate::domain::analysis::IndicatorBundle;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// Annualized volatility above which a bullish verdict is not trusted.
pub const HIGH_VOLATILITY: f64 = 0.40;
/// Annualized volatility below which a directional verdict is corroborated.
pub const LOW_VOLATILITY: f64 = 0.15;

const MAX_CONFIDENCE: u8 = 95;

/// Closed set of recommendation actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Buy,
    Sell,
    Hold,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Buy => write!(f, "BUY"),
            Action::Sell => write!(f, "SELL"),
            Action::Hold => write!(f, "HOLD"),
        }
    }
}

/// The scored verdict for one bundle, before a ticker is attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub action: Action,
    /// 0–100; rises with the number of corroborating signals.
    pub confidence: u8,
    /// Names the signals that drove the decision.
    pub rationale: String,
}

/// Recommendation DTO as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationResult {
    pub ticker: String,
    pub action: Action,
    pub confidence: u8,
    pub rationale: String,
}

impl RecommendationResult {
    pub fn new(ticker: impl Into<String>, rec: Recommendation) -> Self {
        Self {
            ticker: ticker.into(),
            action: rec.action,
            confidence: rec.confidence,
            rationale: rec.rationale,
        }
    }
}

/// Scores an indicator bundle against the latest adjusted close.
pub fn score(bundle: &IndicatorBundle, current_price: Decimal) -> Recommendation {
    let mut bullish: Vec<&str> = Vec::new();
    let mut bearish: Vec<&str> = Vec::new();

    match (bundle.sma20, bundle.sma50) {
        (Some(short), Some(medium)) if short > medium => {
            bullish.push("Golden cross detected");
        }
        (Some(short), Some(medium)) if short < medium => {
            bearish.push("Death cross detected");
        }
        _ => {}
    }

    if let Some(long) = bundle.sma200 {
        if current_price > long {
            bullish.push("Price above long-term trend");
        } else if current_price < long {
            bearish.push("Price below long-term trend");
        }
    }

    if bundle.risk_adjusted_return > 0.0 {
        bullish.push("Positive risk-adjusted return");
    } else if bundle.risk_adjusted_return < 0.0 {
        bearish.push("Negative risk-adjusted return");
    }

    let net = bullish.len() as i32 - bearish.len() as i32;
    let elevated = bundle.volatility > HIGH_VOLATILITY;
    let calm = bundle.volatility < LOW_VOLATILITY;

    let mut reasons: Vec<String> = bullish
        .iter()
        .chain(bearish.iter())
        .map(|s| (*s).to_string())
        .collect();

    let (action, confidence) = if net >= 2 && elevated {
        reasons.push("Elevated volatility overrides bullish signals".to_string());
        (Action::Hold, 40)
    } else if net >= 2 {
        (Action::Buy, directional_confidence(net, calm))
    } else if net <= -2 {
        if elevated {
            reasons.push("Elevated volatility".to_string());
        }
        (Action::Sell, directional_confidence(net, calm))
    } else if bullish.is_empty() && bearish.is_empty() {
        reasons.push("No directional signals".to_string());
        (Action::Hold, 50)
    } else if !bullish.is_empty() && !bearish.is_empty() {
        // Conflicting evidence: stand aside with little conviction.
        (Action::Hold, 35)
    } else {
        // A single unopposed signal is not enough to act on.
        (Action::Hold, 45)
    };

    Recommendation {
        action,
        confidence,
        rationale: reasons.join("; "),
    }
}

fn directional_confidence(net: i32, calm: bool) -> u8 {
    let base = 50_u32 + 15 * net.unsigned_abs();
    let boosted = if calm { base + 10 } else { base };
    boosted.min(u32::from(MAX_CONFIDENCE)) as u8
}
