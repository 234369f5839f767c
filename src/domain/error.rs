//! Domain error types.

/// Top-level error type for folioadvisor.
#[derive(Debug, thiserror::Error)]
pub enum AdvisorError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("market data error: {reason}")]
    MarketData { reason: String },

    #[error("malformed price history at index {index}: {reason}")]
    MalformedHistory { index: usize, reason: String },

    #[error("no price history for {symbol}")]
    NoData { symbol: String },

    #[error("account data error: {reason}")]
    Account { reason: String },

    #[error("no account found for user {user_id}")]
    UnknownUser { user_id: u64 },

    #[error("target age {target_age} is before current age {current_age}")]
    InvalidHorizon { current_age: u32, target_age: u32 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&AdvisorError> for std::process::ExitCode {
    fn from(err: &AdvisorError) -> Self {
        let code: u8 = match err {
            AdvisorError::Io(_) => 1,
            AdvisorError::ConfigParse { .. }
            | AdvisorError::ConfigMissing { .. }
            | AdvisorError::ConfigInvalid { .. } => 2,
            AdvisorError::MarketData { .. } | AdvisorError::MalformedHistory { .. } => 3,
            AdvisorError::NoData { .. } => 4,
            AdvisorError::Account { .. }
            | AdvisorError::UnknownUser { .. }
            | AdvisorError::InvalidHorizon { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}
