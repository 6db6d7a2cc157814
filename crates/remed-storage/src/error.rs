use thiserror::Error;

use remed_calculators::error::CalculatorError;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("calculator error: {0}")]
    Calculator(#[from] CalculatorError),

    #[error("state version {found} is newer than this build supports ({supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("no platform data directory available")]
    NoDataDir,

    #[error("state file is not a JSON object")]
    MalformedState,
}
