//! Errors raised while loading a tariff document.

use std::path::PathBuf;

/// Reasons a tariff document cannot be turned into a [`FareTable`].
///
/// [`FareTable`]: crate::tariff::FareTable
#[derive(Debug, thiserror::Error)]
pub enum TariffError {
    /// The document could not be read from disk.
    #[error("failed to read tariff file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The document is not valid JSON, or a fare value is out of range.
    #[error("failed to parse tariff document")]
    Parse(#[from] serde_json::Error),
    /// A services or matrix key is not a recognised service code.
    #[error("unrecognised service code in tariff document: {code:?}")]
    UnknownServiceCode { code: String },
    /// A second-boarding key does not fit its service's tariff shape.
    #[error("invalid second-boarding key {key:?}: {reason}")]
    InvalidSecondBoardingKey { key: String, reason: &'static str },
}
