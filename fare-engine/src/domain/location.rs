//! Boarding locations for integrations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a string is not a recognised location code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognised integration location: {code:?}")]
pub struct InvalidLocation {
    code: String,
}

/// Where a passenger boards the next leg of a trip.
///
/// Boarding inside a MOVE station keeps the passenger behind the fare gate,
/// which the matrix prices lower than re-boarding at a street stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationLocation {
    /// Transfer inside a MOVE station, without leaving the paid area.
    AtStation,
    /// Transfer at a street stop, outside the paid area.
    OutsideStation,
}

impl IntegrationLocation {
    /// Parses a wire code such as `"at_station"`.
    pub fn parse(code: &str) -> Result<Self, InvalidLocation> {
        match code {
            "at_station" => Ok(IntegrationLocation::AtStation),
            "outside_station" => Ok(IntegrationLocation::OutsideStation),
            _ => Err(InvalidLocation {
                code: code.to_owned(),
            }),
        }
    }

    /// The wire code used in tariff documents and breakdowns.
    pub const fn code(&self) -> &'static str {
        match self {
            IntegrationLocation::AtStation => "at_station",
            IntegrationLocation::OutsideStation => "outside_station",
        }
    }
}

impl fmt::Display for IntegrationLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
