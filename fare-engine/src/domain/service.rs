//! Service categories of the Belo Horizonte transit network.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a string is not a recognised service code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognised service code: {code:?}")]
pub struct InvalidServiceCode {
    code: String,
}

/// A category of transit service, as priced by the tariff matrix.
///
/// The set is closed: every line in the network belongs to exactly one of
/// these categories, and the integration matrix is keyed by them.
///
/// # Examples
///
/// ```
/// use fare_engine::domain::ServiceType;
///
/// let service = ServiceType::parse("troncais_move").unwrap();
/// assert_eq!(service, ServiceType::TroncaisMove);
/// assert_eq!(service.code(), "troncais_move");
/// assert!(ServiceType::parse("teleferico").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    /// MOVE BRT trunk lines, boarded at dedicated stations.
    TroncaisMove,
    /// Conventional trunk lines.
    TroncaisConvencionais,
    /// Structural lines linking regions without passing downtown.
    Estruturais,
    /// Feeder lines serving MOVE stations.
    Alimentadoras,
    /// Downtown circular lines.
    Circular,
    /// Community lines inside vilas and favelas, fare-free.
    VilasFavelas,
    /// The metropolitan rail line.
    Metro,
}

impl ServiceType {
    /// Every service category, in matrix order.
    pub const ALL: [ServiceType; 7] = [
        ServiceType::TroncaisMove,
        ServiceType::TroncaisConvencionais,
        ServiceType::Estruturais,
        ServiceType::Alimentadoras,
        ServiceType::Circular,
        ServiceType::VilasFavelas,
        ServiceType::Metro,
    ];

    /// Parses a wire code such as `"troncais_move"`.
    pub fn parse(code: &str) -> Result<Self, InvalidServiceCode> {
        ServiceType::ALL
            .into_iter()
            .find(|service| service.code() == code)
            .ok_or_else(|| InvalidServiceCode {
                code: code.to_owned(),
            })
    }

    /// The wire code used in tariff documents and breakdowns.
    pub const fn code(&self) -> &'static str {
        match self {
            ServiceType::TroncaisMove => "troncais_move",
            ServiceType::TroncaisConvencionais => "troncais_convencionais",
            ServiceType::Estruturais => "estruturais",
            ServiceType::Alimentadoras => "alimentadoras",
            ServiceType::Circular => "circular",
            ServiceType::VilasFavelas => "vilas_favelas",
            ServiceType::Metro => "metro",
        }
    }

    /// Whether a transfer onto this service is priced by boarding location.
    ///
    /// Trunk and feeder buses can be boarded inside a MOVE station (a free or
    /// discounted integration) or at a street stop; the matrix carries a fare
    /// for each. The remaining categories have a single transfer fare.
    pub const fn has_located_tariff(&self) -> bool {
        matches!(
            self,
            ServiceType::TroncaisConvencionais
                | ServiceType::Estruturais
                | ServiceType::Alimentadoras
        )
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
