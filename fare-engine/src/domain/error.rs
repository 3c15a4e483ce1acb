//! Errors raised while pricing a trip.

use crate::domain::service::ServiceType;

/// Reasons a trip cannot be priced against a fare table.
///
/// Note that an untabulated service combination is deliberately *not* an
/// error: the calculator falls back to the unitary fare of the onward leg
/// and logs a warning instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FareError {
    /// A fare was requested for a trip with no legs.
    #[error("a trip must have at least one leg")]
    EmptyTrip,
    /// A leg's service has no unitary fare in the table.
    #[error("service {0} has no unitary fare in the table")]
    UnknownService(ServiceType),
    /// The first boarding's service has no row in the integration matrix.
    #[error("service {0} has no first-boarding row in the integration matrix")]
    UnknownFirstService(ServiceType),
}
