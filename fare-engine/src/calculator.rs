//! Trip pricing against a fare table.
//!
//! Pricing is a Markov-chain rule, not an optimisation: the fare of each
//! leg depends only on the previous leg's service and the transfer
//! location between them. The trip is priced exactly as given; the
//! calculator never reorders legs or searches for a cheaper partition.

use tracing::debug;

use crate::domain::{FareCalculation, FareError, IntegrationLocation, ServiceType};
use crate::tariff::FareTable;

/// Prices an ordered trip.
///
/// `services` carries one entry per leg, in boarding order. `locations`
/// is consumed positionally: entry `i` describes the transfer between leg
/// `i` and leg `i + 1`. Missing entries default to
/// [`IntegrationLocation::OutsideStation`], the more expensive reading;
/// excess entries are ignored.
///
/// # Examples
///
/// ```
/// use fare_engine::calculator::calculate_fare;
/// use fare_engine::domain::{IntegrationLocation, ServiceType};
/// use fare_engine::tariff::bhtrans_tariff;
///
/// let table = bhtrans_tariff();
/// let trip = calculate_fare(
///     &table,
///     &[ServiceType::TroncaisConvencionais, ServiceType::Alimentadoras],
///     &[IntegrationLocation::AtStation],
/// )
/// .unwrap();
/// // Boarding the feeder inside the station is a free integration
/// assert_eq!(trip.total_fare().format_br(), "R$ 5,75");
/// ```
pub fn calculate_fare(
    table: &FareTable,
    services: &[ServiceType],
    locations: &[IntegrationLocation],
) -> Result<FareCalculation, FareError> {
    let (first, rest) = services.split_first().ok_or(FareError::EmptyTrip)?;
    let first_fare = table.unitary_fare(*first)?;

    let mut integrations = Vec::with_capacity(rest.len());
    let mut previous = *first;
    for (i, service) in rest.iter().enumerate() {
        let location = locations
            .get(i)
            .copied()
            .unwrap_or(IntegrationLocation::OutsideStation);
        let fare = table.integration_fare(previous, *service, location)?;
        integrations.push((*service, location, fare));
        previous = *service;
    }

    let calculation = FareCalculation::new(*first, first_fare, integrations);
    debug!(
        legs = services.len(),
        total = %calculation.total_fare(),
        "priced trip"
    );
    Ok(calculation)
}
