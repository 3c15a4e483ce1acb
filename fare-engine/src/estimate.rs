//! Fare estimation for computed routes.
//!
//! Route planners hand back bus legs with line numbers and names but no
//! tariff category. This module resolves each leg to a service, then
//! prices the trip with the worst-case assumption that every transfer
//! happens at a street stop, so estimates never undershoot the fare a
//! passenger could actually pay.

use serde::Serialize;
use tracing::debug;

use crate::calculator::calculate_fare;
use crate::classify::classify_line;
use crate::domain::{FareAmount, FareCalculation, FareError, IntegrationLocation, ServiceType};
use crate::tariff::FareTable;

/// One leg of a computed route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteLeg {
    line_number: String,
    line_name: String,
    metropolitan: bool,
}

impl RouteLeg {
    /// A leg on the urban (municipal) network.
    pub fn urban(line_number: impl Into<String>, line_name: impl Into<String>) -> Self {
        RouteLeg {
            line_number: line_number.into(),
            line_name: line_name.into(),
            metropolitan: false,
        }
    }

    /// A leg on a metropolitan (intermunicipal) line.
    pub fn metropolitan(line_number: impl Into<String>, line_name: impl Into<String>) -> Self {
        RouteLeg {
            line_number: line_number.into(),
            line_name: line_name.into(),
            metropolitan: true,
        }
    }

    pub fn line_number(&self) -> &str {
        &self.line_number
    }

    pub fn line_name(&self) -> &str {
        &self.line_name
    }

    pub fn is_metropolitan(&self) -> bool {
        self.metropolitan
    }

    /// The service this leg is priced as.
    ///
    /// Metropolitan legs are priced through the metro tariff; urban legs
    /// are classified from their line number and name.
    pub fn service(&self) -> ServiceType {
        if self.metropolitan {
            ServiceType::Metro
        } else {
            classify_line(&self.line_number, &self.line_name)
        }
    }
}

/// A priced route estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteFareEstimate {
    services: Vec<ServiceType>,
    total_fare: FareAmount,
    #[serde(skip_serializing_if = "Option::is_none")]
    calculation: Option<FareCalculation>,
}

impl RouteFareEstimate {
    /// The service each leg resolved to, in boarding order.
    pub fn services(&self) -> &[ServiceType] {
        &self.services
    }

    /// The estimated price of the whole route.
    pub fn total_fare(&self) -> FareAmount {
        self.total_fare
    }

    /// The full breakdown, when the trip needed the integration matrix.
    /// Single-leg routes are priced flat and carry no breakdown.
    pub fn calculation(&self) -> Option<&FareCalculation> {
        self.calculation.as_ref()
    }
}

/// Estimates what a route will cost.
///
/// A single metropolitan leg is priced at the flat
/// [metropolitan base](FareTable::metropolitan_base); a single urban leg
/// at its service's unitary fare. Longer routes go through the
/// integration matrix with every transfer assumed outside a station, the
/// more expensive reading.
pub fn estimate_route_fare(
    table: &FareTable,
    legs: &[RouteLeg],
) -> Result<RouteFareEstimate, FareError> {
    let (first, rest) = legs.split_first().ok_or(FareError::EmptyTrip)?;
    let services: Vec<ServiceType> = legs.iter().map(RouteLeg::service).collect();

    if rest.is_empty() {
        let total_fare = if first.is_metropolitan() {
            table.metropolitan_base()
        } else {
            table.unitary_fare(services[0])?
        };
        debug!(line = %first.line_number(), total = %total_fare, "priced single-leg route");
        return Ok(RouteFareEstimate {
            services,
            total_fare,
            calculation: None,
        });
    }

    let locations = vec![IntegrationLocation::OutsideStation; services.len() - 1];
    let calculation = calculate_fare(table, &services, &locations)?;
    let total_fare = calculation.total_fare();
    debug!(
        legs = legs.len(),
        total = %total_fare,
        "priced route with street transfers"
    );
    Ok(RouteFareEstimate {
        services,
        total_fare,
        calculation: Some(calculation),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tariff::bhtrans_tariff;

    fn centavos(value: u64) -> FareAmount {
        FareAmount::from_centavos(value)
    }

    #[test]
    fn empty_route_is_rejected() {
        let table = bhtrans_tariff();
        assert!(matches!(
            estimate_route_fare(&table, &[]),
            Err(FareError::EmptyTrip)
        ));
    }

    #[test]
    fn single_urban_leg_costs_its_unitary_fare() {
        let table = bhtrans_tariff();
        let estimate = estimate_route_fare(
            &table,
            &[RouteLeg::urban("150", "Savassi / Prado")],
        )
        .unwrap();
        assert_eq!(estimate.services(), &[ServiceType::Estruturais]);
        assert_eq!(estimate.total_fare(), centavos(575));
        assert!(estimate.calculation().is_none());
    }

    #[test]
    fn single_metropolitan_leg_costs_the_flat_base() {
        let table = bhtrans_tariff();
        let estimate = estimate_route_fare(
            &table,
            &[RouteLeg::metropolitan("4890", "Betim / Belo Horizonte")],
        )
        .unwrap();
        assert_eq!(estimate.services(), &[ServiceType::Metro]);
        assert_eq!(estimate.total_fare(), table.metropolitan_base());
        assert!(estimate.calculation().is_none());
    }

    #[test]
    fn transfers_are_priced_as_street_transfers() {
        let table = bhtrans_tariff();
        let estimate = estimate_route_fare(
            &table,
            &[
                RouteLeg::urban("63", "Estação Diamante / Centro"),
                RouteLeg::urban("1404A", "Sarandi / Estação Venda Nova"),
            ],
        )
        .unwrap();
        // MOVE trunk then feeder, boarding at a street stop: 5.75 + 2.15
        assert_eq!(
            estimate.services(),
            &[ServiceType::TroncaisMove, ServiceType::Alimentadoras]
        );
        assert_eq!(estimate.total_fare(), centavos(790));

        let calculation = estimate.calculation().unwrap();
        assert_eq!(calculation.breakdown().len(), 2);
        assert_eq!(
            calculation.breakdown()[1].location,
            Some(IntegrationLocation::OutsideStation)
        );
    }

    #[test]
    fn metropolitan_legs_join_the_chain_as_metro() {
        let table = bhtrans_tariff();
        let estimate = estimate_route_fare(
            &table,
            &[
                RouteLeg::urban("1404A", "Sarandi / Estação Venda Nova"),
                RouteLeg::metropolitan("4890", "Betim / Belo Horizonte"),
            ],
        )
        .unwrap();
        // Feeder 4.25, then the feeder onto metro integration 2.50
        assert_eq!(
            estimate.services(),
            &[ServiceType::Alimentadoras, ServiceType::Metro]
        );
        assert_eq!(estimate.total_fare(), centavos(675));
    }
}
