//! Priced trips and their per-leg breakdown.

use serde::Serialize;

use crate::domain::amount::FareAmount;
use crate::domain::location::IntegrationLocation;
use crate::domain::service::ServiceType;

/// One priced leg of a trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownLine {
    /// The service boarded on this leg.
    pub service: ServiceType,
    /// What this boarding cost.
    pub fare: FareAmount,
    /// Where the passenger boarded, for integration legs. `None` on the
    /// first boarding, which has no transfer location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<IntegrationLocation>,
}

/// The priced outcome of a trip.
///
/// Built only by the fare calculator, so its invariants hold by
/// construction: the total is the first boarding fare plus every
/// integration fare, and the breakdown carries one line per leg in
/// boarding order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FareCalculation {
    total_fare: FareAmount,
    first_boarding_fare: FareAmount,
    integration_fares: Vec<FareAmount>,
    breakdown: Vec<BreakdownLine>,
}

impl FareCalculation {
    pub(crate) fn new(
        first_service: ServiceType,
        first_fare: FareAmount,
        integrations: Vec<(ServiceType, IntegrationLocation, FareAmount)>,
    ) -> FareCalculation {
        let mut breakdown = Vec::with_capacity(integrations.len() + 1);
        breakdown.push(BreakdownLine {
            service: first_service,
            fare: first_fare,
            location: None,
        });
        let mut integration_fares = Vec::with_capacity(integrations.len());
        for (service, location, fare) in integrations {
            breakdown.push(BreakdownLine {
                service,
                fare,
                location: Some(location),
            });
            integration_fares.push(fare);
        }
        let total_fare = first_fare + integration_fares.iter().sum();
        FareCalculation {
            total_fare,
            first_boarding_fare: first_fare,
            integration_fares,
            breakdown,
        }
    }

    /// The full price of the trip.
    pub fn total_fare(&self) -> FareAmount {
        self.total_fare
    }

    /// What the first boarding cost.
    pub fn first_boarding_fare(&self) -> FareAmount {
        self.first_boarding_fare
    }

    /// The cost of each transfer, in boarding order.
    pub fn integration_fares(&self) -> &[FareAmount] {
        &self.integration_fares
    }

    /// One line per leg, in boarding order.
    pub fn breakdown(&self) -> &[BreakdownLine] {
        &self.breakdown
    }

    /// How many legs the trip had.
    pub fn leg_count(&self) -> usize {
        self.breakdown.len()
    }

    /// How many transfers the trip had.
    pub fn integration_count(&self) -> usize {
        self.integration_fares.len()
    }

    /// True for a single-leg trip with no transfers.
    pub fn is_direct(&self) -> bool {
        self.integration_fares.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_leg_trip() {
        let calc = FareCalculation::new(
            ServiceType::Circular,
            FareAmount::from_centavos(300),
            Vec::new(),
        );
        assert_eq!(calc.total_fare(), FareAmount::from_centavos(300));
        assert_eq!(calc.first_boarding_fare(), FareAmount::from_centavos(300));
        assert!(calc.integration_fares().is_empty());
        assert_eq!(calc.leg_count(), 1);
        assert_eq!(calc.integration_count(), 0);
        assert!(calc.is_direct());

        let first = &calc.breakdown()[0];
        assert_eq!(first.service, ServiceType::Circular);
        assert_eq!(first.location, None);
    }

    #[test]
    fn total_is_first_fare_plus_integrations() {
        let calc = FareCalculation::new(
            ServiceType::Alimentadoras,
            FareAmount::from_centavos(425),
            vec![
                (
                    ServiceType::TroncaisConvencionais,
                    IntegrationLocation::OutsideStation,
                    FareAmount::from_centavos(360),
                ),
                (
                    ServiceType::Estruturais,
                    IntegrationLocation::AtStation,
                    FareAmount::ZERO,
                ),
            ],
        );
        assert_eq!(calc.total_fare(), FareAmount::from_centavos(785));
        assert_eq!(calc.leg_count(), 3);
        assert_eq!(calc.integration_count(), 2);
        assert!(!calc.is_direct());

        assert_eq!(
            calc.integration_fares(),
            &[FareAmount::from_centavos(360), FareAmount::ZERO]
        );
        assert_eq!(
            calc.breakdown()[1].location,
            Some(IntegrationLocation::OutsideStation)
        );
        assert_eq!(
            calc.breakdown()[2].location,
            Some(IntegrationLocation::AtStation)
        );
    }

    #[test]
    fn serializes_with_reais_and_omits_first_location() {
        let calc = FareCalculation::new(
            ServiceType::TroncaisMove,
            FareAmount::from_centavos(575),
            vec![(
                ServiceType::Metro,
                IntegrationLocation::AtStation,
                FareAmount::from_centavos(250),
            )],
        );
        let json = serde_json::to_value(&calc).unwrap();
        assert_eq!(json["total_fare"], 8.25);
        assert_eq!(json["first_boarding_fare"], 5.75);
        assert_eq!(json["breakdown"][0]["service"], "troncais_move");
        assert!(json["breakdown"][0].get("location").is_none());
        assert_eq!(json["breakdown"][1]["location"], "at_station");
    }
}
