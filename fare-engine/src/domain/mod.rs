//! Core vocabulary of the fare engine: service categories, boarding
//! locations, amounts in centavos, and priced trips.

mod amount;
mod breakdown;
mod error;
mod location;
mod service;

pub use amount::{FareAmount, InvalidFareAmount};
pub use breakdown::{BreakdownLine, FareCalculation};
pub use error::FareError;
pub use location::{IntegrationLocation, InvalidLocation};
pub use service::{InvalidServiceCode, ServiceType};
