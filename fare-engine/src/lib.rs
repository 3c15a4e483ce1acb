//! Fare computation for the Belo Horizonte transit network.
//!
//! Answers: "this trip boards these services, in this order, transferring
//! at these places; what does the passenger pay?" Pricing follows the
//! BHTrans tariff-integration matrix, where the cost of each boarding
//! depends on the previous service and on whether the transfer happens
//! inside a MOVE station.

pub mod calculator;
pub mod classify;
pub mod domain;
pub mod estimate;
pub mod recharge;
pub mod tariff;
