//! Tariff data: the fare table contract, its validation, and the built-in
//! Belo Horizonte matrix.
//!
//! A table arrives as a JSON document ([`FareDocument`]), is validated
//! against the closed service vocabulary, and becomes an immutable
//! [`FareTable`] the calculator reads from. Key characteristics:
//!
//! - The matrix is keyed by every service as a possible *first* boarding,
//!   but is not total in its second dimension; unpublished pairs are
//!   priced by unitary-fare fallback at lookup time.
//! - Second-boarding keys carry an `_at_station` / `_outside_station`
//!   suffix exactly when the second service is priced by boarding
//!   location.

mod bhtrans;
mod error;
mod schema;
mod table;

pub use bhtrans::bhtrans_tariff;
pub use error::TariffError;
pub use schema::{
    DocumentMetadata, ExtraFares, FareDocument, IntegrationMatrix, MatrixRow, MetropolitanFares,
    ServiceEntry,
};
pub use table::{DEFAULT_METROPOLITAN_BASE, FareTable, FareTableBuilder, TariffMetadata};
