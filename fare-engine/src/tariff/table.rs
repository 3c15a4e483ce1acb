//! The validated fare table: unitary fares plus the integration matrix.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use tracing::warn;

use crate::domain::{FareAmount, FareError, IntegrationLocation, ServiceType};
use crate::tariff::error::TariffError;
use crate::tariff::schema::FareDocument;

/// Base fare applied to metropolitan routes when the tariff document does
/// not price them.
pub const DEFAULT_METROPOLITAN_BASE: FareAmount = FareAmount::from_centavos(575);

/// Provenance of a loaded fare table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TariffMetadata {
    /// Who published the tariff data.
    pub source: Option<String>,
    /// The date the tariff took effect.
    pub effective_date: Option<NaiveDate>,
}

/// Display data and unitary fare for one service.
#[derive(Debug, Clone)]
struct ServiceTariff {
    name: Option<String>,
    description: Option<String>,
    unitary_fare: FareAmount,
}

/// A matrix column key: how the second boarding of a transfer is priced.
///
/// Services with located tariffs get one key per boarding location; the
/// rest get a single flat key, so a location can never select a fare the
/// service does not distinguish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum SecondBoardingKey {
    Flat(ServiceType),
    Located(ServiceType, IntegrationLocation),
}

impl SecondBoardingKey {
    /// The key under which a transfer onto `second` at `location` is filed.
    fn for_transfer(second: ServiceType, location: IntegrationLocation) -> Self {
        if second.has_located_tariff() {
            SecondBoardingKey::Located(second, location)
        } else {
            SecondBoardingKey::Flat(second)
        }
    }

    /// Parses a document key: a bare service code, or a code suffixed
    /// `_at_station` / `_outside_station`.
    fn parse(key: &str) -> Result<Self, TariffError> {
        if let Some(code) = key.strip_suffix("_at_station") {
            return Self::parse_located(key, code, IntegrationLocation::AtStation);
        }
        if let Some(code) = key.strip_suffix("_outside_station") {
            return Self::parse_located(key, code, IntegrationLocation::OutsideStation);
        }
        let service = ServiceType::parse(key).map_err(|_| TariffError::UnknownServiceCode {
            code: key.to_owned(),
        })?;
        if service.has_located_tariff() {
            return Err(TariffError::InvalidSecondBoardingKey {
                key: key.to_owned(),
                reason: "this service is priced by boarding location and needs an \
                         _at_station or _outside_station suffix",
            });
        }
        Ok(SecondBoardingKey::Flat(service))
    }

    fn parse_located(
        key: &str,
        code: &str,
        location: IntegrationLocation,
    ) -> Result<Self, TariffError> {
        let service = ServiceType::parse(code).map_err(|_| TariffError::UnknownServiceCode {
            code: key.to_owned(),
        })?;
        if !service.has_located_tariff() {
            return Err(TariffError::InvalidSecondBoardingKey {
                key: key.to_owned(),
                reason: "this service has a single transfer fare and takes no location suffix",
            });
        }
        Ok(SecondBoardingKey::Located(service, location))
    }
}

/// An immutable tariff table: one unitary fare per service, and an
/// integration matrix pricing each transfer by the pair of services and,
/// where the second service distinguishes it, the boarding location.
///
/// The table is loaded once and only read afterwards, so sharing it across
/// threads needs no locking.
///
/// # Examples
///
/// ```
/// use fare_engine::domain::{FareAmount, IntegrationLocation, ServiceType};
/// use fare_engine::tariff::FareTable;
///
/// let table = FareTable::builder()
///     .service(
///         ServiceType::Circular,
///         "Circular",
///         "Linhas circulares da área central",
///         FareAmount::from_centavos(300),
///     )
///     .service(ServiceType::Metro, "Metrô", "Linha 1", FareAmount::from_centavos(425))
///     .integration(ServiceType::Circular, ServiceType::Metro, FareAmount::from_centavos(150))
///     .build();
///
/// let fare = table
///     .integration_fare(
///         ServiceType::Circular,
///         ServiceType::Metro,
///         IntegrationLocation::OutsideStation,
///     )
///     .unwrap();
/// assert_eq!(fare, FareAmount::from_centavos(150));
/// ```
#[derive(Debug, Clone)]
pub struct FareTable {
    services: HashMap<ServiceType, ServiceTariff>,
    matrix: HashMap<ServiceType, HashMap<SecondBoardingKey, FareAmount>>,
    metropolitan_base: Option<FareAmount>,
    metadata: TariffMetadata,
}

impl FareTable {
    /// Starts building a table in code.
    pub fn builder() -> FareTableBuilder {
        FareTableBuilder::new()
    }

    /// Reads a tariff document from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TariffError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| TariffError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Parses a tariff document from JSON text.
    pub fn from_json(json: &str) -> Result<Self, TariffError> {
        Self::from_document(FareDocument::from_json(json)?)
    }

    /// Validates a parsed document against the service vocabulary.
    ///
    /// Every services key and matrix key must name a recognised service,
    /// and second-boarding keys must fit the service's tariff shape. The
    /// matrix is *not* required to be total: missing pairs are priced at
    /// lookup time by the unitary-fare fallback.
    pub fn from_document(document: FareDocument) -> Result<Self, TariffError> {
        let mut services = HashMap::new();
        for (code, entry) in document.services {
            let service =
                ServiceType::parse(&code).map_err(|_| TariffError::UnknownServiceCode { code })?;
            services.insert(
                service,
                ServiceTariff {
                    name: entry.name,
                    description: entry.description,
                    unitary_fare: entry.unitary_fare,
                },
            );
        }

        let mut matrix = HashMap::new();
        for (code, row) in document.integration_matrix.first_boarding {
            let first =
                ServiceType::parse(&code).map_err(|_| TariffError::UnknownServiceCode { code })?;
            let mut fares = HashMap::new();
            for (key, fare) in row.second_boarding {
                fares.insert(SecondBoardingKey::parse(&key)?, fare);
            }
            matrix.insert(first, fares);
        }

        let metadata = document
            .metadata
            .map(|metadata| TariffMetadata {
                source: metadata.source,
                effective_date: metadata.effective_date,
            })
            .unwrap_or_default();
        let metropolitan_base = document
            .fares
            .and_then(|fares| fares.metropolitan)
            .map(|metropolitan| metropolitan.base);

        Ok(FareTable {
            services,
            matrix,
            metropolitan_base,
            metadata,
        })
    }

    /// The flat single-boarding fare for a service.
    pub fn unitary_fare(&self, service: ServiceType) -> Result<FareAmount, FareError> {
        self.services
            .get(&service)
            .map(|tariff| tariff.unitary_fare)
            .ok_or(FareError::UnknownService(service))
    }

    /// The display name of a service, falling back to its code.
    pub fn service_name(&self, service: ServiceType) -> &str {
        self.services
            .get(&service)
            .and_then(|tariff| tariff.name.as_deref())
            .unwrap_or_else(|| service.code())
    }

    /// The description of a service, falling back to its code.
    pub fn service_description(&self, service: ServiceType) -> &str {
        self.services
            .get(&service)
            .and_then(|tariff| tariff.description.as_deref())
            .unwrap_or_else(|| service.code())
    }

    /// What boarding `second` costs right after a leg on `first`, with the
    /// transfer happening at `location`.
    ///
    /// A first service with no matrix row at all is an error: the matrix is
    /// expected to carry a row for every possible first boarding. A known
    /// first service with an untabulated pair is *not* an error; the pair
    /// is priced at the second service's unitary fare, as if the passenger
    /// had boarded fresh, and a warning is logged.
    pub fn integration_fare(
        &self,
        first: ServiceType,
        second: ServiceType,
        location: IntegrationLocation,
    ) -> Result<FareAmount, FareError> {
        let row = self
            .matrix
            .get(&first)
            .ok_or(FareError::UnknownFirstService(first))?;
        match row.get(&SecondBoardingKey::for_transfer(second, location)) {
            Some(fare) => Ok(*fare),
            None => {
                let fallback = self.unitary_fare(second)?;
                warn!(
                    first = %first,
                    second = %second,
                    location = %location,
                    "integration fare not tabulated, falling back to the unitary fare"
                );
                Ok(fallback)
            }
        }
    }

    /// The flat base fare for metropolitan (intermunicipal) routes.
    ///
    /// Falls back to [`DEFAULT_METROPOLITAN_BASE`] when the document does
    /// not carry one.
    pub fn metropolitan_base(&self) -> FareAmount {
        self.metropolitan_base.unwrap_or(DEFAULT_METROPOLITAN_BASE)
    }

    /// Provenance of the loaded data.
    pub fn metadata(&self) -> &TariffMetadata {
        &self.metadata
    }
}

/// Builder for assembling a [`FareTable`] in code.
///
/// Used by the built-in tariff data and by tests; JSON documents go
/// through [`FareTable::from_json`] instead.
#[derive(Debug)]
pub struct FareTableBuilder {
    inner: FareTable,
}

impl FareTableBuilder {
    /// Creates a builder for an empty table.
    pub fn new() -> Self {
        FareTableBuilder {
            inner: FareTable {
                services: HashMap::new(),
                matrix: HashMap::new(),
                metropolitan_base: None,
                metadata: TariffMetadata::default(),
            },
        }
    }

    /// Registers a service with its display data and unitary fare.
    pub fn service(
        mut self,
        service: ServiceType,
        name: &str,
        description: &str,
        unitary_fare: FareAmount,
    ) -> Self {
        self.inner.services.insert(
            service,
            ServiceTariff {
                name: Some(name.to_owned()),
                description: Some(description.to_owned()),
                unitary_fare,
            },
        );
        self
    }

    /// Sets the transfer fare onto `second` after `first`, for both
    /// boarding locations.
    pub fn integration(
        mut self,
        first: ServiceType,
        second: ServiceType,
        fare: FareAmount,
    ) -> Self {
        let row = self.inner.matrix.entry(first).or_default();
        row.insert(
            SecondBoardingKey::for_transfer(second, IntegrationLocation::AtStation),
            fare,
        );
        row.insert(
            SecondBoardingKey::for_transfer(second, IntegrationLocation::OutsideStation),
            fare,
        );
        self
    }

    /// Sets separate at-station and outside-station transfer fares onto
    /// `second` after `first`.
    ///
    /// Only meaningful when `second` is priced by boarding location; for a
    /// flat service both values land on the same entry and the
    /// outside-station one wins.
    pub fn located_integration(
        mut self,
        first: ServiceType,
        second: ServiceType,
        at_station: FareAmount,
        outside_station: FareAmount,
    ) -> Self {
        let row = self.inner.matrix.entry(first).or_default();
        row.insert(
            SecondBoardingKey::for_transfer(second, IntegrationLocation::AtStation),
            at_station,
        );
        row.insert(
            SecondBoardingKey::for_transfer(second, IntegrationLocation::OutsideStation),
            outside_station,
        );
        self
    }

    /// Sets the flat base fare for metropolitan routes.
    pub fn metropolitan_base(mut self, base: FareAmount) -> Self {
        self.inner.metropolitan_base = Some(base);
        self
    }

    /// Records where the tariff data came from.
    pub fn metadata(mut self, source: &str, effective_date: Option<NaiveDate>) -> Self {
        self.inner.metadata = TariffMetadata {
            source: Some(source.to_owned()),
            effective_date,
        };
        self
    }

    /// Finishes the table.
    pub fn build(self) -> FareTable {
        self.inner
    }
}

impl Default for FareTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}
