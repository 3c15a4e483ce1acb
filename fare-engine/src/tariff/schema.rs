//! Serde types mirroring the tariff JSON document.
//!
//! These structs follow the document's shape, including its `1st_boarding`
//! and `2nd_boarding` wrapper keys, and keep service codes as plain strings.
//! Validation against the closed service vocabulary happens when the
//! document is converted into a [`FareTable`].
//!
//! [`FareTable`]: crate::tariff::FareTable

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::FareAmount;

/// A complete tariff document, as published.
#[derive(Debug, Clone, Deserialize)]
pub struct FareDocument {
    /// Provenance of the document.
    #[serde(default)]
    pub metadata: Option<DocumentMetadata>,
    /// Per-service display data and unitary fares, keyed by service code.
    pub services: HashMap<String, ServiceEntry>,
    /// The integration matrix: what the second boarding costs.
    pub integration_matrix: IntegrationMatrix,
    /// Fares outside the integration matrix, such as the metropolitan base.
    #[serde(default)]
    pub fares: Option<ExtraFares>,
}

impl FareDocument {
    /// Parses a tariff document from JSON text.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Provenance fields carried alongside the tariff data.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentMetadata {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub effective_date: Option<NaiveDate>,
}

/// One entry of the `services` map.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub unitary_fare: FareAmount,
}

/// The `integration_matrix` object.
#[derive(Debug, Clone, Deserialize)]
pub struct IntegrationMatrix {
    /// Rows keyed by the first boarding's service code.
    #[serde(rename = "1st_boarding")]
    pub first_boarding: HashMap<String, MatrixRow>,
}

/// One row of the matrix.
#[derive(Debug, Clone, Deserialize)]
pub struct MatrixRow {
    /// Fares keyed by the second boarding: a bare service code, or a code
    /// suffixed `_at_station` / `_outside_station` for services priced by
    /// boarding location.
    #[serde(rename = "2nd_boarding")]
    pub second_boarding: HashMap<String, FareAmount>,
}

/// The optional `fares` object for prices outside the matrix.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExtraFares {
    #[serde(default)]
    pub metropolitan: Option<MetropolitanFares>,
}

/// Metropolitan (intermunicipal) fares.
#[derive(Debug, Clone, Deserialize)]
pub struct MetropolitanFares {
    /// Flat base fare for a metropolitan route.
    pub base: FareAmount,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "metadata": {
            "source": "test table",
            "effective_date": "2025-01-06"
        },
        "services": {
            "circular": { "name": "Circular", "unitary_fare": 3.0 },
            "metro": { "name": "Metro", "description": "Linha 1", "unitary_fare": 4.25 }
        },
        "integration_matrix": {
            "1st_boarding": {
                "circular": {
                    "2nd_boarding": {
                        "metro": 1.5,
                        "alimentadoras_at_station": 0.0,
                        "alimentadoras_outside_station": 2.15
                    }
                }
            }
        },
        "fares": {
            "metropolitan": { "base": 5.75 }
        }
    }"#;

    #[test]
    fn parses_the_published_shape() {
        let document = FareDocument::from_json(SAMPLE).unwrap();

        let metadata = document.metadata.unwrap();
        assert_eq!(metadata.source.as_deref(), Some("test table"));
        assert_eq!(
            metadata.effective_date,
            NaiveDate::from_ymd_opt(2025, 1, 6)
        );

        let circular = &document.services["circular"];
        assert_eq!(circular.name.as_deref(), Some("Circular"));
        assert_eq!(circular.description, None);
        assert_eq!(circular.unitary_fare, FareAmount::from_centavos(300));

        let row = &document.integration_matrix.first_boarding["circular"];
        assert_eq!(
            row.second_boarding["metro"],
            FareAmount::from_centavos(150)
        );
        assert_eq!(
            row.second_boarding["alimentadoras_at_station"],
            FareAmount::ZERO
        );

        let base = document.fares.unwrap().metropolitan.unwrap().base;
        assert_eq!(base, FareAmount::from_centavos(575));
    }

    #[test]
    fn metadata_and_fares_are_optional() {
        let document = FareDocument::from_json(
            r#"{
                "services": { "metro": { "unitary_fare": 4.25 } },
                "integration_matrix": { "1st_boarding": {} }
            }"#,
        )
        .unwrap();
        assert!(document.metadata.is_none());
        assert!(document.fares.is_none());
        assert_eq!(document.services["metro"].name, None);
    }

    #[test]
    fn negative_fares_fail_to_parse() {
        let result = FareDocument::from_json(
            r#"{
                "services": { "metro": { "unitary_fare": -4.25 } },
                "integration_matrix": { "1st_boarding": {} }
            }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn missing_wrapper_key_fails_to_parse() {
        // The 1st_boarding wrapper is part of the published shape
        let result = FareDocument::from_json(
            r#"{
                "services": {},
                "integration_matrix": {}
            }"#,
        );
        assert!(result.is_err());
    }
}
