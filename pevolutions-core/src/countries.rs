//! Fixed country catalog used by registration and profile settings.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    /// ISO 3166-1 alpha-2, uppercase.
    pub code: &'static str,
    pub name: &'static str,
}

const fn c(code: &'static str, name: &'static str) -> Country {
    Country { code, name }
}

pub const COUNTRIES: &[Country] = &[
    c("AR", "Argentina"),
    c("AU", "Australia"),
    c("AT", "Austria"),
    c("BE", "Belgium"),
    c("BO", "Bolivia"),
    c("BR", "Brazil"),
    c("CA", "Canada"),
    c("CL", "Chile"),
    c("CN", "China"),
    c("CO", "Colombia"),
    c("CR", "Costa Rica"),
    c("CU", "Cuba"),
    c("CZ", "Czechia"),
    c("DK", "Denmark"),
    c("DO", "Dominican Republic"),
    c("EC", "Ecuador"),
    c("EG", "Egypt"),
    c("SV", "El Salvador"),
    c("FI", "Finland"),
    c("FR", "France"),
    c("DE", "Germany"),
    c("GR", "Greece"),
    c("GT", "Guatemala"),
    c("HN", "Honduras"),
    c("IN", "India"),
    c("ID", "Indonesia"),
    c("IE", "Ireland"),
    c("IL", "Israel"),
    c("IT", "Italy"),
    c("JP", "Japan"),
    c("KR", "South Korea"),
    c("MX", "Mexico"),
    c("MA", "Morocco"),
    c("NL", "Netherlands"),
    c("NZ", "New Zealand"),
    c("NI", "Nicaragua"),
    c("NO", "Norway"),
    c("PA", "Panama"),
    c("PY", "Paraguay"),
    c("PE", "Peru"),
    c("PH", "Philippines"),
    c("PL", "Poland"),
    c("PT", "Portugal"),
    c("PR", "Puerto Rico"),
    c("RO", "Romania"),
    c("RU", "Russia"),
    c("SA", "Saudi Arabia"),
    c("ZA", "South Africa"),
    c("ES", "Spain"),
    c("SE", "Sweden"),
    c("CH", "Switzerland"),
    c("TH", "Thailand"),
    c("TR", "Turkey"),
    c("UA", "Ukraine"),
    c("GB", "United Kingdom"),
    c("US", "United States"),
    c("UY", "Uruguay"),
    c("VE", "Venezuela"),
    c("VN", "Vietnam"),
];

/// Case-insensitive lookup by code.
#[must_use]
pub fn find(code: &str) -> Option<&'static Country> {
    let code = code.trim();
    COUNTRIES.iter().find(|c| c.code.eq_ignore_ascii_case(code))
}

/// Countries whose name or code contains `query`, ignoring case. An empty query
/// returns the whole catalog in catalog order.
#[must_use]
pub fn search(query: &str) -> Vec<&'static Country> {
    let needle = query.trim().to_lowercase();
    COUNTRIES
        .iter()
        .filter(|c| {
            needle.is_empty()
                || c.name.to_lowercase().contains(&needle)
                || c.code.to_lowercase().contains(&needle)
        })
        .collect()
}

#[must_use]
pub fn flag_url(code: &str, width: u32) -> String {
    format!(
        "https://flagcdn.com/w{width}/{}.png",
        code.trim().to_lowercase()
    )
}

/// A country code known to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryCode(String);

impl CountryCode {
    /// Normalise and validate a user-supplied code.
    ///
    /// # Errors
    ///
    /// `MissingCountry` for blank input, `UnknownCountry` when the code is not
    /// in [`COUNTRIES`].
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::MissingCountry);
        }
        find(trimmed)
            .map(|country| Self(country.code.to_string()))
            .ok_or_else(|| ValidationError::UnknownCountry(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Catalog entry, if the stored code is still known.
    #[must_use]
    pub fn country(&self) -> Option<&'static Country> {
        find(&self.0)
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
