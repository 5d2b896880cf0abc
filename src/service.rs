use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::ServiceConfig;
use crate::countries::is_valid_country;
use crate::error::ViesError;
use crate::soap::CheckVatResponse;
use crate::transport::Transport;

/// Result of a VIES VAT number check.
///
/// `valid == false` is a normal answer, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Country code as echoed by VIES.
    pub country_code: String,
    /// VAT number without the country prefix, as echoed by VIES.
    pub vat_number: String,
    /// Whether the VAT number is currently valid.
    pub valid: bool,
    /// Registered trader name (if the member state discloses it).
    pub name: Option<String>,
    /// Registered trader address (if the member state discloses it).
    pub address: Option<String>,
}

/// VIES sends `---` when a member state withholds name or address.
fn disclosed(value: String) -> Option<String> {
    Some(value).filter(|v| !v.is_empty() && v != "---")
}

impl From<CheckVatResponse> for ValidationResult {
    fn from(resp: CheckVatResponse) -> Self {
        Self {
            country_code: resp.country_code,
            vat_number: resp.vat_number,
            valid: resp.valid,
            name: disclosed(resp.name),
            address: disclosed(resp.address),
        }
    }
}

/// Split a full VAT number (`"NL123456789B01"`) into country code and body.
///
/// # Errors
///
/// [`ViesError::InvalidInput`] if the input is two bytes or shorter, or the
/// first two bytes are not a complete character.
pub fn split_vat_number(full_vat_number: &str) -> Result<(&str, &str), ViesError> {
    if full_vat_number.len() <= 2 {
        return Err(ViesError::invalid_input("VAT number too short"));
    }
    match (full_vat_number.get(..2), full_vat_number.get(2..)) {
        (Some(country), Some(number)) => Ok((country, number)),
        _ => Err(ViesError::invalid_input("VAT number has no two-letter country prefix")),
    }
}

/// Strip a redundant country prefix from `vat_number` when it matches
/// `country_code` exactly. Otherwise `vat_number` is returned unchanged.
///
/// # Errors
///
/// [`ViesError::InvalidInput`] if `vat_number` is two bytes or shorter.
pub fn resolve_vat_number<'a>(country_code: &str, vat_number: &'a str) -> Result<&'a str, ViesError> {
    if vat_number.len() <= 2 {
        return Err(ViesError::invalid_input("VAT number too short"));
    }
    match (vat_number.get(..2), vat_number.get(2..)) {
        (Some(prefix), Some(rest)) if prefix == country_code => Ok(rest),
        _ => Ok(vat_number),
    }
}

/// A VIES client bound to one endpoint.
///
/// Holds no per-request state; clone it or share it behind a reference
/// across tasks.
#[derive(Debug, Clone)]
pub struct Service {
    transport: Transport,
}

impl Service {
    /// Create a service with the default 10 second timeout.
    ///
    /// Pass [`PRODUCTION_ENDPOINT`](crate::PRODUCTION_ENDPOINT),
    /// [`TEST_ENDPOINT`](crate::TEST_ENDPOINT), or any URL (a proxy, a mock).
    ///
    /// # Errors
    ///
    /// [`ViesError::Network`] if the HTTP client cannot be built (TLS backend
    /// initialisation failed).
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ViesError> {
        Self::from_config(ServiceConfig::default().endpoint(endpoint))
    }

    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ViesError> {
        Self::from_config(ServiceConfig::default().endpoint(endpoint).timeout(timeout))
    }

    pub fn from_config(config: ServiceConfig) -> Result<Self, ViesError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self::with_client(config, client))
    }

    /// Use a preconfigured HTTP client (proxy, TLS roots, connection pool).
    /// The configured timeout is applied on top of the client's own.
    pub fn with_client(config: ServiceConfig, client: reqwest::Client) -> Self {
        Self {
            transport: Transport::new(config, client),
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        self.transport.config()
    }

    /// Check a VAT number that starts with its country code, e.g. `"NL123456789B01"`.
    ///
    /// Returns `Ok` with `valid == false` for numbers VIES does not know.
    ///
    /// # Errors
    ///
    /// - [`ViesError::InvalidInput`] for short input or an unknown country code
    /// - [`ViesError::Fault`] when VIES answers with a fault
    /// - [`ViesError::Network`] / [`ViesError::Parse`] for transport failures
    pub async fn check_vat(&self, full_vat_number: &str) -> Result<ValidationResult, ViesError> {
        let (country_code, vat_number) = split_vat_number(full_vat_number)?;
        self.check(country_code, vat_number).await
    }

    /// Check a VAT number for an explicit country.
    ///
    /// `vat_number` may repeat the country prefix (`"NL123456789B01"`) or omit
    /// it (`"123456789B01"`); both send the same request.
    ///
    /// # Errors
    ///
    /// Same as [`Service::check_vat`].
    pub async fn check_vat_with_country(
        &self,
        country_code: &str,
        vat_number: &str,
    ) -> Result<ValidationResult, ViesError> {
        let vat_number = resolve_vat_number(country_code, vat_number)?;
        self.check(country_code, vat_number).await
    }

    async fn check(&self, country_code: &str, vat_number: &str) -> Result<ValidationResult, ViesError> {
        if !is_valid_country(country_code) {
            return Err(ViesError::invalid_input("unknown country code"));
        }

        let resp = self.transport.request(country_code, vat_number).await?;
        Ok(resp.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FaultKind;

    #[test]
    fn split_full_number() {
        assert_eq!(split_vat_number("NL123456789B01").unwrap(), ("NL", "123456789B01"));
        assert_eq!(split_vat_number("DE1").unwrap(), ("DE", "1"));
    }

    #[test]
    fn split_rejects_short() {
        for input in ["", "N", "NL"] {
            assert!(split_vat_number(input).unwrap_err().is(FaultKind::InvalidInput));
        }
    }

    #[test]
    fn split_rejects_broken_char_boundary() {
        // "é" is two bytes, so byte 2 falls inside "ü"
        assert!(split_vat_number("éü12").is_ok());
        assert!(split_vat_number("aü12").unwrap_err().is(FaultKind::InvalidInput));
    }

    #[test]
    fn resolve_strips_matching_prefix() {
        assert_eq!(resolve_vat_number("NL", "NL123456789B01").unwrap(), "123456789B01");
        assert_eq!(resolve_vat_number("NL", "123456789B01").unwrap(), "123456789B01");
    }

    #[test]
    fn resolve_keeps_other_prefix() {
        assert_eq!(resolve_vat_number("NL", "DE123").unwrap(), "DE123");
        assert_eq!(resolve_vat_number("NL", "nl123").unwrap(), "nl123");
    }

    #[test]
    fn resolve_rejects_short() {
        assert!(resolve_vat_number("NL", "12").unwrap_err().is(FaultKind::InvalidInput));
        assert!(resolve_vat_number("NL", "NL").unwrap_err().is(FaultKind::InvalidInput));
    }

    #[test]
    fn withheld_details_become_none() {
        let result = ValidationResult::from(CheckVatResponse {
            country_code: "DE".into(),
            vat_number: "123456789".into(),
            valid: true,
            name: "---".into(),
            address: String::new(),
        });
        assert!(result.valid);
        assert_eq!(result.name, None);
        assert_eq!(result.address, None);
    }

    #[test]
    fn construction_keeps_config() {
        let svc = Service::with_timeout("http://localhost:9/vies", Duration::from_secs(3)).unwrap();
        assert_eq!(svc.config().endpoint, "http://localhost:9/vies");
        assert_eq!(svc.config().timeout, Duration::from_secs(3));
    }

    #[test]
    fn service_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Service>();
    }
}
