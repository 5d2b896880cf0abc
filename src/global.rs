//! Process-wide default service against the production endpoint.

use std::sync::OnceLock;

use crate::config::ServiceConfig;
use crate::error::ViesError;
use crate::service::{Service, ValidationResult};

static DEFAULT_SERVICE: OnceLock<Result<Service, String>> = OnceLock::new();

/// The shared production [`Service`], built on first use.
///
/// Concurrent first callers block until the single instance exists. A failed
/// build is not retried; every later call reports the same error.
///
/// # Errors
///
/// [`ViesError::Setup`] if the HTTP client could not be built.
pub fn default_service() -> Result<&'static Service, ViesError> {
    DEFAULT_SERVICE
        .get_or_init(|| {
            tracing::debug!("initialising default VIES service");
            Service::from_config(ServiceConfig::production()).map_err(|e| e.to_string())
        })
        .as_ref()
        .map_err(|e| ViesError::Setup(e.clone()))
}

/// Check a full VAT number (`"NL123456789B01"`) with the default service.
///
/// ```no_run
/// # async fn run() -> Result<(), vies::ViesError> {
/// let vat = vies::check_vat("NL123456789B01").await?;
/// println!("valid: {}", vat.valid);
/// # Ok(())
/// # }
/// ```
pub async fn check_vat(full_vat_number: &str) -> Result<ValidationResult, ViesError> {
    default_service()?.check_vat(full_vat_number).await
}

/// Check a VAT number for an explicit country with the default service.
///
/// `vat_number` may carry the country prefix or not, as long as it matches.
pub async fn check_vat_with_country(
    country_code: &str,
    vat_number: &str,
) -> Result<ValidationResult, ViesError> {
    default_service()?
        .check_vat_with_country(country_code, vat_number)
        .await
}
