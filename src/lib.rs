//! # vies
//!
//! Client for the EU VIES (VAT Information Exchange System) `checkVat` SOAP
//! service. Validates a VAT number with the member state that issued it and
//! returns the registered name and address where the member state discloses
//! them.
//!
//! ## Quick Start
//!
//! ```no_run
//! # async fn run() -> Result<(), vies::ViesError> {
//! use vies::{FaultKind, Service, TEST_ENDPOINT};
//!
//! let svc = Service::new(TEST_ENDPOINT)?;
//! match svc.check_vat_with_country("NL", "100").await {
//!     Ok(vat) => println!("{}{} valid={}", vat.country_code, vat.vat_number, vat.valid),
//!     Err(e) if e.is(FaultKind::MsUnavailable) => println!("member state offline, try later"),
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Input is checked locally first: numbers of two characters or fewer and
//! country codes VIES does not serve fail with [`FaultKind::InvalidInput`]
//! without a request. Faults reported by VIES come back as
//! [`ViesError::Fault`]; test for a kind with [`ViesError::is`].
//!
//! The crate does not retry. Dropping the future cancels the request.

pub mod countries;
pub mod soap;

mod config;
mod error;
mod global;
mod service;
mod transport;

pub use config::{DEFAULT_TIMEOUT, PRODUCTION_ENDPOINT, ServiceConfig, TEST_ENDPOINT};
pub use countries::is_valid_country;
pub use error::{FaultKind, ViesError};
pub use global::{check_vat, check_vat_with_country, default_service};
pub use service::{Service, ValidationResult, resolve_vat_number, split_vat_number};
