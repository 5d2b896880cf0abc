use reqwest::header::{CONTENT_TYPE, USER_AGENT};

use crate::config::ServiceConfig;
use crate::error::{FaultKind, ViesError};
use crate::soap::{self, CheckVatResponse, Envelope};

const AGENT: &str = concat!("vies-rs/", env!("CARGO_PKG_VERSION"));

/// HTTP side of a VIES call: one POST per check, no retries.
#[derive(Debug, Clone)]
pub(crate) struct Transport {
    config: ServiceConfig,
    client: reqwest::Client,
}

impl Transport {
    pub(crate) fn new(config: ServiceConfig, client: reqwest::Client) -> Self {
        Self { config, client }
    }

    pub(crate) fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Send a `checkVat` request and return the success payload.
    ///
    /// The HTTP status is not checked: VIES reports faults as HTTP 500 with a
    /// SOAP fault body, so the body is always parsed.
    pub(crate) async fn request(
        &self,
        country_code: &str,
        vat_number: &str,
    ) -> Result<CheckVatResponse, ViesError> {
        let body = soap::build_request(country_code, vat_number);

        tracing::debug!(
            country_code,
            endpoint = %self.config.endpoint,
            "sending VIES checkVat request"
        );

        let resp = self
            .client
            .post(&self.config.endpoint)
            .timeout(self.config.timeout)
            .header(CONTENT_TYPE, "text/xml")
            .header(CONTENT_TYPE, "charset=utf-8")
            .header("SOAPAction", "checkVat")
            .header(USER_AGENT, AGENT)
            .body(body)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;
        tracing::debug!(status = %status, bytes = text.len(), "VIES response received");

        match soap::parse_envelope(&text)? {
            Envelope::Response(response) => Ok(response),
            Envelope::Fault(token) => {
                if FaultKind::from_token(&token).is_none() {
                    tracing::warn!(token = %token, "unknown VIES fault code, treating as SERVICE_UNAVAILABLE");
                } else {
                    tracing::debug!(token = %token, "VIES returned a fault");
                }
                Err(ViesError::fault(&token))
            }
        }
    }
}
