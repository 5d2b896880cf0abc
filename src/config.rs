use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Production endpoint of the VIES `checkVat` SOAP service.
pub const PRODUCTION_ENDPOINT: &str =
    "https://ec.europa.eu/taxation_customs/vies/services/checkVatService";

/// Test endpoint. Answers with canned results for the VIES test numbers
/// (`100` valid, `200` invalid, `201`..`601` faults).
pub const TEST_ENDPOINT: &str =
    "https://ec.europa.eu/taxation_customs/vies/services/checkVatTestService";

/// Request timeout used when none is given.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Endpoint and timeout of a [`Service`](crate::Service).
///
/// Serializes the timeout as whole seconds:
///
/// ```toml
/// endpoint = "https://ec.europa.eu/taxation_customs/vies/services/checkVatService"
/// timeout_secs = 10
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub endpoint: String,
    #[serde(rename = "timeout_secs", with = "secs", default = "default_timeout")]
    pub timeout: Duration,
}

impl ServiceConfig {
    pub fn production() -> Self {
        Self {
            endpoint: PRODUCTION_ENDPOINT.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn test() -> Self {
        Self {
            endpoint: TEST_ENDPOINT.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::production()
    }
}

fn default_timeout() -> Duration {
    DEFAULT_TIMEOUT
}

mod secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}
