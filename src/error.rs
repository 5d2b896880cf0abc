use thiserror::Error;

/// The fault codes VIES can report.
///
/// Every variant corresponds to one `faultstring` token of the SOAP
/// interface. Local input validation reports [`FaultKind::InvalidInput`]
/// too, so callers handle both the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum FaultKind {
    /// The country code or VAT number is malformed.
    #[error("INVALID_INPUT")]
    InvalidInput,
    /// Requester information is invalid.
    #[error("INVALID_REQUESTER_INFO")]
    InvalidRequesterInfo,
    /// VIES itself is unavailable. Also used for unknown fault tokens.
    #[error("SERVICE_UNAVAILABLE")]
    ServiceUnavailable,
    /// The member state's national service is unavailable.
    #[error("MS_UNAVAILABLE")]
    MsUnavailable,
    /// The member state did not answer in time.
    #[error("TIMEOUT")]
    Timeout,
    /// The VAT number is blocked from querying.
    #[error("VAT_BLOCKED")]
    VatBlocked,
    /// The requesting IP address is blocked.
    #[error("IP_BLOCKED")]
    IpBlocked,
    /// Too many concurrent requests across VIES.
    #[error("GLOBAL_MAX_CONCURRENT_REQ")]
    GlobalMaxConcurrentReq,
    /// Too many concurrent requests across VIES within the time window.
    #[error("GLOBAL_MAX_CONCURRENT_REQ_TIME")]
    GlobalMaxConcurrentReqTime,
    /// Too many concurrent requests to this member state.
    #[error("MS_MAX_CONCURRENT_REQ")]
    MsMaxConcurrentReq,
    /// Too many concurrent requests to this member state within the time window.
    #[error("MS_MAX_CONCURRENT_REQ_TIME")]
    MsMaxConcurrentReqTime,
}

impl FaultKind {
    pub const ALL: [FaultKind; 11] = [
        Self::InvalidInput,
        Self::InvalidRequesterInfo,
        Self::ServiceUnavailable,
        Self::MsUnavailable,
        Self::Timeout,
        Self::VatBlocked,
        Self::IpBlocked,
        Self::GlobalMaxConcurrentReq,
        Self::GlobalMaxConcurrentReqTime,
        Self::MsMaxConcurrentReq,
        Self::MsMaxConcurrentReqTime,
    ];

    /// The `faultstring` token VIES uses for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidInput => "INVALID_INPUT",
            Self::InvalidRequesterInfo => "INVALID_REQUESTER_INFO",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::MsUnavailable => "MS_UNAVAILABLE",
            Self::Timeout => "TIMEOUT",
            Self::VatBlocked => "VAT_BLOCKED",
            Self::IpBlocked => "IP_BLOCKED",
            Self::GlobalMaxConcurrentReq => "GLOBAL_MAX_CONCURRENT_REQ",
            Self::GlobalMaxConcurrentReqTime => "GLOBAL_MAX_CONCURRENT_REQ_TIME",
            Self::MsMaxConcurrentReq => "MS_MAX_CONCURRENT_REQ",
            Self::MsMaxConcurrentReqTime => "MS_MAX_CONCURRENT_REQ_TIME",
        }
    }

    /// Strict lookup of a fault token. Returns `None` for unknown tokens.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == token)
    }

    /// Classify a fault token, falling back to [`FaultKind::ServiceUnavailable`].
    pub fn classify(token: &str) -> Self {
        Self::from_token(token).unwrap_or(Self::ServiceUnavailable)
    }
}

/// Errors returned by the VIES client.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ViesError {
    /// Input rejected locally, before any request was sent.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: &'static str },

    /// VIES answered with a SOAP fault.
    #[error("request failed with code {kind}")]
    Fault {
        #[source]
        kind: FaultKind,
        /// The raw `faultstring`, kept for tokens that classified to the fallback.
        token: String,
    },

    /// Connection failure, HTTP timeout, or unreadable response body.
    #[error("VIES network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response was not a well-formed XML document.
    #[error("VIES parse error: {0}")]
    Parse(String),

    /// The shared default service could not be built.
    #[error("VIES client setup failed: {0}")]
    Setup(String),
}

impl ViesError {
    pub(crate) fn invalid_input(reason: &'static str) -> Self {
        Self::InvalidInput { reason }
    }

    pub(crate) fn fault(token: &str) -> Self {
        Self::Fault {
            kind: FaultKind::classify(token),
            token: token.to_string(),
        }
    }

    /// The fault kind behind this error, if it is one.
    ///
    /// Local validation failures report [`FaultKind::InvalidInput`].
    /// Network, parse and setup errors have no kind.
    pub fn kind(&self) -> Option<FaultKind> {
        match self {
            Self::InvalidInput { .. } => Some(FaultKind::InvalidInput),
            Self::Fault { kind, .. } => Some(*kind),
            Self::Network(_) | Self::Parse(_) | Self::Setup(_) => None,
        }
    }

    /// Whether this error is of the given kind.
    pub fn is(&self, kind: FaultKind) -> bool {
        self.kind() == Some(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn every_token_classifies_to_itself() {
        for kind in FaultKind::ALL {
            assert_eq!(FaultKind::classify(kind.as_str()), kind);
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }

    #[test]
    fn unknown_token_falls_back() {
        assert_eq!(FaultKind::from_token("SOMETHING_NEW"), None);
        assert_eq!(FaultKind::classify("SOMETHING_NEW"), FaultKind::ServiceUnavailable);
        assert_eq!(FaultKind::classify(""), FaultKind::ServiceUnavailable);
        assert_eq!(FaultKind::classify("invalid_input"), FaultKind::ServiceUnavailable);
    }

    #[test]
    fn fault_wraps_kind() {
        let err = ViesError::fault("VAT_BLOCKED");
        assert!(err.is(FaultKind::VatBlocked));
        assert!(!err.is(FaultKind::IpBlocked));
        assert_eq!(err.to_string(), "request failed with code VAT_BLOCKED");

        let source = err.source().and_then(|s| s.downcast_ref::<FaultKind>());
        assert_eq!(source, Some(&FaultKind::VatBlocked));
    }

    #[test]
    fn unknown_fault_keeps_raw_token() {
        let err = ViesError::fault("BRAND_NEW_CODE");
        assert!(err.is(FaultKind::ServiceUnavailable));
        match err {
            ViesError::Fault { token, .. } => assert_eq!(token, "BRAND_NEW_CODE"),
            other => panic!("expected fault, got {other:?}"),
        }
    }

    #[test]
    fn local_rejection_is_invalid_input() {
        let err = ViesError::invalid_input("too short");
        assert!(err.is(FaultKind::InvalidInput));
        assert!(err.source().is_none());
    }

    #[test]
    fn parse_error_has_no_kind() {
        let err = ViesError::Parse("unexpected end of document".into());
        assert_eq!(err.kind(), None);
        let err = ViesError::Setup("no TLS backend".into());
        assert_eq!(err.kind(), None);
    }
}
