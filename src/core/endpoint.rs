use crate::data::ProtocolVersion;
use crate::error::FetchError;

/// Default mediation endpoint for the legacy v1 protocol.
pub const DEFAULT_ENDPOINT_V1: &str = "http://mediation.adnxs.com/ut/v1";

/// Default mediation endpoint for the v2 protocol.
pub const DEFAULT_ENDPOINT_V2: &str = "http://mediation.adnxs.com/ut/v2";

/// Resolve the mediation endpoint for a fetcher.
///
/// An explicit override wins; otherwise the protocol version selects the
/// default endpoint. Overrides must be absolute http(s) URLs.
///
/// # Examples
///
/// ```
/// use adfetch::core::resolve_endpoint;
/// use adfetch::ProtocolVersion;
///
/// let url = resolve_endpoint(ProtocolVersion::V2, None).unwrap();
/// assert_eq!(url, "http://mediation.adnxs.com/ut/v2");
/// ```
pub fn resolve_endpoint(
    version: ProtocolVersion,
    endpoint_override: Option<&str>,
) -> Result<String, FetchError> {
    match endpoint_override {
        Some(url) => {
            if url.starts_with("http://") || url.starts_with("https://") {
                Ok(url.to_owned())
            } else {
                Err(FetchError::InvalidEndpoint(url.to_owned()))
            }
        }
        None => Ok(match version {
            ProtocolVersion::V1 => DEFAULT_ENDPOINT_V1.to_owned(),
            ProtocolVersion::V2 => DEFAULT_ENDPOINT_V2.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_v1_default() {
        let url = resolve_endpoint(ProtocolVersion::V1, None).unwrap();
        assert_eq!(url, DEFAULT_ENDPOINT_V1);
    }

    #[test]
    fn resolves_v2_default() {
        let url = resolve_endpoint(ProtocolVersion::V2, None).unwrap();
        assert_eq!(url, DEFAULT_ENDPOINT_V2);
    }

    #[test]
    fn override_wins_over_version() {
        let url = resolve_endpoint(
            ProtocolVersion::V1,
            Some("https://staging.mediation.example.com/ut"),
        )
        .unwrap();
        assert_eq!(url, "https://staging.mediation.example.com/ut");
    }

    #[test]
    fn rejects_non_http_override() {
        let err = resolve_endpoint(ProtocolVersion::V2, Some("ftp://bad.example.com"));
        assert!(matches!(err, Err(FetchError::InvalidEndpoint(_))));
    }
}
