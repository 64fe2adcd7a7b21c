use std::sync::Arc;

/// Mediation protocol generation to target.
///
/// The auction service runs two wire protocol versions side by side; which
/// one a fetcher talks to is resolved from configuration at construction,
/// not by a build-time switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProtocolVersion {
    V1,
    #[default]
    V2,
}

/// Configuration for an interstitial fetcher.
///
/// # Examples
///
/// ```
/// use adfetch::FetchConfig;
///
/// let config = FetchConfig::default()
///     .placement_id("12345")
///     .result_cb_template("https://track.example.com/cb?r={reason}&a={auction_id}")
///     .header("User-Agent", "HostApp/1.0");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FetchConfig {
    /// Which mediation protocol generation to target.
    ///
    /// Default: [`ProtocolVersion::V2`]
    pub protocol_version: ProtocolVersion,

    /// Full endpoint URL overriding protocol-version resolution.
    ///
    /// Default: none
    pub endpoint_override: Option<String>,

    /// Placement identifier included in auction requests.
    ///
    /// Default: none
    pub placement_id: Option<String>,

    /// Result-callback template dispatched as a tracking beacon on every
    /// outcome. `{reason}` and `{auction_id}` tokens are substituted; a
    /// template without tokens gets them appended as query parameters.
    ///
    /// Default: none (no beacon fired)
    pub result_cb_template: Option<String>,

    /// Custom HTTP headers sent with auction requests.
    ///
    /// Default: empty
    pub headers: Arc<[(String, String)]>,
}

impl FetchConfig {
    /// Set the protocol version.
    #[must_use]
    pub fn protocol_version(mut self, version: ProtocolVersion) -> Self {
        self.protocol_version = version;
        self
    }

    /// Override the mediation endpoint URL entirely.
    ///
    /// Takes precedence over [`protocol_version`](Self::protocol_version)
    /// resolution.
    #[must_use]
    pub fn endpoint_override(mut self, url: impl Into<String>) -> Self {
        self.endpoint_override = Some(url.into());
        self
    }

    /// Set the placement identifier.
    #[must_use]
    pub fn placement_id(mut self, id: impl Into<String>) -> Self {
        self.placement_id = Some(id.into());
        self
    }

    /// Set the result-callback template.
    #[must_use]
    pub fn result_cb_template(mut self, template: impl Into<String>) -> Self {
        self.result_cb_template = Some(template.into());
        self
    }

    /// Add a single custom HTTP header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut headers: Vec<_> = self.headers.iter().cloned().collect();
        headers.push((key.into(), value.into()));
        self.headers = Arc::from(headers);
        self
    }
}
