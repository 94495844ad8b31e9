// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The proxied probe request.
//!
//! [`ProbeConfig`] carries everything the probe needs: the target URL and the
//! per-scheme SOCKS5 proxies.  [`ProbeConfig::run`] issues exactly one
//! blocking GET request routed through the proxy and returns a typed
//! outcome: an HTTP response of any status as [`ProbeResponse`], or a
//! [`TransportError`] when no complete response arrived.  There are no
//! retries, and no explicit timeout is configured; the HTTP client's default
//! timeout behavior applies as-is.

use url::Url;

use crate::error::TransportError;
use crate::proxies::SocksProxies;
use crate::types::ProxyResolver;

/// The SOCKS5 endpoint probed when no other configuration is given.
pub const DEFAULT_PROXY_ENDPOINT: &str = "socks5://127.0.0.1:6969";

/// The URL fetched through the proxy when no other configuration is given.
///
/// The service returns a JSON description of the caller's public IP, which
/// makes it easy to see at a glance whether traffic really left through the
/// proxy.  The probe treats the payload as opaque text.
pub const DEFAULT_TARGET: &str = "https://ipwho.is";

/// Settings for one probe request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// The URL to fetch.
    pub target: Url,
    /// The proxies to route the request through.
    pub proxies: SocksProxies,
}

static_assertions::assert_impl_all!(ProbeConfig: Send, Sync);

impl Default for ProbeConfig {
    /// Probe [`DEFAULT_TARGET`] through [`DEFAULT_PROXY_ENDPOINT`].
    ///
    /// Both values are fixed literals; the environment, command line and any
    /// configuration files are ignored entirely.
    fn default() -> Self {
        let endpoint = Url::parse(DEFAULT_PROXY_ENDPOINT)
            .expect("default proxy endpoint is a valid URL");
        Self {
            target: Url::parse(DEFAULT_TARGET).expect("default target is a valid URL"),
            proxies: SocksProxies::shared(endpoint)
                .expect("default proxy endpoint is a valid socks5 URL"),
        }
    }
}

/// A complete HTTP response received through the proxy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResponse {
    /// The numeric HTTP status code.
    pub status: u16,
    /// The response body, decoded as text.
    pub body: String,
}

impl ProbeResponse {
    /// Whether the response carries status 200.
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

impl ProbeConfig {
    /// Issue the probe request.
    ///
    /// Send a single GET request to [`Self::target`], routed through the
    /// proxy [`Self::proxies`] resolves for the target's scheme.  Return the
    /// response regardless of its status code, or a [`TransportError`] if no
    /// complete response arrived.  The request is never retried.
    pub fn run(&self) -> Result<ProbeResponse, TransportError> {
        let resolver = self.proxies.clone();
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .proxy(reqwest::Proxy::custom(move |url| {
                let proxy_url = resolver.for_url(url);
                match &proxy_url {
                    None => log::debug!("Using direct connection for URL {}", url),
                    Some(u) => log::debug!("Using proxy {} for URL {}", u, url),
                }
                proxy_url
            }))
            .build()?;

        log::info!("Sending GET request to {}", self.target);
        let response = client.get(self.target.clone()).send()?;
        let status = response.status().as_u16();
        log::info!("Received response with status {}", status);
        let body = response.text()?;
        Ok(ProbeResponse { status, body })
    }
}

/// Render a probe outcome as the line the console reporter prints.
///
/// Status 200 maps to the unmodified body text, any other status to
/// `Request failed with status code: <code>`, and a transport failure to
/// `Request error: <description>`.
pub fn render_report(outcome: &Result<ProbeResponse, TransportError>) -> String {
    match outcome {
        Ok(response) if response.is_success() => response.body.clone(),
        Ok(response) => format!("Request failed with status code: {}", response.status),
        Err(error) => format!("Request error: {}", error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config_uses_the_fixed_literals() {
        let config = ProbeConfig::default();
        assert_eq!(config.target.as_str(), "https://ipwho.is/");
        assert_eq!(config.proxies.http.as_str(), "socks5://127.0.0.1:6969");
        assert_eq!(config.proxies.https.as_str(), "socks5://127.0.0.1:6969");
    }

    #[test]
    fn default_config_ignores_proxy_environment() {
        temp_env::with_vars(
            vec![
                ("http_proxy", Some("http://elsewhere:3128")),
                ("https_proxy", Some("http://elsewhere:3128")),
                ("no_proxy", Some("*")),
                ("HTTP_PROXY", Some("http://elsewhere:3128")),
                ("HTTPS_PROXY", Some("http://elsewhere:3128")),
                ("NO_PROXY", Some("*")),
            ],
            || {
                let config = ProbeConfig::default();
                assert_eq!(config.proxies.http.as_str(), "socks5://127.0.0.1:6969");
                assert_eq!(config.proxies.https.as_str(), "socks5://127.0.0.1:6969");
            },
        );
        temp_env::with_vars_unset(vec!["http_proxy", "https_proxy", "no_proxy"], || {
            let config = ProbeConfig::default();
            assert_eq!(config.proxies.https.as_str(), "socks5://127.0.0.1:6969");
        });
    }

    #[test]
    fn report_success_is_the_unmodified_body() {
        let outcome = Ok(ProbeResponse {
            status: 200,
            body: "{\"ip\":\"1.2.3.4\"}".to_string(),
        });
        assert_eq!(render_report(&outcome), "{\"ip\":\"1.2.3.4\"}");
    }

    #[test]
    fn report_non_200_names_the_status_code() {
        let outcome = Ok(ProbeResponse {
            status: 503,
            body: "ignored".to_string(),
        });
        assert_eq!(render_report(&outcome), "Request failed with status code: 503");
    }

    #[test]
    fn report_transport_error_names_the_description() {
        let outcome = Err(TransportError {
            kind: TransportErrorKind::Connect,
            message: "connection refused".to_string(),
        });
        assert_eq!(render_report(&outcome), "Request error: connection refused");
    }
}
