// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for proxy configuration and the probe request.

use std::fmt::{self, Display};

use url::Url;

/// A proxy endpoint URL which cannot be used as a SOCKS5 proxy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidProxyUrl {
    endpoint: String,
    reason: &'static str,
}

static_assertions::assert_impl_all!(InvalidProxyUrl: Send, Sync);

impl InvalidProxyUrl {
    pub(crate) fn wrong_scheme(endpoint: &Url) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            reason: "scheme must be socks5",
        }
    }

    pub(crate) fn missing_host(endpoint: &Url) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            reason: "missing host",
        }
    }

    pub(crate) fn missing_port(endpoint: &Url) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            reason: "missing port",
        }
    }
}

impl Display for InvalidProxyUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid proxy URL {}: {}", self.endpoint, self.reason)
    }
}

impl std::error::Error for InvalidProxyUrl {}

/// What part of the transport a [`TransportError`] originated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// Building the HTTP client failed.
    Builder,
    /// Establishing the connection failed, including proxy and TLS failures.
    Connect,
    /// The request timed out.
    Timeout,
    /// Sending the request failed.
    Request,
    /// Reading the response body failed.
    Decode,
    /// Any other failure reported by the HTTP client.
    Other,
}

/// A failure in the network transport underneath the probe request.
///
/// Covers everything that prevents a complete HTTP response from arriving:
/// connection refusal, DNS failure, an unreachable or misbehaving proxy, TLS
/// errors and timeouts.  A response with a non-200 status is *not* a
/// transport error; it is reported as a regular [`crate::ProbeResponse`].
#[derive(Debug, Clone)]
pub struct TransportError {
    /// Rough classification of the failure.
    pub kind: TransportErrorKind,
    /// Human-readable description from the HTTP client.
    pub message: String,
}

static_assertions::assert_impl_all!(TransportError: Send, Sync);

impl Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for TransportError {}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        // A connect timeout reports both is_timeout and is_connect; classify
        // it as a timeout.
        let kind = if error.is_timeout() {
            TransportErrorKind::Timeout
        } else if error.is_connect() {
            TransportErrorKind::Connect
        } else if error.is_builder() {
            TransportErrorKind::Builder
        } else if error.is_decode() {
            TransportErrorKind::Decode
        } else if error.is_request() {
            TransportErrorKind::Request
        } else {
            TransportErrorKind::Other
        };
        Self {
            kind,
            message: error.to_string(),
        }
    }
}
