// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-scheme SOCKS5 proxy settings.
//!
//! This module provides [`SocksProxies`], a fixed mapping from the `http` and
//! `https` URL schemes to a SOCKS5 endpoint, mirroring the shape of curl-style
//! per-scheme proxy settings.  The mapping is created once and never mutated;
//! there is deliberately no support for no-proxy rules, environment lookup or
//! dynamic reconfiguration.

use url::Url;

use crate::error::InvalidProxyUrl;
use crate::types::ProxyResolver;

/// SOCKS5 proxies to use per URL scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocksProxies {
    /// The proxy to use for `http:` URLs.
    pub http: Url,
    /// The proxy to use for `https:` URLs.
    pub https: Url,
}

static_assertions::assert_impl_all!(SocksProxies: Send, Sync);

fn validate(endpoint: &Url) -> Result<(), InvalidProxyUrl> {
    if endpoint.scheme() != "socks5" {
        return Err(InvalidProxyUrl::wrong_scheme(endpoint));
    }
    if endpoint.host_str().is_none() {
        return Err(InvalidProxyUrl::missing_host(endpoint));
    }
    // The url crate knows no default port for socks5, so this demands an
    // explicit port in the endpoint URL.
    if endpoint.port().is_none() {
        return Err(InvalidProxyUrl::missing_port(endpoint));
    }
    Ok(())
}

impl SocksProxies {
    /// Route both the `http` and `https` schemes through one SOCKS5 `endpoint`.
    ///
    /// `endpoint` must be of the form `socks5://<host>:<port>`; return
    /// [`InvalidProxyUrl`] if the scheme is not `socks5` or host or port are
    /// missing.
    pub fn shared(endpoint: Url) -> Result<Self, InvalidProxyUrl> {
        validate(&endpoint)?;
        Ok(Self {
            http: endpoint.clone(),
            https: endpoint,
        })
    }

    /// Lookup the proxy endpoint for the given `url`.
    ///
    /// Select the endpoint by the scheme of `url`; URLs which are neither
    /// `http` nor `https` get no proxy.
    pub fn lookup(&self, url: &Url) -> Option<&Url> {
        match url.scheme() {
            "http" => Some(&self.http),
            "https" => Some(&self.https),
            _ => None,
        }
    }
}

impl ProxyResolver for SocksProxies {
    fn for_url(&self, url: &Url) -> Option<Url> {
        self.lookup(url).cloned()
    }
}
