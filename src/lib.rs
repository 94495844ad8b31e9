// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#![deny(warnings, missing_docs, clippy::all)]

//! Probe a SOCKS5 proxy with a single proxied HTTP request.
//!
//! This crate is a smoke test for a SOCKS5 endpoint: it routes one HTTP GET
//! request through the proxy and reports what came back.  It deliberately
//! does **not** speak the SOCKS protocol itself; the proxy handshake is left
//! entirely to the HTTP client.
//!
//! ## Pieces
//!
//! - [`proxies::SocksProxies`] maps the `http` and `https` URL schemes to a
//!   single SOCKS5 endpoint, the way curl-style per-scheme proxy settings do.
//! - [`probe::ProbeConfig`] holds the proxy mapping and the target URL, and
//!   performs the one blocking request via [`probe::ProbeConfig::run`].
//! - [`probe::render_report`] turns the outcome into the exact console line
//!   the `proxy-probe` binary prints.
//!
//! The request outcome is typed: a received HTTP response of any status is
//! [`probe::ProbeResponse`], whereas connection, DNS, TLS and proxy failures
//! surface as [`error::TransportError`] with a classified
//! [`error::TransportErrorKind`].  Nothing is retried, and no explicit
//! timeout is configured beyond the HTTP client's defaults.

pub mod error;
pub mod probe;
pub mod proxies;
mod types;

pub use error::{InvalidProxyUrl, TransportError, TransportErrorKind};
pub use probe::{render_report, ProbeConfig, ProbeResponse};
pub use proxies::SocksProxies;
pub use types::ProxyResolver;
