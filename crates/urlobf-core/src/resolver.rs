//! Host to IPv4 resolution.
//!
//! The obfuscation pipeline only depends on the [`HostResolver`] trait; the
//! operating system resolver is one implementation, a fixed table is another.

use std::collections::HashMap;
use std::io;
use std::net::{IpAddr, Ipv4Addr, SocketAddr, ToSocketAddrs};

use crate::error::{ObfuscateError, Result};

/// Turns a host name (or literal address) into an IPv4 address.
pub trait HostResolver {
    fn resolve(&self, host: &str) -> Result<Ipv4Addr>;
}

/// Resolver backed by the system's hosts file and DNS configuration.
///
/// An empty host resolves to `0.0.0.0`, the way `gethostbyname("")` does.
/// Blocks for as long as the OS resolver does; there is no timeout or
/// cancellation of our own.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl HostResolver for SystemResolver {
    fn resolve(&self, host: &str) -> Result<Ipv4Addr> {
        let fail = |source: io::Error| ObfuscateError::Resolution {
            host: host.to_string(),
            source,
        };

        if host.is_empty() {
            return Ok(Ipv4Addr::UNSPECIFIED);
        }

        let addrs = (host, 0).to_socket_addrs().map_err(fail)?;
        first_ipv4(addrs).ok_or_else(|| {
            fail(io::Error::new(
                io::ErrorKind::NotFound,
                "no IPv4 address for host",
            ))
        })
    }
}

fn first_ipv4(addrs: impl IntoIterator<Item = SocketAddr>) -> Option<Ipv4Addr> {
    addrs.into_iter().find_map(|addr| match addr.ip() {
        IpAddr::V4(v4) => Some(v4),
        IpAddr::V6(_) => None,
    })
}

/// Resolves `host` with the system resolver.
pub fn resolve(host: &str) -> Result<Ipv4Addr> {
    SystemResolver.resolve(host)
}

/// Fixed host table; unknown hosts fail like an NXDOMAIN.
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    entries: HashMap<String, Ipv4Addr>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, host: impl Into<String>, addr: Ipv4Addr) -> Self {
        self.entries.insert(host.into(), addr);
        self
    }
}

impl HostResolver for StaticResolver {
    fn resolve(&self, host: &str) -> Result<Ipv4Addr> {
        self.entries
            .get(host)
            .copied()
            .ok_or_else(|| ObfuscateError::Resolution {
                host: host.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "host not in table"),
            })
    }
}
