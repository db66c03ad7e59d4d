//! Assembles the obfuscated URL variants.

use std::net::Ipv4Addr;

use crate::encode::{encode_hex, encode_octal, encode_path_hex};
use crate::error::Result;
use crate::resolver::HostResolver;
use crate::url_model::UrlParts;

/// Builds the output lines for an already-resolved address, in fixed order:
///
/// 1. dotted decimal + original path
/// 2. hex + original path
/// 3. octal + original path
/// 4. hex + hex-encoded path (only when there is a path)
/// 5. octal + hex-encoded path (only when there is a path)
pub fn obfuscate(parts: &UrlParts, addr: Ipv4Addr) -> Vec<String> {
    let scheme = &parts.scheme;
    let path = &parts.path;
    let hex = encode_hex(addr);
    let octal = encode_octal(addr);

    let mut lines = vec![
        format!("{scheme}{addr}{path}"),
        format!("{scheme}{hex}{path}"),
        format!("{scheme}{octal}{path}"),
    ];

    if parts.has_path() {
        let hex_path = encode_path_hex(path);
        lines.push(format!("{scheme}{hex}{hex_path}"));
        lines.push(format!("{scheme}{octal}{hex_path}"));
    }

    lines
}

/// Full pipeline: split `url`, resolve its host, build the variants.
pub fn obfuscate_url(url: &str, resolver: &impl HostResolver) -> Result<Vec<String>> {
    let parts = UrlParts::split(url);
    tracing::debug!(
        scheme = %parts.scheme,
        host = %parts.host,
        path = %parts.path,
        "split url"
    );

    let addr = resolver.resolve(&parts.host).inspect_err(|e| {
        tracing::debug!(host = %parts.host, "resolution failed: {:?}", e);
    })?;
    tracing::debug!(host = %parts.host, %addr, "resolved");

    Ok(obfuscate(&parts, addr))
}
