//! Hex and octal forms of an IPv4 address.

use std::net::Ipv4Addr;

/// `0x` followed by each octet's lowercase hex digits, unpadded and with no
/// separator: `192.168.1.1` → `0xc0a811`.
///
/// Because octets are not padded the result cannot always be split back into
/// four octets (`1.17.x.x` and `17.1.x.x` collide). Kept as-is for output
/// compatibility.
pub fn encode_hex(addr: Ipv4Addr) -> String {
    let digits: String = addr
        .octets()
        .iter()
        .map(|octet| format!("{:x}", octet))
        .collect();
    format!("0x{digits}")
}

/// Dotted octal, each octet written as a C-style octal literal with a single
/// leading `0`: `192.168.1.1` → `0300.0250.01.01`, octet `0` → `00`.
///
/// The leading zero is what makes resolvers read the octets as octal rather
/// than decimal.
pub fn encode_octal(addr: Ipv4Addr) -> String {
    addr.octets()
        .iter()
        .map(|octet| format!("0{:o}", octet))
        .collect::<Vec<_>>()
        .join(".")
}
