//! Error type for the obfuscation pipeline.

use std::io;

pub type Result<T> = std::result::Result<T, ObfuscateError>;

#[derive(Debug, thiserror::Error)]
pub enum ObfuscateError {
    /// The host could not be turned into an IPv4 address (unknown name,
    /// network failure, or only IPv6 records). Never retried.
    #[error("name resolution failed")]
    Resolution {
        host: String,
        #[source]
        source: io::Error,
    },
}
