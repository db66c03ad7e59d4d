//! Numeric re-encodings of the resolved address and of the URL path.

mod address;
mod path;

pub use address::{encode_hex, encode_octal};
pub use path::{encode_path_hex, PASSTHROUGH};
