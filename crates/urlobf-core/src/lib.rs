pub mod encode;
pub mod error;
pub mod logging;
pub mod resolver;
pub mod url_model;
pub mod variants;

pub use error::{ObfuscateError, Result};
