//! CLI error type: what went wrong, and the exit status it maps to.

use urlobf_core::ObfuscateError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Invoked with no arguments at all.
    #[error("no options given")]
    NoOptions,

    /// Arguments were given but none of them is a usable URL.
    #[error("no url provided")]
    NoUrl,

    /// The argument parser rejected the command line.
    #[error("{0}")]
    BadArgument(String),

    #[error(transparent)]
    Obfuscate(#[from] ObfuscateError),

    #[error("cannot write output: {0}")]
    Output(#[from] std::io::Error),
}

impl CliError {
    /// 2 for command-line misuse, 1 for runtime failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NoOptions | CliError::NoUrl | CliError::BadArgument(_) => 2,
            CliError::Obfuscate(_) | CliError::Output(_) => 1,
        }
    }

    /// Whether the usage line follows the error message.
    pub fn shows_usage(&self) -> bool {
        matches!(self, CliError::NoOptions | CliError::NoUrl)
    }
}
