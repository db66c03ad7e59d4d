//! CLI for urlobf.

mod error;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::Parser;
use std::ffi::OsString;
use std::io::{self, Write};
use urlobf_core::resolver::{HostResolver, SystemResolver};
use urlobf_core::variants;

pub use error::CliError;

/// Top-level CLI: one optional URL and a short help flag.
///
/// clap's own help and version flags are disabled; usage text and exit
/// codes are produced here.
#[derive(Debug, Parser)]
#[command(name = "urlobf")]
#[command(about = "Print obfuscated equivalents of a URL", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Print usage and exit.
    #[arg(short = 'h')]
    pub usage: bool,

    /// URL whose host (and path) should be re-encoded.
    pub url: Option<String>,
}

/// What a successfully parsed command line asks for.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    Usage,
    Obfuscate { url: String },
}

pub fn usage(program: &str) -> String {
    format!("usage: {program} [<url> | -h]")
}

/// Parse a full argv (program name first) into an [`Action`].
pub fn parse_args<I, T>(args: I) -> Result<Action, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.len() <= 1 {
        return Err(CliError::NoOptions);
    }

    let cli = Cli::try_parse_from(&args).map_err(|e| CliError::BadArgument(parse_failure(&e)))?;
    if cli.usage {
        return Ok(Action::Usage);
    }

    let url = cli
        .url
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
        .ok_or(CliError::NoUrl)?;
    Ok(Action::Obfuscate { url })
}

/// One-line description of a clap failure, e.g. `option -x not recognized`.
fn parse_failure(err: &clap::Error) -> String {
    if err.kind() == ErrorKind::UnknownArgument {
        if let Some(ContextValue::String(arg)) = err.get(ContextKind::InvalidArg) {
            return if arg.starts_with('-') {
                format!("option {arg} not recognized")
            } else {
                format!("unexpected argument {arg}")
            };
        }
    }
    err.kind()
        .as_str()
        .unwrap_or("invalid arguments")
        .to_string()
}

/// Resolve `url` and write one variant per line to `out`.
pub fn obfuscate_to(
    url: &str,
    resolver: &impl HostResolver,
    out: &mut impl Write,
) -> Result<(), CliError> {
    for line in variants::obfuscate_url(url, resolver)? {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Parse the process arguments, run, and report. Returns the exit status.
pub fn run_from_args() -> i32 {
    let args: Vec<OsString> = std::env::args_os().collect();
    let program = args
        .first()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "urlobf".to_string());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match run(args, &SystemResolver, &program, &mut out) {
        Ok(()) => 0,
        Err(err) => {
            tracing::debug!("exiting after error: {:?}", err);
            let _ = writeln!(out, "error: {err}");
            if err.shows_usage() {
                let _ = writeln!(out, "{}", usage(&program));
            }
            err.exit_code()
        }
    }
}

fn run(
    args: Vec<OsString>,
    resolver: &impl HostResolver,
    program: &str,
    out: &mut impl Write,
) -> Result<(), CliError> {
    match parse_args(args)? {
        Action::Usage => {
            writeln!(out, "{}", usage(program))?;
        }
        Action::Obfuscate { url } => obfuscate_to(&url, resolver, out)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests;
