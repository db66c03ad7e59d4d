use urlobf_core::logging;

mod cli;

fn main() {
    // Initialize logging as early as possible; a failure only costs diagnostics.
    if let Err(err) = logging::init_logging() {
        eprintln!("urlobf: {:#}", err);
    }

    std::process::exit(cli::run_from_args());
}
