use imgfetch_core::error::FatalError;
use imgfetch_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Initialize logging as early as possible; fall back to stderr if the state dir is unusable.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Parse CLI and run. Usage errors exit with 2 from inside clap.
    if let Err(err) = Cli::run_from_args() {
        tracing::error!("{:#}", err);
        match err.downcast_ref::<FatalError>() {
            Some(fatal) => eprintln!("{}", fatal),
            None => eprintln!("imgfetch error: {:#}", err),
        }
        std::process::exit(1);
    }
}
