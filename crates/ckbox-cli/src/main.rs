mod cli;

use crate::cli::CliCommand;

fn main() {
    // Logging is initialized once the config (which names the log file) is loaded.
    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("ckbox error: {:#}", err);
        std::process::exit(1);
    }
}
