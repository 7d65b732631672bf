use repome::cli::{execute, CliArgs, Reporter};
use repome::config::RepomeConfig;
use repome::util::{init_logging, LoggingConfig};
use repome::VERSION;

use clap::Parser;
use tracing::debug;

fn main() {
    let args = CliArgs::parse();
    let config = args.apply(RepomeConfig::from_env());

    // Logging is configured from the validated level only.
    if let Err(e) = config.validate() {
        let _ = Reporter::stderr().error(&e.to_string());
        std::process::exit(1);
    }
    init_logging(LoggingConfig::from_level_str(&config.log_level));

    debug!("repome v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match execute(&args, config) {
        Ok(_) => 0,
        Err(e) => {
            let _ = Reporter::stderr().error(&format!("Error generating README: {:#}", e));
            1
        }
    };

    std::process::exit(exit_code);
}
