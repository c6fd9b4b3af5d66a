use std::process::ExitCode;

use env_logger::{Builder, Env};

use envc::cli::{self, Cli};
use envc::ui::output;

fn init_logger(debug: bool) {
    // RUST_LOG wins over --debug.
    let default_filter = if debug { "envc=debug" } else { "warn" };
    Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse_args() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // --help and --version are reported as "errors" by clap.
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_logger(cli.debug);

    if let Err(e) = cli::run(cli) {
        output::error(format!("{:#}", e));
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
