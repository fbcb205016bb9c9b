// SPDX-License-Identifier: MPL-2.0
use retouch::app::{self, Flags};
use std::process::ExitCode;

fn main() -> ExitCode {
    retouch::logging::init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        println!("Usage: retouch [--config-dir <DIR>] [DIRECTORY]\n\n{}", app::shell::HELP);
        return ExitCode::SUCCESS;
    }

    let config_dir = match args.opt_value_from_str("--config-dir") {
        Ok(value) => value,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let flags = Flags {
        config_dir,
        directory: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    match app::shell::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
