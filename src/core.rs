//! Top-level control flow: scan arguments, dispatch, map errors to exit codes

use std::io::Write;

use tracing::debug;

use crate::cli::{parse_args, usage_text, version_text, Args, Invocation};
use crate::config::Config;
use crate::context::Environment;
use crate::engine::Props;
use crate::errors::{PropsError, Result};
use crate::logging;
use crate::status::ExitStatus;

/// Main entry point for the CLI.
///
/// `args` is the full argument vector including the program name.
pub fn run(args: Vec<String>, mut env: Environment) -> ExitStatus {
    logging::init(&env);
    let config = Config::from_build();

    let no_arguments = args.len() <= 1;
    let invocation = match parse_args(args.into_iter().skip(1)) {
        Ok(invocation) => invocation,
        Err(e) => return handle_error(e, &config, &mut env),
    };

    match invocation {
        Invocation::Help => {
            let usage = usage_text(&config.program_name);
            // Asking for help prints to stdout; a bare invocation is a usage error
            if no_arguments {
                let _ = env.stderr.write_all(usage.as_bytes());
            } else {
                let _ = env.stdout.write_all(usage.as_bytes());
            }
            ExitStatus::Usage
        }
        Invocation::Version => {
            let _ = env.stdout.write_all(version_text(&config).as_bytes());
            ExitStatus::Success
        }
        Invocation::Run(args) => match program(&args, &config, &env) {
            Ok(()) => ExitStatus::Success,
            Err(e) => handle_error(e, &config, &mut env),
        },
    }
}

/// Resolve the input and run the merge onto stdout
pub fn program(args: &Args, config: &Config, env: &Environment) -> Result<()> {
    let source = args.input_source()?;
    debug!(source = %source, overrides = args.overrides.len(), "starting run");

    let input = source.open()?;
    let mut output = env.stdout.lock();
    Props::new(config, &args.overrides).run(input, &mut output)
}

fn handle_error(error: PropsError, config: &Config, env: &mut Environment) -> ExitStatus {
    let _ = writeln!(env.stderr, "{}: {}", config.program_name, error);
    if error.wants_usage() {
        let _ = env.stderr.write_all(usage_text(&config.program_name).as_bytes());
    }
    error.exit_status()
}
