use props::context::Environment;
use props::status::ExitStatus;

/// Entry point - hands the argument vector to core::run()
///
/// Returns ExitStatus directly, which implements std::process::Termination.
fn main() -> ExitStatus {
    let args: Vec<String> = std::env::args().collect();
    let env = Environment::init();

    props::core::run(args, env)
}
