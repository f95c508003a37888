//==============================================================================
// Entry point
//==============================================================================

use std::io;
use std::process::ExitCode;

use buffer_ownership::config::DemoConfig;
use buffer_ownership::{control_flow, driver, process, Result};
use tracing::{debug, error};

fn init_logging() {
    // Fixed filter: the binary does not read its environment, and a normal
    // run, failed read included, writes nothing to stderr.
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("error"))
        .with_writer(io::stderr)
        .with_ansi(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn run(config: &DemoConfig) -> Result<()> {
    let process_buffer = process::install(config.buffer_capacity)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let outcome = driver::run_demo(&mut stdin.lock(), &mut stdout.lock(), config)?;
    debug!(?outcome, "demo finished");

    process_buffer.release();

    let trace = control_flow::run()?;
    debug!(?trace, "control flow tour finished");
    Ok(())
}

fn main() -> ExitCode {
    init_logging();

    let config = DemoConfig::default();
    if let Err(err) = run(&config) {
        error!("{}", err);
    }

    ExitCode::SUCCESS
}
