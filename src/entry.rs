use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use mercury_probe::args::ProbeArgs;
use mercury_probe::config::{load_config, resolve_settings};
use mercury_probe::error::{AppError, AppResult};
use mercury_probe::http::ReqwestTransport;
use mercury_probe::logger::init_logging;
use mercury_probe::probe::{ProbeOutcome, ProbePlan, run_probe};
use mercury_probe::report::Reporter;

pub(crate) fn run() -> ExitCode {
    let args = match ProbeArgs::try_parse() {
        Ok(args) => args,
        Err(err) => return report_failure(&AppError::from(err)),
    };

    init_logging(args.verbose, args.no_color);

    match execute(&args) {
        Ok(outcome) => {
            debug!("Run finished: {:?}", outcome);
            ExitCode::SUCCESS
        }
        Err(err) => report_failure(&err),
    }
}

/// Prints the failure on stdout next to the report and maps it to an exit
/// status. Clap renders its own usage, help, and version text.
fn report_failure(err: &AppError) -> ExitCode {
    match err {
        AppError::Clap { source } => drop(source.print()),
        other => println!("Error: {}", other),
    }
    ExitCode::from(err)
}

fn execute(args: &ProbeArgs) -> AppResult<ProbeOutcome> {
    let config = load_config(args.config.as_deref())?;
    let settings = resolve_settings(
        config,
        |key| std::env::var(key).ok(),
        args.overrides.as_slice(),
    )?;
    let plan = ProbePlan::from_settings(&settings).map_err(AppError::validation)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let transport = ReqwestTransport::from_options(&plan.transport).map_err(AppError::http)?;
        let mut reporter = Reporter::new(std::io::stdout().lock());
        run_probe(&plan, &transport, &mut reporter).await
    })
}
