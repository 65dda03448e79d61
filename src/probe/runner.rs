use std::io::Write;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::args::RunCount;
use crate::error::{AppError, AppResult, HttpError};
use crate::http::{ProbeResponse, RequestDescriptor, Transport};
use crate::report::Reporter;

use super::ProbePlan;

/// Timing of the timed loop. The validation send is never included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub run_count: RunCount,
    pub total: Duration,
    pub average: Duration,
}

impl ProbeOutcome {
    #[must_use]
    pub fn new(run_count: RunCount, total: Duration) -> Self {
        let average = total
            .checked_div(run_count.get())
            .unwrap_or(Duration::ZERO);
        Self {
            run_count,
            total,
            average,
        }
    }
}

/// Runs one probe: report settings, validate, time `run_count` sends, report.
///
/// Sends are strictly sequential and each response is dropped before the
/// next send starts. Any failure aborts the remaining stages.
///
/// # Errors
///
/// Returns an error when the request cannot be built, any send fails, the
/// validation response is not JSON when JSON was declared, or the report
/// cannot be written.
pub async fn run_probe<T, W>(
    plan: &ProbePlan,
    transport: &T,
    reporter: &mut Reporter<W>,
) -> AppResult<ProbeOutcome>
where
    T: Transport + ?Sized,
    W: Write,
{
    reporter.settings(plan)?;

    let request = RequestDescriptor::from_plan(plan).map_err(AppError::http)?;
    validate_first_response(plan, transport, &request).await?;

    let run_count = plan.run_count.get();
    debug!("Starting {} timed request(s) to {}.", run_count, plan.uri);
    let started = Instant::now();
    for index in 1..=run_count {
        let response = transport.send(&request).await.map_err(|err| {
            AppError::http(HttpError::TimedRequestFailed {
                index,
                source: Box::new(err),
            })
        })?;
        log_status(&response);
        drop(response);
        reporter.progress()?;
    }
    let outcome = ProbeOutcome::new(plan.run_count, started.elapsed());

    reporter.summary(&plan.uri_text, &outcome)?;
    info!(
        "Completed {} timed request(s) in {:?} (average {:?}).",
        run_count, outcome.total, outcome.average
    );
    Ok(outcome)
}

async fn validate_first_response<T>(
    plan: &ProbePlan,
    transport: &T,
    request: &RequestDescriptor,
) -> AppResult<()>
where
    T: Transport + ?Sized,
{
    let response = transport.send(request).await.map_err(|err| {
        AppError::http(HttpError::ValidationRequestFailed {
            source: Box::new(err),
        })
    })?;
    log_status(&response);

    if plan.expects_json() && !response.body.starts_with('{') {
        return Err(AppError::http(HttpError::UnexpectedBody {
            body: response.body,
        }));
    }
    Ok(())
}

fn log_status(response: &ProbeResponse) {
    if !response.is_success() {
        warn!("Response returned status {}.", response.status);
    }
}
