//! Plain-text run report: settings, progress dots, average latency.
mod format;


use std::io::{self, Write};

use crate::config::settings::{CONTENT_TYPE, COOKIE, METHOD, PAYLOAD, RUN_COUNT, URI};
use crate::probe::{ProbeOutcome, ProbePlan};

pub use format::format_timespan;

const PROGRESS_MARKER: &[u8] = b".";

/// Writes the run report to any sink; the binary uses stdout.
#[derive(Debug)]
pub struct Reporter<W> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// # Errors
    ///
    /// Returns an error when the sink cannot be written.
    pub fn settings(&mut self, plan: &ProbePlan) -> io::Result<()> {
        for line in setting_lines(plan) {
            writeln!(self.out, "{}", line)?;
        }
        self.out.flush()
    }

    /// Emits one marker per completed timed send, flushed so it shows up live.
    ///
    /// # Errors
    ///
    /// Returns an error when the sink cannot be written.
    pub fn progress(&mut self) -> io::Result<()> {
        self.out.write_all(PROGRESS_MARKER)?;
        self.out.flush()
    }

    /// # Errors
    ///
    /// Returns an error when the sink cannot be written.
    pub fn summary(&mut self, uri: &str, outcome: &ProbeOutcome) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", uri)?;
        writeln!(
            self.out,
            "Average time: {}",
            format_timespan(outcome.average)
        )?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

pub(crate) fn setting_lines(plan: &ProbePlan) -> Vec<String> {
    vec![
        format!("{}: {}", URI, plan.uri_text),
        format!("{}: {}", METHOD, plan.method),
        format!("{}: {}", COOKIE, plan.cookie),
        format!("{}: {}", PAYLOAD, plan.payload),
        format!("{}: {}", CONTENT_TYPE, plan.content_type),
        format!("{}: {}", RUN_COUNT, plan.run_count),
    ]
}
