// One check run: sample, wait, sample again, classify, render.

use crate::classify::{classify, percent_used};
use crate::models::{DisplayUnit, PagingRates, Status, SwapSample};
use crate::rate;
use crate::report::{format_line, format_perfdata, format_status};
use crate::sampler::{SamplerError, SwapSource};
use crate::threshold::{Threshold, ThresholdError};
use std::time::Duration;
use tracing::{debug, instrument};

/// Gap between the two paging samples; rates are reported per this interval.
pub const SAMPLE_INTERVAL: Duration = Duration::from_secs(1);

/// Everything resolved before sampling starts.
#[derive(Debug, Clone, Default)]
pub struct ProbeOptions {
    pub threshold: Threshold,
    pub unit: DisplayUnit,
}

#[derive(Debug, Clone)]
pub struct ProbeReport {
    pub status: Status,
    pub percent_used: f64,
    pub swap: SwapSample,
    pub rates: PagingRates,
    /// `<status line> | <perfdata>`
    pub line: String,
}

/// Why a check ended without a decisive status.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// Bad warning/critical syntax; reported as a usage error before any sampling.
    #[error(transparent)]
    Threshold(#[from] ThresholdError),
    #[error(transparent)]
    Sampler(#[from] SamplerError),
}

impl ProbeReport {
    pub fn exit_code(&self) -> i32 {
        self.status.code()
    }
}

/// Parse the raw threshold expressions, then run. Sampling never starts on a parse failure.
/// Production callers pass `SAMPLE_INTERVAL`.
pub fn check<S: SwapSource + ?Sized>(
    source: &S,
    warning: Option<&str>,
    critical: Option<&str>,
    unit: DisplayUnit,
    interval: Duration,
) -> Result<ProbeReport, ProbeError> {
    let options = ProbeOptions {
        threshold: Threshold::parse(warning, critical)?,
        unit,
    };
    Ok(run_with_interval(source, &options, interval)?)
}

#[instrument(skip(source, options), fields(unit = options.unit.label()))]
pub fn run_with_interval<S: SwapSource + ?Sized>(
    source: &S,
    options: &ProbeOptions,
    interval: Duration,
) -> Result<ProbeReport, SamplerError> {
    let swap = source.read_swap_totals()?;
    let first = source.read_paging_counters()?;

    std::thread::sleep(interval);

    let second = source.read_paging_counters()?;
    let rates = rate::delta(&first, &second);

    let percent_used = percent_used(&swap);
    let status = classify(percent_used, &options.threshold);
    debug!(
        total_kb = swap.total_kb,
        used_kb = swap.used_kb,
        percent_used,
        pageins_per_sec = rates.pageins_per_sec,
        pageouts_per_sec = rates.pageouts_per_sec,
        status = status.as_str(),
        "swap check evaluated"
    );

    let line = format_line(
        &format_status(status, percent_used, swap.used_kb),
        &format_perfdata(&swap, &rates, options.unit),
    );

    Ok(ProbeReport {
        status,
        percent_used,
        swap,
        rates,
        line,
    })
}

/// Output for a run that could not be evaluated; carries no perfdata.
pub fn unknown_line(reason: &dyn std::fmt::Display) -> String {
    format!("{}: {}", Status::Unknown, reason)
}
