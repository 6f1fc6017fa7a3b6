// Swap usage percentage and status classification

use crate::models::{Status, SwapSample};
use crate::threshold::{RangeMatch, Threshold};

/// Used swap as a percentage of total. No swap configured counts as 0%.
pub fn percent_used(swap: &SwapSample) -> f64 {
    if swap.total_kb == 0 {
        return 0.0;
    }
    swap.used_kb as f64 * 100.0 / swap.total_kb as f64
}

/// Critical is checked before warning. Never returns `Status::Unknown`.
pub fn classify(percent_used: f64, threshold: &Threshold) -> Status {
    if threshold.critical_match(percent_used) == RangeMatch::Inside {
        Status::Critical
    } else if threshold.warning_match(percent_used) == RangeMatch::Inside {
        Status::Warning
    } else {
        Status::Ok
    }
}
