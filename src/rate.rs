// Paging rate from two cumulative counter samples taken one interval apart

use crate::models::{PagingRates, PagingSample};

/// Per-interval deltas. A counter that went backwards (reset or wraparound)
/// yields 0 rather than an underflowed value.
pub fn delta(first: &PagingSample, second: &PagingSample) -> PagingRates {
    if second.pageins_kb < first.pageins_kb || second.pageouts_kb < first.pageouts_kb {
        tracing::debug!(
            pageins_before = first.pageins_kb,
            pageins_after = second.pageins_kb,
            pageouts_before = first.pageouts_kb,
            pageouts_after = second.pageouts_kb,
            "paging counter decreased between samples, clamping rate to 0"
        );
    }
    PagingRates {
        pageins_per_sec: second.pageins_kb.saturating_sub(first.pageins_kb),
        pageouts_per_sec: second.pageouts_kb.saturating_sub(first.pageouts_kb),
    }
}
