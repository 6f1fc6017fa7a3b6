// Swap and paging value objects (all magnitudes in kilobytes)

/// Instantaneous swap state. `total_kb == 0` means no swap is configured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwapSample {
    pub total_kb: u64,
    pub used_kb: u64,
    pub free_kb: u64,
    /// Swap also held in the page cache (SwapCached).
    pub cached_kb: u64,
}

impl SwapSample {
    /// Build a sample from the kernel's total/free/cached figures; used is derived.
    pub fn from_totals(total_kb: u64, free_kb: u64, cached_kb: u64) -> Self {
        Self {
            total_kb,
            used_kb: total_kb.saturating_sub(free_kb),
            free_kb,
            cached_kb,
        }
    }
}

/// Cumulative swap-in/swap-out counters since boot (or last counter reset).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PagingSample {
    pub pageins_kb: u64,
    pub pageouts_kb: u64,
}

/// Kilobytes swapped in/out over one sampling interval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PagingRates {
    pub pageins_per_sec: u64,
    pub pageouts_per_sec: u64,
}
