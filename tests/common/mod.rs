// Shared test helpers

#![allow(dead_code)]

use check_swap::models::{PagingSample, SwapSample};
use check_swap::sampler::{SamplerError, SwapSource};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

/// Scripted source: fixed swap totals, paging samples handed out in order.
pub struct FakeSource {
    pub swap: SwapSample,
    pub paging: RefCell<VecDeque<PagingSample>>,
    pub reads: Cell<usize>,
}

impl FakeSource {
    pub fn new(total_kb: u64, used_kb: u64) -> Self {
        Self::with_paging(total_kb, used_kb, &[(0, 0), (0, 0)])
    }

    pub fn with_paging(total_kb: u64, used_kb: u64, paging: &[(u64, u64)]) -> Self {
        Self {
            swap: SwapSample::from_totals(total_kb, total_kb - used_kb, 0),
            paging: RefCell::new(
                paging
                    .iter()
                    .map(|&(pageins_kb, pageouts_kb)| PagingSample {
                        pageins_kb,
                        pageouts_kb,
                    })
                    .collect(),
            ),
            reads: Cell::new(0),
        }
    }
}

impl SwapSource for FakeSource {
    fn read_swap_totals(&self) -> Result<SwapSample, SamplerError> {
        self.reads.set(self.reads.get() + 1);
        Ok(self.swap)
    }

    fn read_paging_counters(&self) -> Result<PagingSample, SamplerError> {
        self.reads.set(self.reads.get() + 1);
        self.paging
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| SamplerError::Unavailable("no more paging samples".into()))
    }
}

/// Source whose swap read always fails.
pub struct BrokenSource;

impl SwapSource for BrokenSource {
    fn read_swap_totals(&self) -> Result<SwapSample, SamplerError> {
        Err(SamplerError::Unavailable("counter source offline".into()))
    }

    fn read_paging_counters(&self) -> Result<PagingSample, SamplerError> {
        Err(SamplerError::Unavailable("counter source offline".into()))
    }
}

pub const MEMINFO_HALF_USED: &str = "\
MemTotal:       16318012 kB
SwapCached:            0 kB
SwapTotal:       1000000 kB
SwapFree:         500000 kB
";

pub const VMSTAT_IDLE: &str = "\
pgpgin 8123456
pswpin 1500
pswpout 2750
";
