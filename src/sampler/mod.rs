// Swap counter sources: procfs on Linux, sysinfo elsewhere

mod linux;

pub use linux::{DEFAULT_PAGE_SIZE_KB, ProcfsPaths, ProcfsSampler, system_page_size_kb};

use crate::models::{PagingSample, SwapSample};
use std::path::PathBuf;
use std::sync::Mutex;
use sysinfo::System;
use tracing::instrument;

#[derive(Debug, thiserror::Error)]
pub enum SamplerError {
    #[error("cannot read {p}: {source}", p = .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{field} not found in {p}", p = .path.display())]
    MissingField { path: PathBuf, field: &'static str },
    #[error("invalid {field} value '{value}' in {p}", p = .path.display())]
    Parse {
        path: PathBuf,
        field: &'static str,
        value: String,
    },
    #[error("swap counters unavailable: {0}")]
    Unavailable(String),
}

/// Where swap totals and cumulative paging counters come from.
pub trait SwapSource {
    fn read_swap_totals(&self) -> Result<SwapSample, SamplerError>;
    fn read_paging_counters(&self) -> Result<PagingSample, SamplerError>;
}

/// Portable source backed by sysinfo. Paging counters are not exposed there and read as 0.
pub struct SysinfoSampler {
    sys: Mutex<System>,
}

impl SysinfoSampler {
    pub fn new() -> Self {
        Self {
            sys: Mutex::new(System::new()),
        }
    }
}

impl SwapSource for SysinfoSampler {
    #[instrument(skip(self), fields(sampler = "sysinfo", operation = "read_swap_totals"))]
    fn read_swap_totals(&self) -> Result<SwapSample, SamplerError> {
        let mut sys = self
            .sys
            .lock()
            .map_err(|e| SamplerError::Unavailable(format!("sysinfo lock poisoned: {}", e)))?;
        sys.refresh_memory();
        Ok(SwapSample::from_totals(
            sys.total_swap() >> 10,
            sys.free_swap() >> 10,
            0,
        ))
    }

    fn read_paging_counters(&self) -> Result<PagingSample, SamplerError> {
        Ok(PagingSample::default())
    }
}

/// Procfs on Linux; an unreadable file surfaces as a `SamplerError` from the first read.
#[cfg(target_os = "linux")]
pub fn default_source(paths: ProcfsPaths) -> Box<dyn SwapSource> {
    Box::new(ProcfsSampler::new(paths))
}

/// sysinfo everywhere else; procfs paths do not apply.
#[cfg(not(target_os = "linux"))]
pub fn default_source(_paths: ProcfsPaths) -> Box<dyn SwapSource> {
    Box::new(SysinfoSampler::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sysinfo_sampler_reports_consistent_totals() {
        let sampler = SysinfoSampler::new();
        let swap = sampler.read_swap_totals().unwrap();
        assert_eq!(swap.used_kb, swap.total_kb.saturating_sub(swap.free_kb));
        assert_eq!(sampler.read_paging_counters().unwrap(), PagingSample::default());
    }
}
