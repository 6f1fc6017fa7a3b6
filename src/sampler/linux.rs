// Linux procfs reader: /proc/meminfo for swap totals, /proc/vmstat for paging counters.

use super::{SamplerError, SwapSource};
use crate::models::{PagingSample, SwapSample};
use std::path::{Path, PathBuf};
use tracing::instrument;

/// File locations and the page size used to turn vmstat page counts into kB.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcfsPaths {
    pub meminfo: PathBuf,
    pub vmstat: PathBuf,
    pub page_size_kb: u64,
}

/// Page size assumed when the kernel's cannot be read.
pub const DEFAULT_PAGE_SIZE_KB: u64 = 4;

impl Default for ProcfsPaths {
    fn default() -> Self {
        Self {
            meminfo: PathBuf::from("/proc/meminfo"),
            vmstat: PathBuf::from("/proc/vmstat"),
            page_size_kb: DEFAULT_PAGE_SIZE_KB,
        }
    }
}

/// Kernel page size in kB from `/proc/self/smaps` (16K/64K on some arm64 and ppc64le kernels).
pub fn system_page_size_kb() -> u64 {
    let path = Path::new("/proc/self/smaps");
    match std::fs::read_to_string(path) {
        Ok(content) => page_size_from_smaps(&content, path).unwrap_or_else(|| {
            tracing::debug!(
                page_size_kb = DEFAULT_PAGE_SIZE_KB,
                "KernelPageSize not found in smaps, using default"
            );
            DEFAULT_PAGE_SIZE_KB
        }),
        Err(e) => {
            tracing::debug!(
                error = %e,
                page_size_kb = DEFAULT_PAGE_SIZE_KB,
                "cannot read smaps, using default page size"
            );
            DEFAULT_PAGE_SIZE_KB
        }
    }
}

pub(super) fn page_size_from_smaps(content: &str, path: &Path) -> Option<u64> {
    meminfo_field(content, path, "KernelPageSize")
        .ok()
        .filter(|kb| *kb > 0)
}

pub struct ProcfsSampler {
    paths: ProcfsPaths,
}

impl ProcfsSampler {
    pub fn new(paths: ProcfsPaths) -> Self {
        Self { paths }
    }
}

impl SwapSource for ProcfsSampler {
    #[instrument(skip(self), fields(sampler = "procfs", operation = "read_swap_totals"))]
    fn read_swap_totals(&self) -> Result<SwapSample, SamplerError> {
        let path = &self.paths.meminfo;
        let content = read(path)?;
        Ok(SwapSample::from_totals(
            meminfo_field(&content, path, "SwapTotal")?,
            meminfo_field(&content, path, "SwapFree")?,
            // Absent on some older kernels
            meminfo_field(&content, path, "SwapCached").unwrap_or(0),
        ))
    }

    #[instrument(skip(self), fields(sampler = "procfs", operation = "read_paging_counters"))]
    fn read_paging_counters(&self) -> Result<PagingSample, SamplerError> {
        let path = &self.paths.vmstat;
        let content = read(path)?;
        let page_kb = self.paths.page_size_kb;
        Ok(PagingSample {
            pageins_kb: vmstat_field(&content, path, "pswpin")?.saturating_mul(page_kb),
            pageouts_kb: vmstat_field(&content, path, "pswpout")?.saturating_mul(page_kb),
        })
    }
}

fn read(path: &Path) -> Result<String, SamplerError> {
    std::fs::read_to_string(path).map_err(|source| SamplerError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Value of a `Name:   1234 kB` line, in kB.
pub(super) fn meminfo_field(
    content: &str,
    path: &Path,
    field: &'static str,
) -> Result<u64, SamplerError> {
    for line in content.lines() {
        if let Some((name, rest)) = line.split_once(':')
            && name.trim() == field
        {
            let value = rest.trim().trim_end_matches("kB").trim();
            return parse_u64(value, path, field);
        }
    }
    Err(SamplerError::MissingField {
        path: path.to_path_buf(),
        field,
    })
}

/// Value of a `name 1234` line.
pub(super) fn vmstat_field(
    content: &str,
    path: &Path,
    field: &'static str,
) -> Result<u64, SamplerError> {
    for line in content.lines() {
        let mut parts = line.split_whitespace();
        if parts.next() == Some(field) {
            let value = parts.next().unwrap_or_default();
            return parse_u64(value, path, field);
        }
    }
    Err(SamplerError::MissingField {
        path: path.to_path_buf(),
        field,
    })
}

fn parse_u64(value: &str, path: &Path, field: &'static str) -> Result<u64, SamplerError> {
    value.parse::<u64>().map_err(|_| SamplerError::Parse {
        path: path.to_path_buf(),
        field,
        value: value.to_string(),
    })
}
