use crate::models::DisplayUnit;
use crate::sampler::{self, ProcfsPaths};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Optional defaults for the check. Command-line values take precedence.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProbeConfig {
    #[serde(default)]
    pub thresholds: ThresholdsConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub sampler: SamplerConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThresholdsConfig {
    pub warning: Option<String>,
    pub critical: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// One of B, kB, MB, GB.
    #[serde(default)]
    pub unit: DisplayUnit,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SamplerConfig {
    #[serde(default = "default_meminfo_path")]
    pub meminfo_path: PathBuf,
    #[serde(default = "default_vmstat_path")]
    pub vmstat_path: PathBuf,
    /// Size of one vmstat page in kB (pswpin/pswpout are page counts).
    /// Detected from the running kernel when unset.
    #[serde(default)]
    pub page_size_kb: Option<u64>,
}

fn default_meminfo_path() -> PathBuf {
    ProcfsPaths::default().meminfo
}

fn default_vmstat_path() -> PathBuf {
    ProcfsPaths::default().vmstat
}

impl Default for SamplerConfig {
    fn default() -> Self {
        let paths = ProcfsPaths::default();
        Self {
            meminfo_path: paths.meminfo,
            vmstat_path: paths.vmstat,
            page_size_kb: None,
        }
    }
}

impl SamplerConfig {
    pub fn procfs_paths(&self) -> ProcfsPaths {
        ProcfsPaths {
            meminfo: self.meminfo_path.clone(),
            vmstat: self.vmstat_path.clone(),
            page_size_kb: self
                .page_size_kb
                .unwrap_or_else(sampler::system_page_size_kb),
        }
    }
}

impl ProbeConfig {
    /// Load from `path`, else from `CONFIG_FILE`, else built-in defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match std::env::var_os("CONFIG_FILE") {
                Some(p) => PathBuf::from(p),
                None => return Ok(Self::default()),
            },
        };
        let s = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("config {}: {}", path.display(), e))?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: ProbeConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Warning/critical expressions, command-line values winning over the file.
    /// Parsing happens later so both sources fail the same way.
    pub fn threshold_exprs<'a>(
        &'a self,
        warning: Option<&'a str>,
        critical: Option<&'a str>,
    ) -> (Option<&'a str>, Option<&'a str>) {
        (
            warning.or(self.thresholds.warning.as_deref()),
            critical.or(self.thresholds.critical.as_deref()),
        )
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            !self.sampler.meminfo_path.as_os_str().is_empty(),
            "sampler.meminfo_path must be non-empty"
        );
        anyhow::ensure!(
            !self.sampler.vmstat_path.as_os_str().is_empty(),
            "sampler.vmstat_path must be non-empty"
        );
        if let Some(kb) = self.sampler.page_size_kb {
            anyhow::ensure!(kb > 0, "sampler.page_size_kb must be > 0, got {}", kb);
        }
        Ok(())
    }
}
