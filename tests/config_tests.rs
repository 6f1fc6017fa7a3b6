// Config loading and validation tests

use check_swap::config::ProbeConfig;
use check_swap::models::DisplayUnit;
use check_swap::threshold::{RangeMatch, Threshold};
use std::path::Path;

const VALID_CONFIG: &str = r#"
[thresholds]
warning = "30%"
critical = "50%"

[output]
unit = "MB"

[sampler]
meminfo_path = "/proc/meminfo"
vmstat_path = "/proc/vmstat"
page_size_kb = 4
"#;

#[test]
fn test_config_loads_from_str() {
    let config = ProbeConfig::load_from_str(VALID_CONFIG).expect("load_from_str");
    assert_eq!(config.thresholds.warning.as_deref(), Some("30%"));
    assert_eq!(config.thresholds.critical.as_deref(), Some("50%"));
    assert_eq!(config.output.unit, DisplayUnit::Megabytes);
    assert_eq!(config.sampler.page_size_kb, Some(4));
    assert_eq!(config.sampler.procfs_paths().page_size_kb, 4);
}

#[test]
fn test_config_empty_uses_defaults() {
    let config = ProbeConfig::load_from_str("").expect("empty config");
    assert!(config.thresholds.warning.is_none());
    assert_eq!(config.output.unit, DisplayUnit::Kilobytes);
    assert_eq!(config.sampler.meminfo_path, Path::new("/proc/meminfo"));
    assert_eq!(config.sampler.vmstat_path, Path::new("/proc/vmstat"));
    assert_eq!(config.sampler.page_size_kb, None);
    assert!(config.sampler.procfs_paths().page_size_kb > 0);
}

#[test]
fn test_config_bad_ranges_load_but_fail_to_parse() {
    let bad = VALID_CONFIG
        .replace("warning = \"30%\"", "warning = \"lots\"")
        .replace("critical = \"50%\"", "critical = \"90:10\"");
    let config = ProbeConfig::load_from_str(&bad).expect("ranges are parsed at check time");
    let (w, c) = config.threshold_exprs(None, None);
    assert_eq!((w, c), (Some("lots"), Some("90:10")));
    assert!(Threshold::parse(w, c).is_err());
}

#[test]
fn test_command_line_ranges_replace_bad_file_ranges() {
    let bad = VALID_CONFIG.replace("warning = \"30%\"", "warning = \"lots\"");
    let config = ProbeConfig::load_from_str(&bad).unwrap();
    let (w, c) = config.threshold_exprs(Some("80"), None);
    let threshold = Threshold::parse(w, c).expect("command-line warning wins");
    assert_eq!(threshold.warning_match(85.0), RangeMatch::Inside);
    assert_eq!(threshold.critical_match(60.0), RangeMatch::Inside);
}

#[test]
fn test_config_validation_rejects_unknown_unit() {
    let bad = VALID_CONFIG.replace("unit = \"MB\"", "unit = \"TB\"");
    assert!(ProbeConfig::load_from_str(&bad).is_err());
}

#[test]
fn test_config_validation_rejects_page_size_zero() {
    let bad = VALID_CONFIG.replace("page_size_kb = 4", "page_size_kb = 0");
    let err = ProbeConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("page_size_kb"));
}

#[test]
fn test_config_validation_rejects_empty_meminfo_path() {
    let bad = VALID_CONFIG.replace("meminfo_path = \"/proc/meminfo\"", "meminfo_path = \"\"");
    let err = ProbeConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("meminfo_path"));
}

#[test]
fn test_config_validation_rejects_invalid_toml() {
    let err = ProbeConfig::load_from_str("not valid toml [[[").unwrap_err();
    assert!(!err.to_string().is_empty());
}

#[test]
fn test_command_line_thresholds_override_file() {
    let config = ProbeConfig::load_from_str(VALID_CONFIG).unwrap();

    let (w, c) = config.threshold_exprs(None, None);
    let from_file = Threshold::parse(w, c).unwrap();
    assert_eq!(from_file.warning_match(40.0), RangeMatch::Inside);

    let (w, c) = config.threshold_exprs(Some("45"), None);
    let overridden = Threshold::parse(w, c).unwrap();
    assert_eq!(overridden.warning_match(40.0), RangeMatch::Outside);
    assert_eq!(overridden.critical_match(60.0), RangeMatch::Inside);
}

#[test]
fn test_config_load_from_explicit_path() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("check_swap.toml");
    std::fs::write(&path, VALID_CONFIG).unwrap();
    let config = ProbeConfig::load(Some(&path)).expect("load from path");
    assert_eq!(config.output.unit, DisplayUnit::Megabytes);
}

#[test]
fn test_config_load_missing_file_names_path() {
    let err = ProbeConfig::load(Some(Path::new("/nonexistent/check_swap.toml"))).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/check_swap.toml"));
}
