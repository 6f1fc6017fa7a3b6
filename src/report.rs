// Status line and perfdata rendering

use crate::models::{DisplayUnit, PagingRates, Status, SwapSample};

/// Headline message. Used swap is always shown in kB, whatever the display unit.
pub fn format_status(status: Status, percent_used: f64, used_kb: u64) -> String {
    format!("{}: {:.2}% ({} kB) used", status, percent_used, used_kb)
}

/// Perfdata tokens. Swap magnitudes follow `unit`; paging rates are always raw kB/s.
pub fn format_perfdata(swap: &SwapSample, rates: &PagingRates, unit: DisplayUnit) -> String {
    let label = unit.label();
    let magnitudes = [
        ("swap_total", swap.total_kb),
        ("swap_used", swap.used_kb),
        ("swap_free", swap.free_kb),
        ("swap_cached", swap.cached_kb),
    ];

    let mut tokens: Vec<String> = magnitudes
        .iter()
        .map(|(key, kb)| format!("{}={}{}", key, unit.scale_kb(*kb), label))
        .collect();
    tokens.push(format!("swap_pageins/s={}", rates.pageins_per_sec));
    tokens.push(format!("swap_pageouts/s={}", rates.pageouts_per_sec));
    tokens.join(", ")
}

/// Full plugin output line: `<status> | <perfdata>`.
pub fn format_line(status_line: &str, perfdata: &str) -> String {
    format!("{} | {}", status_line, perfdata)
}
