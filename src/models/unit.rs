// Display unit for perfdata magnitudes

use serde::Deserialize;
use std::str::FromStr;

/// Unit applied to the swap magnitudes in the perfdata line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum DisplayUnit {
    Bytes,
    #[default]
    Kilobytes,
    Megabytes,
    Gigabytes,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown display unit '{0}' (expected B, kB, MB or GB)")]
pub struct UnknownUnit(pub String);

impl DisplayUnit {
    /// Right shift applied to a byte count.
    pub fn shift(self) -> u32 {
        match self {
            DisplayUnit::Bytes => 0,
            DisplayUnit::Kilobytes => 10,
            DisplayUnit::Megabytes => 20,
            DisplayUnit::Gigabytes => 30,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DisplayUnit::Bytes => "B",
            DisplayUnit::Kilobytes => "kB",
            DisplayUnit::Megabytes => "MB",
            DisplayUnit::Gigabytes => "GB",
        }
    }

    /// Convert a kilobyte magnitude to this unit (truncating).
    pub fn scale_kb(self, kb: u64) -> u64 {
        let bytes = u128::from(kb) << 10;
        (bytes >> self.shift()) as u64
    }
}

impl FromStr for DisplayUnit {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "b" | "byte" | "bytes" => Ok(DisplayUnit::Bytes),
            "kb" | "kilobyte" | "kilobytes" => Ok(DisplayUnit::Kilobytes),
            "mb" | "megabyte" | "megabytes" => Ok(DisplayUnit::Megabytes),
            "gb" | "gigabyte" | "gigabytes" => Ok(DisplayUnit::Gigabytes),
            _ => Err(UnknownUnit(s.to_string())),
        }
    }
}

impl TryFrom<String> for DisplayUnit {
    type Error = UnknownUnit;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
