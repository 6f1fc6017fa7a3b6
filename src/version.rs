// Build-time version from Cargo.toml

/// Package version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name (from Cargo.toml).
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// One-line banner used by `--version` and the usage header.
pub fn banner(program: &str) -> String {
    format!("{} ({}) v{}", program, NAME, VERSION)
}
