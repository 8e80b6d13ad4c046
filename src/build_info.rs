//! Build metadata embedded by `build.rs`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line version string shown by `--version`.
pub fn version_line() -> String {
    format!(
        "ops-millionaire {} ({}, {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}
