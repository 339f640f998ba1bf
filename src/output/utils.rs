//! Shared formatting helpers for text output

use super::config::UnitMode;

const UNITS: [&str; 7] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB"];

/// Format a byte count according to `units`.
pub fn format_size(bytes: u64, units: UnitMode) -> String {
    match units {
        UnitMode::RawBytes => format!("{} B", bytes),
        UnitMode::HumanReadable => {
            let mut value = bytes as f64;
            let mut unit = 0;
            while value >= 1024.0 && unit < UNITS.len() - 1 {
                value /= 1024.0;
                unit += 1;
            }
            // 1023.995 KiB would print as "1024.00 KiB"
            if (value * 100.0).round() >= 102_400.0 && unit < UNITS.len() - 1 {
                value /= 1024.0;
                unit += 1;
            }
            format!("{:.2} {}", value, UNITS[unit])
        }
    }
}

/// Format a usage percentage with two decimals.
pub fn format_percent(usage: f64) -> String {
    format!("{:.2}%", usage)
}

/// Connector drawn in front of an entry.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { "└── " } else { "├── " }
}

/// Prefix for the children of an entry drawn with `prefix`.
pub fn child_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    }
}

/// Directory name as displayed, with a trailing separator.
pub fn dir_label(name: &str) -> String {
    if name.ends_with('/') || name.ends_with(std::path::MAIN_SEPARATOR) {
        name.to_string()
    } else {
        format!("{}/", name)
    }
}
