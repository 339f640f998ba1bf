//! Output configuration types

/// How byte counts are printed in text output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnitMode {
    /// Scaled to the largest binary unit below 1024, e.g. `16.00 KiB`.
    #[default]
    HumanReadable,
    /// Exact byte count, e.g. `16384 B`.
    RawBytes,
}

/// Configuration for text output formatting.
#[derive(Debug, Clone, Copy)]
pub struct OutputConfig {
    pub use_color: bool,
    pub units: UnitMode,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            units: UnitMode::HumanReadable,
        }
    }
}
