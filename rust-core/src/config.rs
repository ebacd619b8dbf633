//! Configuration for sample loading and series export

/// Rules for turning text rows into samples
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Rows must split into exactly this many tokens to contribute a sample (default: 3)
    pub columns: usize,

    /// Zero-based token holding the sample value (default: 1)
    pub value_column: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            columns: 3,
            value_column: 1,
        }
    }
}

/// Output formatting for exported series
#[derive(Debug, Clone, Default)]
pub struct ExportConfig {
    /// Fixed number of decimals, or `None` for the shortest text that
    /// parses back to the same value (default: None)
    pub precision: Option<usize>,
}

/// Combined editor configuration
#[derive(Debug, Clone, Default)]
pub struct EditorConfig {
    pub loader: LoaderConfig,
    pub export: ExportConfig,
}
