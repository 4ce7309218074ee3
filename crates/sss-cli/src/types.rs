//! Result types shared between conversion and summary printing.

use std::path::PathBuf;

/// Outcome of one dictionary conversion.
#[derive(Debug, Clone)]
pub struct ConvertSummary {
    /// The Triple-S dictionary that was read.
    pub dictionary_path: PathBuf,
    /// The syntax file that was written.
    pub output_path: PathBuf,
    /// Variables in the dictionary.
    pub variables: usize,
    /// Lines declared in the DATA LIST block.
    pub layout_entries: usize,
    /// Sections emitted in the VALUE LABELS block.
    pub value_label_sections: usize,
}
