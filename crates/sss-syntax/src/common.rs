//! Shared naming and formatting rules for the statement blocks.

use sss_model::{Behavior, Variable};

/// Name of the FILE HANDLE the generated syntax declares for the raw
/// fixed-width data file.
pub const DATA_HANDLE_NAME: &str = "longdata";

/// Alignment marker appended to string-typed fields in the DATA LIST.
pub(crate) fn alignment_marker(variable: &Variable) -> &'static str {
    match variable.vtype.behavior() {
        Behavior::Text => " (A)",
        _ => "",
    }
}

/// Synthetic sub-field name for one coded value of an indicator-expanded
/// variable. The same name must be used by every block so that layout and
/// labels refer to the same field.
pub(crate) fn indicator_name(variable: &Variable, code: i64) -> String {
    format!("{}#{}", variable.name, code)
}
