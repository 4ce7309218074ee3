//! DATA LIST block generation: the fixed-width column layout declaration.

use sss_model::{Behavior, Dictionary};

use crate::common::{DATA_HANDLE_NAME, alignment_marker, indicator_name};

/// Build the FILE HANDLE and DATA LIST statements for the dictionary.
///
/// `handle` is the caller-supplied reference to the raw fixed-width data
/// file. Variables are declared in document order, one line each, except
/// indicator-expanded variables which declare one single-column sub-field per
/// coded value at consecutive offsets from the declared start column. The
/// declared finish column of an expanded variable is not consulted.
pub fn data_list_block(dictionary: &Dictionary, handle: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "FILE HANDLE {DATA_HANDLE_NAME}\n/NAME=\"{handle}\".\n"
    ));
    out.push_str(&format!("DATA LIST FILE={DATA_HANDLE_NAME}\n/"));
    for variable in &dictionary.variables {
        match variable.vtype.behavior() {
            Behavior::Indicator => {
                for (index, value) in variable.values.iter().enumerate() {
                    let column = variable.span.start + index as u32;
                    out.push_str(&format!(
                        "\t{}\t{column}-{column}\n",
                        indicator_name(variable, value.code)
                    ));
                }
            }
            _ => {
                out.push_str(&format!(
                    "\t{}\t{}-{}{}\n",
                    variable.name,
                    variable.span.start,
                    variable.span.finish,
                    alignment_marker(variable)
                ));
            }
        }
    }
    out.push_str(".\n\n");
    out
}
