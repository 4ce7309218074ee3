//! VALUE LABELS block generation.

use sss_model::{Behavior, Dictionary};

use crate::common::indicator_name;

/// Build the VALUE LABELS statement.
///
/// Sections are emitted in document order, one per coded-categorical or
/// boolean variable and one per synthetic sub-field of an indicator-expanded
/// variable. Uncoded variables contribute nothing. Sections are separated by
/// `/` and the statement closes with an EXECUTE directive.
pub fn value_labels_block(dictionary: &Dictionary) -> String {
    let mut out = String::from("VALUE LABELS\n");
    for variable in &dictionary.variables {
        match variable.vtype.behavior() {
            Behavior::Categorical => {
                out.push_str(&format!("\t{}\n", variable.name));
                for value in &variable.values {
                    // Every code is labeled with the variable's own label,
                    // not the coded value's text. Deliberately kept; see
                    // DESIGN.md.
                    out.push_str(&format!("\t\t{} \"{}\"\n", value.code, variable.label));
                }
                out.push('/');
            }
            Behavior::Indicator => {
                for value in &variable.values {
                    out.push_str(&format!("\t{}\n", indicator_name(variable, value.code)));
                    out.push_str(&format!("\t\t0\"No\"\n\t\t1 \"{}\"\n/", value.text));
                }
            }
            Behavior::Boolean => {
                // Fixed False/True pair, independent of any declared values.
                out.push_str(&format!("\t{}\n", variable.name));
                out.push_str("\t\t0\"False\"\n\t\t1 \"True\"\n/");
            }
            Behavior::Text | Behavior::Numeric => {}
        }
    }
    out.push_str("EXECUTE.\n\n");
    out
}
