//! VARIABLE LABELS block generation.

use sss_model::{Behavior, Dictionary};

use crate::common::indicator_name;

/// Build the VARIABLE LABELS statement.
///
/// Emits one label assignment per layout entry, under the same naming rule as
/// the DATA LIST block. Every synthetic sub-field of an indicator-expanded
/// variable reuses the parent variable's label.
pub fn variable_labels_block(dictionary: &Dictionary) -> String {
    let mut out = String::from("VARIABLE LABELS\n");
    for variable in &dictionary.variables {
        match variable.vtype.behavior() {
            Behavior::Indicator => {
                for value in &variable.values {
                    out.push_str(&format!(
                        "\t{}\t\"{}\"\n",
                        indicator_name(variable, value.code),
                        variable.label
                    ));
                }
            }
            _ => {
                out.push_str(&format!("\t{}\t\"{}\"\n", variable.name, variable.label));
            }
        }
    }
    out.push_str(".\nEXECUTE.\n\n\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sss_model::{CodedValue, ColumnSpan, Variable, VariableType};

    #[test]
    fn labels_follow_layout_naming() {
        let dictionary = Dictionary::new(vec![
            Variable {
                name: "Q1".to_string(),
                vtype: VariableType::Character,
                label: "Question 1".to_string(),
                span: ColumnSpan::new(1, 5),
                values: vec![],
            },
            Variable {
                name: "Q2".to_string(),
                vtype: VariableType::Multiple,
                label: "Multi".to_string(),
                span: ColumnSpan::new(6, 6),
                values: vec![CodedValue::new(1, "Red"), CodedValue::new(2, "Blue")],
            },
        ]);
        let block = variable_labels_block(&dictionary);
        assert!(block.starts_with("VARIABLE LABELS\n"));
        assert!(block.contains("\tQ1\t\"Question 1\"\n"));
        // The parent label repeats on every synthetic sub-field.
        assert!(block.contains("\tQ2#1\t\"Multi\"\n"));
        assert!(block.contains("\tQ2#2\t\"Multi\"\n"));
        assert!(block.ends_with(".\nEXECUTE.\n\n\n"));
    }

    #[test]
    fn empty_dictionary_still_frames_the_statement() {
        let block = variable_labels_block(&Dictionary::default());
        assert_eq!(block, "VARIABLE LABELS\n.\nEXECUTE.\n\n\n");
    }
}
