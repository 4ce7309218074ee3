//! Assembly of the complete syntax program.

use sss_model::Dictionary;

use crate::data_list::data_list_block;
use crate::save::save_directive;
use crate::value_labels::value_labels_block;
use crate::variable_labels::variable_labels_block;

/// Generate the complete SPSS syntax program for a dictionary.
///
/// The four statement blocks are concatenated in fixed order: column layout,
/// variable labels, value labels, save directive. Generation is a single
/// bounded pass over the dictionary and cannot fail; the caller owns the one
/// write pass that streams the result to disk.
pub fn generate_program(
    dictionary: &Dictionary,
    handle: &str,
    output_dir: &str,
    stem: &str,
) -> String {
    let mut program = String::new();
    program.push_str(&data_list_block(dictionary, handle));
    program.push_str(&variable_labels_block(dictionary));
    program.push_str(&value_labels_block(dictionary));
    program.push_str(&save_directive(output_dir, stem));
    program
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_appear_in_fixed_order() {
        let program = generate_program(&Dictionary::default(), "survey.asc", ".", "survey");
        let data_list = program.find("DATA LIST").unwrap();
        let var_labels = program.find("VARIABLE LABELS").unwrap();
        let value_labels = program.find("VALUE LABELS").unwrap();
        let save = program.find("SAVE OUTFILE").unwrap();
        assert!(data_list < var_labels);
        assert!(var_labels < value_labels);
        assert!(value_labels < save);
        assert!(program.ends_with("/COMPRESSED."));
    }
}
