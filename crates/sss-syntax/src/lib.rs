//! SPSS syntax generation from Triple-S dictionaries.
//!
//! Pure transformation from a parsed [`sss_model::Dictionary`] to the text of
//! an SPSS command program:
//!
//! - **DATA LIST**: fixed-width column layout declaration
//! - **VARIABLE LABELS**: one label per declared field
//! - **VALUE LABELS**: coded-value label sections
//! - **SAVE OUTFILE**: compressed save directive
//!
//! Each generator returns its block as an in-memory string; no I/O happens
//! here. The exact statement framing (terminators, separators, quoting) is a
//! wire protocol consumed verbatim by the SPSS interpreter and must not be
//! reflowed.

mod common;
mod data_list;
mod program;
mod save;
mod value_labels;
mod variable_labels;

pub use common::DATA_HANDLE_NAME;
pub use data_list::data_list_block;
pub use program::generate_program;
pub use save::save_directive;
pub use value_labels::value_labels_block;
pub use variable_labels::variable_labels_block;
