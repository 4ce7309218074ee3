use serde::{Deserialize, Serialize};

use crate::variable::Variable;

/// A parsed Triple-S variable dictionary.
///
/// Variable order matches document order and is preserved verbatim into every
/// generated statement block. The dictionary owns its variables exclusively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dictionary {
    pub variables: Vec<Variable>,
}

impl Dictionary {
    pub fn new(variables: Vec<Variable>) -> Self {
        Self { variables }
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Total number of lines the layout block will declare: one per
    /// non-expanded variable plus one per coded value of each expanded one.
    pub fn layout_entry_count(&self) -> usize {
        self.variables.iter().map(Variable::layout_entries).sum()
    }

    /// Total number of sections the value-label block will emit.
    pub fn value_label_section_count(&self) -> usize {
        self.variables
            .iter()
            .map(Variable::value_label_sections)
            .sum()
    }
}
