use serde::{Deserialize, Serialize};
use std::fmt;

/// Variable type as declared by the Triple-S `type` attribute.
///
/// The attribute is an open classification: the standard names are covered by
/// dedicated variants and anything else is carried through as `Other`, which
/// downstream generators treat the same as `Numeric`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableType {
    Character,
    Numeric,
    Date,
    Time,
    Single,
    Multiple,
    Logical,
    Other(String),
}

impl VariableType {
    /// Parse a Triple-S `type` attribute value.
    /// Unrecognized values become `Other` rather than an error so that new
    /// dictionary types degrade to plain numeric handling.
    pub fn parse(value: &str) -> Self {
        match value {
            "character" => VariableType::Character,
            "numeric" => VariableType::Numeric,
            "date" => VariableType::Date,
            "time" => VariableType::Time,
            "single" => VariableType::Single,
            "multiple" => VariableType::Multiple,
            "logical" => VariableType::Logical,
            other => VariableType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            VariableType::Character => "character",
            VariableType::Numeric => "numeric",
            VariableType::Date => "date",
            VariableType::Time => "time",
            VariableType::Single => "single",
            VariableType::Multiple => "multiple",
            VariableType::Logical => "logical",
            VariableType::Other(name) => name,
        }
    }

    /// Map this type to its generation behavior.
    ///
    /// Every block generator consults this single mapping so that layout and
    /// labeling never disagree about the same variable.
    pub fn behavior(&self) -> Behavior {
        match self {
            VariableType::Character | VariableType::Date | VariableType::Time => Behavior::Text,
            VariableType::Multiple => Behavior::Indicator,
            VariableType::Single => Behavior::Categorical,
            VariableType::Logical => Behavior::Boolean,
            VariableType::Numeric | VariableType::Other(_) => Behavior::Numeric,
        }
    }
}

impl fmt::Display for VariableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a variable is rendered across the generated statement blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    /// Single string-typed field, `(A)` alignment marker in the layout.
    Text,
    /// Single numeric field, no marker. The fallback for unknown types.
    Numeric,
    /// One synthetic yes/no sub-field per coded value.
    Indicator,
    /// Single coded field whose codes become value labels.
    Categorical,
    /// Single field with fixed False/True value labels.
    Boolean,
}

/// 1-based inclusive character offsets into a fixed-width data record.
///
/// `finish >= start` is guaranteed by well-formed dictionaries and is not
/// re-validated here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpan {
    pub start: u32,
    pub finish: u32,
}

impl ColumnSpan {
    pub fn new(start: u32, finish: u32) -> Self {
        Self { start, finish }
    }
}

/// An enumerated (code, text) pair attached to a coded variable.
///
/// For `multiple` variables each coded value names a synthetic yes/no
/// sub-field rather than a category of the variable itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodedValue {
    pub code: i64,
    pub text: String,
}

impl CodedValue {
    pub fn new(code: i64, text: impl Into<String>) -> Self {
        Self {
            code,
            text: text.into(),
        }
    }
}

/// One surveyed question/field from the dictionary.
///
/// Constructed once by the parser and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    /// Identifier, unique within the dictionary.
    pub name: String,
    pub vtype: VariableType,
    /// Free-text description.
    pub label: String,
    pub span: ColumnSpan,
    /// Coded values in declaration order; empty for uncoded types.
    pub values: Vec<CodedValue>,
}

impl Variable {
    /// Number of entries this variable contributes to the layout block:
    /// one per coded value for indicator-expanded variables, otherwise one.
    pub fn layout_entries(&self) -> usize {
        match self.vtype.behavior() {
            Behavior::Indicator => self.values.len(),
            _ => 1,
        }
    }

    /// Number of sections this variable contributes to the value-label block.
    pub fn value_label_sections(&self) -> usize {
        match self.vtype.behavior() {
            Behavior::Indicator => self.values.len(),
            Behavior::Categorical | Behavior::Boolean => 1,
            Behavior::Text | Behavior::Numeric => 0,
        }
    }
}
