//! Triple-S dictionary reading.
//!
//! The Triple-S document is bound structurally (`sss > survey > record >
//! variable`) into mirror structs and then converted into the crate-agnostic
//! model, at which point required elements and integer attributes are checked.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use sss_model::{CodedValue, ColumnSpan, Dictionary, Variable, VariableType};

use crate::error::{IngestError, Result};

/// Open and parse a Triple-S dictionary file.
pub fn load_dictionary(path: &Path) -> Result<Dictionary> {
    let file = File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let dictionary = parse_dictionary(BufReader::new(file))?;
    tracing::info!(
        path = %path.display(),
        variables = dictionary.len(),
        "loaded Triple-S dictionary"
    );
    Ok(dictionary)
}

/// Parse a Triple-S dictionary from any buffered source.
pub fn parse_dictionary<R: BufRead>(source: R) -> Result<Dictionary> {
    let document: SssDocument = quick_xml::de::from_reader(source)?;
    let variables = document
        .survey
        .record
        .variables
        .into_iter()
        .map(convert_variable)
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(count = variables.len(), "converted dictionary variables");
    Ok(Dictionary::new(variables))
}

// Mirror structs for the Triple-S document shape.

#[derive(Debug, Default, Deserialize)]
struct SssDocument {
    #[serde(default)]
    survey: XmlSurvey,
}

#[derive(Debug, Default, Deserialize)]
struct XmlSurvey {
    #[serde(default)]
    record: XmlRecord,
}

#[derive(Debug, Default, Deserialize)]
struct XmlRecord {
    #[serde(default, rename = "variable")]
    variables: Vec<XmlVariable>,
}

#[derive(Debug, Deserialize)]
struct XmlVariable {
    #[serde(rename = "@type")]
    vtype: Option<String>,
    name: Option<String>,
    label: Option<String>,
    position: Option<XmlPosition>,
    values: Option<XmlValues>,
}

#[derive(Debug, Deserialize)]
struct XmlPosition {
    #[serde(rename = "@start")]
    start: String,
    #[serde(rename = "@finish")]
    finish: String,
}

#[derive(Debug, Deserialize)]
struct XmlValues {
    #[serde(default, rename = "value")]
    values: Vec<XmlValue>,
}

#[derive(Debug, Deserialize)]
struct XmlValue {
    #[serde(rename = "@code")]
    code: String,
    #[serde(default, rename = "$text")]
    text: String,
}

fn convert_variable(xml: XmlVariable) -> Result<Variable> {
    let name = xml
        .name
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| missing("<unnamed>", "name"))?;
    let vtype = xml
        .vtype
        .map(|value| VariableType::parse(&value))
        .ok_or_else(|| missing(&name, "type attribute"))?;
    let position = xml.position.ok_or_else(|| missing(&name, "position"))?;
    let span = ColumnSpan::new(
        parse_number("start", &position.start)?,
        parse_number("finish", &position.finish)?,
    );
    let values = xml
        .values
        .map(|values| values.values)
        .unwrap_or_default()
        .into_iter()
        .map(|value| {
            Ok(CodedValue::new(
                parse_number("code", &value.code)?,
                value.text.trim().to_string(),
            ))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Variable {
        name,
        vtype,
        label: xml.label.unwrap_or_default(),
        span,
        values,
    })
}

fn missing(variable: &str, element: &str) -> IngestError {
    IngestError::MissingElement {
        variable: variable.to_string(),
        element: element.to_string(),
    }
}

fn parse_number<T: FromStr>(attribute: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| IngestError::InvalidNumber {
            attribute: attribute.to_string(),
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sss_model::Behavior;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<sss version="1.1">
  <survey>
    <name>Demo</name>
    <record ident="A">
      <variable ident="1" type="character">
        <name>Q1</name>
        <label>Question 1</label>
        <position start="1" finish="5"/>
      </variable>
      <variable ident="2" type="multiple">
        <name>Q2</name>
        <label>Colours &amp; shades</label>
        <position start="6" finish="6"/>
        <values>
          <value code="1">Red</value>
          <value code="2">Blue</value>
        </values>
      </variable>
      <variable ident="3" type="single">
        <name>Q3</name>
        <label>Region</label>
        <position start="8" finish="9"/>
        <values>
          <value code="1">North</value>
          <value code="2">South</value>
        </values>
      </variable>
      <variable ident="4" type="logical">
        <name>Q4</name>
        <label>Opted in</label>
        <position start="10" finish="10"/>
      </variable>
    </record>
  </survey>
</sss>
"#;

    #[test]
    fn parses_sample_dictionary() {
        let dictionary = parse_dictionary(SAMPLE.as_bytes()).unwrap();
        assert_eq!(dictionary.len(), 4);

        let q1 = &dictionary.variables[0];
        assert_eq!(q1.name, "Q1");
        assert_eq!(q1.vtype, VariableType::Character);
        assert_eq!(q1.label, "Question 1");
        assert_eq!(q1.span, ColumnSpan::new(1, 5));
        assert!(q1.values.is_empty());

        let q2 = &dictionary.variables[1];
        assert_eq!(q2.vtype.behavior(), Behavior::Indicator);
        assert_eq!(q2.label, "Colours & shades");
        assert_eq!(
            q2.values,
            vec![CodedValue::new(1, "Red"), CodedValue::new(2, "Blue")]
        );

        let q4 = &dictionary.variables[3];
        assert_eq!(q4.vtype, VariableType::Logical);
        assert_eq!(q4.span, ColumnSpan::new(10, 10));
    }

    #[test]
    fn preserves_document_order() {
        let dictionary = parse_dictionary(SAMPLE.as_bytes()).unwrap();
        let names: Vec<&str> = dictionary
            .variables
            .iter()
            .map(|v| v.name.as_str())
            .collect();
        assert_eq!(names, ["Q1", "Q2", "Q3", "Q4"]);
    }

    #[test]
    fn unknown_type_falls_back_to_other() {
        let xml = r#"<sss><survey><record>
            <variable type="quantity">
              <name>Q9</name>
              <label>Count</label>
              <position start="1" finish="3"/>
            </variable>
        </record></survey></sss>"#;
        let dictionary = parse_dictionary(xml.as_bytes()).unwrap();
        assert_eq!(
            dictionary.variables[0].vtype,
            VariableType::Other("quantity".to_string())
        );
    }

    #[test]
    fn missing_name_is_an_error() {
        let xml = r#"<sss><survey><record>
            <variable type="numeric">
              <label>No name</label>
              <position start="1" finish="2"/>
            </variable>
        </record></survey></sss>"#;
        let error = parse_dictionary(xml.as_bytes()).unwrap_err();
        assert!(matches!(error, IngestError::MissingElement { .. }));
    }

    #[test]
    fn missing_position_is_an_error() {
        let xml = r#"<sss><survey><record>
            <variable type="numeric">
              <name>Q5</name>
            </variable>
        </record></survey></sss>"#;
        let error = parse_dictionary(xml.as_bytes()).unwrap_err();
        assert!(
            matches!(error, IngestError::MissingElement { ref variable, ref element }
                if variable == "Q5" && element == "position")
        );
    }

    #[test]
    fn non_integer_position_is_an_error() {
        let xml = r#"<sss><survey><record>
            <variable type="numeric">
              <name>Q5</name>
              <position start="one" finish="2"/>
            </variable>
        </record></survey></sss>"#;
        let error = parse_dictionary(xml.as_bytes()).unwrap_err();
        assert!(matches!(error, IngestError::InvalidNumber { ref attribute, .. }
                if attribute == "start"));
    }

    #[test]
    fn empty_record_yields_empty_dictionary() {
        let xml = "<sss><survey><record/></survey></sss>";
        let dictionary = parse_dictionary(xml.as_bytes()).unwrap();
        assert!(dictionary.is_empty());
    }

    #[test]
    fn load_dictionary_reads_from_disk() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("survey.xml");
        std::fs::write(&path, SAMPLE).unwrap();
        let dictionary = load_dictionary(&path).unwrap();
        assert_eq!(dictionary.len(), 4);
    }

    #[test]
    fn load_dictionary_missing_file() {
        let error = load_dictionary(Path::new("/nonexistent/survey.xml")).unwrap_err();
        assert!(matches!(error, IngestError::FileRead { .. }));
    }
}
