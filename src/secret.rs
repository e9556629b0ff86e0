//! Typed conversion of a participant's secret-input file.
//!
//! A secret-input file holds one value per line, all of the data type named by the session
//! header's tag. The tag vocabulary matches the header field, so callers can feed
//! `header.data_type` straight in.

use std::path::Path;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::lines::read_all_lines;

/// The values of a secret-input file, typed according to its data-type tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SecretValues {
    /// Values under the `"int"` tag.
    Int(Vec<i64>),
    /// Values under the `"float"` tag.
    Float(Vec<f32>),
    /// Values under the `"double"` tag.
    Double(Vec<f64>),
    /// Values under the `"BigInteger"` tag.
    BigInteger(Vec<BigInt>),
    /// Values under the `"BigDecimal"` tag.
    BigDecimal(Vec<BigDecimal>),
}

impl SecretValues {
    /// Number of values in the list.
    pub fn len(&self) -> usize {
        match self {
            SecretValues::Int(v) => v.len(),
            SecretValues::Float(v) => v.len(),
            SecretValues::Double(v) => v.len(),
            SecretValues::BigInteger(v) => v.len(),
            SecretValues::BigDecimal(v) => v.len(),
        }
    }

    /// Whether the list holds no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One participant's decoded secret inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecretInputs {
    /// The data-type tag the file was interpreted under.
    pub data_type: String,
    /// The typed values, in file order.
    pub values: SecretValues,
}

impl SecretInputs {
    /// Reads the secret-input file at `path` and interprets every line under `data_type`.
    pub fn parse(path: impl AsRef<Path>, data_type: &str) -> Result<Self, Error> {
        Self::from_lines(&read_all_lines(path)?, data_type)
    }

    /// Interprets an already-read line sequence under `data_type`.
    ///
    /// An empty file is a valid empty list. An unknown tag fails with
    /// [`Error::UnsupportedDataType`]; a line that does not parse under the tag fails with
    /// [`Error::InvalidSecretValue`] naming the line.
    pub fn from_lines(lines: &[String], data_type: &str) -> Result<Self, Error> {
        let values = match data_type {
            "int" => SecretValues::Int(parse_all(lines, data_type)?),
            "float" => SecretValues::Float(parse_all(lines, data_type)?),
            "double" => SecretValues::Double(parse_all(lines, data_type)?),
            "BigInteger" => SecretValues::BigInteger(parse_all(lines, data_type)?),
            "BigDecimal" => SecretValues::BigDecimal(parse_all(lines, data_type)?),
            _ => {
                return Err(Error::UnsupportedDataType {
                    tag: data_type.to_string(),
                });
            }
        };
        Ok(SecretInputs {
            data_type: data_type.to_string(),
            values,
        })
    }
}

fn parse_all<T: FromStr>(lines: &[String], tag: &str) -> Result<Vec<T>, Error> {
    lines
        .iter()
        .enumerate()
        .map(|(line, text)| {
            text.parse().map_err(|_| Error::InvalidSecretValue {
                tag: tag.to_string(),
                line,
                text: text.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_lines(strs: &[&str]) -> Vec<String> {
        strs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn each_supported_tag_parses() -> Result<(), Error> {
        let inputs = SecretInputs::from_lines(&to_lines(&["1", "-2", "3"]), "int")?;
        assert_eq!(inputs.values, SecretValues::Int(vec![1, -2, 3]));

        let inputs = SecretInputs::from_lines(&to_lines(&["1.5"]), "float")?;
        assert_eq!(inputs.values, SecretValues::Float(vec![1.5]));

        let inputs = SecretInputs::from_lines(&to_lines(&["2.25", "-0.5"]), "double")?;
        assert_eq!(inputs.values, SecretValues::Double(vec![2.25, -0.5]));

        let huge = "123456789012345678901234567890";
        let inputs = SecretInputs::from_lines(&to_lines(&[huge]), "BigInteger")?;
        assert_eq!(
            inputs.values,
            SecretValues::BigInteger(vec![BigInt::from_str(huge).unwrap()])
        );

        let inputs = SecretInputs::from_lines(&to_lines(&["3.14159265358979323846"]), "BigDecimal")?;
        assert_eq!(
            inputs.values,
            SecretValues::BigDecimal(vec![
                BigDecimal::from_str("3.14159265358979323846").unwrap()
            ])
        );
        Ok(())
    }

    #[test]
    fn empty_file_is_an_empty_list() -> Result<(), Error> {
        let inputs = SecretInputs::from_lines(&[], "int")?;
        assert!(inputs.values.is_empty());
        Ok(())
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let err = SecretInputs::from_lines(&to_lines(&["1"]), "complex").unwrap_err();
        assert!(matches!(err, Error::UnsupportedDataType { tag } if tag == "complex"));
    }

    #[test]
    fn unparseable_value_names_the_line() {
        let err = SecretInputs::from_lines(&to_lines(&["1", "12a", "3"]), "int").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidSecretValue { line: 1, .. }
        ));
    }
}
