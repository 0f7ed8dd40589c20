//! Parsing of translation endpoint responses.
//!
//! The endpoint answers with one of two JSON shapes:
//!
//! - a bare string, which is the whole translation:
//!   `"hola"`
//! - an array whose first element is the translation and whose optional
//!   second element lists dictionary entries, each an array of the source
//!   term followed by its alternate translations:
//!   `["hola",[["hello","hola","salve"]]]`
//!
//! Alternates may also arrive grouped in a nested array
//! (`["hello",["hola","salve"]]`); groups are flattened in order.
//!
//! The shape is inspected once, into a tagged `RawResponse`, and then converted
//! into a [`Translation`].

use std::str::FromStr;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use super::error::{Result, TranslateError};

/// Source term to its alternate translations, in response order.
pub type Dictionary = IndexMap<String, Vec<String>>;

/// A parsed translation result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Translation {
    /// The primary translated text.
    pub translation: String,
    /// Alternate translations per source term. Empty when the endpoint
    /// returned a plain string.
    pub dictionary: Dictionary,
}

/// A named field of a [`Translation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Translation,
    Dictionary,
}

impl FromStr for Field {
    type Err = TranslateError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "translation" => Ok(Self::Translation),
            "dictionary" => Ok(Self::Dictionary),
            other => Err(TranslateError::UnknownField(other.to_string())),
        }
    }
}

/// The value returned by [`Translation::get`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationField<'a> {
    Whole(&'a Translation),
    Translation(&'a str),
    Dictionary(&'a Dictionary),
}

impl Translation {
    /// Looks up a result field by name, or the whole result for `None`.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError::UnknownField`] for any name other than
    /// `translation` or `dictionary`.
    pub fn get(&self, field: Option<&str>) -> Result<TranslationField<'_>> {
        let Some(name) = field else {
            return Ok(TranslationField::Whole(self));
        };

        Ok(self.field(name.parse()?))
    }

    pub fn field(&self, field: Field) -> TranslationField<'_> {
        match field {
            Field::Translation => TranslationField::Translation(&self.translation),
            Field::Dictionary => TranslationField::Dictionary(&self.dictionary),
        }
    }
}

/// The two response shapes, after a single inspection of the decoded JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
enum RawResponse {
    Plain(String),
    Structured {
        translation: String,
        entries: Vec<(String, Vec<String>)>,
    },
}

impl RawResponse {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::String(translation) => Ok(Self::Plain(translation)),
            Value::Array(items) => Self::from_array(items),
            other => Err(malformed(format!(
                "expected a string or an array, got {}",
                type_name(&other)
            ))),
        }
    }

    fn from_array(items: Vec<Value>) -> Result<Self> {
        let mut items = items.into_iter();

        let translation = match items.next() {
            Some(Value::String(translation)) => translation,
            Some(other) => {
                return Err(malformed(format!(
                    "expected the translation to be a string, got {}",
                    type_name(&other)
                )));
            }
            None => return Err(malformed("empty response array")),
        };

        // A second element that is not an array carries no dictionary.
        let entries = match items.next() {
            Some(Value::Array(entries)) => entries
                .into_iter()
                .map(dictionary_entry)
                .collect::<Result<Vec<_>>>()?,
            _ => Vec::new(),
        };

        Ok(Self::Structured {
            translation,
            entries,
        })
    }

    fn into_translation(self) -> Translation {
        match self {
            Self::Plain(translation) => Translation {
                translation,
                dictionary: Dictionary::new(),
            },
            Self::Structured {
                translation,
                entries,
            } => {
                let mut dictionary = Dictionary::with_capacity(entries.len());
                // insert() keeps the first position of a repeated term and
                // replaces its alternates.
                for (term, alternates) in entries {
                    dictionary.insert(term, alternates);
                }
                Translation {
                    translation,
                    dictionary,
                }
            }
        }
    }
}

fn dictionary_entry(entry: Value) -> Result<(String, Vec<String>)> {
    let Value::Array(parts) = entry else {
        return Err(malformed(format!(
            "expected a dictionary entry array, got {}",
            type_name(&entry)
        )));
    };

    let mut parts = parts.into_iter();
    let term = match parts.next() {
        Some(Value::String(term)) => term,
        Some(other) => {
            return Err(malformed(format!(
                "expected a dictionary term string, got {}",
                type_name(&other)
            )));
        }
        None => return Err(malformed("empty dictionary entry")),
    };

    let mut alternates = Vec::new();
    for part in parts {
        match part {
            Value::String(alternate) => alternates.push(alternate),
            Value::Array(group) => {
                for alternate in group {
                    let Value::String(alternate) = alternate else {
                        return Err(malformed(format!(
                            "expected alternate translations for '{term}' to be strings"
                        )));
                    };
                    alternates.push(alternate);
                }
            }
            other => {
                return Err(malformed(format!(
                    "unexpected {} among alternates for '{term}'",
                    type_name(&other)
                )));
            }
        }
    }

    Ok((term, alternates))
}

/// Parses a raw response body into a [`Translation`].
///
/// # Errors
///
/// Returns [`TranslateError::MalformedResponse`] if the body is not JSON,
/// or is JSON of any shape other than the two described in the module docs.
pub fn parse(body: &str) -> Result<Translation> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| malformed(format!("response is not valid JSON: {e}")))?;

    RawResponse::from_value(value).map(RawResponse::into_translation)
}

fn malformed(message: impl Into<String>) -> TranslateError {
    TranslateError::MalformedResponse(message.into())
}

pub(super) const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn dictionary(entries: &[(&str, &[&str])]) -> Dictionary {
        entries
            .iter()
            .map(|(term, alternates)| {
                (
                    (*term).to_string(),
                    alternates.iter().map(|s| (*s).to_string()).collect(),
                )
            })
            .collect()
    }

    fn assert_malformed(body: &str) {
        let result = parse(body);
        assert!(
            matches!(result, Err(TranslateError::MalformedResponse(_))),
            "expected MalformedResponse for {body}, got {result:?}"
        );
    }

    #[test]
    fn test_parse_plain_string() {
        let result = parse(r#""hola""#).unwrap();
        assert_eq!(result.translation, "hola");
        assert!(result.dictionary.is_empty());
    }

    #[test]
    fn test_parse_grouped_alternates() {
        let result = parse(r#"["hola",[["hello",["hola","salve"]]]]"#).unwrap();
        assert_eq!(result.translation, "hola");
        assert_eq!(result.dictionary, dictionary(&[("hello", &["hola", "salve"])]));
    }

    #[test]
    fn test_parse_flat_alternates() {
        let result = parse(r#"["hola",[["hello","hola","salve"],["world","mundo"]]]"#).unwrap();
        assert_eq!(
            result.dictionary,
            dictionary(&[("hello", &["hola", "salve"]), ("world", &["mundo"])])
        );
    }

    #[test]
    fn test_parse_array_without_dictionary() {
        let result = parse(r#"["hola"]"#).unwrap();
        assert_eq!(result.translation, "hola");
        assert!(result.dictionary.is_empty());
    }

    #[test]
    fn test_parse_ignores_non_array_second_element() {
        let result = parse(r#"["hola","en"]"#).unwrap();
        assert_eq!(result.translation, "hola");
        assert!(result.dictionary.is_empty());
    }

    #[test]
    fn test_parse_term_without_alternates() {
        let result = parse(r#"["hola",[["hello"]]]"#).unwrap();
        assert_eq!(result.dictionary, dictionary(&[("hello", &[])]));
    }

    #[test]
    fn test_parse_duplicate_term_overwrites_in_place() {
        let result = parse(r#"["x",[["a","1"],["b","2"],["a","3","4"]]]"#).unwrap();
        let terms: Vec<_> = result.dictionary.keys().map(String::as_str).collect();
        assert_eq!(terms, ["a", "b"]);
        assert_eq!(result.dictionary["a"], ["3", "4"]);
    }

    #[test]
    fn test_parse_preserves_entry_order() {
        let result = parse(r#"["x",[["zebra","z"],["apple","a"],["mango","m"]]]"#).unwrap();
        let terms: Vec<_> = result.dictionary.keys().map(String::as_str).collect();
        assert_eq!(terms, ["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_parse_unicode() {
        let result = parse(r#"["こんにちは",[["hello",["こんにちは","やあ"]]]]"#).unwrap();
        assert_eq!(result.translation, "こんにちは");
        assert_eq!(result.dictionary["hello"], ["こんにちは", "やあ"]);
    }

    #[test]
    fn test_parse_rejects_other_json_types() {
        assert_malformed("123");
        assert_malformed("null");
        assert_malformed("{}");
        assert_malformed("true");
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        assert_malformed("");
        assert_malformed("not json");
        assert_malformed(r#"["hola""#);
    }

    #[test]
    fn test_parse_rejects_bad_structured_shapes() {
        assert_malformed("[]");
        assert_malformed("[42]");
        assert_malformed(r#"["hola",["hello"]]"#);
        assert_malformed(r#"["hola",[[]]]"#);
        assert_malformed(r#"["hola",[[1,"uno"]]]"#);
        assert_malformed(r#"["hola",[["hello",1]]]"#);
        assert_malformed(r#"["hola",[["hello",["hola",null]]]]"#);
    }

    #[test]
    fn test_get_whole_result() {
        let result = parse(r#"["hola",[["hello",["hola"]]]]"#).unwrap();
        assert_eq!(result.get(None).unwrap(), TranslationField::Whole(&result));
    }

    #[test]
    fn test_get_named_fields() {
        let result = parse(r#"["hola",[["hello",["hola","salve"]]]]"#).unwrap();

        assert_eq!(
            result.get(Some("translation")).unwrap(),
            TranslationField::Translation("hola")
        );

        let TranslationField::Dictionary(dict) = result.get(Some("dictionary")).unwrap() else {
            panic!("expected the dictionary field");
        };
        assert_eq!(dict["hello"], ["hola", "salve"]);
    }

    #[test]
    fn test_get_unknown_field() {
        let result = parse(r#""hola""#).unwrap();
        assert!(matches!(
            result.get(Some("bogus")),
            Err(TranslateError::UnknownField(name)) if name == "bogus"
        ));
    }

    #[test]
    fn test_serialize_keeps_dictionary_order() {
        let result = parse(r#"["x",[["b","2"],["a","1"]]]"#).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r#"{"translation":"x","dictionary":{"b":["2"],"a":["1"]}}"#
        );
    }
}
