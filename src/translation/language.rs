//! Language values resolved against the catalog.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use super::catalog;
use super::error::{Result, TranslateError};
use super::response::type_name;

/// A language known to the catalog.
///
/// Only constructible through catalog resolution, so `code` is always a
/// catalog key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    code: &'static str,
    name: &'static str,
}

impl Language {
    /// Resolves a language from a catalog code only.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError::UnknownLanguageCode`] if `code` is not a
    /// catalog key.
    pub fn from_code(code: &str) -> Result<Self> {
        catalog::entry(code)
            .map(|(code, name)| Self { code, name })
            .ok_or_else(|| TranslateError::UnknownLanguageCode(code.to_string()))
    }

    /// Resolves a language from its exact English name only.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError::UnrecognizedLanguage`] if no catalog entry
    /// has that name.
    pub fn from_name(name: &str) -> Result<Self> {
        catalog::find_by_name(name)
            .and_then(catalog::entry)
            .map(|(code, name)| Self { code, name })
            .ok_or_else(|| TranslateError::UnrecognizedLanguage(name.to_string()))
    }

    /// Resolves a language from a code or an English name.
    ///
    /// The identifier is tried as a code first and only then as a name, so
    /// an identifier that is both resolves as a code.
    ///
    /// # Errors
    ///
    /// Returns [`TranslateError::UnrecognizedLanguage`] if neither lookup
    /// matches.
    pub fn from_identifier(identifier: &str) -> Result<Self> {
        Self::from_code(identifier).or_else(|_| Self::from_name(identifier))
    }

    pub const fn code(&self) -> &'static str {
        self.code
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_rtl(&self) -> bool {
        catalog::is_rtl(self.code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl FromStr for Language {
    type Err = TranslateError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_identifier(s)
    }
}

/// Either an unresolved identifier or an already resolved [`Language`].
///
/// Accepted by the client setters and resolved once, at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageInput {
    Identifier(String),
    Resolved(Language),
}

impl LanguageInput {
    /// Resolves this input into a [`Language`].
    pub fn resolve(self) -> Result<Language> {
        match self {
            Self::Identifier(identifier) => Language::from_identifier(&identifier),
            Self::Resolved(language) => Ok(language),
        }
    }
}

impl From<Language> for LanguageInput {
    fn from(language: Language) -> Self {
        Self::Resolved(language)
    }
}

impl From<&str> for LanguageInput {
    fn from(identifier: &str) -> Self {
        Self::Identifier(identifier.to_string())
    }
}

impl From<String> for LanguageInput {
    fn from(identifier: String) -> Self {
        Self::Identifier(identifier)
    }
}

/// Accepts dynamically typed input, e.g. a field of a JSON request.
///
/// Only JSON strings are identifiers; anything else is rejected with
/// [`TranslateError::InvalidLanguageInput`].
impl TryFrom<&Value> for LanguageInput {
    type Error = TranslateError;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::String(identifier) => Ok(Self::Identifier(identifier.clone())),
            other => Err(TranslateError::InvalidLanguageInput(type_name(other).to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_code_and_name_resolution_agree_for_whole_catalog() {
        for (code, name) in catalog::languages() {
            assert_eq!(Language::from_identifier(code).unwrap().code(), code);
            assert_eq!(Language::from_identifier(name).unwrap().code(), code);
        }
    }

    #[test]
    fn test_from_code_rejects_names() {
        assert_eq!(Language::from_code("zh-TW").unwrap().name(), "Chinese traditional");
        assert!(matches!(
            Language::from_code("English"),
            Err(TranslateError::UnknownLanguageCode(code)) if code == "English"
        ));
    }

    #[test]
    fn test_from_name_rejects_codes() {
        assert_eq!(Language::from_name("Hebrew").unwrap().code(), "he");
        assert!(matches!(
            Language::from_name("en"),
            Err(TranslateError::UnrecognizedLanguage(name)) if name == "en"
        ));
    }

    #[test]
    fn test_unrecognized_language() {
        let result = Language::from_identifier("not-a-real-code");
        assert!(matches!(
            result,
            Err(TranslateError::UnrecognizedLanguage(id)) if id == "not-a-real-code"
        ));
    }

    #[test]
    fn test_resolution_is_exact() {
        assert!(Language::from_identifier("english").is_err());
        assert!(Language::from_identifier(" en").is_err());
        assert!(Language::from_identifier("").is_err());
    }

    #[test]
    fn test_derived_fields() {
        let hebrew = Language::from_identifier("Hebrew").unwrap();
        assert_eq!(hebrew.code(), "he");
        assert_eq!(hebrew.name(), "Hebrew");
        assert!(hebrew.is_rtl());

        let french = Language::from_identifier("fr").unwrap();
        assert!(!french.is_rtl());
    }

    #[test]
    fn test_display_is_name() {
        let language: Language = "ja".parse().unwrap();
        assert_eq!(language.to_string(), "Japanese");
    }

    #[test]
    fn test_language_input_resolve() {
        let resolved = LanguageInput::from("Spanish").resolve().unwrap();
        assert_eq!(resolved.code(), "es");

        let german = Language::from_identifier("de").unwrap();
        assert_eq!(LanguageInput::from(german).resolve().unwrap(), german);
    }

    #[test]
    fn test_language_input_from_json_string() {
        let input = LanguageInput::try_from(&json!("fr")).unwrap();
        assert_eq!(input, LanguageInput::Identifier("fr".to_string()));
    }

    #[test]
    fn test_language_input_from_json_non_string() {
        for value in [json!(42), json!(null), json!(["en"]), json!({"code": "en"})] {
            assert!(matches!(
                LanguageInput::try_from(&value),
                Err(TranslateError::InvalidLanguageInput(_))
            ));
        }
    }
}
