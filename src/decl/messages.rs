//! Message catalogs for diagnostics
//!
//! English is the default; Russian follows the wording of the desktop tool
//! these checks first shipped in. Token kind names are never translated.

use crate::decl::token::TokenKind;
use crate::decl::validation::state::Expectation;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Output language for rendered diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ru,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Ru];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
        }
    }

    /// Human-readable form of what a state expected.
    pub fn expectation(&self, expected: Expectation) -> &'static str {
        match (self, expected) {
            (Language::En, Expectation::VarKeyword) => "keyword 'var'",
            (Language::En, Expectation::Identifier) => "identifier",
            (Language::En, Expectation::ColonOrDelimiter) => "colon or semicolon",
            (Language::En, Expectation::Type) => "variable type",
            (Language::En, Expectation::Semicolon) => "semicolon",
            (Language::Ru, Expectation::VarKeyword) => "ключевое слово 'var'",
            (Language::Ru, Expectation::Identifier) => "идентификатор",
            (Language::Ru, Expectation::ColonOrDelimiter) => "двоеточие или точка с запятой",
            (Language::Ru, Expectation::Type) => "тип переменной",
            (Language::Ru, Expectation::Semicolon) => "точка с запятой",
        }
    }

    pub fn unexpected_token(&self, expected: Expectation, found: TokenKind, text: &str) -> String {
        let expected = self.expectation(expected);
        match self {
            Language::En => format!("expected {}, got <{}> {:?}", expected, found, text),
            Language::Ru => format!("Ожидал: {}, получил: <{}> {:?}", expected, found, text),
        }
    }

    pub fn unterminated(&self) -> &'static str {
        match self {
            Language::En => "variable declaration is not terminated",
            Language::Ru => "Декларация переменных не завершена",
        }
    }

    pub fn success(&self) -> &'static str {
        match self {
            Language::En => "no errors found",
            Language::Ru => "Ошибок не обнаружено",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Returned when a language code is not in the catalog
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language '{0}' (available: en, ru)")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_language_codes() {
        assert_eq!("en".parse::<Language>(), Ok(Language::En));
        assert_eq!("RU".parse::<Language>(), Ok(Language::Ru));
        assert_eq!(
            "de".parse::<Language>(),
            Err(UnknownLanguage("de".to_string()))
        );
    }

    #[test]
    fn test_unexpected_token_english() {
        let msg = Language::En.unexpected_token(Expectation::VarKeyword, TokenKind::Identifier, "vr");
        assert_eq!(msg, "expected keyword 'var', got <Identifier> \"vr\"");
    }

    #[test]
    fn test_unexpected_token_russian() {
        let msg = Language::Ru.unexpected_token(Expectation::Type, TokenKind::Keyword, "var");
        assert_eq!(msg, "Ожидал: тип переменной, получил: <Keyword> \"var\"");
    }

    #[test]
    fn test_identifier_state_wording() {
        assert_eq!(
            Language::En.expectation(Expectation::ColonOrDelimiter),
            "colon or semicolon"
        );
        assert_eq!(
            Language::Ru.expectation(Expectation::ColonOrDelimiter),
            "двоеточие или точка с запятой"
        );
    }

    #[test]
    fn test_every_expectation_has_text() {
        let all = [
            Expectation::VarKeyword,
            Expectation::Identifier,
            Expectation::ColonOrDelimiter,
            Expectation::Type,
            Expectation::Semicolon,
        ];
        for lang in Language::ALL {
            for expected in all {
                assert!(!lang.expectation(expected).is_empty());
            }
            assert!(!lang.unterminated().is_empty());
            assert!(!lang.success().is_empty());
        }
    }
}
