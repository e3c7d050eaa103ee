use serde::{Deserialize, Serialize};

use crate::selectors::SelectorParseError;

/// Language for violation and field-error messages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }

    /// Accepts bare language codes and region-qualified tags ("fr-CA", "en_US")
    pub fn parse_code(s: &str) -> Result<Self, SelectorParseError> {
        let lang = s
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_lowercase();
        match lang.as_str() {
            "en" | "english" => Ok(Locale::En),
            "fr" | "french" | "francais" | "français" => Ok(Locale::Fr),
            _ => Err(SelectorParseError {
                selector: "locale",
                code: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parsing() {
        assert_eq!(Locale::parse_code("fr-CA"), Ok(Locale::Fr));
        assert_eq!(Locale::parse_code("en_US"), Ok(Locale::En));
        assert_eq!(Locale::parse_code("EN"), Ok(Locale::En));
        assert!(Locale::parse_code("de").is_err());
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Locale::default(), Locale::En);
    }
}
