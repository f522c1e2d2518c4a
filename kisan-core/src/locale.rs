use serde::{Deserialize, Serialize};

/// Display language for advisories and tips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Locale {
    #[default]
    En,
    Hi,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Hi => "hi",
        }
    }

    pub const fn all() -> &'static [Locale] {
        &[Locale::En, Locale::Hi]
    }

    /// Native name of the language, for pickers.
    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Hi => "हिंदी",
        }
    }

    /// Resolve a language tag. Never fails: anything unrecognized is English.
    ///
    /// Region suffixes are ignored, so `hi-IN` and `hi_IN` both resolve to Hindi.
    pub fn from_tag(tag: &str) -> Self {
        let lang = tag.trim().split(['-', '_']).next().unwrap_or_default().to_lowercase();

        match lang.as_str() {
            "hi" | "hindi" => Locale::Hi,
            _ => Locale::En,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Locale {
    fn from(value: &str) -> Self {
        Locale::from_tag(value)
    }
}

impl From<String> for Locale {
    fn from(value: String) -> Self {
        Locale::from_tag(&value)
    }
}

impl From<Locale> for String {
    fn from(value: Locale) -> Self {
        value.as_str().to_string()
    }
}
