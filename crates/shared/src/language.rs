use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
    Hi,
    Ur,
    Tl,
    Fr,
    Bn,
    Ru,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Language {
    pub const BASE: Language = Language::En;

    pub const ALL: [Language; 8] = [
        Language::En,
        Language::Ar,
        Language::Hi,
        Language::Ur,
        Language::Tl,
        Language::Fr,
        Language::Bn,
        Language::Ru,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
            Language::Hi => "hi",
            Language::Ur => "ur",
            Language::Tl => "tl",
            Language::Fr => "fr",
            Language::Bn => "bn",
            Language::Ru => "ru",
        }
    }

    /// English name, used when rendering prompt templates.
    pub fn name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ar => "Arabic",
            Language::Hi => "Hindi",
            Language::Ur => "Urdu",
            Language::Tl => "Tagalog",
            Language::Fr => "French",
            Language::Bn => "Bengali",
            Language::Ru => "Russian",
        }
    }

    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ar => "العربية",
            Language::Hi => "हिन्दी",
            Language::Ur => "اردو",
            Language::Tl => "Tagalog",
            Language::Fr => "Français",
            Language::Bn => "বাংলা",
            Language::Ru => "Русский",
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            Language::Ar | Language::Ur => Direction::Rtl,
            _ => Direction::Ltr,
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code))
    }

    /// Unknown or missing codes fall back to the base language.
    pub fn resolve(code: Option<&str>) -> Language {
        code.and_then(Self::from_code).unwrap_or(Self::BASE)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
