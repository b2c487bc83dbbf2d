//! Read-only localized string tables.
//!
//! Each locale is a flat key → string map embedded at build time. Lookups
//! fall back from the requested language to English, and finally to the key
//! itself so a missing translation never renders as an empty string.

use std::collections::HashMap;
use std::sync::Arc;
use anyhow::{Context, Result};
use once_cell::sync::Lazy;

use crate::language::Language;

type Table = HashMap<String, String>;

const EMBEDDED_LOCALES: &[(Language, &str)] = &[
    (Language::En, include_str!("../locales/en.json")),
    (Language::Ar, include_str!("../locales/ar.json")),
    (Language::Hi, include_str!("../locales/hi.json")),
];

static EMBEDDED: Lazy<Arc<Catalog>> = Lazy::new(|| {
    Arc::new(Catalog::from_sources(EMBEDDED_LOCALES).expect("embedded locale tables are valid JSON"))
});

#[derive(Debug, Default, Clone)]
pub struct Catalog {
    tables: HashMap<Language, Table>,
}

impl Catalog {
    /// The catalog built from the locale files shipped with the crate.
    pub fn embedded() -> Arc<Catalog> {
        EMBEDDED.clone()
    }

    pub fn from_sources(sources: &[(Language, &str)]) -> Result<Self> {
        let mut tables = HashMap::new();
        for (lang, raw) in sources {
            let table: Table = serde_json::from_str(raw)
                .with_context(|| format!("Invalid locale table for '{}'", lang))?;
            tables.insert(*lang, table);
        }
        Ok(Self { tables })
    }

    pub fn get(&self, lang: Language, key: &str) -> Option<&str> {
        self.tables
            .get(&lang)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }

    pub fn text<'a>(&'a self, lang: Language, key: &'a str) -> &'a str {
        self.get(lang, key)
            .or_else(|| self.get(Language::BASE, key))
            .unwrap_or(key)
    }
}
