use serde::Deserialize;
use serde_json::Value;

use std::sync::OnceLock;

use super::{Locale, TranslationKey};

const ES_JSON: &str = include_str!("../../locales/es.json");
const EN_JSON: &str = include_str!("../../locales/en.json");

static EMBEDDED: OnceLock<Catalog> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FaqEntry {
    #[serde(rename = "q")]
    pub question: String,
    #[serde(rename = "a")]
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Highlight {
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// Translation tables for every supported locale.
#[derive(Debug, Clone)]
pub struct Catalog {
    es: Value,
    en: Value,
}

impl Catalog {
    pub fn from_json(es: &str, en: &str) -> Result<Self, serde_json::Error> {
        Ok(Self {
            es: serde_json::from_str(es)?,
            en: serde_json::from_str(en)?,
        })
    }

    /// Tables compiled into the binary from `locales/`.
    pub fn embedded() -> &'static Catalog {
        EMBEDDED.get_or_init(|| {
            Self::from_json(ES_JSON, EN_JSON)
                .expect("Invalid embedded translation tables")
        })
    }

    fn root(&self, locale: Locale) -> &Value {
        match locale {
            Locale::Es => &self.es,
            Locale::En => &self.en,
        }
    }

    /// Looks up the string at a dotted path.
    ///
    /// Returns `key` itself when a segment is missing, the value is not a
    /// string, or the string is empty.
    pub fn translate<'a>(&'a self, locale: Locale, key: &'a str) -> &'a str {
        match lookup(self.root(locale), key) {
            Some(Value::String(s)) if !s.is_empty() => s.as_str(),
            _ => key,
        }
    }

    /// Structured value (array or object) at a dotted path.
    pub fn translate_object(
        &self,
        locale: Locale,
        key: &str,
    ) -> Option<&Value> {
        lookup(self.root(locale), key).filter(|v| !v.is_null())
    }

    pub fn text(&self, locale: Locale, key: TranslationKey) -> &str {
        self.translate(locale, key.path())
    }

    pub fn faq(&self, locale: Locale) -> Vec<FaqEntry> {
        self.structured(locale, "faq.questions")
    }

    pub fn headlines(&self, locale: Locale) -> Vec<String> {
        self.structured(locale, "hero.headlines")
    }

    pub fn highlights(&self, locale: Locale) -> Vec<Highlight> {
        self.structured(locale, "why.cards")
    }

    fn structured<T: for<'de> Deserialize<'de>>(
        &self,
        locale: Locale,
        key: &str,
    ) -> Vec<T> {
        self.translate_object(locale, key)
            .and_then(|value| Vec::<T>::deserialize(value).ok())
            .unwrap_or_default()
    }
}

fn lookup<'v>(root: &'v Value, key: &str) -> Option<&'v Value> {
    key.split('.').try_fold(root, |value, segment| match value {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => {
            segment.parse::<usize>().ok().and_then(|i| items.get(i))
        }
        _ => None,
    })
}
