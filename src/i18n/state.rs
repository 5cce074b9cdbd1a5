use serde_json::Value;

use std::sync::Arc;

use super::{Catalog, Locale, TranslationKey, resolve_locale};
use crate::storage::{KeyValueStore, LANGUAGE_KEY, StorageError};

/// Owner of the active language.
///
/// Created once at application start and passed to whatever renders text.
/// The only mutation is [`LocaleState::set`].
pub struct LocaleState {
    active: Locale,
    catalog: &'static Catalog,
    store: Arc<dyn KeyValueStore>,
}

impl LocaleState {
    pub fn init(
        store: Arc<dyn KeyValueStore>,
        url_path: Option<&str>,
        default: Locale,
    ) -> Self {
        Self::with_catalog(store, url_path, default, Catalog::embedded())
    }

    pub fn with_catalog(
        store: Arc<dyn KeyValueStore>,
        url_path: Option<&str>,
        default: Locale,
        catalog: &'static Catalog,
    ) -> Self {
        let persisted = store.get(LANGUAGE_KEY);
        let active = resolve_locale(persisted.as_deref(), url_path, default);

        Self {
            active,
            catalog,
            store,
        }
    }

    pub fn active(&self) -> Locale {
        self.active
    }

    /// Value for the document `lang` attribute.
    pub fn html_lang(&self) -> &'static str {
        self.active.as_str()
    }

    /// Persists the choice, then switches. When the store rejects the
    /// write the active language is left as it was.
    pub fn set(&mut self, locale: Locale) -> Result<(), StorageError> {
        self.store.set(LANGUAGE_KEY, locale.as_str())?;
        self.active = locale;
        log::debug!("display language set to {}", locale);
        Ok(())
    }

    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.catalog.translate(self.active, key)
    }

    pub fn t_obj(&self, key: &str) -> Option<&Value> {
        self.catalog.translate_object(self.active, key)
    }

    pub fn text(&self, key: TranslationKey) -> &str {
        self.catalog.text(self.active, key)
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }
}
