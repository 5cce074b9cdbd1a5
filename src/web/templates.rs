use askama::Template;

use maizul::i18n::{Catalog, FaqEntry, Highlight, Locale, switch_locale_path};

/// Shared page frame: active language, the link to the other language and
/// the translation lookup used by every template.
pub struct Chrome {
    pub locale: Locale,
    pub switch_href: String,
    pub switch_label: &'static str,
    catalog: &'static Catalog,
}

impl Chrome {
    pub fn new(
        catalog: &'static Catalog,
        locale: Locale,
        current_path: &str,
    ) -> Self {
        let other = match locale {
            Locale::Es => Locale::En,
            Locale::En => Locale::Es,
        };

        Self {
            locale,
            switch_href: switch_locale_path(current_path, other),
            switch_label: match other {
                Locale::Es => "ES",
                Locale::En => "EN",
            },
            catalog,
        }
    }

    pub fn lang(&self) -> &'static str {
        self.locale.as_str()
    }

    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.catalog.translate(self.locale, key)
    }
}

pub struct HoursRow {
    pub label: String,
    pub range: String,
    pub href: String,
    pub current: bool,
}

#[derive(Template)]
#[template(path = "public/home.html")]
pub struct HomeTemplate {
    pub chrome: Chrome,
    pub headline: String,
    pub period_label: String,
    pub is_open: bool,
    pub hours: Vec<HoursRow>,
    pub highlights: Vec<Highlight>,
    pub faq: Vec<FaqEntry>,
}

pub struct Tab {
    pub label: String,
    pub href: String,
    pub active: bool,
}

pub struct MenuCard {
    pub name: String,
    pub description: String,
    pub price: String,
    /// Empty when the dish has no photo.
    pub image: String,
    pub featured: bool,
    pub tags: Vec<String>,
}

#[derive(Template)]
#[template(path = "public/menu.html")]
pub struct MenuTemplate {
    pub chrome: Chrome,
    pub category: String,
    pub query: String,
    pub tag: String,
    pub categories: Vec<Tab>,
    pub tags: Vec<Tab>,
    pub items: Vec<MenuCard>,
    pub load_failed: bool,
}
