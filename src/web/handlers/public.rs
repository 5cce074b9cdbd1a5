use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, get, web};
use serde::Deserialize;

use maizul::i18n::{Catalog, Locale, TranslationKey};
use maizul::menu::{FilterOutcome, MenuFilter, TagFilter, apply_filter};
use maizul::models::{MenuCategory, MenuItem};
use maizul::schedule::{MealPeriod, initial_menu_category};

use crate::web::errors::ApiError;
use crate::web::helpers::render;
use crate::web::state::AppState;
use crate::web::templates::{
    Chrome, HomeTemplate, HoursRow, MenuCard, MenuTemplate, Tab,
};

#[derive(Debug, Default, Deserialize)]
pub struct MenuPageQuery {
    pub category: Option<String>,
    pub q: Option<String>,
    pub tag: Option<String>,
}

fn parse_locale(raw: &str) -> Result<Locale, ApiError> {
    Locale::from_code(raw)
        .ok_or_else(|| ApiError::NotFound("Page not found".into()))
}

fn request_path(req: &HttpRequest) -> String {
    match req.query_string() {
        "" => req.path().to_string(),
        query => format!("{}?{}", req.path(), query),
    }
}

fn format_price(price: f64, prefix: &str) -> String {
    if price.fract() == 0.0 {
        format!("{}{:.0}", prefix, price)
    } else {
        format!("{}{:.2}", prefix, price)
    }
}

fn label(catalog: &Catalog, locale: Locale, key: TranslationKey) -> String {
    catalog.text(locale, key).to_string()
}

fn menu_href(
    locale: Locale,
    category: MenuCategory,
    query: &str,
    tag: TagFilter,
) -> String {
    let mut href = format!("/{}/menu?category={}", locale, category);
    if !query.is_empty() {
        href.push_str("&q=");
        href.push_str(&urlencoding::encode(query));
    }
    if tag != TagFilter::All {
        href.push_str("&tag=");
        href.push_str(tag.as_str());
    }
    href
}

#[get("/")]
pub async fn index(state: web::Data<AppState>) -> HttpResponse {
    let target = format!("/{}", state.default_locale());
    HttpResponse::Found()
        .insert_header((header::LOCATION, target))
        .finish()
}

#[get("/{lang}")]
pub async fn home(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let locale = parse_locale(&path)?;
    let catalog = state.catalog;
    let period = state.period.current();

    let hours = MenuCategory::ALL
        .iter()
        .map(|&category| {
            let range = state.hours.range(category);
            let key = TranslationKey::category(category);
            HoursRow {
                label: label(catalog, locale, key),
                range: format!("{}:00 - {}:00", range.start, range.end),
                href: format!("/{}/menu?category={}", locale, category),
                current: period.category() == Some(category),
            }
        })
        .collect();

    let period_label = match period {
        MealPeriod::Closed => {
            label(catalog, locale, TranslationKey::HoursClosed)
        }
        open => format!(
            "{} {}",
            catalog.text(locale, TranslationKey::HoursNow),
            catalog.text(locale, TranslationKey::period(open))
        ),
    };

    let headline = catalog
        .headlines(locale)
        .into_iter()
        .next()
        .unwrap_or_default();

    Ok(render(HomeTemplate {
        chrome: Chrome::new(catalog, locale, &request_path(&req)),
        headline,
        period_label,
        is_open: period.is_open(),
        hours,
        highlights: catalog.highlights(locale),
        faq: catalog.faq(locale),
    }))
}

#[get("/{lang}/menu")]
pub async fn menu(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    query: web::Query<MenuPageQuery>,
) -> Result<HttpResponse, ApiError> {
    let locale = parse_locale(&path)?;
    let catalog = state.catalog;

    let category = initial_menu_category(
        query.category.as_deref(),
        state.period.current(),
    );
    let text_query = query.q.clone().unwrap_or_default();
    let tag: TagFilter = query
        .tag
        .as_deref()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_default();

    let (items, load_failed): (Vec<MenuItem>, bool) =
        match state.db.list_menu(None, true).await {
            Ok(items) => (items, false),
            Err(e) => {
                log::error!("Failed to load menu for public page: {}", e);
                (Vec::new(), true)
            }
        };

    let filter = MenuFilter::new(category)
        .with_query(text_query.clone())
        .with_tag(tag);
    let price_prefix = catalog.text(locale, TranslationKey::MenuPricePrefix);

    let cards = match apply_filter(&items, &filter, locale) {
        FilterOutcome::NoMatches => Vec::new(),
        FilterOutcome::Matches(matched) => matched
            .into_iter()
            .map(|item| MenuCard {
                name: item.name(locale).to_string(),
                description: item.description(locale).to_string(),
                price: format_price(item.price, price_prefix),
                image: item.image.clone().unwrap_or_default(),
                featured: item.is_featured,
                tags: item
                    .tags
                    .iter()
                    .map(|&t| {
                        let key = TranslationKey::tag_filter(t.into());
                        label(catalog, locale, key)
                    })
                    .collect(),
            })
            .collect(),
    };

    let categories = MenuCategory::ALL
        .iter()
        .map(|&c| Tab {
            label: label(catalog, locale, TranslationKey::category(c)),
            href: menu_href(locale, c, &text_query, tag),
            active: c == category,
        })
        .collect();

    let tags = TagFilter::CHOICES
        .iter()
        .map(|&t| Tab {
            label: label(catalog, locale, TranslationKey::tag_filter(t)),
            href: menu_href(locale, category, &text_query, t),
            active: t == tag,
        })
        .collect();

    Ok(render(MenuTemplate {
        chrome: Chrome::new(catalog, locale, &request_path(&req)),
        category: category.to_string(),
        query: text_query,
        tag: tag.as_str().to_string(),
        categories,
        tags,
        items: cards,
        load_failed,
    }))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index).service(home).service(menu);
}

#[cfg(test)]
mod tests {
    use super::*;

    use maizul::models::MenuTag;

    #[test]
    fn prices_drop_trailing_zero_cents() {
        assert_eq!(format_price(145.0, "$"), "$145");
        assert_eq!(format_price(99.5, "$"), "$99.50");
    }

    #[test]
    fn menu_links_keep_search_and_tag() {
        let href = menu_href(
            Locale::En,
            MenuCategory::Lunch,
            "tacos de pescado",
            TagFilter::Only(MenuTag::Popular),
        );
        assert_eq!(
            href,
            "/en/menu?category=lunch&q=tacos%20de%20pescado&tag=popular"
        );
        assert_eq!(
            menu_href(
                Locale::Es,
                MenuCategory::Lunch,
                "café & más",
                TagFilter::All
            ),
            "/es/menu?category=lunch&q=caf%C3%A9%20%26%20m%C3%A1s"
        );
        assert_eq!(
            menu_href(Locale::Es, MenuCategory::Dinner, "", TagFilter::All),
            "/es/menu?category=dinner"
        );
    }
}
