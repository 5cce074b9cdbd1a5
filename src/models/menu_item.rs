use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::{MenuCategory, MenuTag, parse_tags};
use crate::i18n::Locale;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: Uuid,
    pub category: MenuCategory,
    pub name_es: String,
    pub name_en: String,
    pub description_es: String,
    pub description_en: String,
    pub price: f64,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default = "default_true")]
    pub is_available: bool,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub tags: Vec<MenuTag>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Row shape as stored; tags are kept as plain text in the database.
#[derive(Debug, FromRow)]
pub struct MenuItemRow {
    pub id: Uuid,
    pub category: MenuCategory,
    pub name_es: String,
    pub name_en: String,
    pub description_es: String,
    pub description_en: String,
    pub price: f64,
    pub image: Option<String>,
    pub is_featured: bool,
    pub is_available: bool,
    pub sort_order: i32,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub category: MenuCategory,
    pub name_es: String,
    pub name_en: String,
    pub description_es: String,
    pub description_en: String,
    pub price: f64,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default = "default_true")]
    pub is_available: bool,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub tags: Vec<MenuTag>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub category: Option<MenuCategory>,
    pub name_es: Option<String>,
    pub name_en: Option<String>,
    pub description_es: Option<String>,
    pub description_en: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub is_featured: Option<bool>,
    pub is_available: Option<bool>,
    pub sort_order: Option<i32>,
    pub tags: Option<Vec<MenuTag>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MenuReorderEntry {
    pub id: Uuid,
    pub sort_order: i32,
}

fn default_true() -> bool {
    true
}

fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<MenuTag>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<String>>::deserialize(deserializer)?;
    Ok(raw.map(|tags| parse_tags(&tags)).unwrap_or_default())
}

fn validate_price(price: f64) -> Result<(), String> {
    if !price.is_finite() || price < 0.0 {
        return Err("Price must be a non-negative number".into());
    }
    Ok(())
}

fn validate_name(value: &str, field: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("Field '{}' is required", field));
    }
    Ok(())
}

impl MenuItem {
    pub fn name(&self, locale: Locale) -> &str {
        match locale {
            Locale::Es => &self.name_es,
            Locale::En => &self.name_en,
        }
    }

    pub fn description(&self, locale: Locale) -> &str {
        match locale {
            Locale::Es => &self.description_es,
            Locale::En => &self.description_en,
        }
    }

    pub fn has_tag(&self, tag: MenuTag) -> bool {
        self.tags.contains(&tag)
    }
}

impl From<MenuItemRow> for MenuItem {
    fn from(
        MenuItemRow {
            id,
            category,
            name_es,
            name_en,
            description_es,
            description_en,
            price,
            image,
            is_featured,
            is_available,
            sort_order,
            tags,
            created_at,
            updated_at,
        }: MenuItemRow,
    ) -> Self {
        MenuItem {
            id,
            category,
            name_es,
            name_en,
            description_es,
            description_en,
            price,
            image,
            is_featured,
            is_available,
            sort_order,
            tags: parse_tags(&tags),
            created_at,
            updated_at,
        }
    }
}

impl MenuItemCreate {
    pub fn validate(&self) -> Result<(), String> {
        validate_name(&self.name_es, "name_es")?;
        validate_name(&self.name_en, "name_en")?;
        validate_price(self.price)
    }
}

impl MenuItemUpdate {
    pub fn is_empty(&self) -> bool {
        matches!(
            self,
            Self {
                category: None,
                name_es: None,
                name_en: None,
                description_es: None,
                description_en: None,
                price: None,
                image: None,
                is_featured: None,
                is_available: None,
                sort_order: None,
                tags: None,
            }
        )
    }

    pub fn validate(&self) -> Result<(), String> {
        if let Some(name) = &self.name_es {
            validate_name(name, "name_es")?;
        }
        if let Some(name) = &self.name_en {
            validate_name(name, "name_en")?;
        }
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        Ok(())
    }
}
