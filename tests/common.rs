#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use maizul::models::*;
use maizul::types::UserPublic;

pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 5, 13, 22, 56).unwrap()
}

pub fn menu_item(
    category: MenuCategory,
    sort_order: i32,
    tags: &[MenuTag],
) -> MenuItem {
    MenuItem {
        id: Uuid::new_v4(),
        category,
        name_es: format!("Platillo {}", sort_order),
        name_en: format!("Dish {}", sort_order),
        description_es: String::new(),
        description_en: String::new(),
        price: 100.0,
        image: None,
        is_featured: false,
        is_available: true,
        sort_order,
        tags: tags.to_vec(),
        created_at: fixed_time(),
        updated_at: fixed_time(),
    }
}

pub fn named_item(
    category: MenuCategory,
    sort_order: i32,
    name_es: &str,
    name_en: &str,
) -> MenuItem {
    MenuItem {
        name_es: name_es.to_string(),
        name_en: name_en.to_string(),
        ..menu_item(category, sort_order, &[])
    }
}

pub fn fish_tacos() -> MenuItem {
    MenuItem {
        description_es: "Tacos de pescado fresco con pico de gallo y chipotle".into(),
        description_en: "Fresh fish with pico de gallo and chipotle".into(),
        ..named_item(
            MenuCategory::Breakfast,
            1,
            "Tacos de Pescado",
            "Fish Plate",
        )
    }
}

pub fn user_public(role: UserRole) -> UserPublic {
    UserPublic {
        id: Uuid::new_v4(),
        username: format!("{}-user", role),
        role,
        is_active: true,
        created_at: fixed_time(),
    }
}

pub fn user_public_json(user: &UserPublic) -> serde_json::Value {
    serde_json::to_value(user).unwrap()
}

/// Store that serves what it was seeded with and rejects every write.
pub struct ReadOnlyStore {
    inner: maizul::storage::MemoryStore,
}

impl ReadOnlyStore {
    pub fn with(entries: &[(&str, &str)]) -> Self {
        use maizul::storage::KeyValueStore;

        let inner = maizul::storage::MemoryStore::new();
        for (key, value) in entries {
            inner.set(key, value).unwrap();
        }
        Self { inner }
    }
}

impl maizul::storage::KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(
        &self,
        _key: &str,
        _value: &str,
    ) -> Result<(), maizul::storage::StorageError> {
        Err(std::io::Error::from(std::io::ErrorKind::PermissionDenied).into())
    }

    fn remove(&self, _key: &str) -> Result<(), maizul::storage::StorageError> {
        Err(std::io::Error::from(std::io::ErrorKind::PermissionDenied).into())
    }
}
