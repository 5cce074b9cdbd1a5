use super::Database;
use crate::common::GeneralError;
use crate::models::{
    MenuCategory, MenuItemCreate, MenuTag, UserCreate, UserRole, tag_names,
};

struct SampleItem {
    category: MenuCategory,
    name_es: &'static str,
    name_en: &'static str,
    description_es: &'static str,
    description_en: &'static str,
    price: f64,
    is_featured: bool,
    sort_order: i32,
    tags: &'static [MenuTag],
    image: &'static str,
}

const SAMPLE_MENU: [SampleItem; 12] = [
    SampleItem {
        category: MenuCategory::Breakfast,
        name_es: "Chilaquiles Verdes",
        name_en: "Green Chilaquiles",
        description_es: "Tortilla frita con salsa verde, crema, queso y huevo",
        description_en: "Fried tortilla with green salsa, cream, cheese and egg",
        price: 145.0,
        is_featured: true,
        sort_order: 1,
        tags: &[MenuTag::Popular],
        image: "https://images.unsplash.com/photo-1534352956036-cd81e27dd615?w=400",
    },
    SampleItem {
        category: MenuCategory::Breakfast,
        name_es: "Huevos Rancheros",
        name_en: "Ranch-Style Eggs",
        description_es: "Huevos fritos sobre tortilla con salsa ranchera",
        description_en: "Fried eggs on tortilla with ranchera sauce",
        price: 125.0,
        is_featured: false,
        sort_order: 2,
        tags: &[],
        image: "https://images.unsplash.com/photo-1528712306091-ed0763094c98?w=400",
    },
    SampleItem {
        category: MenuCategory::Breakfast,
        name_es: "Molletes Maizul",
        name_en: "Maizul Molletes",
        description_es: "Pan con frijoles, queso gratinado y pico de gallo",
        description_en: "Bread with beans, melted cheese and pico de gallo",
        price: 115.0,
        is_featured: false,
        sort_order: 3,
        tags: &[MenuTag::Vegetarian],
        image: "https://images.unsplash.com/photo-1565299585323-38d6b0865b47?w=400",
    },
    SampleItem {
        category: MenuCategory::Breakfast,
        name_es: "Hot Cakes con Frutas",
        name_en: "Pancakes with Fruits",
        description_es: "Torre de hot cakes con frutas frescas y miel de maple",
        description_en: "Stack of pancakes with fresh fruits and maple syrup",
        price: 135.0,
        is_featured: false,
        sort_order: 4,
        tags: &[MenuTag::Vegetarian],
        image: "https://images.unsplash.com/photo-1567620905732-2d1ec7ab7445?w=400",
    },
    SampleItem {
        category: MenuCategory::Lunch,
        name_es: "Tacos de Pescado",
        name_en: "Fish Tacos",
        description_es: "Tacos de pescado fresco con pico de gallo y chipotle",
        description_en: "Fresh fish tacos with pico de gallo and chipotle",
        price: 185.0,
        is_featured: true,
        sort_order: 1,
        tags: &[MenuTag::Popular, MenuTag::Specialty],
        image: "https://images.unsplash.com/photo-1551504734-5ee1c4a1479b?w=400",
    },
    SampleItem {
        category: MenuCategory::Lunch,
        name_es: "Aguachile Maizul",
        name_en: "Maizul Aguachile",
        description_es: "Camarón fresco en jugo de limón con pepino y chile serrano",
        description_en: "Fresh shrimp in lime juice with cucumber and serrano pepper",
        price: 225.0,
        is_featured: true,
        sort_order: 2,
        tags: &[MenuTag::Popular, MenuTag::Specialty],
        image: "https://images.unsplash.com/photo-1681394421550-83cc9341b9f8?w=400",
    },
    SampleItem {
        category: MenuCategory::Lunch,
        name_es: "Bowl de Pollo Mediterráneo",
        name_en: "Mediterranean Chicken Bowl",
        description_es: "Pollo a las hierbas con quinoa, verduras y hummus",
        description_en: "Herb chicken with quinoa, vegetables and hummus",
        price: 195.0,
        is_featured: false,
        sort_order: 3,
        tags: &[],
        image: "https://images.unsplash.com/photo-1546069901-ba9599a7e63c?w=400",
    },
    SampleItem {
        category: MenuCategory::Lunch,
        name_es: "Ensalada Tropical",
        name_en: "Tropical Salad",
        description_es: "Mix de lechugas, mango, aguacate y vinagreta de limón",
        description_en: "Mixed greens, mango, avocado and lime vinaigrette",
        price: 155.0,
        is_featured: false,
        sort_order: 4,
        tags: &[MenuTag::Vegetarian],
        image: "https://images.unsplash.com/photo-1512621776951-a57141f2eefd?w=400",
    },
    SampleItem {
        category: MenuCategory::Dinner,
        name_es: "Rib Eye al Carbón",
        name_en: "Charcoal Rib Eye",
        description_es: "Corte premium de 400g con guarnición",
        description_en: "Premium 400g cut with sides",
        price: 485.0,
        is_featured: true,
        sort_order: 1,
        tags: &[MenuTag::Specialty],
        image: "https://images.unsplash.com/photo-1544025162-d76694265947?w=400",
    },
    SampleItem {
        category: MenuCategory::Dinner,
        name_es: "Pulpo a las Brasas",
        name_en: "Grilled Octopus",
        description_es: "Pulpo perfectamente asado con papas y chimichurri",
        description_en: "Perfectly grilled octopus with potatoes and chimichurri",
        price: 395.0,
        is_featured: true,
        sort_order: 2,
        tags: &[MenuTag::Specialty],
        image: "https://images.unsplash.com/photo-1565557623262-b51c2513a641?w=400",
    },
    SampleItem {
        category: MenuCategory::Dinner,
        name_es: "Salmón Glaseado",
        name_en: "Glazed Salmon",
        description_es: "Salmón con glaseado de miel y soya, vegetales al vapor",
        description_en: "Salmon with honey soy glaze, steamed vegetables",
        price: 345.0,
        is_featured: false,
        sort_order: 3,
        tags: &[],
        image: "https://images.unsplash.com/photo-1467003909585-2f8a72700288?w=400",
    },
    SampleItem {
        category: MenuCategory::Dinner,
        name_es: "Pasta Mariscos",
        name_en: "Seafood Pasta",
        description_es: "Linguini con camarones, pulpo y mejillones en salsa blanca",
        description_en: "Linguini with shrimp, octopus and mussels in white sauce",
        price: 295.0,
        is_featured: false,
        sort_order: 4,
        tags: &[MenuTag::Popular],
        image: "https://images.unsplash.com/photo-1473093295043-cdd812d0e601?w=400",
    },
];

impl From<&SampleItem> for MenuItemCreate {
    fn from(item: &SampleItem) -> Self {
        MenuItemCreate {
            category: item.category,
            name_es: item.name_es.to_string(),
            name_en: item.name_en.to_string(),
            description_es: item.description_es.to_string(),
            description_en: item.description_en.to_string(),
            price: item.price,
            image: Some(item.image.to_string()),
            is_featured: item.is_featured,
            is_available: true,
            sort_order: item.sort_order,
            tags: item.tags.to_vec(),
        }
    }
}

/// The starter menu inserted into an empty database.
pub fn sample_menu() -> Vec<MenuItemCreate> {
    SAMPLE_MENU.iter().map(MenuItemCreate::from).collect()
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct SeedOutcome {
    /// Set when an admin account was created by this run.
    pub admin_created: Option<String>,
    pub menu_items_created: usize,
}

impl SeedOutcome {
    pub fn is_noop(&self) -> bool {
        self.admin_created.is_none() && self.menu_items_created == 0
    }
}

impl Database {
    /// Creates the admin account when no admin exists and `admin` carries
    /// credentials, then fills an empty menu with the starter items.
    /// Running it twice changes nothing.
    pub async fn seed(
        &self,
        admin: Option<UserCreate>,
    ) -> Result<SeedOutcome, GeneralError> {
        let mut outcome = SeedOutcome::default();

        let has_admin = sqlx::query_scalar::<_, bool>(
            r#"SELECT EXISTS(SELECT 1 FROM users WHERE role = $1)"#,
        )
        .bind(UserRole::Admin)
        .fetch_one(&self.pool)
        .await?;

        match admin {
            Some(data) if !has_admin => {
                let created = sqlx::query_scalar::<_, String>(
                    r#"
                    INSERT INTO users (username, password_hash, role)
                    VALUES ($1, $2, $3)
                    ON CONFLICT (username) DO NOTHING
                    RETURNING username
                    "#,
                )
                .bind(&data.username)
                .bind(&data.password_hash)
                .bind(UserRole::Admin)
                .fetch_optional(&self.pool)
                .await?;

                match &created {
                    Some(username) => {
                        log::info!("Seeded admin account '{}'", username)
                    }
                    None => log::warn!(
                        "Cannot seed admin: username '{}' is taken by a non-admin account",
                        data.username
                    ),
                }
                outcome.admin_created = created;
            }
            None if !has_admin => {
                log::warn!(
                    "No admin account exists and no seed password is configured"
                );
            }
            _ => {}
        }

        let mut tx = self.pool.begin().await?;
        let count = sqlx::query_scalar::<_, i64>(
            r#"SELECT COUNT(*) FROM menu_items"#,
        )
        .fetch_one(&mut *tx)
        .await?;

        if count == 0 {
            for item in sample_menu() {
                sqlx::query(
                    r#"
                    INSERT INTO menu_items (
                        category, name_es, name_en,
                        description_es, description_en, price, image,
                        is_featured, is_available, sort_order, tags
                    )
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
                    "#,
                )
                .bind(item.category)
                .bind(&item.name_es)
                .bind(&item.name_en)
                .bind(&item.description_es)
                .bind(&item.description_en)
                .bind(item.price)
                .bind(&item.image)
                .bind(item.is_featured)
                .bind(item.is_available)
                .bind(item.sort_order)
                .bind(tag_names(&item.tags))
                .execute(&mut *tx)
                .await?;

                outcome.menu_items_created += 1;
            }
        }
        tx.commit().await?;

        Ok(outcome)
    }
}
