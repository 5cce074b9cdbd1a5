use uuid::Uuid;

use super::Database;
use crate::common::MenuError;
use crate::log_err;
use crate::models::{
    MenuCategory, MenuItem, MenuItemCreate, MenuItemRow, MenuItemUpdate,
    MenuReorderEntry, tag_names,
};

impl Database {
    /// Lists menu items ordered by `sort_order`, ties broken by insertion
    /// order.
    pub async fn list_menu(
        &self,
        category: Option<MenuCategory>,
        available_only: bool,
    ) -> Result<Vec<MenuItem>, MenuError> {
        let rows = sqlx::query_as::<_, MenuItemRow>(
            r#"
            SELECT * FROM menu_items
            WHERE ($1::text IS NULL OR category = $1)
              AND (NOT $2 OR is_available)
            ORDER BY sort_order ASC, seq ASC
            "#,
        )
        .bind(category.map(|c| c.as_str()))
        .bind(available_only)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(MenuItem::from).collect())
    }

    pub async fn get_menu_item(&self, id: Uuid) -> Result<MenuItem, MenuError> {
        let row = sqlx::query_as::<_, MenuItemRow>(
            r#"SELECT * FROM menu_items WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(MenuItem::from).ok_or(MenuError::NotFound(id))
    }

    pub async fn count_menu_items(&self) -> Result<i64, MenuError> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"SELECT COUNT(*) FROM menu_items"#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    pub async fn add_menu_item(
        &self,
        data: &MenuItemCreate,
    ) -> Result<MenuItem, MenuError> {
        data.validate().map_err(MenuError::InvalidRequest)?;

        let row = sqlx::query_as::<_, MenuItemRow>(
            r#"
            INSERT INTO menu_items (
                category, name_es, name_en,
                description_es, description_en, price, image,
                is_featured, is_available, sort_order, tags
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(data.category)
        .bind(data.name_es.trim())
        .bind(data.name_en.trim())
        .bind(&data.description_es)
        .bind(&data.description_en)
        .bind(data.price)
        .bind(&data.image)
        .bind(data.is_featured)
        .bind(data.is_available)
        .bind(data.sort_order)
        .bind(tag_names(&data.tags))
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    /// Partial update; `updated_at` is refreshed even when nothing else
    /// changes.
    pub async fn update_menu_item(
        &self,
        id: Uuid,
        data: &MenuItemUpdate,
    ) -> Result<MenuItem, MenuError> {
        data.validate().map_err(MenuError::InvalidRequest)?;

        let result = sqlx::query_as::<_, MenuItemRow>(
            r#"
            UPDATE menu_items
            SET
                category = COALESCE($2, category),
                name_es = COALESCE($3, name_es),
                name_en = COALESCE($4, name_en),
                description_es = COALESCE($5, description_es),
                description_en = COALESCE($6, description_en),
                price = COALESCE($7, price),
                image = COALESCE($8, image),
                is_featured = COALESCE($9, is_featured),
                is_available = COALESCE($10, is_available),
                sort_order = COALESCE($11, sort_order),
                tags = COALESCE($12::text[], tags),
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(data.category)
        .bind(data.name_es.as_deref().map(str::trim))
        .bind(data.name_en.as_deref().map(str::trim))
        .bind(&data.description_es)
        .bind(&data.description_en)
        .bind(data.price)
        .bind(&data.image)
        .bind(data.is_featured)
        .bind(data.is_available)
        .bind(data.sort_order)
        .bind(data.tags.as_deref().map(tag_names))
        .fetch_optional(&self.pool)
        .await;

        match result {
            Ok(Some(row)) => Ok(row.into()),
            Ok(None) => Err(MenuError::NotFound(id)),
            Err(e) => {
                log_err!(&self.pool, (id, e.to_string()));
                Err(MenuError::Database(e))
            }
        }
    }

    pub async fn delete_menu_item(&self, id: Uuid) -> Result<(), MenuError> {
        let result = sqlx::query(r#"DELETE FROM menu_items WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(MenuError::NotFound(id));
        }
        Ok(())
    }

    /// Writes every new position in one transaction. Unknown ids are skipped;
    /// returns how many items moved.
    pub async fn reorder_menu(
        &self,
        entries: &[MenuReorderEntry],
    ) -> Result<u64, MenuError> {
        let mut tx = self.pool.begin().await?;
        let mut updated = 0;

        for entry in entries {
            let result = sqlx::query(
                r#"
                UPDATE menu_items
                SET sort_order = $2, updated_at = now()
                WHERE id = $1
                "#,
            )
            .bind(entry.id)
            .bind(entry.sort_order)
            .execute(&mut *tx)
            .await?;

            updated += result.rows_affected();
        }

        tx.commit().await?;
        Ok(updated)
    }
}
