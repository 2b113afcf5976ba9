//! Product CRUD execution against PostgreSQL.
//!
//! Each operation is a single statement; row-level atomicity comes from the
//! database, so no explicit transactions are used.

use crate::error::AppError;
use crate::model::{Product, ProductDraft};
use sqlx::PgPool;

const COLUMNS: &str = "id, name, price, created_at, updated_at";

pub struct ProductService;

impl ProductService {
    /// All products in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Product>, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM products ORDER BY id");
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Product>(&sql).fetch_all(pool).await?;
        Ok(rows)
    }

    /// Insert one product; the database assigns the id. Returns the created row.
    pub async fn create(pool: &PgPool, name: &str, price: f64) -> Result<Product, AppError> {
        let sql = format!("INSERT INTO products (name, price) VALUES ($1, $2) RETURNING {COLUMNS}");
        tracing::debug!(sql = %sql, name = %name, "query");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(name)
            .bind(price)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    /// Fetch one product by id, or None.
    pub async fn read(pool: &PgPool, id: i64) -> Result<Option<Product>, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Merge the supplied fields into an existing row. Fields the draft leaves
    /// unset keep their stored value. Returns None when the id does not exist.
    pub async fn update(
        pool: &PgPool,
        id: i64,
        draft: &ProductDraft,
    ) -> Result<Option<Product>, AppError> {
        let sql = format!(
            "UPDATE products SET name = COALESCE($2, name), price = COALESCE($3, price), \
             updated_at = NOW() WHERE id = $1 RETURNING {COLUMNS}"
        );
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .bind(draft.name.as_deref())
            .bind(draft.price)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Hard-delete one product. Returns false when the id does not exist.
    pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, AppError> {
        let sql = "DELETE FROM products WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
