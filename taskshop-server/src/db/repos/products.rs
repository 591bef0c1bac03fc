//! Product repository

use sqlx::PgPool;

use super::DbError;
use crate::models::{NewProduct, Product};

/// Product repository
pub struct ProductRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, product: &NewProduct) -> Result<Product, DbError> {
        let product = sqlx::query_as(
            r#"
            INSERT INTO products (name, price, stock)
            VALUES ($1, $2, $3)
            RETURNING id, name, price, stock
            "#,
        )
        .bind(product.name())
        .bind(product.price())
        .bind(product.stock())
        .fetch_one(self.pool)
        .await?;
        Ok(product)
    }

    /// List all products in insertion order.
    pub async fn list(&self) -> Result<Vec<Product>, DbError> {
        let products = sqlx::query_as("SELECT id, name, price, stock FROM products ORDER BY id")
            .fetch_all(self.pool)
            .await?;
        Ok(products)
    }

    pub async fn get(&self, id: i64) -> Result<Product, DbError> {
        sqlx::query_as("SELECT id, name, price, stock FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("product", id))
    }
}
