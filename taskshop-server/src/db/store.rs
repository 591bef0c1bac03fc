//! Store trait and its PostgreSQL implementation
//!
//! Handlers and the seed job depend on `Store`, not on a pool, so tests
//! can swap in an isolated `MemoryStore`.

use async_trait::async_trait;
use sqlx::PgPool;

use super::repos::{DbError, ProductRepo, SeedData, SeedRepo, Seeded, TaskRepo, UserRepo};
use crate::models::{NewProduct, NewTask, NewUser, Product, Task, TaskUpdate, User};

/// Persistence operations for users, tasks and products (testable)
#[async_trait]
pub trait Store: Send + Sync {
    /// Run a trivial query to check connectivity.
    async fn ping(&self) -> Result<(), DbError>;

    async fn create_user(&self, user: NewUser) -> Result<User, DbError>;
    async fn list_users(&self) -> Result<Vec<User>, DbError>;
    async fn get_user(&self, id: i64) -> Result<User, DbError>;

    async fn create_task(&self, task: NewTask) -> Result<Task, DbError>;
    async fn list_tasks(&self) -> Result<Vec<Task>, DbError>;
    async fn get_task(&self, id: i64) -> Result<Task, DbError>;
    async fn update_task(&self, id: i64, update: TaskUpdate) -> Result<Task, DbError>;
    async fn list_user_tasks(&self, user_id: i64) -> Result<Vec<Task>, DbError>;

    async fn create_product(&self, product: NewProduct) -> Result<Product, DbError>;
    async fn list_products(&self) -> Result<Vec<Product>, DbError>;
    async fn get_product(&self, id: i64) -> Result<Product, DbError>;

    /// Clear every table and insert `data` as one unit.
    async fn reseed(&self, data: &SeedData) -> Result<Seeded, DbError>;
}

/// PostgreSQL-backed store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn create_user(&self, user: NewUser) -> Result<User, DbError> {
        UserRepo::new(&self.pool).create(&user).await
    }

    async fn list_users(&self) -> Result<Vec<User>, DbError> {
        UserRepo::new(&self.pool).list().await
    }

    async fn get_user(&self, id: i64) -> Result<User, DbError> {
        UserRepo::new(&self.pool).get(id).await
    }

    async fn create_task(&self, task: NewTask) -> Result<Task, DbError> {
        TaskRepo::new(&self.pool).create(&task).await
    }

    async fn list_tasks(&self) -> Result<Vec<Task>, DbError> {
        TaskRepo::new(&self.pool).list().await
    }

    async fn get_task(&self, id: i64) -> Result<Task, DbError> {
        TaskRepo::new(&self.pool).get(id).await
    }

    async fn update_task(&self, id: i64, update: TaskUpdate) -> Result<Task, DbError> {
        TaskRepo::new(&self.pool).update(id, update).await
    }

    async fn list_user_tasks(&self, user_id: i64) -> Result<Vec<Task>, DbError> {
        TaskRepo::new(&self.pool).list_for_user(user_id).await
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, DbError> {
        ProductRepo::new(&self.pool).create(&product).await
    }

    async fn list_products(&self) -> Result<Vec<Product>, DbError> {
        ProductRepo::new(&self.pool).list().await
    }

    async fn get_product(&self, id: i64) -> Result<Product, DbError> {
        ProductRepo::new(&self.pool).get(id).await
    }

    async fn reseed(&self, data: &SeedData) -> Result<Seeded, DbError> {
        SeedRepo::new(&self.pool).reseed(data).await
    }
}
