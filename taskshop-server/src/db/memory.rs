//! In-process store
//!
//! Mirrors the PostgreSQL contract: ids come from per-table counters that
//! never rewind (like identity columns), emails are unique, and task owners
//! must exist. Each instance is fully isolated, which makes it the default
//! backing for handler and seed tests.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::repos::{DbError, SeedData, Seeded};
use super::store::Store;
use crate::models::{NewProduct, NewTask, NewUser, Product, Task, TaskUpdate, User};

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    tasks: Vec<Task>,
    products: Vec<Product>,
    last_user_id: i64,
    last_task_id: i64,
    last_product_id: i64,
}

impl Tables {
    fn insert_user(&mut self, user: NewUser) -> Result<User, DbError> {
        if self.users.iter().any(|u| u.email == user.email()) {
            return Err(DbError::Conflict {
                resource: "user",
                field: "email",
                value: user.email().to_owned(),
            });
        }
        self.last_user_id += 1;
        let user = user.into_user(self.last_user_id);
        self.users.push(user.clone());
        Ok(user)
    }

    fn insert_task(&mut self, task: NewTask) -> Result<Task, DbError> {
        if let Some(owner) = task.user_id() {
            if !self.users.iter().any(|u| u.id == owner) {
                return Err(DbError::MissingReference {
                    field: "user_id",
                    id: owner,
                });
            }
        }
        self.last_task_id += 1;
        let task = task.into_task(self.last_task_id);
        self.tasks.push(task.clone());
        Ok(task)
    }

    fn insert_product(&mut self, product: NewProduct) -> Product {
        self.last_product_id += 1;
        let product = product.into_product(self.last_product_id);
        self.products.push(product.clone());
        product
    }

    fn user(&self, id: i64) -> Result<&User, DbError> {
        self.users
            .iter()
            .find(|u| u.id == id)
            .ok_or_else(|| DbError::not_found("user", id))
    }
}

/// Store kept entirely in memory
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> Result<(), DbError> {
        Ok(())
    }

    async fn create_user(&self, user: NewUser) -> Result<User, DbError> {
        self.tables.write().await.insert_user(user)
    }

    async fn list_users(&self) -> Result<Vec<User>, DbError> {
        Ok(self.tables.read().await.users.clone())
    }

    async fn get_user(&self, id: i64) -> Result<User, DbError> {
        self.tables.read().await.user(id).cloned()
    }

    async fn create_task(&self, task: NewTask) -> Result<Task, DbError> {
        self.tables.write().await.insert_task(task)
    }

    async fn list_tasks(&self) -> Result<Vec<Task>, DbError> {
        Ok(self.tables.read().await.tasks.clone())
    }

    async fn get_task(&self, id: i64) -> Result<Task, DbError> {
        self.tables
            .read()
            .await
            .tasks
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| DbError::not_found("task", id))
    }

    async fn update_task(&self, id: i64, update: TaskUpdate) -> Result<Task, DbError> {
        let mut tables = self.tables.write().await;
        let task = tables
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| DbError::not_found("task", id))?;
        update.apply(task);
        Ok(task.clone())
    }

    async fn list_user_tasks(&self, user_id: i64) -> Result<Vec<Task>, DbError> {
        let tables = self.tables.read().await;
        tables.user(user_id)?;
        Ok(tables
            .tasks
            .iter()
            .filter(|t| t.user_id == Some(user_id))
            .cloned()
            .collect())
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, DbError> {
        Ok(self.tables.write().await.insert_product(product))
    }

    async fn list_products(&self) -> Result<Vec<Product>, DbError> {
        Ok(self.tables.read().await.products.clone())
    }

    async fn get_product(&self, id: i64) -> Result<Product, DbError> {
        self.tables
            .read()
            .await
            .products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| DbError::not_found("product", id))
    }

    async fn reseed(&self, data: &SeedData) -> Result<Seeded, DbError> {
        let mut tables = self.tables.write().await;

        // Work on a copy so a failed reseed leaves the old rows in place.
        let mut next = Tables {
            last_user_id: tables.last_user_id,
            last_task_id: tables.last_task_id,
            last_product_id: tables.last_product_id,
            ..Tables::default()
        };

        let mut seeded = Seeded::default();
        for user in &data.users {
            seeded.users.push(next.insert_user(user.clone())?);
        }
        for task in &data.tasks {
            let task = data.resolve_task(task, &seeded.users)?;
            seeded.tasks.push(next.insert_task(task)?);
        }
        for product in &data.products {
            seeded.products.push(next.insert_product(product.clone()));
        }

        *tables = next;
        Ok(seeded)
    }
}
