//! Seed repository
//!
//! Clears and repopulates all three tables inside one transaction.

use sqlx::{PgPool, Postgres, Transaction};

use super::DbError;
use crate::models::{NewProduct, NewTask, NewUser, Product, Task, User};

/// Task to seed, owned by the user at `owner` in `SeedData::users`
#[derive(Debug, Clone)]
pub struct SeedTask {
    pub task: NewTask,
    pub owner: usize,
}

/// Rows to insert after the tables are cleared
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub users: Vec<NewUser>,
    pub tasks: Vec<SeedTask>,
    pub products: Vec<NewProduct>,
}

/// Rows as stored, with assigned ids
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Seeded {
    pub users: Vec<User>,
    pub tasks: Vec<Task>,
    pub products: Vec<Product>,
}

impl SeedData {
    /// Resolve a seed task against the users that were actually inserted.
    pub(crate) fn resolve_task(&self, task: &SeedTask, users: &[User]) -> Result<NewTask, DbError> {
        let owner = users.get(task.owner).ok_or(DbError::MissingReference {
            field: "owner",
            id: i64::try_from(task.owner).unwrap_or(i64::MAX),
        })?;

        Ok(task.task.clone().with_owner(owner.id))
    }
}

/// Seed repository
pub struct SeedRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> SeedRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Delete tasks, products, then users, and insert `data`.
    ///
    /// Nothing is visible to other sessions until the commit.
    pub async fn reseed(&self, data: &SeedData) -> Result<Seeded, DbError> {
        let mut tx = self.pool.begin().await?;

        // Dependency order: tasks reference users.
        for statement in ["DELETE FROM tasks", "DELETE FROM products", "DELETE FROM users"] {
            let deleted = sqlx::query(statement)
                .execute(&mut *tx)
                .await?
                .rows_affected();
            tracing::debug!(statement, deleted, "cleared table");
        }

        let mut seeded = Seeded::default();

        for user in &data.users {
            seeded.users.push(insert_user(&mut tx, user).await?);
        }

        for task in &data.tasks {
            let task = data.resolve_task(task, &seeded.users)?;
            seeded.tasks.push(insert_task(&mut tx, &task).await?);
        }

        for product in &data.products {
            seeded.products.push(insert_product(&mut tx, product).await?);
        }

        tx.commit().await?;
        Ok(seeded)
    }
}

async fn insert_user(tx: &mut Transaction<'_, Postgres>, user: &NewUser) -> Result<User, DbError> {
    let user = sqlx::query_as("INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id, name, email")
        .bind(user.name())
        .bind(user.email())
        .fetch_one(&mut **tx)
        .await?;
    Ok(user)
}

async fn insert_task(tx: &mut Transaction<'_, Postgres>, task: &NewTask) -> Result<Task, DbError> {
    let task = sqlx::query_as(
        r#"
        INSERT INTO tasks (title, completed, user_id)
        VALUES ($1, $2, $3)
        RETURNING id, title, completed, user_id
        "#,
    )
    .bind(task.title())
    .bind(task.completed())
    .bind(task.user_id())
    .fetch_one(&mut **tx)
    .await?;
    Ok(task)
}

async fn insert_product(
    tx: &mut Transaction<'_, Postgres>,
    product: &NewProduct,
) -> Result<Product, DbError> {
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
    .fetch_one(&mut **tx)
    .await?;
    Ok(product)
}
