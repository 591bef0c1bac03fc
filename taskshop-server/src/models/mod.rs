//! Domain records with validation at construction
//!
//! Request bodies are turned into `New*` values before they reach the
//! data layer. Invalid input returns ValidationError, not panic.

pub mod product;
pub mod task;
pub mod user;
pub mod validation;

pub use product::{NewProduct, Product};
pub use task::{NewTask, Task, TaskUpdate};
pub use user::{NewUser, User};
pub use validation::{require, ValidationError};
