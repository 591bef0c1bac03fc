//! Product records

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::{text, ValidationError};

/// Maximum length for product names
const MAX_NAME_LEN: usize = 100;

/// Persisted product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub stock: i64,
}

/// Validated input for a product insert
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    name: String,
    price: f64,
    stock: i64,
}

impl NewProduct {
    /// `stock` defaults to 0. Price and stock must be non-negative.
    pub fn new(name: &str, price: f64, stock: Option<i64>) -> Result<Self, ValidationError> {
        let name = text("name", name, MAX_NAME_LEN)?;

        if !price.is_finite() {
            return Err(ValidationError::InvalidFormat {
                field: "price",
                reason: "must be a finite number",
            });
        }
        if price < 0.0 {
            return Err(ValidationError::Negative { field: "price" });
        }

        let stock = stock.unwrap_or(0);
        if stock < 0 {
            return Err(ValidationError::Negative { field: "stock" });
        }

        Ok(Self { name, price, stock })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn stock(&self) -> i64 {
        self.stock
    }

    /// Attach the id assigned by the store.
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            stock: self.stock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_defaults_to_zero() {
        let product = NewProduct::new("Mysz", 89.99, None).unwrap();
        assert_eq!(product.stock(), 0);
    }

    #[test]
    fn negative_values_rejected() {
        assert_eq!(
            NewProduct::new("Mysz", -1.0, None),
            Err(ValidationError::Negative { field: "price" })
        );
        assert_eq!(
            NewProduct::new("Mysz", 1.0, Some(-5)),
            Err(ValidationError::Negative { field: "stock" })
        );
    }

    #[test]
    fn free_product_allowed() {
        assert!(NewProduct::new("Sticker", 0.0, Some(0)).is_ok());
    }

    #[test]
    fn nan_price_rejected() {
        assert!(matches!(
            NewProduct::new("Mysz", f64::NAN, None),
            Err(ValidationError::InvalidFormat { field: "price", .. })
        ));
    }
}
