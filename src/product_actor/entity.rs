//! [`ActorEntity`] implementation for [`Product`].

use super::ProductError;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;

fn check_price(price: f64) -> Result<f64, ProductError> {
    if price.is_finite() && price >= 0.0 {
        Ok(price)
    } else {
        Err(ProductError::InvalidPrice(price))
    }
}

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Context = ();
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        if params.name.trim().is_empty() {
            return Err(ProductError::EmptyName);
        }
        let mut product = Product::new(
            id,
            params.name.trim(),
            check_price(params.price)?,
            params.category_id,
        );
        product.image = params.image;
        product.variants = params.variants;
        Ok(product)
    }

    /// # Fields Updated
    /// - `name`, `price`, `category_id`, `variants`
    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            if name.trim().is_empty() {
                return Err(ProductError::EmptyName);
            }
            self.name = name.trim().to_string();
        }
        if let Some(price) = update.price {
            self.price = check_price(price)?;
        }
        if let Some(category_id) = update.category_id {
            self.category_id = category_id;
        }
        if let Some(variants) = update.variants {
            self.variants = variants;
        }
        Ok(())
    }
}
