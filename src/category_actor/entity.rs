//! [`ActorEntity`] implementation for [`Category`].
//!
//! The context is the [`ProductClient`]: deleting a category first deletes the
//! products filed under it, and the category is only removed if that succeeds.

use super::CategoryError;
use crate::clients::ProductClient;
use crate::model::{Category, CategoryCreate, CategoryId, CategoryUpdate};
use actor_framework::{ActorClient, ActorEntity};
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl ActorEntity for Category {
    type Id = CategoryId;
    type Create = CategoryCreate;
    type Update = CategoryUpdate;
    type Context = ProductClient;
    type Error = CategoryError;

    fn from_create_params(id: CategoryId, params: CategoryCreate) -> Result<Self, Self::Error> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err(CategoryError::EmptyName);
        }
        let order_number = params.order_number.unwrap_or(id.0);
        if order_number == 0 {
            return Err(CategoryError::InvalidOrderNumber(order_number));
        }
        let mut category = Category::new(id, name, order_number, params.user);
        category.image = params.image;
        Ok(category)
    }

    async fn on_update(
        &mut self,
        update: CategoryUpdate,
        _ctx: &ProductClient,
    ) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(CategoryError::EmptyName);
            }
            self.name = name.to_string();
        }
        if let Some(order_number) = update.order_number {
            if order_number == 0 {
                return Err(CategoryError::InvalidOrderNumber(order_number));
            }
            self.order_number = order_number;
        }
        if let Some(image) = update.image {
            self.image = image;
        }
        Ok(())
    }

    async fn on_delete(&self, products: &ProductClient) -> Result<(), Self::Error> {
        let owned = products
            .list_by_category(self.id)
            .await
            .map_err(|e| CategoryError::Cascade(e.to_string()))?;
        debug!(category_id = %self.id, count = owned.len(), "Deleting products of category");
        for product in &owned {
            products
                .delete(product.id)
                .await
                .map_err(|e| CategoryError::Cascade(e.to_string()))?;
        }
        if !owned.is_empty() {
            info!(category_id = %self.id, count = owned.len(), "Deleted products of category");
        }
        Ok(())
    }
}
