//! # Category Client
//!
//! High-level API over the Category actor used by the admin board and the menu.
use super::map_framework_error;
use crate::category_actor::CategoryError;
use crate::model::{sort_by_order_number, Category, CategoryCreate, CategoryId, CategoryUpdate};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Category actor.
#[derive(Clone)]
pub struct CategoryClient {
    inner: ResourceClient<Category>,
}

impl CategoryClient {
    pub fn new(inner: ResourceClient<Category>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn create_category(&self, params: CategoryCreate) -> Result<CategoryId, CategoryError> {
        debug!(?params, "create_category called");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Every category in display order.
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> Result<Vec<Category>, CategoryError> {
        let mut categories = self.inner.list().await.map_err(Self::map_error)?;
        sort_by_order_number(&mut categories);
        debug!(count = categories.len(), "Fetched categories");
        Ok(categories)
    }

    /// Applies a partial patch and returns the stored category.
    #[instrument(skip(self))]
    pub async fn edit_category(
        &self,
        id: CategoryId,
        update: CategoryUpdate,
    ) -> Result<Category, CategoryError> {
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Deletes the category and, through the actor's cascade, its products.
    #[instrument(skip(self))]
    pub async fn delete_category(&self, id: CategoryId) -> Result<(), CategoryError> {
        self.inner.delete(id).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Category> for CategoryClient {
    type Error = CategoryError;

    fn inner(&self) -> &ResourceClient<Category> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        map_framework_error(e, CategoryError::NotFound)
    }
}
