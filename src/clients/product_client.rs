//! # Product Client
//!
//! High-level API over the Product actor.
use super::map_framework_error;
use crate::model::{CategoryId, Product, ProductCreate, ProductId, ProductUpdate};
use crate::product_actor::ProductError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn edit_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Products filed under `category_id`, ordered by id.
    #[instrument(skip(self))]
    pub async fn list_by_category(
        &self,
        category_id: CategoryId,
    ) -> Result<Vec<Product>, ProductError> {
        let products = self.inner.list().await.map_err(Self::map_error)?;
        Ok(products
            .into_iter()
            .filter(|p| p.category_id == category_id)
            .collect())
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        map_framework_error(e, ProductError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::MockClient;

    #[tokio::test]
    async fn test_list_by_category_filters() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_list().return_ok(vec![
            Product::new(ProductId(1), "Ceviche", 32.0, CategoryId(1)),
            Product::new(ProductId(2), "Chicha morada", 8.0, CategoryId(2)),
            Product::new(ProductId(3), "Causa", 18.0, CategoryId(1)),
        ]);

        let products = ProductClient::new(mock.client());
        let entradas = products.list_by_category(CategoryId(1)).await.unwrap();

        let ids: Vec<ProductId> = entradas.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![ProductId(1), ProductId(3)]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_rejected_price_is_reported() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_create()
            .return_err(FrameworkError::entity(ProductError::InvalidPrice(-1.0)));

        let products = ProductClient::new(mock.client());
        let result = products
            .create_product(ProductCreate::new("Ceviche", -1.0, CategoryId(1)))
            .await;

        assert_eq!(result, Err(ProductError::InvalidPrice(-1.0)));
        mock.verify();
    }

    #[tokio::test]
    async fn test_edit_product_returns_updated() {
        let mut mock = MockClient::<Product>::new();
        let mut moved = Product::new(ProductId(4), "Causa", 18.0, CategoryId(2));
        moved.variants = vec!["Pollo".into()];
        mock.expect_update(ProductId(4)).return_ok(moved.clone());

        let products = ProductClient::new(mock.client());
        let update = ProductUpdate {
            category_id: Some(CategoryId(2)),
            variants: Some(vec!["Pollo".into()]),
            ..ProductUpdate::default()
        };

        assert_eq!(products.edit_product(ProductId(4), update).await, Ok(moved));
        mock.verify();
    }
}
