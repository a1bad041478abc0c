//! Order screen menu: category navigation plus the products of one category.

use crate::clients::{CategoryClient, ProductClient};
use crate::error::LoadError;
use crate::model::{Category, CategoryId, OrderItem, Product, ProductId};
use tracing::instrument;

#[derive(Debug, Clone)]
pub struct MenuPage {
    pub selected: CategoryId,
    /// Navigation entries, sorted by order number.
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}

impl MenuPage {
    #[instrument(skip(categories, products))]
    pub async fn load(
        categories: &CategoryClient,
        products: &ProductClient,
        selected: CategoryId,
    ) -> Result<Self, LoadError> {
        let products = products.list_by_category(selected).await?;
        let categories = categories.list_categories().await?;
        Ok(Self {
            selected,
            categories,
            products,
        })
    }

    pub fn current_category(&self) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == self.selected)
    }

    /// Builds a cart line for a product on this page.
    ///
    /// Returns `None` for a zero quantity, products not listed here or variants
    /// the product does not offer.
    pub fn line_for(
        &self,
        product_id: ProductId,
        variant: Option<&str>,
        quantity: u32,
    ) -> Option<OrderItem> {
        if quantity == 0 {
            return None;
        }
        let category = self.current_category()?;
        let product = self.products.iter().find(|p| p.id == product_id)?;
        if let Some(variant) = variant {
            if !product.variants.iter().any(|v| v == variant) {
                return None;
            }
        }
        Some(OrderItem::from_product(
            product,
            category.snapshot(),
            variant.map(String::from),
            quantity,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Owner;

    fn page() -> MenuPage {
        let mut ceviche = Product::new(ProductId(1), "Ceviche", 32.0, CategoryId(2));
        ceviche.variants = vec!["clásico".into(), "mixto".into()];
        MenuPage {
            selected: CategoryId(2),
            categories: vec![
                Category::new(CategoryId(1), "Bebidas", 1, Owner::new("Ana", "Centro")),
                Category::new(CategoryId(2), "Entradas", 2, Owner::new("Ana", "Centro")),
            ],
            products: vec![ceviche],
        }
    }

    #[test]
    fn test_line_carries_category_snapshot() {
        let line = page().line_for(ProductId(1), Some("mixto"), 2).unwrap();
        assert_eq!(line.unique_id, "1-mixto");
        assert_eq!(line.category.name, "Entradas");
        assert_eq!(line.category.order_number, 2);
        assert_eq!(line.line_total(), 64.0);
    }

    #[test]
    fn test_unknown_product_or_variant() {
        let page = page();
        assert!(page.line_for(ProductId(9), None, 1).is_none());
        assert!(page.line_for(ProductId(1), Some("picante"), 1).is_none());
        assert!(page.line_for(ProductId(1), None, 0).is_none());
    }
}
