//! # Category Board
//!
//! Admin view of the menu categories: drag cards to reorder them, delete a
//! category through a confirm step. Changes are pushed to the category
//! service and announced on the [`RefreshTrigger`].

use crate::category_actor::CategoryError;
use crate::clients::{CategoryClient, ProductClient};
use crate::error::LoadError;
use crate::lifecycle::{RefreshTrigger, TriggerListener};
use crate::model::{Category, CategoryId};
use crate::reorder::{array_move, persist_order, renumber_local, ReorderError};
use actor_framework::ActorClient;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{info, instrument, warn};

#[derive(Debug, Error)]
pub enum BoardError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Reorder(#[from] ReorderError),

    #[error("Failed to delete category: {0}")]
    Delete(CategoryError),

    #[error("Only the owner can delete categories")]
    NotOwner,

    #[error("No category is awaiting delete confirmation")]
    NothingToConfirm,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BoardState {
    Loading,
    Ready,
    /// The last load failed; the message is shown instead of the grid.
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Owner,
    Staff,
}

pub struct CategoryBoard {
    categories: CategoryClient,
    products: ProductClient,
    trigger: RefreshTrigger,
    listener: TriggerListener,
    role: Role,
    items: Vec<Category>,
    product_counts: HashMap<CategoryId, usize>,
    state: BoardState,
    active_id: Option<CategoryId>,
    pending_delete: Option<CategoryId>,
}

impl CategoryBoard {
    pub fn new(
        categories: CategoryClient,
        products: ProductClient,
        trigger: RefreshTrigger,
        role: Role,
    ) -> Self {
        let listener = trigger.subscribe();
        Self {
            categories,
            products,
            trigger,
            listener,
            role,
            items: Vec::new(),
            product_counts: HashMap::new(),
            state: BoardState::Loading,
            active_id: None,
            pending_delete: None,
        }
    }

    /// Fetches categories (sorted by order number) and product counts.
    ///
    /// A failure is both returned and kept as [`BoardState::Failed`].
    #[instrument(skip(self))]
    pub async fn load(&mut self) -> Result<(), BoardError> {
        match self.fetch().await {
            Ok((items, counts)) => {
                info!(categories = items.len(), "Category board loaded");
                self.items = items;
                self.product_counts = counts;
                self.state = BoardState::Ready;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Category board failed to load");
                self.state = BoardState::Failed(e.to_string());
                Err(e.into())
            }
        }
    }

    async fn fetch(&self) -> Result<(Vec<Category>, HashMap<CategoryId, usize>), LoadError> {
        let items = self.categories.list_categories().await?;
        let mut counts = HashMap::new();
        for product in self.products.list().await? {
            *counts.entry(product.category_id).or_insert(0) += 1;
        }
        Ok((items, counts))
    }

    /// Reloads if anything toggled the trigger since the last check.
    pub async fn refresh_if_triggered(&mut self) -> Result<bool, BoardError> {
        if !self.listener.take_pending() {
            return Ok(false);
        }
        self.load().await?;
        Ok(true)
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn categories(&self) -> &[Category] {
        &self.items
    }

    /// Loaded, but there are no categories to show.
    pub fn is_empty(&self) -> bool {
        self.state == BoardState::Ready && self.items.is_empty()
    }

    pub fn product_count(&self, id: CategoryId) -> usize {
        self.product_counts.get(&id).copied().unwrap_or(0)
    }

    pub fn drag_start(&mut self, id: CategoryId) {
        self.active_id = Some(id);
    }

    /// The card rendered in the drag overlay.
    pub fn active_category(&self) -> Option<&Category> {
        let id = self.active_id?;
        self.items.iter().find(|c| c.id == id)
    }

    /// Drops `active` over `over`.
    ///
    /// The new order is applied locally first and then persisted. Returns
    /// whether anything moved. If persisting fails the local order is kept and
    /// no refresh is triggered.
    #[instrument(skip(self))]
    pub async fn drag_end(
        &mut self,
        active: CategoryId,
        over: Option<CategoryId>,
    ) -> Result<bool, BoardError> {
        self.active_id = None;

        let Some(over) = over.filter(|over| *over != active) else {
            return Ok(false);
        };
        let (Some(from), Some(to)) = (self.position(active), self.position(over)) else {
            return Ok(false);
        };
        if from == to {
            return Ok(false);
        }

        let mut moved = array_move(std::mem::take(&mut self.items), from, to);
        renumber_local(&mut moved);
        self.items = moved;

        persist_order(&self.categories, &self.items).await?;
        self.trigger.toggle();
        Ok(true)
    }

    fn position(&self, id: CategoryId) -> Option<usize> {
        self.items.iter().position(|c| c.id == id)
    }

    /// Opens the confirm step for `id`.
    pub fn request_delete(&mut self, id: CategoryId) -> Result<(), BoardError> {
        if self.role != Role::Owner {
            return Err(BoardError::NotOwner);
        }
        self.pending_delete = Some(id);
        Ok(())
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn pending_delete(&self) -> Option<&Category> {
        let id = self.pending_delete?;
        self.items.iter().find(|c| c.id == id)
    }

    /// Deletes the pending category together with its products.
    ///
    /// On failure the confirm step stays open.
    #[instrument(skip(self))]
    pub async fn confirm_delete(&mut self) -> Result<CategoryId, BoardError> {
        let id = self.pending_delete.ok_or(BoardError::NothingToConfirm)?;

        self.categories
            .delete_category(id)
            .await
            .map_err(BoardError::Delete)?;

        self.pending_delete = None;
        self.items.retain(|c| c.id != id);
        self.product_counts.remove(&id);
        info!(category_id = %id, "Category deleted");
        self.trigger.toggle();
        Ok(id)
    }
}
