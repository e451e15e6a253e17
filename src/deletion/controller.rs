//! Drives the deletion state machine against a repository.

use super::state::{DeletionEvent, DeletionState};
use crate::model::{Product, ProductId, Sale};
use crate::repository::{ApiError, InventoryRepository, Repository, RepositoryError};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Why a delete step did not go through.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DeleteFailure {
    /// Sales still reference the product. Recoverable by a cascade delete.
    #[error("This product has sales recorded against it")]
    Conflict,
    /// The record is already gone.
    #[error("Record not found")]
    NotFound,
    #[error("Could not reach the store: {0}")]
    Transport(String),
    #[error("Delete rejected: {0}")]
    Rejected(ApiError),
    /// Nothing is waiting for this confirmation; no request was sent.
    #[error("No delete is awaiting this confirmation")]
    NotPending,
}

impl From<RepositoryError> for DeleteFailure {
    fn from(e: RepositoryError) -> Self {
        if e.is_conflict() {
            return DeleteFailure::Conflict;
        }
        if e.is_not_found() {
            return DeleteFailure::NotFound;
        }
        match e {
            RepositoryError::Rejected(api) => DeleteFailure::Rejected(api),
            RepositoryError::Transport(msg) => DeleteFailure::Transport(msg),
        }
    }
}

/// Product list plus one product deletion flow.
///
/// Every operation takes `&mut self`, so at most one store request is in flight. Failures
/// are returned and also kept as a notice for display until dismissed.
pub struct DeletionController<R> {
    repo: R,
    products: Vec<Product>,
    state: DeletionState,
    notice: Option<String>,
}

impl<R: InventoryRepository> DeletionController<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            products: Vec::new(),
            state: DeletionState::Idle,
            notice: None,
        }
    }

    pub fn state(&self) -> &DeletionState {
        &self.state
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Product awaiting confirmation or being deleted.
    pub fn pending_product(&self) -> Option<&Product> {
        self.state.product()
    }

    /// Sales that must go before the pending product.
    pub fn dependents(&self) -> &[Sale] {
        self.state.dependents()
    }

    pub fn is_busy(&self) -> bool {
        self.state.is_in_flight()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Replaces the product list with the store's.
    pub async fn load(&mut self) -> Result<(), RepositoryError> {
        match Repository::<Product>::list(&self.repo).await {
            Ok(products) => {
                debug!(count = products.len(), "Products loaded");
                self.products = products;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Failed to load products");
                self.notice = Some(format!("Failed to load products: {e}"));
                Err(e)
            }
        }
    }

    /// Asks for confirmation to delete `product`.
    ///
    /// Returns `false`, leaving the current flow untouched, unless the controller is idle.
    pub fn request_delete(&mut self, product: Product) -> bool {
        let id = product.id;
        if self.transition(DeletionEvent::Requested(product)) {
            info!(product = %id, "Delete requested");
            true
        } else {
            false
        }
    }

    /// Deletes the pending product.
    ///
    /// On a conflict the dependent sales are fetched and the flow waits for
    /// [`confirm_cascade_delete`](Self::confirm_cascade_delete); the returned
    /// [`DeleteFailure::Conflict`] tells the caller to offer it.
    ///
    /// Returns [`DeleteFailure::NotPending`] unless a delete was requested and not yet
    /// confirmed.
    pub async fn confirm_delete(&mut self) -> Result<(), DeleteFailure> {
        let id = self.pending_id().ok_or(DeleteFailure::NotPending)?;
        if !self.transition(DeletionEvent::Confirmed) {
            return Err(DeleteFailure::NotPending);
        }

        let failure = match Repository::<Product>::delete(&self.repo, id).await {
            Ok(()) => None,
            Err(e) => Some(DeleteFailure::from(e)),
        };
        match failure {
            None | Some(DeleteFailure::NotFound) => {
                self.products.retain(|p| p.id != id);
                self.transition(DeletionEvent::Deleted);
                info!(product = %id, "Product deleted");
                Ok(())
            }
            Some(DeleteFailure::Conflict) => {
                info!(product = %id, "Delete blocked by dependent sales");
                self.transition(DeletionEvent::Conflict);
                self.load_dependents(id).await?;
                Err(DeleteFailure::Conflict)
            }
            Some(failure) => {
                warn!(product = %id, %failure, "Delete failed");
                self.transition(DeletionEvent::Failed);
                self.notice = Some(failure.to_string());
                Err(failure)
            }
        }
    }

    /// Deletes every dependent sale, in order, then the product.
    ///
    /// Stops at the first failing step: the flow goes back to `ConflictResolved` holding only
    /// the sales not yet deleted, so a retry picks up where this attempt stopped.
    ///
    /// Returns [`DeleteFailure::NotPending`] unless the dependents of a conflict are known.
    pub async fn confirm_cascade_delete(&mut self) -> Result<(), DeleteFailure> {
        let id = self.pending_id().ok_or(DeleteFailure::NotPending)?;
        if !self.transition(DeletionEvent::CascadeConfirmed) {
            return Err(DeleteFailure::NotPending);
        }

        let dependents = self.state.dependents().to_vec();
        for (done, sale) in dependents.iter().enumerate() {
            let deleted = Repository::<Sale>::delete(&self.repo, sale.id).await;
            match deleted.map_err(DeleteFailure::from) {
                Ok(()) | Err(DeleteFailure::NotFound) => {
                    debug!(product = %id, sale = %sale.id, "Dependent sale deleted");
                }
                Err(failure) => {
                    let remaining = dependents[done..].to_vec();
                    return Err(self.cascade_failed(id, failure, remaining));
                }
            }
        }

        let deleted = Repository::<Product>::delete(&self.repo, id).await;
        match deleted.map_err(DeleteFailure::from) {
            Ok(()) | Err(DeleteFailure::NotFound) => {}
            // A sale recorded during the cascade: offer the new dependents
            Err(DeleteFailure::Conflict) => match self.fetch_dependents(id).await {
                Ok(remaining) => {
                    return Err(self.cascade_failed(id, DeleteFailure::Conflict, remaining));
                }
                Err(e) => {
                    let failure = DeleteFailure::from(e);
                    warn!(product = %id, %failure, "Failed to reload dependent sales");
                    self.transition(DeletionEvent::Failed);
                    self.notice = Some(format!(
                        "Cascade delete stopped: new sales reference this product, \
                         and they could not be loaded: {failure}"
                    ));
                    return Err(failure);
                }
            },
            Err(failure) => return Err(self.cascade_failed(id, failure, Vec::new())),
        }

        self.transition(DeletionEvent::CascadeCompleted);
        info!(product = %id, sales = dependents.len(), "Cascade delete complete");

        if let Err(e) = self.load().await {
            self.products.retain(|p| p.id != id);
            self.notice = Some(format!(
                "Product deleted, but the product list could not be refreshed: {e}"
            ));
        }
        Ok(())
    }

    /// Abandons the flow. Ignored while a request is in flight.
    pub fn cancel(&mut self) {
        if self.transition(DeletionEvent::Cancelled) {
            debug!("Delete cancelled");
        }
    }

    fn pending_id(&self) -> Option<ProductId> {
        self.state.product().map(|p| p.id)
    }

    async fn fetch_dependents(&self, id: ProductId) -> Result<Vec<Sale>, RepositoryError> {
        let sales = Repository::<Sale>::list(&self.repo).await?;
        Ok(sales.into_iter().filter(|s| s.product_id == id).collect())
    }

    async fn load_dependents(&mut self, id: ProductId) -> Result<(), DeleteFailure> {
        match self.fetch_dependents(id).await {
            Ok(dependents) => {
                info!(product = %id, dependents = dependents.len(), "Dependents loaded");
                self.transition(DeletionEvent::DependentsLoaded(dependents));
                Ok(())
            }
            Err(e) => {
                let failure = DeleteFailure::from(e);
                warn!(product = %id, %failure, "Failed to load dependent sales");
                self.transition(DeletionEvent::Failed);
                self.notice = Some(format!("Failed to load related sales: {failure}"));
                Err(failure)
            }
        }
    }

    fn cascade_failed(
        &mut self,
        id: ProductId,
        failure: DeleteFailure,
        remaining: Vec<Sale>,
    ) -> DeleteFailure {
        warn!(product = %id, %failure, remaining = remaining.len(), "Cascade delete stopped");
        self.transition(DeletionEvent::CascadeFailed { remaining });
        self.notice = Some(format!("Cascade delete stopped: {failure}"));
        failure
    }

    /// Applies `event`; a refused event is logged and leaves the state as it was.
    fn transition(&mut self, event: DeletionEvent) -> bool {
        let state = std::mem::take(&mut self.state);
        let from = state.to_string();
        match state.apply(event) {
            Ok(next) => {
                debug!(%from, to = %next, "Deletion transition");
                self.state = next;
                true
            }
            Err(unchanged) => {
                warn!(state = %unchanged, "Deletion event ignored");
                self.state = unchanged;
                false
            }
        }
    }
}
