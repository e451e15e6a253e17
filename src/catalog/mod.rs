//! # Catalog
//!
//! The day-to-day operator actions: add and edit products, sell, restock, and manage the
//! recorded sales and restock orders. Input arrives as text from forms and is validated
//! before any request is made. The product list is only re-read after a write succeeded.
//!
//! Deleting products is not done here; see [`crate::deletion`].

pub mod forms;

pub use forms::*;

use crate::model::{Product, ProductId, RestockOrder, RestockOrderId, RestockUpdate, Sale, SaleId};
use crate::repository::{InventoryRepository, Repository, RepositoryError};
use thiserror::Error;
use tracing::{info, warn};
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The input was refused before contacting the store.
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub struct Catalog<R> {
    repo: R,
    products: Vec<Product>,
    notice: Option<String>,
}

impl<R: InventoryRepository> Catalog<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            products: Vec::new(),
            notice: None,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub async fn load_products(&mut self) -> Result<(), CatalogError> {
        let result = Repository::<Product>::list(&self.repo).await;
        self.products = self.surface(result, "load products")?;
        Ok(())
    }

    pub async fn add_product(&mut self, form: &ProductForm) -> Result<Product, CatalogError> {
        let fields = form.parse()?;
        let result = Repository::<Product>::create(&self.repo, fields).await;
        let product = self.surface(result, "add product")?;
        info!(product = %product.id, name = %product.name, "Product added");
        self.reload().await;
        Ok(product)
    }

    pub async fn edit_product(
        &mut self,
        id: ProductId,
        form: &ProductForm,
    ) -> Result<Product, CatalogError> {
        let fields = form.parse()?;
        let result = Repository::<Product>::update(&self.repo, id, fields).await;
        let product = self.surface(result, "update product")?;
        info!(product = %id, "Product updated");
        self.reload().await;
        Ok(product)
    }

    /// Records a sale of `quantity` units; the store prices it and takes the stock.
    pub async fn sell(
        &mut self,
        product_id: ProductId,
        quantity: &str,
    ) -> Result<Sale, CatalogError> {
        let payload = sale_payload(product_id, quantity)?;
        let result = Repository::<Sale>::create(&self.repo, payload).await;
        let sale = self.surface(result, "record sale")?;
        info!(sale = %sale.id, product = %product_id, quantity = sale.quantity, "Sale recorded");
        self.reload().await;
        Ok(sale)
    }

    /// Places a restock order for `quantity` units.
    pub async fn restock(
        &mut self,
        product_id: ProductId,
        quantity: &str,
    ) -> Result<RestockOrder, CatalogError> {
        let payload = restock_payload(product_id, quantity)?;
        let result = Repository::<RestockOrder>::create(&self.repo, payload).await;
        let order = self.surface(result, "place restock order")?;
        info!(order = %order.id, product = %product_id, "Restock order placed");
        Ok(order)
    }

    pub async fn list_sales(&mut self) -> Result<Vec<Sale>, CatalogError> {
        let result = Repository::<Sale>::list(&self.repo).await;
        Ok(self.surface(result, "load sales")?)
    }

    /// Deletes a sale; the store puts its quantity back into stock.
    pub async fn delete_sale(&mut self, id: SaleId) -> Result<(), CatalogError> {
        let result = Repository::<Sale>::delete(&self.repo, id).await;
        self.surface(result, "delete sale")?;
        info!(sale = %id, "Sale deleted");
        self.reload().await;
        Ok(())
    }

    pub async fn list_restocks(&mut self) -> Result<Vec<RestockOrder>, CatalogError> {
        let result = Repository::<RestockOrder>::list(&self.repo).await;
        Ok(self.surface(result, "load restock orders")?)
    }

    /// Marks a pending order received, adding its quantity to the product's stock.
    pub async fn receive_restock(
        &mut self,
        id: RestockOrderId,
    ) -> Result<RestockOrder, CatalogError> {
        let result =
            Repository::<RestockOrder>::update(&self.repo, id, RestockUpdate::MarkReceived).await;
        let order = self.surface(result, "receive restock order")?;
        info!(order = %id, quantity = order.quantity, "Restock order received");
        self.reload().await;
        Ok(order)
    }

    /// Deletes a pending restock order.
    pub async fn delete_restock(&mut self, id: RestockOrderId) -> Result<(), CatalogError> {
        let result = Repository::<RestockOrder>::delete(&self.repo, id).await;
        self.surface(result, "delete restock order")?;
        info!(order = %id, "Restock order deleted");
        Ok(())
    }

    /// Re-reads products after a write. A failure only leaves a notice.
    async fn reload(&mut self) {
        let _ = self.load_products().await;
    }

    /// Records a failed request as the notice.
    fn surface<T>(
        &mut self,
        result: Result<T, RepositoryError>,
        action: &str,
    ) -> Result<T, RepositoryError> {
        result.map_err(|e| {
            warn!(error = %e, "Failed to {}", action);
            self.notice = Some(format!("Failed to {action}: {e}"));
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{ProductClient, RestockClient, SaleClient};
    use crate::framework::mock::MockClient;
    use crate::lifecycle::InventorySystem;
    use crate::repository::ActorRepository;

    #[tokio::test]
    async fn validation_fails_before_any_request() {
        let products = MockClient::<Product>::new();
        let sales = MockClient::<Sale>::new();
        let restocks = MockClient::<RestockOrder>::new();
        let repo = ActorRepository::new(
            ProductClient::new(products.client()),
            SaleClient::new(sales.client()),
            RestockClient::new(restocks.client()),
        );
        let mut catalog = Catalog::new(repo);

        let blank = ProductForm::new("", "", "1.0", "1");
        assert!(matches!(
            catalog.add_product(&blank).await,
            Err(CatalogError::Validation(_))
        ));
        assert!(matches!(
            catalog.sell(ProductId(1), "0").await,
            Err(CatalogError::Validation(_))
        ));
        assert!(matches!(
            catalog.restock(ProductId(1), "-4").await,
            Err(CatalogError::Validation(_))
        ));
        assert!(catalog.notice().is_none());

        products.verify();
        sales.verify();
        restocks.verify();
    }

    #[tokio::test]
    async fn sell_and_restock_move_stock() {
        let system = InventorySystem::new();
        let mut catalog = Catalog::new(system.repository());

        let bolt = catalog
            .add_product(&ProductForm::new("Bolt", "M6", "0.50", "10"))
            .await
            .unwrap();
        assert_eq!(catalog.products().len(), 1);

        let sale = catalog.sell(bolt.id, "4").await.unwrap();
        assert_eq!(sale.total_price, 2.0);
        assert_eq!(catalog.products()[0].stock, 6);

        let order = catalog.restock(bolt.id, "20").await.unwrap();
        assert!(order.is_pending());
        let received = catalog.receive_restock(order.id).await.unwrap();
        assert!(!received.is_pending());
        assert_eq!(catalog.products()[0].stock, 26);

        catalog.delete_sale(sale.id).await.unwrap();
        assert_eq!(catalog.products()[0].stock, 30);
        assert!(catalog.list_sales().await.unwrap().is_empty());

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn store_refusals_become_notices() {
        let system = InventorySystem::new();
        let mut catalog = Catalog::new(system.repository());
        let bolt = catalog
            .add_product(&ProductForm::new("Bolt", "", "1", "2"))
            .await
            .unwrap();

        let err = catalog.sell(bolt.id, "5").await.unwrap_err();
        match err {
            CatalogError::Repository(e) => {
                assert_eq!(e.status(), Some(400));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(catalog.notice().unwrap().starts_with("Failed to record sale"));
        assert_eq!(catalog.products()[0].stock, 2);

        let order = catalog.restock(bolt.id, "1").await.unwrap();
        catalog.receive_restock(order.id).await.unwrap();
        let err = catalog.delete_restock(order.id).await.unwrap_err();
        assert!(matches!(err, CatalogError::Repository(ref e) if e.is_not_found()));

        catalog.dismiss_notice();
        assert!(catalog.notice().is_none());
        system.shutdown().await.unwrap();
    }
}
