use chrono::DateTime;
use stockroom::clients::{ProductClient, RestockClient, SaleClient};
use stockroom::deletion::{DeleteFailure, DeletionController, DeletionState};
use stockroom::framework::mock::MockClient;
use stockroom::framework::FrameworkError;
use stockroom::lifecycle::InventorySystem;
use stockroom::model::{NewSale, Product, ProductFields, ProductId, RestockOrder, Sale, SaleId};
use stockroom::product_actor::ProductError;
use stockroom::repository::{ActorRepository, Repository};

fn fields(name: &str, price: f64, stock: u32) -> ProductFields {
    ProductFields {
        name: name.to_string(),
        description: String::new(),
        price,
        stock,
    }
}

fn sale(id: u32, product_id: u32) -> Sale {
    let mut sale = Sale::new(id, product_id, 1, 5.0);
    sale.sale_date = DateTime::UNIX_EPOCH;
    sale
}

fn ids(sales: &[Sale]) -> Vec<SaleId> {
    sales.iter().map(|s| s.id).collect()
}

/// Real Product actor whose sale dependency is a mock; the mock also serves the
/// controller's own sale requests.
struct Harness {
    sales: MockClient<Sale>,
    products: ProductClient,
    repo: ActorRepository,
}

impl Harness {
    async fn new() -> Self {
        let sales = MockClient::<Sale>::new();
        let (product_actor, products) = stockroom::product_actor::new();
        let (restock_actor, restocks) = stockroom::restock_actor::new();
        tokio::spawn(product_actor.run(SaleClient::new(sales.client())));
        tokio::spawn(restock_actor.run(products.clone()));

        products.create_product(fields("Widget", 5.0, 3)).await.unwrap();
        products.create_product(fields("Gadget", 2.0, 8)).await.unwrap();

        let sales_client = SaleClient::new(sales.client());
        let repo = ActorRepository::new(products.clone(), sales_client, restocks);
        Self {
            sales,
            products,
            repo,
        }
    }
}

#[tokio::test]
async fn test_conflict_then_cascade_delete() {
    let mut h = Harness::new().await;
    let (s10, s11, s12) = (sale(10, 1), sale(11, 1), sale(12, 2));

    // Product::on_delete vetoes, then the controller lists the dependents
    h.sales.expect_list().return_ok(vec![s10.clone(), s11.clone()]);
    h.sales
        .expect_list()
        .return_ok(vec![s10.clone(), s11.clone(), s12.clone()]);
    // Cascade: dependents in order, then the product once no sale references it
    h.sales.expect_delete(SaleId(10)).return_ok(());
    h.sales.expect_delete(SaleId(11)).return_ok(());
    h.sales.expect_list().return_ok(vec![s12.clone()]);

    let mut deletion = DeletionController::new(h.repo.clone());
    deletion.load().await.unwrap();
    let widget = deletion.products()[0].clone();

    assert!(deletion.request_delete(widget.clone()));
    assert_eq!(
        deletion.confirm_delete().await,
        Err(DeleteFailure::Conflict)
    );
    assert!(matches!(
        deletion.state(),
        DeletionState::ConflictResolved { .. }
    ));
    assert_eq!(ids(deletion.dependents()), vec![SaleId(10), SaleId(11)]);
    assert_eq!(deletion.products().len(), 2);
    assert!(deletion.notice().is_none());

    deletion.confirm_cascade_delete().await.unwrap();
    assert_eq!(deletion.state(), &DeletionState::Idle);
    assert!(deletion.dependents().is_empty());
    assert!(deletion.products().iter().all(|p| p.id != widget.id));
    assert_eq!(deletion.products().len(), 1);

    h.sales.verify();
}

#[tokio::test]
async fn test_cascade_failure_resumes_without_repeating_deletes() {
    let mut h = Harness::new().await;
    let (s10, s11) = (sale(10, 1), sale(11, 1));

    h.sales.expect_list().return_ok(vec![s10.clone(), s11.clone()]);
    h.sales.expect_list().return_ok(vec![s10.clone(), s11.clone()]);
    h.sales.expect_delete(SaleId(10)).return_ok(());
    h.sales
        .expect_delete(SaleId(11))
        .return_err(FrameworkError::ActorDropped);

    let mut deletion = DeletionController::new(h.repo.clone());
    deletion.load().await.unwrap();
    let widget = deletion.products()[0].clone();

    deletion.request_delete(widget.clone());
    assert_eq!(
        deletion.confirm_delete().await,
        Err(DeleteFailure::Conflict)
    );

    let failure = deletion.confirm_cascade_delete().await.unwrap_err();
    assert!(matches!(failure, DeleteFailure::Transport(_)));
    assert!(deletion.notice().is_some());
    assert!(!deletion.is_busy());
    assert_eq!(ids(deletion.dependents()), vec![SaleId(11)]);
    assert_eq!(deletion.pending_product(), Some(&widget));
    assert!(deletion.products().iter().any(|p| p.id == widget.id));
    assert!(stockroom::clients::ActorClient::get(&h.products, widget.id)
        .await
        .unwrap()
        .is_some());

    // Retry only touches sale 11; a repeated delete of 10 would fail the mock
    h.sales.expect_delete(SaleId(11)).return_ok(());
    h.sales.expect_list().return_ok(vec![]);
    deletion.dismiss_notice();
    deletion.confirm_cascade_delete().await.unwrap();

    assert_eq!(deletion.state(), &DeletionState::Idle);
    assert!(deletion.products().iter().all(|p| p.id != widget.id));
    assert!(deletion.notice().is_none());
    h.sales.verify();
}

#[tokio::test]
async fn test_single_flight_keeps_first_product() {
    let h = Harness::new().await;
    let mut deletion = DeletionController::new(h.repo.clone());
    deletion.load().await.unwrap();
    let (widget, gadget) = (deletion.products()[0].clone(), deletion.products()[1].clone());

    assert!(deletion.request_delete(widget.clone()));
    assert!(!deletion.request_delete(gadget));
    assert_eq!(deletion.pending_product(), Some(&widget));

    deletion.cancel();
    assert_eq!(deletion.state(), &DeletionState::Idle);
    assert_eq!(deletion.pending_product(), None);
    assert_eq!(deletion.products().len(), 2);
    h.sales.verify();
}

/// Scripted product and sale stores, to inject failures the real store cannot produce.
fn scripted() -> (MockClient<Product>, MockClient<Sale>, ActorRepository) {
    let products = MockClient::<Product>::new();
    let sales = MockClient::<Sale>::new();
    let restocks = MockClient::<RestockOrder>::new();
    let repo = ActorRepository::new(
        ProductClient::new(products.client()),
        SaleClient::new(sales.client()),
        RestockClient::new(restocks.client()),
    );
    (products, sales, repo)
}

fn listed() -> Vec<Product> {
    vec![Product::new(1, "Widget", 5.0, 3), Product::new(2, "Gadget", 2.0, 8)]
}

#[tokio::test]
async fn test_unrecognised_failures_fail_closed() {
    let (mut products, sales, repo) = scripted();
    products.expect_list().return_ok(listed());
    // A 400 without the conflict code is not a conflict
    products
        .expect_delete(ProductId(1))
        .return_err(FrameworkError::EntityError(Box::new(
            ProductError::InsufficientStock {
                requested: 1,
                available: 0,
            },
        )));
    products
        .expect_delete(ProductId(1))
        .return_err(FrameworkError::ActorDropped);

    let mut deletion = DeletionController::new(repo);
    deletion.load().await.unwrap();
    let widget = deletion.products()[0].clone();

    deletion.request_delete(widget.clone());
    let failure = deletion.confirm_delete().await.unwrap_err();
    assert!(matches!(failure, DeleteFailure::Rejected(ref api) if api.status == 400));
    assert_eq!(deletion.state(), &DeletionState::Idle);
    assert_eq!(deletion.products().len(), 2);
    assert!(deletion.notice().is_some());

    deletion.request_delete(widget);
    let failure = deletion.confirm_delete().await.unwrap_err();
    assert!(matches!(failure, DeleteFailure::Transport(_)));
    assert_eq!(deletion.state(), &DeletionState::Idle);
    assert_eq!(deletion.products().len(), 2);

    products.verify();
    sales.verify();
}

#[tokio::test]
async fn test_already_deleted_counts_as_success() {
    let (mut products, mut sales, repo) = scripted();
    products.expect_list().return_ok(listed());
    products
        .expect_delete(ProductId(2))
        .return_err(FrameworkError::NotFound("product_2".into()));
    products
        .expect_delete(ProductId(1))
        .return_err(FrameworkError::EntityError(Box::new(ProductError::HasSales {
            product_id: ProductId(1),
            count: 1,
        })));
    sales.expect_list().return_ok(vec![sale(10, 1)]);
    sales
        .expect_delete(SaleId(10))
        .return_err(FrameworkError::NotFound("sale_10".into()));
    products.expect_delete(ProductId(1)).return_ok(());
    // The refresh after the cascade fails; the product is dropped locally instead
    products
        .expect_list()
        .return_err(FrameworkError::ActorDropped);

    let mut deletion = DeletionController::new(repo);
    deletion.load().await.unwrap();
    let (widget, gadget) = (deletion.products()[0].clone(), deletion.products()[1].clone());

    deletion.request_delete(gadget);
    deletion.confirm_delete().await.unwrap();
    assert_eq!(deletion.products().len(), 1);

    deletion.request_delete(widget);
    assert_eq!(
        deletion.confirm_delete().await,
        Err(DeleteFailure::Conflict)
    );
    deletion.confirm_cascade_delete().await.unwrap();

    assert_eq!(deletion.state(), &DeletionState::Idle);
    assert!(deletion.products().is_empty());
    assert!(deletion
        .notice()
        .unwrap()
        .contains("could not be refreshed"));

    products.verify();
    sales.verify();
}

#[tokio::test]
async fn test_dependent_fetch_failure_returns_to_idle() {
    let (mut products, mut sales, repo) = scripted();
    products.expect_list().return_ok(listed());
    products
        .expect_delete(ProductId(1))
        .return_err(FrameworkError::EntityError(Box::new(ProductError::HasSales {
            product_id: ProductId(1),
            count: 2,
        })));
    sales.expect_list().return_err(FrameworkError::ActorDropped);

    let mut deletion = DeletionController::new(repo);
    deletion.load().await.unwrap();
    let widget = deletion.products()[0].clone();

    deletion.request_delete(widget);
    let failure = deletion.confirm_delete().await.unwrap_err();
    assert!(matches!(failure, DeleteFailure::Transport(_)));
    assert_eq!(deletion.state(), &DeletionState::Idle);
    assert!(deletion.dependents().is_empty());
    assert_eq!(deletion.products().len(), 2);
    assert!(deletion.notice().unwrap().contains("related sales"));

    products.verify();
    sales.verify();
}

#[tokio::test]
async fn test_confirm_without_pending_delete_is_refused() {
    let (mut products, sales, repo) = scripted();
    products.expect_list().return_ok(listed());

    let mut deletion = DeletionController::new(repo);
    deletion.load().await.unwrap();
    let widget = deletion.products()[0].clone();

    assert_eq!(
        deletion.confirm_delete().await,
        Err(DeleteFailure::NotPending)
    );
    assert_eq!(deletion.state(), &DeletionState::Idle);

    // Cascade needs the dependents of a conflict first
    deletion.request_delete(widget.clone());
    assert_eq!(
        deletion.confirm_cascade_delete().await,
        Err(DeleteFailure::NotPending)
    );
    assert_eq!(
        deletion.state(),
        &DeletionState::ConfirmPending {
            product: widget.clone()
        }
    );
    assert_eq!(deletion.products().len(), 2);

    // No store request was sent on either refusal
    products.verify();
    sales.verify();
}

#[tokio::test]
async fn test_cascade_stops_when_new_dependents_cannot_be_loaded() {
    let (mut products, mut sales, repo) = scripted();
    let has_sales = || {
        FrameworkError::EntityError(Box::new(ProductError::HasSales {
            product_id: ProductId(1),
            count: 1,
        }))
    };
    products.expect_list().return_ok(listed());
    products.expect_delete(ProductId(1)).return_err(has_sales());
    sales.expect_list().return_ok(vec![sale(10, 1)]);
    sales.expect_delete(SaleId(10)).return_ok(());
    // A sale recorded mid-cascade blocks the product again, and the sales store is gone
    products.expect_delete(ProductId(1)).return_err(has_sales());
    sales.expect_list().return_err(FrameworkError::ActorDropped);

    let mut deletion = DeletionController::new(repo);
    deletion.load().await.unwrap();
    let widget = deletion.products()[0].clone();

    deletion.request_delete(widget);
    assert_eq!(
        deletion.confirm_delete().await,
        Err(DeleteFailure::Conflict)
    );

    let failure = deletion.confirm_cascade_delete().await.unwrap_err();
    assert!(matches!(failure, DeleteFailure::Transport(_)));
    assert_eq!(deletion.state(), &DeletionState::Idle);
    assert!(deletion.dependents().is_empty());
    assert_eq!(deletion.products().len(), 2);
    assert!(deletion
        .notice()
        .unwrap()
        .contains("could not be loaded"));

    products.verify();
    sales.verify();
}

/// Whole flow against the real store: sales are recorded, block the delete, and are
/// removed by the cascade.
#[tokio::test]
async fn test_cascade_against_real_store() {
    let system = InventorySystem::new();
    let repo = system.repository();

    let widget = Repository::<Product>::create(&repo, fields("Widget", 4.0, 10))
        .await
        .unwrap();
    let gadget = Repository::<Product>::create(&repo, fields("Gadget", 1.0, 10))
        .await
        .unwrap();
    for (product_id, quantity) in [(widget.id, 2), (gadget.id, 1), (widget.id, 3)] {
        Repository::<Sale>::create(&repo, NewSale { product_id, quantity })
            .await
            .unwrap();
    }

    let mut deletion = DeletionController::new(repo.clone());
    deletion.load().await.unwrap();
    let pending = deletion.products()[0].clone();
    assert_eq!(pending.id, widget.id);
    assert_eq!(pending.stock, 5);

    deletion.request_delete(pending);
    assert_eq!(
        deletion.confirm_delete().await,
        Err(DeleteFailure::Conflict)
    );
    assert_eq!(ids(deletion.dependents()), vec![SaleId(1), SaleId(3)]);

    deletion.confirm_cascade_delete().await.unwrap();
    let left: Vec<ProductId> = deletion.products().iter().map(|p| p.id).collect();
    assert_eq!(left, vec![gadget.id]);

    let sales = Repository::<Sale>::list(&repo).await.unwrap();
    assert_eq!(ids(&sales), vec![SaleId(2)]);

    system.shutdown().await.unwrap();
}
