//! Dashboard refresh with stale-response protection.

use super::engine::Dashboard;
use crate::model::{Product, RestockOrder, Sale};
use crate::repository::{InventoryRepository, Repository, RepositoryError};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

/// What became of one refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    /// The dashboard was recomputed.
    Applied,
    /// A newer refresh was issued meanwhile; this response was dropped.
    Discarded,
}

#[derive(Debug, Default)]
struct View {
    /// Token of the most recently issued refresh.
    latest: u64,
    loading: bool,
    snapshot: Option<Dashboard>,
    error: Option<String>,
}

/// Holds the last computed [`Dashboard`] and refreshes it from a repository.
///
/// `refresh` takes `&self`, so refreshes may overlap. Each one carries a token and only
/// the latest issued token may write the view; older responses are dropped whether they
/// succeeded or failed.
pub struct DashboardController<R> {
    repo: R,
    view: Mutex<View>,
}

impl<R: InventoryRepository> DashboardController<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            view: Mutex::new(View::default()),
        }
    }

    /// Fetches the three collections concurrently and recomputes the dashboard.
    ///
    /// If any fetch fails the previous dashboard stays in place and the error is recorded.
    pub async fn refresh(&self) -> Result<Refresh, RepositoryError> {
        let token = {
            let mut view = self.view();
            view.latest += 1;
            view.loading = true;
            view.latest
        };
        debug!(token, "Dashboard refresh started");

        let fetched = tokio::try_join!(
            Repository::<Product>::list(&self.repo),
            Repository::<Sale>::list(&self.repo),
            Repository::<RestockOrder>::list(&self.repo),
        );

        let mut view = self.view();
        if token != view.latest {
            info!(token, latest = view.latest, "Discarding stale dashboard response");
            return Ok(Refresh::Discarded);
        }
        view.loading = false;

        match fetched {
            Ok((products, sales, restocks)) => {
                let dashboard = Dashboard::compute(&products, &sales, &restocks);
                debug!(
                    token,
                    products = products.len(),
                    sales = sales.len(),
                    restocks = restocks.len(),
                    "Dashboard computed"
                );
                view.snapshot = Some(dashboard);
                view.error = None;
                Ok(Refresh::Applied)
            }
            Err(e) => {
                warn!(token, error = %e, "Dashboard refresh failed");
                view.error = Some(format!("Failed to load dashboard data: {e}"));
                Err(e)
            }
        }
    }

    /// The last successfully computed dashboard.
    pub fn snapshot(&self) -> Option<Dashboard> {
        self.view().snapshot.clone()
    }

    pub fn error(&self) -> Option<String> {
        self.view().error.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.view().loading
    }

    pub fn dismiss_error(&self) {
        self.view().error = None;
    }

    fn view(&self) -> MutexGuard<'_, View> {
        self.view.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
