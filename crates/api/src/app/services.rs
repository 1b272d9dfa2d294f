use stockroom_core::DomainError;
use stockroom_inventory::{self as inventory, ApparelItem, OrderLine};
use stockroom_store::{FileStore, StoreError};

/// Application service layer.
///
/// Every operation runs its own load-mutate-save cycle against the backing
/// file; nothing is cached between requests, and concurrent mutations can
/// lose an update (see `FileStore`).
pub struct AppServices {
    store: FileStore,
}

/// Failure of a service operation: either a domain rule or the store.
#[derive(Debug)]
pub enum ApiError {
    Domain(DomainError),
    Store(StoreError),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

impl AppServices {
    pub fn new(store: FileStore) -> Self {
        Self { store }
    }

    /// Create a new item; duplicate `(code, size)` keys are rejected.
    pub fn create_item(&self, item: ApparelItem) -> Result<ApparelItem, ApiError> {
        let mut items = self.store.load()?;
        let created = inventory::create(&mut items, item)?;
        self.store.save(&items)?;
        tracing::info!(code = %created.code, size = %created.size, "apparel created");
        Ok(created)
    }

    /// Insert-or-replace one item; returns the record after the operation.
    pub fn upsert_item(&self, item: ApparelItem) -> Result<ApparelItem, ApiError> {
        let mut items = self.store.load()?;
        let updated = inventory::upsert_one(&mut items, item);
        self.store.save(&items)?;
        tracing::info!(code = %updated.code, size = %updated.size, "apparel upserted");
        Ok(updated)
    }

    /// Apply a batch of upserts and persist once; returns the full collection.
    pub fn upsert_items(&self, batch: Vec<ApparelItem>) -> Result<Vec<ApparelItem>, ApiError> {
        let mut items = self.store.load()?;
        let count = batch.len();
        inventory::upsert_many(&mut items, batch);
        self.store.save(&items)?;
        tracing::info!(count, "apparel batch upserted");
        Ok(items)
    }

    pub fn check_order(&self, order: &[OrderLine]) -> Result<bool, ApiError> {
        let items = self.store.load()?;
        Ok(inventory::can_fulfill(&items, order))
    }

    pub fn order_cost(&self, order: &[OrderLine]) -> Result<f64, ApiError> {
        let items = self.store.load()?;
        Ok(inventory::lowest_cost(&items, order)?)
    }
}
