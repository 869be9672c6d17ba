use std::sync::Arc;

use crate::{
    db::DbPool,
    services::storage::{SqliteTripStore, TripStore},
};

#[derive(Clone)]
pub struct AppState {
    pub trips: Arc<dyn TripStore>,
}

impl AppState {
    pub fn new(db: DbPool) -> Self {
        Self::with_store(Arc::new(SqliteTripStore::new(db)))
    }

    pub fn with_store(trips: Arc<dyn TripStore>) -> Self {
        Self { trips }
    }
}
