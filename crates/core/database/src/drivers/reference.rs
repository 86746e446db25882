use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use futures::lock::Mutex;

use crate::Keyword;

database_derived!(
    /// Reference implementation
    #[derive(Default)]
    pub struct ReferenceDb {
        pub keywords: Arc<Mutex<HashMap<String, Keyword>>>,

        /// Number of storage calls served so far
        pub operation_count: Arc<AtomicUsize>,
    }
);

impl ReferenceDb {
    /// Record a storage call
    pub fn record_operation(&self) {
        self.operation_count.fetch_add(1, Ordering::SeqCst);
    }

    /// Number of storage calls served so far
    pub fn operations(&self) -> usize {
        self.operation_count.load(Ordering::SeqCst)
    }

    /// Remove every record
    pub async fn clear(&self) {
        self.keywords.lock().await.clear();
    }
}
