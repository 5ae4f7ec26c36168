use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use time::OffsetDateTime;

use crate::{
    Error, SessionId, TransactionId,
    stores::TransactionStore,
    transaction::{NewTransaction, Transaction},
};

/// A store that holds nothing and counts how many times it was queried.
///
/// Used to check that a request was rejected before reaching storage.
#[derive(Debug, Clone, Default)]
pub(crate) struct SpyTransactionStore {
    calls: Arc<AtomicUsize>,
}

impl SpyTransactionStore {
    pub(crate) fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

impl TransactionStore for SpyTransactionStore {
    fn create(&self, transaction: NewTransaction) -> Result<Transaction, Error> {
        self.record_call();

        Ok(Transaction {
            id: TransactionId::new_random(),
            title: transaction.title.as_str().to_owned(),
            amount: transaction.amount,
            session_id: transaction.session_id,
            created_at: OffsetDateTime::now_utc(),
        })
    }

    fn get(&self, _: TransactionId, _: SessionId) -> Result<Option<Transaction>, Error> {
        self.record_call();
        Ok(None)
    }

    fn list(&self, _: SessionId) -> Result<Vec<Transaction>, Error> {
        self.record_call();
        Ok(Vec::new())
    }

    fn summary(&self, _: SessionId) -> Result<f64, Error> {
        self.record_call();
        Ok(0.0)
    }
}
