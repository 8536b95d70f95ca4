use crate::{DataSource, ManagedTransaction, Transaction};
use std::sync::Arc;

/// Strategy for opening one transaction handle per unit of work. The session
/// layer holds a single factory for its whole life and calls it once per
/// session; the source is passed explicitly on every call.
pub trait TransactionFactory<D: DataSource>: Send + Sync {
    type Transaction: Transaction<Connection = D::Connection>;

    fn new_transaction(&self, data_source: Arc<D>) -> Self::Transaction;
}

/// Default strategy when none is configured: every unit of work gets a
/// [`ManagedTransaction`], deferring to an external transaction whenever one
/// is active and running standalone otherwise.
#[derive(Default, Debug, Clone, Copy)]
pub struct ManagedTransactionFactory;

impl<D: DataSource> TransactionFactory<D> for ManagedTransactionFactory {
    type Transaction = ManagedTransaction<D>;

    fn new_transaction(&self, data_source: Arc<D>) -> ManagedTransaction<D> {
        ManagedTransaction::new(data_source)
    }
}
