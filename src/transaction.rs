use crate::{Connection, Result};
use std::time::Duration;

/// The transaction contract the mapping engine executes against.
///
/// One instance covers one unit of work; commit and rollback may be issued
/// several times over its life. `close` consumes the handle, so no call can
/// reach a connection that was already given back.
pub trait Transaction: Send {
    type Connection: Connection;

    /// The physical connection backing this unit of work, acquired on first
    /// use.
    fn connection(&mut self) -> impl Future<Output = Result<&mut Self::Connection>> + Send;

    fn commit(&mut self) -> impl Future<Output = Result<()>> + Send;

    fn rollback(&mut self) -> impl Future<Output = Result<()>> + Send;

    /// Hand the connection back to its source.
    fn close(self) -> impl Future<Output = Result<()>> + Send;

    /// Remaining life of the enclosing external transaction, if any.
    fn timeout(&self) -> Option<Duration>;
}
