use crate::{Connection, Result};
use std::time::Duration;

/// Container side of the binding: hands out connections that may already be
/// owned by an active external transaction and takes them back afterwards.
///
/// Every capability is a method on the source it concerns, so callers carry
/// their source explicitly instead of consulting a process wide registry.
pub trait DataSource: Send + Sync {
    type Connection: Connection;

    /// Transaction aware acquisition: returns the connection bound to the
    /// active external transaction on this source when one exists, a fresh
    /// one otherwise.
    fn acquire(&self) -> impl Future<Output = Result<Self::Connection>> + Send;

    /// Whether `connection` is under control of an active external
    /// transaction on this source.
    fn is_managed(&self, connection: &Self::Connection) -> bool;

    /// Give the connection back, per container policy: return it to the
    /// pool, decrement a transaction scoped reference or close it
    /// physically. `None` means no connection was ever obtained and must be
    /// accepted as a no-op.
    fn release(
        &self,
        connection: Option<Self::Connection>,
    ) -> impl Future<Output = Result<()>> + Send;

    /// Remaining time to live of the active external transaction bound to
    /// this source, when it carries a deadline.
    fn deadline(&self) -> Option<Duration>;
}
