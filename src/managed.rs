use crate::{Connection, DataSource, Result, Transaction};
use std::{sync::Arc, time::Duration};

/// Transaction handle over a connection that an external transaction manager
/// may already own.
///
/// The connection comes from the source's transaction aware acquisition, so
/// while an external transaction is active the handle shares its connection
/// instead of opening a second one. In that mode, and on auto committing
/// connections, commit and rollback are no-ops: whoever owns the connection
/// decides the outcome. Outside of it the handle behaves like a plain driver
/// transaction.
pub struct ManagedTransaction<D: DataSource> {
    data_source: Arc<D>,
    state: State<D::Connection>,
}

enum State<C> {
    Unopened,
    Opened {
        connection: C,
        managed: bool,
        auto_commit: bool,
    },
}

impl<D: DataSource> ManagedTransaction<D> {
    pub fn new(data_source: Arc<D>) -> Self {
        Self {
            data_source,
            state: State::Unopened,
        }
    }

    /// Acquire the connection and fix the management mode for the rest of
    /// the handle's life. Runs at most once: the flags are discovered from
    /// the connection's actual state, never asserted by a caller.
    async fn open(&mut self) -> Result<()> {
        let mut connection = self.data_source.acquire().await?;
        let auto_commit = connection.auto_commit().await?;
        let managed = self.data_source.is_managed(&connection);
        log::debug!(
            "Connection will{} be managed externally",
            if managed { "" } else { " not" },
        );
        self.state = State::Opened {
            connection,
            managed,
            auto_commit,
        };
        Ok(())
    }
}

impl<D: DataSource> Transaction for ManagedTransaction<D> {
    type Connection = D::Connection;

    async fn connection(&mut self) -> Result<&mut D::Connection> {
        if matches!(self.state, State::Unopened) {
            self.open().await?;
        }
        match &mut self.state {
            State::Opened { connection, .. } => Ok(connection),
            State::Unopened => unreachable!("The transaction is opened by this point"),
        }
    }

    async fn commit(&mut self) -> Result<()> {
        if let State::Opened {
            connection,
            managed: false,
            auto_commit: false,
        } = &mut self.state
        {
            log::debug!("Committing the connection");
            connection.commit().await?;
        }
        Ok(())
    }

    async fn rollback(&mut self) -> Result<()> {
        if let State::Opened {
            connection,
            managed: false,
            auto_commit: false,
        } = &mut self.state
        {
            log::debug!("Rolling back the connection");
            connection.rollback().await?;
        }
        Ok(())
    }

    async fn close(self) -> Result<()> {
        let connection = match self.state {
            State::Opened { connection, .. } => Some(connection),
            State::Unopened => None,
        };
        self.data_source.release(connection).await
    }

    fn timeout(&self) -> Option<Duration> {
        self.data_source.deadline()
    }
}
