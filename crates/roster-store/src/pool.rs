//! Bounded pool of SQLite connections.
//!
//! The pool owns a fixed number of [`tokio_rusqlite::Connection`]s. A
//! semaphore with one permit per connection caps how many can be checked out
//! at once; callers past the cap wait until a [`PooledConnection`] is dropped.

use std::ops::Deref;
use std::path::PathBuf;
use std::time::Duration;

use parking_lot::Mutex;
use rusqlite::OpenFlags;
use tokio::sync::{Semaphore, SemaphorePermit};
use tokio_rusqlite::Connection;
use tracing::debug;

use crate::error::StoreError;

/// How to open the pool.
#[derive(Debug, Clone)]
pub struct PoolOptions {
    /// Database file. `None` opens a private shared-cache in-memory database.
    pub path: Option<PathBuf>,
    pub size: usize,
    pub busy_timeout: Duration,
}

impl PoolOptions {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self {
            path: None,
            size: 5,
            busy_timeout: Duration::from_secs(5),
        }
    }
}

/// Fixed-size connection pool.
pub struct ConnectionPool {
    idle: Mutex<Vec<Connection>>,
    permits: Semaphore,
    size: usize,
}

impl ConnectionPool {
    /// Open every connection up front.
    pub async fn open(options: &PoolOptions) -> Result<Self, StoreError> {
        if options.size == 0 {
            return Err(StoreError::Connection(
                "pool size must be greater than 0".to_string(),
            ));
        }

        // A named shared-cache database lets every pooled connection see the
        // same in-memory data; the uuid keeps separate pools apart.
        let target = match &options.path {
            Some(path) => path.to_string_lossy().into_owned(),
            None => format!(
                "file:roster-{}?mode=memory&cache=shared",
                uuid::Uuid::new_v4().simple()
            ),
        };
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_CREATE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;

        let mut connections = Vec::with_capacity(options.size);
        for _ in 0..options.size {
            let conn = Connection::open_with_flags(&target, flags)
                .await
                .map_err(|e| StoreError::Connection(e.to_string()))?;

            let busy_timeout = options.busy_timeout;
            conn.call(move |conn| {
                conn.busy_timeout(busy_timeout)?;
                Ok(())
            })
            .await?;

            connections.push(conn);
        }

        debug!("Opened {} SQLite connection(s) on {}", options.size, target);

        Ok(Self {
            idle: Mutex::new(connections),
            permits: Semaphore::new(options.size),
            size: options.size,
        })
    }

    /// Check a connection out, waiting while all of them are in use.
    pub async fn acquire(&self) -> Result<PooledConnection<'_>, StoreError> {
        let permit = self
            .permits
            .acquire()
            .await
            .map_err(|_| StoreError::Connection("connection pool is closed".to_string()))?;

        let conn = self.idle.lock().pop().ok_or_else(|| {
            StoreError::Connection("no idle connection behind a free permit".to_string())
        })?;

        Ok(PooledConnection {
            pool: self,
            conn,
            _permit: permit,
        })
    }

    /// Total number of connections.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Connections not currently checked out.
    pub fn available(&self) -> usize {
        self.permits.available_permits()
    }
}

/// A checked-out connection. Returns itself to the pool when dropped.
pub struct PooledConnection<'a> {
    pool: &'a ConnectionPool,
    conn: Connection,
    // Released after `drop` has put the connection back.
    _permit: SemaphorePermit<'a>,
}

impl Deref for PooledConnection<'_> {
    type Target = Connection;

    fn deref(&self) -> &Connection {
        &self.conn
    }
}

impl Drop for PooledConnection<'_> {
    fn drop(&mut self) {
        // The handle is a cheap sender clone onto the same connection thread.
        self.pool.idle.lock().push(self.conn.clone());
    }
}

#[cfg(test)]
#[path = "pool_tests.rs"]
mod tests;
