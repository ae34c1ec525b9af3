//! Single-statement data access over the connection pool.

use std::sync::Arc;

use rusqlite::params_from_iter;
use rusqlite::types::{Value, ValueRef};
use serde_json::{Map, Number, Value as JsonValue};
use tracing::{debug, info};

use crate::error::StoreError;
use crate::pool::{ConnectionPool, PoolOptions};
use crate::schema;

/// One result row, keyed by column name in select-list order.
pub type Row = Map<String, JsonValue>;

/// Handle to the relational store.
///
/// Cheap to clone; all clones share one pool. Each call checks a connection
/// out, runs one statement and hands the connection back before returning,
/// whether the statement succeeded or not.
#[derive(Clone)]
pub struct Database {
    pool: Arc<ConnectionPool>,
}

impl Database {
    /// Open the pool and make sure the schema exists.
    pub async fn open(options: PoolOptions, seed: bool) -> Result<Self, StoreError> {
        let pool = ConnectionPool::open(&options).await?;

        {
            let conn = pool.acquire().await?;
            conn.call(move |conn| {
                schema::init_schema(conn)?;
                if seed {
                    schema::seed(conn)?;
                }
                Ok(())
            })
            .await?;
        }

        info!(
            "Database ready: {} connection(s), seed={}",
            pool.size(),
            seed
        );

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// Private in-memory database with the schema but no rows.
    pub async fn in_memory() -> Result<Self, StoreError> {
        Self::open(PoolOptions::in_memory(), false).await
    }

    /// The underlying pool.
    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    /// Run a read statement and return every row.
    pub async fn query(&self, sql: &str, params: Vec<Value>) -> Result<Vec<Row>, StoreError> {
        let conn = self.pool.acquire().await?;
        let sql = sql.to_string();
        debug!(sql = %sql, params = params.len(), "query");

        let rows = conn
            .call(move |conn| {
                let mut stmt = conn.prepare(&sql)?;
                let columns: Vec<String> =
                    stmt.column_names().into_iter().map(String::from).collect();

                let mut rows = stmt.query(params_from_iter(params.iter()))?;
                let mut out = Vec::new();
                while let Some(row) = rows.next()? {
                    let mut map = Map::with_capacity(columns.len());
                    for (idx, name) in columns.iter().enumerate() {
                        map.insert(name.clone(), to_json(row.get_ref(idx)?));
                    }
                    out.push(map);
                }
                Ok(out)
            })
            .await?;

        Ok(rows)
    }

    /// Run a write statement and return the number of affected rows.
    pub async fn execute(&self, sql: &str, params: Vec<Value>) -> Result<usize, StoreError> {
        let conn = self.pool.acquire().await?;
        let sql = sql.to_string();
        debug!(sql = %sql, params = params.len(), "execute");

        let affected = conn
            .call(move |conn| Ok(conn.execute(&sql, params_from_iter(params.iter()))?))
            .await?;

        Ok(affected)
    }
}

fn to_json(value: ValueRef<'_>) -> JsonValue {
    match value {
        ValueRef::Null => JsonValue::Null,
        ValueRef::Integer(i) => JsonValue::from(i),
        ValueRef::Real(f) => Number::from_f64(f)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            JsonValue::String(String::from_utf8_lossy(bytes).into_owned())
        }
    }
}

#[cfg(test)]
#[path = "database_tests.rs"]
mod tests;
