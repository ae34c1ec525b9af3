//! Relational store for roster.
//!
//! Every request runs exactly one statement through [`Database`], which checks
//! a connection out of a bounded [`ConnectionPool`] for the duration of that
//! statement. Join results are reshaped with [`group_by_company`].

mod aggregate;
mod agents;
mod database;
mod error;
mod pool;
mod schema;
pub mod statements;

pub use aggregate::{group_by_company, group_rows, CompanyGroup, JoinRow};
pub use agents::{AgentPatch, AgentReplacement, NewAgent};
pub use database::{Database, Row};
pub use error::StoreError;
pub use pool::{ConnectionPool, PoolOptions, PooledConnection};
pub use rusqlite::types::Value;
pub use statements::Statement;
