//! # roster API
//!
//! HTTP surface of roster.
//!
//! - **HTTP**: students, companies and agents routes over the relational store
//! - **Say**: `/say` proxy that forwards a keyword to the echo function
//! - **Echo**: the keyword echo function itself, served on its own listener
//! - **Docs**: `/docs` and `/docs/openapi.json`
//!
//! ```text
//! request ─▶ CORS + trace layers ─▶ router ─▶ handler ─┬─▶ Database (one statement)
//!                                                      └─▶ SayClient (one outbound call)
//! ```

pub mod echo;
pub mod error;
pub mod http;
pub mod say;
pub mod server;
pub mod state;

pub use echo::create_echo_router;
pub use error::{ApiError, ServerError};
pub use http::routes::create_router;
pub use say::{SayClient, SayError, SayReply};
pub use server::{ApiServer, ListenConfig};
pub use state::AppState;
