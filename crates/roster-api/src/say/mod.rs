//! Outbound keyword service.
//!
//! The API forwards `/say?keyword=...` to the keyword echo function and relays
//! whatever it answers.

mod client;

pub use client::{SayClient, SayError, SayReply};
