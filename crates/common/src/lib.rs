//! Shared types for the ticket purchasing system.

pub mod types;

pub use types::{AccountId, InvalidAccountId};
