//! Token balance checks against the TzKT indexer API.
//!
//! The crate answers two questions about accounts on the Tezos chain:
//! does an account hold a given token, and which tokens does it hold.
//! Both are single `GET` requests to `tokens/balances` whose JSON array
//! responses are decoded directly with `serde_json`.
//!
//! ## Features
//! - [`TzktClient`] for the ownership check and the balance listing.
//! - [`TokenBalanceCheck`], which reacts to wallet connection events and logs results.
//! - Typed errors distinguishing transport, HTTP status and decoding failures.

pub mod check;
pub mod client;
pub mod decode;
pub mod error;
pub mod fetch;
pub mod query;
pub mod types;

pub use check::{CheckOutcome, CheckPlan, PlannedCheck, Target, TokenBalanceCheck};
pub use client::TzktClient;
pub use decode::decode_array;
pub use error::TzktError;
pub use fetch::{fetch, Fetched};
pub use query::{BalanceListQuery, BalanceQuery};
pub use types::{AccountConnected, Ownership, TokenBalanceRecord};
