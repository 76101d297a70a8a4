use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of the `tokens/balances` listing: an account's holding of a single token.
///
/// Field names follow the `select` aliases sent with the listing query.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBalanceRecord {
    /// Internal TzKT id. Sortable, informational only.
    pub id: i64,
    /// Address of the owner account.
    pub owner: String,
    /// Raw balance, not divided by the token's `decimals`.
    pub balance: String,
    /// Address of the contract that created the token.
    pub token_contract: String,
    /// Token id, unique within the contract.
    pub token_id: String,
    /// Token metadata as returned by the indexer. `null` when the token has none.
    #[serde(default)]
    pub token_metadata: serde_json::Value,
    /// Timestamp of the block where the balance last changed, kept as sent.
    pub last_time: String,
}

impl TokenBalanceRecord {
    /// Parses `last_time` as an RFC 3339 timestamp.
    ///
    /// The textual value is left untouched; `None` is returned if it does not parse.
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.last_time)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

impl fmt::Display for TokenBalanceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}#{} => {} (last updated {})",
            self.token_contract, self.token_id, self.balance, self.last_time
        )
    }
}

/// Result of an ownership check for one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ownership {
    pub account: String,
    pub contract: String,
    pub token_id: u64,
    /// `true` if the account holds a nonzero balance of the token.
    pub is_owner: bool,
}

impl fmt::Display for Ownership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account {} ownership status for token {}#{}: {}",
            self.account, self.contract, self.token_id, self.is_owner
        )
    }
}

/// Notification that a wallet account has been connected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountConnected {
    /// The active wallet address.
    pub address: String,
}
