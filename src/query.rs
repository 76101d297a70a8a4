//! Builders for `tokens/balances` request URLs.

use crate::error::TzktError;
use url::Url;

const BALANCES_PATH: &str = "tokens/balances";

/// Projection requested by the listing query, aliased to the field names of
/// [`TokenBalanceRecord`](crate::TokenBalanceRecord).
pub const LISTING_SELECT: &str = "account.address as owner,balance,token.contract.address as tokenContract,token.tokenId as tokenId,token.metadata as tokenMetadata,lastTime,id";

fn balances_url(base_url: &Url) -> Result<Url, TzktError> {
    let mut url = base_url.join(BALANCES_PATH)?;
    url.query_pairs_mut().append_pair("balance.ne", "0");
    Ok(url)
}

/// Ownership check: nonzero balances of one token held by one account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceQuery {
    pub account: String,
    pub contract: String,
    pub token_id: u64,
}

impl BalanceQuery {
    pub fn new(account: impl Into<String>, contract: impl Into<String>, token_id: u64) -> Self {
        Self {
            account: account.into(),
            contract: contract.into(),
            token_id,
        }
    }

    /// Builds the request URL, selecting only the internal id of matching rows.
    pub fn url(&self, base_url: &Url) -> Result<Url, TzktError> {
        let mut url = balances_url(base_url)?;
        url.query_pairs_mut()
            .append_pair("account", &self.account)
            .append_pair("token.contract", &self.contract)
            .append_pair("token.tokenId", &self.token_id.to_string())
            .append_pair("select", "id");
        Ok(url)
    }
}

/// Listing of every nonzero token balance held by one account.
///
/// Without `limit`/`offset` the indexer's default page is returned; further
/// pages are not followed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceListQuery {
    pub account: String,
    limit: Option<u32>,
    offset: Option<u32>,
}

impl BalanceListQuery {
    pub fn new(account: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            limit: None,
            offset: None,
        }
    }

    /// Maximum number of rows the indexer should return.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Number of rows to skip.
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn url(&self, base_url: &Url) -> Result<Url, TzktError> {
        let mut url = balances_url(base_url)?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("account", &self.account);
            if let Some(limit) = self.limit {
                pairs.append_pair("limit", &limit.to_string());
            }
            if let Some(offset) = self.offset {
                pairs.append_pair("offset", &offset.to_string());
            }
        }
        // Spaces go out as %20 and commas stay literal.
        let query = format!("{}&select={}", url.query().unwrap_or_default(), LISTING_SELECT);
        url.set_query(Some(&query));
        Ok(url)
    }
}
