use crate::decode::decode_array;
use crate::error::TzktError;
use crate::fetch::fetch;
use crate::query::{BalanceListQuery, BalanceQuery};
use crate::types::{Ownership, TokenBalanceRecord};
use serde::de::{DeserializeOwned, IgnoredAny};
use std::env;
use tracing::debug;
use url::Url;

const DEFAULT_API_URL: &str = "https://api.tzkt.io/v1/";

/// The main client for querying token balances from the TzKT API.
///
/// It holds the shared `reqwest::Client` and the base URL for all API requests.
/// It is designed to be cloneable and safe to share across tasks.
#[derive(Clone, Debug)]
pub struct TzktClient {
    client: reqwest::Client,
    base_url: Url,
}

impl TzktClient {
    /// Creates a new `TzktClient`.
    ///
    /// The base URL is taken from `base_url` if given, otherwise from the
    /// `TZKT_API_URL` environment variable, otherwise the public TzKT endpoint.
    ///
    /// # Errors
    ///
    /// - `TzktError::Transport` if the internal HTTP client fails to build.
    /// - `TzktError::InvalidUrl` if the resolved base URL is invalid.
    pub fn new(base_url: Option<String>) -> Result<Self, TzktError> {
        let base_url = base_url
            .or_else(|| env::var("TZKT_API_URL").ok())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self::new_with_url(&base_url)
    }

    /// Creates a new `TzktClient` with a custom base URL.
    ///
    /// This is useful for testing or for connecting to a mirror of the indexer.
    /// A missing trailing slash is added so that endpoint paths are joined below it.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The API root, e.g. `https://api.tzkt.io/v1/`.
    pub fn new_with_url(base_url: &str) -> Result<Self, TzktError> {
        let client = reqwest::Client::builder().build()?;
        Self::with_client(client, base_url)
    }

    /// Creates a new `TzktClient` around an existing `reqwest::Client`.
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self, TzktError> {
        let base_url = if base_url.ends_with('/') {
            Url::parse(base_url)?
        } else {
            Url::parse(&format!("{}/", base_url))?
        };

        Ok(Self { client, base_url })
    }

    /// The API root every request is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Checks whether an account holds a nonzero balance of a specific token.
    ///
    /// # Arguments
    ///
    /// * `account` - The address of the account to check.
    /// * `contract` - The address of the token contract.
    /// * `token_id` - The token id within the contract.
    ///
    /// # Returns
    ///
    /// An [`Ownership`] whose `is_owner` is `true` iff the indexer returned at least one row.
    pub async fn is_owner_of_token(
        &self,
        account: &str,
        contract: &str,
        token_id: u64,
    ) -> Result<Ownership, TzktError> {
        self.check(&BalanceQuery::new(account, contract, token_id))
            .await
    }

    /// Runs a prepared ownership query.
    pub async fn check(&self, query: &BalanceQuery) -> Result<Ownership, TzktError> {
        let url = query.url(&self.base_url)?;
        let ids: Vec<IgnoredAny> = self.get_array(url).await?;

        Ok(Ownership {
            account: query.account.clone(),
            contract: query.contract.clone(),
            token_id: query.token_id,
            is_owner: !ids.is_empty(),
        })
    }

    /// Lists the nonzero token balances held by an account.
    ///
    /// Records are returned in the order the indexer sent them.
    pub async fn get_token_balances(
        &self,
        account: &str,
    ) -> Result<Vec<TokenBalanceRecord>, TzktError> {
        self.list(&BalanceListQuery::new(account)).await
    }

    /// Runs a prepared listing query.
    pub async fn list(
        &self,
        query: &BalanceListQuery,
    ) -> Result<Vec<TokenBalanceRecord>, TzktError> {
        let url = query.url(&self.base_url)?;
        self.get_array(url).await
    }

    async fn get_array<T: DeserializeOwned>(&self, url: Url) -> Result<Vec<T>, TzktError> {
        let fetched = fetch(&self.client, url).await?;

        if !fetched.status.is_success() {
            return Err(TzktError::Api {
                status: fetched.status,
                message: fetched.body,
            });
        }

        debug!("Response: {}", fetched.body);
        decode_array(&fetched.body)
    }
}
