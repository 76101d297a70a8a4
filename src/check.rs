//! Reporting of balance checks in response to wallet connections.

use crate::client::TzktClient;
use crate::types::{AccountConnected, Ownership};
use futures_util::future::join_all;
use tokio::sync::mpsc;
use tracing::{error, info};

const DEMO_CONTRACT: &str = "KT1BRADdqGk2eLmMqvyWzqVmPQ1RCBCbW5dY";

/// Whose balances a planned check looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// The address carried by the `AccountConnected` event being handled.
    ActiveAccount,
    Fixed(String),
}

impl Target {
    fn resolve<'a>(&'a self, active: &'a str) -> &'a str {
        match self {
            Target::ActiveAccount => active,
            Target::Fixed(address) => address,
        }
    }
}

/// A single check run on every account connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannedCheck {
    Ownership {
        account: Target,
        contract: String,
        token_id: u64,
    },
    Listing {
        account: Target,
    },
}

/// The checks run, concurrently, for each connected account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckPlan {
    pub checks: Vec<PlannedCheck>,
}

impl CheckPlan {
    pub fn new(checks: Vec<PlannedCheck>) -> Self {
        Self { checks }
    }
}

impl Default for CheckPlan {
    fn default() -> Self {
        Self::new(vec![
            PlannedCheck::Ownership {
                account: Target::ActiveAccount,
                contract: DEMO_CONTRACT.to_string(),
                token_id: 123,
            },
            PlannedCheck::Ownership {
                account: Target::Fixed("tz1TiZ74DtsT74VyWfbAuSis5KcncH1WvNB9".to_string()),
                contract: DEMO_CONTRACT.to_string(),
                token_id: 1,
            },
            PlannedCheck::Listing {
                account: Target::Fixed("tz2U7C8cf4W5Qw6onYjF8QLhnh5hMRbrrDon".to_string()),
            },
        ])
    }
}

/// Outcome of one planned check. `None` means the check failed and the error was logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Ownership(Option<Ownership>),
    Listing(Option<Vec<String>>),
}

/// Runs and logs token balance checks whenever an account connects.
///
/// Errors never escape: every failure is logged and ends only the check that hit it.
pub struct TokenBalanceCheck {
    client: TzktClient,
    plan: CheckPlan,
    events: mpsc::Receiver<AccountConnected>,
}

impl TokenBalanceCheck {
    /// # Arguments
    ///
    /// * `client` - The client used for every query.
    /// * `plan` - The checks to run for each connection.
    /// * `events` - Source of account connection notifications.
    pub fn new(
        client: TzktClient,
        plan: CheckPlan,
        events: mpsc::Receiver<AccountConnected>,
    ) -> Self {
        info!("Token balance check demo");
        Self {
            client,
            plan,
            events,
        }
    }

    /// Handles connection events until every sender has been dropped.
    pub async fn run(mut self) {
        while let Some(event) = self.events.recv().await {
            self.on_account_connected(&event).await;
        }
    }

    /// Runs the whole plan for one connected account.
    ///
    /// Outcomes are returned in plan order, although the underlying requests
    /// complete in any order.
    pub async fn on_account_connected(&self, event: &AccountConnected) -> Vec<CheckOutcome> {
        info!("Active account: {}", event.address);

        let runs = self
            .plan
            .checks
            .iter()
            .map(|check| self.run_check(check, &event.address));
        join_all(runs).await
    }

    async fn run_check(&self, check: &PlannedCheck, active: &str) -> CheckOutcome {
        match check {
            PlannedCheck::Ownership {
                account,
                contract,
                token_id,
            } => CheckOutcome::Ownership(
                self.check_ownership(account.resolve(active), contract, *token_id)
                    .await,
            ),
            PlannedCheck::Listing { account } => {
                CheckOutcome::Listing(self.report_balances(account.resolve(active)).await)
            }
        }
    }

    /// Checks and logs whether `account` owns `contract#token_id`.
    pub async fn check_ownership(
        &self,
        account: &str,
        contract: &str,
        token_id: u64,
    ) -> Option<Ownership> {
        match self.client.is_owner_of_token(account, contract, token_id).await {
            Ok(ownership) => {
                info!("{}", ownership);
                Some(ownership)
            }
            Err(e) => {
                error!("Error: {}", e);
                None
            }
        }
    }

    /// Logs one line per token balance held by `account` and returns the lines.
    pub async fn report_balances(&self, account: &str) -> Option<Vec<String>> {
        match self.client.get_token_balances(account).await {
            Ok(records) => {
                let lines: Vec<String> = records.iter().map(|r| r.to_string()).collect();
                for line in &lines {
                    info!("{}", line);
                }
                Some(lines)
            }
            Err(e) => {
                error!("Error: {}", e);
                None
            }
        }
    }
}
