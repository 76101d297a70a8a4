use anyhow::Context;
use std::env;
use tokio::sync::mpsc;
use tzkt_balances::{AccountConnected, CheckPlan, TokenBalanceCheck, TzktClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().init();

    let address = env::args()
        .nth(1)
        .or_else(|| env::var("TZKT_ACTIVE_ACCOUNT").ok())
        .context("usage: cargo run --example token_balance_check -- <wallet address> (or set TZKT_ACTIVE_ACCOUNT)")?;

    let client = TzktClient::new(None)?;
    let (tx, rx) = mpsc::channel(8);
    let check = TokenBalanceCheck::new(client, CheckPlan::default(), rx);

    tx.send(AccountConnected { address }).await?;
    drop(tx);

    check.run().await;
    Ok(())
}
