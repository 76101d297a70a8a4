mod common;
use common::{api_url, balances, setup_mock_server, CONTRACT, LISTED};
use serde_json::json;
use tzkt_balances::{BalanceListQuery, TzktClient, TzktError};
use wiremock::matchers::query_param;
use wiremock::{MockServer, ResponseTemplate};

#[tokio::test]
async fn test_get_token_balances_success() {
    let server = setup_mock_server().await;
    let client = TzktClient::new_with_url(&api_url(&server)).unwrap();

    let records = client.get_token_balances(LISTED).await.unwrap();

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.id, 1);
    assert_eq!(record.owner, LISTED);
    assert_eq!(record.balance, "100");
    assert_eq!(record.token_contract, CONTRACT);
    assert_eq!(record.token_id, "1");
    assert_eq!(record.token_metadata, json!({}));
    assert_eq!(record.last_time, "2023-01-01T00:00:00Z");
    assert_eq!(
        record.to_string(),
        "KT1BRADdqGk2eLmMqvyWzqVmPQ1RCBCbW5dY#1 => 100 (last updated 2023-01-01T00:00:00Z)"
    );
}

#[tokio::test]
async fn test_records_keep_server_order() {
    let server = MockServer::start().await;
    let row = |id: i64, token_id: &str| {
        json!({
            "id": id,
            "owner": LISTED,
            "balance": "1",
            "tokenContract": CONTRACT,
            "tokenId": token_id,
            "tokenMetadata": null,
            "lastTime": "2023-01-01T00:00:00Z"
        })
    };
    balances()
        .and(query_param("account", LISTED))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            row(30, "9"),
            row(10, "2"),
            row(30, "9")
        ])))
        .mount(&server)
        .await;

    let client = TzktClient::new_with_url(&api_url(&server)).unwrap();
    let records = client.get_token_balances(LISTED).await.unwrap();

    let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![30, 10, 30]);
}

#[tokio::test]
async fn test_paged_listing_sends_limit_and_offset() {
    let server = MockServer::start().await;
    balances()
        .and(query_param("account", LISTED))
        .and(query_param("limit", "2"))
        .and(query_param("offset", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = TzktClient::new_with_url(&api_url(&server)).unwrap();
    let query = BalanceListQuery::new(LISTED).limit(2).offset(4);
    let records = client.list(&query).await.unwrap();

    assert!(records.is_empty());
}

#[tokio::test]
async fn test_object_body_is_decode_error() {
    let server = MockServer::start().await;
    balances()
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .mount(&server)
        .await;

    let client = TzktClient::new_with_url(&api_url(&server)).unwrap();
    let result = client.get_token_balances(LISTED).await;

    assert!(matches!(result, Err(TzktError::Decode(_))));
}

#[tokio::test]
async fn test_unreachable_host_yields_no_records() {
    let client = TzktClient::new_with_url("http://127.0.0.1:1/v1/").unwrap();
    let result = client.get_token_balances(LISTED).await;

    assert!(matches!(result, Err(TzktError::Transport(_))));
}
