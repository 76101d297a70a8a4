use serde_json::json;
use tzkt_balances::query::LISTING_SELECT;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockBuilder, MockServer, ResponseTemplate};

pub const CONTRACT: &str = "KT1BRADdqGk2eLmMqvyWzqVmPQ1RCBCbW5dY";
pub const OWNER: &str = "tz1TiZ74DtsT74VyWfbAuSis5KcncH1WvNB9";
pub const LISTED: &str = "tz2U7C8cf4W5Qw6onYjF8QLhnh5hMRbrrDon";

pub fn balances() -> MockBuilder {
    Mock::given(method("GET"))
        .and(path("/v1/tokens/balances"))
        .and(query_param("balance.ne", "0"))
}

pub async fn setup_mock_server() -> MockServer {
    let server = MockServer::start().await;

    // OWNER holds token #1
    balances()
        .and(query_param("account", OWNER))
        .and(query_param("token.contract", CONTRACT))
        .and(query_param("token.tokenId", "1"))
        .and(query_param("select", "id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([98765])))
        .mount(&server)
        .await;

    // Nobody holds token #123
    balances()
        .and(query_param("token.contract", CONTRACT))
        .and(query_param("token.tokenId", "123"))
        .and(query_param("select", "id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    balances()
        .and(query_param("account", LISTED))
        .and(query_param("select", LISTING_SELECT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1,
                "owner": LISTED,
                "balance": "100",
                "tokenContract": CONTRACT,
                "tokenId": "1",
                "tokenMetadata": {},
                "lastTime": "2023-01-01T00:00:00Z"
            }
        ])))
        .mount(&server)
        .await;

    server
}

pub fn api_url(server: &MockServer) -> String {
    format!("{}/v1/", server.uri())
}
