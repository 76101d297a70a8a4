use crate::error::TzktError;
use reqwest::StatusCode;
use url::Url;

/// Status and body text of a completed GET request.
#[derive(Debug, Clone)]
pub struct Fetched {
    pub status: StatusCode,
    pub body: String,
}

/// Issues a single GET request and reads the whole body as text.
///
/// No retries and no caching. A failure to connect or to read the body is
/// reported as [`TzktError::Transport`]; any status code is returned as-is.
pub async fn fetch(client: &reqwest::Client, url: Url) -> Result<Fetched, TzktError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    let body = response.text().await?;

    Ok(Fetched { status, body })
}
