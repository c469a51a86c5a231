use crate::error::RecipeError;
use log::{debug, warn};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::future::Future;
use std::time::Duration;

/// Race `future` against a timer of `timeout`.
///
/// Whichever settles first wins. When the future wins the timer is dropped
/// with it, so nothing stays scheduled; when the timer wins the future is
/// dropped and the result is [`RecipeError::Timeout`]. Errors produced by the
/// future itself pass through untouched.
pub async fn race_timeout<T, F>(future: F, timeout: Duration) -> Result<T, RecipeError>
where
    F: Future<Output = Result<T, RecipeError>>,
{
    match tokio::time::timeout(timeout, future).await {
        Ok(result) => result,
        Err(_) => {
            warn!("Request took longer than {:?}, giving up", timeout);
            Err(RecipeError::Timeout(timeout))
        }
    }
}

/// JSON-over-HTTP fetcher whose every request is raced against a fixed timeout.
pub struct RequestFetcher {
    client: Client,
    timeout: Duration,
}

impl RequestFetcher {
    pub fn new(timeout: Option<Duration>) -> Result<Self, RecipeError> {
        let timeout = timeout.unwrap_or(Duration::from_secs(10));
        // No client-level timeout; `race_timeout` owns the only timer.
        let client = Client::builder()
            .user_agent(concat!("forkify/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// GET `url` and decode the JSON body into `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, RecipeError> {
        debug!("GET {}", url);
        race_timeout(send(self.client.get(url)), self.timeout).await
    }

    /// POST `body` as JSON to `url` and decode the JSON response into `T`.
    pub async fn send_json<B, T>(&self, url: &str, body: &B) -> Result<T, RecipeError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!("POST {}", url);
        race_timeout(send(self.client.post(url).json(body)), self.timeout).await
    }
}

async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, RecipeError> {
    let response = request.send().await.map_err(RecipeError::NetworkError)?;
    let status = response.status();
    let bytes = response.bytes().await.map_err(RecipeError::NetworkError)?;

    if !status.is_success() {
        return Err(RecipeError::HttpStatusError {
            status: status.as_u16(),
            message: error_message(&bytes).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_string()
            }),
        });
    }

    Ok(serde_json::from_slice(&bytes)?)
}

/// The API reports failures as `{"status": "fail", "message": "..."}`.
fn error_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    value["message"].as_str().map(str::to_string)
}
