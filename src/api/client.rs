use crate::api::model::{CategoryDetail, ItemDetail, ResourceIndex};
use crate::api::ItemSource;
use crate::config;
use crate::error::{AppError, AppResult};
use crate::logging::{log, LogLevel};
use bytes::Bytes;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::time::sleep;

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
}

impl ApiClient {
    pub fn new() -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config::HTTP_TIMEOUT_SECONDS))
            .connect_timeout(Duration::from_secs(config::HTTP_CONNECT_TIMEOUT))
            .build()
            .map_err(AppError::from)?;
        Ok(ApiClient { client })
    }

    pub async fn fetch_json<T>(&self, url: &str) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let bytes = self.fetch_with_retry(url).await?;

        serde_json::from_slice(&bytes).map_err(|e| {
            let snippet_len = bytes.len().min(200);
            let snippet = String::from_utf8_lossy(&bytes[..snippet_len]);
            log(
                LogLevel::Error,
                &format!(
                    "Failed to parse response from {} as {}: {}. Snippet: '{}'",
                    url,
                    std::any::type_name::<T>(),
                    e,
                    snippet
                ),
            );
            AppError::from(e)
        })
    }

    /// GET with bounded retry. Each failed attempt logs a warning; delays
    /// grow as 2^attempt seconds, with no delay after the final attempt.
    async fn fetch_with_retry(&self, url: &str) -> AppResult<Bytes> {
        let mut last_error: Option<AppError> = None;

        for attempt in 0..config::MAX_FETCH_ATTEMPTS {
            let log_prefix = format!(
                "GET {} (try {}/{})",
                url,
                attempt + 1,
                config::MAX_FETCH_ATTEMPTS
            );

            match self.client.get(url).send().await {
                Ok(resp) => {
                    let status = resp.status();
                    if status.is_success() {
                        match resp.bytes().await {
                            Ok(bytes) => return Ok(bytes),
                            Err(e) => {
                                log(
                                    LogLevel::Warning,
                                    &format!("{} - error reading response body: {}", log_prefix, e),
                                );
                                last_error = Some(AppError::from(e));
                            }
                        }
                    } else {
                        log(
                            LogLevel::Warning,
                            &format!(
                                "{} - HTTP {} ({})",
                                log_prefix,
                                status.as_u16(),
                                status.canonical_reason().unwrap_or("Unknown Status")
                            ),
                        );
                        last_error = Some(AppError::HttpStatus {
                            status: status.as_u16(),
                            url: url.to_string(),
                        });
                    }
                }
                Err(e) => {
                    log(LogLevel::Warning, &format!("{} - {}", log_prefix, e));
                    let app_error = if e.is_timeout() {
                        AppError::Timeout(format!("{}: {}", log_prefix, e))
                    } else {
                        AppError::from(e)
                    };
                    last_error = Some(app_error);
                }
            }

            if attempt + 1 < config::MAX_FETCH_ATTEMPTS {
                let delay_secs = config::RETRY_BACKOFF_BASE.powi(attempt as i32);
                sleep(Duration::from_secs_f32(delay_secs)).await;
            }
        }

        log(
            LogLevel::Warning,
            &format!(
                "Giving up on {} after {} attempts",
                url,
                config::MAX_FETCH_ATTEMPTS
            ),
        );
        Err(last_error.unwrap_or_else(|| {
            AppError::Unexpected(format!(
                "Request failed after {} attempts: {}",
                config::MAX_FETCH_ATTEMPTS, url
            ))
        }))
    }
}

impl ItemSource for ApiClient {
    async fn category_index(&self) -> AppResult<ResourceIndex> {
        self.fetch_json(&config::CATEGORY_INDEX_URL).await
    }

    async fn category_detail(&self, url: &str) -> AppResult<CategoryDetail> {
        self.fetch_json(url).await
    }

    async fn item_detail(&self, url: &str) -> AppResult<ItemDetail> {
        self.fetch_json(url).await
    }
}
