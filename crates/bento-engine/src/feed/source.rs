use crate::feed::FeedError;
use std::future::Future;

/// Fetches the raw body of a feed URL
pub trait FeedSource {
    fn fetch_text(&self, url: &str) -> impl Future<Output = Result<String, FeedError>>;
}

/// [`FeedSource`] over HTTP.
///
/// No timeout is applied; a hung request simply never completes.
#[derive(Debug, Clone, Default)]
pub struct HttpFeedSource {
    client: reqwest::Client,
}

impl HttpFeedSource {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl FeedSource for HttpFeedSource {
    async fn fetch_text(&self, url: &str) -> Result<String, FeedError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()));
        }
        Ok(response.text().await?)
    }
}
