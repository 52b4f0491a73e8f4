#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("feed request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("feed relay answered with status {0}")]
    Status(u16),
    #[error("malformed feed: {0}")]
    Xml(#[from] quick_xml::Error),
}
