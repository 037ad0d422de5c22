use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MixError {
    #[error("Could not read mix page: response received is not ok [{0}]")]
    FailedStatusCode(StatusCode),
    #[error("Could not read mix page: response body is empty")]
    EmptyResponse,
    #[error("Could not read mix page")]
    Fetch(#[source] reqwest::Error),
    #[error("Could not read mix page: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Could not find tracks from mix")]
    NoTracksFound,
}

impl MixError {
    /// True for failures on the fetch/parse side of the call, where the
    /// caller may choose to retry. `NoTracksFound` usually means the remote
    /// schema changed, which retrying will not fix.
    pub fn is_fetch_failure(&self) -> bool {
        !matches!(self, Self::NoTracksFound)
    }
}
