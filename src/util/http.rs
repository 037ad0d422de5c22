use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, StatusCode};

use crate::util::errors::MixError;

pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

/// Executes a single GET and hands back status plus the full body. The
/// underlying connection is released once the body has been read, on every
/// exit path. Timeouts and retries belong to the implementation, not here.
#[async_trait]
pub trait HttpExecutor: Send + Sync {
    async fn get(&self, url: &str) -> Result<HttpResponse, MixError>;
}

#[async_trait]
impl HttpExecutor for Client {
    async fn get(&self, url: &str) -> Result<HttpResponse, MixError> {
        let res = Client::get(self, url).send().await.map_err(MixError::Fetch)?;
        let status = res.status();
        let body = res.bytes().await.map_err(MixError::Fetch)?;

        Ok(HttpResponse { status, body })
    }
}
