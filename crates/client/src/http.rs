//! Shared HTTP plumbing
//!
//! Every response is logged as `METHOD URL [status]`. Non-success responses
//! are logged with their body and turned into errors before any decoding.

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{error, info};
use url::Url;

use crate::error::{ClientError, Result};

/// `{ "data": ... }` wrapper used by both APIs
#[derive(Debug, Deserialize)]
pub(crate) struct DataEnvelope<T> {
    pub data: T,
}

pub(crate) struct HttpClient {
    inner: reqwest::Client,
    base: Url,
}

impl HttpClient {
    pub fn new(base_url: &str, user_agent: Option<String>, timeout_secs: u64) -> Result<Self> {
        let timeout = Duration::from_secs(timeout_secs);
        let mut builder = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout);
        if let Some(user_agent) = user_agent {
            builder = builder.user_agent(user_agent);
        }

        Ok(Self {
            inner: builder.build()?,
            base: normalize_base(base_url)?,
        })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, token: Option<&str>) -> Result<T> {
        self.send_json::<(), T>(Method::GET, path, None, token).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<T> {
        self.send_json(Method::POST, path, Some(body), token).await
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        token: Option<&str>,
    ) -> Result<T> {
        let url = self.base.join(path)?;
        let mut request = self.inner.request(method, url);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = self.execute(request.build()?).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn execute(&self, request: reqwest::Request) -> Result<reqwest::Response> {
        let method = request.method().clone();
        let url = request.url().clone();

        let response = self.inner.execute(request).await?;
        let status = response.status();
        info!("{} {} [{}]", method, url, status.as_u16());

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        error!("Invalid response from {} {} [{}]\n{}", method, url, status.as_u16(), body);

        if status == StatusCode::UNAUTHORIZED {
            return Err(ClientError::Unauthorized {
                url: url.to_string(),
            });
        }

        Err(ClientError::Status {
            method: method.to_string(),
            url: url.to_string(),
            status: status.as_u16(),
            body,
        })
    }
}

/// Parse a base URL so that relative paths join below it
fn normalize_base(base_url: &str) -> Result<Url> {
    let mut url = Url::parse(base_url)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
