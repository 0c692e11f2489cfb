use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{Error, Request, Response, Result};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8081/v1/graphql";

#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// HTTP transport for a single GraphQL endpoint.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    endpoint: Url,
}

impl Client {
    pub fn new(options: ClientOptions) -> Result<Self> {
        let endpoint = Url::parse(&options.endpoint)?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(Error::Scheme(endpoint.scheme().to_owned()));
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("chefbook/", env!("CARGO_PKG_VERSION")))
            .timeout(options.timeout)
            .build()?;

        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// POSTs `request` and returns its `data`, failing on any reported
    /// GraphQL error.
    #[tracing::instrument(skip_all, fields(endpoint = %self.endpoint, operation = request.operation_name.as_deref()))]
    pub async fn execute<T: DeserializeOwned>(&self, request: &Request) -> Result<T> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?
            .error_for_status()?;

        tracing::debug!(status = %response.status(), "graphql response received");

        let body: Response<T> = response.json().await?;
        body.into_result()
    }
}
