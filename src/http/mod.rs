use reqwest::{
    header::{ACCEPT, USER_AGENT},
    Client, RequestBuilder, StatusCode,
};
use serde::de::DeserializeOwned;
use std::ops::Deref;
use thiserror::Error;

const GITHUB_API_VERSION: &str = "2022-11-28";
const USER_AGENT_NAME: &str = "find-pull-request";

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Self {
        HttpClient {
            client: Client::new(),
        }
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for HttpClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

pub trait Headers {
    fn github_headers(self, token: &str) -> RequestBuilder;
}

impl Headers for RequestBuilder {
    fn github_headers(self, token: &str) -> RequestBuilder {
        self.bearer_auth(token)
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .header(USER_AGENT, USER_AGENT_NAME)
    }
}

/// Turns a sent request into its body text, mapping non-2xx statuses to errors.
pub trait ResponseHandler {
    async fn handle(self) -> Result<String, Error>;
}

impl ResponseHandler for reqwest::Result<reqwest::Response> {
    async fn handle(self) -> Result<String, Error> {
        let response = self.map_err(|cause| Error::SendRequestError { cause })?;
        let status = response.status();

        let text = response
            .text()
            .await
            .map_err(|cause| Error::ReadResponseTextError { cause })?;

        if status == StatusCode::NOT_FOUND {
            return Err(Error::NotFound { message: text });
        }

        if !status.is_success() {
            return Err(Error::GenericResponseError {
                message: format!("{}: {}", status.as_u16(), text),
            });
        }

        Ok(text)
    }
}

pub fn parse_json<T>(text: &str) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    serde_json::from_str::<T>(text).map_err(|cause| Error::ParseResponseError { cause })
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{message}")]
    GenericResponseError { message: String },
    #[error("Resource not found: {message}")]
    NotFound { message: String },
    #[error("Failed to send request")]
    SendRequestError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to read response text")]
    ReadResponseTextError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("Failed to parse response")]
    ParseResponseError {
        #[source]
        cause: serde_json::Error,
    },
}
