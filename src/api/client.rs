use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{StatusCode, Url};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::api::models::ErrorEnvelope;
use crate::config::Config;

/// Failures surfaced by [`YnabClient`].
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid API base URL `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("API token contains characters that cannot be sent in a header")]
    InvalidToken,
    #[error("Request to `{path}` failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("YNAB rejected `{path}` with {status}{}", detail_suffix(.detail))]
    Status {
        path: String,
        status: StatusCode,
        detail: Option<String>,
    },
    #[error("Unexpected response body from `{path}`: {source}")]
    Decode {
        path: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// The `error.detail` message YNAB attached to a rejected request.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn detail_suffix(detail: &Option<String>) -> String {
    match detail {
        Some(detail) => format!(": {detail}"),
        None => String::new(),
    }
}

/// Blocking JSON client bound to one base URL and bearer token.
#[derive(Debug, Clone)]
pub struct YnabClient {
    http: Client,
    base_url: Url,
}

impl YnabClient {
    pub fn new(base_url: &str, token: &str) -> Result<Self, ApiError> {
        let mut normalized = base_url.trim().to_string();
        if !normalized.ends_with('/') {
            normalized.push('/');
        }
        let base_url = Url::parse(&normalized).map_err(|err| ApiError::InvalidUrl {
            url: normalized.clone(),
            reason: err.to_string(),
        })?;

        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| ApiError::InvalidToken)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|source| ApiError::Transport {
                path: String::new(),
                source,
            })?;

        Ok(Self { http, base_url })
    }

    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Self::new(&config.base_url, &config.token)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Issues `GET {base}/{path}` and decodes the JSON body.
    pub fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path)?;
        tracing::debug!(method = "GET", path, "sending YNAB request");
        let response = self
            .http
            .get(url)
            .send()
            .map_err(|source| transport(path, source))?;
        let response = check_status(path, response)?;
        response.json::<T>().map_err(|source| ApiError::Decode {
            path: path.to_string(),
            source,
        })
    }

    /// Issues `POST {base}/{path}` with a JSON body and returns the JSON reply.
    pub fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<serde_json::Value, ApiError> {
        let url = self.url(path)?;
        tracing::debug!(method = "POST", path, "sending YNAB request");
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .map_err(|source| transport(path, source))?;
        let response = check_status(path, response)?;
        response
            .json::<serde_json::Value>()
            .map_err(|source| ApiError::Decode {
                path: path.to_string(),
                source,
            })
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|err| ApiError::InvalidUrl {
                url: format!("{}{}", self.base_url, path),
                reason: err.to_string(),
            })
    }
}

fn transport(path: &str, source: reqwest::Error) -> ApiError {
    tracing::warn!(path, error = %source, "YNAB request failed");
    ApiError::Transport {
        path: path.to_string(),
        source,
    }
}

fn check_status(path: &str, response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().unwrap_or_default();
    let detail = serde_json::from_str::<ErrorEnvelope>(&body)
        .ok()
        .and_then(|envelope| envelope.error.detail);
    tracing::warn!(
        path,
        %status,
        detail = detail.as_deref().unwrap_or(""),
        "YNAB rejected request"
    );

    Err(ApiError::Status {
        path: path.to_string(),
        status,
        detail,
    })
}
