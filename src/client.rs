use eyre::{bail, Result};
use log::debug;
use reqwest::Client as ReqwestClient;
use reqwest::StatusCode;

use crate::domain::{DataEnvelope, LoginRequest, SignupRequest, User};

const BASE_URL: &str = "http://localhost:8080";

/// How the service answered a delivered request. Transport failures never
/// become an `Outcome`; they surface as `Err` from the calling method.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Accepted,
    Rejected(String),
}

pub struct Client {
    pub client: ReqwestClient,
    base_url: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<Outcome> {
        let url = format!("{}/signup", self.base_url);
        debug!("POST {}", url);
        let response = self.client.post(url).json(request).send().await?;
        Self::interpret(response).await
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<Outcome> {
        let url = format!("{}/login", self.base_url);
        debug!("POST {}", url);
        let response = self.client.post(url).json(request).send().await?;
        Self::interpret(response).await
    }

    /// Looks up the user matching the given credentials. The service reads
    /// the credentials from the request body even on GET.
    pub async fn find_user(&self, request: &LoginRequest) -> Result<Option<User>> {
        let url = format!("{}/user", self.base_url);
        debug!("GET {}", url);
        let response = self.client.get(url).json(request).send().await?;
        let status = response.status();
        match status {
            StatusCode::OK => {
                let envelope: DataEnvelope<Option<User>> = response.json().await?;
                Ok(envelope.data)
            }
            _ => bail!(response.text().await?),
        }
    }

    async fn interpret(response: reqwest::Response) -> Result<Outcome> {
        let status = response.status();
        debug!("response status {}", status);
        match status {
            StatusCode::OK => Ok(Outcome::Accepted),
            _ => Ok(Outcome::Rejected(response.text().await?)),
        }
    }
}
