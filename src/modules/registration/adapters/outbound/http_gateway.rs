//! Reqwest-backed registration gateway.
//!
//! This adapter owns transport details only: JSON request serialisation,
//! timeout, and lenient decoding of success and error bodies. Interpreting
//! the answer is left to the submission use case.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::modules::registration::core::input::RegistrationInput;
use crate::modules::registration::ports::{
    GatewayError, GatewayResponse, RegistrationGateway, RejectionBody,
};

/// Success payload of the registration endpoint. Unknown keys are ignored.
#[derive(Debug, Default, Deserialize)]
struct AcceptedBody {
    #[serde(default)]
    nombre: Option<String>,
}

/// Gateway that POSTs the form payload to one registration endpoint.
pub struct HttpRegistrationGateway {
    client: Client,
    endpoint: Url,
}

impl HttpRegistrationGateway {
    /// Build a gateway using a reqwest client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl RegistrationGateway for HttpRegistrationGateway {
    async fn submit(&self, input: &RegistrationInput) -> Result<GatewayResponse, GatewayError> {
        tracing::debug!(endpoint = %self.endpoint, "posting registration");
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .json(input)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if status.is_success() {
            return Ok(GatewayResponse::Accepted {
                display_name: parse_accepted(body.as_ref()).nombre,
            });
        }
        Ok(GatewayResponse::Rejected {
            status: status.as_u16(),
            body: parse_rejected(status.as_u16(), body.as_ref()),
        })
    }
}

fn parse_accepted(body: &[u8]) -> AcceptedBody {
    serde_json::from_slice(body).unwrap_or_else(|error| {
        tracing::warn!(%error, "undecodable registration success payload");
        AcceptedBody::default()
    })
}

fn parse_rejected(status: u16, body: &[u8]) -> RejectionBody {
    serde_json::from_slice(body).unwrap_or_else(|error| {
        tracing::warn!(status, %error, "undecodable registration error payload");
        RejectionBody::default()
    })
}

fn map_transport_error(error: reqwest::Error) -> GatewayError {
    tracing::error!(%error, timeout = error.is_timeout(), "registration transport failure");
    GatewayError::Transport(error.to_string())
}
