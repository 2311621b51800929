//! Client for the public MEATER API
//!
//! The public API is documented and stable but only exposes live device
//! state, not the cook history.

use meater_core::Config;
use meater_domain::Device;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::credentials::Credentials;
use crate::error::{ClientError, Result};
use crate::http::{DataEnvelope, HttpClient};

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginData {
    token: String,
    #[serde(default)]
    user_id: Option<String>,
}

#[derive(Deserialize)]
struct DeviceList {
    devices: Vec<Device>,
}

pub struct PublicClient {
    http: HttpClient,
    token: Option<String>,
}

impl PublicClient {
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            http: HttpClient::new(&config.api.public_base_url, None, config.api.timeout_secs)?,
            token: None,
        })
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub async fn login(&mut self, credentials: &Credentials) -> Result<()> {
        let request = LoginRequest {
            email: &credentials.email,
            password: &credentials.password,
        };
        let envelope: DataEnvelope<LoginData> =
            self.http.post_json("v1/login", &request, None).await?;

        match envelope.data.user_id.as_deref() {
            Some(user_id) => info!("Logged in to public API as user {}", user_id),
            None => info!("Logged in to public API"),
        }
        self.token = Some(envelope.data.token);
        Ok(())
    }

    fn auth(&self) -> Result<&str> {
        self.token.as_deref().ok_or(ClientError::NotAuthenticated)
    }

    /// Devices currently reporting to the account
    pub async fn devices(&self) -> Result<Vec<Device>> {
        let envelope: DataEnvelope<DeviceList> =
            self.http.get_json("v1/devices", Some(self.auth()?)).await?;
        debug!("Fetched {} devices", envelope.data.devices.len());
        Ok(envelope.data.devices)
    }

    pub async fn device(&self, id: &str) -> Result<Device> {
        let path = format!("v1/devices/{}", id);
        let envelope: DataEnvelope<Device> = self.http.get_json(&path, Some(self.auth()?)).await?;
        Ok(envelope.data)
    }
}
