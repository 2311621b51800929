//! Client for the private MEATER cloud API
//!
//! This is the API the mobile app uses. It has no published contract; the
//! client mimics the iOS app's user agent and login payload and reads the
//! same `/v2/cooks` listing the app's cook history screen shows.

use meater_core::{AppIdentity, Config};
use meater_domain::Cook;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::credentials::Credentials;
use crate::error::{ClientError, Result};
use crate::http::{DataEnvelope, HttpClient};
use crate::session::{Session, SessionStore};

const LOGIN_PATH: &str = "login";
const COOKS_PATH: &str = "v2/cooks";

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    check_terms: u8,
    password: &'a str,
    email: &'a str,
    #[serde(rename = "clientVersion")]
    client_version: String,
    device: LoginDevice<'a>,
}

#[derive(Debug, Serialize)]
struct LoginDevice<'a> {
    model: &'a str,
    locale: &'a str,
    os_version: &'a str,
    os_name: &'a str,
    app_version: &'a str,
    app_build: &'a str,
    id: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse {
    access_token: String,
}

pub struct MeaterClient {
    http: HttpClient,
    app: AppIdentity,
    store: SessionStore,
    session: Session,
    credentials: Option<Credentials>,
}

impl MeaterClient {
    /// Create a client using the session file named in `config`.
    ///
    /// No request is made. A stored session is reused; otherwise a new
    /// device id is generated (and persisted on the first login).
    pub fn new(config: &Config, credentials: Option<Credentials>) -> Result<Self> {
        Self::with_store(config, SessionStore::new(&config.session.path), credentials)
    }

    pub fn with_store(
        config: &Config,
        store: SessionStore,
        credentials: Option<Credentials>,
    ) -> Result<Self> {
        config.validate()?;

        let session = match store.load()? {
            Some(session) => session,
            None => {
                let session = Session::new_device();
                info!("Using device id {}", session.device_id);
                session
            }
        };

        let http = HttpClient::new(
            &config.api.base_url,
            Some(config.app.user_agent()),
            config.api.timeout_secs,
        )?;

        Ok(Self {
            http,
            app: config.app.clone(),
            store,
            session,
            credentials,
        })
    }

    /// [`MeaterClient::new`] followed by [`MeaterClient::login`]
    pub async fn connect(config: &Config, credentials: Option<Credentials>) -> Result<Self> {
        let mut client = Self::new(config, credentials)?;
        client.login().await?;
        Ok(client)
    }

    pub fn device_id(&self) -> &str {
        &self.session.device_id
    }

    pub fn base_url(&self) -> &str {
        self.http.base().as_str()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.token.is_some()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Log in unless a token is already held.
    ///
    /// On success the token is stored in the session file together with the
    /// device id it was issued for.
    pub async fn login(&mut self) -> Result<()> {
        if self.session.token.is_some() {
            debug!("Reusing stored token for device {}", self.session.device_id);
            return Ok(());
        }

        let credentials = self
            .credentials
            .as_ref()
            .ok_or(ClientError::MissingCredentials)?;

        info!("Attempting login as device {}", self.session.device_id);

        let request = LoginRequest {
            check_terms: 1,
            password: &credentials.password,
            email: &credentials.email,
            client_version: self.app.client_version(),
            device: LoginDevice {
                model: &self.app.model,
                locale: &self.app.locale,
                os_version: &self.app.os_version,
                os_name: &self.app.os_name,
                app_version: &self.app.version,
                app_build: &self.app.build,
                id: &self.session.device_id,
            },
        };

        let response: LoginResponse = self.http.post_json(LOGIN_PATH, &request, None).await?;
        self.session.token = Some(response.access_token);
        self.store.save(&self.session)?;
        Ok(())
    }

    /// Discard any held token and log in again
    pub async fn relogin(&mut self) -> Result<()> {
        self.session.token = None;
        self.login().await
    }

    /// Forget the token; the device id is kept for the next login
    pub fn logout(&mut self) -> Result<()> {
        self.session.token = None;
        self.store.save(&self.session)?;
        info!("Logged out device {}", self.session.device_id);
        Ok(())
    }

    fn token(&self) -> Result<&str> {
        self.session
            .token
            .as_deref()
            .ok_or(ClientError::NotAuthenticated)
    }

    /// All cooks of the account, including deleted ones
    pub async fn cooks(&self) -> Result<Vec<Cook>> {
        let envelope: DataEnvelope<Vec<Cook>> =
            self.http.get_json(COOKS_PATH, Some(self.token()?)).await?;
        debug!("Fetched {} cooks", envelope.data.len());
        Ok(envelope.data)
    }

    pub async fn cook(&self, id: &str) -> Result<Cook> {
        self.cooks()
            .await?
            .into_iter()
            .find(|cook| cook.id == id)
            .ok_or_else(|| ClientError::CookNotFound(id.to_string()))
    }
}
