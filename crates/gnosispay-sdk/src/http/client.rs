/*
[INPUT]:  HTTP configuration (base URL, timeouts, SIWE identity, session token)
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::time::Duration;

use reqwest::{header, Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::auth::JwtManager;
use crate::http::{GnosisPayError, Result};
use crate::types::ApiErrorBody;

/// Base URL for the Gnosis Pay API
const DEFAULT_BASE_URL: &str = "https://api.gnosispay.com";
const DEFAULT_USER_AGENT: &str = "gnosispay-sdk-rs";

/// Gnosis Chain mainnet
pub const GNOSIS_CHAIN_ID: u64 = 100;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Identity parameters embedded in every SIWE challenge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiweParams {
    /// Host (and port, if any) of the application URI
    pub domain: String,
    pub uri: String,
    pub chain_id: u64,
    pub statement: Option<String>,
}

impl Default for SiweParams {
    fn default() -> Self {
        Self {
            domain: String::new(),
            uri: String::new(),
            chain_id: GNOSIS_CHAIN_ID,
            statement: None,
        }
    }
}

impl SiweParams {
    /// Derive domain and URI from the application URI.
    ///
    /// The domain is the authority as written, so an explicit default port
    /// such as `:443` stays in it just as it stays in the URI.
    pub fn from_app_uri(app_uri: &str) -> Result<Self> {
        let parsed = Url::parse(app_uri)
            .map_err(|e| GnosisPayError::Config(format!("Invalid application URI: {e}")))?;
        let host = parsed.host_str().ok_or_else(|| {
            GnosisPayError::Config(format!("Application URI has no host: {app_uri}"))
        })?;

        let domain = match written_authority(app_uri) {
            Some(authority) => authority.to_string(),
            None => match parsed.port() {
                Some(port) => format!("{host}:{port}"),
                None => host.to_string(),
            },
        };

        Ok(Self {
            domain,
            uri: app_uri.to_string(),
            ..Self::default()
        })
    }
}

/// `host[:port]` exactly as it appears in `uri`, without user info
fn written_authority(uri: &str) -> Option<&str> {
    let (_, rest) = uri.trim().split_once("://")?;
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let authority = &rest[..end];
    let authority = authority
        .rsplit_once('@')
        .map_or(authority, |(_, host_port)| host_port);
    (!authority.is_empty()).then_some(authority)
}

/// Main HTTP client for the Gnosis Pay API
#[derive(Debug, Clone)]
pub struct GnosisPayClient {
    http_client: Client,
    base_url: Url,
    siwe: SiweParams,
    jwt_manager: JwtManager,
}

impl GnosisPayClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, DEFAULT_BASE_URL)
    }

    /// Create a new client against a non-default API host
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent)
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            siwe: SiweParams::default(),
            jwt_manager: JwtManager::new(),
        })
    }

    /// Set the application URI used for SIWE challenges
    pub fn with_siwe_params(mut self, app_uri: &str) -> Result<Self> {
        let chain_id = self.siwe.chain_id;
        let statement = self.siwe.statement.take();
        self.siwe = SiweParams {
            chain_id,
            statement,
            ..SiweParams::from_app_uri(app_uri)?
        };
        Ok(self)
    }

    /// Override the target chain (defaults to Gnosis Chain)
    pub fn with_chain_id(mut self, chain_id: u64) -> Self {
        self.siwe.chain_id = chain_id;
        self
    }

    /// Human-readable statement included in SIWE challenges
    pub fn with_statement(mut self, statement: impl Into<String>) -> Self {
        self.siwe.statement = Some(statement.into());
        self
    }

    /// Start with a previously issued session token
    pub fn with_auth_token(self, token: impl Into<String>) -> Self {
        self.jwt_manager.set_token(token.into());
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn siwe_params(&self) -> &SiweParams {
        &self.siwe
    }

    /// Session token store shared by every request made through this client
    pub fn jwt_manager(&self) -> &JwtManager {
        &self.jwt_manager
    }

    /// Whether the held token is present and not past its `exp` claim.
    ///
    /// Local liveness heuristic only; the server remains the token's verifier.
    pub fn is_authenticated(&self) -> bool {
        self.jwt_manager.is_authenticated()
    }

    fn url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint)?)
    }

    /// Build a request with the standard headers and bearer token (if any)
    pub(crate) fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        if endpoint.trim().is_empty() {
            return Err(GnosisPayError::Validation(
                "endpoint path cannot be empty".to_string(),
            ));
        }

        let url = self.url(endpoint)?;
        Ok(self.build_request(method, url))
    }

    /// Build a request whose path is `segments`, each percent-encoded as a
    /// single segment, so caller-supplied ids cannot reach another route
    pub(crate) fn request_segments(
        &self,
        method: Method,
        segments: &[&str],
    ) -> Result<RequestBuilder> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                GnosisPayError::Config(format!("base URL cannot carry a path: {}", self.base_url))
            })?
            .clear()
            .extend(segments);
        url.set_query(None);
        url.set_fragment(None);
        Ok(self.build_request(method, url))
    }

    fn build_request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!(%method, %url, "building request");

        let mut builder = self
            .http_client
            .request(method, url)
            .header(header::ACCEPT, "application/json");
        if let Some(token) = self.jwt_manager.get_token() {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Send and decode a JSON response
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let body = self.send_raw(builder).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Send and return the raw response body
    pub(crate) async fn send_text(&self, builder: RequestBuilder) -> Result<String> {
        self.send_raw(builder).await
    }

    /// Send and discard the response body
    pub(crate) async fn send_empty(&self, builder: RequestBuilder) -> Result<()> {
        self.send_raw(builder).await.map(|_| ())
    }

    async fn send_raw(&self, builder: RequestBuilder) -> Result<String> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(status = status.as_u16(), body_len = body.len(), "response received");

        if !status.is_success() {
            return Err(decode_error(status, &body));
        }
        Ok(body)
    }
}

fn decode_error(status: StatusCode, body: &str) -> GnosisPayError {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) if parsed.is_populated() => GnosisPayError::api_error(
            status,
            parsed.message.unwrap_or_default(),
            parsed.error.unwrap_or_default(),
            parsed.code.unwrap_or_default(),
        ),
        _ => {
            warn!(
                status = status.as_u16(),
                "error response did not match the API error shape"
            );
            GnosisPayError::Status {
                status: status.as_u16(),
            }
        }
    }
}

/// Validate an identifier that fills one path segment.
///
/// Dot segments and `/` are rejected; other reserved characters are
/// percent-encoded by [`GnosisPayClient::request_segments`].
pub(crate) fn path_segment<'a>(name: &str, value: &'a str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() || value == "." || value == ".." || value.contains('/') {
        return Err(GnosisPayError::Validation(format!(
            "{name} must be a non-empty path segment"
        )));
    }
    Ok(value)
}
