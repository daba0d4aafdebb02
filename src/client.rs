use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, info};
use reqwest::header::{HeaderMap, AUTHORIZATION};
use reqwest::{Client as ReqwestClient, Method};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::api::{campaign, health, list, subscriber, transactional};
use crate::models::{ApiResponse, ErrorBody, Reply};
use crate::{ListmonkError, ListmonkResult};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const HTTP_LOG_TARGET: &str = "listmonk_client::http";

/// Verbosity of the optional request/response log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum HttpLogLevel {
    /// Request line, response status and elapsed time.
    #[default]
    Basic,

    /// Everything in `Basic` plus request and response headers.
    Headers,

    /// Everything in `Headers` plus request and response bodies.
    Body,
}

/// Builder for Listmonk client.
///
/// This builder provides a fluent API for creating Listmonk clients
/// with validation at build time.
#[derive(Default)]
pub struct ListmonkClientBuilder {
    base_url: Option<String>,
    username: Option<String>,
    password: Option<SecretString>,
    password_env: Option<String>,
    connect_timeout: Option<Duration>,
    read_timeout: Option<Duration>,
    write_timeout: Option<Duration>,
    logging: bool,
    logging_level: HttpLogLevel,
    user_agent: Option<String>,
    http_client: Option<ReqwestClient>,
}

impl ListmonkClientBuilder {
    /// Sets the API base URL, e.g. `http://localhost:9000/api`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the username for basic authentication.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Sets the password for basic authentication.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(SecretString::from(password.into()));
        self
    }

    /// Sets both basic authentication credentials.
    pub fn basic_auth(self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username(username).password(password)
    }

    /// Reads the password from an environment variable when the client is
    /// built.
    pub fn password_from_env(mut self, var_name: impl Into<String>) -> Self {
        self.password_env = Some(var_name.into());
        self
    }

    /// Sets the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets the read timeout.
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    /// Sets the write timeout.
    pub fn write_timeout(mut self, timeout: Duration) -> Self {
        self.write_timeout = Some(timeout);
        self
    }

    /// Enables or disables request/response logging.
    pub fn logging(mut self, enabled: bool) -> Self {
        self.logging = enabled;
        self
    }

    /// Sets the request/response logging verbosity.
    pub fn logging_level(mut self, level: HttpLogLevel) -> Self {
        self.logging_level = level;
        self
    }

    /// Sets a custom user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets a custom reqwest client (e.g., for testing or custom middleware).
    ///
    /// Timeouts and user agent are then taken from that client.
    pub fn http_client(mut self, http_client: ReqwestClient) -> Self {
        self.http_client = Some(http_client);
        self
    }

    pub fn build(self) -> ListmonkResult<ListmonkClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ListmonkError::ConfigurationError("Base URL is required".into()))
            .and_then(|url_str| {
                Url::parse(&normalize_base_url(&url_str)).map_err(|e| {
                    ListmonkError::ConfigurationError(format!("Invalid base URL: {e}"))
                })
            })?;

        if base_url.cannot_be_a_base() {
            return Err(ListmonkError::ConfigurationError(format!(
                "Invalid base URL: {base_url} cannot be used as a base"
            )));
        }

        let password = match (self.password, self.password_env) {
            (Some(password), _) => Some(password),
            (None, Some(var_name)) => {
                let password = std::env::var(&var_name).map_err(|e| {
                    ListmonkError::ConfigurationError(format!(
                        "Failed to read environment variable '{var_name}': {e}"
                    ))
                })?;
                Some(SecretString::from(password))
            }
            (None, None) => None,
        };

        let credentials = match (self.username, password) {
            (Some(username), Some(password)) => {
                if username.trim().is_empty() {
                    return Err(ListmonkError::ConfigurationError(
                        "Username must not be empty".into(),
                    ));
                }
                Some(Arc::new(Credentials { username, password }))
            }
            (Some(_), None) => {
                return Err(ListmonkError::ConfigurationError(
                    "Basic auth requires a password when a username is set".into(),
                ))
            }
            (None, Some(_)) => {
                return Err(ListmonkError::ConfigurationError(
                    "Basic auth requires a username when a password is set".into(),
                ))
            }
            (None, None) => None,
        };

        let (http_client, timeouts) = if let Some(custom_client) = self.http_client {
            (custom_client, None)
        } else {
            let timeouts = Timeouts {
                connect: self.connect_timeout.unwrap_or(DEFAULT_TIMEOUT),
                read: self.read_timeout.unwrap_or(DEFAULT_TIMEOUT),
                write: self.write_timeout.unwrap_or(DEFAULT_TIMEOUT),
            };
            let user_agent = self
                .user_agent
                .as_deref()
                .unwrap_or(concat!("listmonk-client/", env!("CARGO_PKG_VERSION")));

            // reqwest has no separate write-phase timeout; the write budget
            // widens the whole-request deadline instead.
            let http_client = ReqwestClient::builder()
                .connect_timeout(timeouts.connect)
                .read_timeout(timeouts.read)
                .timeout(timeouts.connect + timeouts.write + timeouts.read)
                .user_agent(user_agent)
                .build()
                .map_err(|e| {
                    ListmonkError::ConfigurationError(format!("Failed to create HTTP client: {e}"))
                })?;
            (http_client, Some(timeouts))
        };

        Ok(ListmonkClient {
            base_url,
            credentials,
            timeouts,
            http_log: self.logging.then_some(self.logging_level),
            http_client,
        })
    }
}

fn normalize_base_url(url: &str) -> String {
    let url = url.trim();
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{url}/")
    }
}

/// Basic authentication credentials.
#[derive(Debug)]
struct Credentials {
    username: String,
    password: SecretString,
}

/// Timeouts applied to the client the builder creates itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Timeouts {
    connect: Duration,
    read: Duration,
    write: Duration,
}

/// The main Listmonk client for interacting with the Listmonk API.
///
/// The client is immutable once built. Cloning is cheap and every clone
/// shares the same connection pool, so one client can serve any number of
/// concurrent calls.
#[derive(Clone)]
pub struct ListmonkClient {
    base_url: Url,
    credentials: Option<Arc<Credentials>>,
    /// `None` when an external reqwest client was injected.
    timeouts: Option<Timeouts>,
    http_log: Option<HttpLogLevel>,
    http_client: ReqwestClient,
}

impl fmt::Debug for ListmonkClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListmonkClient")
            .field("base_url", &self.base_url.as_str())
            .field(
                "username",
                &self.credentials.as_ref().map(|c| c.username.as_str()),
            )
            .field("timeouts", &self.timeouts)
            .field("http_log", &self.http_log)
            .finish()
    }
}

impl ListmonkClient {
    pub fn builder() -> ListmonkClientBuilder {
        ListmonkClientBuilder::default()
    }

    /// The normalized base URL, always ending in `/`.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves an endpoint path against the base URL.
    ///
    /// Endpoints are relative paths such as `subscribers/1`. Absolute paths,
    /// full URLs and `..` segments that leave the base path are rejected, as
    /// are query strings and fragments (use the typed builders for query
    /// parameters).
    pub fn endpoint_url(&self, endpoint: &str) -> ListmonkResult<Url> {
        if endpoint.starts_with('/') || Url::parse(endpoint).is_ok() {
            return Err(ListmonkError::InvalidEndpoint(format!(
                "endpoint must be relative to the base URL: {endpoint}"
            )));
        }
        if endpoint.contains(['?', '#']) {
            return Err(ListmonkError::InvalidEndpoint(format!(
                "endpoint must not include query or fragment: {endpoint}"
            )));
        }

        let url = self.base_url.join(endpoint)?;
        if url.origin() != self.base_url.origin()
            || !url.path().starts_with(self.base_url.path())
        {
            return Err(ListmonkError::InvalidEndpoint(format!(
                "endpoint must stay under the base URL: {endpoint}"
            )));
        }
        Ok(url)
    }

    /// Makes a raw request to the Listmonk API.
    ///
    /// # Warning
    ///
    /// This is an advanced API that bypasses the type-safe wrappers.
    /// Use the typed API methods (like `subscribers()`, `campaigns()`) when
    /// possible.
    ///
    /// # Arguments
    ///
    /// * `method` - The HTTP method to use.
    /// * `endpoint` - The endpoint path relative to the base URL (e.g.,
    ///   `"settings"`).
    /// * `body` - Optional request body (must implement `Serialize`).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The endpoint is absolute or carries a query string.
    /// - The request fails due to network issues.
    /// - A successful response does not carry a `{"data": ...}` envelope.
    ///
    /// Non-success statuses are returned as a [`Reply`], not as an error.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use listmonk_client::{ListmonkClient, ListmonkError};
    /// # use reqwest::Method;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), ListmonkError> {
    /// let client = ListmonkClient::builder()
    ///     .base_url("http://localhost:9000/api")
    ///     .basic_auth("admin", "password")
    ///     .build()?;
    ///
    /// let settings = client
    ///     .raw_request(Method::GET, "settings", None::<()>)
    ///     .await?;
    ///
    /// println!("Settings: {:?}", settings.data());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn raw_request<T>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<T>,
    ) -> ListmonkResult<Reply<Value>>
    where
        T: Serialize,
    {
        self.request(method, endpoint, &[], body).await
    }

    /// Make a request to the Listmonk API.
    ///
    /// Sends exactly one HTTP request. Basic auth (when configured) and the
    /// optional HTTP log are applied here for every service.
    pub(crate) async fn request<T, R>(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(&str, String)],
        body: Option<T>,
    ) -> ListmonkResult<Reply<R>>
    where
        T: Serialize,
        R: DeserializeOwned,
    {
        let mut url = self.endpoint_url(endpoint)?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        debug!("Listmonk request: {method} {endpoint}");

        let mut request = self.http_client.request(method, url);

        if let Some(credentials) = &self.credentials {
            request = request.basic_auth(
                &credentials.username,
                Some(credentials.password.expose_secret()),
            );
        }

        // Add JSON body if provided
        if let Some(data) = body {
            let bytes = serde_json::to_vec(&data)?;
            request = request
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(bytes);
        }

        let request = request.build()?;
        if let Some(level) = self.http_log {
            log_request(level, &request);
        }

        let started = Instant::now();
        let response = self.http_client.execute(request).await?;
        let status = response.status();
        let url = response.url().clone();
        let headers = response.headers().clone();
        let bytes = response.bytes().await?;

        if let Some(level) = self.http_log {
            log_response(level, status, &url, &headers, &bytes, started.elapsed());
        }

        if !status.is_success() {
            debug!("Listmonk request to {endpoint} failed with status code: {status}");
            return Ok(Reply::failure(status, ErrorBody::from_bytes(&bytes)));
        }

        let envelope: ApiResponse<R> = serde_json::from_slice(&bytes)
            .map_err(|source| ListmonkError::DecodeError { status, source })?;

        Ok(Reply::success(status, envelope))
    }

    /// Gets the subscriber API interface.
    pub fn subscribers(&self) -> subscriber::SubscriberHandler {
        subscriber::SubscriberHandler::new(self.clone())
    }

    /// Gets the mailing list API interface.
    pub fn lists(&self) -> list::ListHandler {
        list::ListHandler::new(self.clone())
    }

    /// Gets the campaign API interface.
    pub fn campaigns(&self) -> campaign::CampaignHandler {
        campaign::CampaignHandler::new(self.clone())
    }

    /// Gets the transactional message API interface.
    pub fn transactional(&self) -> transactional::TransactionalHandler {
        transactional::TransactionalHandler::new(self.clone())
    }

    /// Gets the health check API interface.
    pub fn health(&self) -> health::HealthHandler {
        health::HealthHandler::new(self.clone())
    }
}

fn log_request(level: HttpLogLevel, request: &reqwest::Request) {
    info!(target: HTTP_LOG_TARGET, "--> {} {}", request.method(), request.url());

    if level >= HttpLogLevel::Headers {
        log_headers("-->", request.headers());
    }

    if level >= HttpLogLevel::Body {
        if let Some(bytes) = request.body().and_then(|body| body.as_bytes()) {
            info!(target: HTTP_LOG_TARGET, "--> {}", String::from_utf8_lossy(bytes));
        }
    }
}

fn log_response(
    level: HttpLogLevel,
    status: http::StatusCode,
    url: &Url,
    headers: &HeaderMap,
    body: &[u8],
    elapsed: Duration,
) {
    info!(
        target: HTTP_LOG_TARGET,
        "<-- {} {} ({} ms)",
        status,
        url,
        elapsed.as_millis()
    );

    if level >= HttpLogLevel::Headers {
        log_headers("<--", headers);
    }

    if level >= HttpLogLevel::Body && !body.is_empty() {
        info!(target: HTTP_LOG_TARGET, "<-- {}", String::from_utf8_lossy(body));
    }
}

fn log_headers(direction: &str, headers: &HeaderMap) {
    for (name, value) in headers {
        if *name == AUTHORIZATION {
            info!(target: HTTP_LOG_TARGET, "{direction} {name}: ██");
        } else {
            info!(
                target: HTTP_LOG_TARGET,
                "{direction} {name}: {}",
                value.to_str().unwrap_or("<binary>")
            );
        }
    }
}
