use crate::session::SessionSignal;
use crate::{ClientConfig, responses};
use reqwest::StatusCode;
use reqwest::header::{self, HeaderMap, HeaderValue};

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the catalog backend.
///
/// Cloning is cheap and clones share the connection pool and the
/// [`SessionSignal`].
#[derive(Debug, Clone)]
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
    pub session: SessionSignal,
}

/// Build the HTTP client every [`APIClient`] should use: JSON content type
/// on every request, and cookies carried between requests. In the browser
/// the cookie jar belongs to the page, so each request opts into it instead
/// (see [`APIClient::with_credentials`]).
pub fn default_client() -> Result<reqwest::Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );

    let builder = reqwest::Client::builder().default_headers(headers);

    #[cfg(not(target_arch = "wasm32"))]
    let builder = builder.cookie_store(true);

    builder.build()
}

impl APIClient {
    pub fn new(address: impl Into<String>, inner_client: reqwest::Client) -> Self {
        Self {
            address: address.into(),
            inner_client,
            session: SessionSignal::new(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        Ok(Self::new(config.address.clone(), default_client()?))
    }
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    fn with_credentials(
        &self,
        request: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request
    }

    async fn empty_post(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.post(self.format_url(path));
        let result = self.with_credentials(request).send().await;
        self.intercept(result)
    }

    async fn empty_get(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.get(self.format_url(path));
        let result = self.with_credentials(request).send().await;
        self.intercept(result)
    }

    /// Sees every response and transport error before the caller does.
    ///
    /// A 401 marks the session expired. The result itself is returned
    /// untouched: no retries, no redirects, no rewritten errors.
    fn intercept(&self, result: ReqwestResult) -> ReqwestResult {
        let status = match &result {
            Ok(response) => {
                tracing::debug!(
                    url = %response.url(),
                    status = %response.status(),
                    "api response"
                );
                Some(response.status())
            }
            Err(e) => {
                tracing::warn!(
                    url = ?e.url().map(|url| url.as_str()),
                    "api request failed: {e}"
                );
                e.status()
            }
        };

        if status == Some(StatusCode::UNAUTHORIZED) {
            tracing::info!("backend rejected the session");
            self.session.invalidate();
        }

        result
    }
}

/// Methods on the backend API
impl APIClient {
    /// Fetch the whole exhibition catalog. Filtering happens client-side.
    pub async fn list_exhibitions(
        &self,
    ) -> Result<Vec<responses::Exhibition>, ClientError> {
        let response = self.empty_get("exhibitions").await?;
        ok_body(response).await
    }

    /// The signed-in viewer, or `None` if the backend does not recognize the
    /// session.
    pub async fn current_user(
        &self,
    ) -> Result<Option<responses::UserProfile>, ClientError> {
        let response = self.empty_get("session").await?;
        match response.status() {
            StatusCode::UNAUTHORIZED => Ok(None),
            _ => {
                let profile = ok_body(response).await?;
                self.session.restore();
                Ok(Some(profile))
            }
        }
    }

    pub async fn logout(&self) -> Result<(), ClientError> {
        let response = self.empty_post("logout").await?;
        ok_empty(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
    /// The response arrived but its body was not what we expected.
    #[error("Unexpected response from the server.")]
    Decode(#[source] reqwest::Error),
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::APIError(status, _) => Some(*status),
            Self::Network(e) | Self::Decode(e) => e.status(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    response.json::<T>().await.map_err(|e| {
        if e.is_decode() {
            ClientError::Decode(e)
        } else {
            ClientError::Network(e)
        }
    })
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(())
}
