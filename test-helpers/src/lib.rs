pub mod backend;
pub mod mock;
pub mod telemetry;

use std::net::TcpListener;

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use payloads::{APIClient, responses};
use reqwest::StatusCode;

use crate::backend::{CatalogReply, MockBackend};

pub struct TestApp {
    pub port: u16,
    pub client: APIClient,
    pub backend: web::Data<MockBackend>,
}

impl TestApp {
    pub fn address(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    /// Replace the catalog served to clients.
    pub fn set_exhibitions(&self, exhibitions: Vec<responses::Exhibition>) {
        self.set_catalog(CatalogReply::Exhibitions(exhibitions));
    }

    /// Make the catalog endpoint answer with a bare status code.
    pub fn fail_catalog_with(&self, status: StatusCode) {
        self.set_catalog(CatalogReply::Status(status.as_u16()));
    }

    /// Make the catalog endpoint answer 200 with an arbitrary body.
    pub fn serve_raw_catalog(&self, body: &str) {
        self.set_catalog(CatalogReply::Raw(body.to_string()));
    }

    /// Only serve the catalog to clients presenting a session cookie.
    pub fn require_session(&self, required: bool) {
        *self
            .backend
            .members_only
            .lock()
            .unwrap_or_else(|e| e.into_inner()) = required;
    }

    /// Sign in through the client's own cookie jar, so later requests from
    /// `self.client` carry the session.
    pub async fn login(&self, username: &str) -> anyhow::Result<()> {
        self.client
            .inner_client
            .post(format!("{}/api/login", self.address()))
            .json(&serde_json::json!({ "username": username }))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    fn set_catalog(&self, reply: CatalogReply) {
        *self.backend.catalog.lock().unwrap_or_else(|e| e.into_inner()) =
            reply;
    }
}

/// Build the mock server, but not await it.
///
/// Returns the port the server has bound to; pass 0 to let the OS pick.
pub fn build(
    port: u16,
    backend: web::Data<MockBackend>,
) -> std::io::Result<(Server, u16)> {
    let listener = TcpListener::bind(format!("127.0.0.1:{port}"))?;
    let port = listener.local_addr()?.port();
    let server = HttpServer::new(move || {
        // The dev UI is served from another origin and sends cookies
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .supports_credentials();

        App::new()
            .wrap(cors)
            .service(backend::api_services())
            .app_data(backend.clone())
    })
    .workers(1)
    .listen(listener)?
    .run();
    Ok((server, port))
}

pub async fn spawn_app_on_port(
    port: u16,
    exhibitions: Vec<responses::Exhibition>,
) -> anyhow::Result<TestApp> {
    let backend = web::Data::new(MockBackend::new(exhibitions));
    let (server, port) = build(port, backend.clone())?;
    tokio::spawn(server);

    let client = APIClient::new(
        format!("http://127.0.0.1:{port}"),
        payloads::api_client::default_client()?,
    );

    Ok(TestApp {
        port,
        client,
        backend,
    })
}

/// Use OS-assigned port for parallel testing, serving the sample catalog.
pub async fn spawn_app() -> TestApp {
    spawn_app_on_port(0, mock::sample_catalog())
        .await
        .expect("Failed to spawn mock backend")
}

/// Assert that the result of an API action results in a specific status code.
pub fn assert_status_code<T: std::fmt::Debug>(
    result: Result<T, payloads::ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(payloads::ClientError::APIError(code, _)) => {
            assert_eq!(code, expected)
        }
        other => panic!("Expected APIError, got {other:?}"),
    };
}
