mod catalog;
mod session;

use payloads::{APIClient, ClientConfig};
use test_helpers::spawn_app;

#[tokio::test]
async fn lists_sample_catalog() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let exhibitions = app.client.list_exhibitions().await?;
    assert_eq!(exhibitions.len(), test_helpers::mock::sample_catalog().len());

    Ok(())
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() -> anyhow::Result<()> {
    // bind and drop to find a port nobody listens on
    let port = std::net::TcpListener::bind("127.0.0.1:0")?
        .local_addr()?
        .port();
    let address = format!("http://127.0.0.1:{port}");
    let config = ClientConfig::from_env_value(Some(address.as_str()));
    let client = APIClient::from_config(&config)?;

    let result = client.list_exhibitions().await;

    assert!(matches!(result, Err(payloads::ClientError::Network(_))));
    assert_eq!(client.session.status(), payloads::SessionStatus::Active);
    Ok(())
}
