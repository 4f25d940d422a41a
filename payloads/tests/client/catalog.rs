use payloads::display::{self, FALLBACK_EXHIBITOR, FALLBACK_START_YEAR};
use payloads::responses::Exhibition;
use payloads::{ClientError, Matchers, SessionStatus};
use reqwest::StatusCode;
use test_helpers::{assert_status_code, spawn_app};

#[tokio::test]
async fn preserves_records_from_the_service() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let expected = test_helpers::mock::sample_catalog();

    let exhibitions = app.client.list_exhibitions().await?;

    assert_eq!(exhibitions, expected);
    Ok(())
}

#[tokio::test]
async fn bare_record_normalizes_with_fallbacks() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.serve_raw_catalog(r#"[{"_id":"1","category":"Modern"}]"#);

    let raw = app.client.list_exhibitions().await?;
    let shown = display::select(&raw, &Matchers::all());

    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].id.0, "1");
    assert_eq!(shown[0].theme, "Modern");
    assert_eq!(shown[0].cover_image, "");
    assert_eq!(shown[0].start_date, FALLBACK_START_YEAR);
    assert_eq!(shown[0].exhibitor, FALLBACK_EXHIBITOR);
    assert!(!shown[0].is_for_sale);
    assert!(shown[0].price.is_zero());
    Ok(())
}

#[tokio::test]
async fn category_filter_applies_after_fetch() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.serve_raw_catalog(
        r#"[
            {"_id":"1","category":"Modern"},
            {"_id":"2","category":"Classic"}
        ]"#,
    );

    let raw = app.client.list_exhibitions().await?;
    let shown = display::select(&raw, &Matchers::from_iter(["Modern"]));

    assert_eq!(raw.len(), 2);
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].theme, "Modern");
    Ok(())
}

#[tokio::test]
async fn empty_catalog() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.set_exhibitions(Vec::<Exhibition>::new());

    assert!(app.client.list_exhibitions().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn server_error_is_surfaced() {
    let app = spawn_app().await;
    app.fail_catalog_with(StatusCode::INTERNAL_SERVER_ERROR);

    let result = app.client.list_exhibitions().await;

    assert_status_code(result, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(app.client.session.status(), SessionStatus::Active);
}

#[tokio::test]
async fn non_array_payload_is_rejected() {
    let app = spawn_app().await;
    app.serve_raw_catalog(r#"{"exhibitions": []}"#);

    let result = app.client.list_exhibitions().await;

    assert!(matches!(result, Err(ClientError::Decode(_))));
}

#[tokio::test]
async fn record_without_id_is_rejected() {
    let app = spawn_app().await;
    app.serve_raw_catalog(r#"[{"title":"No id"}]"#);

    let result = app.client.list_exhibitions().await;

    assert!(matches!(result, Err(ClientError::Decode(_))));
}

#[tokio::test]
async fn odd_records_come_back_with_the_good_ones() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.serve_raw_catalog(
        r#"[
            {"_id":"1","title":"Neon Grids","category":"Modern","createdBy":{"name":"Ada"}},
            {"_id":"2","title":null,"category":null,"createdBy":"64ab01","isForSale":null,"price":"n/a"}
        ]"#,
    );

    let raw = app.client.list_exhibitions().await?;
    let shown = display::select(&raw, &Matchers::all());

    assert_eq!(shown.len(), 2);
    assert_eq!(shown[0].exhibitor, "Ada");
    assert_eq!(shown[1].id.0, "2");
    assert_eq!(shown[1].title, "");
    assert_eq!(shown[1].theme, "");
    assert_eq!(shown[1].exhibitor, FALLBACK_EXHIBITOR);
    assert!(!shown[1].is_for_sale);
    assert!(shown[1].price.is_zero());
    Ok(())
}

#[tokio::test]
async fn data_uri_cover_is_kept() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.serve_raw_catalog(
        r#"[{"_id":"1","category":"Modern","coverImage":"data:image/png;base64,iVBORw0KGgo="}]"#,
    );

    let raw = app.client.list_exhibitions().await?;
    let shown = display::select(&raw, &Matchers::all());

    assert_eq!(shown[0].cover_image, "data:image/png;base64,iVBORw0KGgo=");
    Ok(())
}
