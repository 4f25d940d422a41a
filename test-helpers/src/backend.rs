//! Routes of the mock catalog backend.

use std::sync::Mutex;

use actix_web::cookie::Cookie;
use actix_web::{HttpRequest, HttpResponse, web};
use payloads::{UserId, responses};
use serde::Deserialize;

/// Name of the cookie carrying the session.
pub const SESSION_COOKIE: &str = "gallery_session";

/// How the catalog endpoint should answer.
#[derive(Debug, Clone)]
pub enum CatalogReply {
    Exhibitions(Vec<responses::Exhibition>),
    /// Answer with this status and a plain-text body.
    Status(u16),
    /// Answer 200 with this body verbatim.
    Raw(String),
}

/// Mutable state behind the routes. Tests reach into it through
/// [`crate::TestApp`].
#[derive(Debug)]
pub struct MockBackend {
    pub catalog: Mutex<CatalogReply>,
    /// Whether the catalog is only served to signed-in viewers.
    pub members_only: Mutex<bool>,
}

impl MockBackend {
    pub fn new(exhibitions: Vec<responses::Exhibition>) -> Self {
        Self {
            catalog: Mutex::new(CatalogReply::Exhibitions(exhibitions)),
            members_only: Mutex::new(false),
        }
    }
}

pub fn api_services() -> actix_web::Scope {
    web::scope("/api")
        .route("/exhibitions", web::get().to(list_exhibitions))
        .route("/session", web::get().to(session))
        .route("/login", web::post().to(login))
        .route("/logout", web::post().to(logout))
}

fn session_user(request: &HttpRequest) -> Option<responses::UserProfile> {
    let cookie = request.cookie(SESSION_COOKIE)?;
    let username = cookie.value();
    if username.is_empty() {
        return None;
    }
    Some(responses::UserProfile {
        user_id: UserId(format!("user-{username}")),
        username: username.to_string(),
        display_name: None,
    })
}

async fn list_exhibitions(
    request: HttpRequest,
    backend: web::Data<MockBackend>,
) -> HttpResponse {
    let members_only = *backend
        .members_only
        .lock()
        .unwrap_or_else(|e| e.into_inner());
    if members_only && session_user(&request).is_none() {
        return HttpResponse::Unauthorized().body("Invalid login session");
    }

    let reply = backend
        .catalog
        .lock()
        .unwrap_or_else(|e| e.into_inner())
        .clone();
    match reply {
        CatalogReply::Exhibitions(exhibitions) => {
            HttpResponse::Ok().json(exhibitions)
        }
        CatalogReply::Status(code) => {
            let status = actix_web::http::StatusCode::from_u16(code)
                .unwrap_or(actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
            HttpResponse::build(status).body("Something went wrong")
        }
        CatalogReply::Raw(body) => HttpResponse::Ok()
            .content_type("application/json")
            .body(body),
    }
}

async fn session(request: HttpRequest) -> HttpResponse {
    match session_user(&request) {
        Some(profile) => HttpResponse::Ok().json(profile),
        None => HttpResponse::Unauthorized().body("Invalid login session"),
    }
}

#[derive(Deserialize)]
struct LoginDetails {
    username: String,
}

async fn login(details: web::Json<LoginDetails>) -> HttpResponse {
    let cookie = Cookie::build(SESSION_COOKIE, details.username.clone())
        .path("/")
        .http_only(true)
        .finish();
    tracing::debug!(username = %details.username, "mock login");
    HttpResponse::Ok().cookie(cookie).finish()
}

async fn logout() -> HttpResponse {
    let mut cookie = Cookie::build(SESSION_COOKIE, "").path("/").finish();
    cookie.make_removal();
    HttpResponse::Ok().cookie(cookie).finish()
}
