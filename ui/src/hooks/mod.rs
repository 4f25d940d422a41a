pub mod use_authentication;
pub mod use_exhibitions;
pub mod use_fetch;
pub mod use_logout;
pub mod use_push_route;
pub mod use_require_auth;
pub mod use_session_expiry;

pub use use_authentication::use_authentication;
pub use use_exhibitions::use_exhibitions;
pub use use_fetch::{FetchHookReturn, use_fetch};
pub use use_logout::use_logout;
pub use use_push_route::use_push_route;
pub use use_require_auth::{login_prompt, use_require_auth};
pub use use_session_expiry::use_session_expiry;

/// Distinguishes "never fetched" from "fetched, possibly empty".
#[derive(Clone, Debug, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    NotFetched,
    Fetched(T),
}

impl<T> FetchState<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::NotFetched => None,
            Self::Fetched(data) => Some(data),
        }
    }
}
