use payloads::responses::UserProfile;
use yewdux::prelude::*;

#[derive(Clone, Debug, PartialEq, Default)]
pub enum AuthState {
    /// Startup, before the backend has answered the session check.
    #[default]
    Unknown,
    LoggedOut,
    LoggedIn(UserProfile),
}

#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    // === Authentication (managed by use_authentication) ===
    pub auth_state: AuthState,
}

impl State {
    pub fn is_authenticated(&self) -> bool {
        matches!(self.auth_state, AuthState::LoggedIn(_))
    }

    pub fn current_user(&self) -> Option<&UserProfile> {
        match &self.auth_state {
            AuthState::LoggedIn(profile) => Some(profile),
            AuthState::LoggedOut | AuthState::Unknown => None,
        }
    }

    pub fn logout(&mut self) {
        self.auth_state = AuthState::LoggedOut;
    }
}
