use yew::prelude::*;
use yewdux::prelude::*;

use crate::{AuthState, State, get_api_client};

/// Hook to check authentication status once on startup
#[hook]
pub fn use_authentication() {
    let (_state, dispatch) = use_store::<State>();

    use_effect_with((), move |_| {
        yew::platform::spawn_local(async move {
            match get_api_client().current_user().await {
                Ok(Some(profile)) => {
                    tracing::debug!(user = %profile.user_id, "session active");
                    dispatch.reduce_mut(|state| {
                        state.auth_state = AuthState::LoggedIn(profile);
                    });
                }
                Ok(None) => {
                    dispatch.reduce_mut(|state| state.logout());
                }
                Err(e) => {
                    // Network error or other issue, assume logged out
                    tracing::warn!("session check failed: {e}");
                    dispatch.reduce_mut(|state| state.logout());
                }
            }
        });
    });
}
