use payloads::SessionStatus;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use super::use_push_route;
use crate::{Route, State, get_api_client};

/// Where to send the viewer once the backend has rejected their session.
///
/// Only member-only pages move; public pages stay put, and the login page
/// never redirects to itself.
pub fn expiry_redirect(current: Option<&Route>) -> Option<Route> {
    current
        .filter(|route| route.is_members_only())
        .map(|_| Route::Login)
}

/// An expiry only ends a session when the store held one. A 401 for an
/// anonymous viewer (the startup session check) is routine.
pub fn ended_a_session(state: &State) -> bool {
    state.is_authenticated()
}

fn current_route() -> Option<Route> {
    let pathname = web_sys::window()?.location().pathname().ok()?;
    Route::recognize(&pathname)
}

/// Subscribe to the API client's session signal for the lifetime of the app.
///
/// On expiry the store is marked logged out and member-only pages go to
/// login. The failing request still gets its error; this only reacts to it.
#[hook]
pub fn use_session_expiry() {
    let (_, dispatch) = use_store::<State>();
    let push_route = use_push_route();

    use_effect_with((), move |_| {
        let mut status = get_api_client().session.subscribe();

        yew::platform::spawn_local(async move {
            while status.changed().await.is_ok() {
                if *status.borrow_and_update() != SessionStatus::Expired {
                    continue;
                }
                if ended_a_session(&dispatch.get()) {
                    tracing::info!("session expired");
                } else {
                    tracing::debug!("backend rejected an anonymous request");
                }
                dispatch.reduce_mut(|state| state.logout());

                if let Some(route) = expiry_redirect(current_route().as_ref())
                {
                    push_route.emit(route);
                }
            }
        });
    });
}
