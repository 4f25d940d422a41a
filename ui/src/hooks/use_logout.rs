use crate::{Route, State, get_api_client};
use yew::prelude::*;
use yewdux::prelude::*;

use super::use_push_route;

#[hook]
pub fn use_logout() -> Callback<MouseEvent> {
    let (_, dispatch) = use_store::<State>();
    let push_route = use_push_route();

    Callback::from(move |_| {
        let dispatch = dispatch.clone();
        let push_route = push_route.clone();

        yew::platform::spawn_local(async move {
            if let Err(e) = get_api_client().logout().await {
                tracing::warn!("logout request failed: {e}");
            }

            dispatch.reduce_mut(|state| state.logout());
            push_route.emit(Route::Gallery);
        });
    })
}
