use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::hooks::use_push_route;
use crate::{AuthState, Route, State};

/// Where anonymous viewers land after activating a locked exhibition, or
/// after their session expires on a member-only page.
///
/// Signing in itself happens on the backend's side; once a session exists
/// the startup check picks it up and this page sends the viewer back to the
/// gallery.
#[function_component]
pub fn LoginPage() -> Html {
    let push_route = use_push_route();
    let (state, _) = use_store::<State>();

    // Redirect to the gallery if already logged in
    {
        let is_authenticated = state.is_authenticated();
        use_effect_with(is_authenticated, move |is_auth| {
            if *is_auth {
                push_route.emit(Route::Gallery);
            }
        });
    }

    let body = match &state.auth_state {
        AuthState::Unknown => html! {
            <div class="inline-block animate-spin rounded-full h-8 w-8 border-2 border-neutral-900 dark:border-neutral-100 border-t-transparent dark:border-t-transparent"></div>
        },
        AuthState::LoggedOut | AuthState::LoggedIn(_) => html! {
            <>
                <h1 class="text-2xl font-semibold text-neutral-900 dark:text-white">
                    {"Sign in to continue"}
                </h1>
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"Exhibitions are open to members. Sign in with your \
                      gallery account to see them in full."}
                </p>
                <Link<Route>
                    to={Route::Gallery}
                    classes="text-neutral-900 dark:text-neutral-100 font-medium underline"
                >
                    {"Back to the gallery"}
                </Link<Route>>
            </>
        },
    };

    html! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="max-w-md w-full space-y-4 text-center">
                {body}
            </div>
        </div>
    }
}
