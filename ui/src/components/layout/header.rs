use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::hooks::use_logout;
use crate::{AuthState, Route, State};

#[function_component]
pub fn Header() -> Html {
    let (state, _) = use_store::<State>();
    let logout = use_logout();

    let session = match &state.auth_state {
        AuthState::Unknown => html! {},
        AuthState::LoggedOut => html! {
            <Link<Route>
                to={Route::Login}
                classes="text-sm font-medium text-neutral-700 dark:text-neutral-300 hover:underline"
            >
                {"Sign in"}
            </Link<Route>>
        },
        AuthState::LoggedIn(profile) => html! {
            <div class="flex items-center space-x-4 text-sm">
                <span class="text-neutral-600 dark:text-neutral-400">
                    {profile.shown_name()}
                </span>
                <button
                    onclick={logout}
                    class="font-medium text-neutral-700 dark:text-neutral-300 hover:underline"
                >
                    {"Sign out"}
                </button>
            </div>
        },
    };

    html! {
        <header class="bg-white dark:bg-neutral-800 border-b border-neutral-200 dark:border-neutral-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <Link<Route>
                        to={Route::Gallery}
                        classes="text-xl font-semibold text-neutral-900 dark:text-white"
                    >
                        {"Gallery"}
                    </Link<Route>>
                    {session}
                </div>
            </div>
        </header>
    }
}
