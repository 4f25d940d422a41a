use crate::{AuthState, Route, State};
use payloads::responses::UserProfile;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::use_store;

/// Hook that requires authentication. Returns the user profile if logged in,
/// or None if logged out or still checking auth status.
#[hook]
pub fn use_require_auth() -> Option<UserProfile> {
    let (state, _) = use_store::<State>();
    state.current_user().cloned()
}

/// Component that shows a spinner while auth is being checked,
/// or a members-only notice if the user is logged out.
#[function_component]
fn LoginPromptFallback() -> Html {
    let (state, _) = use_store::<State>();

    match &state.auth_state {
        AuthState::Unknown => {
            html! {
                <div class="text-center py-8">
                    <div class="inline-block animate-spin rounded-full h-8 w-8 border-2 border-neutral-900 dark:border-neutral-100 border-t-transparent dark:border-t-transparent"></div>
                </div>
            }
        }
        AuthState::LoggedOut => {
            html! {
                <div class="flex items-center justify-center min-h-[60vh]">
                    <div class="max-w-md w-full space-y-4 text-center">
                        <p class="text-neutral-700 dark:text-neutral-300">
                            {"This exhibition is for members only."}
                        </p>
                        <Link<Route>
                            to={Route::Login}
                            classes="text-neutral-900 dark:text-neutral-100 hover:text-neutral-700 dark:hover:text-neutral-300 font-medium underline"
                        >
                            {"Sign in to continue"}
                        </Link<Route>>
                    </div>
                </div>
            }
        }
        AuthState::LoggedIn(_) => {
            // Should not happen, but handle gracefully
            html! {}
        }
    }
}

/// Inline replacement for member-only content.
/// Shows a spinner while auth is being checked, then a sign-in prompt.
pub fn login_prompt() -> Html {
    html! { <LoginPromptFallback /> }
}
