use payloads::responses::UserProfile;
use yew::prelude::*;

use crate::hooks::{login_prompt, use_require_auth};

/// Component that only renders its children when the user is authenticated.
/// Shows a sign-in prompt if not authenticated.
///
/// Keeps member-only children (and their data hooks) from mounting at all
/// for anonymous viewers.
///
/// Supports two modes:
/// 1. Simple children mode: Just wraps content that doesn't need the profile
/// 2. Render prop mode: Provides UserProfile to children that need it
#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub render: Option<Callback<UserProfile, Html>>,
}

#[function_component]
pub fn RequireAuth(props: &RequireAuthProps) -> Html {
    let Some(user_profile) = use_require_auth() else {
        return login_prompt();
    };

    if let Some(render) = &props.render {
        return render.emit(user_profile);
    }

    html! {
        <>
            {for props.children.iter()}
        </>
    }
}
