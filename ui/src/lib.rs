use payloads::{APIClient, ClientConfig, ExhibitionId};
use yew::prelude::*;
use yew_router::prelude::*;

pub mod access;
pub mod components;
pub mod hooks;
pub mod logs;
pub mod pages;
pub mod state;

pub use state::{AuthState, State};

use components::layout::Header;
use pages::{ExhibitionDetailPage, GalleryPage, LoginPage, NotFoundPage};

thread_local! {
    // The browser runs a single thread, so this is the one client for the
    // whole page. Clones share its connection pool and session signal.
    static API_CLIENT: APIClient = build_api_client();
}

fn build_api_client() -> APIClient {
    // Set at build time; otherwise the local development backend.
    let config = ClientConfig::from_env_value(option_env!("BACKEND_URL"));
    APIClient::from_config(&config).unwrap_or_else(|e| {
        tracing::error!("falling back to a bare http client: {e}");
        APIClient::new(config.address, Default::default())
    })
}

/// Handle to the global API client.
pub fn get_api_client() -> APIClient {
    API_CLIENT.with(APIClient::clone)
}

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Gallery,
    #[at("/login")]
    Login,
    #[at("/exhibitions/:id")]
    ExhibitionDetail { id: ExhibitionId },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Routes that only make sense with a signed-in viewer.
    pub fn is_members_only(&self) -> bool {
        matches!(self, Route::ExhibitionDetail { .. })
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <AppShell />
        </BrowserRouter>
    }
}

/// Everything that needs the router in scope.
#[function_component]
fn AppShell() -> Html {
    hooks::use_authentication();
    hooks::use_session_expiry();

    html! {
        <div class="min-h-screen bg-white dark:bg-neutral-900 text-neutral-900 dark:text-neutral-100">
            <Header />
            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <Switch<Route> render={switch} />
            </main>
        </div>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Gallery => html! { <GalleryPage /> },
        Route::Login => html! { <LoginPage /> },
        Route::ExhibitionDetail { id } => {
            html! { <ExhibitionDetailPage {id} /> }
        }
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
