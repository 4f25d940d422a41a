//! Who may open an exhibition, and where a click on a locked one leads.
//!
//! The gate never talks to the network. It reads the current viewer from a
//! [`ViewerSource`] and hands a route to a [`Navigate`]; both are small
//! traits so the decision can be exercised with plain fakes.

use std::rc::Rc;

use payloads::ExhibitionId;
use payloads::responses::UserProfile;
use yew::Callback;

use crate::{Route, State};

/// Read-only view of the signed-in viewer.
pub trait ViewerSource {
    fn current_viewer(&self) -> Option<&UserProfile>;

    fn is_authenticated(&self) -> bool {
        self.current_viewer().is_some()
    }
}

/// Something that can move the app to another route.
pub trait Navigate {
    fn navigate(&self, route: Route);
}

impl ViewerSource for State {
    fn current_viewer(&self) -> Option<&UserProfile> {
        self.current_user()
    }
}

impl<T: ViewerSource + ?Sized> ViewerSource for Rc<T> {
    fn current_viewer(&self) -> Option<&UserProfile> {
        (**self).current_viewer()
    }
}

impl Navigate for Callback<Route> {
    fn navigate(&self, route: Route) {
        self.emit(route);
    }
}

impl<T: Navigate + ?Sized> Navigate for &T {
    fn navigate(&self, route: Route) {
        (**self).navigate(route);
    }
}

/// Where activating a locked exhibition leads: its detail page for a
/// signed-in viewer, the login page for anyone else.
pub fn gate_target(authenticated: bool, id: &ExhibitionId) -> Route {
    if authenticated {
        Route::ExhibitionDetail { id: id.clone() }
    } else {
        Route::Login
    }
}

pub struct AccessGate<V, N> {
    viewer: V,
    navigator: N,
}

impl<V: ViewerSource, N: Navigate> AccessGate<V, N> {
    pub fn new(viewer: V, navigator: N) -> Self {
        Self { viewer, navigator }
    }

    pub fn target(&self, id: &ExhibitionId) -> Route {
        gate_target(self.viewer.is_authenticated(), id)
    }

    /// Navigate once, to [`AccessGate::target`].
    pub fn activate(&self, id: &ExhibitionId) {
        let route = self.target(id);
        tracing::debug!(exhibition = %id, ?route, "locked exhibition activated");
        self.navigator.navigate(route);
    }
}
