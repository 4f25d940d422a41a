use std::cell::RefCell;
use std::fmt::Display;
use std::future::Future;
use std::rc::Rc;
use yew::prelude::*;

use super::FetchState;

/// Identifies one fetch issued by a hook instance. Later fetches carry
/// larger tickets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

/// Hands out tickets for one hook instance, and stops accepting results
/// once the instance is torn down.
#[derive(Debug, Default)]
pub struct RequestSequence {
    issued: u64,
    retired: bool,
}

impl RequestSequence {
    pub fn issue(&mut self) -> RequestTicket {
        self.issued += 1;
        RequestTicket(self.issued)
    }

    pub fn retire(&mut self) {
        self.retired = true;
    }

    pub fn is_retired(&self) -> bool {
        self.retired
    }
}

pub enum FetchAction<T, E> {
    Start(RequestTicket),
    Resolve(RequestTicket, Result<T, E>),
}

/// Loading flag, last good data and last error, tracked independently so a
/// refetch shows stale data next to a loading indicator.
///
/// Only the most recently started fetch may resolve; anything older is
/// dropped without touching state, including the loading flag.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchLifecycle<T, E> {
    pub data: FetchState<T>,
    pub is_loading: bool,
    pub error: Option<E>,
    latest: Option<RequestTicket>,
}

impl<T, E> Default for FetchLifecycle<T, E> {
    fn default() -> Self {
        Self {
            data: FetchState::NotFetched,
            is_loading: false,
            error: None,
            latest: None,
        }
    }
}

impl<T, E> FetchLifecycle<T, E> {
    /// Apply an action, returning whether anything changed.
    pub fn apply(&mut self, action: FetchAction<T, E>) -> bool {
        match action {
            FetchAction::Start(ticket) => {
                self.latest = Some(ticket);
                self.is_loading = true;
                true
            }
            FetchAction::Resolve(ticket, result) => {
                if self.latest != Some(ticket) {
                    tracing::debug!(?ticket, "dropping superseded response");
                    return false;
                }
                match result {
                    Ok(data) => {
                        self.data = FetchState::Fetched(data);
                        self.error = None;
                    }
                    Err(e) => {
                        self.error = Some(e);
                    }
                }
                self.is_loading = false;
                true
            }
        }
    }
}

impl<T: Clone, E: Clone> Reducible for FetchLifecycle<T, E> {
    type Action = FetchAction<T, E>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

/// Generic fetch hook return type
pub struct FetchHookReturn<T, E = String> {
    pub data: FetchState<T>,
    pub is_loading: bool,
    pub error: Option<E>,
    pub refetch: Callback<()>,
}

impl<T: Clone, E: Display> FetchHookReturn<T, E> {
    /// Render based on fetch state with contextual loading/error messages.
    ///
    /// - No data + loading: "Loading {context}..."
    /// - No data + error: "Error loading {context}: ..."
    /// - Has data: `render_fn(data, is_loading, error)`, where `is_loading`
    ///   means a refetch is running and `error` comes from a failed refetch
    ///   (the data is from the last successful one)
    pub fn render<F>(&self, context: &str, render_fn: F) -> Html
    where
        F: Fn(&T, bool, Option<&E>) -> Html,
    {
        match self.data.as_ref() {
            None => {
                if self.is_loading {
                    html! {
                        <div class="text-center py-12">
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {format!("Loading {}...", context)}
                            </p>
                        </div>
                    }
                } else if let Some(error) = &self.error {
                    html! {
                        <div class="p-4 rounded-md bg-red-50 \
                                   dark:bg-red-900/20 border \
                                   border-red-200 dark:border-red-800">
                            <p class="text-sm text-red-700 \
                                      dark:text-red-400">
                                {format!("Error loading {}: {}", context, error)}
                            </p>
                        </div>
                    }
                } else {
                    // Before the first fetch has been scheduled
                    html! {}
                }
            }
            Some(data) => render_fn(data, self.is_loading, self.error.as_ref()),
        }
    }
}

/// Generic fetch hook composer.
///
/// Fetches on mount and whenever `deps` changes by value, passing the
/// current `deps` to `fetch_fn`. Requests are never cancelled; when several
/// overlap, only the one started last is allowed to land. Results arriving
/// after the component is gone are discarded.
///
/// # Example
///
/// ```rust,ignore
/// #[hook]
/// pub fn use_titles(matchers: Matchers) -> FetchHookReturn<Vec<String>> {
///     use_fetch(matchers, |matchers| async move {
///         let raw = get_api_client()
///             .list_exhibitions()
///             .await
///             .map_err(|e| e.to_string())?;
///         Ok(display::select(&raw, &matchers)
///             .into_iter()
///             .map(|exhibition| exhibition.title)
///             .collect())
///     })
/// }
/// ```
#[hook]
pub fn use_fetch<T, E, D, F, Fut>(deps: D, fetch_fn: F) -> FetchHookReturn<T, E>
where
    T: Clone + 'static,
    E: Clone + 'static,
    D: PartialEq + Clone + 'static,
    F: Fn(D) -> Fut + 'static,
    Fut: Future<Output = Result<T, E>> + 'static,
{
    let lifecycle = use_reducer(FetchLifecycle::<T, E>::default);
    let sequence: Rc<RefCell<RequestSequence>> =
        use_mut_ref(RequestSequence::default);

    let refetch = {
        let dispatcher = lifecycle.dispatcher();
        let sequence = sequence.clone();
        let fetch_fn = Rc::new(fetch_fn);

        use_callback(deps.clone(), move |_: (), deps: &D| {
            let ticket = sequence.borrow_mut().issue();
            dispatcher.dispatch(FetchAction::Start(ticket));

            let request = fetch_fn(deps.clone());
            let dispatcher = dispatcher.clone();
            let sequence = sequence.clone();

            yew::platform::spawn_local(async move {
                let result = request.await;
                if sequence.borrow().is_retired() {
                    return;
                }
                dispatcher.dispatch(FetchAction::Resolve(ticket, result));
            });
        })
    };

    // Auto-fetch on mount and when deps change
    {
        let refetch = refetch.clone();
        use_effect_with(deps, move |_| {
            refetch.emit(());
        });
    }

    // Stop accepting results on teardown
    use_effect_with((), move |_| {
        move || sequence.borrow_mut().retire()
    });

    FetchHookReturn {
        data: lifecycle.data.clone(),
        is_loading: lifecycle.is_loading,
        error: lifecycle.error.clone(),
        refetch: Callback::from(move |_| refetch.emit(())),
    }
}
