use std::rc::Rc;

use payloads::{ClientError, DisplayExhibition, Matchers, display};
use yew::prelude::*;

use super::{FetchHookReturn, use_fetch};
use crate::get_api_client;

pub type ExhibitionsHookReturn =
    FetchHookReturn<Vec<DisplayExhibition>, Rc<ClientError>>;

/// Exhibitions whose category is in `matchers` (all of them when empty),
/// normalized for display.
///
/// The whole catalog is requested every time and filtered here. Errors are
/// kept exactly as the client returned them, so callers can tell a 401 from
/// a network failure.
#[hook]
pub fn use_exhibitions(matchers: Matchers) -> ExhibitionsHookReturn {
    use_fetch(matchers, |matchers| async move {
        let raw = match get_api_client().list_exhibitions().await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(status = ?e.status(), "failed to load exhibitions: {e}");
                return Err(Rc::new(e));
            }
        };
        let exhibitions = display::select(&raw, &matchers);
        tracing::debug!(
            fetched = raw.len(),
            shown = exhibitions.len(),
            "exhibitions loaded"
        );
        Ok(exhibitions)
    })
}
