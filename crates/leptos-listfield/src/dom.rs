//! Host Page Helpers
//!
//! Element lookup and listener wiring against the server-rendered page.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;

/// Look up an element by id and cast it to the expected type.
///
/// Returns `None` when the element is absent or of another type; callers
/// decide whether that disables one control or the whole widget.
pub(crate) fn element_by_id<E: JsCast>(id: &str) -> Option<E> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<E>()
        .ok()
}

/// Attach `handler` to `target` for the lifetime of the page.
///
/// The closure is leaked on purpose: widgets are bound once and never torn
/// down before navigation.
pub(crate) fn listen<E>(target: &web_sys::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let handler = Closure::<dyn FnMut(E)>::new(handler);
    let _ = target.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref());
    handler.forget();
}
