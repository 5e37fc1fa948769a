use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element};

use crate::error::InitError;

/// Get document helper
pub fn get_document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// Option-returning element lookup by id
pub fn element_by_id(id: &str) -> Option<Element> {
    get_document().and_then(|doc| doc.get_element_by_id(id))
}

/// True once the document's structural parse has completed.
pub fn document_parsed() -> bool {
    get_document().is_some_and(|doc| doc.ready_state() != "loading")
}

/// Run `callback` once the document has parsed.
///
/// Runs synchronously when the document is already past `loading`, otherwise
/// defers to `DOMContentLoaded`.
pub fn on_document_ready(callback: impl FnOnce() + 'static) -> Result<(), InitError> {
    let doc = get_document().ok_or(InitError::MissingGlobal("document"))?;
    if doc.ready_state() != "loading" {
        callback();
        return Ok(());
    }
    defer_to_content_loaded(&doc, callback)
}

/// Attach a one-shot `DOMContentLoaded` listener running `callback`.
pub fn defer_to_content_loaded(
    doc: &Document,
    callback: impl FnOnce() + 'static,
) -> Result<(), InitError> {
    let cb = Closure::once(Box::new(callback) as Box<dyn FnOnce()>);
    doc.add_event_listener_with_callback("DOMContentLoaded", cb.as_ref().unchecked_ref())
        .map_err(|e| InitError::dom(&e))?;
    cb.forget();
    Ok(())
}

/// Resolve a widget object the page exposes on `window` (e.g. `M`).
pub fn global_object(name: &'static str) -> Result<JsValue, InitError> {
    let win = window().ok_or(InitError::MissingGlobal("window"))?;
    let obj = js_sys::Reflect::get(&win, &name.into()).map_err(|e| InitError::dom(&e))?;
    if obj.is_undefined() || obj.is_null() {
        return Err(InitError::MissingGlobal(name));
    }
    Ok(obj)
}

/// Resolve a function-valued member on a widget object. `qualified` names the
/// full path (e.g. `M.Sidenav.init`) for error reporting.
pub fn member_function(
    target: &JsValue,
    member: &str,
    qualified: &'static str,
) -> Result<js_sys::Function, InitError> {
    let value = js_sys::Reflect::get(target, &member.into()).map_err(|e| InitError::dom(&e))?;
    value
        .dyn_into::<js_sys::Function>()
        .map_err(|_| InitError::NotCallable(qualified))
}
