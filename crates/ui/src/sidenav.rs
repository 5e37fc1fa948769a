//! Materialize widget activation: the document-wide auto-init scan and the
//! slide-out category drawer.
//!
//! The widget behavior itself is owned by the Materialize bundle the page
//! loads as a global `M`; this module only drives its entry points.

use js_sys::{Object, Reflect};
use serde::Serialize;

use crate::dom;
use crate::error::InitError;

/// Id of the category drawer container present on theme pages.
pub const CATEGORY_DRAWER_ID: &str = "category";

/// The drawer slides in from the right edge of the viewport.
const DRAWER_EDGE: &str = "right";

/// Outcome of one drawer activation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SidenavOutcome {
    /// `M.Sidenav.init` was called on the target element.
    Activated,
    /// No element with the target id exists; benign skip.
    TargetMissing,
    /// The document is still parsing; activation is scheduled for
    /// `DOMContentLoaded` and its outcome is not known yet.
    Deferred,
}

/// Run the bundle's document scan, `M.AutoInit()`, which activates every
/// declaratively-marked widget (tooltips, collapsibles, ...) in one pass.
/// Targeted activations like the drawer come after it.
pub fn auto_init_widgets() -> Result<(), InitError> {
    let m = dom::global_object("M")?;
    let auto_init = dom::member_function(&m, "AutoInit", "M.AutoInit")?;
    auto_init.call0(&m).map_err(|e| InitError::dom(&e))?;

    web_sys::console::log_1(&"[Init] Declarative widgets scanned".into());
    Ok(())
}

/// Activate drawer behavior on the element with id `target_id`.
///
/// A missing target is a skip, not an error. A missing or non-callable
/// `M.Sidenav.init` is an error: the page failed to load its widget bundle.
pub fn activate_drawer(target_id: &str) -> Result<SidenavOutcome, InitError> {
    let Some(target) = dom::element_by_id(target_id) else {
        web_sys::console::log_1(
            &format!("[Init] No #{target_id} drawer target, skipping sidenav").into(),
        );
        return Ok(SidenavOutcome::TargetMissing);
    };

    let m = dom::global_object("M")?;
    let sidenav = Reflect::get(&m, &"Sidenav".into()).map_err(|e| InitError::dom(&e))?;
    if sidenav.is_undefined() || sidenav.is_null() {
        return Err(InitError::MissingGlobal("M.Sidenav"));
    }
    let init = dom::member_function(&sidenav, "init", "M.Sidenav.init")?;

    let options = Object::new();
    Reflect::set(&options, &"edge".into(), &DRAWER_EDGE.into())
        .map_err(|e| InitError::dom(&e))?;
    init.call2(&sidenav, &target, &options)
        .map_err(|e| InitError::dom(&e))?;

    web_sys::console::log_1(&format!("[Init] Sidenav active on #{target_id}").into());
    Ok(SidenavOutcome::Activated)
}
