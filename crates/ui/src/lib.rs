//! nightfall-theme page initialization.
//!
//! Browser-side wiring for the theme's page widgets: the widget bundle's
//! declarative auto-init scan, the slide-out category drawer, the decorative
//! particle background, and the post-page image lightbox markers. The widgets
//! themselves live in the JS bundles the page loads (`M`, `Particles`); this
//! crate configures and activates them.
//!
//! The host page calls the exported `initializePage()` exactly once:
//!
//! ```javascript
//! import init, { initializePage } from './nightfall_theme_ui.js';
//! await init();
//! const report = initializePage();
//! ```
//!
//! There is no module-load side effect and no re-initialization path; every
//! lookup and every widget call happens once per invocation.

pub mod dom;
pub mod error;
pub mod particles;
pub mod post;
pub mod sidenav;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::InitError;
use crate::particles::{ParticleOptions, ParticlesOutcome};
use crate::post::DecorateOutcome;
use crate::sidenav::SidenavOutcome;

/// Per-routine outcomes of one `initializePage()` call.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct InitReport {
    pub sidenav: SidenavOutcome,
    pub particles: ParticlesOutcome,
    pub post_images: DecorateOutcome,
}

/// Page entry point, invoked once by the host page after module init.
///
/// Returns the [`InitReport`] as a plain JS object.
#[wasm_bindgen(js_name = initializePage)]
pub fn initialize_page() -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();
    let report = run_initializers()?;
    serde_wasm_bindgen::to_value(&report).map_err(|e| InitError::from(e).into())
}

/// One pass over the routines, in page order: the widget bundle's
/// document-wide auto-init scan, then the particle field, then post-image
/// decoration, then the drawer. The drawer target sits late in the document,
/// so its activation is deferred until the document has parsed; the others
/// expect their targets to precede the script tag and run immediately.
pub fn run_initializers() -> Result<InitReport, InitError> {
    sidenav::auto_init_widgets()?;

    let particles = particles::activate_particles(&ParticleOptions::background())?;

    // A page without a post body is a benign skip; it no longer aborts the
    // routines that follow.
    let post_images = post::decorate_post_images(post::POST_CONTENT_ID)?;

    let sidenav = if dom::document_parsed() {
        sidenav::activate_drawer(sidenav::CATEGORY_DRAWER_ID)?
    } else {
        dom::on_document_ready(|| {
            if let Err(err) = sidenav::activate_drawer(sidenav::CATEGORY_DRAWER_ID) {
                web_sys::console::error_1(&JsValue::from(err));
            }
        })?;
        SidenavOutcome::Deferred
    };

    Ok(InitReport {
        sidenav,
        particles,
        post_images,
    })
}
