//! Post-page image decoration.
//!
//! Tags every image inside the post body with the marker classes the
//! zoom-lightbox widget picks up. One-shot pass over the images present at
//! call time; images injected later stay undecorated.

use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::dom;
use crate::error::InitError;

/// Id of the post body container.
pub const POST_CONTENT_ID: &str = "post-content";

/// Marker class enabling the zoom-lightbox interaction.
pub const LIGHTBOX_CLASS: &str = "materialboxed";

/// Marker class applying the drop-shadow style.
pub const SHADOW_CLASS: &str = "z-depth-4";

/// Outcome of one decoration pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "count", rename_all = "snake_case")]
pub enum DecorateOutcome {
    /// All images found under the container were tagged.
    Decorated(u32),
    /// No container with the given id exists; benign skip.
    ContainerMissing,
}

/// Tag every `img` under the container with both marker classes.
///
/// `classList` additions are idempotent, so repeated passes leave each
/// marker present exactly once.
pub fn decorate_post_images(container_id: &str) -> Result<DecorateOutcome, InitError> {
    let Some(container) = dom::element_by_id(container_id) else {
        web_sys::console::warn_1(
            &format!("[Init] No #{container_id} container, skipping image decoration").into(),
        );
        return Ok(DecorateOutcome::ContainerMissing);
    };

    let images = container
        .query_selector_all("img")
        .map_err(|e| InitError::dom(&e))?;
    for i in 0..images.length() {
        let Some(node) = images.item(i) else { continue };
        if let Ok(el) = node.dyn_into::<Element>() {
            el.class_list()
                .add_2(LIGHTBOX_CLASS, SHADOW_CLASS)
                .map_err(|e| InitError::dom(&e))?;
        }
    }

    web_sys::console::log_1(
        &format!("[Init] Decorated {} post image(s)", images.length()).into(),
    );
    Ok(DecorateOutcome::Decorated(images.length()))
}
