//! Error taxonomy for the initialization layer.
//!
//! Converts into JavaScript `Error` objects carrying a `code` property so the
//! host page can branch without parsing messages.

use thiserror::Error;
use wasm_bindgen::prelude::*;

#[derive(Debug, Error)]
pub enum InitError {
    /// A page-global the theme depends on (`M`, `Particles`, `window`) is
    /// not available. The widget bundle failed to load before us.
    #[error("global `{0}` is not available")]
    MissingGlobal(&'static str),

    /// The widget entry point exists but is not a function.
    #[error("`{0}` is not callable")]
    NotCallable(&'static str),

    /// The widget configuration could not cross the JS boundary.
    #[error("configuration serialization failed: {0}")]
    Config(String),

    /// A DOM API call itself failed (distinct from "element not found",
    /// which is a benign skip, not an error).
    #[error("DOM call failed: {0}")]
    Dom(String),
}

impl InitError {
    /// Wrap a raw `JsValue` thrown by a DOM or widget call.
    pub fn dom(value: &JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"));
        Self::Dom(message)
    }

    const fn code(&self) -> &'static str {
        match self {
            Self::MissingGlobal(_) => "MISSING_GLOBAL",
            Self::NotCallable(_) => "NOT_CALLABLE",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Dom(_) => "DOM_ERROR",
        }
    }
}

impl From<serde_wasm_bindgen::Error> for InitError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<InitError> for JsValue {
    fn from(err: InitError) -> Self {
        let js_error = js_sys::Error::new(&err.to_string());
        js_sys::Reflect::set(&js_error, &"code".into(), &JsValue::from_str(err.code())).ok();
        js_error.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_global() {
        let err = InitError::MissingGlobal("Particles");
        assert_eq!(err.to_string(), "global `Particles` is not available");
    }

    #[test]
    fn test_codes_are_distinct() {
        let codes = [
            InitError::MissingGlobal("M").code(),
            InitError::NotCallable("M.Sidenav.init").code(),
            InitError::Config(String::new()).code(),
            InitError::Dom(String::new()).code(),
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
