//! Browser adapters behind the theme controller seams.
//!
//! `localStorage`, `matchMedia("(prefers-color-scheme: dark)")`, and the
//! `<html>` class list. Requires a browser environment; without the
//! `hydrate` feature storage reports `Unavailable`, the media query has no
//! answer, and marker updates no-op.
//!
//! TRADE-OFFS
//! ==========
//! The adapters are zero-sized and look up `window()` on every call, so the
//! controller stays `Copy + Send + Sync` and can live in Leptos context
//! without wrapping web-sys handles.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::{ColorSchemeQuery, PreferenceStore, StoreError, THEME_STORAGE_KEY, ThemeController, ThemeMarkers};

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

pub type BrowserThemeController = ThemeController<LocalStorageStore, MediaColorScheme, RootClassList>;

/// Controller wired to the real browser.
pub const fn browser_controller() -> BrowserThemeController {
    ThemeController::new(LocalStorageStore, MediaColorScheme, RootClassList)
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

/// Storage operation a failure is reported against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
enum StorageOp {
    Read,
    Write,
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
impl StorageOp {
    fn error(self, detail: String) -> StoreError {
        match self {
            Self::Read => StoreError::Read(detail),
            Self::Write => StoreError::Write(detail),
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage(op: StorageOp) -> Result<web_sys::Storage, StoreError> {
    let window = web_sys::window().ok_or(StoreError::Unavailable)?;
    window
        .local_storage()
        .map_err(|e| op.error(format!("{e:?}")))?
        .ok_or(StoreError::Unavailable)
}

impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage(StorageOp::Read)?
                .get_item(key)
                .map_err(|e| StorageOp::Read.error(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StoreError::Unavailable)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage(StorageOp::Write)?
                .set_item(key, value)
                .map_err(|e| StorageOp::Write.error(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StoreError::Unavailable)
        }
    }
}

/// `window.matchMedia` color-scheme query.
#[derive(Clone, Copy, Debug, Default)]
pub struct MediaColorScheme;

impl ColorSchemeQuery for MediaColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()?
                .match_media(DARK_SCHEME_QUERY)
                .ok()
                .flatten()
                .map(|mq| mq.matches())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}

/// Class list of `document.documentElement`.
#[derive(Clone, Copy, Debug, Default)]
pub struct RootClassList;

#[cfg(feature = "hydrate")]
fn root_class_list() -> Option<web_sys::DomTokenList> {
    let el = web_sys::window()?.document()?.document_element()?;
    Some(el.class_list())
}

impl ThemeMarkers for RootClassList {
    fn add(&self, marker: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(classes) = root_class_list() {
                if let Err(e) = classes.add_1(marker) {
                    log::warn!("failed to add root class {marker:?}: {e:?}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = marker;
        }
    }

    fn remove(&self, marker: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(classes) = root_class_list() {
                if let Err(e) = classes.remove_1(marker) {
                    log::warn!("failed to remove root class {marker:?}: {e:?}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = marker;
        }
    }
}

/// Inline `<head>` script that sets the root marker before first paint.
///
/// Mirrors `ThemeController::initial_preference` so the server-rendered page
/// shows the right palette before hydration: an empty stored value counts as
/// absent, anything but `"dark"` reads as light, and storage errors keep the
/// light default.
pub fn theme_boot_script() -> String {
    format!(
        "(function(){{try{{var t=window.localStorage.getItem(\"{THEME_STORAGE_KEY}\");\
         var d=t?t===\"dark\":window.matchMedia(\"{DARK_SCHEME_QUERY}\").matches;\
         var c=document.documentElement.classList;\
         c.remove(d?\"light\":\"dark\");c.add(d?\"dark\":\"light\");}}catch(e){{}}}})();"
    )
}
