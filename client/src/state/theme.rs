//! Theme preference model and the controller that reads, applies, and
//! persists it.
//!
//! DESIGN
//! ======
//! `ThemeController` never touches the browser directly. Storage, the
//! color-scheme media query, and the document root are reached through the
//! `PreferenceStore`, `ColorSchemeQuery`, and `ThemeMarkers` seams so page
//! code gets web-sys adapters (`util::dark_mode`) and tests get in-memory
//! fakes.
//!
//! Every failure fails open to `ThemePreference::Light`; callers never see
//! an error.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use leptos::prelude::*;

use crate::util::dark_mode::{LocalStorageStore, MediaColorScheme, RootClassList};

/// Storage key holding the literal `"dark"` or `"light"`.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Binary display mode selected by the user or inferred from the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// Literal used both as the persisted value and the root marker class.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Interpret a persisted value. Anything other than `"dark"` reads as light.
    #[must_use]
    pub fn from_persisted(raw: &str) -> Self {
        raw.parse().unwrap_or_else(|e: ThemeParseError| {
            log::warn!("{e}; falling back to light theme");
            Self::Light
        })
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted theme literal that is neither `"dark"` nor `"light"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme value: {0:?}")]
pub struct ThemeParseError(pub String);

impl FromStr for ThemePreference {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeParseError(other.to_owned())),
        }
    }
}

// =============================================================================
// SEAMS
// =============================================================================

/// Errors surfaced by a `PreferenceStore`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No storage backend exists in this environment.
    #[error("preference storage unavailable")]
    Unavailable,

    #[error("preference read failed: {0}")]
    Read(String),

    #[error("preference write failed: {0}")]
    Write(String),
}

/// Synchronous string key/value persistence.
pub trait PreferenceStore {
    /// Return the stored value for `key`, or `None` when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` when the backend is missing or refuses the read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` when the backend is missing or refuses the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Host color-scheme preference.
pub trait ColorSchemeQuery {
    /// `Some(true)` when the host prefers dark, `None` when it cannot answer.
    fn prefers_dark(&self) -> Option<bool>;
}

/// Set of marker classes on the root presentation context.
pub trait ThemeMarkers {
    fn add(&self, marker: &str);
    fn remove(&self, marker: &str);
}

// =============================================================================
// CONTROLLER
// =============================================================================

/// Reads, applies, and persists the theme preference.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThemeController<S, Q, M> {
    store: S,
    query: Q,
    markers: M,
}

impl<S, Q, M> ThemeController<S, Q, M>
where
    S: PreferenceStore,
    Q: ColorSchemeQuery,
    M: ThemeMarkers,
{
    pub const fn new(store: S, query: Q, markers: M) -> Self {
        Self { store, query, markers }
    }

    /// Persisted preference if present, else the host color scheme, else light.
    pub fn initial_preference(&self) -> ThemePreference {
        match self.store.get(THEME_STORAGE_KEY) {
            Ok(Some(raw)) if !raw.is_empty() => return ThemePreference::from_persisted(&raw),
            Ok(_) => {}
            Err(e) => {
                log::warn!("{e}; using light theme");
                return ThemePreference::Light;
            }
        }

        match self.query.prefers_dark() {
            Some(true) => ThemePreference::Dark,
            Some(false) => ThemePreference::Light,
            None => {
                log::debug!("color-scheme query unavailable; using light theme");
                ThemePreference::Light
            }
        }
    }

    /// Leave exactly one of the `dark`/`light` markers on the root.
    pub fn apply(&self, preference: ThemePreference) {
        self.markers.remove(preference.inverse().as_str());
        self.markers.add(preference.as_str());
    }

    /// Return the inverse of `current`, persisting it first.
    pub fn toggle(&self, current: ThemePreference) -> ThemePreference {
        let next = current.inverse();
        if let Err(e) = self.store.set(THEME_STORAGE_KEY, next.as_str()) {
            log::warn!("{e}; theme change will not survive a reload");
        }
        next
    }

    pub fn markers(&self) -> &M {
        &self.markers
    }
}

// =============================================================================
// VIEW CONTEXT
// =============================================================================

/// Theme flag plus its controller, provided once at the app root.
///
/// The controller sits in a `StoredValue` so the context stays `Copy` for
/// any `Send + Sync` seams, browser adapters and test fakes alike.
pub struct ThemeContext<S: 'static, Q: 'static, M: 'static> {
    preference: RwSignal<ThemePreference>,
    controller: StoredValue<ThemeController<S, Q, M>>,
}

impl<S: 'static, Q: 'static, M: 'static> Clone for ThemeContext<S, Q, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: 'static, Q: 'static, M: 'static> Copy for ThemeContext<S, Q, M> {}

/// Context wired to the real browser, as provided by `App`.
pub type BrowserThemeContext = ThemeContext<LocalStorageStore, MediaColorScheme, RootClassList>;

impl<S, Q, M> ThemeContext<S, Q, M>
where
    S: PreferenceStore + Send + Sync + 'static,
    Q: ColorSchemeQuery + Send + Sync + 'static,
    M: ThemeMarkers + Send + Sync + 'static,
{
    pub fn new(controller: ThemeController<S, Q, M>) -> Self {
        Self { preference: RwSignal::new(ThemePreference::default()), controller: StoredValue::new(controller) }
    }

    /// Provide this context and wire the client-side effects.
    ///
    /// `initialize` runs once after hydration; `sync_markers` reruns on every
    /// preference change.
    pub fn install(self) {
        provide_context(self);
        Effect::new(move || self.initialize());
        Effect::new(move || self.sync_markers());
    }

    /// Load the initial preference into the signal. The only place it is derived.
    pub fn initialize(&self) {
        let initial = self.controller.with_value(ThemeController::initial_preference);
        self.preference.set(initial);
    }

    /// Apply the current preference to the root markers (tracked read).
    pub fn sync_markers(&self) {
        let current = self.preference.get();
        self.controller.with_value(|c| c.apply(current));
    }

    /// Reactive read of the current preference.
    pub fn preference(&self) -> ThemePreference {
        self.preference.get()
    }

    pub fn is_dark(&self) -> bool {
        self.preference().is_dark()
    }

    /// Flip the preference, persisting before the signal changes.
    pub fn toggle(&self) {
        let current = self.preference.get_untracked();
        let next = self.controller.with_value(|c| c.toggle(current));
        self.preference.set(next);
    }
}

/// Fetch the theme context provided by `App`.
pub fn use_theme() -> BrowserThemeContext {
    expect_context::<BrowserThemeContext>()
}
