use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex};

use leptos::prelude::Owner;

use super::*;

// =============================================================
// Fakes
// =============================================================

/// Shared map so a second controller over a clone simulates a page reload.
#[derive(Clone, Default)]
struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
    broken: bool,
}

impl MemoryStore {
    fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.values.lock().unwrap().insert(key.to_owned(), value.to_owned());
        store
    }

    fn broken() -> Self {
        Self { broken: true, ..Self::default() }
    }

    fn raw(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.broken {
            return Err(StoreError::Read("SecurityError".into()));
        }
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.broken {
            return Err(StoreError::Write("QuotaExceededError".into()));
        }
        self.values.lock().unwrap().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

struct FixedScheme(Option<bool>);

impl ColorSchemeQuery for FixedScheme {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }
}

/// Clones share one set, so a test can keep a handle on the root classes.
#[derive(Clone, Default)]
struct ClassList(Arc<Mutex<BTreeSet<String>>>);

impl ClassList {
    fn snapshot(&self) -> Vec<String> {
        self.0.lock().unwrap().iter().cloned().collect()
    }
}

impl ThemeMarkers for ClassList {
    fn add(&self, marker: &str) {
        self.0.lock().unwrap().insert(marker.to_owned());
    }

    fn remove(&self, marker: &str) {
        self.0.lock().unwrap().remove(marker);
    }
}

fn controller(store: MemoryStore, dark: Option<bool>) -> ThemeController<MemoryStore, FixedScheme, ClassList> {
    ThemeController::new(store, FixedScheme(dark), ClassList::default())
}

const BOTH: [ThemePreference; 2] = [ThemePreference::Light, ThemePreference::Dark];

// =============================================================
// ThemePreference
// =============================================================

#[test]
fn preference_default_is_light() {
    assert_eq!(ThemePreference::default(), ThemePreference::Light);
}

#[test]
fn preference_literals_match_storage_and_markers() {
    assert_eq!(ThemePreference::Light.as_str(), "light");
    assert_eq!(ThemePreference::Dark.to_string(), "dark");
}

#[test]
fn preference_parse_rejects_unknown_literal() {
    assert_eq!("dark".parse::<ThemePreference>(), Ok(ThemePreference::Dark));
    assert_eq!("Dark".parse::<ThemePreference>(), Err(ThemeParseError("Dark".into())));
}

#[test]
fn from_persisted_treats_garbage_as_light() {
    assert_eq!(ThemePreference::from_persisted("true"), ThemePreference::Light);
    assert_eq!(ThemePreference::from_persisted("dark"), ThemePreference::Dark);
}

// =============================================================
// initial_preference
// =============================================================

#[test]
fn initial_returns_persisted_value_regardless_of_host() {
    for p in BOTH {
        for host in [Some(true), Some(false), None] {
            let c = controller(MemoryStore::with(THEME_STORAGE_KEY, p.as_str()), host);
            assert_eq!(c.initial_preference(), p, "persisted {p}, host {host:?}");
        }
    }
}

#[test]
fn initial_without_persisted_follows_host_scheme() {
    assert_eq!(controller(MemoryStore::default(), Some(true)).initial_preference(), ThemePreference::Dark);
    assert_eq!(controller(MemoryStore::default(), Some(false)).initial_preference(), ThemePreference::Light);
}

#[test]
fn initial_treats_empty_persisted_value_as_absent() {
    let c = controller(MemoryStore::with(THEME_STORAGE_KEY, ""), Some(true));
    assert_eq!(c.initial_preference(), ThemePreference::Dark);
}

#[test]
fn initial_fails_open_to_light_when_query_unavailable() {
    assert_eq!(controller(MemoryStore::default(), None).initial_preference(), ThemePreference::Light);
}

#[test]
fn initial_fails_open_to_light_when_storage_broken() {
    assert_eq!(controller(MemoryStore::broken(), Some(true)).initial_preference(), ThemePreference::Light);
}

// =============================================================
// toggle
// =============================================================

#[test]
fn toggle_returns_inverse_and_persists_it() {
    for p in BOTH {
        let store = MemoryStore::default();
        let c = controller(store.clone(), Some(false));
        let next = c.toggle(p);
        assert_eq!(next, p.inverse());
        assert_eq!(store.raw(THEME_STORAGE_KEY).as_deref(), Some(next.as_str()));

        let reloaded = controller(store, Some(p.is_dark()));
        assert_eq!(reloaded.initial_preference(), next);
    }
}

#[test]
fn toggle_twice_is_identity() {
    let c = controller(MemoryStore::default(), None);
    for p in BOTH {
        assert_eq!(c.toggle(c.toggle(p)), p);
    }
}

#[test]
fn toggle_still_flips_when_storage_broken() {
    let c = controller(MemoryStore::broken(), None);
    assert_eq!(c.toggle(ThemePreference::Light), ThemePreference::Dark);
}

// =============================================================
// apply
// =============================================================

#[test]
fn apply_is_idempotent() {
    let c = controller(MemoryStore::default(), None);
    c.apply(ThemePreference::Dark);
    c.apply(ThemePreference::Dark);
    assert_eq!(c.markers().snapshot(), vec!["dark".to_owned()]);
}

#[test]
fn apply_after_toggles_leaves_single_marker() {
    let c = controller(MemoryStore::default(), None);
    let mut current = ThemePreference::Light;
    c.apply(current);
    for _ in 0..5 {
        current = c.toggle(current);
        c.apply(current);
        assert_eq!(c.markers().snapshot(), vec![current.as_str().to_owned()]);
    }
}

#[test]
fn apply_does_not_disturb_unrelated_classes() {
    let c = controller(MemoryStore::default(), None);
    c.markers().add("no-js");
    c.apply(ThemePreference::Light);
    assert_eq!(c.markers().snapshot(), vec!["light".to_owned(), "no-js".to_owned()]);
}

// =============================================================
// ThemeContext
// =============================================================

type FakeContext = ThemeContext<MemoryStore, FixedScheme, ClassList>;

fn context(store: MemoryStore, dark: Option<bool>, classes: ClassList) -> FakeContext {
    ThemeContext::new(ThemeController::new(store, FixedScheme(dark), classes))
}

#[test]
fn context_starts_light_until_initialized() {
    Owner::new().with(|| {
        let ctx = context(MemoryStore::with(THEME_STORAGE_KEY, "dark"), None, ClassList::default());
        assert_eq!(ctx.preference.get_untracked(), ThemePreference::Light);
    });
}

#[test]
fn context_initialize_loads_persisted_preference() {
    Owner::new().with(|| {
        let ctx = context(MemoryStore::with(THEME_STORAGE_KEY, "dark"), Some(false), ClassList::default());
        ctx.initialize();
        assert_eq!(ctx.preference.get_untracked(), ThemePreference::Dark);
    });
}

#[test]
fn context_initialize_falls_back_to_host_scheme() {
    Owner::new().with(|| {
        let ctx = context(MemoryStore::default(), Some(true), ClassList::default());
        ctx.initialize();
        assert!(ctx.preference.get_untracked().is_dark());
    });
}

#[test]
fn context_toggle_keeps_signal_and_store_in_step() {
    Owner::new().with(|| {
        let store = MemoryStore::default();
        let ctx = context(store.clone(), Some(false), ClassList::default());
        ctx.initialize();
        for _ in 0..3 {
            ctx.toggle();
            let stored = store.raw(THEME_STORAGE_KEY).expect("toggle persists");
            assert_eq!(stored, ctx.preference.get_untracked().as_str());
        }
    });
}

#[test]
fn context_sync_markers_follows_signal() {
    Owner::new().with(|| {
        let classes = ClassList::default();
        let ctx = context(MemoryStore::default(), None, classes.clone());
        ctx.sync_markers();
        assert_eq!(classes.snapshot(), vec!["light".to_owned()]);

        ctx.toggle();
        ctx.sync_markers();
        assert_eq!(classes.snapshot(), vec!["dark".to_owned()]);
    });
}
