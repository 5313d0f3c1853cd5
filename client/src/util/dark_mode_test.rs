#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::state::theme::{THEME_STORAGE_KEY, ThemePreference};

#[test]
fn storage_is_unavailable_in_non_hydrate_tests() {
    assert_eq!(LocalStorageStore.get(THEME_STORAGE_KEY), Err(StoreError::Unavailable));
    assert_eq!(LocalStorageStore.set(THEME_STORAGE_KEY, "dark"), Err(StoreError::Unavailable));
}

#[test]
fn color_scheme_has_no_answer_in_non_hydrate_tests() {
    assert_eq!(MediaColorScheme.prefers_dark(), None);
}

#[test]
fn browser_controller_fails_open_to_light() {
    let controller = browser_controller();
    assert_eq!(controller.initial_preference(), ThemePreference::Light);
    assert_eq!(controller.toggle(ThemePreference::Light), ThemePreference::Dark);
}

#[test]
fn markers_are_noop_but_callable() {
    let controller = browser_controller();
    controller.apply(ThemePreference::Dark);
    controller.apply(ThemePreference::Light);
}

#[test]
fn storage_op_reports_matching_error_variant() {
    assert_eq!(StorageOp::Read.error("denied".into()), StoreError::Read("denied".into()));
    assert_eq!(StorageOp::Write.error("denied".into()), StoreError::Write("denied".into()));
}

#[test]
fn write_failures_are_not_reported_as_reads() {
    let message = StorageOp::Write.error("QuotaExceededError".into()).to_string();
    assert!(message.contains("write"), "{message}");
}

#[test]
fn boot_script_reads_the_persisted_key_and_host_scheme() {
    let script = theme_boot_script();
    assert!(script.contains(&format!("getItem(\"{THEME_STORAGE_KEY}\")")));
    assert!(script.contains("(prefers-color-scheme: dark)"));
    assert!(script.contains("t===\"dark\""));
}

#[test]
fn boot_script_fails_open_and_balances_braces() {
    let script = theme_boot_script();
    assert!(script.contains("catch(e){}"));
    assert_eq!(script.matches('{').count(), script.matches('}').count());
    assert_eq!(script.matches('(').count(), script.matches(')').count());
    assert!(!script.contains('<'), "script must not break out of its tag");
}
