use super::*;

#[test]
fn nav_state_default_menu_closed() {
    assert!(!NavState::default().mobile_menu_open);
}

#[test]
fn toggle_menu_flips_open_flag() {
    let mut state = NavState::default();
    state.toggle_menu();
    assert!(state.mobile_menu_open);
    state.toggle_menu();
    assert!(!state.mobile_menu_open);
}

#[test]
fn close_menu_is_idempotent() {
    let mut state = NavState { mobile_menu_open: true };
    state.close_menu();
    state.close_menu();
    assert_eq!(state, NavState::default());
}

#[test]
fn section_picked_closes_menu_when_target_found() {
    let mut state = NavState { mobile_menu_open: true };
    state.section_picked(true);
    assert!(!state.mobile_menu_open);
}

#[test]
fn section_picked_keeps_menu_open_when_target_missing() {
    let mut state = NavState { mobile_menu_open: true };
    state.section_picked(false);
    assert!(state.mobile_menu_open);
}
