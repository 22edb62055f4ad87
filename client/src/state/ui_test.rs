use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_theme_is_light() {
    let state = UiState::default();
    assert_eq!(state.theme, Theme::Light);
}

#[test]
fn ui_state_default_menu_expanded() {
    assert!(!UiState::default().menu_collapsed);
}

#[test]
fn theme_from_dark_mode_flag() {
    assert_eq!(Theme::from_dark_mode(true), Theme::Dark);
    assert_eq!(Theme::from_dark_mode(false), Theme::Light);
}
