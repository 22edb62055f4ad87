//! Theme-aware brand logo.

#[cfg(test)]
#[path = "brand_logo_test.rs"]
mod brand_logo_test;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::state::ui::{Theme, UiState};
use crate::util::assets::asset_url;

/// Logo drawn for dark backgrounds.
pub const DARK_LOGO: &str = "logo-01.png";
/// Logo drawn for light backgrounds.
pub const LIGHT_LOGO: &str = "logo-02.png";

#[must_use]
pub fn logo_file(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => DARK_LOGO,
        Theme::Light => LIGHT_LOGO,
    }
}

/// Brand logo that swaps image with the active theme.
#[component]
pub fn BrandLogo(#[prop(default = 32)] size: u32, #[prop(optional, into)] class: String) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let base_path = expect_context::<ClientConfig>().base_path;
    let src = move || asset_url(&base_path, logo_file(ui.get().theme));

    view! {
        <img
            class=format!("brand-logo {class}")
            src=src
            alt="Dashboard"
            width=size
            height=size
        />
    }
}
