//! Club wordmark and the "Powered by Skool" mark.

use leptos::prelude::*;

use crate::content::SITE_NAME;
use crate::state::theme::use_theme;

/// Horizontal wordmark; palette follows the active theme.
#[component]
pub fn Logo(#[prop(default = "logo")] class: &'static str) -> impl IntoView {
    let theme = use_theme();

    view! {
        <span class=class class:logo--dark=move || theme.is_dark() aria-label=SITE_NAME>
            <span class="logo__mark">"AI"</span>
            <span class="logo__text">"Design Club"</span>
        </span>
    }
}

#[component]
pub fn SkoolLogo() -> impl IntoView {
    let theme = use_theme();

    view! {
        <span class="skool-logo" class:skool-logo--dark=move || theme.is_dark() aria-label="Skool">
            <span class="skool-logo__s">"s"</span>
            <span class="skool-logo__k">"k"</span>
            <span class="skool-logo__o1">"o"</span>
            <span class="skool-logo__o2">"o"</span>
            <span class="skool-logo__l">"l"</span>
        </span>
    }
}
