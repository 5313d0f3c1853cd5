//! Light/dark toggle shown in both navbar variants.

use leptos::prelude::*;

use crate::components::icons::{MoonIcon, SunIcon};
use crate::state::theme::use_theme;

/// Shows the sun while dark and the moon while light.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    view! {
        <button
            class="icon-btn theme-toggle"
            on:click=move |_| theme.toggle()
            title="Toggle dark mode"
            aria-label="Toggle dark mode"
        >
            <Show when=move || theme.is_dark() fallback=|| view! { <MoonIcon/> }>
                <SunIcon/>
            </Show>
        </button>
    }
}
