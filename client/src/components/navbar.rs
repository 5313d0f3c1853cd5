//! Fixed top navigation with desktop and collapsible mobile variants.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both variants scroll through the same `ScrollNavigator`. The mobile
//! variant owns a local `NavState` and closes its menu after a section is
//! picked.

use leptos::prelude::*;

use crate::components::icons::{CloseIcon, MenuIcon};
use crate::components::join_link::{JoinLink, JoinSize};
use crate::components::logo::Logo;
use crate::components::theme_toggle::ThemeToggle;
use crate::content::SectionId;
use crate::state::nav::NavState;
use crate::util::scroll::document_navigator;

/// Navbar shell holding both layout variants.
#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <header class="navbar">
            <DesktopNav/>
            <MobileNav/>
        </header>
    }
}

#[component]
fn DesktopNav() -> impl IntoView {
    let navigator = document_navigator();

    view! {
        <nav class="navbar__desktop" aria-label="Primary">
            <Logo class="logo navbar__logo"/>
            <div class="navbar__sections">
                {SectionId::ALL
                    .into_iter()
                    .map(|section| {
                        view! {
                            <SectionButton
                                section=section
                                on_pick=move || {
                                    navigator.scroll_to_section(section);
                                }
                            />
                        }
                    })
                    .collect_view()}
            </div>
            <div class="navbar__actions">
                <ThemeToggle/>
                <JoinLink/>
            </div>
        </nav>
    }
}

#[component]
fn MobileNav() -> impl IntoView {
    let navigator = document_navigator();
    let nav = RwSignal::new(NavState::default());
    let open = move || nav.get().mobile_menu_open;

    view! {
        <nav class="navbar__mobile" aria-label="Primary (mobile)">
            <div class="navbar__mobile-header">
                <Logo class="logo logo--small navbar__logo"/>
                <div class="navbar__actions">
                    <ThemeToggle/>
                    <button
                        class="icon-btn navbar__menu-btn"
                        on:click=move |_| nav.update(NavState::toggle_menu)
                        aria-expanded=move || open().to_string()
                        aria-label="Toggle menu"
                    >
                        <Show when=open fallback=|| view! { <MenuIcon/> }>
                            <CloseIcon/>
                        </Show>
                    </button>
                </div>
            </div>

            <Show when=open>
                <div class="navbar__mobile-menu">
                    {SectionId::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <SectionButton
                                    section=section
                                    block=true
                                    on_pick=move || {
                                        let found = navigator.scroll_to_section(section);
                                        nav.update(|n| n.section_picked(found));
                                    }
                                />
                            }
                        })
                        .collect_view()}
                    <div class="navbar__mobile-join">
                        <JoinLink size=JoinSize::Block/>
                    </div>
                </div>
            </Show>
        </nav>
    }
}

/// Accent-colored button scrolling to one section.
#[component]
fn SectionButton(
    section: SectionId,
    #[prop(optional)] block: bool,
    on_pick: impl Fn() + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <button
            class=format!("section-btn section-btn--{}", section.accent())
            class:section-btn--block=block
            on:click=move |_| on_pick()
        >
            {section.label()}
        </button>
    }
}
