//! "Join" call-to-action pointing at the community invite.

use leptos::prelude::*;

use crate::components::icons::ArrowRightIcon;
use crate::content::{DISCORD_INVITE_URL, JOIN_LABEL};

/// Button sizes used across the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum JoinSize {
    /// Navbar and footer.
    #[default]
    Compact,
    /// Features grid and final call-to-action.
    Large,
    /// Hero.
    Hero,
    /// Full-width entry in the mobile menu.
    Block,
}

impl JoinSize {
    const fn class(self) -> &'static str {
        match self {
            Self::Compact => "join join--compact",
            Self::Large => "join join--large",
            Self::Hero => "join join--hero",
            Self::Block => "join join--block",
        }
    }
}

/// Opens the invite in a new browsing context.
#[component]
pub fn JoinLink(#[prop(optional)] size: JoinSize, #[prop(default = JOIN_LABEL)] label: &'static str) -> impl IntoView {
    view! {
        <a class=size.class() href=DISCORD_INVITE_URL target="_blank" rel="noopener noreferrer">
            <span>{label}</span>
            <ArrowRightIcon class="join__arrow"/>
        </a>
    }
}
