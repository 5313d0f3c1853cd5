//! Headline, tagline, embedded walkthrough video, and the primary join link.

use leptos::prelude::*;

use crate::components::join_link::{JoinLink, JoinSize};
use crate::content::{HERO_HEADLINE, HERO_TAGLINE, VIDEO_EMBED_URL};
use crate::state::theme::use_theme;

#[component]
pub fn Hero() -> impl IntoView {
    let theme = use_theme();

    view! {
        <section class="hero">
            <div class="container hero__inner">
                <h1 class="hero__headline" class:hero__headline--dark=move || theme.is_dark()>
                    {HERO_HEADLINE}
                </h1>
                <p class="hero__tagline">{HERO_TAGLINE}</p>
                <div class="hero__video">
                    <div class="hero__video-frame">
                        <iframe
                            src=VIDEO_EMBED_URL
                            title="AI Design Club walkthrough"
                            allow="fullscreen"
                            allowfullscreen=""
                        ></iframe>
                    </div>
                </div>
                <div class="hero__cta">
                    <JoinLink size=JoinSize::Hero/>
                </div>
            </div>
        </section>
    }
}
