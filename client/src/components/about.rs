//! Founder bio with outbound profile links.

use leptos::prelude::*;

use crate::components::icons::{LinkIcon, YoutubeIcon};
use crate::content::{ABOUT_HEADING, ABOUT_PARAGRAPHS, PROFILE_LINKS, ProfileIcon, ProfileLink, SectionId};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=SectionId::About.id() class="section section--about">
            <div class="container">
                <h2 class="section__heading">{ABOUT_HEADING}</h2>
                <div class="about__bio">
                    {ABOUT_PARAGRAPHS.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}
                </div>
                <div class="about__links">
                    {PROFILE_LINKS.into_iter().map(|link| view! { <ProfileButton link=link/> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProfileButton(link: ProfileLink) -> impl IntoView {
    let icon = match link.icon {
        ProfileIcon::Youtube => view! { <YoutubeIcon/> }.into_any(),
        ProfileIcon::Link => view! { <LinkIcon/> }.into_any(),
    };

    view! {
        <a class="profile-btn" href=link.url target="_blank" rel="noopener noreferrer">
            {icon}
            <span>{link.label}</span>
        </a>
    }
}
