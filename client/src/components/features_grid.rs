//! Two-column grid of what members get.

use leptos::prelude::*;

use crate::components::join_link::{JoinLink, JoinSize};
use crate::content::{FEATURES, FEATURES_HEADING, Feature, SectionId};

#[component]
pub fn FeaturesGrid() -> impl IntoView {
    view! {
        <section id=SectionId::Features.id() class="section section--features">
            <div class="container">
                <h2 class="section__heading section__heading--spaced">{FEATURES_HEADING}</h2>
                <div class="features">
                    {FEATURES.into_iter().map(|feature| view! { <FeatureCard feature=feature/> }).collect_view()}
                </div>
                <div class="section__cta">
                    <JoinLink size=JoinSize::Large/>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <article class="feature-card">
            <h3 class="feature-card__title">{feature.title}</h3>
            <p class="feature-card__description">{feature.description}</p>
        </article>
    }
}
