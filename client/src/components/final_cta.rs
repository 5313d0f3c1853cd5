use leptos::prelude::*;

use crate::components::join_link::{JoinLink, JoinSize};
use crate::content::{CTA_BODY, CTA_HEADING};

/// Closing call-to-action above the footer.
#[component]
pub fn FinalCta() -> impl IntoView {
    view! {
        <section class="section section--cta">
            <div class="container cta">
                <h2 class="section__heading">{CTA_HEADING}</h2>
                <p class="cta__body">{CTA_BODY}</p>
                <JoinLink size=JoinSize::Large/>
            </div>
        </section>
    }
}
