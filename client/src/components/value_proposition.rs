use leptos::prelude::*;

use crate::content::{SectionId, VALUE_HEADING, VALUE_PARAGRAPHS};

/// Community pitch; scroll target for the "Community" nav button.
#[component]
pub fn ValueProposition() -> impl IntoView {
    view! {
        <section id=SectionId::Community.id() class="section section--value">
            <div class="container">
                <h2 class="section__heading">{VALUE_HEADING}</h2>
                <div class="section__body section__body--centered">
                    {VALUE_PARAGRAPHS.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}
                </div>
            </div>
        </section>
    }
}
