//! The single landing route composing every section in page order.

use leptos::prelude::*;

use crate::components::{
    about::About, features_grid::FeaturesGrid, final_cta::FinalCta, footer::Footer, hero::Hero, navbar::Navbar,
    value_proposition::ValueProposition,
};

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="page">
            <Navbar/>
            <main class="page__main">
                <Hero/>
                <ValueProposition/>
                <FeaturesGrid/>
                <About/>
                <FinalCta/>
            </main>
            <Footer/>
        </div>
    }
}
