//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::content::SITE_NAME;
use crate::pages::landing::LandingPage;
use crate::state::theme::ThemeContext;
use crate::util::dark_mode::{browser_controller, theme_boot_script};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="light">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                // Marks <html> dark/light before first paint; hydration re-applies the same value.
                <script inner_html=theme_boot_script()></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Installs the theme context and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    ThemeContext::new(browser_controller()).install();

    view! {
        <Stylesheet id="leptos" href="/pkg/design-club.css"/>
        <Link rel="preconnect" href="https://fonts.googleapis.com"/>
        <Link rel="stylesheet" href="https://fonts.googleapis.com/css2?family=Outfit:wght@400;500;700&display=swap"/>
        <Title text=SITE_NAME/>
        <Meta name="description" content="The free community where designers figure out AI tools together."/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
            </Routes>
        </Router>
    }
}
