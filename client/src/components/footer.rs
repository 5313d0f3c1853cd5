//! Compact centered footer with branding and a join link.

use leptos::prelude::*;

use crate::components::join_link::JoinLink;
use crate::components::logo::{Logo, SkoolLogo};
use crate::content::{FOOTER_JOIN_LABEL, FOOTER_POWERED_BY, SITE_NAME};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer__inner" role="contentinfo" aria-label=format!("{SITE_NAME} footer")>
                <div class="footer__brand">
                    <Logo class="logo logo--small"/>
                    <div class="footer__powered">
                        <span class="footer__powered-label">{FOOTER_POWERED_BY}</span>
                        <SkoolLogo/>
                    </div>
                </div>
                <JoinLink label=FOOTER_JOIN_LABEL/>
            </div>
        </footer>
    }
}
