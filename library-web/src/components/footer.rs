//! Site footer

use leptos::prelude::*;
use leptos_router::components::A;
use lib_client::state::nav::{footer_links, BRAND};

use crate::utils::constants::{
    CONTACT_CITY, CONTACT_EMAIL, CONTACT_PHONE, CONTACT_PHONE_HREF, CONTACT_STREET, FOOTER_BLURB, FOOTER_HOURS,
};
use crate::utils::dom::current_year;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-grid">
                <div>
                    <div class="footer-brand">
                        <span class="brand-glyph">"📖"</span>
                        <span>{BRAND}</span>
                    </div>
                    <p class="footer-blurb">{FOOTER_BLURB}</p>
                </div>
                <div>
                    <h3>"Quick Links"</h3>
                    <ul>
                        {footer_links()
                            .into_iter()
                            .map(|(label, href)| view! { <li><A href=href>{label}</A></li> })
                            .collect_view()}
                    </ul>
                </div>
                <div>
                    <h3>"Contact"</h3>
                    <ul>
                        <li>{CONTACT_STREET}</li>
                        <li>{CONTACT_CITY}</li>
                        <li><a href=CONTACT_PHONE_HREF>{CONTACT_PHONE}</a></li>
                        <li><a href=format!("mailto:{}", CONTACT_EMAIL)>{CONTACT_EMAIL}</a></li>
                    </ul>
                </div>
                <div>
                    <h3>"Hours"</h3>
                    <ul>
                        {FOOTER_HOURS.iter().map(|line| view! { <li>{*line}</li> }).collect_view()}
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{format!("© {} {}. All rights reserved.", current_year(), BRAND)}</p>
            </div>
        </footer>
    }
}
