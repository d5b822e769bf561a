use leptos::prelude::*;
use shared::CONFIG;

use crate::api;
use crate::components::{AddressForm, FloatingObjects, GlitchTitle};

/// Landing page: decorative background plus the address capture form.
#[component]
pub fn HomePage() -> impl IntoView {
    let submit = Callback::new(|address: String| {
        if let Err(err) = api::submit_address(&address) {
            web_sys::console::error_1(&format!("Submission failed: {err}").into());
        }
    });

    view! {
        <div class="container">
            <div class="cyber-grid"></div>
            <FloatingObjects />
            <GlitchTitle text=CONFIG.name />
            <div class="form-container glass-morphism">
                <h2 class="subtitle">{CONFIG.tagline}</h2>
                <AddressForm on_submit=submit />
            </div>
            <footer class="site-footer">
                <span class="network-tag">{CONFIG.network}</span>
                <a href=CONFIG.links.pump_fun target="_blank" rel="noopener noreferrer">
                    "pump.fun ↗"
                </a>
                <a
                    href=format!("https://x.com/{}", CONFIG.contact.twitter)
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    "@" {CONFIG.contact.twitter}
                </a>
            </footer>
        </div>
    }
}
