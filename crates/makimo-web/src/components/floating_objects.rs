use leptos::prelude::*;
use web_sys::window;

use crate::decor;

/// Check if user prefers reduced motion
fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Background layer of drifting shapes. Resampled on every mount.
#[component]
pub fn FloatingObjects() -> impl IntoView {
    let field = decor::floating_field(js_sys::Math::random);
    let animate = !prefers_reduced_motion();

    view! {
        <div class="floating-objects">
            {field
                .into_iter()
                .map(|object| {
                    let mut class = object.css_class();
                    if !animate {
                        class.push_str(" still");
                    }
                    view! { <div class=class style=object.inline_style()></div> }
                })
                .collect_view()}
        </div>
    }
}
