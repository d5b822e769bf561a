use leptos::prelude::*;

/// Glitch-styled page heading. The CSS layers two offset copies of the
/// text via the data-text attribute.
#[component]
pub fn GlitchTitle(#[prop(into)] text: String) -> impl IntoView {
    let data_text = text.clone();

    view! {
        <div class="glitch-container">
            <h1 class="title glitch" data-text=data_text>
                {text}
            </h1>
        </div>
    }
}
