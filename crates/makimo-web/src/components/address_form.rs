use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::address::is_valid_address;

/// Form state: the typed address and whether the last submit passed.
///
/// Kept as a plain struct behind one signal so the transition rules can
/// be exercised without a browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    address: String,
    is_valid: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            address: String::new(),
            is_valid: true,
        }
    }
}

impl FormState {
    /// Every keystroke overwrites the address and clears any error.
    pub fn input(&mut self, value: impl Into<String>) {
        self.address = value.into();
        self.is_valid = true;
    }

    /// Evaluate the current address. A passing submit yields the address
    /// for the submission pipeline and leaves the form untouched; a
    /// failing one latches the error flag until the next input.
    pub fn submit(&mut self) -> Option<String> {
        if is_valid_address(&self.address) {
            Some(self.address.clone())
        } else {
            self.is_valid = false;
            None
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }
}

/// Address capture form. `on_submit` is the submission collaborator; it
/// only runs once the length check passes.
#[component]
pub fn AddressForm(#[prop(into)] on_submit: Callback<String>) -> impl IntoView {
    let state = RwSignal::new(FormState::default());

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let accepted = state.try_update(|s| s.submit()).flatten();
        if let Some(address) = accepted {
            on_submit.run(address);
        }
    };

    view! {
        <form class="cyber-form" on:submit=handle_submit>
            <div class="input-group">
                <input
                    type="text"
                    class="cyber-input"
                    placeholder="Enter Solana Address"
                    prop:value=move || state.with(|s| s.address().to_string())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.input(value));
                    }
                    style:border-color=move || {
                        if state.with(|s| s.is_valid()) {
                            "var(--cyber-blue)"
                        } else {
                            "var(--neon-pink)"
                        }
                    }
                />
                {move || {
                    (!state.with(|s| s.is_valid())).then(|| {
                        view! {
                            <p class="error-message">"Please enter a valid Solana address"</p>
                        }
                    })
                }}
            </div>
            <button type="submit" class="submit-btn">
                <span class="btn-text">"Generate VTuber"</span>
                <div class="btn-glow"></div>
            </button>
        </form>
    }
}
