//! Text input that only commits valid numeric text.
//!
//! Every keystroke is run through `calculate::validate`. Accepted text goes to
//! `on_change`; rejected text is reverted in the DOM and the reason is shown
//! under the field. The committed value never sees rejected input.

use calculate::{NumericText, ValidationError, validate};
use leptos::prelude::*;

#[component]
pub fn NumericInput(
    #[prop(into)] value: Signal<String>,
    on_change: Callback<NumericText>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] name: &'static str,
) -> impl IntoView {
    let error = RwSignal::new(None::<ValidationError>);

    view! {
        <input
            class="numeric-input"
            class:numeric-input--invalid=move || error.get().is_some()
            type="text"
            inputmode="decimal"
            name=name
            placeholder=placeholder
            aria-invalid=move || if error.get().is_some() { "true" } else { "false" }
            prop:value=move || value.get()
            on:input=move |ev| {
                let candidate = event_target_value(&ev);
                match validate(&candidate) {
                    Ok(text) => {
                        error.set(None);
                        on_change.run(text);
                    }
                    Err(e) => {
                        error.set(Some(e));
                        // Put the last accepted text back into the element.
                        #[cfg(feature = "csr")]
                        event_target::<web_sys::HtmlInputElement>(&ev)
                            .set_value(&value.get_untracked());
                    }
                }
            }
        />
        {move || {
            error
                .get()
                .map(|e| view! { <p class="numeric-input__error" role="alert">{e.to_string()}</p> })
        }}
    }
}
