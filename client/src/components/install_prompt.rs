//! "Add to Home Screen" instructions for iOS.

use leptos::prelude::*;

use crate::util::platform;

#[component]
pub fn InstallPrompt() -> impl IntoView {
    let visible = platform::install_hint_needed();

    view! {
        <Show when=move || visible>
            <section class="container install-prompt">
                <p>
                    "To install this app on your iOS device, tap the share button "
                    <span role="img" aria-label="share icon">"⎋"</span>
                    " and then \"Add to Home Screen\" "
                    <span role="img" aria-label="plus icon">"➕"</span>
                    "."
                </p>
            </section>
        </Show>
    }
}
