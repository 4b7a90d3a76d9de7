//! Total display with click-to-copy.

use leptos::prelude::*;

use crate::state::session::Session;
use crate::util::clipboard;
use crate::util::format::{format_length, format_total};
use crate::util::timer::TimerSlot;

const COPIED_NOTICE_MS: u64 = 2_000;

#[component]
pub fn TotalPanel(session: Session) -> impl IntoView {
    let view_state = session.view();
    let copied = RwSignal::new(false);
    let notice_timer = StoredValue::new_local(TimerSlot::default());

    let on_copy = move |_| {
        if clipboard::write_text(&session.clipboard_text()) {
            copied.set(true);
            notice_timer.update_value(|slot| slot.arm(COPIED_NOTICE_MS, move || copied.set(false)));
        }
    };
    on_cleanup(move || notice_timer.update_value(TimerSlot::clear));

    let breakdown = move || {
        view_state.with(|v| {
            format!(
                "{} sq ft × {} × {}",
                format_length(v.quote.area_sqft),
                v.details.quantity,
                v.details.price_per_sqft
            )
        })
    };

    view! {
        <section class="container total-panel">
            <h2 class="total-panel__label">"Total: "</h2>
            <button
                class="total-panel__value"
                class:total-panel__value--stale=move || view_state.with(|v| v.recompute_pending)
                title="Click to copy total"
                on:click=on_copy
            >
                {move || view_state.with(|v| format_total(v.total))}
            </button>
            <span class="total-panel__hint">"Click to copy total!"</span>
            <span class="total-panel__breakdown">{breakdown}</span>
            <Show when=move || copied.get()>
                <div class="toast" role="status">"Copied to clipboard!"</div>
            </Show>
        </section>
    }
}
