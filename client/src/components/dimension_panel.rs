//! Width or height entry with unit selector and converted readout.

use calculate::{Axis, LengthUnit};
use leptos::prelude::*;

use crate::components::numeric_input::NumericInput;
use crate::state::calculator::length_field;
use crate::state::session::Session;
use crate::util::format::format_length;

#[component]
pub fn DimensionPanel(session: Session, axis: Axis) -> impl IntoView {
    let view_state = session.view();
    let field = length_field(axis);
    let (title, placeholder, name) = match axis {
        Axis::Width => ("Width", "Width", "width"),
        Axis::Height => ("Height", "Height", "height"),
    };

    let value = Signal::derive(move || view_state.with(|v| v.value(field).to_owned()));
    let unit = Signal::derive(move || view_state.with(|v| v.dimension(axis).unit));
    let on_change = Callback::new(move |text| session.edit(field, text));

    // Read-only conversions into the units not currently selected.
    let equivalents = move || {
        let current = unit.get();
        view_state
            .with(|v| v.dimension(axis).equivalents())
            .into_iter()
            .filter(|(u, _)| *u != current)
            .map(|(u, length)| {
                view! {
                    <span class="dimension-panel__equivalent">
                        {format_length(length)} " " {u.as_str()}
                    </span>
                }
            })
            .collect_view()
    };

    view! {
        <section class="container dimension-panel">
            <h2 class="dimension-panel__title">{title}</h2>
            <div class="dimension-panel__row">
                <NumericInput value=value on_change=on_change placeholder=placeholder name=name/>
                <select
                    class="dimension-panel__unit"
                    aria-label=format!("{title} unit")
                    prop:value=move || unit.get().as_str()
                    on:change=move |ev| session.change_unit(axis, &event_target_value(&ev))
                >
                    {LengthUnit::ALL
                        .into_iter()
                        .map(|u| {
                            view! {
                                <option value=u.as_str() selected=move || unit.get() == u>
                                    {u.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
            <p class="dimension-panel__equivalents">{equivalents}</p>
        </section>
    }
}
