//! Quantity and price-per-square-foot entry.

use calculate::Field;
use leptos::prelude::*;

use crate::components::numeric_input::NumericInput;
use crate::state::session::Session;

#[component]
pub fn PricingPanel(session: Session) -> impl IntoView {
    let view_state = session.view();
    let quantity = Signal::derive(move || view_state.with(|v| v.value(Field::Quantity).to_owned()));
    let price = Signal::derive(move || view_state.with(|v| v.value(Field::PricePerSqft).to_owned()));
    let on_quantity = Callback::new(move |text| session.edit(Field::Quantity, text));
    let on_price = Callback::new(move |text| session.edit(Field::PricePerSqft, text));

    view! {
        <section class="container pricing-panel">
            <div class="pricing-panel__field">
                <p>"Quantity"</p>
                <NumericInput value=quantity on_change=on_quantity placeholder="quantity" name="qty"/>
            </div>
            <div class="pricing-panel__field">
                <p>"Per square foot"</p>
                <NumericInput value=price on_change=on_price placeholder="sqft" name="sqft"/>
            </div>
        </section>
    }
}
