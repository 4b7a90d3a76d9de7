//! Root application component.

use calculate::{Axis, CalculatorConfig};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::dimension_panel::DimensionPanel;
use crate::components::install_prompt::InstallPrompt;
use crate::components::pricing_panel::PricingPanel;
use crate::components::total_panel::TotalPanel;
use crate::state::session::Session;

/// Single-page calculator.
///
/// Opens the session once; every panel receives the same `Copy` handle.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::open(CalculatorConfig::default());
    on_cleanup(move || session.shutdown());

    view! {
        <Title text="DG Calculate Prices"/>

        <main class="calculator">
            <h1 class="calculator__title">"Calculate Prices"</h1>
            <section class="calculator__dimensions">
                <DimensionPanel session=session axis=Axis::Width/>
                <DimensionPanel session=session axis=Axis::Height/>
            </section>
            <PricingPanel session=session/>
            <TotalPanel session=session/>
            <InstallPrompt/>
        </main>
    }
}
