//! Ordresystem Frontend App
//!
//! Tabbed layout: one section per collection, forms above their tables.

use leptos::prelude::*;

use crate::components::{
    KundeForm, KundeTable, OrdreTable, Seksjon, SeksjonTabBar, VareForm, VareTable,
};
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let varer_reload = signal(0u32);
    let kunder_reload = signal(0u32);
    let ordrer_reload = signal(0u32);
    let (seksjon, set_seksjon) = signal(Seksjon::Varer);

    // Provide context to all children
    provide_context(AppContext::new(varer_reload, kunder_reload, ordrer_reload));

    view! {
        <main class="admin-panel">
            <h1>"Ordresystem"</h1>

            <SeksjonTabBar current=seksjon set_current=set_seksjon />

            {move || match seksjon.get() {
                Seksjon::Varer => view! {
                    <section class="panel-section">
                        <VareForm />
                        <VareTable />
                    </section>
                }
                .into_any(),
                Seksjon::Kunder => view! {
                    <section class="panel-section">
                        <KundeForm />
                        <KundeTable />
                    </section>
                }
                .into_any(),
                Seksjon::Ordrer => view! {
                    <section class="panel-section">
                        <OrdreTable />
                    </section>
                }
                .into_any(),
            }}
        </main>
    }
}
