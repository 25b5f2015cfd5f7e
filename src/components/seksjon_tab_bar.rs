//! Section Tab Bar Component
//!
//! Switches between the three admin sections. Only the active section's
//! components are mounted, so a section's fetch only runs while it is
//! visible.

use leptos::prelude::*;

/// The three admin sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seksjon {
    Varer,
    Kunder,
    Ordrer,
}

impl Seksjon {
    pub const ALLE: [Seksjon; 3] = [Seksjon::Varer, Seksjon::Kunder, Seksjon::Ordrer];

    pub fn tittel(&self) -> &'static str {
        match self {
            Seksjon::Varer => "Varer",
            Seksjon::Kunder => "Kunder",
            Seksjon::Ordrer => "Ordrer",
        }
    }
}

#[component]
pub fn SeksjonTabBar(
    current: ReadSignal<Seksjon>,
    set_current: WriteSignal<Seksjon>,
) -> impl IntoView {
    view! {
        <div class="seksjon-tab-bar">
            {Seksjon::ALLE
                .iter()
                .map(|&seksjon| {
                    let is_active = move || current.get() == seksjon;
                    let tab_class = move || {
                        if is_active() { "seksjon-tab active" } else { "seksjon-tab" }
                    };
                    view! {
                        <button class=tab_class on:click=move |_| set_current.set(seksjon)>
                            {seksjon.tittel()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
