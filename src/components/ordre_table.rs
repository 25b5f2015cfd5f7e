//! Order Table Component
//!
//! Read-only view; orders are created elsewhere. Unsent/unpaid orders show
//! a placeholder in the date columns.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::melding_rad;
use crate::context::AppContext;
use crate::models::Ordre;
use crate::table::{RefreshGuard, TableState};

const KOLONNER: usize = 5;

#[component]
pub fn OrdreTable() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (state, set_state) = signal(TableState::<Ordre>::Loading);
    let guard = RefreshGuard::default();

    Effect::new(move |_| {
        let _ = ctx.ordrer_reload.get();
        let guard = guard.clone();
        let token = guard.begin();
        spawn_local(async move {
            let result = api::hent_ordrer().await;
            if let Err(e) = &result {
                web_sys::console::error_1(
                    &format!("Feil ved henting av ordrer: {:?}", e).into(),
                );
            }
            if guard.is_current(token) {
                set_state.set(TableState::from_result(result));
            }
        });
    });

    view! {
        <table class="data-table" id="ordrerTable">
            <thead>
                <tr>
                    <th>"OrdreNr"</th>
                    <th>"Ordredato"</th>
                    <th>"Sendt dato"</th>
                    <th>"Betalt dato"</th>
                    <th>"Kunde"</th>
                </tr>
            </thead>
            <tbody>
                {move || match state.get() {
                    TableState::Loading => melding_rad(KOLONNER, "Laster ordrer...".to_string()),
                    TableState::Empty => melding_rad(KOLONNER, "Ingen ordrer funnet.".to_string()),
                    TableState::Failed(melding) => {
                        melding_rad(KOLONNER, format!("Kunne ikke laste ordrer: {}", melding))
                    }
                    TableState::Rows(ordrer) => ordrer
                        .iter()
                        .map(|ordre| {
                            view! {
                                <tr>
                                    <td>{ordre.ordre_nr_display().to_string()}</td>
                                    <td>{ordre.ordre_dato_display().to_string()}</td>
                                    <td>{ordre.sendt_dato_display().to_string()}</td>
                                    <td>{ordre.betalt_dato_display().to_string()}</td>
                                    <td>{ordre.kundenavn_display().to_string()}</td>
                                </tr>
                            }
                        })
                        .collect_view()
                        .into_any(),
                }}
            </tbody>
        </table>
    }
}
