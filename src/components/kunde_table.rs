//! Customer Table Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::melding_rad;
use crate::context::AppContext;
use crate::models::Kunde;
use crate::table::{RefreshGuard, TableState};

const KOLONNER: usize = 6;

#[component]
pub fn KundeTable() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (state, set_state) = signal(TableState::<Kunde>::Loading);
    let guard = RefreshGuard::default();

    Effect::new(move |_| {
        let _ = ctx.kunder_reload.get();
        let guard = guard.clone();
        let token = guard.begin();
        spawn_local(async move {
            let result = api::hent_kunder().await;
            if let Err(e) = &result {
                web_sys::console::error_1(
                    &format!("Feil ved henting av kunder: {:?}", e).into(),
                );
            }
            if guard.is_current(token) {
                set_state.set(TableState::from_result(result));
            }
        });
    });

    view! {
        <table class="data-table" id="kunderTable">
            <thead>
                <tr>
                    <th>"KNr"</th>
                    <th>"Fornavn"</th>
                    <th>"Etternavn"</th>
                    <th>"Adresse"</th>
                    <th>"Postnr"</th>
                    <th>"Epost"</th>
                </tr>
            </thead>
            <tbody>
                {move || match state.get() {
                    TableState::Loading => melding_rad(KOLONNER, "Laster kunder...".to_string()),
                    TableState::Empty => melding_rad(KOLONNER, "Ingen kunder funnet.".to_string()),
                    TableState::Failed(melding) => {
                        melding_rad(KOLONNER, format!("Kunne ikke laste kunder: {}", melding))
                    }
                    TableState::Rows(kunder) => kunder
                        .iter()
                        .map(|kunde| {
                            view! {
                                <tr>
                                    <td>{kunde.knr_display().to_string()}</td>
                                    <td>{kunde.fornavn_display().to_string()}</td>
                                    <td>{kunde.etternavn_display().to_string()}</td>
                                    <td>{kunde.adresse_display().to_string()}</td>
                                    <td>{kunde.postnr_display().to_string()}</td>
                                    <td>{kunde.epost_display().to_string()}</td>
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
