//! Item Table Component
//!
//! Fetches `/api/varer` on mount and whenever the item reload trigger
//! fires, then rebuilds the whole table body from the payload.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::melding_rad;
use crate::context::AppContext;
use crate::models::Vare;
use crate::table::{RefreshGuard, TableState};

const KOLONNER: usize = 4;

#[component]
pub fn VareTable() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (state, set_state) = signal(TableState::<Vare>::Loading);
    let guard = RefreshGuard::default();

    Effect::new(move |_| {
        let _ = ctx.varer_reload.get();
        let guard = guard.clone();
        let token = guard.begin();
        spawn_local(async move {
            let result = api::hent_varer().await;
            if let Err(e) = &result {
                web_sys::console::error_1(
                    &format!("Feil ved henting av varer: {:?}", e).into(),
                );
            }
            // A newer refresh may have started while we were waiting
            if guard.is_current(token) {
                set_state.set(TableState::from_result(result));
            }
        });
    });

    view! {
        <table class="data-table" id="varerTable">
            <thead>
                <tr>
                    <th>"VNr"</th>
                    <th>"Betegnelse"</th>
                    <th>"Pris"</th>
                    <th>"Antall"</th>
                </tr>
            </thead>
            <tbody>
                {move || match state.get() {
                    TableState::Loading => melding_rad(KOLONNER, "Laster varer...".to_string()),
                    TableState::Empty => melding_rad(KOLONNER, "Ingen varer funnet.".to_string()),
                    TableState::Failed(melding) => {
                        melding_rad(KOLONNER, format!("Kunne ikke laste varer: {}", melding))
                    }
                    TableState::Rows(varer) => varer
                        .iter()
                        .map(|vare| {
                            view! {
                                <tr>
                                    <td>{vare.vnr_display().to_string()}</td>
                                    <td>{vare.betegnelse_display().to_string()}</td>
                                    <td>{vare.pris_display()}</td>
                                    <td>{vare.antall_display().to_string()}</td>
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
