//! New Item Form Component
//!
//! Validates locally before POSTing; on a confirmed write the form is
//! cleared and the item table reloaded. On failure the fields stay
//! populated for correction.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::context::AppContext;
use crate::form::SubmitOutcome;
use crate::validate;

#[component]
pub fn VareForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (vnr, set_vnr) = signal(String::new());
    let (betegnelse, set_betegnelse) = signal(String::new());
    let (pris, set_pris) = signal(String::new());
    let (antall, set_antall) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let payload = match validate::valider_vare(
            &vnr.get(),
            &betegnelse.get(),
            &pris.get(),
            &antall.get(),
        ) {
            Ok(payload) => payload,
            Err(melding) => {
                // Validation failures never reach the network
                let _ = window().alert_with_message(&melding);
                return;
            }
        };

        spawn_local(async move {
            let result = api::legg_til_vare(&payload).await;
            if let Err(e) = &result {
                web_sys::console::error_1(
                    &format!("Feil ved registrering av vare: {:?}", e).into(),
                );
            }
            SubmitOutcome::from_result(result, "Kunne ikke legge til vare").apply(
                || {
                    set_vnr.set(String::new());
                    set_betegnelse.set(String::new());
                    set_pris.set(String::new());
                    set_antall.set(String::new());
                },
                || ctx.reload_varer(),
                |melding| {
                    let _ = window().alert_with_message(&melding);
                },
            );
        });
    };

    view! {
        <form class="record-form" id="addVareForm" on:submit=on_submit>
            <input
                type="text"
                placeholder="Varenummer"
                prop:value=move || vnr.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_vnr.set(input.value());
                }
            />
            <input
                type="text"
                placeholder="Betegnelse"
                prop:value=move || betegnelse.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_betegnelse.set(input.value());
                }
            />
            <input
                type="text"
                placeholder="Pris"
                prop:value=move || pris.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_pris.set(input.value());
                }
            />
            <input
                type="text"
                placeholder="Antall"
                prop:value=move || antall.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_antall.set(input.value());
                }
            />
            <button type="submit">"Legg til vare"</button>
        </form>
    }
}
