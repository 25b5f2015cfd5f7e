//! New Customer Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::context::AppContext;
use crate::form::SubmitOutcome;
use crate::validate;

#[component]
pub fn KundeForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (fornavn, set_fornavn) = signal(String::new());
    let (etternavn, set_etternavn) = signal(String::new());
    let (adresse, set_adresse) = signal(String::new());
    let (postnummer, set_postnummer) = signal(String::new());
    let (epost, set_epost) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let payload = match validate::valider_kunde(
            &fornavn.get(),
            &etternavn.get(),
            &adresse.get(),
            &postnummer.get(),
            &epost.get(),
        ) {
            Ok(payload) => payload,
            Err(melding) => {
                let _ = window().alert_with_message(&melding);
                return;
            }
        };

        spawn_local(async move {
            let result = api::legg_til_kunde(&payload).await;
            if let Err(e) = &result {
                web_sys::console::error_1(
                    &format!("Feil ved registrering av kunde: {:?}", e).into(),
                );
            }
            SubmitOutcome::from_result(result, "Kunne ikke legge til kunde").apply(
                || {
                    set_fornavn.set(String::new());
                    set_etternavn.set(String::new());
                    set_adresse.set(String::new());
                    set_postnummer.set(String::new());
                    set_epost.set(String::new());
                },
                || ctx.reload_kunder(),
                |melding| {
                    let _ = window().alert_with_message(&melding);
                },
            );
        });
    };

    view! {
        <form class="record-form" id="addKundeForm" on:submit=on_submit>
            <input
                type="text"
                placeholder="Fornavn"
                prop:value=move || fornavn.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_fornavn.set(input.value());
                }
            />
            <input
                type="text"
                placeholder="Etternavn"
                prop:value=move || etternavn.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_etternavn.set(input.value());
                }
            />
            <input
                type="text"
                placeholder="Adresse"
                prop:value=move || adresse.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_adresse.set(input.value());
                }
            />
            <input
                type="text"
                placeholder="Postnummer"
                prop:value=move || postnummer.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_postnummer.set(input.value());
                }
            />
            <input
                type="text"
                placeholder="Epost (valgfritt)"
                prop:value=move || epost.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_epost.set(input.value());
                }
            />
            <button type="submit">"Legg til kunde"</button>
        </form>
    }
}
