//! UI Components
//!
//! Leptos components for the admin panel sections.

mod kunde_form;
mod kunde_table;
mod ordre_table;
mod seksjon_tab_bar;
mod vare_form;
mod vare_table;

pub use kunde_form::KundeForm;
pub use kunde_table::KundeTable;
pub use ordre_table::OrdreTable;
pub use seksjon_tab_bar::{Seksjon, SeksjonTabBar};
pub use vare_form::VareForm;
pub use vare_table::VareTable;

use leptos::prelude::*;

/// Single row spanning all columns, used for the loading, empty and
/// diagnostic states of a table body.
pub(crate) fn melding_rad(kolonner: usize, melding: String) -> AnyView {
    let kolonner = kolonner.to_string();
    view! {
        <tr class="table-message">
            <td colspan=kolonner>{melding}</td>
        </tr>
    }
    .into_any()
}
