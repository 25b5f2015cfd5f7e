//! Application Context
//!
//! Shared state provided via Leptos Context API. One reload trigger per
//! collection; forms bump the matching trigger after a confirmed write.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload items - read
    pub varer_reload: ReadSignal<u32>,
    set_varer_reload: WriteSignal<u32>,
    /// Trigger to reload customers - read
    pub kunder_reload: ReadSignal<u32>,
    set_kunder_reload: WriteSignal<u32>,
    /// Trigger to reload orders - read
    pub ordrer_reload: ReadSignal<u32>,
    set_ordrer_reload: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        varer_reload: (ReadSignal<u32>, WriteSignal<u32>),
        kunder_reload: (ReadSignal<u32>, WriteSignal<u32>),
        ordrer_reload: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            varer_reload: varer_reload.0,
            set_varer_reload: varer_reload.1,
            kunder_reload: kunder_reload.0,
            set_kunder_reload: kunder_reload.1,
            ordrer_reload: ordrer_reload.0,
            set_ordrer_reload: ordrer_reload.1,
        }
    }

    /// Trigger a reload of the item table
    pub fn reload_varer(&self) {
        self.set_varer_reload.update(|v| *v += 1);
    }

    /// Trigger a reload of the customer table
    pub fn reload_kunder(&self) {
        self.set_kunder_reload.update(|v| *v += 1);
    }

    /// Trigger a reload of the order table
    pub fn reload_ordrer(&self) {
        self.set_ordrer_reload.update(|v| *v += 1);
    }
}
