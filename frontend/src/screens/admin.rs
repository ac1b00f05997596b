use dioxus::prelude::*;
use lumina_client_core::AdminGate;
use crate::route::{AdminRoute, Route};
use crate::screens::{DashboardScreen, EventManagerScreen, LoginScreen};

/// Admin area: passcode form until the gate is unlocked.
#[component]
pub fn AdminScreen(is_dark: bool, route: AdminRoute, on_navigate: EventHandler<Route>) -> Element {
    let gate = use_context::<Signal<AdminGate>>();
    if !gate().is_unlocked() {
        return rsx! { LoginScreen { is_dark } };
    }
    match route {
        AdminRoute::Dashboard => rsx! { DashboardScreen { is_dark, on_navigate } },
        AdminRoute::Edit(event_id) => rsx! {
            EventManagerScreen { key: "{event_id}", is_dark, event_id: event_id.clone(), on_navigate }
        },
    }
}
