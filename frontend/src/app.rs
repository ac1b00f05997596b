use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;
use lumina_client_core::{AdminGate, GalleryApi, HttpApi, Store};
use std::sync::Arc;
use crate::browser;
use crate::config::CONFIG;
use crate::route::{AdminRoute, Route};
use crate::screens::{AdminScreen, EventViewScreen, HomeScreen};
use crate::widgets::Layout;

pub type SharedStore = Arc<Store<HttpApi>>;

/// The browser never starts with a credential; it is attached once the gate unlocks.
/// A relative API base (`/api` in release builds) is anchored to the page origin.
fn build_api() -> HttpApi {
    let api = match HttpApi::new(&CONFIG) {
        Ok(api) => api,
        Err(e) => {
            error!("HTTP client setup failed, using defaults: {e}");
            HttpApi::with_client(reqwest::Client::new(), &CONFIG.api_url, None)
        }
    };
    let api = api.with_page_origin(&browser::page_origin());
    api.set_admin_credential(None);
    api
}

#[component]
pub fn App() -> Element {
    let store: SharedStore = use_context_provider(|| Arc::new(Store::new(build_api())));
    let mut snapshot = use_context_provider(|| Signal::new(store.snapshot()));
    use_context_provider(|| Signal::new(AdminGate::Locked));
    let mut route = use_signal(|| Route::parse(&browser::location_hash(), CONFIG.enable_admin));
    let mut is_dark = use_signal(|| false);

    use_hook(move || {
        browser::on_hash_change(move |hash| {
            let next = Route::parse(&hash, CONFIG.enable_admin);
            if *route.peek() != next {
                route.set(next);
            }
        });
    });

    use_effect(move || browser::set_location_hash(&route().path()));

    let sync_store = store.clone();
    use_future(move || {
        let store = sync_store.clone();
        async move {
            let mut rx = store.subscribe();
            let loader = store.clone();
            spawn(async move {
                match loader.refresh().await {
                    Ok(()) => info!("Initial load complete"),
                    Err(e) => error!("Initial load failed: {e}"),
                }
            });
            while rx.changed().await.is_ok() {
                let next = rx.borrow_and_update().clone();
                snapshot.set(next);
            }
        }
    });

    let navigate = move |next: Route| {
        let next = if next.is_admin() && !CONFIG.enable_admin { Route::Home } else { next };
        route.set(next);
    };

    let current = route();
    let managed_slug = match &current {
        Route::Admin(AdminRoute::Edit(id)) => snapshot.read().event_by_id(id).map(|e| e.slug.clone()),
        _ => None,
    };
    let dark = is_dark();
    let screen = match current.clone() {
        Route::Home => rsx! { HomeScreen { is_dark: dark, on_navigate: navigate } },
        Route::Event { slug } => rsx! {
            EventViewScreen { key: "{slug}", is_dark: dark, slug: slug.clone(), on_navigate: navigate }
        },
        Route::Admin(admin) => rsx! { AdminScreen { is_dark: dark, route: admin, on_navigate: navigate } },
    };

    rsx! {
        Layout {
            is_dark: dark,
            admin_enabled: CONFIG.enable_admin,
            route: current,
            managed_slug,
            on_toggle_theme: move |_| is_dark.set(!dark),
            on_navigate: navigate,
            {screen}
        }
    }
}
