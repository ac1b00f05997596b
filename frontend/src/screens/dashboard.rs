use dioxus::logger::tracing::error;
use dioxus::prelude::*;
use lumina_client_core::{AdminGate, EventId, Snapshot};
use crate::app::SharedStore;
use crate::browser;
use crate::format::description_preview;
use crate::route::{AdminRoute, Route};
use crate::screens::CreateEventForm;
use crate::theme::AppColors;
use crate::widgets::{Page, Panel};

#[component]
pub fn DashboardScreen(is_dark: bool, on_navigate: EventHandler<Route>) -> Element {
    let store = use_context::<SharedStore>();
    let snapshot = use_context::<Signal<Snapshot>>();
    let mut gate = use_context::<Signal<AdminGate>>();
    let mut show_create = use_signal(|| false);

    let lock_store = store.clone();
    let delete_event = use_callback(move |id: EventId| {
        if !browser::confirm("Delete event?") {
            return;
        }
        let store = store.clone();
        spawn(async move {
            if let Err(e) = store.delete_event(&id).await {
                error!("Failed to delete event {id}: {e}");
                browser::alert("Failed to delete event.");
            }
        });
    });

    let primary = AppColors::primary(is_dark);
    let secondary = AppColors::secondary(is_dark);
    let accent = AppColors::accent(is_dark);
    let border = AppColors::border(is_dark);
    let background = AppColors::background(is_dark);
    let events = snapshot.read().events.clone();
    let cell = "padding: 20px 24px;";

    rsx! {
        Page {
            Panel { is_dark,
                div { style: "display: flex; flex-wrap: wrap; align-items: center; justify-content: space-between; gap: 24px;",
                    div {
                        p { style: "font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.4em; color: {secondary}; margin: 0;", "Studio Control" }
                        h1 { style: "font-size: 1.9rem; font-weight: 600; margin: 12px 0 8px;", "Manage your collections" }
                        p { style: "font-size: 0.875rem; color: {secondary}; margin: 0;",
                            "Create new events, upload galleries, and deliver polished experiences to your clients."
                        }
                    }
                    div { style: "display: flex; gap: 12px;",
                        button {
                            onclick: move |_| show_create.set(true),
                            style: "padding: 12px 24px; border-radius: 16px; border: none; background: {primary}; color: {background}; font-weight: 600; cursor: pointer;",
                            "+ New Event"
                        }
                        button {
                            onclick: move |_| gate.set(AdminGate::lock(lock_store.api())),
                            style: "padding: 12px 24px; border-radius: 16px; border: 1px solid {border}; background: transparent; color: {secondary}; cursor: pointer;",
                            "Lock"
                        }
                    }
                }
            }

            if show_create() {
                CreateEventForm { is_dark, on_close: move |_| show_create.set(false) }
            }

            Panel { is_dark,
                table { style: "width: 100%; text-align: left; border-collapse: collapse;",
                    thead {
                        tr { style: "font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.2em; color: {secondary};",
                            th { style: "{cell}", "Event" }
                            th { style: "{cell}", "Date" }
                            th { style: "{cell}", "Slug" }
                            th { style: "{cell} text-align: right;", "Actions" }
                        }
                    }
                    tbody {
                        for event in events.iter().cloned() {
                            tr { key: "{event.id}", style: "border-top: 1px solid {border};",
                                td { style: "{cell}",
                                    p { style: "font-weight: 500; margin: 0;", "{event.title}" }
                                    p { style: "font-size: 0.75rem; color: {secondary}; margin: 0;",
                                        "{description_preview(event.description.as_deref())}"
                                    }
                                }
                                td { style: "{cell} color: {secondary};", "{event.date}" }
                                td { style: "{cell} color: {secondary}; font-family: monospace;", "/event/{event.slug}" }
                                td { style: "{cell}",
                                    div { style: "display: flex; justify-content: flex-end; align-items: center; gap: 12px;",
                                        a {
                                            href: Route::Event { slug: event.slug.clone() }.href(),
                                            target: "_blank",
                                            title: "View Public Page",
                                            style: "color: {secondary}; text-decoration: none;",
                                            "↗"
                                        }
                                        button {
                                            onclick: {
                                                let id = event.id.clone();
                                                move |_| on_navigate.call(Route::Admin(AdminRoute::Edit(id.clone())))
                                            },
                                            style: "background: none; border: none; color: {accent}; font-weight: 600; cursor: pointer;",
                                            "Manage"
                                        }
                                        button {
                                            onclick: {
                                                let id = event.id.clone();
                                                move |_| delete_event.call(id.clone())
                                            },
                                            style: "background: none; border: none; color: {AppColors::DANGER}; cursor: pointer;",
                                            "Delete"
                                        }
                                    }
                                }
                            }
                        }
                        if events.is_empty() {
                            tr {
                                td { colspan: "4", style: "padding: 48px 24px; text-align: center; color: {secondary};",
                                    "No events found. Create one to get started."
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
