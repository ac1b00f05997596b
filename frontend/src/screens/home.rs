use dioxus::prelude::*;
use lumina_client_core::Snapshot;
use crate::route::Route;
use crate::theme::AppColors;
use crate::widgets::{Page, Panel, Spinner};

#[component]
pub fn HomeScreen(is_dark: bool, on_navigate: EventHandler<Route>) -> Element {
    let snapshot = use_context::<Signal<Snapshot>>();
    let snap = snapshot.read();

    if snap.loading && snap.events.is_empty() {
        return rsx! { Spinner { is_dark } };
    }

    let primary = AppColors::primary(is_dark);
    let secondary = AppColors::secondary(is_dark);
    let accent = AppColors::accent(is_dark);
    let surface = AppColors::surface(is_dark);
    let border = AppColors::border(is_dark);
    let background = AppColors::background(is_dark);

    let event_count = snap.events.len();
    let photo_count = snap.visible_photos().len();
    let favorite_count = snap.favorite_count();
    let first_slug = snap.events.first().map(|e| e.slug.clone());

    let cards: Vec<_> = snap
        .events
        .iter()
        .map(|event| {
            (
                event.clone(),
                snap.cover_url(event).map(str::to_string),
            )
        })
        .collect();

    rsx! {
        Page {
            section { style: "display: grid; gap: 40px; margin-bottom: 64px;",
                p { style: "font-size: 0.75rem; letter-spacing: 0.5em; color: {accent};", "LUMINA ARCHIVES" }
                h1 { style: "font-size: 3rem; font-weight: 600; margin: 0;",
                    "Timeless stories told through modern editorial imagery."
                }
                p { style: "font-size: 1.1rem; color: {secondary}; max-width: 640px;",
                    "We craft immersive galleries for weddings, brand launches, and bespoke celebrations, delivered as curated experiences your clients can relive forever."
                }
                div { style: "display: flex; gap: 12px; flex-wrap: wrap;",
                    button {
                        disabled: first_slug.is_none(),
                        onclick: move |_| {
                            if let Some(slug) = first_slug.clone() {
                                on_navigate.call(Route::Event { slug });
                            }
                        },
                        style: "padding: 12px 24px; border-radius: 16px; border: none; background: {primary}; color: {background}; font-weight: 600; cursor: pointer;",
                        "Browse Galleries →"
                    }
                    a {
                        href: "mailto:hello@lumina.studio",
                        style: "padding: 12px 24px; border-radius: 16px; border: 1px solid {border}; color: {primary}; font-weight: 600; text-decoration: none;",
                        "Request a Collection"
                    }
                }
                div { style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px; text-align: center;",
                    Stat { is_dark, value: event_count, label: "Events" }
                    Stat { is_dark, value: photo_count, label: "Photographs" }
                    Stat { is_dark, value: favorite_count, label: "Client Picks" }
                }
            }

            section {
                p { style: "font-size: 0.75rem; letter-spacing: 0.4em; text-transform: uppercase; color: {secondary};", "Recent Work" }
                h2 { style: "font-size: 1.9rem; font-weight: 600; margin-top: 8px;", "Featured collections" }

                if cards.is_empty() {
                    Panel { is_dark,
                        p { style: "text-align: center; padding: 60px 0; color: {secondary};",
                            "No events published yet. Once you add an event it will appear here."
                        }
                    }
                } else {
                    div { style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(420px, 1fr)); gap: 32px;",
                        for (event, cover) in cards {
                            div {
                                key: "{event.id}",
                                onclick: {
                                    let slug = event.slug.clone();
                                    move |_| on_navigate.call(Route::Event { slug: slug.clone() })
                                },
                                style: "border-radius: 24px; overflow: hidden; border: 1px solid {border}; cursor: pointer; background: {surface};",
                                div { style: "position: relative; aspect-ratio: 5 / 3; background: {border};",
                                    if let Some(url) = cover {
                                        img { src: "{url}", alt: "{event.title}", loading: "lazy", style: "width: 100%; height: 100%; object-fit: cover;" }
                                    }
                                    span { style: "position: absolute; top: 16px; left: 16px; font-size: 0.75rem; font-weight: 600; color: white; background: rgba(0,0,0,0.35); padding: 4px 12px; border-radius: 999px;",
                                        "{event.date}"
                                    }
                                }
                                div { style: "padding: 24px;",
                                    h3 { style: "font-size: 1.5rem; font-weight: 600; margin: 0 0 8px;", "{event.title}" }
                                    if let Some(description) = event.description.clone() {
                                        p { style: "color: {secondary}; font-size: 0.875rem; line-height: 1.5;", "{description}" }
                                    }
                                    p { style: "font-size: 0.875rem; font-weight: 500; color: {primary};", "View gallery →" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Stat(is_dark: bool, value: usize, label: &'static str) -> Element {
    let secondary = AppColors::secondary(is_dark);
    rsx! {
        Panel { is_dark,
            p { style: "font-size: 1.9rem; font-weight: 600; margin: 0;", "{value}" }
            p { style: "font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.1em; color: {secondary}; margin: 0;", "{label}" }
        }
    }
}
