use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;
use lumina_client_core::{GalleryApi, Photo, PhotoId, Snapshot};
use crate::app::SharedStore;
use crate::browser;
use crate::gallery::{photo_file_name, position_of, split_highlights, venue_label, zip_file_name, Lightbox};
use crate::route::Route;
use crate::screens::NotFoundScreen;
use crate::theme::AppColors;
use crate::widgets::{Page, Panel, Spinner};

#[component]
pub fn EventViewScreen(is_dark: bool, slug: String, on_navigate: EventHandler<Route>) -> Element {
    let store = use_context::<SharedStore>();
    let snapshot = use_context::<Signal<Snapshot>>();
    let mut lightbox = use_signal(Lightbox::default);
    let mut zipping = use_signal(|| false);

    // Keep the lightbox valid when photos disappear on refresh.
    let effect_slug = slug.clone();
    use_effect(move || {
        let snap = snapshot.read();
        let len = snap
            .event_by_slug(&effect_slug)
            .map(|e| snap.photos_for_event(&e.id).len())
            .unwrap_or(0);
        lightbox.write().clamp_to(len);
    });

    let favorite_store = store.clone();
    let toggle_favorite = use_callback(move |(id, value): (PhotoId, bool)| {
        let store = favorite_store.clone();
        spawn(async move {
            if let Err(e) = store.toggle_photo_favorite(&id, value).await {
                error!("Failed to update favorite for {id}: {e}");
                browser::alert("Failed to update favorite.");
            }
        });
    });

    let zip_store = store.clone();
    let zip_slug = slug.clone();
    let download_all = use_callback(move |_: ()| {
        let store = zip_store.clone();
        let slug = zip_slug.clone();
        zipping.set(true);
        spawn(async move {
            match store.api().download_event_zip(&slug).await {
                Ok(bytes) => {
                    info!("Downloaded album {slug} ({} bytes)", bytes.len());
                    if let Err(e) = browser::save_bytes(&bytes, "application/zip", &zip_file_name(&slug)) {
                        error!("Failed to save album: {e}");
                        browser::alert("Failed to download album.");
                    }
                }
                Err(e) => {
                    error!("Failed to download album {slug}: {e}");
                    browser::alert("Failed to download album.");
                }
            }
            zipping.set(false);
        });
    });

    let snap = snapshot.read();
    if snap.loading && snap.events.is_empty() {
        return rsx! { Spinner { is_dark } };
    }
    let Some(event) = snap.event_by_slug(&slug).cloned() else {
        return rsx! { NotFoundScreen { is_dark, on_navigate } };
    };
    let event_photos: Vec<&Photo> = snap.photos_for_event(&event.id);
    let (favorites, others) = split_highlights(&event_photos);
    let index_of = |id: &PhotoId| position_of(&event_photos, id);
    let favorite_cards: Vec<(Photo, Option<usize>)> =
        favorites.iter().map(|p| ((*p).clone(), index_of(&p.id))).collect();
    let grid_source = if favorites.is_empty() { event_photos.clone() } else { others };
    let grid_cards: Vec<(Photo, Option<usize>)> =
        grid_source.iter().map(|p| ((*p).clone(), index_of(&p.id))).collect();
    let total = event_photos.len();
    let favorite_total = favorites.len();
    let open_photo: Option<(usize, Photo)> = lightbox()
        .index()
        .and_then(|i| event_photos.get(i).map(|p| (i, (*p).clone())));

    let primary = AppColors::primary(is_dark);
    let secondary = AppColors::secondary(is_dark);
    let accent = AppColors::accent(is_dark);
    let border = AppColors::border(is_dark);
    let background = AppColors::background(is_dark);
    let watermark = event.watermark_text.clone();
    let venue = venue_label(&event.slug);
    let watermark_label = watermark.clone().unwrap_or_else(|| "—".to_string());
    let full_set_label = if favorite_total > 0 { "Full set" } else { "Gallery" };

    rsx! {
        Page {
            Panel { is_dark,
                div { style: "display: grid; gap: 40px; grid-template-columns: 1.1fr 0.9fr;",
                    div {
                        span { style: "display: inline-block; padding: 8px 16px; border-radius: 999px; color: {accent}; font-size: 0.75rem; font-weight: 600; letter-spacing: 0.3em;",
                            "{event.date}"
                        }
                        h1 { style: "font-size: 2.6rem; font-weight: 600; margin: 16px 0;", "{event.title}" }
                        if let Some(description) = event.description.clone() {
                            p { style: "color: {secondary}; font-size: 1.1rem; line-height: 1.6;", "{description}" }
                        }
                        div { style: "display: flex; gap: 12px; padding-top: 16px; flex-wrap: wrap;",
                            if total > 0 {
                                button {
                                    disabled: zipping(),
                                    onclick: move |_| download_all.call(()),
                                    style: "padding: 12px 20px; border-radius: 16px; border: none; background: {primary}; color: {background}; font-weight: 600; cursor: pointer;",
                                    if zipping() { "Bundling..." } else { "Download full set" }
                                }
                            }
                            button {
                                onclick: move |_| on_navigate.call(Route::Home),
                                style: "padding: 12px 20px; border-radius: 16px; border: 1px solid {border}; background: transparent; color: {primary}; font-weight: 600; cursor: pointer;",
                                "Back to collections"
                            }
                        }
                    }
                    div { style: "display: grid; gap: 16px; grid-template-columns: 1fr 1fr;",
                        InfoTile { is_dark, label: "Photos", value: total.to_string() }
                        InfoTile { is_dark, label: "Favorites", value: favorite_total.to_string() }
                        InfoTile { is_dark, label: "Venue", value: venue }
                        InfoTile { is_dark, label: "Watermark", value: watermark_label }
                    }
                }
            }

            if !favorite_cards.is_empty() {
                section { style: "margin-bottom: 48px;",
                    SectionHeading {
                        is_dark,
                        eyebrow: "Highlights".to_string(),
                        title: "Client favorites",
                        note: format!("{favorite_total} curated selects"),
                    }
                    div { style: "columns: 3 280px; column-gap: 20px;",
                        for (photo, index) in favorite_cards {
                            PhotoCard {
                                key: "{photo.id}",
                                is_dark,
                                photo: photo.clone(),
                                watermark: watermark.clone(),
                                on_open: move |_| if let Some(i) = index { lightbox.write().open(i, total) },
                                on_favorite: toggle_favorite,
                            }
                        }
                    }
                }
            }

            section {
                SectionHeading {
                    is_dark,
                    eyebrow: full_set_label.to_string(),
                    title: "Every moment",
                    note: format!("{total} total frames"),
                }
                if total == 0 {
                    div { style: "text-align: center; padding: 64px 0; border-radius: 24px; border: 1px dashed {border}; color: {secondary};",
                        "No photos uploaded to this event yet."
                    }
                } else {
                    div { style: "columns: 3 280px; column-gap: 20px;",
                        for (photo, index) in grid_cards {
                            PhotoCard {
                                key: "{photo.id}",
                                is_dark,
                                photo: photo.clone(),
                                watermark: watermark.clone(),
                                on_open: move |_| if let Some(i) = index { lightbox.write().open(i, total) },
                                on_favorite: toggle_favorite,
                            }
                        }
                    }
                }
            }
        }

        if let Some((index, photo)) = open_photo {
            LightboxOverlay {
                photo: photo.clone(),
                watermark: watermark.clone(),
                download_name: photo_file_name(&event.slug, index),
                has_prev: lightbox().has_prev(),
                has_next: lightbox().has_next(total),
                on_close: move |_| lightbox.write().close(),
                on_prev: move |_| lightbox.write().prev(),
                on_next: move |_| lightbox.write().next(total),
                on_favorite: toggle_favorite,
            }
        }
    }
}

#[component]
fn InfoTile(is_dark: bool, label: &'static str, value: String) -> Element {
    let secondary = AppColors::secondary(is_dark);
    let border = AppColors::border(is_dark);
    rsx! {
        div { style: "border-radius: 16px; padding: 16px; border: 1px solid {border};",
            p { style: "font-size: 0.7rem; text-transform: uppercase; letter-spacing: 0.4em; color: {secondary}; margin: 0 0 12px;", "{label}" }
            p { style: "font-size: 1.3rem; font-weight: 600; margin: 0;", "{value}" }
        }
    }
}

#[component]
fn SectionHeading(is_dark: bool, eyebrow: String, title: &'static str, note: String) -> Element {
    let secondary = AppColors::secondary(is_dark);
    rsx! {
        div { style: "display: flex; justify-content: space-between; align-items: flex-end; gap: 12px; margin-bottom: 16px;",
            div {
                p { style: "font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.4em; color: {secondary}; margin: 0;", "{eyebrow}" }
                h2 { style: "font-size: 1.5rem; font-weight: 600; margin: 4px 0 0;", "{title}" }
            }
            p { style: "font-size: 0.875rem; color: {secondary};", "{note}" }
        }
    }
}

#[component]
fn PhotoCard(
    is_dark: bool,
    photo: Photo,
    watermark: Option<String>,
    on_open: EventHandler<()>,
    on_favorite: EventHandler<(PhotoId, bool)>,
) -> Element {
    let border = AppColors::border(is_dark);
    let surface = AppColors::surface(is_dark);
    let is_favorite = photo.is_favorite;
    let (heart_bg, heart_fg, heart_label) = if is_favorite {
        (AppColors::FAVORITE, "white", "Remove from favorites")
    } else {
        ("rgba(0,0,0,0.6)", "rgba(255,255,255,0.7)", "Add to favorites")
    };
    let heart = if is_favorite { "♥" } else { "♡" };

    rsx! {
        div {
            onclick: move |_| on_open.call(()),
            style: "position: relative; margin-bottom: 20px; break-inside: avoid; border-radius: 26px; overflow: hidden; border: 1px solid {border}; background: {surface}; cursor: zoom-in;",
            img { src: "{photo.url}", alt: "{photo.name}", loading: "lazy", style: "display: block; width: 100%; height: auto;" }
            button {
                "aria-label": "{heart_label}",
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    on_favorite.call((photo.id.clone(), !is_favorite));
                },
                style: "position: absolute; top: 12px; right: 12px; z-index: 2; border: none; border-radius: 999px; padding: 8px 10px; background: {heart_bg}; color: {heart_fg}; cursor: pointer;",
                "{heart}"
            }
            if let Some(text) = watermark {
                div { style: "position: absolute; bottom: 8px; right: 8px; font-size: 10px; font-weight: 700; color: rgba(255,255,255,0.7); pointer-events: none; user-select: none;",
                    "{text}"
                }
            }
        }
    }
}

/// Always dark, whatever the page theme.
#[component]
fn LightboxOverlay(
    photo: Photo,
    watermark: Option<String>,
    download_name: String,
    has_prev: bool,
    has_next: bool,
    on_close: EventHandler<()>,
    on_prev: EventHandler<()>,
    on_next: EventHandler<()>,
    on_favorite: EventHandler<(PhotoId, bool)>,
) -> Element {
    let is_favorite = photo.is_favorite;
    let nav = "position: absolute; top: 50%; transform: translateY(-50%); padding: 12px; border: none; border-radius: 999px; background: transparent; color: white; font-size: 2rem; cursor: pointer;";
    let prev_opacity = if has_prev { "1" } else { "0.3" };
    let next_opacity = if has_next { "1" } else { "0.3" };
    let favorite_style = if is_favorite {
        "border: 1px solid #FB7185; background: rgba(244,63,94,0.2); color: #FFE4E6;"
    } else {
        "border: 1px solid rgba(255,255,255,0.1); background: transparent; color: #D1D5DB;"
    };

    rsx! {
        div { style: "position: fixed; inset: 0; z-index: 100; background: rgba(0,0,0,0.95); display: flex; align-items: center; justify-content: center;",
            button {
                onclick: move |_| on_close.call(()),
                style: "position: absolute; top: 16px; right: 16px; z-index: 2; padding: 8px 12px; border: none; border-radius: 999px; background: rgba(255,255,255,0.1); color: #9CA3AF; cursor: pointer;",
                "✕"
            }
            button {
                disabled: !has_prev,
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    on_prev.call(());
                },
                style: "{nav} left: 16px; opacity: {prev_opacity};",
                "‹"
            }
            div { style: "display: flex; flex-direction: column; align-items: center; padding: 48px;",
                div { style: "position: relative;",
                    img { src: "{photo.url}", alt: "Lightbox view", style: "max-width: 100%; max-height: 85vh; object-fit: contain;" }
                    if let Some(text) = watermark {
                        div { style: "position: absolute; bottom: 16px; right: 16px; font-size: 0.875rem; font-weight: 700; color: rgba(255,255,255,0.5); pointer-events: none; user-select: none;",
                            "{text}"
                        }
                    }
                }
                div { style: "margin-top: 16px; display: flex; align-items: center; gap: 16px;",
                    if let Some(caption) = photo.caption.clone() {
                        p { style: "color: rgba(255,255,255,0.9); font-size: 0.875rem; background: rgba(0,0,0,0.5); padding: 8px 16px; border-radius: 999px; margin: 0;",
                            "{caption}"
                        }
                    }
                    button {
                        onclick: move |_| on_favorite.call((photo.id.clone(), !is_favorite)),
                        style: "font-size: 0.75rem; padding: 6px 12px; border-radius: 999px; cursor: pointer; {favorite_style}",
                        if is_favorite { "♥ Favorited" } else { "♡ Favorite" }
                    }
                    a {
                        href: "{photo.url}",
                        download: "{download_name}",
                        style: "font-size: 0.75rem; color: #9CA3AF; border: 1px solid rgba(255,255,255,0.1); padding: 6px 12px; border-radius: 999px; text-decoration: none;",
                        "Download"
                    }
                }
            }
            button {
                disabled: !has_next,
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    on_next.call(());
                },
                style: "{nav} right: 16px; opacity: {next_opacity};",
                "›"
            }
        }
    }
}
