use dioxus::logger::tracing::{error, info, warn};
use dioxus::prelude::*;
use lumina_client_core::{EventId, Photo, PhotoId, Snapshot, UploadProgress};
use crate::app::SharedStore;
use crate::browser;
use crate::route::{AdminRoute, Route};
use crate::selection::{delete_all_prompt, delete_selected_prompt, selection_label, PhotoSelection};
use crate::theme::AppColors;
use crate::uploads::read_upload;
use crate::widgets::{Page, Panel, UploadProgressCard};

/// Uploads, selection, bulk delete, cover and captions for one event.
#[component]
pub fn EventManagerScreen(is_dark: bool, event_id: EventId, on_navigate: EventHandler<Route>) -> Element {
    let store = use_context::<SharedStore>();
    let snapshot = use_context::<Signal<Snapshot>>();
    let mut selection = use_signal(PhotoSelection::default);
    let mut upload_status = use_signal(|| Option::<UploadProgress>::None);
    let mut uploading = use_signal(|| false);
    let mut deleting = use_signal(|| false);

    // Drop selected ids whose photos are gone after a refresh.
    let prune_id = event_id.clone();
    use_effect(move || {
        let snap = snapshot.read();
        let photos = snap.photos_for_event(&prune_id);
        selection.write().retain_present(&photos);
    });

    let upload_store = store.clone();
    let upload_id = event_id.clone();
    let on_files = move |evt: FormEvent| {
        let store = upload_store.clone();
        let event_id = upload_id.clone();
        let picked = evt.files();
        if picked.is_empty() {
            return;
        }
        uploading.set(true);
        upload_status.set(None);
        spawn(async move {
            let mut files = Vec::with_capacity(picked.len());
            for file in picked {
                let read = file.read_bytes().await.map(|bytes| bytes.to_vec());
                match read_upload(file.name(), file.content_type(), read) {
                    Ok(upload) => files.push(upload),
                    Err(message) => {
                        warn!("{message}");
                        browser::alert(&message);
                        uploading.set(false);
                        return;
                    }
                }
            }
            let count = files.len();
            let result = store
                .add_photos_with_progress(&event_id, files, move |progress| {
                    upload_status.set(Some(progress.clone()))
                })
                .await;
            match result {
                Ok(()) => info!("Uploaded {count} photos to {event_id}"),
                Err(e) => {
                    error!("Upload to {event_id} failed: {e}");
                    browser::alert("Upload failed. Please try again.");
                }
            }
            uploading.set(false);
            upload_status.set(None);
        });
    };

    let bulk_store = store.clone();
    let delete_many = use_callback(move |(ids, prompt, failure): (Vec<PhotoId>, String, &'static str)| {
        if ids.is_empty() || !browser::confirm(&prompt) {
            return;
        }
        let store = bulk_store.clone();
        deleting.set(true);
        spawn(async move {
            match store.delete_photos(&ids).await {
                Ok(()) => selection.write().clear(),
                Err(e) => {
                    error!("Bulk delete failed: {e}");
                    browser::alert(failure);
                }
            }
            deleting.set(false);
        });
    });

    let single_store = store.clone();
    let delete_one = use_callback(move |id: PhotoId| {
        if !browser::confirm("Delete this photo? This cannot be undone.") {
            return;
        }
        let store = single_store.clone();
        spawn(async move {
            match store.delete_photo(&id).await {
                Ok(()) => selection.write().remove(&id),
                Err(e) => {
                    error!("Failed to delete photo {id}: {e}");
                    browser::alert("Failed to delete photo. Please try again.");
                }
            }
        });
    });

    let cover_store = store.clone();
    let cover_id = event_id.clone();
    let set_cover = use_callback(move |photo_id: PhotoId| {
        let store = cover_store.clone();
        let event_id = cover_id.clone();
        spawn(async move {
            if let Err(e) = store.set_cover_photo(&event_id, &photo_id).await {
                error!("Failed to set cover for {event_id}: {e}");
                browser::alert("Failed to set cover photo.");
            }
        });
    });

    let caption_store = store.clone();
    let save_caption = use_callback(move |(photo_id, caption): (PhotoId, String)| {
        let store = caption_store.clone();
        spawn(async move {
            if let Err(e) = store.update_photo_caption(&photo_id, caption.trim()).await {
                error!("Failed to save caption for {photo_id}: {e}");
                browser::alert("Failed to save caption.");
            }
        });
    });

    let snap = snapshot.read();
    let Some(event) = snap.event_by_id(&event_id).cloned() else {
        let secondary = AppColors::secondary(is_dark);
        return rsx! {
            Page {
                p { style: "color: {secondary};", "Event not found" }
                button {
                    onclick: move |_| on_navigate.call(Route::Admin(AdminRoute::Dashboard)),
                    style: "background: none; border: none; color: {secondary}; cursor: pointer;",
                    "← Back to dashboard"
                }
            }
        };
    };
    let photos: Vec<&Photo> = snap.photos_for_event(&event.id);
    let cards: Vec<Photo> = photos.iter().map(|p| (*p).clone()).collect();
    let all_ids: Vec<PhotoId> = photos.iter().map(|p| p.id.clone()).collect();
    let current = selection();
    let selected_count = current.len();
    let all_selected = current.all_selected(&photos);
    let photo_total = photos.len();
    let cover_photo_id = event.cover_photo_id.clone();
    let watermark = event.watermark_text.clone();
    let busy = deleting() || uploading();
    let select_all_id = event.id.clone();
    let upload_opacity = if uploading() { "0.6" } else { "1" };

    let primary = AppColors::primary(is_dark);
    let secondary = AppColors::secondary(is_dark);
    let border = AppColors::border(is_dark);
    let background = AppColors::background(is_dark);
    let pill = format!(
        "padding: 8px 16px; border-radius: 999px; border: 1px solid {border}; background: transparent; color: {primary}; font-size: 0.875rem; cursor: pointer;"
    );
    let danger_pill = format!(
        "padding: 8px 16px; border-radius: 999px; border: 1px solid {}; background: transparent; color: {}; font-size: 0.875rem; cursor: pointer;",
        AppColors::DANGER,
        AppColors::DANGER
    );

    rsx! {
        Page {
            button {
                onclick: move |_| on_navigate.call(Route::Admin(AdminRoute::Dashboard)),
                style: "background: none; border: none; color: {secondary}; font-size: 0.875rem; cursor: pointer; margin-bottom: 24px;",
                "← Back to dashboard"
            }

            Panel { is_dark,
                div { style: "display: flex; flex-wrap: wrap; justify-content: space-between; align-items: center; gap: 24px;",
                    div {
                        h1 { style: "font-size: 1.8rem; font-weight: 600; margin: 0 0 8px;", "{event.title}" }
                        p { style: "color: {secondary}; font-family: monospace; font-size: 0.875rem; margin: 0;", "/event/{event.slug}" }
                        if let Some(text) = watermark.clone() {
                            p { style: "color: {secondary}; font-size: 0.75rem; margin: 8px 0 0;", "Watermark: {text}" }
                        }
                    }
                    label {
                        style: "padding: 12px 24px; border-radius: 16px; background: {primary}; color: {background}; font-weight: 600; cursor: pointer; opacity: {upload_opacity};",
                        if uploading() { "Uploading..." } else { "Upload Photos" }
                        input {
                            r#type: "file",
                            multiple: true,
                            accept: "image/*",
                            disabled: uploading(),
                            onchange: on_files,
                            style: "display: none;",
                        }
                    }
                }
                if let Some(status) = upload_status() {
                    div { style: "margin-top: 24px;",
                        UploadProgressCard { is_dark, status }
                    }
                }
            }

            Panel { is_dark,
                div { style: "display: flex; flex-wrap: wrap; justify-content: space-between; align-items: center; gap: 16px;",
                    p { style: "color: {secondary}; font-size: 0.875rem; margin: 0;", "{selection_label(selected_count)}" }
                    div { style: "display: flex; flex-wrap: wrap; gap: 8px;",
                        button {
                            disabled: photo_total == 0 || busy,
                            onclick: move |_| {
                                let snap = snapshot.read();
                                let photos = snap.photos_for_event(&select_all_id);
                                selection.write().toggle_all(&photos);
                            },
                            style: "{pill}",
                            if all_selected { "Clear" } else { "Select all" }
                        }
                        button {
                            disabled: selected_count == 0 || busy,
                            onclick: move |_| {
                                let ids = selection().ids();
                                let prompt = delete_selected_prompt(ids.len());
                                delete_many.call((ids, prompt, "Failed to delete selected photos. Please try again."));
                            },
                            style: "{danger_pill}",
                            if deleting() { "Deleting..." } else { "Delete selected" }
                        }
                        button {
                            disabled: photo_total == 0 || busy,
                            onclick: {
                                let ids = all_ids.clone();
                                move |_| {
                                    let prompt = delete_all_prompt(ids.len());
                                    delete_many.call((ids.clone(), prompt, "Failed to delete photos. Please try again."));
                                }
                            },
                            style: "{danger_pill}",
                            "Delete all"
                        }
                    }
                }
            }

            if cards.is_empty() {
                div { style: "text-align: center; padding: 64px 0; border-radius: 24px; border: 1px dashed {border}; color: {secondary};",
                    "No photos yet."
                }
            } else {
                div { style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 16px;",
                    for photo in cards {
                        ManagedPhoto {
                            key: "{photo.id}",
                            is_dark,
                            is_cover: cover_photo_id.as_ref() == Some(&photo.id),
                            is_selected: current.contains(&photo.id),
                            photo: photo.clone(),
                            watermark: watermark.clone(),
                            on_toggle_select: move |id: PhotoId| selection.write().toggle(&id),
                            on_set_cover: set_cover,
                            on_delete: delete_one,
                            on_caption: save_caption,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ManagedPhoto(
    is_dark: bool,
    is_cover: bool,
    is_selected: bool,
    photo: Photo,
    watermark: Option<String>,
    on_toggle_select: EventHandler<PhotoId>,
    on_set_cover: EventHandler<PhotoId>,
    on_delete: EventHandler<PhotoId>,
    on_caption: EventHandler<(PhotoId, String)>,
) -> Element {
    let border = AppColors::border(is_dark);
    let surface = AppColors::surface(is_dark);
    let secondary = AppColors::secondary(is_dark);
    let accent = AppColors::accent(is_dark);
    let outline = if is_selected { accent } else { border };
    let select_id = photo.id.clone();
    let cover_id = photo.id.clone();
    let delete_id = photo.id.clone();
    let caption_id = photo.id.clone();
    let caption = photo.caption.clone().unwrap_or_default();
    let action = "flex: 1; padding: 6px 8px; border-radius: 8px; border: none; font-size: 0.75rem; cursor: pointer;";

    rsx! {
        div { style: "position: relative; border-radius: 16px; overflow: hidden; border: 2px solid {outline}; background: {surface};",
            div { style: "position: relative; aspect-ratio: 1 / 1; overflow: hidden;",
                img { src: "{photo.url}", alt: "{photo.name}", loading: "lazy", style: "width: 100%; height: 100%; object-fit: cover;" }
                input {
                    r#type: "checkbox",
                    checked: is_selected,
                    "aria-label": "Select photo",
                    onchange: move |_| on_toggle_select.call(select_id.clone()),
                    style: "position: absolute; top: 8px; left: 8px; width: 18px; height: 18px; cursor: pointer;",
                }
                if let Some(text) = watermark {
                    div { style: "position: absolute; bottom: 8px; right: 8px; font-size: 10px; font-weight: 700; color: rgba(255,255,255,0.7); pointer-events: none;",
                        "{text}"
                    }
                }
            }
            div { style: "padding: 8px; display: flex; gap: 8px;",
                button {
                    disabled: is_cover,
                    onclick: move |_| on_set_cover.call(cover_id.clone()),
                    style: "{action} background: rgba(255,255,255,0.9); color: #111827;",
                    if is_cover { "Cover Photo" } else { "Set Cover" }
                }
                button {
                    onclick: move |_| on_delete.call(delete_id.clone()),
                    style: "{action} background: {AppColors::DANGER}; color: white;",
                    "Delete"
                }
            }
            input {
                r#type: "text",
                placeholder: "Add a caption...",
                value: "{caption}",
                onchange: move |ev| on_caption.call((caption_id.clone(), ev.value())),
                style: "width: 100%; box-sizing: border-box; padding: 8px; border: none; border-top: 1px solid {border}; background: transparent; color: {secondary}; font-size: 0.75rem;",
            }
        }
    }
}
