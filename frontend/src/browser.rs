//! Browser glue: page origin, location hash, confirm/alert dialogs, blob downloads.
//! Host builds (tests) get fallbacks that never approve a destructive action.

#[cfg(target_arch = "wasm32")]
mod imp {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    fn window() -> Option<web_sys::Window> {
        web_sys::window()
    }

    /// `https://photos.example.com`, used to anchor a relative API base.
    pub fn page_origin() -> String {
        window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }

    pub fn location_hash() -> String {
        window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default()
    }

    pub fn set_location_hash(path: &str) {
        if let Some(w) = window() {
            let _ = w.location().set_hash(path);
        }
    }

    /// Calls `handler` with the new hash on back/forward or manual URL edits.
    /// The listener lives for the rest of the page.
    pub fn on_hash_change(mut handler: impl FnMut(String) + 'static) {
        let Some(w) = window() else { return };
        let callback = Closure::<dyn FnMut()>::new(move || handler(location_hash()));
        let _ = w.add_event_listener_with_callback("hashchange", callback.as_ref().unchecked_ref());
        callback.forget();
    }

    pub fn confirm(message: &str) -> bool {
        window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    pub fn alert(message: &str) {
        if let Some(w) = window() {
            let _ = w.alert_with_message(message);
        }
    }

    fn create_blob_url(data: &[u8], mime_type: &str) -> Result<String, String> {
        let bytes = js_sys::Uint8Array::from(data);
        let parts = js_sys::Array::new();
        parts.push(&bytes);

        let opts = web_sys::BlobPropertyBag::new();
        opts.set_type(mime_type);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|e| format!("Failed to create blob: {e:?}"))?;
        web_sys::Url::create_object_url_with_blob(&blob)
            .map_err(|e| format!("Failed to create blob URL: {e:?}"))
    }

    pub fn save_bytes(data: &[u8], mime_type: &str, file_name: &str) -> Result<(), String> {
        let url = create_blob_url(data, mime_type)?;
        let document = window()
            .and_then(|w| w.document())
            .ok_or("No document")?;
        let body = document.body().ok_or("No document body")?;
        let anchor = document
            .create_element("a")
            .map_err(|e| format!("Failed to create link: {e:?}"))?;
        let _ = anchor.set_attribute("href", &url);
        let _ = anchor.set_attribute("download", file_name);
        let _ = anchor.set_attribute("style", "display:none");
        let _ = body.append_child(&anchor);
        if let Some(el) = anchor.dyn_ref::<web_sys::HtmlElement>() {
            el.click();
        }
        let _ = body.remove_child(&anchor);
        let _ = web_sys::Url::revoke_object_url(&url);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use dioxus::logger::tracing::{error, warn};

    pub fn page_origin() -> String {
        String::new()
    }

    pub fn location_hash() -> String {
        String::new()
    }

    pub fn set_location_hash(_path: &str) {}

    pub fn on_hash_change(_handler: impl FnMut(String) + 'static) {}

    /// No dialog to ask with, so nothing is confirmed.
    pub fn confirm(message: &str) -> bool {
        warn!("confirm declined (no browser): {message}");
        false
    }

    pub fn alert(message: &str) {
        error!("alert: {message}");
    }

    pub fn save_bytes(data: &[u8], _mime_type: &str, file_name: &str) -> Result<(), String> {
        std::fs::write(file_name, data).map_err(|e| format!("Failed to write {file_name}: {e}"))
    }
}

pub use imp::{alert, confirm, location_hash, on_hash_change, page_origin, save_bytes, set_location_hash};
