use dioxus::prelude::*;
use lumina_client_core::UploadProgress;
use crate::format::{format_bytes, upload_percent};
use crate::theme::AppColors;

#[component]
pub fn UploadProgressCard(is_dark: bool, status: UploadProgress) -> Element {
    let secondary = AppColors::secondary(is_dark);
    let primary = AppColors::primary(is_dark);
    let border = AppColors::border(is_dark);
    let percent = upload_percent(&status);
    let uploaded = format_bytes(status.uploaded_bytes);
    let total = format_bytes(status.total_bytes);

    rsx! {
        div { style: "font-size: 0.75rem; color: {secondary}; border: 1px solid {border}; border-radius: 16px; padding: 16px;",
            div { style: "display: flex; justify-content: space-between; gap: 8px;",
                span { "Uploading {status.current}/{status.total}" }
                span { style: "color: {primary}; font-weight: 500; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;", "{status.file.name}" }
            }
            div { style: "display: flex; justify-content: space-between; margin: 8px 0; text-transform: uppercase; font-size: 0.7rem;",
                span { "{uploaded} uploaded" }
                span { "Total {total}" }
            }
            div { style: "height: 6px; border-radius: 999px; background: {border}; overflow: hidden;",
                div { style: "height: 100%; width: {percent}%; background: {primary};" }
            }
        }
    }
}
