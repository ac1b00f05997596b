use dioxus::logger::tracing::error;
use dioxus::prelude::*;
use lumina_client_core::AdminGate;
use crate::app::SharedStore;
use crate::theme::AppColors;
use crate::widgets::Panel;

/// Passcode form. The backend checks the passcode; only a verified one unlocks the gate.
#[component]
pub fn LoginScreen(is_dark: bool) -> Element {
    let store = use_context::<SharedStore>();
    let mut gate = use_context::<Signal<AdminGate>>();
    let mut passcode = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let primary = AppColors::primary(is_dark);
    let secondary = AppColors::secondary(is_dark);
    let background = AppColors::background(is_dark);
    let border = AppColors::border(is_dark);

    rsx! {
        div { style: "display: flex; align-items: center; justify-content: center; min-height: 70vh;",
            div { style: "width: 100%; max-width: 420px;",
                Panel { is_dark,
                    h2 { style: "font-size: 1.5rem; font-weight: 700; text-align: center; margin: 0 0 24px;", "Photographer Access" }
                    form {
                        onsubmit: move |ev: FormEvent| {
                            ev.prevent_default();
                            let store = store.clone();
                            let pass = passcode();
                            loading.set(true);
                            error.set(None);
                            spawn(async move {
                                match AdminGate::try_unlock(store.api(), &pass).await {
                                    Ok(next) if next.is_unlocked() => gate.set(next),
                                    Ok(_) => error.set(Some("Invalid passcode".to_string())),
                                    Err(e) => {
                                        error!("Admin login failed: {e}");
                                        error.set(Some(format!("Could not reach the server: {e}")));
                                    }
                                }
                                loading.set(false);
                            });
                        },
                        label { style: "display: block; margin-bottom: 4px; font-size: 0.875rem; color: {secondary};", "Passcode" }
                        input {
                            r#type: "password",
                            value: "{passcode}",
                            oninput: move |ev| passcode.set(ev.value()),
                            style: "width: 100%; padding: 12px 16px; border-radius: 8px; border: 1px solid {border}; background: {background}; color: {primary}; box-sizing: border-box; margin-bottom: 16px;",
                        }
                        if let Some(e) = error() {
                            p { style: "color: {AppColors::DANGER}; font-size: 0.875rem; margin: 0 0 12px;", "{e}" }
                        }
                        button {
                            r#type: "submit",
                            disabled: loading(),
                            style: "width: 100%; padding: 12px; border-radius: 8px; border: none; background: {primary}; color: {background}; font-weight: 700; cursor: pointer;",
                            if loading() { "Checking…" } else { "Unlock Dashboard" }
                        }
                    }
                }
            }
        }
    }
}
