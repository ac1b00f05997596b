use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;
use lumina_client_core::{GeminiSuggester, TextSuggester};
use crate::app::SharedStore;
use crate::browser;
use crate::config::CONFIG;
use crate::forms::EventForm;
use crate::theme::AppColors;
use crate::widgets::Panel;

#[component]
pub fn CreateEventForm(is_dark: bool, on_close: EventHandler<()>) -> Element {
    let store = use_context::<SharedStore>();
    let mut form = use_signal(EventForm::today);
    let mut generating = use_signal(|| false);
    let mut saving = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let suggest = move |_| {
        let current = form();
        if !current.can_suggest() {
            return;
        }
        generating.set(true);
        spawn(async move {
            let suggester = GeminiSuggester::new(CONFIG.gemini_api_key.clone());
            let description = suggester.describe_event(&current.title, &current.date).await;
            form.write().apply_suggestion(description);
            generating.set(false);
        });
    };

    let submit = move |ev: FormEvent| {
        ev.prevent_default();
        let payload = match form().to_new_event() {
            Ok(payload) => payload,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        let store = store.clone();
        saving.set(true);
        error.set(None);
        spawn(async move {
            match store.add_event(payload).await {
                Ok(created) => {
                    info!("Created event {} ({})", created.title, created.slug);
                    on_close.call(());
                }
                Err(e) => {
                    error!("Failed to create event: {e}");
                    browser::alert("Failed to create event.");
                    error.set(Some(e.to_string()));
                }
            }
            saving.set(false);
        });
    };

    let primary = AppColors::primary(is_dark);
    let secondary = AppColors::secondary(is_dark);
    let accent = AppColors::accent(is_dark);
    let border = AppColors::border(is_dark);
    let background = AppColors::background(is_dark);
    let input = format!(
        "width: 100%; padding: 8px 12px; border-radius: 8px; border: 1px solid {border}; background: {background}; color: {primary}; box-sizing: border-box;"
    );
    let label = format!(
        "display: block; margin-bottom: 4px; font-size: 0.75rem; text-transform: uppercase; color: {secondary};"
    );
    let values = form();

    rsx! {
        div { style: "position: fixed; inset: 0; z-index: 50; display: flex; align-items: center; justify-content: center; background: rgba(0,0,0,0.7); padding: 16px;",
            div { style: "width: 100%; max-width: 520px;",
                Panel { is_dark,
                    div { style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 24px;",
                        div {
                            p { style: "font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.4em; color: {secondary}; margin: 0;", "New Collection" }
                            h2 { style: "font-size: 1.5rem; font-weight: 600; margin: 8px 0 0;", "Create event" }
                        }
                        button {
                            r#type: "button",
                            onclick: move |_| on_close.call(()),
                            style: "background: none; border: none; color: {secondary}; cursor: pointer;",
                            "Close"
                        }
                    }
                    form { onsubmit: submit,
                        div { style: "margin-bottom: 16px;",
                            label { style: "{label}", "Event Title" }
                            input {
                                r#type: "text",
                                required: true,
                                placeholder: "e.g. Smith Wedding",
                                value: "{values.title}",
                                oninput: move |ev| form.write().set_title(&ev.value()),
                                style: "{input}",
                            }
                        }
                        div { style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px; margin-bottom: 16px;",
                            div {
                                label { style: "{label}", "Date" }
                                input {
                                    r#type: "date",
                                    required: true,
                                    value: "{values.date}",
                                    oninput: move |ev| form.write().date = ev.value(),
                                    style: "{input}",
                                }
                            }
                            div {
                                label { style: "{label}", "URL Slug" }
                                input {
                                    r#type: "text",
                                    required: true,
                                    value: "{values.slug}",
                                    oninput: move |ev| form.write().slug = ev.value(),
                                    style: "{input}",
                                }
                            }
                        }
                        div { style: "margin-bottom: 16px;",
                            label { style: "{label}", "Watermark Text (Optional)" }
                            input {
                                r#type: "text",
                                placeholder: "e.g. © Lumina Photography",
                                value: "{values.watermark_text}",
                                oninput: move |ev| form.write().watermark_text = ev.value(),
                                style: "{input}",
                            }
                            p { style: "font-size: 10px; color: {secondary}; margin: 4px 0 0;",
                                "This text will be overlayed on all photos in this gallery."
                            }
                        }
                        div { style: "margin-bottom: 16px;",
                            div { style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 4px;",
                                label { style: "{label} margin: 0;", "Description" }
                                button {
                                    r#type: "button",
                                    disabled: generating() || !values.can_suggest(),
                                    onclick: suggest,
                                    style: "background: none; border: none; font-size: 0.75rem; color: {accent}; cursor: pointer;",
                                    if generating() { "Thinking..." } else { "✦ AI Write" }
                                }
                            }
                            textarea {
                                placeholder: "Optional description...",
                                value: "{values.description}",
                                oninput: move |ev| form.write().description = ev.value(),
                                style: "{input} height: 96px; resize: none;",
                            }
                        }
                        if let Some(message) = error() {
                            p { style: "color: {AppColors::DANGER}; font-size: 0.875rem;", "{message}" }
                        }
                        div { style: "display: flex; justify-content: flex-end; gap: 12px; margin-top: 24px;",
                            button {
                                r#type: "button",
                                onclick: move |_| on_close.call(()),
                                style: "padding: 8px 16px; border-radius: 12px; border: none; background: transparent; color: {secondary}; cursor: pointer;",
                                "Cancel"
                            }
                            button {
                                r#type: "submit",
                                disabled: saving(),
                                style: "padding: 8px 24px; border-radius: 12px; border: none; background: {primary}; color: {background}; font-weight: 600; cursor: pointer;",
                                if saving() { "Creating…" } else { "Create Event" }
                            }
                        }
                    }
                }
            }
        }
    }
}
