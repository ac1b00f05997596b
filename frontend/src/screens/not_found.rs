use dioxus::prelude::*;
use crate::route::Route;
use crate::theme::AppColors;

#[component]
pub fn NotFoundScreen(is_dark: bool, on_navigate: EventHandler<Route>) -> Element {
    let primary = AppColors::primary(is_dark);
    let secondary = AppColors::secondary(is_dark);
    let border = AppColors::border(is_dark);
    rsx! {
        div { style: "min-height: 60vh; display: flex; flex-direction: column; align-items: center; justify-content: center; text-align: center; padding: 0 16px;",
            h2 { style: "font-size: 1.5rem; font-weight: 700; color: {primary}; margin-bottom: 8px;", "Event Not Found" }
            p { style: "color: {secondary}; margin-bottom: 24px;",
                "The gallery you are looking for does not exist or has been removed."
            }
            button {
                onclick: move |_| on_navigate.call(Route::Home),
                style: "padding: 8px 24px; border-radius: 999px; border: 1px solid {border}; background: transparent; color: {primary}; cursor: pointer;",
                "Return Home"
            }
        }
    }
}
