use dioxus::prelude::*;
use crate::theme::{spacing, AppColors};

#[component]
pub fn Panel(is_dark: bool, children: Element) -> Element {
    let surface = if is_dark { "rgba(22,22,29,0.9)" } else { "rgba(255,255,255,0.95)" };
    let border = AppColors::border(is_dark);
    rsx! {
        div {
            style: "background: {surface}; border: 1px solid {border}; border-radius: 24px; padding: {spacing::CARD_PADDING}; margin-bottom: {spacing::LG};",
            {children}
        }
    }
}

/// Centered page column.
#[component]
pub fn Page(children: Element) -> Element {
    rsx! {
        div { style: "max-width: {spacing::PAGE_WIDTH}; margin: 0 auto; padding: 0 {spacing::MD} {spacing::XL};",
            {children}
        }
    }
}

#[component]
pub fn Spinner(is_dark: bool) -> Element {
    let accent = AppColors::accent(is_dark);
    rsx! {
        div { style: "display: flex; align-items: center; justify-content: center; min-height: 60vh; color: {accent};",
            "Loading…"
        }
    }
}
