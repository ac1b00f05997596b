use dioxus::prelude::*;
use crate::route::Route;
use crate::theme::{spacing, AppColors};

/// Page shell: header with brand, theme toggle and admin/public link; footer.
/// `managed_slug` turns the admin header link into "View gallery" for that event.
#[component]
pub fn Layout(
    is_dark: bool,
    admin_enabled: bool,
    route: Route,
    managed_slug: Option<String>,
    on_toggle_theme: EventHandler<()>,
    on_navigate: EventHandler<Route>,
    children: Element,
) -> Element {
    let background = AppColors::background(is_dark);
    let surface = AppColors::surface(is_dark);
    let primary = AppColors::primary(is_dark);
    let secondary = AppColors::secondary(is_dark);
    let accent = AppColors::accent(is_dark);
    let border = AppColors::border(is_dark);
    let theme_label = if is_dark { "☀" } else { "☾" };
    let theme_title = if is_dark { "Switch to Light Mode" } else { "Switch to Dark Mode" };
    let year = chrono::Local::now().format("%Y").to_string();

    let (public_target, public_label) = match &managed_slug {
        Some(slug) => (Route::Event { slug: slug.clone() }, "View gallery"),
        None => (Route::Home, "Public View"),
    };

    rsx! {
        div {
            style: "min-height: 100vh; display: flex; flex-direction: column; background: {background}; color: {primary}; font-family: system-ui, sans-serif;",
            header { style: "position: sticky; top: {spacing::LG}; z-index: 50; padding: 0 {spacing::MD};",
                div {
                    style: "max-width: {spacing::PAGE_WIDTH}; margin: 0 auto; display: flex; align-items: center; justify-content: space-between; padding: 12px {spacing::LG}; border-radius: 16px; background: {surface}; border: 1px solid {border};",
                    button {
                        onclick: move |_| on_navigate.call(Route::Home),
                        style: "background: none; border: none; cursor: pointer; text-align: left; color: {primary};",
                        p { style: "margin: 0; font-size: 0.7rem; letter-spacing: 0.3em; text-transform: uppercase; color: {secondary};", "Lumina" }
                        p { style: "margin: 0; font-size: 1.1rem; font-weight: 600;", "Studio Collective" }
                    }
                    nav { style: "display: flex; align-items: center; gap: 12px;",
                        button {
                            title: "{theme_title}",
                            onclick: move |_| on_toggle_theme.call(()),
                            style: "padding: {spacing::SM}; border-radius: 12px; border: none; background: transparent; color: {secondary}; cursor: pointer;",
                            "{theme_label}"
                        }
                        if route.is_admin() {
                            button {
                                onclick: move |_| on_navigate.call(public_target.clone()),
                                style: "padding: {spacing::SM} {spacing::MD}; border-radius: 12px; border: none; background: {primary}; color: {background}; font-weight: 600; cursor: pointer;",
                                "{public_label}"
                            }
                        } else if admin_enabled {
                            button {
                                title: "Photographer Login",
                                onclick: move |_| on_navigate.call(Route::Admin(crate::route::AdminRoute::Dashboard)),
                                style: "padding: {spacing::SM} {spacing::MD}; border-radius: 12px; border: 1px solid {accent}; background: transparent; color: {primary}; font-weight: 600; cursor: pointer;",
                                "🔒 Admin"
                            }
                        }
                    }
                }
            }
            main { style: "flex-grow: 1; padding-top: 40px;", {children} }
            footer { style: "border-top: 1px solid {border}; padding: 40px 0; margin-top: 64px; text-align: center; color: {secondary}; font-size: 0.875rem;",
                p { "© {year} Lumina Studio Collective." }
                p { "Crafted with light, preserved with care." }
            }
        }
    }
}
