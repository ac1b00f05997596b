//! Gallery theme: colors and spacing. Light/dark selected at runtime by the header toggle.

#[derive(Clone, Copy)]
pub struct AppColors;

impl AppColors {
    // Light
    pub const LIGHT_BACKGROUND: &'static str = "#F7F6F3";
    pub const LIGHT_SURFACE: &'static str = "#FFFFFF";
    pub const LIGHT_PRIMARY: &'static str = "#111111";
    pub const LIGHT_SECONDARY: &'static str = "#6B6B6B";
    pub const LIGHT_ACCENT: &'static str = "#7C3AED";

    // Dark
    pub const DARK_BACKGROUND: &'static str = "#0B0B0F";
    pub const DARK_SURFACE: &'static str = "#16161D";
    pub const DARK_PRIMARY: &'static str = "#F5F5F5";
    pub const DARK_SECONDARY: &'static str = "#A1A1AA";
    pub const DARK_ACCENT: &'static str = "#A78BFA";

    pub const DANGER: &'static str = "#EF4444";
    pub const FAVORITE: &'static str = "#F43F5E";

    pub fn background(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_BACKGROUND
        } else {
            Self::LIGHT_BACKGROUND
        }
    }
    pub fn surface(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_SURFACE
        } else {
            Self::LIGHT_SURFACE
        }
    }
    pub fn primary(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_PRIMARY
        } else {
            Self::LIGHT_PRIMARY
        }
    }
    pub fn secondary(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_SECONDARY
        } else {
            Self::LIGHT_SECONDARY
        }
    }
    pub fn accent(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_ACCENT
        } else {
            Self::LIGHT_ACCENT
        }
    }
    pub fn border(is_dark: bool) -> &'static str {
        if is_dark {
            "rgba(255,255,255,0.08)"
        } else {
            "rgba(0,0,0,0.08)"
        }
    }
}

pub mod spacing {
    pub const SM: &str = "8px";
    pub const MD: &str = "16px";
    pub const LG: &str = "24px";
    pub const XL: &str = "32px";
    pub const CARD_PADDING: &str = "24px";
    pub const PAGE_WIDTH: &str = "1152px";
}
