//! Hash routes: `#/`, `#/event/{slug}`, `#/admin`, `#/admin/edit/{event id}`.
//! Unknown paths fall back to Home.

use lumina_client_core::EventId;

#[derive(Clone, Debug, PartialEq)]
pub enum Route {
    Home,
    Event { slug: String },
    Admin(AdminRoute),
}

#[derive(Clone, Debug, PartialEq)]
pub enum AdminRoute {
    Dashboard,
    Edit(EventId),
}

impl Route {
    /// Parses a location hash or path (`#/event/x`, `/event/x` and `event/x` are equivalent).
    /// Admin paths resolve to Home when `admin_enabled` is false.
    pub fn parse(path: &str, admin_enabled: bool) -> Route {
        let path = path.trim_start_matches('#');
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            ["event", slug] => Route::Event {
                slug: urlencoding::decode(slug)
                    .map(|s| s.into_owned())
                    .unwrap_or_else(|_| slug.to_string()),
            },
            ["admin"] if admin_enabled => Route::Admin(AdminRoute::Dashboard),
            ["admin", "edit", id] if admin_enabled => match EventId::parse(id) {
                Ok(id) => Route::Admin(AdminRoute::Edit(id)),
                Err(_) => Route::Admin(AdminRoute::Dashboard),
            },
            _ => Route::Home,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Event { slug } => format!("/event/{}", urlencoding::encode(slug)),
            Route::Admin(AdminRoute::Dashboard) => "/admin".to_string(),
            Route::Admin(AdminRoute::Edit(id)) => format!("/admin/edit/{id}"),
        }
    }

    /// Link target for anchors, e.g. `#/event/smith-wedding`.
    pub fn href(&self) -> String {
        format!("#{}", self.path())
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Route::Admin(_))
    }
}
