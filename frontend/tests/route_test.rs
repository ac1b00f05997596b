//! Hash routing: parse, fallbacks and round trips through `path`.

use lumina_client_core::EventId;
use lumina_frontend::route::{AdminRoute, Route};
use pretty_assertions::assert_eq;

const EVENT_ID: &str = "6f1c2a3b-4d5e-4f60-8a7b-9c0d1e2f3a4b";

#[test]
fn parses_public_routes() {
    assert_eq!(Route::parse("", true), Route::Home);
    assert_eq!(Route::parse("#/", true), Route::Home);
    assert_eq!(
        Route::parse("#/event/smith-wedding", true),
        Route::Event { slug: "smith-wedding".to_string() }
    );
    assert_eq!(
        Route::parse("/event/smith-wedding/", true),
        Route::Event { slug: "smith-wedding".to_string() }
    );
}

#[test]
fn unknown_paths_fall_back_to_home() {
    assert_eq!(Route::parse("#/nope", true), Route::Home);
    assert_eq!(Route::parse("#/event", true), Route::Home);
    assert_eq!(Route::parse("#/event/a/b", true), Route::Home);
}

#[test]
fn admin_routes_need_admin_enabled() {
    assert_eq!(Route::parse("#/admin", true), Route::Admin(AdminRoute::Dashboard));
    assert_eq!(Route::parse("#/admin", false), Route::Home);
    let edit = format!("#/admin/edit/{EVENT_ID}");
    assert_eq!(
        Route::parse(&edit, true),
        Route::Admin(AdminRoute::Edit(EventId::parse(EVENT_ID).unwrap()))
    );
    assert_eq!(Route::parse(&edit, false), Route::Home);
}

#[test]
fn malformed_edit_id_goes_to_dashboard() {
    assert_eq!(Route::parse("#/admin/edit/not-a-uuid", true), Route::Admin(AdminRoute::Dashboard));
}

#[test]
fn slug_is_percent_decoded_and_encoded() {
    let route = Route::parse("#/event/summer%20gala", true);
    assert_eq!(route, Route::Event { slug: "summer gala".to_string() });
    assert_eq!(route.path(), "/event/summer%20gala");
}

#[test]
fn paths_parse_back_to_the_same_route() {
    let routes = [
        Route::Home,
        Route::Event { slug: "smith-wedding".to_string() },
        Route::Admin(AdminRoute::Dashboard),
        Route::Admin(AdminRoute::Edit(EventId::parse(EVENT_ID).unwrap())),
    ];
    for route in routes {
        assert_eq!(Route::parse(&route.href(), true), route);
    }
}

#[test]
fn only_admin_routes_report_is_admin() {
    assert!(Route::Admin(AdminRoute::Dashboard).is_admin());
    assert!(!Route::Home.is_admin());
    assert!(!Route::Event { slug: "x".to_string() }.is_admin());
}
