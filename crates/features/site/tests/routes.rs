use olaat_domain::nav::NAV_ITEMS;
use olaat_site::Route;

#[test]
fn route_table_matches_navigation() {
    // Every header menu entry must map onto a registered route, in order.
    assert_eq!(NAV_ITEMS.len(), Route::PAGES.len());
    for (item, route) in NAV_ITEMS.iter().zip(Route::PAGES) {
        assert_eq!(route.to_string(), item.path);
    }
}

#[test]
fn registered_paths_parse_to_their_route() {
    assert_eq!(Route::resolve("/"), Route::Home {});
    assert_eq!(Route::resolve("/about"), Route::About {});
    assert_eq!(Route::resolve("/services"), Route::Services {});
    assert_eq!(Route::resolve("/elite"), Route::Elite {});
    assert_eq!(Route::resolve("/speaking"), Route::Speaking {});
    assert_eq!(Route::resolve("/veterans"), Route::Veterans {});
    assert_eq!(Route::resolve("/contact"), Route::Contact {});
}

#[test]
fn unregistered_paths_hit_the_catch_all() {
    assert!(matches!(Route::resolve("/pricing"), Route::NotFound { .. }));
    // Matching is exact, never by prefix.
    assert!(matches!(Route::resolve("/about/team"), Route::NotFound { .. }));
}

#[test]
fn elite_heading_names_the_framework() {
    assert!(Route::Elite {}.heading().contains("E.L.I.T.E.™ Framework"));
}
