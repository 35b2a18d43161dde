mod common;

use spoke_router::prelude::*;

#[test]
fn test_home_route() {
    let router = common::test_router();

    let outcome = router.dispatch("/", &common::anonymous());
    assert_eq!(outcome.view_name(), Some("Home"));
}

#[test]
fn test_empty_path_maps_to_home() {
    let router = common::test_router();

    let outcome = router.dispatch("", &common::anonymous());
    assert_eq!(outcome.view_name(), Some("Home"));
}

#[test]
fn test_unguarded_routes_render_regardless_of_session() {
    let router = common::test_router();

    for (path, view) in [
        ("/", "Home"),
        ("/bikes", "Bikes"),
        ("/login", "Login"),
        ("/signup", "Signup"),
    ] {
        let outcome = router.dispatch(path, &common::anonymous());
        assert_eq!(outcome.view_name(), Some(view), "path {path} (anonymous)");

        let outcome = router.dispatch(path, &common::authenticated());
        assert_eq!(
            outcome.view_name(),
            Some(view),
            "path {path} (authenticated)"
        );
    }
}

#[test]
fn test_bike_details_extracts_id() {
    let router = common::test_router();

    let outcome = router.dispatch("/bikes/42", &common::anonymous());
    assert_eq!(outcome.view_name(), Some("BikeDetails"));

    let Outcome::Render { view, params } = outcome else {
        panic!("expected render outcome");
    };
    assert_eq!(params.get("id"), Some("42"));
    assert_eq!(view.render(&params), "<BikeDetails id=42/>");
}

#[test]
fn test_trailing_slash_resolves_to_list_not_details() {
    let router = common::test_router();

    // `/bikes/` has no id segment: it normalizes to `/bikes` and must hit
    // the list view, never the detail route with an empty parameter.
    let outcome = router.dispatch("/bikes/", &common::anonymous());
    assert_eq!(outcome.view_name(), Some("Bikes"));
}

#[test]
fn test_unregistered_path_is_not_found() {
    let router = common::test_router();

    assert!(router.dispatch("/nonexistent", &common::anonymous()).is_not_found());
    assert!(router.dispatch("/bikes/42/photos", &common::authenticated()).is_not_found());
}

#[test]
fn test_dispatch_is_idempotent() {
    let router = common::test_router();
    let session = common::anonymous();

    let first = router.dispatch("/bikes/42", &session);
    let second = router.dispatch("/bikes/42", &session);

    assert_eq!(first.view_name(), second.view_name());
    assert_eq!(format!("{first:?}"), format!("{second:?}"));
}

#[test]
fn test_route_info_matches_application_surface() {
    let router = common::test_router();

    let info = serde_json::to_value(router.table().route_info()).unwrap();
    assert_eq!(
        info,
        serde_json::json!([
            { "pattern": "/",              "view": "Home",         "guarded": false },
            { "pattern": "/bikes",         "view": "Bikes",        "guarded": false },
            { "pattern": "/bikes/:id",     "view": "BikeDetails",  "guarded": false },
            { "pattern": "/login",         "view": "Login",        "guarded": false },
            { "pattern": "/signup",        "view": "Signup",       "guarded": false },
            { "pattern": "/add-bike",      "view": "AddBike",      "guarded": true  },
            { "pattern": "/edit-bike/:id", "view": "EditBike",     "guarded": true  },
            { "pattern": "/my-collection", "view": "MyCollection", "guarded": true  },
        ])
    );
}
