use std::sync::Arc;

use bubble_tabbar_core::{
    parse_navigation_snapshot_json, Color, ColorScheme, Glyph, NavigationSnapshot,
    TabConfigResolver, ThemePalette,
};

fn snapshot(fixture: &str) -> NavigationSnapshot {
    let json = bubble_tabbar_fixtures::nav_states::json(fixture).expect("load nav state fixture");
    parse_navigation_snapshot_json(&json).expect("parse nav state fixture")
}

fn hex(s: &str) -> Color {
    Color::parse(s).unwrap()
}

#[test]
fn descriptor_fields_feed_the_config() {
    let snap = snapshot("three-tabs");
    let overrides = Arc::new(snap.overrides);
    let mut resolver = TabConfigResolver::new();
    let tabs = resolver.resolve(
        &snap.navigation.routes,
        &snap.descriptors,
        &overrides,
        ColorScheme::Light,
    );

    let names: Vec<&str> = tabs.keys().map(String::as_str).collect();
    assert_eq!(names, ["feed", "style", "settings"]);
    assert_eq!(tabs["feed"].label, "Feed");

    let light = ThemePalette::light();
    for item in tabs.values() {
        assert_eq!(item.active_color, light.default_active_color);
        assert_eq!(item.active_bg_color, light.default_active_bg_color);
        assert_eq!(item.inactive_bg_color, light.default_inactive_bg_color);
    }
}

#[test]
fn tabs_override_replaces_the_whole_config() {
    let snap = snapshot("override-tabs");
    let expected = snap.overrides.tabs.as_ref().unwrap()["style"].clone();
    let overrides = Arc::new(snap.overrides);
    let mut resolver = TabConfigResolver::new();
    let tabs = resolver.resolve(
        &snap.navigation.routes,
        &snap.descriptors,
        &overrides,
        ColorScheme::Light,
    );

    assert_eq!(tabs["style"], expected);
    assert_eq!(tabs["style"].label, "Looks");
    assert_eq!(tabs["style"].active_color, hex("#3B82F6"));
    match tabs["style"].icon.render(hex("#3B82F6")) {
        Glyph::Symbol { name, .. } => assert_eq!(name, "palette"),
        other => panic!("unexpected glyph {other:?}"),
    }
    // the map is the whole config: routes it does not name are not shown
    let names: Vec<&str> = tabs.keys().map(String::as_str).collect();
    assert_eq!(names, ["style"]);
}

#[test]
fn dark_overrides_fill_gaps_behind_descriptors() {
    let snap = snapshot("dark-overrides");
    assert_eq!(snap.overrides.color_scheme, Some(ColorScheme::Dark));
    let overrides = Arc::new(snap.overrides);
    let mut resolver = TabConfigResolver::new();
    let tabs = resolver.resolve(
        &snap.navigation.routes,
        &snap.descriptors,
        &overrides,
        ColorScheme::Dark,
    );

    let feed = &tabs["feed"];
    assert_eq!(feed.active_color, hex("#10B981"));
    assert_eq!(feed.active_bg_color, hex("#D1FAE5"));
    assert_eq!(feed.inactive_bg_color, hex("rgba(254, 226, 226, 0)"));

    let dark = ThemePalette::dark();
    let style = &tabs["style"];
    assert_eq!(style.active_color, dark.default_active_color);
    match style.icon.render(dark.inactive_icon_color) {
        Glyph::Symbol { name, color, .. } => {
            assert_eq!(name, "brush");
            assert_eq!(color, dark.inactive_icon_color);
        }
        other => panic!("unexpected glyph {other:?}"),
    }
}

#[test]
fn resolver_reuses_configs_until_an_input_changes() {
    let snap = snapshot("three-tabs");
    let overrides = Arc::new(snap.overrides);
    let mut resolver = TabConfigResolver::new();

    let a = resolver.resolve(
        &snap.navigation.routes,
        &snap.descriptors,
        &overrides,
        ColorScheme::Light,
    );
    let refocused = snap.navigation.with_index(2);
    let b = resolver.resolve(
        &refocused.routes,
        &snap.descriptors,
        &overrides,
        ColorScheme::Light,
    );
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(resolver.recomputations(), 1);

    resolver.resolve(
        &snap.navigation.routes,
        &snap.descriptors,
        &overrides,
        ColorScheme::Dark,
    );
    assert_eq!(resolver.recomputations(), 2);

    let copy = Arc::new((*snap.descriptors).clone());
    resolver.resolve(&snap.navigation.routes, &copy, &overrides, ColorScheme::Dark);
    assert_eq!(resolver.recomputations(), 3);
}

#[test]
fn every_fixture_resolves_and_keeps_route_order() {
    for name in bubble_tabbar_fixtures::nav_states::keys() {
        let snap = snapshot(&name);
        let overrides = Arc::new(snap.overrides);
        let mut resolver = TabConfigResolver::new();
        let tabs = resolver.resolve(
            &snap.navigation.routes,
            &snap.descriptors,
            &overrides,
            ColorScheme::Light,
        );
        let expected: Vec<&str> = snap
            .navigation
            .routes
            .iter()
            .map(|r| r.name.as_str())
            .filter(|n| tabs.contains_key(*n))
            .collect();
        let got: Vec<&str> = tabs.keys().map(String::as_str).collect();
        assert_eq!(got, expected, "fixture {name}");
    }
}
