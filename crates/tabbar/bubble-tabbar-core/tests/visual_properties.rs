use std::sync::Arc;

use bubble_tabbar_core::{
    compute_budget, derive_visuals, estimate_label_width, parse_navigation_snapshot_json,
    AnimationController, ColorScheme, SpringProfile, TabConfigResolver,
};

const FRAME: f32 = 1.0 / 60.0;

#[test]
fn item_width_stays_within_bounds_and_grows_with_progress() {
    let json = bubble_tabbar_fixtures::nav_states::json("three-tabs").unwrap();
    let snap = parse_navigation_snapshot_json(&json).unwrap();
    let overrides = Arc::new(snap.overrides);
    let tabs = TabConfigResolver::new().resolve(
        &snap.navigation.routes,
        &snap.descriptors,
        &overrides,
        ColorScheme::Light,
    );

    for screen_width in [240.0f32, 320.0, 400.0, 1024.0] {
        let budget = compute_budget(screen_width, tabs.len());
        for item in tabs.values() {
            let label_width = estimate_label_width(&item.label, budget.max_expansion);
            let upper = budget.base_item_width + label_width + budget.extra_expansion_padding;
            let mut prev = f32::NEG_INFINITY;
            for step in 0..=20 {
                let p = step as f32 / 20.0;
                let v = derive_visuals(p, label_width, item, &budget);
                assert!(v.item_width >= budget.base_item_width);
                assert!(v.item_width <= upper + 1e-4);
                assert!(v.item_width >= prev);
                assert!(v.label_container_width <= label_width + 1e-4);
                prev = v.item_width;
            }
        }
    }
}

#[test]
fn background_hits_exact_endpoints() {
    for fixture in ["three-tabs", "override-tabs", "dark-overrides"] {
        let json = bubble_tabbar_fixtures::nav_states::json(fixture).unwrap();
        let snap = parse_navigation_snapshot_json(&json).unwrap();
        let overrides = Arc::new(snap.overrides);
        let tabs = TabConfigResolver::new().resolve(
            &snap.navigation.routes,
            &snap.descriptors,
            &overrides,
            ColorScheme::Light,
        );
        let budget = compute_budget(400.0, tabs.len());
        for item in tabs.values() {
            let rest = derive_visuals(0.0, 30.0, item, &budget);
            let full = derive_visuals(1.0, 30.0, item, &budget);
            assert_eq!(rest.background_color, item.inactive_bg_color);
            assert_eq!(full.background_color, item.active_bg_color);
            assert!(!rest.label_visible);
            assert_eq!(full.label_opacity, 1.0);
        }
    }
}

#[test]
fn progress_never_leaves_unit_interval() {
    let mut ctl =
        AnimationController::new(SpringProfile::expand(), SpringProfile::collapse(), 0.004);
    ctl.sync([("a", true), ("b", false)]);
    ctl.sync([("a", false), ("b", true)]);
    for frame in 0..240 {
        // flip focus every 7 frames to keep both springs mid-flight
        if frame % 7 == 0 {
            let a_focused = (frame / 7) % 2 == 0;
            ctl.sync([("a", a_focused), ("b", !a_focused)]);
        }
        ctl.tick(FRAME);
        for name in ["a", "b"] {
            let p = ctl.progress(name).unwrap();
            assert!((0.0..=1.0).contains(&p), "{name} at {p}");
        }
    }
}
