use bevy::prelude::*;
use bevy_bubble_tabbar::{
    BubbleTabBarPlugin, TabBarHostState, TabBarResource, TabBarRoot, TabItemNode, TabLabelNode,
    TabPressed,
};
use bubble_tabbar_core::{parse_navigation_snapshot_json, Phase};

fn host_state(fixture: &str) -> TabBarHostState {
    let json = bubble_tabbar_fixtures::nav_states::json(fixture).expect("load nav state fixture");
    let snapshot = parse_navigation_snapshot_json(&json).expect("parse nav state fixture");
    TabBarHostState::from_input(snapshot.into_input(400.0))
}

fn app_with(fixture: &str) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(BubbleTabBarPlugin::default());
    app.world_mut().insert_resource(host_state(fixture));
    app
}

fn spawn_button(app: &mut App, route_key: &str, interaction: Interaction) -> Entity {
    app.world_mut()
        .spawn((
            TabItemNode::new(route_key),
            Style::default(),
            BackgroundColor::default(),
            interaction,
        ))
        .id()
}

fn px(style: &Style) -> f32 {
    match style.width {
        Val::Px(w) => w,
        other => panic!("expected a pixel width, got {other:?}"),
    }
}

fn pressed_events(app: &App) -> Vec<TabPressed> {
    let events = app.world().resource::<Events<TabPressed>>();
    let mut reader = events.get_reader();
    reader.read(events).cloned().collect()
}

#[test]
fn plugin_inserts_resources() {
    let mut app = App::new();
    // it should insert the tab bar and host state when the plugin is added
    app.add_plugins(MinimalPlugins)
        .add_plugins(BubbleTabBarPlugin::default());

    assert!(app.world().get_resource::<TabBarResource>().is_some());
    assert!(app.world().get_resource::<TabBarHostState>().is_some());
    assert!(app.world().get_resource::<Events<TabPressed>>().is_some());
}

/// it should size tagged nodes from the current frame
#[test]
fn visuals_are_written_into_ui_nodes() {
    let mut app = app_with("three-tabs");
    let root = app
        .world_mut()
        .spawn((TabBarRoot, Style::default(), BackgroundColor::default()))
        .id();
    let feed = spawn_button(&mut app, "index-k1", Interaction::None);
    let style = spawn_button(&mut app, "style-k2", Interaction::None);
    let feed_label = app
        .world_mut()
        .spawn((TabLabelNode::new("index-k1"), Style::default(), Visibility::Hidden))
        .id();
    let style_label = app
        .world_mut()
        .spawn((TabLabelNode::new("style-k2"), Style::default(), Visibility::Inherited))
        .id();

    app.update();

    let world = app.world();
    assert!((px(world.get::<Style>(root).unwrap()) - 240.0).abs() < 1e-3);
    assert!((px(world.get::<Style>(feed).unwrap()) - 100.0).abs() < 1e-3);
    assert_eq!(px(world.get::<Style>(style).unwrap()), 44.0);
    assert_eq!(
        *world.get::<Visibility>(feed_label).unwrap(),
        Visibility::Inherited
    );
    assert_eq!(
        *world.get::<Visibility>(style_label).unwrap(),
        Visibility::Hidden
    );

    let bar = world.resource::<TabBarResource>();
    let inactive = bar.0.tabs()["style"].inactive_bg_color;
    let bg = world.get::<BackgroundColor>(style).unwrap().0.to_srgba();
    assert!((bg.alpha - inactive.a).abs() < 1e-6);
}

/// it should fade the label text in with the focus progress
#[test]
fn label_text_fades_with_progress() {
    let mut app = app_with("three-tabs");
    let label = app
        .world_mut()
        .spawn((
            TabLabelNode::new("style-k2"),
            Style::default(),
            Visibility::Hidden,
            Text::from_section("Style", TextStyle::default()),
        ))
        .id();
    app.update();
    let alpha = |app: &App| {
        app.world().get::<Text>(label).unwrap().sections[0]
            .style
            .color
            .to_srgba()
            .alpha
    };
    assert_eq!(alpha(&app), 0.0);

    assert!(app
        .world_mut()
        .resource_mut::<TabBarHostState>()
        .focus_route("style"));
    app.update();
    app.world_mut().resource_mut::<TabBarResource>().0.tick(0.03);
    app.update();

    let expected = app
        .world()
        .resource::<TabBarResource>()
        .0
        .frame()
        .item("style")
        .map(|i| i.label_opacity)
        .unwrap();
    assert!(expected > 0.0 && expected < 1.0, "opacity {expected}");
    assert!((alpha(&app) - expected).abs() < 1e-4);
    assert_eq!(*app.world().get::<Visibility>(label).unwrap(), Visibility::Inherited);
}

/// it should emit TabPressed and move focus on an allowed press
#[test]
fn press_navigates_and_starts_expanding() {
    let mut app = app_with("three-tabs");
    app.update();
    spawn_button(&mut app, "style-k2", Interaction::Pressed);
    app.update();

    assert_eq!(
        pressed_events(&app),
        [TabPressed {
            route_key: "style-k2".into(),
            route_name: "style".into(),
            prevented: false,
        }]
    );
    let host = app.world().resource::<TabBarHostState>();
    assert_eq!(host.navigation.index, 1);
    assert!(host.pending_navigation.is_none());

    let bar = app.world().resource::<TabBarResource>();
    assert_eq!(bar.0.focused_index(), 1);
    assert_eq!(bar.0.animations().phase("style"), Some(Phase::Expanding));
    assert_eq!(bar.0.animations().phase("feed"), Some(Phase::Collapsing));
}

/// it should report a prevented press and leave focus alone
#[test]
fn prevented_press_keeps_focus() {
    let mut app = app_with("three-tabs");
    app.world_mut()
        .resource_mut::<TabBarHostState>()
        .prevented
        .insert("style".into());
    app.update();
    spawn_button(&mut app, "style-k2", Interaction::Pressed);
    app.update();

    let events = pressed_events(&app);
    assert_eq!(events.len(), 1);
    assert!(events[0].prevented);

    let host = app.world().resource::<TabBarHostState>();
    assert_eq!(host.navigation.index, 0);
    let bar = app.world().resource::<TabBarResource>();
    assert_eq!(bar.0.animations().phase("style"), Some(Phase::Unfocused));
    assert_eq!(bar.0.animations().phase("feed"), Some(Phase::Focused));
}

/// it should pick up host changes made by the app between frames
#[test]
fn host_focus_change_is_synced() {
    let mut app = app_with("three-tabs");
    app.update();
    assert!(app
        .world_mut()
        .resource_mut::<TabBarHostState>()
        .focus_route("settings"));
    app.update();

    let bar = app.world().resource::<TabBarResource>();
    assert_eq!(bar.0.focused_index(), 2);
    assert_eq!(bar.0.animations().phase("settings"), Some(Phase::Expanding));
}
