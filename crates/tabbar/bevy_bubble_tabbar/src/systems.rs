use bevy::prelude::*;
use bubble_tabbar_core::Color as TabColor;

use crate::components::{TabBarRoot, TabItemNode, TabLabelNode};
use crate::resources::{TabBarHostState, TabBarResource, TabPressed};

fn to_bevy_color(c: TabColor) -> Color {
    Color::srgba(c.r, c.g, c.b, c.a)
}

/// Turns `Interaction::Pressed` on tab buttons into core presses and forwards the resulting
/// events.
pub fn handle_tab_press_system(
    bar: Res<TabBarResource>,
    mut host: ResMut<TabBarHostState>,
    buttons: Query<(&Interaction, &TabItemNode), Changed<Interaction>>,
    mut pressed: EventWriter<TabPressed>,
) {
    for (interaction, node) in buttons.iter() {
        if *interaction != Interaction::Pressed {
            continue;
        }
        let outcome = bar.0.press(&node.route_key, &mut *host);
        debug!("tab bar: press on '{}' -> {:?}", node.route_key, outcome);
    }
    if !host.emitted.is_empty() {
        pressed.send_batch(std::mem::take(&mut host.emitted));
    }
}

/// Applies a navigation requested by an allowed press.
pub fn apply_pending_navigation_system(mut host: ResMut<TabBarHostState>) {
    if host.pending_navigation.is_none() {
        return;
    }
    if let Some(route_name) = host.pending_navigation.take() {
        if !host.focus_route(&route_name) {
            warn!("tab bar: navigation to unknown route '{route_name}'");
        }
    }
}

/// Feeds host state into the core whenever it changed.
pub fn sync_host_state_system(host: Res<TabBarHostState>, mut bar: ResMut<TabBarResource>) {
    if !host.is_changed() {
        return;
    }
    bar.0.update(&host.input(), &*host);
}

pub fn tick_tab_bar_system(time: Res<Time>, mut bar: ResMut<TabBarResource>) {
    let dt = time.delta_seconds();
    if dt <= 0.0 || !bar.0.animations().is_animating() {
        return;
    }
    bar.0.tick(dt);
}

/// Writes the current frame into tagged UI nodes.
pub fn apply_tab_visuals_system(
    bar: Res<TabBarResource>,
    mut roots: Query<
        (&mut Style, &mut BackgroundColor),
        (With<TabBarRoot>, Without<TabItemNode>, Without<TabLabelNode>),
    >,
    mut items: Query<(&TabItemNode, &mut Style, &mut BackgroundColor), Without<TabLabelNode>>,
    mut labels: Query<
        (&TabLabelNode, &mut Style, &mut Visibility, Option<&mut Text>),
        Without<TabItemNode>,
    >,
) {
    let frame = bar.0.frame();

    for (mut style, mut bg) in roots.iter_mut() {
        style.left = Val::Px(frame.x);
        style.bottom = Val::Px(frame.bottom);
        style.width = Val::Px(frame.width);
        style.height = Val::Px(frame.height);
        style.padding = UiRect::all(Val::Px(frame.padding));
        bg.0 = to_bevy_color(frame.background);
    }

    for (node, mut style, mut bg) in items.iter_mut() {
        let Some(item) = frame.items.iter().find(|i| i.route_key == node.route_key) else {
            continue;
        };
        style.width = Val::Px(item.width);
        style.height = Val::Px(item.height);
        bg.0 = to_bevy_color(item.background_color);
    }

    for (node, mut style, mut visibility, text) in labels.iter_mut() {
        let Some(item) = frame.items.iter().find(|i| i.route_key == node.route_key) else {
            continue;
        };
        style.width = Val::Px(item.label_width);
        *visibility = if item.label_visible {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        if let Some(mut text) = text {
            let tint = item
                .label_color
                .with_alpha(item.label_color.a * item.label_opacity);
            for section in text.sections.iter_mut() {
                section.style.color = to_bevy_color(tint);
            }
        }
    }
}
