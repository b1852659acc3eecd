//! Bevy adapter for `bubble-tabbar-core`.
//!
//! Per frame, in order: presses on tagged buttons, the navigation they requested, host state
//! sync, spring tick, then visuals written back into `Style`/`BackgroundColor`/`Visibility`.

use bevy::prelude::*;

pub mod components;
pub mod resources;
pub mod systems;

pub use components::{TabBarRoot, TabItemNode, TabLabelNode};
pub use resources::{TabBarHostState, TabBarResource, TabPressed};

/// System set for everything the plugin schedules in `Update`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct TabBarSet;

#[derive(Default)]
pub struct BubbleTabBarPlugin {
    pub config: bubble_tabbar_core::TabBarConfig,
}

impl Plugin for BubbleTabBarPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(TabBarResource(bubble_tabbar_core::TabBar::new(
            self.config.clone(),
        )))
        .init_resource::<TabBarHostState>()
        .add_event::<TabPressed>()
        .add_systems(
            Update,
            (
                systems::handle_tab_press_system,
                systems::apply_pending_navigation_system,
                systems::sync_host_state_system,
                systems::tick_tab_bar_system,
                systems::apply_tab_visuals_system,
            )
                .chain()
                .in_set(TabBarSet),
        );
    }
}
