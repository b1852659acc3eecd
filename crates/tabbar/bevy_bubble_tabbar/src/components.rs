use bevy::prelude::*;

/// Marker for the bar container node.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct TabBarRoot;

/// A tab button, bound to the route with this key.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct TabItemNode {
    pub route_key: String,
}

impl TabItemNode {
    pub fn new(route_key: impl Into<String>) -> Self {
        Self {
            route_key: route_key.into(),
        }
    }
}

/// The label container inside a tab button; width, visibility and the color of a `Text` on the
/// same entity follow the focus progress.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct TabLabelNode {
    pub route_key: String,
}

impl TabLabelNode {
    pub fn new(route_key: impl Into<String>) -> Self {
        Self {
            route_key: route_key.into(),
        }
    }
}
