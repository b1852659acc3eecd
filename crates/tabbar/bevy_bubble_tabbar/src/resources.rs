use std::sync::Arc;

use bevy::prelude::*;
use bubble_tabbar_core::{
    ColorScheme, DescriptorMap, EmitResult, NavigationEvent, NavigationHost, NavigationState,
    TabBar, TabBarInput, TabBarOverrides,
};
use hashbrown::{HashMap, HashSet};

#[derive(Resource, Debug, Default)]
pub struct TabBarResource(pub TabBar);

/// Emitted for every press on a rendered tab, whether or not it was prevented.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct TabPressed {
    pub route_key: String,
    pub route_name: String,
    pub prevented: bool,
}

/// Navigation state owned by the app. Mutating it (focus, routes, descriptors, screen size)
/// makes the tab bar re-read it on the next frame.
#[derive(Resource, Debug, Clone)]
pub struct TabBarHostState {
    pub navigation: NavigationState,
    pub descriptors: DescriptorMap,
    pub overrides: Arc<TabBarOverrides>,
    pub screen_width: f32,
    pub screen_height: f32,
    pub color_scheme: ColorScheme,
    /// Route names whose presses are cancelled.
    pub prevented: HashSet<String>,
    /// Set by an allowed press; applied before the next sync.
    pub pending_navigation: Option<String>,
    pub(crate) emitted: Vec<TabPressed>,
}

impl Default for TabBarHostState {
    fn default() -> Self {
        Self {
            navigation: NavigationState::new(Vec::new(), 0),
            descriptors: Arc::new(HashMap::new()),
            overrides: Arc::new(TabBarOverrides::default()),
            screen_width: 0.0,
            screen_height: 0.0,
            color_scheme: ColorScheme::Light,
            prevented: HashSet::new(),
            pending_navigation: None,
            emitted: Vec::new(),
        }
    }
}

impl TabBarHostState {
    /// Host state from a core input, e.g. one built from a JSON snapshot.
    pub fn from_input(input: TabBarInput) -> Self {
        Self {
            navigation: input.navigation,
            descriptors: input.descriptors,
            overrides: input.overrides,
            screen_width: input.screen_width,
            screen_height: input.screen_height,
            ..Default::default()
        }
    }

    pub fn input(&self) -> TabBarInput {
        TabBarInput {
            navigation: self.navigation.clone(),
            descriptors: Arc::clone(&self.descriptors),
            overrides: Arc::clone(&self.overrides),
            screen_width: self.screen_width,
            screen_height: self.screen_height,
        }
    }

    /// Move focus to the route with this name. Returns `false` for unknown names.
    pub fn focus_route(&mut self, route_name: &str) -> bool {
        match self.navigation.position_of_name(route_name) {
            Some(index) => {
                self.navigation = self.navigation.with_index(index);
                true
            }
            None => false,
        }
    }
}

impl NavigationHost for TabBarHostState {
    fn emit(&mut self, event: &NavigationEvent) -> EmitResult {
        let route_name = self
            .navigation
            .position_of_key(&event.target)
            .map(|i| self.navigation.routes[i].name.clone())
            .unwrap_or_default();
        let prevented = event.can_prevent_default && self.prevented.contains(&route_name);
        self.emitted.push(TabPressed {
            route_key: event.target.clone(),
            route_name,
            prevented,
        });
        EmitResult {
            default_prevented: prevented,
        }
    }

    fn navigate(&mut self, route_name: &str) {
        self.pending_navigation = Some(route_name.to_string());
    }

    fn color_scheme(&self) -> ColorScheme {
        self.color_scheme
    }
}
