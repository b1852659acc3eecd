//! TabBar: composes resolution, layout and animation into one per-frame draw description,
//! and turns presses into cancellable navigation events.
//!
//! Methods:
//! - update (host state in), tick (advance springs), frame (draw description out)
//! - press / hit_test / press_at (input back to the host)

use std::sync::Arc;

use hashbrown::HashMap;
use log::debug;

use crate::animation::{derive_visuals, AnimationController};
use crate::color::Color;
use crate::config::TabBarConfig;
use crate::host::{
    DescriptorMap, EventKind, Glyph, NavigationEvent, NavigationHost, NavigationState, Route,
};
use crate::layout::LayoutBudget;
use crate::resolver::{TabBarOverrides, TabConfigResolver, TabsConfig};
use crate::theme::{ColorScheme, ThemePalette};

/// Host state for one update.
#[derive(Clone, Debug)]
pub struct TabBarInput {
    pub navigation: NavigationState,
    pub descriptors: DescriptorMap,
    pub overrides: Arc<TabBarOverrides>,
    pub screen_width: f32,
    /// Container height; only used to place the bar above the bottom edge.
    pub screen_height: f32,
}

impl TabBarInput {
    pub fn new(navigation: NavigationState, descriptors: DescriptorMap, screen_width: f32) -> Self {
        Self {
            navigation,
            descriptors,
            overrides: Arc::new(TabBarOverrides::default()),
            screen_width,
            screen_height: 0.0,
        }
    }

    pub fn with_overrides(mut self, overrides: TabBarOverrides) -> Self {
        self.overrides = Arc::new(overrides);
        self
    }

    pub fn with_screen_height(mut self, screen_height: f32) -> Self {
        self.screen_height = screen_height;
        self
    }

    /// Same route list, descriptors and overrides; focus moved to `index`.
    pub fn with_index(&self, index: usize) -> Self {
        Self {
            navigation: self.navigation.with_index(index),
            ..self.clone()
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShadowStyle {
    pub color: Color,
    pub offset: [f32; 2],
    pub opacity: f32,
    pub radius: f32,
    pub elevation: f32,
}

/// One tab as it should be drawn this frame. `x`/`y` are relative to the bar's top-left.
#[derive(Clone, Debug, PartialEq)]
pub struct TabItemFrame {
    pub route_key: String,
    pub route_name: String,
    pub test_id: String,
    pub focused: bool,
    pub progress: f32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub corner_radius: f32,
    pub background_color: Color,
    pub icon: Glyph,
    pub label: String,
    pub label_color: Color,
    pub label_width: f32,
    pub label_opacity: f32,
    pub label_visible: bool,
}

/// The whole bar for one frame. `x` is the bar's left edge and `bottom` its distance from the
/// container bottom.
#[derive(Clone, Debug, PartialEq)]
pub struct TabBarFrame {
    pub x: f32,
    pub bottom: f32,
    pub width: f32,
    pub height: f32,
    pub padding: f32,
    pub corner_radius: f32,
    pub background: Color,
    pub shadow: ShadowStyle,
    pub items: Vec<TabItemFrame>,
    pub animating: bool,
}

impl TabBarFrame {
    pub fn item(&self, route_name: &str) -> Option<&TabItemFrame> {
        self.items.iter().find(|i| i.route_name == route_name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PressOutcome {
    /// No rendered tab has that key.
    Ignored,
    /// The host cancelled the press; nothing changed.
    Prevented,
    /// `navigate` was called with this route name.
    Navigated { route_name: String },
}

#[derive(Debug)]
pub struct TabBar {
    config: TabBarConfig,
    resolver: TabConfigResolver,
    animations: AnimationController,
    tabs: Arc<TabsConfig>,
    routes: Arc<[Route]>,
    focused_index: usize,
    scheme: ColorScheme,
    palette: ThemePalette,
    budget: LayoutBudget,
    screen_height: f32,
}

impl Default for TabBar {
    fn default() -> Self {
        Self::new(TabBarConfig::default())
    }
}

impl TabBar {
    pub fn new(config: TabBarConfig) -> Self {
        let budget = config.layout.compute_budget(0.0, 0);
        Self {
            resolver: TabConfigResolver::new(),
            animations: AnimationController::from_config(&config),
            tabs: Arc::new(TabsConfig::new()),
            routes: Vec::<Route>::new().into(),
            focused_index: 0,
            scheme: ColorScheme::Light,
            palette: ThemePalette::light(),
            budget,
            screen_height: 0.0,
            config,
        }
    }

    /// Feed the current host state. Re-resolves configs only when an input identity changed,
    /// then recomputes the budget and retargets tabs whose focus flipped.
    pub fn update<H>(&mut self, input: &TabBarInput, host: &H)
    where
        H: NavigationHost + ?Sized,
    {
        let scheme = input
            .overrides
            .color_scheme
            .unwrap_or_else(|| host.color_scheme());
        self.tabs = self.resolver.resolve(
            &input.navigation.routes,
            &input.descriptors,
            &input.overrides,
            scheme,
        );
        self.scheme = scheme;
        self.palette = ThemePalette::for_scheme(scheme);
        self.routes = Arc::clone(&input.navigation.routes);
        self.focused_index = input.navigation.index;
        self.screen_height = input.screen_height;
        self.budget = self
            .config
            .layout
            .compute_budget(input.screen_width, self.tabs.len());

        let tabs = Arc::clone(&self.tabs);
        let index = self.focused_index;
        self.animations.sync(
            self.routes
                .iter()
                .enumerate()
                .filter(|(_, route)| tabs.contains_key(&route.name))
                .map(|(i, route)| (route.name.as_str(), i == index)),
        );
    }

    /// Advance all tab animations by `dt` seconds. Returns whether anything is still moving.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.animations.tick(dt) > 0
    }

    /// Draw description for the current animation state.
    pub fn frame(&self) -> TabBarFrame {
        let style = &self.config.style;
        let layout = &self.config.layout;
        let budget = &self.budget;
        let item_y = ((budget.bar_height - style.item_height) * 0.5).max(0.0);

        let mut items = Vec::with_capacity(self.tabs.len());
        for (i, route) in self.routes.iter().enumerate() {
            let Some(item) = self.tabs.get(&route.name) else {
                continue;
            };
            let focused = i == self.focused_index;
            let progress = self.animations.progress(&route.name).unwrap_or(0.0);
            let label_width = layout.estimate_label_width(&item.label, budget.max_expansion);
            let visuals = derive_visuals(progress, label_width, item, budget);
            let icon_color = if focused {
                item.active_color
            } else {
                self.palette.inactive_icon_color
            };
            items.push(TabItemFrame {
                route_key: route.key.clone(),
                route_name: route.name.clone(),
                test_id: format!("{}-tab", route.name),
                focused,
                progress: visuals.progress,
                x: 0.0,
                y: item_y,
                width: visuals.item_width,
                height: style.item_height,
                corner_radius: style.item_corner_radius,
                background_color: visuals.background_color,
                icon: item.icon.render(icon_color),
                label: item.label.clone(),
                label_color: item.active_color,
                label_width: visuals.label_container_width,
                label_opacity: visuals.label_opacity,
                label_visible: visuals.label_visible,
            });
        }
        distribute_space_between(&mut items, budget.padding, budget.available_width);

        TabBarFrame {
            x: budget.bar_left,
            bottom: self.screen_height * style.bottom_fraction,
            width: budget.bar_width,
            height: budget.bar_height,
            padding: budget.padding,
            corner_radius: style.corner_radius,
            background: self.palette.bar_background,
            shadow: ShadowStyle {
                color: self.palette.bar_shadow_color,
                offset: style.shadow_offset,
                opacity: style.shadow_opacity,
                radius: style.shadow_radius,
                elevation: style.elevation,
            },
            items,
            animating: self.animations.is_animating(),
        }
    }

    /// Route key of the tab under a point in bar-local coordinates.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<String> {
        self.frame()
            .items
            .into_iter()
            .find(|i| x >= i.x && x < i.x + i.width && y >= i.y && y < i.y + i.height)
            .map(|i| i.route_key)
    }

    /// Emit a cancellable tab press for `route_key` and navigate unless the host prevents it.
    /// Focus and animation state are left alone; they follow the host's next `update`.
    pub fn press<H>(&self, route_key: &str, host: &mut H) -> PressOutcome
    where
        H: NavigationHost + ?Sized,
    {
        let Some(route) = self
            .routes
            .iter()
            .find(|r| r.key == route_key && self.tabs.contains_key(&r.name))
        else {
            return PressOutcome::Ignored;
        };
        let event = NavigationEvent {
            kind: EventKind::TabPress,
            target: route.key.clone(),
            can_prevent_default: true,
        };
        if host.emit(&event).default_prevented {
            debug!("tab bar: press on '{}' prevented by host", route.name);
            return PressOutcome::Prevented;
        }
        host.navigate(&route.name);
        PressOutcome::Navigated {
            route_name: route.name.clone(),
        }
    }

    /// `hit_test` followed by `press`.
    pub fn press_at<H>(&self, x: f32, y: f32, host: &mut H) -> PressOutcome
    where
        H: NavigationHost + ?Sized,
    {
        match self.hit_test(x, y) {
            Some(key) => self.press(&key, host),
            None => PressOutcome::Ignored,
        }
    }

    pub fn config(&self) -> &TabBarConfig {
        &self.config
    }

    pub fn tabs(&self) -> &TabsConfig {
        &self.tabs
    }

    pub fn budget(&self) -> &LayoutBudget {
        &self.budget
    }

    pub fn animations(&self) -> &AnimationController {
        &self.animations
    }

    pub fn palette(&self) -> &ThemePalette {
        &self.palette
    }

    pub fn color_scheme(&self) -> ColorScheme {
        self.scheme
    }

    pub fn focused_index(&self) -> usize {
        self.focused_index
    }

    pub fn resolver(&self) -> &TabConfigResolver {
        &self.resolver
    }

    /// Estimated label width per route name for the current budget.
    pub fn label_widths(&self) -> HashMap<String, f32> {
        self.tabs
            .iter()
            .map(|(name, item)| {
                let w = self
                    .config
                    .layout
                    .estimate_label_width(&item.label, self.budget.max_expansion);
                (name.clone(), w)
            })
            .collect()
    }
}

/// Left-to-right, first item on the left padding edge, remaining room split evenly between
/// neighbours.
fn distribute_space_between(items: &mut [TabItemFrame], padding: f32, available: f32) {
    let total: f32 = items.iter().map(|i| i.width).sum();
    let gap = if items.len() > 1 {
        ((available - total) / (items.len() - 1) as f32).max(0.0)
    } else {
        0.0
    };
    let mut x = padding;
    for item in items.iter_mut() {
        item.x = x;
        x += item.width + gap;
    }
}
