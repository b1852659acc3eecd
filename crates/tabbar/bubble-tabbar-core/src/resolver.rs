//! Tab config resolution: host routes + descriptors + caller overrides → ordered `TabsConfig`.
//!
//! Every field is resolved independently, first match wins:
//! - label: descriptor label factory (if it yields text) → literal label → title → route name
//! - icon: descriptor icon → icon override by route name → built-in circle
//! - colors: descriptor tint/backgrounds → color override by route name → palette default
//!
//! Empty strings never count as a label; they fall through to the next source.
//!
//! A supplied `overrides.tabs` map is the whole config: named routes get their entry verbatim,
//! routes it does not name are left out. Without it, a route with no descriptor and no
//! override of any kind is left out.

use std::fmt;
use std::sync::Arc;

use hashbrown::HashMap;
use indexmap::IndexMap;
use log::debug;

use crate::color::Color;
use crate::host::{DescriptorMap, Glyph, IconContext, IconSource, LabelContext, LabelSource};
use crate::host::{Route, TabOptions};
use crate::theme::{ColorScheme, ThemePalette};

/// Size requested from descriptor icon factories.
pub const ICON_SIZE: f32 = 24.0;
/// Diameter of the built-in indicator used when no icon is configured.
pub const DEFAULT_INDICATOR_DIAMETER: f32 = 10.0;

type IconRenderer = Arc<dyn Fn(Color) -> Glyph + Send + Sync>;

/// Icon normalized to `color → glyph`. Cloning shares the renderer; equality is identity.
#[derive(Clone)]
pub struct TabIcon(IconRenderer);

impl TabIcon {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Color) -> Glyph + Send + Sync + 'static,
    {
        TabIcon(Arc::new(f))
    }

    /// Built-in circular indicator.
    pub fn circle() -> Self {
        TabIcon::new(|color| Glyph::Circle {
            diameter: DEFAULT_INDICATOR_DIAMETER,
            color,
        })
    }

    /// Named symbol drawn by the host at the standard icon size.
    pub fn symbol(name: impl Into<String>) -> Self {
        TabIcon::from_glyph(Glyph::Symbol {
            name: name.into(),
            color: Color::TRANSPARENT,
            size: ICON_SIZE,
        })
    }

    /// Fixed glyph, recolored on every render.
    pub fn from_glyph(glyph: Glyph) -> Self {
        TabIcon::new(move |color| glyph.recolored(color))
    }

    /// Wrap a descriptor icon so it only needs a color.
    pub fn from_source(source: &IconSource) -> Self {
        match source {
            IconSource::Factory(factory) => {
                let factory = Arc::clone(factory);
                TabIcon::new(move |color| {
                    factory(&IconContext {
                        focused: false,
                        color,
                        size: ICON_SIZE,
                    })
                })
            }
            IconSource::Static(glyph) => TabIcon::from_glyph(glyph.clone()),
        }
    }

    #[inline]
    pub fn render(&self, color: Color) -> Glyph {
        (self.0)(color)
    }
}

impl PartialEq for TabIcon {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for TabIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TabIcon(..)")
    }
}

/// Fully resolved display config for one tab.
#[derive(Clone, Debug, PartialEq)]
pub struct TabItemConfig {
    pub label: String,
    pub icon: TabIcon,
    pub active_color: Color,
    pub active_bg_color: Color,
    pub inactive_bg_color: Color,
}

/// Route name → config, in display order.
pub type TabsConfig = IndexMap<String, TabItemConfig>;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ColorTriple {
    pub active_color: Color,
    pub active_bg_color: Color,
    pub inactive_bg_color: Color,
}

/// Caller-supplied overrides; all optional.
#[derive(Clone, Debug, Default)]
pub struct TabBarOverrides {
    /// Verbatim configs for the routes they name.
    pub tabs: Option<TabsConfig>,
    pub icons: HashMap<String, TabIcon>,
    pub colors: HashMap<String, ColorTriple>,
    /// Forces the appearance instead of asking the host.
    pub color_scheme: Option<ColorScheme>,
}

impl TabBarOverrides {
    fn names_route(&self, name: &str) -> bool {
        self.icons.contains_key(name) || self.colors.contains_key(name)
    }
}

fn resolve_label(route: &Route, options: &TabOptions) -> String {
    let from_label = match &options.label {
        Some(LabelSource::Factory(factory)) => factory(&LabelContext::neutral()),
        Some(LabelSource::Text(text)) => Some(text.clone()),
        None => None,
    };
    from_label
        .filter(|text| !text.is_empty())
        .or_else(|| options.title.clone().filter(|title| !title.is_empty()))
        .unwrap_or_else(|| route.name.clone())
}

/// Resolve one route. `None` means the route cannot be shown.
pub fn resolve_item(
    route: &Route,
    options: Option<&TabOptions>,
    overrides: &TabBarOverrides,
    palette: &ThemePalette,
) -> Option<TabItemConfig> {
    if let Some(tabs) = &overrides.tabs {
        return tabs.get(&route.name).cloned();
    }
    if options.is_none() && !overrides.names_route(&route.name) {
        return None;
    }
    let defaults = TabOptions::default();
    let options = options.unwrap_or(&defaults);
    let triple = overrides.colors.get(&route.name);

    let icon = match &options.icon {
        Some(source) => TabIcon::from_source(source),
        None => overrides
            .icons
            .get(&route.name)
            .cloned()
            .unwrap_or_else(TabIcon::circle),
    };

    Some(TabItemConfig {
        label: resolve_label(route, options),
        icon,
        active_color: options
            .active_tint_color
            .or(triple.map(|t| t.active_color))
            .unwrap_or(palette.default_active_color),
        active_bg_color: options
            .active_background_color
            .or(triple.map(|t| t.active_bg_color))
            .unwrap_or(palette.default_active_bg_color),
        inactive_bg_color: options
            .inactive_background_color
            .or(triple.map(|t| t.inactive_bg_color))
            .unwrap_or(palette.default_inactive_bg_color),
    })
}

/// Resolve every route, in route order, dropping unresolvable ones.
pub fn resolve_tabs(
    routes: &[Route],
    descriptors: &HashMap<String, TabOptions>,
    overrides: &TabBarOverrides,
    palette: &ThemePalette,
) -> TabsConfig {
    let mut tabs = TabsConfig::with_capacity(routes.len());
    for route in routes {
        match resolve_item(route, descriptors.get(&route.key), overrides, palette) {
            Some(item) => {
                tabs.insert(route.name.clone(), item);
            }
            None => debug!(
                "tab bar: omitting route '{}' (key '{}'): no config for it",
                route.name, route.key
            ),
        }
    }
    tabs
}

#[derive(Debug)]
struct CacheEntry {
    routes: Arc<[Route]>,
    descriptors: DescriptorMap,
    overrides: Arc<TabBarOverrides>,
    scheme: ColorScheme,
    tabs: Arc<TabsConfig>,
}

impl CacheEntry {
    fn matches(
        &self,
        routes: &Arc<[Route]>,
        descriptors: &DescriptorMap,
        overrides: &Arc<TabBarOverrides>,
        scheme: ColorScheme,
    ) -> bool {
        Arc::ptr_eq(&self.routes, routes)
            && Arc::ptr_eq(&self.descriptors, descriptors)
            && Arc::ptr_eq(&self.overrides, overrides)
            && self.scheme == scheme
    }
}

/// Memoizing front of [`resolve_tabs`], keyed on the identity of its inputs.
#[derive(Debug, Default)]
pub struct TabConfigResolver {
    cache: Option<CacheEntry>,
    recomputations: u64,
}

impl TabConfigResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolved tabs for these inputs; recomputed only when an input identity changes.
    pub fn resolve(
        &mut self,
        routes: &Arc<[Route]>,
        descriptors: &DescriptorMap,
        overrides: &Arc<TabBarOverrides>,
        scheme: ColorScheme,
    ) -> Arc<TabsConfig> {
        if let Some(entry) = &self.cache {
            if entry.matches(routes, descriptors, overrides, scheme) {
                return Arc::clone(&entry.tabs);
            }
        }
        let palette = ThemePalette::for_scheme(scheme);
        let tabs = Arc::new(resolve_tabs(routes, descriptors, overrides, &palette));
        self.recomputations += 1;
        debug!(
            "tab bar: resolved {} of {} routes ({:?})",
            tabs.len(),
            routes.len(),
            scheme
        );
        self.cache = Some(CacheEntry {
            routes: Arc::clone(routes),
            descriptors: Arc::clone(descriptors),
            overrides: Arc::clone(overrides),
            scheme,
            tabs: Arc::clone(&tabs),
        });
        tabs
    }

    /// How many times the cache missed.
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    pub fn invalidate(&mut self) {
        self.cache = None;
    }
}
