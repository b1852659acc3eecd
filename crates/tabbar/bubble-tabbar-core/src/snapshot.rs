//! JSON snapshot of host navigation state.
//!
//! Hosts that talk to the core across a serialization boundary (and the test fixtures) send
//! routes, the focused index, data-only descriptors and overrides in one document:
//!
//! ```json
//! {
//!   "routes": [{ "key": "feed-1", "name": "feed" }],
//!   "index": 0,
//!   "descriptors": { "feed-1": { "title": "Feed", "icon": "feed" } },
//!   "overrides": { "colorScheme": "dark", "colors": { "feed": { ... } } }
//! }
//! ```
//!
//! Icons are symbol names; colors use the CSS-like strings accepted by [`Color::parse`].

use std::sync::Arc;

use hashbrown::HashMap;
use indexmap::IndexMap;
use log::warn;
use serde::Deserialize;

use crate::color::Color;
use crate::error::TabBarError;
use crate::host::{
    DescriptorMap, Glyph, IconSource, LabelSource, NavigationState, Route, TabOptions,
};
use crate::resolver::{
    ColorTriple, TabBarOverrides, TabIcon, TabItemConfig, TabsConfig, ICON_SIZE,
};
use crate::tab_bar::TabBarInput;
use crate::theme::ColorScheme;

#[derive(Debug, Deserialize)]
struct SnapshotDoc {
    routes: Vec<RouteDoc>,
    #[serde(default)]
    index: usize,
    #[serde(default)]
    descriptors: HashMap<String, DescriptorDoc>,
    #[serde(default)]
    overrides: OverridesDoc,
}

#[derive(Debug, Deserialize)]
struct RouteDoc {
    key: String,
    name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DescriptorDoc {
    title: Option<String>,
    label: Option<String>,
    icon: Option<String>,
    active_tint_color: Option<Color>,
    active_background_color: Option<Color>,
    inactive_background_color: Option<Color>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OverridesDoc {
    color_scheme: Option<ColorScheme>,
    #[serde(default)]
    icons: HashMap<String, String>,
    #[serde(default)]
    colors: HashMap<String, ColorTripleDoc>,
    tabs: Option<IndexMap<String, TabDoc>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ColorTripleDoc {
    active_color: Color,
    active_bg_color: Color,
    inactive_bg_color: Color,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TabDoc {
    label: String,
    icon: Option<String>,
    active_color: Color,
    active_bg_color: Color,
    inactive_bg_color: Color,
}

fn symbol_source(name: String) -> IconSource {
    IconSource::Static(Glyph::Symbol {
        name,
        color: Color::TRANSPARENT,
        size: ICON_SIZE,
    })
}

impl From<DescriptorDoc> for TabOptions {
    fn from(d: DescriptorDoc) -> Self {
        TabOptions {
            title: d.title,
            label: d.label.map(LabelSource::Text),
            icon: d.icon.map(symbol_source),
            active_tint_color: d.active_tint_color,
            active_background_color: d.active_background_color,
            inactive_background_color: d.inactive_background_color,
        }
    }
}

impl From<ColorTripleDoc> for ColorTriple {
    fn from(c: ColorTripleDoc) -> Self {
        ColorTriple {
            active_color: c.active_color,
            active_bg_color: c.active_bg_color,
            inactive_bg_color: c.inactive_bg_color,
        }
    }
}

impl From<TabDoc> for TabItemConfig {
    fn from(t: TabDoc) -> Self {
        TabItemConfig {
            label: t.label,
            icon: t.icon.map(TabIcon::symbol).unwrap_or_else(TabIcon::circle),
            active_color: t.active_color,
            active_bg_color: t.active_bg_color,
            inactive_bg_color: t.inactive_bg_color,
        }
    }
}

/// Host state decoded from JSON.
#[derive(Clone, Debug)]
pub struct NavigationSnapshot {
    pub navigation: NavigationState,
    pub descriptors: DescriptorMap,
    pub overrides: TabBarOverrides,
}

impl NavigationSnapshot {
    pub fn into_input(self, screen_width: f32) -> TabBarInput {
        TabBarInput::new(self.navigation, self.descriptors, screen_width)
            .with_overrides(self.overrides)
    }
}

/// Parse and validate a navigation snapshot document.
pub fn parse_navigation_snapshot_json(json: &str) -> Result<NavigationSnapshot, TabBarError> {
    let doc: SnapshotDoc = serde_json::from_str(json)?;
    if !doc.routes.is_empty() && doc.index >= doc.routes.len() {
        return Err(TabBarError::IndexOutOfRange {
            index: doc.index,
            len: doc.routes.len(),
        });
    }

    let routes: Vec<Route> = doc
        .routes
        .into_iter()
        .map(|r| Route::new(r.key, r.name))
        .collect();

    let mut descriptors = HashMap::with_capacity(doc.descriptors.len());
    for (key, d) in doc.descriptors {
        if !routes.iter().any(|r| r.key == key) {
            warn!("navigation snapshot: descriptor for unknown route key '{key}'");
        }
        descriptors.insert(key, TabOptions::from(d));
    }

    let o = doc.overrides;
    let overrides = TabBarOverrides {
        tabs: o.tabs.map(|tabs| {
            tabs.into_iter()
                .map(|(name, t)| (name, TabItemConfig::from(t)))
                .collect::<TabsConfig>()
        }),
        icons: o
            .icons
            .into_iter()
            .map(|(name, symbol)| (name, TabIcon::symbol(symbol)))
            .collect(),
        colors: o
            .colors
            .into_iter()
            .map(|(name, c)| (name, ColorTriple::from(c)))
            .collect(),
        color_scheme: o.color_scheme,
    };

    Ok(NavigationSnapshot {
        navigation: NavigationState::new(routes, doc.index),
        descriptors: Arc::new(descriptors),
        overrides,
    })
}
