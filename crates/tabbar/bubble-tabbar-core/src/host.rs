//! Host navigation contracts: routes, per-route descriptors, label/icon sources and the
//! cancellable tab-press event.
//!
//! Label and icon callbacks are explicit enums (`LabelSource`, `IconSource`) and are resolved
//! by matching on the variant.

use std::fmt;
use std::sync::Arc;

use hashbrown::HashMap;

use crate::color::Color;
use crate::theme::ColorScheme;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Route {
    /// Stable key, unique per route instance.
    pub key: String,
    /// Route name; also the key of the resolved tab config.
    pub name: String,
}

impl Route {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
        }
    }
}

/// Ordered routes plus the focused index. The routes are shared so that an unchanged route
/// list keeps its identity across frames.
#[derive(Clone, Debug)]
pub struct NavigationState {
    pub routes: Arc<[Route]>,
    pub index: usize,
}

impl NavigationState {
    pub fn new(routes: Vec<Route>, index: usize) -> Self {
        Self {
            routes: routes.into(),
            index,
        }
    }

    /// Same routes (same identity), different focus.
    pub fn with_index(&self, index: usize) -> Self {
        Self {
            routes: Arc::clone(&self.routes),
            index,
        }
    }

    pub fn focused_route(&self) -> Option<&Route> {
        self.routes.get(self.index)
    }

    pub fn position_of_key(&self, key: &str) -> Option<usize> {
        self.routes.iter().position(|r| r.key == key)
    }

    pub fn position_of_name(&self, name: &str) -> Option<usize> {
        self.routes.iter().position(|r| r.name == name)
    }
}

/// Where the host would place a label relative to its icon.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LabelPosition {
    BesideIcon,
    BelowIcon,
}

/// Context handed to label factories.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelContext {
    pub focused: bool,
    pub color: Color,
    pub position: LabelPosition,
}

impl LabelContext {
    /// The context used during config resolution.
    pub fn neutral() -> Self {
        Self {
            focused: false,
            color: Color::TRANSPARENT,
            position: LabelPosition::BesideIcon,
        }
    }
}

/// Context handed to icon factories.
#[derive(Clone, Debug, PartialEq)]
pub struct IconContext {
    pub focused: bool,
    pub color: Color,
    pub size: f32,
}

/// Render instruction produced by an icon renderer. Drawing is up to the host.
#[derive(Clone, Debug, PartialEq)]
pub enum Glyph {
    Circle { diameter: f32, color: Color },
    Symbol { name: String, color: Color, size: f32 },
    Empty,
}

impl Glyph {
    /// Same glyph drawn in `color`.
    pub fn recolored(&self, color: Color) -> Glyph {
        match self {
            Glyph::Circle { diameter, .. } => Glyph::Circle {
                diameter: *diameter,
                color,
            },
            Glyph::Symbol { name, size, .. } => Glyph::Symbol {
                name: name.clone(),
                color,
                size: *size,
            },
            Glyph::Empty => Glyph::Empty,
        }
    }
}

pub type LabelFactory = Arc<dyn Fn(&LabelContext) -> Option<String> + Send + Sync>;
pub type IconFactory = Arc<dyn Fn(&IconContext) -> Glyph + Send + Sync>;

/// Descriptor label: a literal or a factory. A factory yielding `None` produced something
/// that is not text and is skipped during resolution.
#[derive(Clone)]
pub enum LabelSource {
    Text(String),
    Factory(LabelFactory),
}

impl LabelSource {
    pub fn factory<F>(f: F) -> Self
    where
        F: Fn(&LabelContext) -> Option<String> + Send + Sync + 'static,
    {
        LabelSource::Factory(Arc::new(f))
    }
}

impl fmt::Debug for LabelSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelSource::Text(s) => f.debug_tuple("Text").field(s).finish(),
            LabelSource::Factory(_) => f.write_str("Factory(..)"),
        }
    }
}

/// Descriptor icon: a factory taking the icon context, or a fixed glyph.
#[derive(Clone)]
pub enum IconSource {
    Factory(IconFactory),
    Static(Glyph),
}

impl IconSource {
    pub fn factory<F>(f: F) -> Self
    where
        F: Fn(&IconContext) -> Glyph + Send + Sync + 'static,
    {
        IconSource::Factory(Arc::new(f))
    }
}

impl fmt::Debug for IconSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconSource::Factory(_) => f.write_str("Factory(..)"),
            IconSource::Static(g) => f.debug_tuple("Static").field(g).finish(),
        }
    }
}

/// Per-route display options supplied by the host.
#[derive(Clone, Debug, Default)]
pub struct TabOptions {
    pub title: Option<String>,
    pub label: Option<LabelSource>,
    pub icon: Option<IconSource>,
    pub active_tint_color: Option<Color>,
    pub active_background_color: Option<Color>,
    pub inactive_background_color: Option<Color>,
}

/// Descriptors keyed by route key; shared so identity survives unchanged frames.
pub type DescriptorMap = Arc<HashMap<String, TabOptions>>;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EventKind {
    TabPress,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::TabPress => "tabPress",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationEvent {
    pub kind: EventKind,
    /// Route key the event targets.
    pub target: String,
    pub can_prevent_default: bool,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EmitResult {
    pub default_prevented: bool,
}

/// The host navigation framework, seen from the tab bar.
pub trait NavigationHost {
    /// Deliver an event to the host's listeners.
    fn emit(&mut self, event: &NavigationEvent) -> EmitResult;

    /// Switch to the named route. Only called when the press was not prevented.
    fn navigate(&mut self, route_name: &str);

    /// Appearance detected from the host environment.
    fn color_scheme(&self) -> ColorScheme {
        ColorScheme::Light
    }
}
