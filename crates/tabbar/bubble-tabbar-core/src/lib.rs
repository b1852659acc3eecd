//! Bubble Tab Bar Core (engine-agnostic)
//!
//! Resolves host navigation state into per-tab configs, sizes the bar against a fixed
//! width budget, and drives one spring-animated focus progress per tab. Adapters
//! (Bevy, native views) feed host state in, call [`TabBar::tick`] once per frame and
//! draw the resulting [`TabBarFrame`].

pub mod animation;
pub mod color;
pub mod config;
pub mod error;
pub mod host;
pub mod layout;
pub mod resolver;
pub mod snapshot;
pub mod spring;
pub mod tab_bar;
pub mod theme;

// Re-exports for consumers (adapters)
pub use animation::{derive_visuals, AnimationController, AnimationState, ItemVisuals, Phase};
pub use color::Color;
pub use config::TabBarConfig;
pub use error::TabBarError;
pub use host::{
    DescriptorMap, EmitResult, EventKind, Glyph, IconContext, IconSource, LabelContext,
    LabelPosition, LabelSource, NavigationEvent, NavigationHost, NavigationState, Route,
    TabOptions,
};
pub use layout::{
    compute_budget, compute_max_expansion, estimate_label_width, LayoutBudget, LayoutConstants,
};
pub use resolver::{
    resolve_item, resolve_tabs, ColorTriple, TabBarOverrides, TabConfigResolver, TabIcon,
    TabItemConfig, TabsConfig,
};
pub use snapshot::{parse_navigation_snapshot_json, NavigationSnapshot};
pub use spring::{Spring, SpringProfile};
pub use tab_bar::{PressOutcome, ShadowStyle, TabBar, TabBarFrame, TabBarInput, TabItemFrame};
pub use theme::{BarStyle, ColorScheme, ThemePalette};
