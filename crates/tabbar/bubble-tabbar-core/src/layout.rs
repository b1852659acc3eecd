//! Width budget of the bar and label-width estimation.
//!
//! Two-stage structure: the expansion budget is the minimum of the "leave room for the
//! unfocused items" width and a hard cap on the available width, and the label width is then
//! clamped under that budget. Nothing here can widen the bar past its fixed outer width.

use serde::{Deserialize, Serialize};

/// Tuning constants for the layout arithmetic. Sizes are in layout units.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConstants {
    /// Bar width as a fraction of screen width.
    pub bar_width_fraction: f32,
    /// Left offset of the bar as a fraction of screen width (centers a 0.6 bar).
    pub bar_left_fraction: f32,
    pub bar_padding: f32,
    pub bar_height: f32,
    pub base_item_width: f32,
    /// Estimated advance of one label character.
    pub char_width: f32,
    pub label_padding: f32,
    /// How many base widths the unfocused items are assumed to need.
    pub unfocused_weight: f32,
    /// Upper bound of the expansion as a fraction of available width.
    pub hard_cap_fraction: f32,
    /// Extra width added to a fully focused item on top of its label.
    pub extra_expansion_padding: f32,
}

impl Default for LayoutConstants {
    fn default() -> Self {
        Self {
            bar_width_fraction: 0.6,
            bar_left_fraction: 0.2,
            bar_padding: 8.0,
            bar_height: 60.0,
            base_item_width: 44.0,
            char_width: 10.0,
            label_padding: 8.0,
            unfocused_weight: 1.7,
            hard_cap_fraction: 0.6,
            extra_expansion_padding: 8.0,
        }
    }
}

/// Derived per (screen width, tab count); pure and cheap to recompute.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutBudget {
    pub screen_width: f32,
    pub bar_width: f32,
    pub bar_left: f32,
    pub bar_height: f32,
    pub padding: f32,
    pub available_width: f32,
    pub base_item_width: f32,
    pub max_expansion: f32,
    pub extra_expansion_padding: f32,
    pub tab_count: usize,
}

#[inline]
fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}

impl LayoutConstants {
    /// `min(chars × char_width + label_padding, max_expansion − base_item_width)`, never negative.
    pub fn estimate_label_width(&self, label: &str, max_expansion: f32) -> f32 {
        let chars = label.chars().count() as f32;
        let wanted = chars * self.char_width + self.label_padding;
        let room = finite_or_zero(max_expansion) - self.base_item_width;
        wanted.min(room).max(0.0)
    }

    /// Largest width a single focused item may take.
    pub fn compute_max_expansion(&self, available_width: f32, tab_count: usize) -> f32 {
        let available = finite_or_zero(available_width).max(0.0);
        let leave_for_unfocused = available - self.base_item_width * self.unfocused_weight;
        let hard_cap = self.hard_cap_fraction * available;
        let others = tab_count.saturating_sub(1) as f32 * self.base_item_width;
        // a focused item is at most max_expansion + extra_expansion_padding wide
        let outer_bound = available - others - finite_or_zero(self.extra_expansion_padding);
        leave_for_unfocused.min(hard_cap).min(outer_bound).max(0.0)
    }

    pub fn compute_budget(&self, screen_width: f32, tab_count: usize) -> LayoutBudget {
        let screen_width = finite_or_zero(screen_width).max(0.0);
        let bar_width = screen_width * self.bar_width_fraction;
        let available_width = (bar_width - self.bar_padding * 2.0).max(0.0);
        LayoutBudget {
            screen_width,
            bar_width,
            bar_left: screen_width * self.bar_left_fraction,
            bar_height: self.bar_height,
            padding: self.bar_padding,
            available_width,
            base_item_width: self.base_item_width,
            max_expansion: self.compute_max_expansion(available_width, tab_count),
            extra_expansion_padding: self.extra_expansion_padding,
            tab_count,
        }
    }
}

/// [`LayoutConstants::estimate_label_width`] with the default constants.
pub fn estimate_label_width(label: &str, max_expansion: f32) -> f32 {
    LayoutConstants::default().estimate_label_width(label, max_expansion)
}

/// [`LayoutConstants::compute_max_expansion`] with the default constants.
pub fn compute_max_expansion(available_width: f32, tab_count: usize) -> f32 {
    LayoutConstants::default().compute_max_expansion(available_width, tab_count)
}

/// [`LayoutConstants::compute_budget`] with the default constants.
pub fn compute_budget(screen_width: f32, tab_count: usize) -> LayoutBudget {
    LayoutConstants::default().compute_budget(screen_width, tab_count)
}
