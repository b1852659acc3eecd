//! Per-tab focus animation.
//!
//! Each route owns one spring-driven progress value in `[0, 1]`. Focus flips retarget the
//! spring from wherever it is: toward 1 with the expand profile, toward 0 with the collapse
//! profile. Width, label reveal and background color are all derived from that one value on
//! every frame, so they can never drift apart.

use hashbrown::{HashMap, HashSet};
use log::{debug, trace};

use crate::color::Color;
use crate::config::TabBarConfig;
use crate::layout::LayoutBudget;
use crate::resolver::TabItemConfig;
use crate::spring::{Spring, SpringProfile};

/// Where a tab is in its focus cycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Unfocused,
    Expanding,
    Focused,
    Collapsing,
}

/// Animation state of one route.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationState {
    spring: Spring,
}

impl AnimationState {
    /// Settled at its endpoint; nothing animates on first appearance.
    pub fn new(focused: bool, expand: SpringProfile, collapse: SpringProfile) -> Self {
        let spring = if focused {
            Spring::at_rest(1.0, expand)
        } else {
            Spring::at_rest(0.0, collapse)
        };
        Self { spring }
    }

    /// Spring position clamped to `[0, 1]`.
    #[inline]
    pub fn progress(&self) -> f32 {
        self.spring.position().clamp(0.0, 1.0)
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.spring.target()
    }

    #[inline]
    pub fn is_focused(&self) -> bool {
        self.spring.target() >= 1.0
    }

    pub fn spring(&self) -> &Spring {
        &self.spring
    }

    pub fn phase(&self) -> Phase {
        match (self.spring.is_at_rest(), self.is_focused()) {
            (true, true) => Phase::Focused,
            (true, false) => Phase::Unfocused,
            (false, true) => Phase::Expanding,
            (false, false) => Phase::Collapsing,
        }
    }

    /// Returns `true` when the focused flag actually changed.
    fn set_focused(
        &mut self,
        focused: bool,
        expand: SpringProfile,
        collapse: SpringProfile,
    ) -> bool {
        if focused == self.is_focused() {
            return false;
        }
        if focused {
            self.spring.retarget(1.0, expand);
        } else {
            self.spring.retarget(0.0, collapse);
        }
        true
    }
}

/// Owns every route's [`AnimationState`]. Nothing else mutates progress.
#[derive(Clone, Debug)]
pub struct AnimationController {
    states: HashMap<String, AnimationState>,
    expand: SpringProfile,
    collapse: SpringProfile,
    max_step: f32,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self::from_config(&TabBarConfig::default())
    }
}

impl AnimationController {
    pub fn new(expand: SpringProfile, collapse: SpringProfile, max_step: f32) -> Self {
        Self {
            states: HashMap::new(),
            expand,
            collapse,
            max_step,
        }
    }

    pub fn from_config(cfg: &TabBarConfig) -> Self {
        Self::new(cfg.expand, cfg.collapse, cfg.max_step)
    }

    /// Bring the state set in line with the current routes: create unseen routes at rest,
    /// retarget routes whose focus flipped, drop routes that are gone.
    pub fn sync<'a, I>(&mut self, focus: I)
    where
        I: IntoIterator<Item = (&'a str, bool)>,
    {
        let mut seen: HashSet<&'a str> = HashSet::new();
        for (name, focused) in focus {
            seen.insert(name);
            if self.states.contains_key(name) {
                self.set_focused(name, focused);
            } else {
                self.states.insert(
                    name.to_string(),
                    AnimationState::new(focused, self.expand, self.collapse),
                );
            }
        }
        let before = self.states.len();
        self.states.retain(|name, _| seen.contains(name.as_str()));
        if self.states.len() != before {
            debug!(
                "tab animation: dropped {} stale route state(s)",
                before - self.states.len()
            );
        }
    }

    /// Flip one route's focus. Unknown routes are ignored; returns whether anything changed.
    pub fn set_focused(&mut self, name: &str, focused: bool) -> bool {
        let (expand, collapse) = (self.expand, self.collapse);
        match self.states.get_mut(name) {
            Some(state) => {
                let changed = state.set_focused(focused, expand, collapse);
                if changed {
                    debug!(
                        "tab animation: '{name}' -> {:?} from progress {:.3}",
                        state.phase(),
                        state.progress()
                    );
                }
                changed
            }
            None => false,
        }
    }

    /// Advance every route by `dt` seconds. Returns how many are still moving.
    pub fn tick(&mut self, dt: f32) -> usize {
        let mut moving = 0;
        for (name, state) in self.states.iter_mut() {
            if state.spring.is_at_rest() {
                continue;
            }
            if state.spring.step(dt, self.max_step) {
                moving += 1;
            } else {
                trace!("tab animation: '{name}' settled at {}", state.progress());
            }
        }
        moving
    }

    pub fn state(&self, name: &str) -> Option<&AnimationState> {
        self.states.get(name)
    }

    pub fn progress(&self, name: &str) -> Option<f32> {
        self.states.get(name).map(AnimationState::progress)
    }

    pub fn phase(&self, name: &str) -> Option<Phase> {
        self.states.get(name).map(AnimationState::phase)
    }

    pub fn is_animating(&self) -> bool {
        self.states.values().any(|s| !s.spring.is_at_rest())
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn clear(&mut self) {
        self.states.clear();
    }
}

/// Animated outputs of one tab for one frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ItemVisuals {
    pub progress: f32,
    pub item_width: f32,
    pub label_container_width: f32,
    pub label_opacity: f32,
    /// The label is mounted only while progress is above zero.
    pub label_visible: bool,
    pub background_color: Color,
}

/// Everything the renderer animates, as a pure function of progress.
pub fn derive_visuals(
    progress: f32,
    label_width: f32,
    item: &TabItemConfig,
    budget: &LayoutBudget,
) -> ItemVisuals {
    let p = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    };
    let label_container_width = p * label_width;
    ItemVisuals {
        progress: p,
        item_width: budget.base_item_width
            + label_container_width
            + p * budget.extra_expansion_padding,
        label_container_width,
        label_opacity: p,
        label_visible: p > 0.0,
        background_color: item.inactive_bg_color.lerp(item.active_bg_color, p),
    }
}
