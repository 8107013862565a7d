//! Paint colors and state-dependent hint color sets.
//!
//! The floating label is drawn with a paint color resolved against the host
//! field's current interaction state: a [`HintColorSet`] holds an ordered
//! list of `(StateSpec, Color)` entries and a default color, and resolution
//! returns the first entry whose spec matches, falling back to the default.
//!
//! ### Example
//! ```rust
//! use floatlabel_input::color::{Color, DrawState, HintColorSet, StateSpec};
//!
//! let gray = Color::rgb(0x75, 0x75, 0x75);
//! let accent = Color::rgb(0x3f, 0x51, 0xb5);
//! let colors = HintColorSet::new(gray).with_state(StateSpec::any().focused(true), accent);
//!
//! let mut state = DrawState::default();
//! assert_eq!(colors.color_for_state(&state), gray);
//! state.focused = true;
//! assert_eq!(colors.color_for_state(&state), accent);
//! ```

use once_cell::sync::Lazy;

/// A 32-bit ARGB paint color.
///
/// Alpha is straight (not premultiplied). An alpha of zero draws nothing,
/// which is how the field's own placeholder is hidden while the grow
/// transition runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Alpha channel; 0 is fully transparent, 255 fully opaque.
    pub a: u8,
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Fully transparent black, used to suppress the placeholder during a
    /// grow transition.
    pub const TRANSPARENT: Color = Color {
        a: 0,
        r: 0,
        g: 0,
        b: 0,
    };

    /// Creates a fully opaque color from red, green, and blue channels.
    ///
    /// ```rust
    /// use floatlabel_input::color::Color;
    ///
    /// let c = Color::rgb(0x20, 0x40, 0x80);
    /// assert_eq!(c.a, 0xff);
    /// assert!(!c.is_transparent());
    /// ```
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { a: 0xff, r, g, b }
    }

    /// Creates a color from alpha, red, green, and blue channels.
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Reports whether this color has zero alpha.
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }
}

/// Snapshot of the host widget's interaction state at draw time.
///
/// Queried from the field on every draw pass so the hint color can follow
/// focus and enablement changes without extra bookkeeping in the component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawState {
    /// The field currently has keyboard focus.
    pub focused: bool,
    /// The field accepts input.
    pub enabled: bool,
    /// A pointer is currently pressed on the field.
    pub pressed: bool,
}

impl Default for DrawState {
    /// An enabled, unfocused, unpressed field.
    fn default() -> Self {
        Self {
            focused: false,
            enabled: true,
            pressed: false,
        }
    }
}

/// A partial match over a [`DrawState`].
///
/// Each flag is either required to have a specific value or left as
/// "don't care". [`StateSpec::any`] matches every state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StateSpec {
    focused: Option<bool>,
    enabled: Option<bool>,
    pressed: Option<bool>,
}

impl StateSpec {
    /// A spec with no requirements; matches any state.
    pub fn any() -> Self {
        Self::default()
    }

    /// Requires the focused flag to equal `v`.
    pub fn focused(mut self, v: bool) -> Self {
        self.focused = Some(v);
        self
    }

    /// Requires the enabled flag to equal `v`.
    pub fn enabled(mut self, v: bool) -> Self {
        self.enabled = Some(v);
        self
    }

    /// Requires the pressed flag to equal `v`.
    pub fn pressed(mut self, v: bool) -> Self {
        self.pressed = Some(v);
        self
    }

    /// Reports whether `state` satisfies every requirement of this spec.
    pub fn matches(&self, state: &DrawState) -> bool {
        self.focused.map_or(true, |v| v == state.focused)
            && self.enabled.map_or(true, |v| v == state.enabled)
            && self.pressed.map_or(true, |v| v == state.pressed)
    }
}

/// An ordered set of state-dependent hint colors with a default fallback.
///
/// Resolution walks the entries in insertion order and returns the color of
/// the first spec that matches, so more specific entries should be added
/// before broader ones.
#[derive(Debug, Clone, PartialEq)]
pub struct HintColorSet {
    entries: Vec<(StateSpec, Color)>,
    default_color: Color,
}

impl HintColorSet {
    /// Creates a set with no state entries and the given default color.
    pub fn new(default_color: Color) -> Self {
        Self {
            entries: Vec::new(),
            default_color,
        }
    }

    /// Creates a set that resolves to `color` in every state.
    ///
    /// `HintColorSet::solid(Color::TRANSPARENT)` is the override installed
    /// on the field while a grow transition is running.
    pub fn solid(color: Color) -> Self {
        Self::new(color)
    }

    /// Appends a state entry. Entries are consulted in insertion order.
    pub fn with_state(mut self, spec: StateSpec, color: Color) -> Self {
        self.entries.push((spec, color));
        self
    }

    /// Resolves the color for `state`: the first matching entry, or the
    /// default color if none matches.
    pub fn color_for_state(&self, state: &DrawState) -> Color {
        self.entries
            .iter()
            .find(|(spec, _)| spec.matches(state))
            .map_or(self.default_color, |(_, color)| *color)
    }

    /// Returns the default (fallback) color.
    pub fn default_color(&self) -> Color {
        self.default_color
    }
}

/// A plain dim-gray hint in every state.
pub static SUBTLE: Lazy<HintColorSet> =
    Lazy::new(|| HintColorSet::new(Color::rgb(0x75, 0x75, 0x75)));

/// Dim gray normally, indigo accent while the field is focused.
pub static FOCUS_ACCENT: Lazy<HintColorSet> = Lazy::new(|| {
    HintColorSet::new(Color::rgb(0x75, 0x75, 0x75))
        .with_state(StateSpec::any().focused(true), Color::rgb(0x3f, 0x51, 0xb5))
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_spec_matches_everything() {
        let spec = StateSpec::any();
        assert!(spec.matches(&DrawState::default()));
        assert!(spec.matches(&DrawState {
            focused: true,
            enabled: false,
            pressed: true,
        }));
    }

    #[test]
    fn test_spec_requires_all_set_flags() {
        let spec = StateSpec::any().focused(true).enabled(true);
        let mut state = DrawState::default();
        assert!(!spec.matches(&state));
        state.focused = true;
        assert!(spec.matches(&state));
        state.enabled = false;
        assert!(!spec.matches(&state));
    }

    #[test]
    fn test_first_matching_entry_wins() {
        let first = Color::rgb(1, 0, 0);
        let second = Color::rgb(2, 0, 0);
        let colors = HintColorSet::new(Color::rgb(0, 0, 0))
            .with_state(StateSpec::any().focused(true), first)
            .with_state(StateSpec::any(), second);

        let mut state = DrawState::default();
        assert_eq!(colors.color_for_state(&state), second);
        state.focused = true;
        assert_eq!(colors.color_for_state(&state), first);
    }

    #[test]
    fn test_default_fallback_when_no_entry_matches() {
        let fallback = Color::rgb(9, 9, 9);
        let colors =
            HintColorSet::new(fallback).with_state(StateSpec::any().pressed(true), Color::TRANSPARENT);
        assert_eq!(colors.color_for_state(&DrawState::default()), fallback);
    }

    #[test]
    fn test_solid_transparent_resolves_transparent_everywhere() {
        let colors = HintColorSet::solid(Color::TRANSPARENT);
        let state = DrawState {
            focused: true,
            enabled: true,
            pressed: true,
        };
        assert!(colors.color_for_state(&state).is_transparent());
        assert!(colors.default_color().is_transparent());
    }

    #[test]
    fn test_presets() {
        let focused = DrawState {
            focused: true,
            ..DrawState::default()
        };
        assert_eq!(
            SUBTLE.color_for_state(&focused),
            SUBTLE.default_color(),
            "SUBTLE ignores state"
        );
        assert_ne!(
            FOCUS_ACCENT.color_for_state(&focused),
            FOCUS_ACCENT.default_color()
        );
    }
}
