#![warn(missing_docs)]

//! # floatlabel-input
//!
//! A floating-label text input decorator. The field's hint (placeholder)
//! text shrinks into a small label above the input when the user types, and
//! grows back to the placeholder position when the field is emptied.
//!
//! ## Overview
//!
//! The component does not own a text editor or a rendering surface. It
//! decorates a host-provided editable field through two small traits:
//! [`TextField`] supplies content emptiness, the hint string, visibility,
//! paint and font metrics, baseline, paddings, scroll offsets, and the
//! current interaction state; [`Canvas`] receives positioned text draw
//! commands. Everything the component does is a synchronous computation
//! inside the host's content-changed and render callbacks.
//!
//! Transitions span a fixed number of redraw frames (default 6) rather than
//! a wall-clock duration: every call to [`FloatLabelInput::draw`] renders
//! one frame, advances the state, and returns a [`bubbletea_rs::Cmd`] that
//! asks the host to schedule the next pass. Frame messages carry an
//! instance id and a per-transition tag, so messages from an abandoned
//! transition, or from another instance, are ignored.
//!
//! ## Example
//!
//! ```rust
//! use floatlabel_input::prelude::*;
//!
//! struct Field {
//!     text: String,
//!     hint: String,
//!     shown: bool,
//!     colors: HintColorSet,
//! }
//!
//! impl TextField for Field {
//!     fn text_is_empty(&self) -> bool {
//!         self.text.is_empty()
//!     }
//!     fn hint(&self) -> Option<&str> {
//!         Some(&self.hint)
//!     }
//!     fn is_shown(&self) -> bool {
//!         self.shown
//!     }
//!     fn text_size(&self) -> f32 {
//!         20.0
//!     }
//!     fn paint(&self) -> Paint {
//!         Paint { text_size: 20.0, color: self.colors.default_color() }
//!     }
//!     fn font_metrics(&self) -> FontMetrics {
//!         FontMetrics { top: -18.0, bottom: 5.0 }
//!     }
//!     fn baseline(&self) -> f32 {
//!         48.0
//!     }
//!     fn compound_padding_left(&self) -> f32 {
//!         8.0
//!     }
//!     fn compound_padding_top(&self) -> f32 {
//!         8.0
//!     }
//!     fn scroll_x(&self) -> f32 {
//!         0.0
//!     }
//!     fn scroll_y(&self) -> f32 {
//!         0.0
//!     }
//!     fn draw_state(&self) -> DrawState {
//!         DrawState::default()
//!     }
//!     fn hint_colors(&self) -> HintColorSet {
//!         self.colors.clone()
//!     }
//!     fn set_hint_colors(&mut self, colors: HintColorSet) {
//!         self.colors = colors;
//!     }
//! }
//!
//! struct Ops(Vec<(String, f32, f32, Paint)>);
//!
//! impl Canvas for Ops {
//!     fn draw_text(&mut self, text: &str, x: f32, y: f32, paint: &Paint) {
//!         self.0.push((text.to_string(), x, y, *paint));
//!     }
//! }
//!
//! let mut field = Field {
//!     text: String::new(),
//!     hint: "Email".to_string(),
//!     shown: true,
//!     colors: SUBTLE.clone(),
//! };
//! let mut input = floatinput_new(&field, &[]);
//!
//! // Typing into the empty field starts the shrink transition.
//! field.text.push('a');
//! input.text_changed(&mut field);
//! assert!(input.is_animating());
//!
//! // Each draw pass renders one frame and requests the next pass.
//! let mut canvas = Ops(Vec::new());
//! let redraw = input.draw(&mut field, &mut canvas);
//! assert!(redraw.is_some());
//! assert_eq!(canvas.0.len(), 1);
//! ```
//!
//! ## Hosts without a message loop
//!
//! The returned commands are plain [`bubbletea_rs::Cmd`] values; a host
//! that repaints continuously (for example a retained-mode toolkit with its
//! own invalidation) can drop them and simply keep calling `draw` while
//! [`FloatLabelInput::is_animating`] reports true.

pub mod color;
pub mod floatinput;
pub mod surface;

pub use color::{Color, DrawState, HintColorSet, StateSpec, FOCUS_ACCENT, SUBTLE};
pub use floatinput::{
    new as floatinput_new, with_animation_steps, with_hint_colors, with_hint_scale,
    AnimationPhase, FloatLabelOption, FrameMsg, Model as FloatLabelInput,
    DEFAULT_ANIMATION_STEPS, DEFAULT_HINT_SCALE,
};
pub use surface::{Canvas, FontMetrics, Paint, TextField};

/// Prelude module for convenient imports.
///
/// ```rust
/// use floatlabel_input::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::{Color, DrawState, HintColorSet, StateSpec, FOCUS_ACCENT, SUBTLE};
    pub use crate::floatinput::{
        new as floatinput_new, with_animation_steps, with_hint_colors, with_hint_scale,
        AnimationPhase, FloatLabelOption, FrameMsg, Model as FloatLabelInput,
        DEFAULT_ANIMATION_STEPS, DEFAULT_HINT_SCALE,
    };
    pub use crate::surface::{Canvas, FontMetrics, Paint, TextField};
}
