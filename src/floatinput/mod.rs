//! Floating-label text input component.
//!
//! Decorates a host-provided editable field (see [`crate::surface`]) with a
//! hint that shrinks into a small floating label above the baseline when
//! text is typed into the empty field, and grows back when the field is
//! emptied. The transition spans a fixed number of redraw frames; each draw
//! pass renders one frame and advances the state.
//!
//! # Integration
//!
//! Wire the component into the host's view callbacks:
//! - forward every text mutation to [`Model::text_changed`];
//! - call [`Model::draw`] from the render callback, after the field's own
//!   content;
//! - add [`Model::padding_top`] to the field's reported top padding so
//!   vertical space is reserved for the floating label;
//! - dispatch the command `draw` returns, and when the resulting
//!   [`FrameMsg`] arrives, confirm it with [`Model::needs_repaint`] and
//!   repaint.
//!
//! # Resting placeholder
//!
//! While the component is idle and the field is empty it draws nothing: the
//! full-size resting placeholder remains the host field's own rendering.
//! This is also why a grow transition temporarily overrides the field's
//! hint colors with transparent — without it the placeholder would show
//! through the growing label and the hint would appear twice.

pub mod model;
pub mod types;
pub mod view;


pub use model::{
    new, with_animation_steps, with_hint_colors, with_hint_scale, FloatLabelOption, Model,
    DEFAULT_ANIMATION_STEPS, DEFAULT_HINT_SCALE,
};
pub use types::{AnimationPhase, FrameMsg};
