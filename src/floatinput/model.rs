//! Model, configuration, and change-event handling for the floating-label
//! input component.

use super::types::{AnimationPhase, FrameMsg};
use crate::color::{Color, HintColorSet};
use crate::surface::TextField;
use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

// Internal ID management, so frame messages reach only the instance that
// scheduled them.
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Default size ratio of the floating hint relative to normal text size.
pub const DEFAULT_HINT_SCALE: f32 = 0.6;

/// Default number of draw passes a transition spans.
pub const DEFAULT_ANIMATION_STEPS: u32 = 6;

// Lower bound keeps the `steps - 1` interpolation divisor positive.
const MIN_ANIMATION_STEPS: u32 = 2;

// Scheduling latency for the next draw pass. Transition progress is counted
// in draw passes, not elapsed time; this only paces how quickly the host is
// asked to repaint.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Configuration option for [`new`], in the functional-options style.
#[derive(Debug, Clone)]
pub enum FloatLabelOption {
    /// Sets the size ratio of the floating hint relative to normal text
    /// size.
    WithHintScale(f32),
    /// Sets the number of draw passes a transition spans. Values below 2
    /// are clamped to 2.
    WithAnimationSteps(u32),
    /// Replaces the hint colors captured from the field.
    WithHintColors(HintColorSet),
}

impl FloatLabelOption {
    fn apply(&self, m: &mut Model) {
        match self {
            FloatLabelOption::WithHintScale(scale) => m.hint_scale = *scale,
            FloatLabelOption::WithAnimationSteps(steps) => m.set_animation_steps(*steps),
            FloatLabelOption::WithHintColors(colors) => m.hint_colors = colors.clone(),
        }
    }
}

/// Sets the floating hint scale.
pub fn with_hint_scale(scale: f32) -> FloatLabelOption {
    FloatLabelOption::WithHintScale(scale)
}

/// Sets the number of draw passes a transition spans.
pub fn with_animation_steps(steps: u32) -> FloatLabelOption {
    FloatLabelOption::WithAnimationSteps(steps)
}

/// Replaces the hint colors captured from the field.
pub fn with_hint_colors(colors: HintColorSet) -> FloatLabelOption {
    FloatLabelOption::WithHintColors(colors)
}

/// The floating-label input component.
///
/// Decorates a host-provided editable field: when text is typed into the
/// empty field the hint shrinks into a small label above the baseline, and
/// when the field is emptied it grows back. The transition is driven by
/// draw passes — each call to [`draw`](Model::draw) renders one frame and
/// advances the state, and returns a command that asks the host to repaint.
#[derive(Debug, Clone)]
pub struct Model {
    id: i64,
    // Bumped whenever a new transition starts, so frame messages scheduled
    // by an abandoned transition are rejected.
    tag: i64,

    pub(super) hint_scale: f32,
    pub(super) animation_steps: u32,

    pub(super) phase: AnimationPhase,
    // Emptiness as of the last observed change; transitions trigger on
    // edges of this value, never on its level.
    was_empty: bool,

    // Colors captured from the field at construction, restored after a grow
    // transition ends.
    pub(super) hint_colors: HintColorSet,
}

/// Creates a new floating-label component decorating `field`.
///
/// Captures the field's configured hint colors and its current emptiness as
/// the baseline for edge detection.
///
/// ```rust
/// use floatlabel_input::prelude::*;
/// # struct Field;
/// # impl TextField for Field {
/// #     fn text_is_empty(&self) -> bool { true }
/// #     fn hint(&self) -> Option<&str> { Some("Email") }
/// #     fn is_shown(&self) -> bool { true }
/// #     fn text_size(&self) -> f32 { 20.0 }
/// #     fn paint(&self) -> Paint { Paint { text_size: 20.0, color: SUBTLE.default_color() } }
/// #     fn font_metrics(&self) -> FontMetrics { FontMetrics { top: -18.0, bottom: 5.0 } }
/// #     fn baseline(&self) -> f32 { 48.0 }
/// #     fn compound_padding_left(&self) -> f32 { 8.0 }
/// #     fn compound_padding_top(&self) -> f32 { 8.0 }
/// #     fn scroll_x(&self) -> f32 { 0.0 }
/// #     fn scroll_y(&self) -> f32 { 0.0 }
/// #     fn draw_state(&self) -> DrawState { DrawState::default() }
/// #     fn hint_colors(&self) -> HintColorSet { SUBTLE.clone() }
/// #     fn set_hint_colors(&mut self, _colors: HintColorSet) {}
/// # }
/// let field = Field;
/// let input = floatlabel_input::floatinput::new(&field, &[with_animation_steps(8)]);
/// assert_eq!(input.animation_steps(), 8);
/// assert!(!input.is_animating());
/// ```
pub fn new<F: TextField>(field: &F, opts: &[FloatLabelOption]) -> Model {
    let mut m = Model {
        id: next_id(),
        tag: 0,
        hint_scale: DEFAULT_HINT_SCALE,
        animation_steps: DEFAULT_ANIMATION_STEPS,
        phase: AnimationPhase::Idle,
        was_empty: field.text_is_empty(),
        hint_colors: field.hint_colors(),
    };

    for opt in opts {
        opt.apply(&mut m);
    }

    m
}

impl Default for Model {
    /// A component with default configuration, assuming an empty field and
    /// the [`SUBTLE`](crate::color::SUBTLE) hint colors. Prefer [`new`],
    /// which captures both from the real field.
    fn default() -> Self {
        Self {
            id: next_id(),
            tag: 0,
            hint_scale: DEFAULT_HINT_SCALE,
            animation_steps: DEFAULT_ANIMATION_STEPS,
            phase: AnimationPhase::Idle,
            was_empty: true,
            hint_colors: crate::color::SUBTLE.clone(),
        }
    }
}

impl Model {
    /// Returns the floating hint scale.
    pub fn hint_scale(&self) -> f32 {
        self.hint_scale
    }

    /// Sets the floating hint scale. Takes effect on the next draw pass.
    pub fn set_hint_scale(&mut self, scale: f32) {
        self.hint_scale = scale;
    }

    /// Returns the number of draw passes a transition spans.
    pub fn animation_steps(&self) -> u32 {
        self.animation_steps
    }

    /// Sets the number of draw passes a transition spans.
    ///
    /// Values below 2 are clamped to 2 to keep the interpolation divisor
    /// positive. Takes effect for the next transition; changing it while a
    /// transition is running is unspecified.
    ///
    /// ```rust
    /// let mut input = floatlabel_input::floatinput::Model::default();
    /// input.set_animation_steps(1);
    /// assert_eq!(input.animation_steps(), 2);
    /// ```
    pub fn set_animation_steps(&mut self, steps: u32) {
        self.animation_steps = steps.max(MIN_ANIMATION_STEPS);
    }

    /// Returns the current transition phase.
    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    /// Reports whether a transition is in flight.
    pub fn is_animating(&self) -> bool {
        self.phase.is_animating()
    }

    /// Returns the hint colors captured from the field at construction.
    pub fn hint_colors(&self) -> &HintColorSet {
        &self.hint_colors
    }

    /// Returns this instance's unique identifier.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Notifies the component that the field's text content changed.
    ///
    /// Call this from the host's content-changed hook on every mutation.
    /// Only emptiness *edges* matter: updates that leave emptiness unchanged
    /// are no-ops. On an edge:
    /// - the recorded emptiness is updated;
    /// - if the field is not shown, no transition starts (the label jumps
    ///   straight to its resting position on the next draw);
    /// - empty → non-empty starts a shrink transition;
    /// - non-empty → empty starts a grow transition and immediately
    ///   installs a transparent hint-color override on the field, so its
    ///   own placeholder does not show through the animated label.
    ///
    /// An edge arriving while a transition is already running abandons it:
    /// the new transition starts from its first frame, and frame messages
    /// scheduled by the old one are invalidated.
    pub fn text_changed<F: TextField>(&mut self, field: &mut F) {
        let is_empty = field.text_is_empty();
        if is_empty == self.was_empty {
            return;
        }

        self.was_empty = is_empty;

        if !field.is_shown() {
            return;
        }

        self.tag += 1;
        if is_empty {
            self.phase = AnimationPhase::Growing { frame: 0 };
            field.set_hint_colors(HintColorSet::solid(Color::TRANSPARENT));
        } else {
            self.phase = AnimationPhase::Shrinking { frame: 0 };
        }
    }

    /// Extra top padding the field should report, reserving room for the
    /// floating label above the text baseline regardless of animation
    /// state.
    ///
    /// Computed from font metrics at normal text size, consistent with the
    /// draw geometry: the field's compound top padding plus the scaled
    /// metric span.
    pub fn padding_top<F: TextField>(&self, field: &F) -> f32 {
        field.compound_padding_top() + field.font_metrics().span() * self.hint_scale
    }

    /// Returns a frame message addressed to this instance's current
    /// transition, as scheduled by [`draw`](Model::draw).
    pub fn frame_msg(&self) -> FrameMsg {
        FrameMsg {
            id: self.id,
            tag: self.tag,
        }
    }

    /// Reports whether `msg` is a frame message addressed to this instance
    /// and its current transition. When it returns true the host should run
    /// another draw pass.
    pub fn needs_repaint(&self, msg: &Msg) -> bool {
        msg.downcast_ref::<FrameMsg>()
            .map_or(false, |frame| frame.id == self.id && frame.tag == self.tag)
    }

    /// Creates the command that schedules the next draw pass.
    pub(super) fn next_frame(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        bubbletea_tick(FRAME_INTERVAL, move |_| Box::new(FrameMsg { id, tag }) as Msg)
    }
}
