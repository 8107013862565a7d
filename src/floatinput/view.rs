//! The draw pass for the floating-label input component.
//!
//! Drawing is a read-and-advance operation: each call renders exactly one
//! frame of the component's current state and, if a transition is in
//! flight, advances its frame counter and schedules the next pass. The
//! animation clock is the number of draw passes, not elapsed time.

use super::model::Model;
use super::types::AnimationPhase;
use bubbletea_rs::Cmd;
use crate::surface::{Canvas, TextField};

impl Model {
    /// Renders the floating label for the current frame and advances any
    /// in-flight transition.
    ///
    /// Invoke from the host's render callback on every redraw pass, after
    /// the field's own content has been drawn. Returns `Some` command
    /// whenever a transition was processed this pass — dispatch it so the
    /// next pass (or the finalizing repaint) gets scheduled; when it
    /// resolves into a message, check it with
    /// [`needs_repaint`](Model::needs_repaint) and repaint.
    ///
    /// Behavior, in order:
    /// - with no hint configured, draws nothing;
    /// - when idle and the field is empty, draws nothing — the component
    ///   never renders the resting full-size placeholder itself, that stays
    ///   the host field's own hint rendering;
    /// - when idle over text, draws the steady-state floating label;
    /// - when animating, draws one frame with size and baseline y linearly
    ///   interpolated in lockstep between the normal and floating
    ///   endpoints, then advances. A transition finalizes in the pass where
    ///   its counter reaches the step count: the phase returns to idle and,
    ///   after a grow, the captured hint colors are restored on the field.
    pub fn draw<F: TextField, C: Canvas>(&mut self, field: &mut F, canvas: &mut C) -> Option<Cmd> {
        let hint = match field.hint() {
            Some(h) if !h.is_empty() => h.to_string(),
            _ => return None,
        };

        if !self.phase.is_animating() && field.text_is_empty() {
            return None;
        }

        let mut paint = field.paint();
        paint.color = self.hint_colors.color_for_state(&field.draw_state());

        let normal_size = field.text_size();
        let floating_size = normal_size * self.hint_scale;

        let hint_x = field.compound_padding_left() + field.scroll_x();
        let normal_y = field.baseline();
        let mut floating_y = normal_y + field.font_metrics().top + field.scroll_y();
        // Visually tuned recentering; not a generic centering formula.
        floating_y += (floating_size - floating_y) / 2.0;

        let (frame, from_size, to_size, from_y, to_y) = match self.phase {
            AnimationPhase::Idle => {
                // Steady state: the floating label over existing text.
                paint.text_size = floating_size;
                canvas.draw_text(&hint, hint_x, floating_y, &paint);
                return None;
            }
            AnimationPhase::Shrinking { frame } => {
                (frame, normal_size, floating_size, normal_y, floating_y)
            }
            AnimationPhase::Growing { frame } => {
                (frame, floating_size, normal_size, floating_y, normal_y)
            }
        };

        paint.text_size = self.lerp(frame, from_size, to_size);
        let hint_y = self.lerp(frame, from_y, to_y);
        canvas.draw_text(&hint, hint_x, hint_y, &paint);

        let next = frame + 1;
        if next >= self.animation_steps {
            if matches!(self.phase, AnimationPhase::Growing { .. }) {
                field.set_hint_colors(self.hint_colors.clone());
            }
            self.phase = AnimationPhase::Idle;
        } else {
            self.phase = match self.phase {
                AnimationPhase::Shrinking { .. } => AnimationPhase::Shrinking { frame: next },
                AnimationPhase::Growing { .. } => AnimationPhase::Growing { frame: next },
                AnimationPhase::Idle => AnimationPhase::Idle,
            };
        }

        // One more pass is always requested: either the next frame of the
        // transition or the repaint that settles the finalized draw state.
        Some(self.next_frame())
    }

    // alpha hits exactly 1.0 at frame `animation_steps - 1`, so the last
    // drawn frame lands on the target endpoint. The step count is clamped
    // to at least 2, keeping the divisor positive.
    fn lerp(&self, frame: u32, from: f32, to: f32) -> f32 {
        let alpha = frame as f32 / (self.animation_steps - 1) as f32;
        from * (1.0 - alpha) + to * alpha
    }
}
