//! Core types for the floating-label input component.

/// Phase of the floating-label transition.
///
/// `Idle` is both the initial and the terminal state; the frame counter
/// lives inside the active variants, so an idle component by construction
/// carries no leftover frame count. Draw passes advance the counter; when it
/// reaches the configured step count the phase returns to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationPhase {
    /// No transition in flight; the label rests at its floating position
    /// (or is not drawn at all while the field is empty).
    #[default]
    Idle,
    /// The label is moving from full size at the baseline to the small
    /// floating position. Started by an empty → non-empty edge.
    Shrinking {
        /// Zero-based index of the next frame to draw.
        frame: u32,
    },
    /// The label is moving from the floating position back to full size at
    /// the baseline. Started by a non-empty → empty edge.
    Growing {
        /// Zero-based index of the next frame to draw.
        frame: u32,
    },
}

impl AnimationPhase {
    /// Reports whether a transition is in flight.
    pub fn is_animating(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// Message indicating that another draw pass should run to advance an
/// in-flight transition.
///
/// Carries the identity of the component instance and the tag of the
/// transition that scheduled it, so stale frames from an abandoned
/// transition — or frames addressed to another instance — are ignored.
#[derive(Debug, Clone)]
pub struct FrameMsg {
    pub(super) id: i64,
    pub(super) tag: i64,
}
