//! Host seams: the editable field being decorated and the canvas it draws on.
//!
//! The floating-label component does not subclass a toolkit view; it
//! decorates one. The host exposes its editable-text primitive through
//! [`TextField`] (measurement and state queries, plus the hint-color
//! override) and its rendering surface through [`Canvas`] (positioned text
//! draw commands). All coordinates are pixel-space floats in the host's
//! convention: y grows downward and text is positioned by its baseline.
//!
//! Both traits are deliberately small so tests can script a field and record
//! canvas output without a real rendering surface.

use crate::color::{Color, DrawState, HintColorSet};

/// Font extents reported by the host's text renderer, at the field's normal
/// text size.
///
/// `top` is the highest glyph extent relative to the baseline and is
/// negative (above the baseline); `bottom` is the lowest extent and is
/// positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    /// Highest extent above the baseline (negative).
    pub top: f32,
    /// Lowest extent below the baseline (positive).
    pub bottom: f32,
}

impl FontMetrics {
    /// Full vertical span of the font, `bottom - top`.
    pub fn span(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Drawable text attributes.
///
/// The component copies the field's current paint, then overrides the color
/// and text size per frame before issuing the draw command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    /// Text size in pixels.
    pub text_size: f32,
    /// Paint color.
    pub color: Color,
}

/// The host-provided editable field being decorated.
///
/// Inbound queries supply everything the draw geometry needs; the single
/// outbound call, [`set_hint_colors`](TextField::set_hint_colors), lets the
/// component temporarily hide the field's own placeholder rendering.
pub trait TextField {
    /// Reports whether the field's text content is empty. Only emptiness is
    /// observed; the component never reads the text itself.
    fn text_is_empty(&self) -> bool;

    /// The configured hint (placeholder) string, if any.
    fn hint(&self) -> Option<&str>;

    /// Reports whether the field is currently visible on screen.
    fn is_shown(&self) -> bool;

    /// The field's normal text size in pixels.
    fn text_size(&self) -> f32;

    /// A snapshot of the field's current paint (font attributes at normal
    /// text size).
    fn paint(&self) -> Paint;

    /// Font metrics at the field's normal text size.
    fn font_metrics(&self) -> FontMetrics;

    /// Baseline y of the field's text.
    fn baseline(&self) -> f32;

    /// Left compound padding (padding plus any inset drawables).
    fn compound_padding_left(&self) -> f32;

    /// Top compound padding, before the floating-label reservation.
    fn compound_padding_top(&self) -> f32;

    /// Horizontal scroll offset of the field's content.
    fn scroll_x(&self) -> f32;

    /// Vertical scroll offset of the field's content.
    fn scroll_y(&self) -> f32;

    /// The field's current interaction state.
    fn draw_state(&self) -> DrawState;

    /// The hint colors configured on the field. Captured once when the
    /// component is constructed.
    fn hint_colors(&self) -> HintColorSet;

    /// Replaces the colors the field uses for its own placeholder
    /// rendering. The component installs a transparent override for the
    /// duration of a grow transition and restores the captured set when the
    /// transition completes.
    fn set_hint_colors(&mut self, colors: HintColorSet);
}

/// The host rendering surface.
pub trait Canvas {
    /// Draws `text` with its baseline at `(x, y)` using `paint`.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, paint: &Paint);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_metrics_span() {
        let metrics = FontMetrics {
            top: -18.0,
            bottom: 5.0,
        };
        assert_eq!(metrics.span(), 23.0);
    }
}
