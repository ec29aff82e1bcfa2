//! Scroll-position-to-visual-property interpolation.

use crate::metrics::StackMetrics;

/// Visual properties a renderer applies to one card for one frame.
///
/// Derived, never stored: the same `(location, index)` pair always produces
/// the same record.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CardVisuals {
    /// How far the card has scrolled past its slot, clamped to
    /// `[0, item_height]`. Drives the height shrink via
    /// [`StackMetrics::card_height`].
    pub offset: f32,
    /// Uniform scale in `[0, 1]`.
    pub scale: f32,
    /// Opacity in `[0, 1]`.
    pub opacity: f32,
    /// Downward translate applied while the card peels away.
    pub translate: f32,
    /// Bottom margin to the next card.
    pub margin: f32,
}

/// The stack/peel interpolation for a fixed metrics set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackLayout {
    metrics: StackMetrics,
}

impl StackLayout {
    pub fn new(metrics: StackMetrics) -> Self {
        Self { metrics }
    }

    pub fn metrics(&self) -> &StackMetrics {
        &self.metrics
    }

    /// Computes the visual properties of the card at `index` for the given
    /// scroll location.
    ///
    /// Positive location means the stack has scrolled further down; each card
    /// passes through three regimes as the location sweeps past its slot:
    /// fully expanded, a collapse transition, and fully collapsed. The
    /// function is total over any real `location`, including overscroll
    /// values far outside the stack.
    pub fn visuals_at(&self, location: f32, index: usize) -> CardVisuals {
        let m = &self.metrics;
        let delta = location - m.slot(index);
        let offset = delta.clamp(0.0, m.item_height());

        if delta < m.start_offset() {
            return CardVisuals {
                offset,
                scale: 1.0,
                opacity: 1.0,
                translate: 0.0,
                margin: m.item_offset(),
            };
        }

        if delta >= m.collapse_span() {
            return CardVisuals {
                offset,
                scale: 0.0,
                opacity: 0.0,
                translate: 0.0,
                margin: 0.0,
            };
        }

        // Collapse transition: the card fades over half its height, shrinks
        // slightly, and drifts downward as the next card rides over it.
        let progress = delta - m.start_offset();
        let opacity = (1.0 - progress / (m.item_height() / 2.0)).clamp(0.0, 1.0);
        let scale = (1.0 - progress / (m.item_height() * 5.0)).clamp(0.0, 1.0);
        let translate = (progress / 10.0).max(0.0);
        let margin = (m.item_offset() - m.item_offset() * progress / m.item_height()).max(0.0);

        CardVisuals {
            offset,
            scale,
            opacity,
            translate,
            margin,
        }
    }

    /// Visuals for every card of an `item_count`-long stack, in order.
    pub fn visuals(
        &self,
        location: f32,
        item_count: usize,
    ) -> impl Iterator<Item = CardVisuals> + '_ {
        (0..item_count).map(move |index| self.visuals_at(location, index))
    }
}

/// Rubber-band translate for overscroll above the top of the stack.
///
/// Applied by the host to the whole stack container, independent of
/// [`StackLayout::visuals_at`]. Zero for in-range and downward locations.
pub fn overscroll_translate(location: f32) -> f32 {
    (-location).max(0.0)
}
