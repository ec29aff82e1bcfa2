//! Tunable card geometry for a stack instantiation.

use thiserror::Error;

/// Rejected [`StackMetrics`] configurations.
///
/// Every divisor in the interpolation derives from `item_height`, so the
/// whole configuration is validated once at construction and evaluation
/// stays infallible.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum MetricsError {
    #[error("item_height must be positive and finite, got {0}")]
    ItemHeight(f32),
    #[error("item_min_height must be non-negative and finite, got {0}")]
    ItemMinHeight(f32),
    #[error("item_offset must be non-negative and finite, got {0}")]
    ItemOffset(f32),
    #[error("collapsed card ({min_height} + {offset}) does not fit in item_height {height}")]
    CollapsedTooTall {
        min_height: f32,
        offset: f32,
        height: f32,
    },
}

/// Card geometry constants, fixed for the lifetime of a stack.
///
/// The defaults reproduce the familiar today-view look: 150 pt expanded
/// cards with a 40 pt header strip and an 8 pt gap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackMetrics {
    item_height: f32,
    item_min_height: f32,
    item_offset: f32,
}

impl StackMetrics {
    /// Validates and builds a metrics set.
    pub fn new(item_height: f32, item_min_height: f32, item_offset: f32) -> Result<Self, MetricsError> {
        if !item_height.is_finite() || item_height <= 0.0 {
            return Err(MetricsError::ItemHeight(item_height));
        }
        if !item_min_height.is_finite() || item_min_height < 0.0 {
            return Err(MetricsError::ItemMinHeight(item_min_height));
        }
        if !item_offset.is_finite() || item_offset < 0.0 {
            return Err(MetricsError::ItemOffset(item_offset));
        }
        if item_min_height + item_offset > item_height {
            return Err(MetricsError::CollapsedTooTall {
                min_height: item_min_height,
                offset: item_offset,
                height: item_height,
            });
        }
        Ok(Self {
            item_height,
            item_min_height,
            item_offset,
        })
    }

    /// Nominal fully-expanded card height.
    pub fn item_height(&self) -> f32 {
        self.item_height
    }

    /// Collapsed card (header strip) height.
    pub fn item_min_height(&self) -> f32 {
        self.item_min_height
    }

    /// Base inter-card margin.
    pub fn item_offset(&self) -> f32 {
        self.item_offset
    }

    /// Delta past an item's slot at which its collapse transition begins.
    pub fn start_offset(&self) -> f32 {
        self.item_height - self.item_min_height - self.item_offset
    }

    /// Delta past an item's slot at which the collapse completes.
    pub fn collapse_span(&self) -> f32 {
        self.item_height + self.item_min_height
    }

    /// The nominal un-scrolled top of an item.
    pub fn slot(&self, index: usize) -> f32 {
        self.item_height * index as f32
    }

    /// Height a renderer gives a card whose interpolated shrink is `offset`.
    ///
    /// Cards never render shorter than the header strip plus its inset.
    pub fn card_height(&self, offset: f32) -> f32 {
        (self.item_height - offset).max(self.item_min_height + self.item_offset)
    }
}

impl Default for StackMetrics {
    fn default() -> Self {
        Self {
            item_height: 150.0,
            item_min_height: 40.0,
            item_offset: 8.0,
        }
    }
}
