//! Tunables for the gesture state machine.

use folio_animation::AnimationType;

use crate::gesture_constants::{EDGE_ZONE_FRACTION, SWIPE_THRESHOLD};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageTurnConfig {
    /// See [`SWIPE_THRESHOLD`].
    pub swipe_threshold: f32,
    /// See [`EDGE_ZONE_FRACTION`].
    pub edge_zone_fraction: f32,
    /// Animation used to settle a released drag or a tap.
    pub settle_animation: AnimationType,
}

impl Default for PageTurnConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: SWIPE_THRESHOLD,
            edge_zone_fraction: EDGE_ZONE_FRACTION,
            settle_animation: AnimationType::default(),
        }
    }
}

impl PageTurnConfig {
    pub fn with_swipe_threshold(mut self, fraction: f32) -> Self {
        self.swipe_threshold = fraction;
        self
    }

    pub fn with_edge_zone_fraction(mut self, fraction: f32) -> Self {
        self.edge_zone_fraction = fraction;
        self
    }

    pub fn with_settle_animation(mut self, animation: AnimationType) -> Self {
        self.settle_animation = animation;
        self
    }
}
