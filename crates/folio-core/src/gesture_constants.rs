//! Shared gesture thresholds for page turning.
//!
//! Every threshold is a fraction of the viewport width so the same gesture
//! feels identical on phones and tablets.

/// Fraction of the viewport width a drag must travel before release commits
/// a page turn. Shorter drags settle back to the page they started on.
pub const SWIPE_THRESHOLD: f32 = 0.2;

/// Width of the tap zone at each horizontal edge, as a fraction of the
/// viewport width. Taps in the left zone go back, taps in the right zone go
/// forward, taps in between do nothing.
pub const EDGE_ZONE_FRACTION: f32 = 0.3;
