//! A [`PageCanvas`] that records what it is asked to do.

use folio_core::{PageCanvas, PageType};
use folio_ui_graphics::{BlendMode, ClipOp, Color, ColorStop, Path, Point, Rect, Transform};

/// Layer handle handed out by [`RecordingCanvas::record_layer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecordedLayer {
    pub slot: PageType,
}

#[derive(Clone, Debug, PartialEq)]
pub enum CanvasOp {
    RecordLayer(PageType),
    FillBackground {
        slot: PageType,
        transform: Transform,
        clip_depth: usize,
    },
    CompositeLayer {
        slot: PageType,
        /// Accumulated transform in effect when the layer was drawn.
        transform: Transform,
        clip_depth: usize,
    },
    PushClip {
        op: ClipOp,
        bounds: Option<Rect>,
    },
    PushTransform(Transform),
    Pop,
    LinearGradient {
        stops: Vec<ColorStop>,
        start: Point,
        end: Point,
    },
    Rect {
        color: Color,
        blend: BlendMode,
    },
}

#[derive(Clone, Copy, Debug)]
enum Scope {
    Clip,
    /// Remembers the transform to restore.
    Transform(Transform),
}

/// Records every canvas call and tracks scope nesting.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    ops: Vec<CanvasOp>,
    scopes: Vec<Scope>,
    transform: Transform,
    clip_depth: usize,
    max_depth: usize,
    unmatched_pops: usize,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[CanvasOp] {
        &self.ops
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Slots composited, in paint order (repeats included).
    pub fn composited_slots(&self) -> Vec<PageType> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                CanvasOp::CompositeLayer { slot, .. } => Some(*slot),
                _ => None,
            })
            .collect()
    }

    /// Slots whose layers were recorded this frame.
    pub fn recorded_slots(&self) -> Vec<PageType> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                CanvasOp::RecordLayer(slot) => Some(*slot),
                _ => None,
            })
            .collect()
    }

    /// Transform in effect the first time `slot` was composited.
    pub fn composite_transform(&self, slot: PageType) -> Option<Transform> {
        self.ops.iter().find_map(|op| match op {
            CanvasOp::CompositeLayer {
                slot: drawn,
                transform,
                ..
            } if *drawn == slot => Some(*transform),
            _ => None,
        })
    }

    pub fn gradients(&self) -> Vec<(Point, Point)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                CanvasOp::LinearGradient { start, end, .. } => Some((*start, *end)),
                _ => None,
            })
            .collect()
    }

    pub fn clip_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, CanvasOp::PushClip { .. }))
            .count()
    }

    /// Deepest clip/transform nesting reached.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn is_balanced(&self) -> bool {
        self.scopes.is_empty() && self.unmatched_pops == 0
    }

    pub fn assert_balanced(&self) {
        assert!(
            self.is_balanced(),
            "canvas scopes unbalanced: {} still open, {} unmatched pops",
            self.scopes.len(),
            self.unmatched_pops
        );
    }

    fn push_scope(&mut self, scope: Scope) {
        self.scopes.push(scope);
        self.max_depth = self.max_depth.max(self.scopes.len());
    }
}

impl PageCanvas for RecordingCanvas {
    type Layer = RecordedLayer;

    fn record_layer(&mut self, slot: PageType) -> RecordedLayer {
        self.ops.push(CanvasOp::RecordLayer(slot));
        RecordedLayer { slot }
    }

    fn fill_background(&mut self, slot: PageType) {
        self.ops.push(CanvasOp::FillBackground {
            slot,
            transform: self.transform,
            clip_depth: self.clip_depth,
        });
    }

    fn composite_layer(&mut self, layer: &RecordedLayer) {
        self.ops.push(CanvasOp::CompositeLayer {
            slot: layer.slot,
            transform: self.transform,
            clip_depth: self.clip_depth,
        });
    }

    fn push_clip(&mut self, path: &Path, op: ClipOp) {
        self.ops.push(CanvasOp::PushClip {
            op,
            bounds: path.bounds(),
        });
        self.clip_depth += 1;
        self.push_scope(Scope::Clip);
    }

    fn push_transform(&mut self, transform: &Transform) {
        self.ops.push(CanvasOp::PushTransform(*transform));
        self.push_scope(Scope::Transform(self.transform));
        // Nested transforms apply innermost first.
        self.transform = transform.then(&self.transform);
    }

    fn pop(&mut self) {
        self.ops.push(CanvasOp::Pop);
        match self.scopes.pop() {
            Some(Scope::Clip) => self.clip_depth -= 1,
            Some(Scope::Transform(previous)) => self.transform = previous,
            None => {
                log::warn!("pop without a matching push");
                self.unmatched_pops += 1;
            }
        }
    }

    fn draw_linear_gradient(&mut self, stops: &[ColorStop], start: Point, end: Point) {
        self.ops.push(CanvasOp::LinearGradient {
            stops: stops.to_vec(),
            start,
            end,
        });
    }

    fn draw_rect(&mut self, color: Color, blend: BlendMode) {
        self.ops.push(CanvasOp::Rect { color, blend });
    }
}
