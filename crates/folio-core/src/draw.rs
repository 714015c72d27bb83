//! Draw instruction tree emitted by page animations and replayed into a host
//! rasterizer.
//!
//! Variants never touch pixels. They describe a frame as a small tree of
//! clips, transforms, page layers and fills; [`execute_draw_instructions`]
//! walks that tree against a [`PageCanvas`], keeping every push matched by a
//! pop.

use smallvec::SmallVec;

use folio_ui_graphics::{BlendMode, Brush, ClipOp, Color, ColorStop, Path, Point, Transform};

use crate::page::PageType;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawInstruction {
    /// Host-painted page background for the slot.
    Background(PageType),
    /// The recorded content layer for the slot.
    Layer(PageType),
    Transformed {
        transform: Transform,
        children: Vec<DrawInstruction>,
    },
    Clipped {
        path: Path,
        op: ClipOp,
        children: Vec<DrawInstruction>,
    },
    /// Fills the whole viewport (subject to the enclosing clips).
    Fill { brush: Brush, blend: BlendMode },
}

impl DrawInstruction {
    /// Background followed by content for one slot.
    pub fn page(slot: PageType) -> Vec<DrawInstruction> {
        vec![DrawInstruction::Background(slot), DrawInstruction::Layer(slot)]
    }

    /// Wraps `children` in `transform`, or returns them unwrapped when the
    /// transform is the identity.
    pub fn transformed(
        transform: Transform,
        children: Vec<DrawInstruction>,
    ) -> Vec<DrawInstruction> {
        if transform.is_identity() {
            children
        } else {
            vec![DrawInstruction::Transformed {
                transform,
                children,
            }]
        }
    }

    pub fn clipped(path: Path, op: ClipOp, children: Vec<DrawInstruction>) -> DrawInstruction {
        DrawInstruction::Clipped { path, op, children }
    }

    pub fn fill(brush: Brush) -> DrawInstruction {
        DrawInstruction::Fill {
            brush,
            blend: BlendMode::SrcOver,
        }
    }

    pub fn fill_blended(color: Color, blend: BlendMode) -> DrawInstruction {
        DrawInstruction::Fill {
            brush: Brush::solid(color),
            blend,
        }
    }
}

/// Slots whose layers `instructions` composites, in first-use order.
pub fn pages_referenced(instructions: &[DrawInstruction]) -> SmallVec<[PageType; 3]> {
    fn visit(instructions: &[DrawInstruction], out: &mut SmallVec<[PageType; 3]>) {
        for instruction in instructions {
            match instruction {
                DrawInstruction::Layer(slot) => {
                    if !out.contains(slot) {
                        out.push(*slot);
                    }
                }
                DrawInstruction::Transformed { children, .. }
                | DrawInstruction::Clipped { children, .. } => visit(children, out),
                DrawInstruction::Background(_) | DrawInstruction::Fill { .. } => {}
            }
        }
    }

    let mut out = SmallVec::new();
    visit(instructions, &mut out);
    out
}

/// Host rasterizer surface.
///
/// `push_clip` and `push_transform` open a scope that the matching `pop`
/// restores.
pub trait PageCanvas {
    type Layer;

    /// Records the slot's content once for this frame.
    fn record_layer(&mut self, slot: PageType) -> Self::Layer;
    fn fill_background(&mut self, slot: PageType);
    fn composite_layer(&mut self, layer: &Self::Layer);
    fn push_clip(&mut self, path: &Path, op: ClipOp);
    fn push_transform(&mut self, transform: &Transform);
    fn pop(&mut self);
    /// Fills the viewport with a gradient running from `start` to `end`.
    fn draw_linear_gradient(&mut self, stops: &[ColorStop], start: Point, end: Point);
    /// Fills the viewport with a solid color.
    fn draw_rect(&mut self, color: Color, blend: BlendMode);
}

/// Layers recorded for one frame, at most one per slot.
#[derive(Debug)]
pub struct PageLayers<L> {
    layers: SmallVec<[(PageType, L); 3]>,
}

impl<L> Default for PageLayers<L> {
    fn default() -> Self {
        Self {
            layers: SmallVec::new(),
        }
    }
}

impl<L> PageLayers<L> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records every slot `instructions` composites, once each.
    pub fn record<C>(canvas: &mut C, instructions: &[DrawInstruction]) -> Self
    where
        C: PageCanvas<Layer = L>,
    {
        let mut layers = Self::new();
        for slot in pages_referenced(instructions) {
            layers.insert(slot, canvas.record_layer(slot));
        }
        layers
    }

    pub fn insert(&mut self, slot: PageType, layer: L) {
        match self.layers.iter_mut().find(|(existing, _)| *existing == slot) {
            Some(entry) => entry.1 = layer,
            None => self.layers.push((slot, layer)),
        }
    }

    pub fn get(&self, slot: PageType) -> Option<&L> {
        self.layers
            .iter()
            .find(|(existing, _)| *existing == slot)
            .map(|(_, layer)| layer)
    }

    pub fn slots(&self) -> impl Iterator<Item = PageType> + '_ {
        self.layers.iter().map(|(slot, _)| *slot)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

/// Replays `instructions` into `canvas`. Layers missing from `layers` are
/// skipped with a trace message.
pub fn execute_draw_instructions<C: PageCanvas>(
    canvas: &mut C,
    layers: &PageLayers<C::Layer>,
    instructions: &[DrawInstruction],
) {
    for instruction in instructions {
        match instruction {
            DrawInstruction::Background(slot) => canvas.fill_background(*slot),
            DrawInstruction::Layer(slot) => match layers.get(*slot) {
                Some(layer) => canvas.composite_layer(layer),
                None => log::trace!("no layer recorded for {slot:?}"),
            },
            DrawInstruction::Transformed {
                transform,
                children,
            } => {
                canvas.push_transform(transform);
                execute_draw_instructions(canvas, layers, children);
                canvas.pop();
            }
            DrawInstruction::Clipped { path, op, children } => {
                canvas.push_clip(path, *op);
                execute_draw_instructions(canvas, layers, children);
                canvas.pop();
            }
            DrawInstruction::Fill { brush, blend } => match brush {
                Brush::Solid(color) => canvas.draw_rect(*color, *blend),
                Brush::LinearGradient { stops, start, end } => {
                    canvas.draw_linear_gradient(stops, *start, *end)
                }
            },
        }
    }
}

#[cfg(test)]
#[path = "tests/draw_tests.rs"]
mod tests;
