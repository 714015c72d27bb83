use folio_core::{BlendMode, ClipOp, Color, ColorStop, PageCanvas, PageType, Path, Point, Transform};

/// Counts what a frame asks for and traces each call.
#[derive(Debug, Default)]
pub struct TraceCanvas {
    pub layers: usize,
    pub composites: usize,
    pub clips: usize,
    pub gradients: usize,
    depth: usize,
}

impl TraceCanvas {
    pub fn summary(&self) -> String {
        format!(
            "{} layers, {} composites, {} clips, {} gradients",
            self.layers, self.composites, self.clips, self.gradients
        )
    }
}

impl PageCanvas for TraceCanvas {
    type Layer = PageType;

    fn record_layer(&mut self, slot: PageType) -> PageType {
        self.layers += 1;
        slot
    }

    fn fill_background(&mut self, slot: PageType) {
        log::trace!("{:indent$}background {slot:?}", "", indent = self.depth * 2);
    }

    fn composite_layer(&mut self, layer: &PageType) {
        self.composites += 1;
        log::trace!("{:indent$}layer {layer:?}", "", indent = self.depth * 2);
    }

    fn push_clip(&mut self, path: &Path, op: ClipOp) {
        self.clips += 1;
        log::trace!(
            "{:indent$}clip {op:?} {:?}",
            "",
            path.bounds(),
            indent = self.depth * 2
        );
        self.depth += 1;
    }

    fn push_transform(&mut self, transform: &Transform) {
        log::trace!("{:indent$}transform {transform:?}", "", indent = self.depth * 2);
        self.depth += 1;
    }

    fn pop(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn draw_linear_gradient(&mut self, stops: &[ColorStop], start: Point, end: Point) {
        self.gradients += 1;
        log::trace!(
            "{:indent$}gradient {} stops {start:?} -> {end:?}",
            "",
            stops.len(),
            indent = self.depth * 2
        );
    }

    fn draw_rect(&mut self, color: Color, blend: BlendMode) {
        log::trace!("{:indent$}rect {color:?} {blend:?}", "", indent = self.depth * 2);
    }
}
